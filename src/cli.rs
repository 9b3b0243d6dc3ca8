//! Drives the command-line program.

use crate::auth::{ApiKey, AuthError};
use crate::conf::{DEFAULT_BASE_URL, DEFAULT_MAX_RESULTS, Settings};
use crate::overlap::compute_overlap;
use crate::view::{LabeledReport, Viewable};
use crate::youtube::{self, YouTubeClient};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::debug;
use std::io::{self, BufRead, Write};
use std::process;
use thiserror::Error;

const FIRST_PROMPT: &str = "Enter name or ID of first YouTube channel: ";
const SECOND_PROMPT: &str = "Enter name or ID of second YouTube channel: ";

/// Prints `message` to stderr and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Compares two YouTube channels by shared subscribers and views", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Name, handle, or ID of the first channel (prompted for if omitted)
    first: Option<String>,

    /// Name, handle, or ID of the second channel (prompted for if omitted)
    second: Option<String>,

    /// YouTube Data API key [default: $YOUTUBE_API_KEY]
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Number of results to request per page
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_RESULTS)]
    page_size: u32,

    /// Base URL of the YouTube Data API
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL, hide = true)]
    api_base: String,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// The API key given with `--api-key`, or else the one in `$YOUTUBE_API_KEY`.
    pub fn api_key(&self) -> Result<ApiKey, AuthError> {
        match &self.api_key {
            Some(api_key) => ApiKey::new(api_key),
            None => ApiKey::from_env(),
        }
    }

    /// Request settings built from the command line and environment.
    pub fn settings(&self) -> Result<Settings, AuthError> {
        let settings = Settings::new(self.api_key()?)
            .base_url(&self.api_base)
            .max_results(self.page_size);
        Ok(settings)
    }

    /// The two channels to compare, prompting on `output` and reading from
    /// `input` for any that were not given on the command line.
    pub fn channels<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<(String, String)> {
        let first = match &self.first {
            Some(channel) => channel.clone(),
            None => prompt(input, output, FIRST_PROMPT)?,
        };
        let second = match &self.second {
            Some(channel) => channel.clone(),
            None => prompt(input, output, SECOND_PROMPT)?,
        };
        Ok((first, second))
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no channel was entered",
        ));
    }
    Ok(line.trim().to_string())
}

/// An error that stops the program.
#[derive(Debug, Error)]
pub enum Error {
    /// No usable API key.
    #[error("No usable API key: {0}. Set $YOUTUBE_API_KEY or pass --api-key.")]
    Auth(#[from] AuthError),

    /// Reading channel names from the terminal failed.
    #[error("Could not read channel name: {0}")]
    Prompt(#[from] io::Error),

    /// Talking to YouTube failed.
    #[error("{0}")]
    YouTube(#[from] youtube::Error),
}

/// Runs the command-line program.
#[derive(Debug)]
pub struct Runner {
    first: String,
    second: String,
    client: YouTubeClient,
}

impl Runner {
    /// Create a new program runner using the given `config`.
    ///
    /// Fails if no API key is configured or if a channel name cannot be
    /// read from the terminal.
    pub fn new(config: &Config) -> Result<Runner, Error> {
        let settings = config.settings()?;
        debug!("Using {settings:?}");

        let stdin = io::stdin();
        let (first, second) = config.channels(&mut stdin.lock(), &mut io::stdout())?;
        let client = YouTubeClient::new(settings)?;
        Ok(Self {
            first,
            second,
            client,
        })
    }

    /// Compares the two configured channels and returns the printable report.
    pub async fn run(&self) -> Result<String, Error> {
        let report = compute_overlap(&self.client, &self.first, &self.second).await?;
        Ok(LabeledReport::new(&report, &self.first, &self.second).view())
    }
}

/// Runs the program to completion, exiting the process on failure.
pub fn run(config: Config) {
    let _ = env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .try_init();

    let runner = Runner::new(&config).unwrap_or_else(|err| die(1, &err.to_string()));
    let runtime = tokio::runtime::Runtime::new()
        .unwrap_or_else(|err| die(1, &format!("Could not start async runtime: {err}")));

    match runtime.block_on(runner.run()) {
        Ok(output) => println!("{output}"),
        Err(err) => die(1, &err.to_string()),
    }
}
