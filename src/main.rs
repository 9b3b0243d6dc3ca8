use clap::Parser;
use ytoverlap::cli::Config;

fn main() {
    let config = Config::parse();
    ytoverlap::cli::run(config)
}
