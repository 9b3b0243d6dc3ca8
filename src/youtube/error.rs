//! Errors raised while talking to the YouTube Data API.

use crate::http::HTTPError;
use std::num::ParseIntError;
use thiserror::Error;

/// Result type for YouTube API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A YouTube API error.
///
/// None of these are recovered from anywhere in the pipeline: the first
/// error aborts the whole comparison.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be made, or the API answered with an error status.
    #[error("Transport error: {0}")]
    Transport(#[from] HTTPError),

    /// The response body was not the JSON shape we expected.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A numeric field held something that is not a non-negative integer.
    #[error("Could not convert {field} value {value:?} to an integer: {source}")]
    TypeConversion {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The channel lookup returned no channels.
    #[error("No channel found for \"{0}\"")]
    ChannelNotFound(String),
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::MalformedResponse(error.to_string())
    }
}

/// Parses a string-typed count, like `"subscriberCount": "1234"`.
pub(crate) fn parse_count(field: &'static str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|source| Error::TypeConversion {
            field,
            value: value.to_string(),
            source,
        })
}
