//! HTTP plumbing for the YouTube Data API.
//!
//! The API answers failures with a JSON envelope like
//! `{"error": {"code": 403, "message": "..."}}`. When one is present its
//! message is carried on [`HTTPError::Status`], since "quota exceeded"
//! and "API key not valid" both arrive as a bare 403 or 400 otherwise.

use reqwest::header::{self, HeaderMap};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Why an HTTP exchange with the API failed.
#[derive(Debug, Error)]
pub enum HTTPError {
    /// The request could not be built or sent, or its body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned HTTP {status}: {}", .reason.as_deref().unwrap_or("no reason given"))]
    Status {
        status: StatusCode,
        reason: Option<String>,
    },

    /// The API answered with something other than JSON.
    #[error("expected a JSON response but got {}", .0.as_deref().unwrap_or("no Content-Type"))]
    NotJson(Option<String>),
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Builds the client used for every request, identified as
/// `ytoverlap/<version>`.
pub fn client() -> HTTPResult<Client> {
    let client = Client::builder().user_agent(user_agent()).build()?;
    Ok(client)
}

fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Reads the body of `resp` if it is a successful JSON response.
pub async fn json_body(resp: Response) -> HTTPResult<String> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(HTTPError::Status {
            status,
            reason: api_reason(&body),
        });
    }
    ensure_json(resp.headers())?;
    Ok(resp.text().await?)
}

/// The `error.message` of an API error envelope, if `body` is one.
fn api_reason(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
}

fn ensure_json(headers: &HeaderMap) -> HTTPResult<()> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap_or("<unreadable>"));
    match content_type {
        Some(content_type) if content_type.starts_with("application/json") => Ok(()),
        other => Err(HTTPError::NotJson(other.map(String::from))),
    }
}
