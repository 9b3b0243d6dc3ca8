//! The YouTube Data API key.

use std::{env, fmt};
use thiserror::Error;

/// Environment variable that holds the YouTube Data API key.
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// An API key, appended as `key=...` to every request.
///
/// Surrounding whitespace is trimmed, and blank keys are refused up front
/// so a bad key fails before any request is sent.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps `key`, refusing it if it is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use ytoverlap::auth::ApiKey;
    ///
    /// let key = ApiKey::new(" AIzaExample\n").unwrap();
    /// assert_eq!(key.expose(), "AIzaExample");
    /// assert!(ApiKey::new("   ").is_err());
    /// ```
    pub fn new(key: impl AsRef<str>) -> Result<Self, AuthError> {
        match key.as_ref().trim() {
            "" => Err(AuthError::Blank),
            key => Ok(Self(key.to_string())),
        }
    }

    /// Reads the key from [`API_KEY_ENV`].
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_var(API_KEY_ENV)
    }

    fn from_var(name: &str) -> Result<Self, AuthError> {
        match env::var(name) {
            Ok(value) => Self::new(value),
            Err(env::VarError::NotPresent) => Err(AuthError::Unset(name.to_string())),
            Err(env::VarError::NotUnicode(_)) => Err(AuthError::NotUnicode(name.to_string())),
        }
    }

    /// The key itself, for building request URLs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Settings are debug-logged at startup.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Why no usable API key could be found.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("${0} is not set")]
    Unset(String),

    #[error("${0} is not valid Unicode")]
    NotUnicode(String),

    #[error("the API key is blank")]
    Blank,
}
