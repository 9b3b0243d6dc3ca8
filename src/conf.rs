//! Runtime configuration for talking to the YouTube Data API.

use crate::auth::ApiKey;

/// Base URL of the YouTube Data API, version 3.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Number of results requested per page from paginated list endpoints.
pub const DEFAULT_MAX_RESULTS: u32 = 1000;

/// Settings shared by every component that issues API requests.
///
/// Settings are built once, up front, and handed to the service that
/// talks to YouTube; nothing reads the API key from global state.
///
/// # Examples
///
/// ```
/// use ytoverlap::auth::ApiKey;
/// use ytoverlap::conf::Settings;
///
/// let settings = Settings::new(ApiKey::new("key").unwrap()).max_results(50);
/// assert_eq!(settings.page_size(), 50);
/// assert_eq!(settings.api_base(), "https://www.googleapis.com/youtube/v3");
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct Settings {
    api_key: ApiKey,
    base_url: String,
    max_results: u32,
}

impl Settings {
    /// Creates settings with the given API key and default values for
    /// everything else.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: String::from(DEFAULT_BASE_URL),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Sets the base URL that endpoint paths are appended to.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the page size requested from paginated endpoints.
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Key sent with every request.
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Base URL of the API, without a trailing slash.
    pub fn api_base(&self) -> &str {
        &self.base_url
    }

    /// Page size requested from paginated endpoints.
    pub fn page_size(&self) -> u32 {
        self.max_results
    }
}
