//! Runtime configuration for the SerpApi client.

use crate::error::{Result, ScholarError};
use std::fmt;
use std::time::Duration;

/// SerpApi search endpoint
pub const SERPAPI_URL: &str = "https://serpapi.com/search.json";

/// Environment variable holding the SerpApi key
pub const API_KEY_ENV: &str = "SERPAPI_API_KEY";

/// Interface language sent as `hl`
pub const DEFAULT_LANGUAGE: &str = "en";

/// Request timeout applied to every SerpApi call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Articles fetched per author when no maximum is given
pub const DEFAULT_MAX_ARTICLES: usize = 3;

/// Profile view never shows more than this many articles
pub const PROFILE_ARTICLE_CAP: usize = 5;

/// SQLite file used when no `--db` is given
pub const DEFAULT_DB_PATH: &str = "scholar.db";

/// Client and store settings.
///
/// Construct with [`Config::new`], which rejects a missing or blank API key
/// before anything touches the network.
#[derive(Clone)]
pub struct Config {
    /// SerpApi key
    pub api_key: String,
    /// Endpoint URL (overridden in tests with a mock server)
    pub base_url: String,
    /// `hl` parameter
    pub language: String,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Config {
    /// Create a config with the given API key and default settings.
    ///
    /// # Errors
    ///
    /// Returns `ScholarError::Config` if the key is absent or blank.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                ScholarError::Config(format!("{} is not set or is blank", API_KEY_ENV))
            })?;

        Ok(Self {
            api_key,
            base_url: SERPAPI_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Read the API key from `SERPAPI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::new(std::env::var(API_KEY_ENV).ok())
    }

    /// Point the client at another endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_config_error() {
        assert!(matches!(Config::new(None), Err(ScholarError::Config(_))));
        assert!(matches!(
            Config::new(Some("   ".to_string())),
            Err(ScholarError::Config(_))
        ));
    }

    #[test]
    fn test_defaults() {
        let config = Config::new(Some(" key ".to_string())).expect("valid key");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, SERPAPI_URL);
        assert_eq!(config.language, "en");
        assert_eq!(config.request_timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_debug_hides_key() {
        let config = Config::new(Some("super-secret".to_string())).expect("valid key");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }
}
