//! Custom error types for rustscholar.
//!
//! Every fallible library function returns `Result<T, ScholarError>`. The
//! upstream failure kinds are kept apart so callers can react to a rate limit
//! differently from a server error or an API-reported failure.

use thiserror::Error;

/// Main error type for rustscholar operations.
#[derive(Debug, Error)]
pub enum ScholarError {
    /// Missing or invalid configuration (e.g. no API key)
    #[error("Config error: {0}")]
    Config(String),

    /// Author identifier or other user input could not be understood
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// SerpApi answered HTTP 429
    #[error("Rate limited by SerpApi (HTTP 429): {body}")]
    RateLimited {
        /// Response body, as returned
        body: String,
    },

    /// SerpApi answered with any other HTTP status >= 400
    #[error("HTTP {status}: {body}")]
    UpstreamHttp {
        /// HTTP status code
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// HTTP 2xx, but `search_metadata.status` was not "Success"
    #[error("SerpApi status=\"{status}\": {message}")]
    UpstreamApi {
        /// Status reported in `search_metadata.status`
        status: String,
        /// Message reported in the top-level `error` field
        message: String,
    },

    /// Request did not complete within the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Network/HTTP transport error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// SQLite storage error
    #[error("Persistence error: {0}")]
    Persistence(#[from] rusqlite::Error),

    /// Operation no longer offered by the upstream service
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScholarError {
    /// True for HTTP 429, the one upstream failure worth backing off from.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// True for failures reported by SerpApi itself (HTTP status or JSON status).
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. } | Self::UpstreamHttp { .. } | Self::UpstreamApi { .. }
        )
    }
}

/// Result type alias using `ScholarError`
pub type Result<T> = std::result::Result<T, ScholarError>;
