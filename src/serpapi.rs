//! SerpApi client for the Google Scholar author engines.
//!
//! One client covers both query modes of the tool: fetching an author's
//! articles (for storage or for a profile view) and searching authors by
//! name. The latter engine has been retired upstream and is refused locally.

use crate::config::Config;
use crate::error::{Result, ScholarError};
use crate::mapper;
use crate::models::{AuthorProfile, AuthorSearchResult, FetchResult};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt;
use tracing::{debug, info, warn};
use url::Url;

/// Engine serving a single author's profile and articles
pub const ENGINE_AUTHOR: &str = "google_scholar_author";

/// Engine for profile search by name (discontinued by SerpApi)
pub const ENGINE_PROFILES: &str = "google_scholar_profiles";

const USER_AGENT: &str = concat!("rustscholar/", env!("CARGO_PKG_VERSION"));

/// Query mode, one per SerpApi engine the tool knows about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query<'a> {
    /// Articles for one author, optionally limited with `num`
    Author {
        author_id: &'a str,
        num: Option<usize>,
    },
    /// Profiles matching a free-text name
    Profiles { mauthors: &'a str },
}

impl Query<'_> {
    pub fn engine(&self) -> &'static str {
        match self {
            Query::Author { .. } => ENGINE_AUTHOR,
            Query::Profiles { .. } => ENGINE_PROFILES,
        }
    }

    /// Query parameters excluding `hl` and `api_key`
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("engine", self.engine().to_string())];
        match self {
            Query::Author { author_id, num } => {
                params.push(("author_id", (*author_id).to_string()));
                if let Some(num) = num {
                    params.push(("num", num.to_string()));
                }
            }
            Query::Profiles { mauthors } => params.push(("mauthors", (*mauthors).to_string())),
        }
        params
    }
}

/// SerpApi HTTP client.
#[derive(Clone)]
pub struct SerpApiClient {
    client: Client,
    config: Config,
}

impl SerpApiClient {
    /// Build a client with the configured timeout.
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ScholarError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch up to `max_count` articles of an author, ready for storage.
    ///
    /// Returns the researcher's name and `min(max_count, available)` articles
    /// with keywords and publication dates derived.
    pub async fn fetch_author_articles(
        &self,
        author_id: &str,
        max_count: usize,
    ) -> Result<FetchResult> {
        let root = self
            .execute(&Query::Author {
                author_id,
                num: Some(max_count),
            })
            .await?;

        let result = mapper::map_author_articles(&root, max_count);
        info!(
            author_id,
            name = %result.researcher_name,
            count = result.articles.len(),
            "Fetched author articles"
        );
        Ok(result)
    }

    /// Fetch an author's profile: name, affiliation, metrics and top five
    /// articles.
    pub async fn fetch_author_profile(&self, author_id: &str) -> Result<AuthorProfile> {
        let root = self
            .execute(&Query::Author {
                author_id,
                num: None,
            })
            .await?;

        Ok(mapper::map_author_profile(&root))
    }

    /// Search author profiles by name.
    ///
    /// SerpApi discontinued the `google_scholar_profiles` engine, so this
    /// fails without sending a request.
    pub async fn search_authors_by_name(&self, query: &str) -> Result<Vec<AuthorSearchResult>> {
        warn!(query, engine = ENGINE_PROFILES, "Profile search requested");
        Err(ScholarError::Unsupported(format!(
            "the {} engine was discontinued by SerpApi",
            ENGINE_PROFILES
        )))
    }

    /// Build the request URL. Values are percent-encoded.
    pub fn build_url(&self, query: &Query<'_>) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| ScholarError::Config(format!("Invalid base URL: {}", e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.params() {
                pairs.append_pair(key, &value);
            }
            pairs.append_pair("hl", &self.config.language);
            pairs.append_pair("api_key", &self.config.api_key);
        }

        Ok(url)
    }

    /// Send the request, check HTTP and API status, and parse the body.
    async fn execute(&self, query: &Query<'_>) -> Result<Value> {
        let url = self.build_url(query)?;
        info!(engine = query.engine(), "Querying SerpApi");
        debug!(params = ?query.params(), "Request parameters");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!(engine = query.engine(), "Rate limited by SerpApi");
            return Err(ScholarError::RateLimited { body });
        }

        if status.is_client_error() || status.is_server_error() {
            warn!(status = status.as_u16(), "SerpApi HTTP error");
            return Err(ScholarError::UpstreamHttp {
                status: status.as_u16(),
                body,
            });
        }

        let root: Value = serde_json::from_str(&body)?;
        if let Err(e) = mapper::check_search_status(&root) {
            warn!(error = %e, "SerpApi reported failure");
            return Err(e);
        }

        Ok(root)
    }

    fn transport_error(&self, e: reqwest::Error) -> ScholarError {
        if e.is_timeout() {
            ScholarError::Timeout(self.config.request_timeout.as_secs())
        } else {
            // reqwest errors embed the URL, which carries the key
            ScholarError::Network(e.without_url())
        }
    }
}

impl fmt::Debug for SerpApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerpApiClient")
            .field("config", &self.config)
            .finish()
    }
}
