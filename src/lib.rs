//! # rustscholar
//!
//! Google Scholar author harvester over SerpApi, with a local SQLite article
//! store.
//!
//! ## Modules
//!
//! - [`serpapi`] - SerpApi client for the Scholar author engines
//! - [`mapper`] - JSON response to typed model mapping
//! - [`keywords`] - Keyword and publication date derivation
//! - [`store`] - SQLite article store with per-author upserts
//! - [`view`] - Console rendering
//! - [`harvest`] - Orchestration per CLI mode
//! - [`author_id`] - Author identifier normalization
//! - [`maintenance`] - Legacy row migration
//! - [`config`] - Runtime configuration
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rustscholar::{config::Config, serpapi::SerpApiClient, store::ArticleStore};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SerpApiClient::new(Config::from_env()?)?;
//!     let fetched = client.fetch_author_articles("LSsXyncAAAAJ", 3).await?;
//!
//!     let mut store = ArticleStore::open("scholar.db")?;
//!     store.initialize()?;
//!     store.save_author_articles("LSsXyncAAAAJ", &fetched.researcher_name, &fetched.articles)?;
//!     Ok(())
//! }
//! ```

pub mod author_id;
pub mod config;
pub mod error;
pub mod harvest;
pub mod keywords;
pub mod maintenance;
pub mod mapper;
pub mod models;
pub mod serpapi;
pub mod store;
pub mod view;

pub use error::{Result, ScholarError};
