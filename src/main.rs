//! rustscholar - Google Scholar author harvester over SerpApi
//!
//! ## Usage
//!
//! ```bash
//! export SERPAPI_API_KEY=...
//! rustscholar fetch LSsXyncAAAAJ "https://scholar.google.com/citations?user=AbCdEf123456&hl=en" --max 3
//! rustscholar profile LSsXyncAAAAJ
//! rustscholar report LSsXyncAAAAJ
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rustscholar::config::{self, Config};
use rustscholar::harvest;
use rustscholar::serpapi::SerpApiClient;
use rustscholar::store::ArticleStore;
use rustscholar::view::ConsoleView;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

// ============================================================================
// CLI Definition
// ============================================================================

/// Google Scholar author harvester over SerpApi
#[derive(Parser)]
#[command(name = "rustscholar")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// SerpApi key
    #[arg(long, global = true, env = config::API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// SQLite database file
    #[arg(long, global = true, default_value = config::DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = config::DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch articles of one or two authors and store them
    Fetch {
        /// Author IDs or profile URLs
        #[arg(required = true, num_args = 1..=2)]
        authors: Vec<String>,

        /// Maximum articles per author
        #[arg(long, default_value_t = config::DEFAULT_MAX_ARTICLES)]
        max: usize,
    },

    /// Show an author's profile, metrics and top articles
    Profile {
        /// Author ID or profile URL
        author: String,
    },

    /// Search authors by name and show the first match
    Search {
        /// Free-text author name
        query: String,
    },

    /// List stored rows per researcher, or one researcher's articles
    Report {
        /// Author ID to list articles for
        author: Option<String>,
    },
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let view = ConsoleView::new();

    match cli.command {
        Commands::Fetch { ref authors, max } => {
            let client = build_client(&cli)?;
            let mut store = open_store(&cli.db)?;

            let outcomes = harvest::harvest_authors(&client, &mut store, authors, max).await;
            let failed = harvest::report_outcomes(&view, &outcomes);

            println!("Done. Database file: {}", cli.db.display());
            Ok(if failed == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Profile { ref author } => {
            let client = build_client(&cli)?;
            Ok(exit_code(harvest::show_profile(&client, &view, author).await))
        }
        Commands::Search { ref query } => {
            let client = build_client(&cli)?;
            Ok(exit_code(harvest::search_and_show(&client, &view, query).await))
        }
        Commands::Report { ref author } => {
            let store = open_store(&cli.db)?;
            view.show_researcher_counts(&store.count_by_researcher()?);
            if let Some(author) = author {
                let author_id = rustscholar::author_id::extract_author_id(author)?;
                view.show_stored_articles(&author_id, &store.articles_for_researcher(&author_id)?);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Validate configuration before any network call.
fn build_client(cli: &Cli) -> Result<SerpApiClient> {
    let config = Config::new(cli.api_key.clone())
        .context("Set SERPAPI_API_KEY or pass --api-key")?
        .with_timeout(Duration::from_secs(cli.timeout));

    info!(timeout_secs = cli.timeout, "SerpApi client configured");
    Ok(SerpApiClient::new(config)?)
}

fn open_store(path: &Path) -> Result<ArticleStore> {
    let store = ArticleStore::open(path)
        .with_context(|| format!("Failed to open database {}", path.display()))?;
    store.initialize().context("Failed to initialize articles table")?;
    Ok(store)
}

/// The view has already printed the error.
fn exit_code(result: rustscholar::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
