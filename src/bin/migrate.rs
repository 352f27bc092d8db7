//! rustscholar-migrate - one-off repair of legacy article rows
//!
//! Normalizes researcher ids stored with trailing parameters and merges the
//! duplicates they produced, then prints the per-researcher row counts.
//!
//! ```bash
//! rustscholar-migrate --db scholar.db
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rustscholar::config;
use rustscholar::maintenance::migrate_legacy_ids;
use rustscholar::store::ArticleStore;
use rustscholar::view::ConsoleView;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Normalize legacy researcher ids and merge duplicate articles
#[derive(Parser)]
#[command(name = "rustscholar-migrate")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// SQLite database file
    #[arg(long, default_value = config::DEFAULT_DB_PATH)]
    db: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut store = ArticleStore::open(&cli.db)
        .with_context(|| format!("Failed to open database {}", cli.db.display()))?;

    let report = migrate_legacy_ids(store.connection_mut()).context("Migration failed")?;
    println!(
        "Migration complete: {} rows -> {} rows ({} merged)",
        report.rows_before,
        report.rows_after,
        report.merged()
    );

    ConsoleView::new().show_researcher_counts(&store.count_by_researcher()?);
    Ok(())
}
