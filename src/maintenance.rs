//! One-off repair of legacy `articles` rows.
//!
//! Early versions stored researcher ids with trailing query parameters
//! (`ABC123&hl=en`) and had no uniqueness constraint, so the same article
//! could appear several times. The migration rebuilds the table with the
//! canonical schema, cutting ids at the first `&` and merging duplicates:
//! the highest `cited_by` and the oldest `created_at` win.
//!
//! Only the `rustscholar-migrate` binary runs this.

use crate::error::Result;
use crate::store::CREATE_ARTICLES_TABLE;
use rusqlite::Connection;
use tracing::info;

const COPY_NORMALIZED: &str = r#"
INSERT INTO articles_new (
  researcher_id, researcher_name, title, authors, publication_date,
  abstract, link, keywords, cited_by, created_at
)
SELECT
  CASE
    WHEN instr(researcher_id, '&') = 0 THEN researcher_id
    ELSE substr(researcher_id, 1, instr(researcher_id, '&') - 1)
  END AS researcher_id_clean,
  researcher_name,
  title,
  authors,
  publication_date,
  abstract,
  link,
  keywords,
  MAX(COALESCE(cited_by, 0)) AS cited_by,
  MIN(created_at)
FROM articles
GROUP BY researcher_id_clean, title
"#;

/// Row counts around a migration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    pub rows_before: i64,
    pub rows_after: i64,
}

impl MigrationReport {
    pub fn merged(&self) -> i64 {
        self.rows_before - self.rows_after
    }
}

/// Rebuild `articles` with normalized ids and merged duplicates.
///
/// Runs in one transaction; on error the original table is untouched.
pub fn migrate_legacy_ids(conn: &mut Connection) -> Result<MigrationReport> {
    let tx = conn.transaction()?;

    let rows_before: i64 = tx.query_row("SELECT COUNT(*) FROM articles", [], |row| row.get(0))?;

    tx.execute_batch("DROP TABLE IF EXISTS articles_new;")?;
    tx.execute_batch(&CREATE_ARTICLES_TABLE.replace("IF NOT EXISTS articles", "articles_new"))?;
    tx.execute(COPY_NORMALIZED, [])?;
    tx.execute_batch("DROP TABLE articles; ALTER TABLE articles_new RENAME TO articles;")?;

    let rows_after: i64 = tx.query_row("SELECT COUNT(*) FROM articles", [], |row| row.get(0))?;
    tx.commit()?;

    let report = MigrationReport {
        rows_before,
        rows_after,
    };
    info!(
        rows_before,
        rows_after,
        merged = report.merged(),
        "Legacy articles migrated"
    );
    Ok(report)
}
