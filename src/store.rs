//! SQLite article store.
//!
//! Articles are keyed by `(researcher_id, title)`. Saving an author's batch
//! runs in one transaction: either every row is upserted or none is.

use crate::error::Result;
use crate::models::{Article, ResearcherCount, StoredArticle};
use rusqlite::{params, Connection, Row};
use std::path::Path;
use tracing::{debug, info};

/// Canonical `articles` schema
pub const CREATE_ARTICLES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS articles (
  id               INTEGER PRIMARY KEY AUTOINCREMENT,
  researcher_id    TEXT    NOT NULL,
  researcher_name  TEXT,
  title            TEXT    NOT NULL,
  authors          TEXT,
  publication_date TEXT,
  abstract         TEXT,
  link             TEXT,
  keywords         TEXT,
  cited_by         INTEGER,
  created_at       TEXT DEFAULT (datetime('now')),
  UNIQUE(researcher_id, title)
);
"#;

const UPSERT_ARTICLE: &str = r#"
INSERT INTO articles
  (researcher_id, researcher_name, title, authors, publication_date, abstract, link, keywords, cited_by)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
ON CONFLICT(researcher_id, title) DO UPDATE SET
  authors          = excluded.authors,
  publication_date = excluded.publication_date,
  abstract         = excluded.abstract,
  link             = excluded.link,
  keywords         = excluded.keywords,
  cited_by         = excluded.cited_by,
  researcher_name  = excluded.researcher_name
"#;

const SELECT_ARTICLE_COLUMNS: &str = "SELECT id, researcher_id, researcher_name, title, authors, \
     publication_date, abstract, link, keywords, cited_by, created_at FROM articles";

/// Article store backed by a single SQLite connection
pub struct ArticleStore {
    conn: Connection,
}

impl ArticleStore {
    /// Open (or create) the database file. Call [`ArticleStore::initialize`]
    /// before saving.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        debug!(path = ?path.as_ref(), "Opened article store");
        Ok(Self { conn })
    }

    /// In-memory database, already initialized
    pub fn in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.initialize()?;
        Ok(store)
    }

    /// Create the `articles` table if it does not exist.
    pub fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(CREATE_ARTICLES_TABLE)?;
        Ok(())
    }

    /// Upsert an author's articles in one transaction.
    ///
    /// Existing rows with the same `(researcher_id, title)` get every non-key
    /// column overwritten; `id` and `created_at` are kept. If any row fails
    /// the transaction is dropped and nothing from this batch is stored.
    /// Returns the number of rows written.
    pub fn save_author_articles(
        &mut self,
        researcher_id: &str,
        researcher_name: &str,
        articles: &[Article],
    ) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut written = 0;
        {
            let mut stmt = tx.prepare(UPSERT_ARTICLE)?;
            for article in articles {
                written += stmt.execute(params![
                    researcher_id,
                    researcher_name,
                    article.title,
                    article.authors,
                    article.publication_date,
                    article.abstract_text,
                    article.link,
                    article.keywords,
                    article.cited_by,
                ])?;
            }
        }
        tx.commit()?;

        info!(researcher_id, rows = written, "Saved author articles");
        Ok(written)
    }

    /// Row count per researcher, ordered by researcher id.
    pub fn count_by_researcher(&self) -> Result<Vec<ResearcherCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT researcher_id, COUNT(*) FROM articles GROUP BY researcher_id ORDER BY researcher_id",
        )?;

        let counts = stmt
            .query_map([], |row| {
                Ok(ResearcherCount {
                    researcher_id: row.get(0)?,
                    rows: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(counts)
    }

    /// Stored articles of one researcher, most cited first.
    pub fn articles_for_researcher(&self, researcher_id: &str) -> Result<Vec<StoredArticle>> {
        let sql = format!(
            "{} WHERE researcher_id = ?1 ORDER BY COALESCE(cited_by, 0) DESC, title",
            SELECT_ARTICLE_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let articles = stmt
            .query_map([researcher_id], Self::row_to_article)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(articles)
    }

    /// Underlying connection, for maintenance tasks
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    fn row_to_article(row: &Row) -> rusqlite::Result<StoredArticle> {
        Ok(StoredArticle {
            id: row.get(0)?,
            researcher_id: row.get(1)?,
            researcher_name: row.get(2)?,
            title: row.get(3)?,
            authors: row.get(4)?,
            publication_date: row.get(5)?,
            abstract_text: row.get(6)?,
            link: row.get(7)?,
            keywords: row.get(8)?,
            cited_by: row.get(9)?,
            created_at: row.get(10)?,
        })
    }
}
