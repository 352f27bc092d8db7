//! Typed records produced from SerpApi responses and read back from the store.
//!
//! Optional upstream fields stay `Option` here; placeholder values are only
//! chosen when rendering (see [`crate::view`]).

use serde::{Deserialize, Serialize};

/// Citation metrics from `cited_by.table`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub citations: Option<i64>,
    pub h_index: Option<i64>,
    pub i10_index: Option<i64>,
}

/// An article as shown in an author profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileArticle {
    pub title: Option<String>,
    pub link: Option<String>,
    /// Journal or publisher line
    pub publication: Option<String>,
    pub year: Option<i64>,
    pub cited_by: Option<i64>,
}

/// A scholar profile with metrics and its top articles (at most five)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorProfile {
    pub name: Option<String>,
    pub affiliation: Option<String>,
    pub metrics: Metrics,
    pub top_articles: Vec<ProfileArticle>,
}

/// An article ready to be upserted under a researcher
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub authors: String,
    /// `YYYY-01-01`, derived from the bare year
    pub publication_date: Option<String>,
    /// SerpApi `snippet`
    pub abstract_text: Option<String>,
    pub link: String,
    /// Comma-joined keywords derived from the title
    pub keywords: String,
    pub cited_by: Option<i64>,
}

/// Researcher name plus the articles fetched for them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub researcher_name: String,
    pub articles: Vec<Article>,
}

/// One hit of the (discontinued) profile search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSearchResult {
    pub name: Option<String>,
    pub author_id: Option<String>,
    pub affiliations: Option<String>,
    pub cited_by: Option<i64>,
}

/// A row of the `articles` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredArticle {
    pub id: i64,
    pub researcher_id: String,
    pub researcher_name: Option<String>,
    pub title: String,
    pub authors: Option<String>,
    pub publication_date: Option<String>,
    pub abstract_text: Option<String>,
    pub link: Option<String>,
    pub keywords: Option<String>,
    pub cited_by: Option<i64>,
    pub created_at: Option<String>,
}

/// Number of stored rows per researcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearcherCount {
    pub researcher_id: String,
    pub rows: i64,
}
