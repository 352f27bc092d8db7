//! Mapping of SerpApi JSON into the typed records of [`crate::models`].
//!
//! Every field access goes through [`field_text`] / [`field_int`], which turn
//! absent, null or oddly-typed values into `None`. Mapping therefore never
//! fails; only [`check_search_status`] can reject a response.

use crate::config::PROFILE_ARTICLE_CAP;
use crate::error::{Result, ScholarError};
use crate::keywords::{derive_keywords, publication_date_from_year};
use crate::models::{
    Article, AuthorProfile, AuthorSearchResult, FetchResult, Metrics, ProfileArticle,
};
use serde_json::Value;

/// Reject responses whose `search_metadata.status` is not "Success".
///
/// The comparison is case-insensitive. The reported message is taken from
/// the top-level `error` field.
pub fn check_search_status(root: &Value) -> Result<()> {
    let status = field_text(&root["search_metadata"]["status"]).unwrap_or_default();
    if status.eq_ignore_ascii_case("success") {
        return Ok(());
    }

    let message =
        field_text(&root["error"]).unwrap_or_else(|| "unknown SerpApi error".to_string());
    Err(ScholarError::UpstreamApi { status, message })
}

/// Map a `google_scholar_author` response into articles ready for storage.
///
/// At most `max` articles are returned, in response order.
pub fn map_author_articles(root: &Value, max: usize) -> FetchResult {
    let researcher_name = field_text(&root["author"]["name"]).unwrap_or_default();

    let articles = as_slice(&root["articles"])
        .iter()
        .take(max)
        .map(|a| {
            let title = field_text(&a["title"]).unwrap_or_default();
            let year = field_text(&a["year"]).unwrap_or_default();
            Article {
                keywords: derive_keywords(&title),
                publication_date: publication_date_from_year(&year),
                authors: field_text(&a["authors"]).unwrap_or_default(),
                abstract_text: field_text(&a["snippet"]),
                link: field_text(&a["link"]).unwrap_or_default(),
                cited_by: field_int(&a["cited_by"]["value"]),
                title,
            }
        })
        .collect();

    FetchResult {
        researcher_name,
        articles,
    }
}

/// Map a `google_scholar_author` response into a profile with metrics and
/// at most five top articles.
pub fn map_author_profile(root: &Value) -> AuthorProfile {
    let mut metrics = Metrics::default();
    // Each table entry carries one metric; later entries win.
    for entry in as_slice(&root["cited_by"]["table"]) {
        if let Some(citations) = entry.get("citations") {
            metrics.citations = Some(field_int(&citations["all"]).unwrap_or(0));
        }
        if let Some(h_index) = entry.get("h_index") {
            metrics.h_index = Some(field_int(&h_index["all"]).unwrap_or(0));
        }
        if let Some(i10_index) = entry.get("i10_index") {
            metrics.i10_index = Some(field_int(&i10_index["all"]).unwrap_or(0));
        }
    }

    let top_articles = as_slice(&root["articles"])
        .iter()
        .take(PROFILE_ARTICLE_CAP)
        .map(|a| ProfileArticle {
            title: field_text(&a["title"]),
            link: field_text(&a["link"]),
            publication: field_text(&a["publication"]),
            year: field_int(&a["year"]),
            cited_by: field_int(&a["cited_by"]["value"]),
        })
        .collect();

    AuthorProfile {
        name: field_text(&root["author"]["name"]),
        affiliation: field_text(&root["author"]["affiliations"]),
        metrics,
        top_articles,
    }
}

/// Map a `google_scholar_profiles` response.
pub fn map_profile_search(root: &Value) -> Vec<AuthorSearchResult> {
    as_slice(&root["profiles"])
        .iter()
        .map(|p| AuthorSearchResult {
            name: field_text(&p["name"]),
            author_id: field_text(&p["author_id"]),
            affiliations: field_text(&p["affiliations"]),
            cited_by: field_int(&p["cited_by"]).or_else(|| field_int(&p["cited_by"]["value"])),
        })
        .collect()
}

/// Text value of a scalar node. Numbers and booleans are rendered as text.
pub fn field_text(node: &Value) -> Option<String> {
    match node {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Integer value of a node holding a JSON integer or a numeric string.
pub fn field_int(node: &Value) -> Option<i64> {
    match node {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_slice(node: &Value) -> &[Value] {
    node.as_array().map(Vec::as_slice).unwrap_or(&[])
}
