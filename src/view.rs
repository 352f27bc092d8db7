//! Console rendering.
//!
//! `render_*` functions build the text; `show_*` methods print it. Nothing
//! here makes decisions beyond choosing placeholders for missing values.

use crate::models::{AuthorProfile, AuthorSearchResult, ResearcherCount, StoredArticle};
use std::fmt::Write as _;

const PLACEHOLDER: &str = "-";

/// Writes rendered output to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }

    pub fn show_author_profile(&self, profile: &AuthorProfile) {
        print!("{}", render_author_profile(profile));
    }

    pub fn show_search_query(&self, query: &str) {
        println!("\nSearching authors: \"{}\"", query);
    }

    pub fn show_search_results(&self, results: &[AuthorSearchResult]) {
        print!("{}", render_search_results(results));
    }

    pub fn show_saved(&self, author_id: &str, researcher_name: &str, count: usize) {
        println!("{}", render_saved(author_id, researcher_name, count));
    }

    pub fn show_researcher_counts(&self, counts: &[ResearcherCount]) {
        print!("{}", render_researcher_counts(counts));
    }

    pub fn show_stored_articles(&self, researcher_id: &str, articles: &[StoredArticle]) {
        print!("{}", render_stored_articles(researcher_id, articles));
    }

    pub fn show_error(&self, message: &str) {
        println!("{}", render_error(message));
    }
}

/// Profile with a metrics box and the top articles.
pub fn render_author_profile(profile: &AuthorProfile) -> String {
    let mut out = String::new();
    let m = &profile.metrics;

    let _ = writeln!(out, "\n=== AUTHOR PROFILE ===");
    let _ = writeln!(out, "Name: {}", or_dash(profile.name.as_deref()));
    let _ = writeln!(out, "Affiliation: {}", or_dash(profile.affiliation.as_deref()));

    let _ = writeln!(out, "\nMetrics:");
    let _ = writeln!(out, "+----------------+---------+");
    let _ = writeln!(out, "| {:<14} | {:>7} |", "Citations", m.citations.unwrap_or(0));
    let _ = writeln!(out, "| {:<14} | {:>7} |", "h-index", m.h_index.unwrap_or(0));
    let _ = writeln!(out, "| {:<14} | {:>7} |", "i10-index", m.i10_index.unwrap_or(0));
    let _ = writeln!(out, "+----------------+---------+");

    let _ = writeln!(out, "\nTop Articles:");
    if profile.top_articles.is_empty() {
        let _ = writeln!(out, "   [No articles found]");
    }
    for a in &profile.top_articles {
        let year = a
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let _ = writeln!(
            out,
            " - {} ({}) · {} | Citations: {}",
            or_dash(a.title.as_deref()),
            year,
            or_dash(a.publication.as_deref()),
            a.cited_by.unwrap_or(0)
        );
        if let Some(link) = a.link.as_deref().filter(|l| !l.is_empty()) {
            let _ = writeln!(out, "   {}", link);
        }
    }

    out
}

/// Numbered list of profile search hits.
pub fn render_search_results(results: &[AuthorSearchResult]) -> String {
    let mut out = String::new();
    if results.is_empty() {
        let _ = writeln!(out, "   [No authors found]");
        return out;
    }

    for (i, r) in results.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} [{}] · {} | Cited by: {}",
            i + 1,
            or_dash(r.name.as_deref()),
            or_dash(r.author_id.as_deref()),
            or_dash(r.affiliations.as_deref()),
            r.cited_by.unwrap_or(0)
        );
    }
    out
}

pub fn render_saved(author_id: &str, researcher_name: &str, count: usize) -> String {
    let name = if researcher_name.is_empty() {
        PLACEHOLDER
    } else {
        researcher_name
    };
    format!("Saved {} articles of {} ({})", count, name, author_id)
}

pub fn render_researcher_counts(counts: &[ResearcherCount]) -> String {
    let mut out = String::from("== Rows per researcher_id ==\n");
    if counts.is_empty() {
        out.push_str("   [No rows stored]\n");
    }
    for c in counts {
        let _ = writeln!(out, "{} -> {} rows", c.researcher_id, c.rows);
    }
    out
}

pub fn render_stored_articles(researcher_id: &str, articles: &[StoredArticle]) -> String {
    let mut out = format!("\n== Articles of {} ==\n", researcher_id);
    if articles.is_empty() {
        out.push_str("   [No articles stored]\n");
    }
    for (i, a) in articles.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:02}) {}  [cites={}]\n   {}",
            i + 1,
            a.title,
            a.cited_by.unwrap_or(0),
            or_dash(a.link.as_deref())
        );
    }
    out
}

pub fn render_error(message: &str) -> String {
    format!("[ERROR] {}", message)
}

fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => PLACEHOLDER,
    }
}
