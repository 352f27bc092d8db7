//! Normalization of user-supplied Google Scholar author identifiers.
//!
//! Users paste IDs in several shapes: the bare ID, the full profile URL, or
//! the ID with trailing query parameters copied along with it.

use crate::error::{Result, ScholarError};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

fn clean_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid author id regex"))
}

fn user_param_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|[?&])user=([^&#]*)").expect("valid user param regex"))
}

/// Extract a clean author ID.
///
/// - `"ABC123"` is returned unchanged.
/// - `"https://scholar.google.com/citations?user=ABC123&hl=en"` yields the
///   URL-decoded `user` parameter.
/// - `"ABC123&hl=en"` is truncated at the first `&`.
///
/// # Errors
///
/// Returns `ScholarError::InvalidInput` when nothing usable remains.
pub fn extract_author_id(input: &str) -> Result<String> {
    let s = input.trim();
    if clean_id_regex().is_match(s) {
        return Ok(s.to_string());
    }

    let candidate = if let Some(user) = user_param(s) {
        user
    } else {
        s.split('&').next().unwrap_or_default().trim().to_string()
    };

    if clean_id_regex().is_match(&candidate) {
        Ok(candidate)
    } else {
        Err(ScholarError::InvalidInput(format!(
            "cannot extract an author id from '{}'",
            input
        )))
    }
}

/// Value of the `user` parameter, URL-decoded.
fn user_param(s: &str) -> Option<String> {
    if let Ok(url) = Url::parse(s) {
        if let Some((_, value)) = url.query_pairs().find(|(k, _)| k == "user") {
            return Some(value.trim().to_string());
        }
    }

    let raw = user_param_regex().captures(s)?.get(1)?.as_str();
    let decoded = urlencoding::decode(raw).ok()?;
    Some(decoded.trim().to_string())
}

/// Heuristic for strings shaped like a Scholar author ID (8 to 30 of
/// `[A-Za-z0-9_-]`).
pub fn looks_like_author_id(s: &str) -> bool {
    let s = s.trim();
    (8..=30).contains(&s.len()) && clean_id_regex().is_match(s)
}
