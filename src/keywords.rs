//! Keyword and date derivation for stored articles.
//!
//! Both functions are pure: the same title always yields the same keyword
//! string, which keeps repeated upserts of an article stable.

/// Tokens never emitted as keywords
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "of", "and", "for", "to", "in", "on", "with", "by", "from", "using",
    "based", "analysis", "study", "model",
];

/// Maximum number of keywords kept per title
pub const MAX_KEYWORDS: usize = 6;

/// Derive up to six comma-separated keywords from an article title.
///
/// The title is lowercased, every character outside `[a-z0-9]` and whitespace
/// becomes a space, and tokens of length 3 or less or in [`STOP_WORDS`] are
/// dropped. Remaining tokens are deduplicated in first-seen order.
///
/// ```
/// use rustscholar::keywords::derive_keywords;
///
/// assert_eq!(
///     derive_keywords("Deep Learning for Image Recognition: A Survey"),
///     "deep,learning,image,recognition,survey"
/// );
/// ```
pub fn derive_keywords(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut keywords: Vec<&str> = Vec::with_capacity(MAX_KEYWORDS);
    for token in cleaned.split_whitespace() {
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
        if token.len() <= 3 || STOP_WORDS.contains(&token) || keywords.contains(&token) {
            continue;
        }
        keywords.push(token);
    }

    keywords.join(",")
}

/// Turn a bare year into a `YYYY-01-01` date. Blank input yields `None`.
pub fn publication_date_from_year(year: &str) -> Option<String> {
    let year = year.trim();
    if year.is_empty() {
        None
    } else {
        Some(format!("{}-01-01", year))
    }
}
