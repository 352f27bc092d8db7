//! Orchestration of client, store and view for each CLI mode.

use crate::author_id::extract_author_id;
use crate::error::{Result, ScholarError};
use crate::models::AuthorProfile;
use crate::serpapi::SerpApiClient;
use crate::store::ArticleStore;
use crate::view::ConsoleView;
use tracing::{error, info};

/// Outcome of harvesting one author input
#[derive(Debug)]
pub struct HarvestOutcome {
    /// Input as given on the command line
    pub input: String,
    pub result: Result<SavedAuthor>,
}

/// A successfully stored author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedAuthor {
    pub author_id: String,
    pub researcher_name: String,
    pub saved: usize,
}

impl HarvestOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Fetch and store up to `max_articles` articles for each input, one author
/// at a time.
///
/// A failing input (bad identifier, upstream error, storage error) is
/// recorded in its outcome and the remaining inputs are still processed.
pub async fn harvest_authors(
    client: &SerpApiClient,
    store: &mut ArticleStore,
    inputs: &[String],
    max_articles: usize,
) -> Vec<HarvestOutcome> {
    let mut outcomes = Vec::with_capacity(inputs.len());

    for input in inputs {
        let result = harvest_one(client, store, input, max_articles).await;
        match &result {
            Ok(saved) => info!(
                author_id = %saved.author_id,
                saved = saved.saved,
                "Author harvested"
            ),
            Err(e) => error!(input = %input, error = %e, "Author harvest failed"),
        }
        outcomes.push(HarvestOutcome {
            input: input.clone(),
            result,
        });
    }

    outcomes
}

async fn harvest_one(
    client: &SerpApiClient,
    store: &mut ArticleStore,
    input: &str,
    max_articles: usize,
) -> Result<SavedAuthor> {
    let author_id = extract_author_id(input)?;
    let fetched = client.fetch_author_articles(&author_id, max_articles).await?;
    let saved = store.save_author_articles(&author_id, &fetched.researcher_name, &fetched.articles)?;

    Ok(SavedAuthor {
        author_id,
        researcher_name: fetched.researcher_name,
        saved,
    })
}

/// Print harvest outcomes. Returns the number of failed inputs.
pub fn report_outcomes(view: &ConsoleView, outcomes: &[HarvestOutcome]) -> usize {
    let mut failed = 0;
    for outcome in outcomes {
        match &outcome.result {
            Ok(saved) => view.show_saved(&saved.author_id, &saved.researcher_name, saved.saved),
            Err(e) => {
                failed += 1;
                view.show_error(&format!("{}: {}", outcome.input, e));
            }
        }
    }
    failed
}

/// Fetch an author's profile and print it. Errors are shown, then returned.
pub async fn show_profile(client: &SerpApiClient, view: &ConsoleView, input: &str) -> Result<()> {
    match fetch_profile(client, input).await {
        Ok(profile) => {
            view.show_author_profile(&profile);
            Ok(())
        }
        Err(e) => {
            view.show_error(&e.to_string());
            Err(e)
        }
    }
}

async fn fetch_profile(client: &SerpApiClient, input: &str) -> Result<AuthorProfile> {
    let author_id = extract_author_id(input)?;
    client.fetch_author_profile(&author_id).await
}

/// Search authors by name, then show the profile of the first hit that has
/// an author id.
pub async fn search_and_show(client: &SerpApiClient, view: &ConsoleView, query: &str) -> Result<()> {
    view.show_search_query(query);

    let result = search_first_profile(client, view, query).await;
    if let Err(e) = &result {
        view.show_error(&e.to_string());
    }
    result
}

async fn search_first_profile(
    client: &SerpApiClient,
    view: &ConsoleView,
    query: &str,
) -> Result<()> {
    let results = client.search_authors_by_name(query).await?;
    view.show_search_results(&results);

    let Some(first) = results.first() else {
        return Ok(());
    };
    let author_id = first
        .author_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ScholarError::InvalidInput("first result has no author_id".to_string()))?;

    let profile = client.fetch_author_profile(author_id).await?;
    view.show_author_profile(&profile);
    Ok(())
}
