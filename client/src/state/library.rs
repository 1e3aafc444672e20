//! Solution library: listing, search with client-side fallback, and
//! promoting an uploaded document into a solution.
//!
//! DESIGN
//! ======
//! `solutions` always holds the full backend list; `shown` is what the grid
//! renders. A search replaces `shown` and never mutates `solutions`, so an
//! empty query can restore the unfiltered list without another request.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use crate::net::api::DocumentApi;
use crate::net::error::ApiError;
use crate::net::types::{SavedSolution, Solution, SolutionFromDocument};

pub const SAVED_MESSAGE: &str = "Solution saved from document.";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save solution.";

/// Library page state.
#[derive(Clone, Debug, Default)]
pub struct LibraryState {
    pub solutions: Vec<Solution>,
    pub shown: Vec<Solution>,
    pub query: String,
    /// Query text of the last triggered search, for the "no results" line.
    pub searched_for: Option<String>,
    pub form: SolutionForm,
    /// Solutions the backend reported as similar to the last saved one.
    pub recommended: Vec<Solution>,
    pub loading: bool,
    pub searching: bool,
    pub saving: bool,
    pub message: Option<String>,
}

impl LibraryState {
    pub fn apply_list(&mut self, result: Result<Vec<Solution>, ApiError>) {
        self.loading = false;
        match result {
            Ok(solutions) => {
                self.shown.clone_from(&solutions);
                self.solutions = solutions;
            }
            Err(e) => {
                leptos::logging::warn!("solution list failed: {e}");
                self.message = Some(e.user_message());
            }
        }
    }

    pub fn begin_search(&mut self) -> String {
        self.searching = true;
        self.searched_for = Some(self.query.trim().to_owned());
        self.query.trim().to_owned()
    }

    pub fn apply_search(&mut self, outcome: SearchOutcome) {
        self.searching = false;
        self.shown = match outcome {
            SearchOutcome::Reset => self.solutions.clone(),
            SearchOutcome::Remote(found) | SearchOutcome::Fallback(found) => found,
        };
    }

    /// Text for an empty grid.
    pub fn empty_message(&self) -> String {
        match &self.searched_for {
            Some(q) if !q.is_empty() => format!("No solutions found for \"{q}\""),
            _ => "No solutions added yet.".to_owned(),
        }
    }

    pub fn apply_saved(&mut self, result: Result<SavedSolution, ApiError>) {
        self.saving = false;
        match result {
            Ok(saved) => {
                self.form = SolutionForm::default();
                self.recommended = saved.similar;
                self.message = Some(SAVED_MESSAGE.to_owned());
            }
            Err(e) => {
                leptos::logging::warn!("save solution from document failed: {e}");
                self.message = Some(SAVE_FAILED_MESSAGE.to_owned());
            }
        }
    }
}

/// "Save a document as a solution" form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolutionForm {
    pub doc_id: String,
    pub title: String,
    pub description: String,
    /// Comma-separated tag input as typed.
    pub tags: String,
}

/// Why the form cannot be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SaveSolutionError {
    #[error("Select a document to save as a solution.")]
    MissingDocument,
    #[error("Please enter a solution title.")]
    MissingTitle,
}

impl SolutionForm {
    /// Build the request payload; the document is checked before the title.
    pub fn validate(&self) -> Result<SolutionFromDocument, SaveSolutionError> {
        let doc_id = self.doc_id.trim();
        if doc_id.is_empty() {
            return Err(SaveSolutionError::MissingDocument);
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(SaveSolutionError::MissingTitle);
        }
        Ok(SolutionFromDocument {
            doc_id: doc_id.to_owned(),
            title: title.to_owned(),
            description: self.description.trim().to_owned(),
            tags: parse_tags(&self.tags),
        })
    }
}

/// Split a comma-separated tag list, dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Whether `solution` matches `term` in title, description, tags, or source
/// document name, ignoring case.
pub fn solution_matches(solution: &Solution, term: &str) -> bool {
    let term = term.to_lowercase();
    contains_ci(&solution.title, &term)
        || solution.description.as_deref().is_some_and(|d| contains_ci(d, &term))
        || solution.reference_doc_name.as_deref().is_some_and(|n| contains_ci(n, &term))
        || solution.tags.iter().any(|t| contains_ci(t, &term))
}

/// Client-side search used when the search endpoint is unreachable.
pub fn filter_solutions(solutions: &[Solution], query: &str) -> Vec<Solution> {
    let term = query.trim();
    if term.is_empty() {
        return solutions.to_vec();
    }
    solutions.iter().filter(|s| solution_matches(s, term)).cloned().collect()
}

/// Where the displayed search results came from.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// Blank query: show every solution again. No request was made.
    Reset,
    Remote(Vec<Solution>),
    /// Search endpoint failed; results were filtered locally.
    Fallback(Vec<Solution>),
}

/// Search via the backend, falling back to `filter_solutions` over `all`.
pub async fn run_search<A: DocumentApi>(api: &A, all: &[Solution], query: &str) -> SearchOutcome {
    let q = query.trim();
    if q.is_empty() {
        return SearchOutcome::Reset;
    }
    match api.search_solutions(q).await {
        Ok(found) => SearchOutcome::Remote(found),
        Err(e) => {
            leptos::logging::warn!("search endpoint failed, falling back to client filter: {e}");
            SearchOutcome::Fallback(filter_solutions(all, q))
        }
    }
}

/// Validate the form, submit it, and re-list solutions on success.
///
/// Returns the refreshed list alongside the save result so one state update
/// can apply both.
pub async fn save_from_document<A: DocumentApi>(
    api: &A,
    form: &SolutionForm,
) -> Result<(Result<SavedSolution, ApiError>, Option<Vec<Solution>>), SaveSolutionError> {
    let payload = form.validate()?;
    let saved = api.add_solution_from_document(&payload).await;
    let refreshed = if saved.is_ok() { api.list_solutions().await.ok() } else { None };
    Ok((saved, refreshed))
}
