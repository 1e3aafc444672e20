use futures::executor::block_on;

use super::*;
use crate::net::fake_api::{FakeApi, solution};

fn catalog() -> Vec<Solution> {
    vec![
        solution("Event Sourcing", "Append-only ledger of changes", &["Data"], None),
        solution("Card Vault", "Tokenizes PAN data", &["Security", "PCI"], Some("vault-design.docx")),
        solution("Edge Cache", "CDN in front of the API", &["Cloud"], Some("cdn.pdf")),
    ]
}

fn titles(solutions: &[Solution]) -> Vec<&str> {
    solutions.iter().map(|s| s.title.as_str()).collect()
}

// =============================================================
// Tags + form validation
// =============================================================

#[test]
fn parse_tags_trims_and_drops_blanks() {
    assert_eq!(parse_tags(" Security, Cloud ,, "), vec!["Security".to_owned(), "Cloud".to_owned()]);
    assert!(parse_tags("").is_empty());
}

#[test]
fn validate_requires_document_before_title() {
    let form = SolutionForm::default();
    assert_eq!(form.validate(), Err(SaveSolutionError::MissingDocument));

    let form = SolutionForm { doc_id: "d1".to_owned(), title: "  ".to_owned(), ..SolutionForm::default() };
    assert_eq!(form.validate(), Err(SaveSolutionError::MissingTitle));
}

#[test]
fn validate_builds_payload_with_parsed_tags() {
    let form = SolutionForm {
        doc_id: "d1".to_owned(),
        title: " Card Vault ".to_owned(),
        description: "Tokenization".to_owned(),
        tags: "Security, PCI".to_owned(),
    };
    let payload = form.validate().unwrap();
    assert_eq!(payload.doc_id, "d1");
    assert_eq!(payload.title, "Card Vault");
    assert_eq!(payload.tags, vec!["Security".to_owned(), "PCI".to_owned()]);
}

#[test]
fn validation_errors_read_as_prompts() {
    assert_eq!(SaveSolutionError::MissingDocument.to_string(), "Select a document to save as a solution.");
    assert_eq!(SaveSolutionError::MissingTitle.to_string(), "Please enter a solution title.");
}

// =============================================================
// Client-side filter
// =============================================================

#[test]
fn filter_matches_title_case_insensitively() {
    assert_eq!(titles(&filter_solutions(&catalog(), "EVENT")), vec!["Event Sourcing"]);
}

#[test]
fn filter_matches_description_tags_and_source_document() {
    assert_eq!(titles(&filter_solutions(&catalog(), "tokenizes")), vec!["Card Vault"]);
    assert_eq!(titles(&filter_solutions(&catalog(), "pci")), vec!["Card Vault"]);
    assert_eq!(titles(&filter_solutions(&catalog(), "CDN.PDF")), vec!["Edge Cache"]);
}

#[test]
fn filter_returns_every_match_in_order() {
    // "a" appears in all three via title/description.
    assert_eq!(titles(&filter_solutions(&catalog(), "a")), vec!["Event Sourcing", "Card Vault", "Edge Cache"]);
}

#[test]
fn filter_ignores_missing_optional_fields() {
    let bare = Solution { title: "Bare".to_owned(), ..Solution::default() };
    assert!(filter_solutions(&[bare], "ledger").is_empty());
}

// =============================================================
// Search flow
// =============================================================

#[test]
fn blank_query_resets_without_request() {
    let api = FakeApi::with_solutions(catalog());
    assert_eq!(block_on(run_search(&api, &catalog(), "   ")), SearchOutcome::Reset);
    assert!(api.calls().is_empty());

    let mut state = LibraryState { solutions: catalog(), shown: vec![], query: "  ".to_owned(), ..LibraryState::default() };
    let q = state.begin_search();
    assert_eq!(q, "");
    state.apply_search(SearchOutcome::Reset);
    assert_eq!(state.shown, catalog());
}

#[test]
fn remote_search_results_replace_shown_list() {
    let api = FakeApi::with_solutions(catalog());
    *api.search_results.borrow_mut() = vec![catalog()[2].clone()];
    let outcome = block_on(run_search(&api, &catalog(), "cache"));
    assert_eq!(outcome, SearchOutcome::Remote(vec![catalog()[2].clone()]));
    assert_eq!(api.calls(), vec!["search_solutions"]);
}

#[test]
fn failed_search_falls_back_to_client_filter() {
    let api = FakeApi::with_solutions(catalog());
    api.fail("search_solutions");
    let outcome = block_on(run_search(&api, &catalog(), "Security"));
    assert_eq!(outcome, SearchOutcome::Fallback(vec![catalog()[1].clone()]));
}

#[test]
fn empty_message_distinguishes_triggered_search() {
    let mut state = LibraryState::default();
    assert_eq!(state.empty_message(), "No solutions added yet.");

    state.query = "kafka".to_owned();
    state.begin_search();
    state.apply_search(SearchOutcome::Remote(vec![]));
    assert!(state.shown.is_empty());
    assert!(!state.searching);
    assert_eq!(state.empty_message(), "No solutions found for \"kafka\"");
}

// =============================================================
// Save from document
// =============================================================

#[test]
fn invalid_form_issues_no_request() {
    let api = FakeApi::new();
    let result = block_on(save_from_document(&api, &SolutionForm::default()));
    assert_eq!(result.err(), Some(SaveSolutionError::MissingDocument));
    assert!(api.calls().is_empty());
}

#[test]
fn save_from_document_refreshes_and_surfaces_similar() {
    let api = FakeApi::with_solutions(catalog());
    *api.similar.borrow_mut() = vec![catalog()[1].clone()];
    let form = SolutionForm { doc_id: "d1".to_owned(), title: "Vault v2".to_owned(), ..SolutionForm::default() };

    let (saved, refreshed) = block_on(save_from_document(&api, &form)).unwrap();
    assert_eq!(api.calls(), vec!["add_solution_from_document", "list_solutions"]);
    assert_eq!(refreshed.as_ref().map(Vec::len), Some(4));

    let mut state = LibraryState { form: form.clone(), saving: true, ..LibraryState::default() };
    state.apply_saved(saved);
    if let Some(list) = refreshed {
        state.apply_list(Ok(list));
    }
    assert_eq!(state.form, SolutionForm::default());
    assert_eq!(titles(&state.recommended), vec!["Card Vault"]);
    assert_eq!(state.message.as_deref(), Some(SAVED_MESSAGE));
    assert_eq!(state.shown.len(), 4);
}

#[test]
fn failed_save_keeps_form_and_skips_relist() {
    let api = FakeApi::new();
    api.fail("add_solution_from_document");
    let form = SolutionForm { doc_id: "d1".to_owned(), title: "Vault".to_owned(), ..SolutionForm::default() };

    let (saved, refreshed) = block_on(save_from_document(&api, &form)).unwrap();
    assert!(refreshed.is_none());
    assert!(!api.called("list_solutions"));

    let mut state = LibraryState { form: form.clone(), ..LibraryState::default() };
    state.apply_saved(saved);
    assert_eq!(state.form, form);
    assert_eq!(state.message.as_deref(), Some(SAVE_FAILED_MESSAGE));
}

#[test]
fn list_failure_keeps_existing_solutions() {
    let mut state = LibraryState { solutions: catalog(), shown: catalog(), loading: true, ..LibraryState::default() };
    state.apply_list(Err(ApiError::Transport("down".to_owned())));
    assert!(!state.loading);
    assert_eq!(state.solutions.len(), 3);
    assert_eq!(state.message.as_deref(), Some("Could not reach the backend."));
}
