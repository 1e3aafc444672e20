use futures::executor::block_on;

use super::*;
use crate::net::fake_api::{FakeApi, document};

// =============================================================
// Upload
// =============================================================

#[test]
fn upload_without_file_issues_no_request() {
    let api = FakeApi::new();
    let outcome = block_on(upload_selected(&api, None));
    assert_eq!(outcome, UploadOutcome::NoFile);
    assert!(api.calls().is_empty());

    let mut state = DocumentsState::default();
    state.apply_upload(&outcome);
    assert_eq!(state.message.as_deref(), Some(SELECT_FILE_MESSAGE));
}

#[test]
fn begin_upload_without_staged_file_sets_message() {
    let mut state = DocumentsState::default();
    assert!(!state.begin_upload());
    assert!(!state.uploading);
    assert_eq!(state.message.as_deref(), Some(SELECT_FILE_MESSAGE));
}

#[test]
fn begin_upload_with_staged_file_marks_in_flight() {
    let mut state = DocumentsState::default();
    state.stage_file(Some("hld.pdf".to_owned()));
    assert!(state.begin_upload());
    assert!(state.uploading);
    assert_eq!(state.message, None);
}

#[test]
fn returning_to_upload_page_clears_stale_selection() {
    let mut state = DocumentsState::default();
    state.stage_file(Some("old.pdf".to_owned()));
    state.message = Some(UPLOAD_FAILED_MESSAGE.to_owned());

    state.reset_upload_form();
    assert_eq!(state.selected_file, None);
    assert_eq!(state.message, None);
    assert!(!state.begin_upload());
    assert_eq!(state.message.as_deref(), Some(SELECT_FILE_MESSAGE));
}

#[test]
fn in_flight_upload_keeps_its_name_on_return() {
    let mut state = DocumentsState::default();
    state.stage_file(Some("big.pdf".to_owned()));
    assert!(state.begin_upload());

    state.reset_upload_form();
    assert_eq!(state.selected_file.as_deref(), Some("big.pdf"));
    assert!(state.uploading);
}

#[test]
fn successful_upload_refreshes_list_with_new_entry() {
    let api = FakeApi::with_documents(vec![document("d1", "existing.pdf")]);
    let file = UploadFile::named("payments-hld.pdf");

    let outcome = block_on(upload_selected(&api, Some(&file)));
    assert_eq!(api.calls(), vec!["upload_document", "list_documents"]);

    let mut state = DocumentsState {
        items: vec![document("d1", "existing.pdf")],
        uploading: true,
        selected_file: Some("payments-hld.pdf".to_owned()),
        ..DocumentsState::default()
    };
    state.apply_upload(&outcome);
    assert!(!state.uploading);
    assert_eq!(state.selected_file, None);
    assert_eq!(state.message.as_deref(), Some(UPLOAD_OK_MESSAGE));
    let names: Vec<_> = state.items.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["existing.pdf", "payments-hld.pdf"]);
}

#[test]
fn failed_upload_keeps_selection_and_reports() {
    let api = FakeApi::new();
    api.fail("upload_document");
    let file = UploadFile::named("big.pdf");

    let outcome = block_on(upload_selected(&api, Some(&file)));
    assert!(matches!(outcome, UploadOutcome::Failed(ApiError::Transport(_))));
    assert!(!api.called("list_documents"));

    let mut state = DocumentsState { selected_file: Some("big.pdf".to_owned()), ..DocumentsState::default() };
    state.apply_upload(&outcome);
    assert_eq!(state.message.as_deref(), Some(UPLOAD_FAILED_MESSAGE));
    assert_eq!(state.selected_file.as_deref(), Some("big.pdf"));
}

#[test]
fn upload_succeeds_even_if_relist_fails() {
    let api = FakeApi::new();
    api.fail("list_documents");
    let file = UploadFile::named("a.pdf");

    let outcome = block_on(upload_selected(&api, Some(&file)));
    assert_eq!(outcome, UploadOutcome::Uploaded { documents: None });

    let mut state = DocumentsState { items: vec![document("d0", "old.pdf")], ..DocumentsState::default() };
    state.apply_upload(&outcome);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.message.as_deref(), Some(UPLOAD_OK_MESSAGE));
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_without_confirmation_issues_no_request() {
    let api = FakeApi::with_documents(vec![document("d1", "a.pdf")]);
    let outcome = block_on(delete_confirmed(&api, "d1", false));
    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert!(api.calls().is_empty());
    assert_eq!(api.documents.borrow().len(), 1);
}

#[test]
fn confirmed_delete_removes_row() {
    let api = FakeApi::with_documents(vec![document("d1", "a.pdf"), document("d2", "b.pdf")]);
    let outcome = block_on(delete_confirmed(&api, "d1", true));
    assert_eq!(api.calls(), vec!["delete_document", "list_documents"]);

    let mut state = DocumentsState {
        items: vec![document("d1", "a.pdf"), document("d2", "b.pdf")],
        ..DocumentsState::default()
    };
    state.apply_delete("d1", &outcome);
    assert_eq!(state.items, vec![document("d2", "b.pdf")]);
}

#[test]
fn delete_falls_back_to_local_removal_when_relist_fails() {
    let mut state = DocumentsState {
        items: vec![document("d1", "a.pdf"), document("d2", "b.pdf")],
        ..DocumentsState::default()
    };
    state.apply_delete("d2", &DeleteOutcome::Deleted { documents: None });
    assert_eq!(state.items, vec![document("d1", "a.pdf")]);
}

#[test]
fn failed_delete_keeps_rows_and_sets_error() {
    let mut state = DocumentsState { items: vec![document("d1", "a.pdf")], ..DocumentsState::default() };
    state.apply_delete("d1", &DeleteOutcome::Failed(ApiError::Status { status: 500, body: String::new() }));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("Failed to delete document: Backend error (500)."));
}

// =============================================================
// Refresh + helpers
// =============================================================

#[test]
fn refresh_failure_keeps_previous_items() {
    let mut state = DocumentsState { items: vec![document("d1", "a.pdf")], ..DocumentsState::default() };
    state.begin_refresh();
    assert!(state.loading);
    state.apply_refresh(Err(ApiError::Transport("offline".to_owned())));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("Could not reach the backend."));
}

#[test]
fn list_needs_load_until_first_success() {
    let mut state = DocumentsState::default();
    assert!(state.needs_load());

    state.begin_refresh();
    assert!(!state.needs_load());
    state.apply_refresh(Err(ApiError::Transport("offline".to_owned())));
    assert!(state.needs_load());

    state.begin_refresh();
    state.apply_refresh(Ok(Vec::new()));
    assert!(!state.needs_load());
}

#[test]
fn name_of_finds_listed_document() {
    let state = DocumentsState { items: vec![document("d9", "vault.docx")], ..DocumentsState::default() };
    assert_eq!(state.name_of("d9").as_deref(), Some("vault.docx"));
    assert_eq!(state.name_of("nope"), None);
}

#[test]
fn ask_about_document_skips_blank_question() {
    let api = FakeApi::new();
    assert_eq!(block_on(ask_about_document(&api, "d1", None)), None);
    assert_eq!(block_on(ask_about_document(&api, "d1", Some("   "))), None);
    assert!(api.calls().is_empty());
}

#[test]
fn ask_about_document_returns_answer() {
    let api = FakeApi::new();
    *api.chat_answer.borrow_mut() = "It uses Kafka.".to_owned();
    let answer = block_on(ask_about_document(&api, "d1", Some(" Which broker? ")));
    assert_eq!(answer, Some(Ok("It uses Kafka.".to_owned())));
}

#[test]
fn compliance_route_carries_document_query() {
    assert_eq!(compliance_route("d3"), "/compliance?doc=d3");
    assert_eq!(compliance_route("a&b=c"), "/compliance?doc=a%26b%3Dc");
}

#[test]
fn delete_prompt_names_document() {
    assert!(delete_prompt("a.pdf").starts_with("Delete \"a.pdf\"?"));
}
