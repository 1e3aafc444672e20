//! Document inventory and upload/delete workflow state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The upload page, the library's "save as solution" selector, the
//! compliance selector, and the chat widget all read the same document list,
//! so it lives in one shared state refreshed by whichever view mounts.
//!
//! ERROR HANDLING
//! ==============
//! Missing input is rejected before any request (`UploadOutcome::NoFile`,
//! `DeleteOutcome::Cancelled`). Transport failures are logged and turned
//! into an inline message; the table keeps its previous rows.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use crate::net::api::{DocumentApi, UploadFile};
use crate::net::error::ApiError;
use crate::net::types::Document;

pub const SELECT_FILE_MESSAGE: &str = "Please select a file first.";
pub const UPLOAD_OK_MESSAGE: &str = "File uploaded successfully!";
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed. Try again.";

/// Shared list of uploaded documents plus upload-form status.
#[derive(Clone, Debug, Default)]
pub struct DocumentsState {
    pub items: Vec<Document>,
    pub loading: bool,
    /// Set once any listing has succeeded.
    pub loaded: bool,
    pub uploading: bool,
    /// Name of the file currently staged for upload.
    pub selected_file: Option<String>,
    /// Inline status line under the upload button.
    pub message: Option<String>,
    /// Last list/delete failure, shown above the table.
    pub error: Option<String>,
}

impl DocumentsState {
    /// Display name for a document id, if it is in the current list.
    pub fn name_of(&self, doc_id: &str) -> Option<String> {
        self.items.iter().find(|d| d.id == doc_id).map(|d| d.name.clone())
    }

    /// Whether the list has never been fetched and no fetch is in flight.
    pub fn needs_load(&self) -> bool {
        !self.loaded && !self.loading
    }

    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    pub fn apply_refresh(&mut self, result: Result<Vec<Document>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                self.error = None;
            }
            Err(e) => {
                leptos::logging::warn!("document list failed: {e}");
                self.error = Some(e.user_message());
            }
        }
    }

    /// Stage a picked or dropped file and clear the previous status line.
    pub fn stage_file(&mut self, name: Option<String>) {
        self.selected_file = name;
        self.message = None;
    }

    /// Drop a selection left over from an earlier visit to the upload page.
    ///
    /// The browser file handle does not outlive the page, so the name must
    /// not either. An upload still in flight keeps its name until it lands.
    pub fn reset_upload_form(&mut self) {
        if !self.uploading {
            self.stage_file(None);
        }
    }

    /// Returns `false` when there is nothing staged, after setting the
    /// "select a file" message.
    pub fn begin_upload(&mut self) -> bool {
        if self.selected_file.is_none() {
            self.message = Some(SELECT_FILE_MESSAGE.to_owned());
            return false;
        }
        self.uploading = true;
        self.message = None;
        true
    }

    pub fn apply_upload(&mut self, outcome: &UploadOutcome) {
        self.uploading = false;
        match outcome {
            UploadOutcome::NoFile => self.message = Some(SELECT_FILE_MESSAGE.to_owned()),
            UploadOutcome::Uploaded { documents } => {
                self.message = Some(UPLOAD_OK_MESSAGE.to_owned());
                self.selected_file = None;
                if let Some(items) = documents {
                    self.items.clone_from(items);
                }
            }
            UploadOutcome::Failed(e) => {
                leptos::logging::warn!("upload failed: {e}");
                self.message = Some(UPLOAD_FAILED_MESSAGE.to_owned());
            }
        }
    }

    pub fn apply_delete(&mut self, doc_id: &str, outcome: &DeleteOutcome) {
        match outcome {
            DeleteOutcome::Cancelled => {}
            DeleteOutcome::Deleted { documents } => {
                self.error = None;
                match documents {
                    Some(items) => self.items.clone_from(items),
                    None => self.items.retain(|d| d.id != doc_id),
                }
            }
            DeleteOutcome::Failed(e) => {
                leptos::logging::warn!("delete of {doc_id} failed: {e}");
                self.error = Some(format!("Failed to delete document: {}", e.user_message()));
            }
        }
    }
}

/// Result of an upload attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadOutcome {
    /// Nothing was selected; no request was made.
    NoFile,
    /// Upload succeeded. `documents` is the refreshed list, or `None` when
    /// the follow-up listing failed.
    Uploaded { documents: Option<Vec<Document>> },
    Failed(ApiError),
}

/// Result of a delete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; no request was made.
    Cancelled,
    Deleted { documents: Option<Vec<Document>> },
    Failed(ApiError),
}

/// Upload `file` and re-list documents on success.
pub async fn upload_selected<A: DocumentApi>(api: &A, file: Option<&UploadFile>) -> UploadOutcome {
    let Some(file) = file else {
        return UploadOutcome::NoFile;
    };
    match api.upload_document(file).await {
        Ok(_) => UploadOutcome::Uploaded { documents: refresh(api).await.ok() },
        Err(e) => UploadOutcome::Failed(e),
    }
}

/// Fetch the current document list.
pub async fn refresh<A: DocumentApi>(api: &A) -> Result<Vec<Document>, ApiError> {
    api.list_documents().await.inspect_err(|e| {
        leptos::logging::warn!("document list failed: {e}");
    })
}

/// Delete `doc_id` only if `confirmed`, then re-list.
pub async fn delete_confirmed<A: DocumentApi>(api: &A, doc_id: &str, confirmed: bool) -> DeleteOutcome {
    if !confirmed {
        return DeleteOutcome::Cancelled;
    }
    match api.delete_document(doc_id).await {
        Ok(()) => DeleteOutcome::Deleted { documents: refresh(api).await.ok() },
        Err(e) => DeleteOutcome::Failed(e),
    }
}

/// Ask a one-off question about a document from its table row.
///
/// An empty or cancelled prompt issues no request and yields `None`.
pub async fn ask_about_document<A: DocumentApi>(
    api: &A,
    doc_id: &str,
    question: Option<&str>,
) -> Option<Result<String, ApiError>> {
    let question = question.map(str::trim).filter(|q| !q.is_empty())?;
    Some(api.chat_with_document(doc_id, question).await)
}

/// Confirmation text shown before a delete.
pub fn delete_prompt(name: &str) -> String {
    format!("Delete \"{name}\"? Solutions saved from it will be removed as well.")
}

/// Route that opens the compliance view with `doc_id` pre-selected.
pub fn compliance_route(doc_id: &str) -> String {
    format!("/compliance?doc={}", urlencoding::encode(doc_id))
}
