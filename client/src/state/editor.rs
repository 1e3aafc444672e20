//! Message protocol and session state for the embedded diagram editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor runs in an isolated `<iframe>` and talks to the app only via
//! `postMessage` with JSON string payloads. Incoming events are decoded into
//! `EditorEvent`; `EditorSession::dispatch` turns each into one
//! `EditorEffect` that the component carries out (post a command back,
//! persist through the API, or close).
//!
//! TRADE-OFFS
//! ==========
//! Messages whose origin differs from the configured editor origin are
//! dropped before decoding. Unknown event names decode to `Other` and are
//! ignored rather than treated as errors.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;

/// Diagram pushed into the editor when a document has no stored diagram.
pub const BLANK_DIAGRAM: &str = r#"<mxGraphModel><root><mxCell id="0"/><mxCell id="1" parent="0"/></root></mxGraphModel>"#;

/// Events emitted by the editor frame.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum EditorEvent {
    /// The editor is ready to receive a diagram.
    Init,
    /// The diagram pushed with `load` has been rendered.
    Load,
    /// The user pressed save; `exit` is set for "Save & Exit".
    Save {
        xml: String,
        #[serde(default)]
        exit: bool,
    },
    Autosave { xml: String },
    /// The user closed the editor.
    Exit {
        #[serde(default)]
        modified: bool,
    },
    Configure,
    #[serde(other)]
    Other,
}

/// Commands posted to the editor frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum EditorCommand {
    Load { xml: String, autosave: u8 },
    Status { message: String, modified: bool },
}

impl EditorCommand {
    /// JSON string payload for `postMessage`.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// What the editor component must do in response to an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorEffect {
    Send(EditorCommand),
    /// Save this XML through the API; close afterwards when `close` is set.
    Persist { xml: String, close: bool },
    Close,
    Ignore,
}

/// Decode a raw `postMessage` payload, rejecting foreign origins.
pub fn parse_editor_message(origin: &str, expected_origin: &str, data: &str) -> Option<EditorEvent> {
    if origin != expected_origin {
        return None;
    }
    serde_json::from_str(data).ok()
}

/// Lifecycle of the diagram loaded for one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorStatus {
    Loading,
    Ready,
    Saving,
    Saved,
    Failed(String),
}

/// One open editor session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorSession {
    pub doc_id: String,
    pub doc_name: String,
    /// Current diagram XML, updated on every save or autosave.
    pub xml: Option<String>,
    pub status: EditorStatus,
    /// Set once the frame has sent `init` and received the diagram.
    pub initialized: bool,
}

impl EditorSession {
    pub fn open(doc_id: &str, doc_name: &str) -> Self {
        Self {
            doc_id: doc_id.to_owned(),
            doc_name: doc_name.to_owned(),
            xml: None,
            status: EditorStatus::Loading,
            initialized: false,
        }
    }

    /// Record the fetched diagram. A fetch failure still lets the user start
    /// from a blank diagram.
    pub fn apply_loaded(&mut self, result: Result<String, ApiError>) -> Option<EditorEffect> {
        match result {
            Ok(xml) => self.xml = Some(xml),
            Err(e) => {
                leptos::logging::warn!("diagram fetch for {} failed: {e}", self.doc_id);
                self.xml = Some(String::new());
            }
        }
        self.status = EditorStatus::Ready;
        // The frame may have sent `init` before the fetch resolved.
        self.initialized.then(|| EditorEffect::Send(self.load_command()))
    }

    fn load_command(&self) -> EditorCommand {
        let xml = self.xml.as_deref().map(str::trim).filter(|x| !x.is_empty()).unwrap_or(BLANK_DIAGRAM);
        EditorCommand::Load { xml: xml.to_owned(), autosave: 0 }
    }

    /// Handle one editor event.
    pub fn dispatch(&mut self, event: EditorEvent) -> EditorEffect {
        match event {
            EditorEvent::Init => {
                self.initialized = true;
                if self.xml.is_none() {
                    // Pushed from `apply_loaded` once the fetch completes.
                    return EditorEffect::Ignore;
                }
                EditorEffect::Send(self.load_command())
            }
            EditorEvent::Save { xml, exit } => {
                self.xml = Some(xml.clone());
                self.status = EditorStatus::Saving;
                EditorEffect::Persist { xml, close: exit }
            }
            EditorEvent::Autosave { xml } => {
                self.xml = Some(xml);
                EditorEffect::Ignore
            }
            EditorEvent::Exit { .. } => EditorEffect::Close,
            EditorEvent::Load | EditorEvent::Configure | EditorEvent::Other => EditorEffect::Ignore,
        }
    }

    /// Record the outcome of a persist and produce the status command shown
    /// inside the editor.
    pub fn apply_saved(&mut self, result: Result<(), ApiError>) -> EditorCommand {
        match result {
            Ok(()) => {
                self.status = EditorStatus::Saved;
                EditorCommand::Status { message: "Diagram saved".to_owned(), modified: false }
            }
            Err(e) => {
                leptos::logging::warn!("diagram save for {} failed: {e}", self.doc_id);
                let message = format!("Save failed: {}", e.user_message());
                self.status = EditorStatus::Failed(message.clone());
                EditorCommand::Status { message, modified: true }
            }
        }
    }
}
