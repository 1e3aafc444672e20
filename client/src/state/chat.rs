//! Floating assistant widget state and transcript formatting.
//!
//! DESIGN
//! ======
//! The transcript is append-only: sends, replies, warnings, and compliance
//! summaries are all pushed to the end and never edited. Layout of bot text
//! (numbered sections vs. one block) is derived at render time from the
//! stored text.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::error::ApiError;
use crate::net::types::ComplianceResult;

pub const NO_DOCUMENT_WARNING: &str = "Please select a document before asking a question.";
pub const CONNECT_ERROR: &str = "Error: Could not connect to AI assistant.";
pub const NO_ISSUES_MESSAGE: &str = "✅ No compliance issues found. Your design meets the checked policies.";

/// Who produced a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
    /// Locally generated notices (warnings, errors).
    System,
}

impl Sender {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
            Self::System => "system",
        }
    }
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// Layout fixed at creation; `None` means derive it from `text`.
    pub sections: Option<BotLayout>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), sender, text: text.into(), sections: None }
    }

    /// A message whose items must render exactly as given.
    pub fn with_sections(sender: Sender, text: impl Into<String>, sections: BotLayout) -> Self {
        Self { sections: Some(sections), ..Self::new(sender, text) }
    }

    /// How the message should be laid out.
    pub fn layout(&self) -> BotLayout {
        self.sections.clone().unwrap_or_else(|| split_numbered_sections(&self.text))
    }
}

/// Chat widget state.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    /// Document id questions are bound to; empty means none.
    pub selected_doc: String,
    pub sending: bool,
    /// Last compliance `result_seq` already summarized.
    pub last_seeded_seq: u64,
}

/// Whether a send may proceed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatSendOutcome {
    /// Blank input or a send already in flight; nothing happens.
    Empty,
    /// No document selected; a warning was appended and no request may be made.
    NoDocument,
    Ready { doc_id: String, query: String },
}

impl ChatState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Validate the input and, when ready, append the user's message and
    /// clear the input.
    pub fn prepare_send(&mut self) -> ChatSendOutcome {
        let query = self.input.trim().to_owned();
        if query.is_empty() || self.sending {
            return ChatSendOutcome::Empty;
        }
        let doc_id = self.selected_doc.trim().to_owned();
        if doc_id.is_empty() {
            self.messages.push(ChatMessage::new(Sender::System, NO_DOCUMENT_WARNING));
            return ChatSendOutcome::NoDocument;
        }
        self.messages.push(ChatMessage::new(Sender::User, query.clone()));
        self.input.clear();
        self.sending = true;
        ChatSendOutcome::Ready { doc_id, query }
    }

    pub fn apply_reply(&mut self, reply: Result<String, ApiError>) {
        self.sending = false;
        match reply {
            Ok(answer) => self.messages.push(ChatMessage::new(Sender::Bot, answer)),
            Err(e) => {
                leptos::logging::warn!("chat request failed: {e}");
                self.messages.push(ChatMessage::new(Sender::System, CONNECT_ERROR));
            }
        }
    }

    /// Open the widget and summarize a new compliance result.
    ///
    /// Each `seq` is summarized at most once; returns whether a message was
    /// appended.
    pub fn seed_from_compliance(&mut self, doc_id: &str, doc_name: &str, result: &ComplianceResult, seq: u64) -> bool {
        if seq == 0 || seq <= self.last_seeded_seq {
            return false;
        }
        self.last_seeded_seq = seq;
        self.selected_doc = doc_id.to_owned();
        if result.issues.is_empty() {
            self.messages.push(ChatMessage::new(Sender::Bot, NO_ISSUES_MESSAGE));
        } else {
            self.open = true;
            self.messages.push(ChatMessage::with_sections(
                Sender::Bot,
                compliance_summary(doc_name, &result.issues),
                compliance_summary_layout(doc_name, &result.issues),
            ));
        }
        true
    }
}

/// Numbered issue summary used to seed the transcript.
pub fn compliance_summary(doc_name: &str, issues: &[String]) -> String {
    let mut out = summary_intro(doc_name, issues.len());
    for item in numbered_issues(issues) {
        out.push('\n');
        out.push_str(&item);
    }
    out
}

/// One item per issue, whatever the issue text contains.
pub fn compliance_summary_layout(doc_name: &str, issues: &[String]) -> BotLayout {
    BotLayout::Sections { intro: Some(summary_intro(doc_name, issues.len())), items: numbered_issues(issues) }
}

fn summary_intro(doc_name: &str, count: usize) -> String {
    format!(
        "⚠️ Compliance check found {count} issue{} in \"{doc_name}\". Ask me how to fix any of them:",
        if count == 1 { "" } else { "s" }
    )
}

fn numbered_issues(issues: &[String]) -> Vec<String> {
    issues.iter().enumerate().map(|(i, issue)| format!("{}. {}", i + 1, issue.trim())).collect()
}

/// How a bot message should be laid out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BotLayout {
    Plain(String),
    /// Text split at numbered markers; each item keeps its `N.` prefix.
    Sections { intro: Option<String>, items: Vec<String> },
}

/// Split `text` at numbered-section markers.
///
/// A marker is a run of ASCII digits at the start of the text or after
/// whitespace, followed by `.` and whitespace. `3.14` and `v2.` are not
/// markers.
pub fn split_numbered_sections(text: &str) -> BotLayout {
    let starts = section_starts(text);
    let Some(&first) = starts.first() else {
        return BotLayout::Plain(text.trim().to_owned());
    };
    let intro = text[..first].trim();
    let mut items = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        let item = text[start..end].trim();
        if !item.is_empty() {
            items.push(item.to_owned());
        }
    }
    BotLayout::Sections { intro: (!intro.is_empty()).then(|| intro.to_owned()), items }
}

fn section_starts(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut starts = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let at_boundary = i == 0 || bytes[i - 1].is_ascii_whitespace();
        if at_boundary && bytes[i].is_ascii_digit() {
            let mut j = i;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            let followed_by_space = bytes.get(j + 1).is_some_and(u8::is_ascii_whitespace);
            if bytes.get(j) == Some(&b'.') && followed_by_space {
                starts.push(i);
            }
            i = j;
            continue;
        }
        i += 1;
    }
    starts
}
