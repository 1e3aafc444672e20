//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render view chrome and per-record widgets while reading/writing
//! shared state from Leptos context providers.

pub mod chat_widget;
pub mod diagram_editor;
pub mod document_table;
pub mod history_table;
pub mod issue_list;
pub mod score_gauge;
pub mod sidebar;
pub mod solution_card;
