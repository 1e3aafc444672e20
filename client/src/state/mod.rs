//! View state shared through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each module holds a plain state struct plus the request orchestration for
//! one view. Structs are wrapped in `RwSignal` by `app::App`; the async
//! workflow functions take a `DocumentApi` so they run unchanged against the
//! browser client and the in-memory test backend.

pub mod chat;
pub mod compliance;
pub mod documents;
pub mod editor;
pub mod library;
