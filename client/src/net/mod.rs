//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns every HTTP call the app makes, `types` defines the JSON schema
//! shared with the backend, and `error` is the failure taxonomy views match
//! on when a call does not succeed.

pub mod api;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod fake_api;
