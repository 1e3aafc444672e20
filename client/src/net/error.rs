//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Views never see raw transport errors: they get an `ApiError`, log it, and
//! render `user_message()` inline. Nothing here is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by `DocumentApi` operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or sent, or no response arrived.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("backend responded with status {status}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Browser-only call made during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Short human-readable text suitable for an inline error line.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) | Self::Unavailable => "Could not reach the backend.".to_owned(),
            Self::Status { status, body } if body.trim().is_empty() => {
                format!("Backend error ({status}).")
            }
            Self::Status { status, body } => format!("Backend error ({status}): {}", body.trim()),
            Self::Decode(_) => "Unexpected response from the backend.".to_owned(),
        }
    }

    /// Whether the backend was reached at all.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Transport(other.to_string()),
        }
    }
}
