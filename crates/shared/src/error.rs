use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error body some deployments of the employee API return
/// alongside a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Parses an error body, returning `None` unless it carries a non-blank
    /// `message` field.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let parsed: Self = serde_json::from_slice(body).ok()?;
        if parsed.message.trim().is_empty() {
            None
        } else {
            Some(parsed)
        }
    }
}
