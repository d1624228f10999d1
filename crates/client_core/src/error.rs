use shared::error::ApiError;
use thiserror::Error;

pub const FETCH_FAILURE_FALLBACK: &str =
    "Failed to fetch employees. Please ensure the ColdFusion server is running.";

/// Diagnostic tag for a failed fetch. The directory treats every kind the
/// same way; the tag only feeds logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailureKind {
    Transport,
    Status(u16),
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchFailure {
    kind: FetchFailureKind,
    message: String,
}

impl FetchFailure {
    pub fn new(kind: FetchFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn transport() -> Self {
        Self::new(FetchFailureKind::Transport, FETCH_FAILURE_FALLBACK)
    }

    /// Non-success response. A structured `{ "message": ... }` body wins over
    /// the generic fallback.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        Self::with_body_message(FetchFailureKind::Status(status), body)
    }

    /// Success status but the body is not a list of employees. Some servers
    /// report errors this way, so a structured message is still honored.
    pub fn from_undecodable_body(body: &[u8]) -> Self {
        Self::with_body_message(FetchFailureKind::Decode, body)
    }

    fn with_body_message(kind: FetchFailureKind, body: &[u8]) -> Self {
        match ApiError::from_body(body) {
            Some(api_error) => Self::new(kind, api_error.message),
            None => Self::new(kind, FETCH_FAILURE_FALLBACK),
        }
    }

    pub fn kind(&self) -> FetchFailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}
