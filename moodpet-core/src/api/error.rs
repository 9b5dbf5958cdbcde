//! API error types.

use thiserror::Error;

/// Errors returned by [`PetApi`](super::PetApi) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, reset)
    #[error("Network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status
    #[error("Server returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body did not have the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),
    /// Rejected before any request was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// True for failures caused by the transport rather than the backend.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
