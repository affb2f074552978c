// src/error.rs
use partial_response_selector::SyntaxError;
use thiserror::Error;

/// Errors raised while resolving a selector or writing a partial response.
#[derive(Error, Debug)]
pub enum PartialResponseError {
    #[error("Invalid fields selector: {0}")]
    InvalidSelector(#[from] SyntaxError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PartialResponseError {
    /// Whether the client caused the failure, e.g. to answer with HTTP 400.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PartialResponseError::InvalidSelector(_))
    }
}
