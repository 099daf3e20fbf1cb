//! Error types for the conversational interface.

use scout_catalog::CatalogError;

/// Errors from the conversation engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),
    #[error("catalog error: {0}")]
    Catalog(String),
}

impl From<CatalogError> for ChatError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Unavailable(msg) => ChatError::CatalogUnavailable(msg),
            other => ChatError::Catalog(other.to_string()),
        }
    }
}
