// =============================================================================
// Catalog error type
// =============================================================================

use thiserror::Error;

/// Errors from catalog backends.
///
/// `Unavailable` means the backend itself cannot be reached and is a
/// different situation from a search that matches nothing: callers must not
/// treat it as an empty result or try to relax filters around it.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid catalog data: {0}")]
    Data(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Data(err.to_string())
    }
}
