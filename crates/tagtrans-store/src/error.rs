//! Error types for translation-store operations

use thiserror::Error;

/// Errors that can occur while building a translation store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The document is not valid JSON or lacks a required field
    #[error("Failed to parse dataset document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for tagtrans_common::TagTransError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidDocument(source) => {
                tagtrans_common::TagTransError::parse_with_source(
                    "Dataset document rejected",
                    source,
                )
            }
        }
    }
}
