//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported export version '{found}' (expected '{expected}')")]
    UnsupportedVersion { found: String, expected: String },
}

pub type EditorResult<T> = Result<T, EditorError>;
