//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::QuestionError;

/// Guard violations on a quiz session.
///
/// The UI disables the controls that would trigger these, so they only show
/// up when the session is driven directly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("question {index} is out of range (quiz has {total} questions)")]
    QuestionOutOfRange { index: usize, total: usize },
    #[error("quiz already submitted")]
    Submitted,
}

/// Errors emitted by a `ClipboardSink`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("failed to copy to clipboard: {0}")]
    Write(String),
}

/// Errors emitted while loading a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] QuestionError),
}
