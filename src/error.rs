//! Error types shared by the store, the round engine and the front end.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a question file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{0} must contain at least one question")]
    Empty(PathBuf),

    /// A question broke a content rule; `index` is 1-based.
    #[error("question {index} in {path} is invalid: {reason}")]
    Invalid {
        path: PathBuf,
        index: usize,
        reason: String,
    },
}

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A random question was requested from a store with no rows.
    #[error("the question store is empty")]
    EmptyStore,

    /// The backing database failed.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// An answer was submitted while no question was on screen.
    #[error("no question is waiting for an answer")]
    NoActiveRound,

    /// The submitted label is not one of A, B, C or D.
    #[error("invalid answer label {0:?}, expected one of A, B, C, D")]
    InvalidLabel(String),

    /// A question handed to the store broke a content rule; `index` is 1-based.
    #[error("question {index} cannot be stored: {reason}")]
    InvalidQuestion { index: usize, reason: String },

    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl QuizError {
    /// Returns `true` if the session can carry on after showing this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            QuizError::EmptyStore | QuizError::NoActiveRound | QuizError::InvalidLabel(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_errors_are_recoverable() {
        assert!(QuizError::EmptyStore.is_recoverable());
        assert!(QuizError::NoActiveRound.is_recoverable());
        assert!(QuizError::InvalidLabel("Z".into()).is_recoverable());
        assert!(!QuizError::Storage(rusqlite::Error::InvalidQuery).is_recoverable());
        assert!(!QuizError::Io(io::Error::other("disk")).is_recoverable());
        assert!(
            !QuizError::InvalidQuestion {
                index: 1,
                reason: "question text is empty".into(),
            }
            .is_recoverable()
        );
    }

    #[test]
    fn invalid_label_message_names_the_label() {
        let msg = QuizError::InvalidLabel("Z".into()).to_string();
        assert!(msg.contains("\"Z\""));
    }
}
