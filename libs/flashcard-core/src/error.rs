//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using FlashcardError.
pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum FlashcardError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid deck file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid number of questions: {0:?}")]
    InvalidCount(String),

    #[error("input closed unexpectedly")]
    UnexpectedEof,
}

/// Reasons a new card is refused. These never end a session; the user is
/// asked again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("The term \"{0}\" already exists. Try again:")]
    DuplicateTerm(String),

    #[error("The definition \"{0}\" already exists. Try again:")]
    DuplicateDefinition(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_quote_the_value() {
        assert_eq!(
            Rejection::DuplicateTerm("cat".to_string()).to_string(),
            "The term \"cat\" already exists. Try again:"
        );
        assert_eq!(
            Rejection::DuplicateDefinition("animal".to_string()).to_string(),
            "The definition \"animal\" already exists. Try again:"
        );
    }

    #[test]
    fn invalid_count_display() {
        let error = FlashcardError::InvalidCount("three".to_string());
        assert_eq!(error.to_string(), "invalid number of questions: \"three\"");
    }
}
