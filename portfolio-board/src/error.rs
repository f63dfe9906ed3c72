use crate::domain::QuestionId;
use derive_more::Display;
use thiserror::Error;

/// A required form field.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    #[display("author")]
    Author,
    #[display("title")]
    Title,
    #[display("content")]
    Content,
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("subject")]
    Subject,
    #[display("message")]
    Message,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(Field),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize questions: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("question not found: {0}")]
    QuestionNotFound(QuestionId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl BoardError {
    /// Text shown to the visitor in the notice dialog.
    pub fn user_message(&self) -> String {
        match self {
            BoardError::Validation(_) => "Please fill in every field.".to_string(),
            BoardError::QuestionNotFound(_) => {
                "That question could not be found. It may have been removed.".to_string()
            }
            BoardError::Storage(_) => {
                "Your post could not be saved in this browser. Please try again.".to_string()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("malformed project feed: {0}")]
    Malformed(#[from] serde_json::Error),
}
