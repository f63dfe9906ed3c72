use gloo_storage::errors::StorageError as GlooStorageError;
use gloo_storage::{LocalStorage, Storage};
use portfolio_board::{Question, QuestionStore, StorageError};
use tracing::warn;

/// Board persistence in the browser's local storage.
#[derive(Debug, Clone)]
pub struct LocalStore {
    key: String,
}

impl LocalStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl QuestionStore for LocalStore {
    fn load(&self) -> Vec<Question> {
        match LocalStorage::get::<Vec<Question>>(&self.key) {
            Ok(questions) => questions,
            Err(GlooStorageError::KeyNotFound(_)) => Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored questions are unreadable, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&mut self, questions: &[Question]) -> Result<(), StorageError> {
        LocalStorage::set(&self.key, questions).map_err(|e| match e {
            GlooStorageError::SerdeError(e) => StorageError::Serialize(e),
            other => StorageError::Backend(other.to_string()),
        })
    }
}
