use portfolio_board::storage::{decode, encode};
use portfolio_board::{Question, QuestionStore, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A board exported to disk: the file holds exactly the value the browser
/// keeps under its storage key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionStore for JsonFileStore {
    fn load(&self) -> Vec<Question> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode(Some(&raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "board file missing, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "board file unreadable, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&mut self, questions: &[Question]) -> Result<(), StorageError> {
        let raw = encode(questions)?;
        fs::write(&self.path, raw).map_err(|e| {
            StorageError::Backend(format!("failed to write {}: {}", self.path.display(), e))
        })
    }
}
