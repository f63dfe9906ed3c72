use crate::domain::Question;
use crate::error::StorageError;
use tracing::warn;

/// Storage key used by the board when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "qna_questions";

/// Persisted collection of questions. `load` never fails: a missing or
/// unreadable value is treated as an empty board.
pub trait QuestionStore {
    fn load(&self) -> Vec<Question>;
    fn save(&mut self, questions: &[Question]) -> Result<(), StorageError>;
}

/// Parses a stored value, falling back to an empty collection.
pub fn decode(raw: Option<&str>) -> Vec<Question> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(questions) => questions,
        Err(e) => {
            warn!(error = %e, "stored questions are unreadable, starting empty");
            Vec::new()
        }
    }
}

pub fn encode(questions: &[Question]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(questions)?)
}

/// Keeps the serialized value in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an arbitrary stored value, which need not be valid.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl QuestionStore for MemoryStore {
    fn load(&self) -> Vec<Question> {
        decode(self.raw.as_deref())
    }

    fn save(&mut self, questions: &[Question]) -> Result<(), StorageError> {
        self.raw = Some(encode(questions)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Answer, AnswerId, QuestionId};

    fn sample() -> Vec<Question> {
        vec![Question {
            id: QuestionId(1_700_000_000_000),
            author: "Mina".into(),
            title: "Rust or Go?".into(),
            content: "line one\nline two".into(),
            date: "2024-02-01T10:00:00.123Z".parse().unwrap(),
            answers: vec![Answer {
                id: AnswerId(1_700_000_000_500),
                author: "Jun".into(),
                content: "Rust.".into(),
                date: "2024-02-01T11:00:00Z".parse().unwrap(),
            }],
        }]
    }

    #[test]
    fn missing_value_loads_empty() {
        assert!(MemoryStore::new().load().is_empty());
    }

    #[test]
    fn corrupt_value_loads_empty() {
        assert!(MemoryStore::with_raw("{not json").load().is_empty());
        assert!(MemoryStore::with_raw(r#"{"id":1}"#).load().is_empty());
    }

    #[test]
    fn save_then_load_returns_same_collection() {
        let mut store = MemoryStore::new();
        let _ = store.load();
        store.save(&sample()).unwrap();
        assert_eq!(store.load(), sample());
    }

    #[test]
    fn save_replaces_previous_value() {
        let mut store = MemoryStore::new();
        store.save(&sample()).unwrap();
        store.save(&[]).unwrap();
        assert_eq!(store.raw(), Some("[]"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn question_without_answers_field_loads() {
        let raw = r#"[{"id":3,"author":"a","title":"t","content":"c","date":"2024-01-01T00:00:00.000Z"}]"#;
        let loaded = decode(Some(raw));
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].answers.is_empty());
    }
}
