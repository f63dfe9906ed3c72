use crate::error::{Field, ValidationError};
use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct QuestionId(pub u64);

#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AnswerId(pub u64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub author: String,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub author: String,
    pub content: String,
    pub date: DateTime<Utc>,
}

/// Trimmed, non-empty input for a new question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    author: String,
    title: String,
    content: String,
}

impl QuestionDraft {
    pub fn new(author: &str, title: &str, content: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            author: required(author, Field::Author)?,
            title: required(title, Field::Title)?,
            content: required(content, Field::Content)?,
        })
    }

    pub fn into_question(self, id: QuestionId, date: DateTime<Utc>) -> Question {
        Question {
            id,
            author: self.author,
            title: self.title,
            content: self.content,
            date,
            answers: Vec::new(),
        }
    }
}

/// Trimmed, non-empty input for a new answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerDraft {
    author: String,
    content: String,
}

impl AnswerDraft {
    pub fn new(author: &str, content: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            author: required(author, Field::Author)?,
            content: required(content, Field::Content)?,
        })
    }

    pub fn into_answer(self, id: AnswerId, date: DateTime<Utc>) -> Answer {
        Answer {
            id,
            author: self.author,
            content: self.content,
            date,
        }
    }
}

pub(crate) fn required(value: &str, field: Field) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Picks a timestamp-based id that is strictly greater than every id already
/// in use within the same scope.
pub fn next_id(now: DateTime<Utc>, taken: impl IntoIterator<Item = u64>) -> u64 {
    let stamp = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    match taken.into_iter().max() {
        Some(max) => stamp.max(max.saturating_add(1)),
        None => stamp,
    }
}

impl Question {
    pub fn next_answer_id(&self, now: DateTime<Utc>) -> AnswerId {
        AnswerId(next_id(now, self.answers.iter().map(|a| a.id.0)))
    }
}

pub fn next_question_id(questions: &[Question], now: DateTime<Utc>) -> QuestionId {
    QuestionId(next_id(now, questions.iter().map(|q| q.id.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn draft_trims_fields() {
        let draft = QuestionDraft::new("  Mina ", "\tHello\n", " body ").unwrap();
        let q = draft.into_question(QuestionId(1), at("2024-01-01T00:00:00Z"));
        assert_eq!(q.author, "Mina");
        assert_eq!(q.title, "Hello");
        assert_eq!(q.content, "body");
        assert!(q.answers.is_empty());
    }

    #[test]
    fn draft_rejects_whitespace_only() {
        let err = QuestionDraft::new("a", "   ", "c").unwrap_err();
        assert_eq!(err, ValidationError::EmptyField(Field::Title));

        let err = AnswerDraft::new("\n", "c").unwrap_err();
        assert_eq!(err, ValidationError::EmptyField(Field::Author));
    }

    #[test]
    fn next_id_uses_timestamp_when_free() {
        let now = at("2024-01-01T00:00:00.250Z");
        assert_eq!(next_id(now, []), now.timestamp_millis() as u64);
        assert_eq!(next_id(now, [5, 7]), now.timestamp_millis() as u64);
    }

    #[test]
    fn next_id_never_collides_within_same_millisecond() {
        let now = at("2024-01-01T00:00:00Z");
        let first = next_id(now, []);
        let second = next_id(now, [first]);
        let third = next_id(now, [first, second]);
        assert_eq!(second, first + 1);
        assert_eq!(third, first + 2);
    }

    #[test]
    fn wire_shape_matches_browser_layout() {
        let raw = r#"{"id":1704067200000,"author":"a","title":"t","content":"c",
            "date":"2024-01-01T00:00:00.000Z",
            "answers":[{"id":1704067300000,"author":"b","content":"r","date":"2024-01-01T00:01:40.000Z"}]}"#;
        let q: Question = serde_json::from_str(raw).unwrap();
        assert_eq!(q.id, QuestionId(1_704_067_200_000));
        assert_eq!(q.answers.len(), 1);
        assert_eq!(q.answers[0].author, "b");

        let value = serde_json::to_value(&q).unwrap();
        assert!(value["id"].is_u64());
        assert!(value["date"].as_str().unwrap().starts_with("2024-01-01T00:00:00"));
    }
}
