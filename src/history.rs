//! Append-only log of answered questions, stored as a JSON array.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::GameError;
use crate::question::{ProblemKind, Question};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question: String,
    pub answer: i32,
    pub correct: bool,
    pub correct_answer: i32,
    #[serde(rename = "type")]
    pub kind: ProblemKind,
    /// Epoch milliseconds.
    pub timestamp: u64,
}

impl AnswerRecord {
    pub fn new(question: &Question, answer: i32, timestamp: u64) -> Self {
        Self {
            question: question.prompt.clone(),
            answer,
            correct: question.is_correct(answer),
            correct_answer: question.answer,
            kind: question.kind,
            timestamp,
        }
    }
}

/// Append `record` to an existing serialized log (absent means empty).
/// An unreadable log is replaced rather than blocking new records.
pub fn append_record(existing: Option<&str>, record: &AnswerRecord) -> Result<String, GameError> {
    let mut records: Vec<AnswerRecord> = match existing {
        Some(json) => serde_json::from_str(json).unwrap_or_else(|e| {
            warn!(target: "history", "discarding unreadable answer log: {}", e);
            Vec::new()
        }),
        None => Vec::new(),
    };
    records.push(record.clone());
    Ok(serde_json::to_string(&records)?)
}
