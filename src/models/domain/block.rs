use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A question definition that students answer.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Block {
    pub id: String,
    pub title: String,
    pub kind: BlockKind,
    pub score: i32, // configured point value, may change between submission and re-grade
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Text,     // read and acknowledge
    Choice,   // pick any number of options
    Numeric,  // single numeric answer
    FreeText, // short typed answer
}

impl Block {
    pub fn new(title: &str, kind: BlockKind, score: i32, correct_answer: Option<&str>) -> Self {
        Block {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            kind,
            score,
            correct_answer: correct_answer.map(str::to_string),
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }
}
