use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{block::BlockKind, score::Score};

/// Longest free-text answer a student may submit.
pub const FREE_TEXT_MAX_LEN: usize = 100;

/// One student's graded attempt at a single block.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BlockResult {
    pub id: String,
    pub student_id: String,
    pub block_id: String,
    pub date: DateTime<Utc>,
    pub score: i32,
    pub max_score: i32,
    /// Manual score currently standing in for the derived one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_score: Option<i32>,
    pub answer: SubmittedAnswer,
}

/// What the student handed in. The variant decides how the result is scored.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SubmittedAnswer {
    /// No derivable answer; only an override can set the score.
    Manual,
    /// The student marked the block as read.
    Acknowledgement(bool),
    /// Ids of the selected choice options.
    Choice(Vec<i64>),
    Numeric(Option<f64>),
    FreeText(Option<String>),
}

impl SubmittedAnswer {
    pub fn variant_name(&self) -> &'static str {
        match self {
            SubmittedAnswer::Manual => "manual",
            SubmittedAnswer::Acknowledgement(_) => "acknowledgement",
            SubmittedAnswer::Choice(_) => "choice",
            SubmittedAnswer::Numeric(_) => "numeric",
            SubmittedAnswer::FreeText(_) => "free_text",
        }
    }

    /// Whether this answer can be recorded against a block of `kind`.
    pub fn fits(&self, kind: BlockKind) -> bool {
        matches!(
            (self, kind),
            (SubmittedAnswer::Manual, _)
                | (SubmittedAnswer::Acknowledgement(_), BlockKind::Text)
                | (SubmittedAnswer::Choice(_), BlockKind::Choice)
                | (SubmittedAnswer::Numeric(_), BlockKind::Numeric)
                | (SubmittedAnswer::FreeText(_), BlockKind::FreeText)
        )
    }
}

impl BlockResult {
    pub fn new(student_id: &str, block_id: &str, answer: SubmittedAnswer) -> Self {
        BlockResult {
            id: Uuid::new_v4().to_string(),
            student_id: student_id.to_string(),
            block_id: block_id.to_string(),
            date: Utc::now(),
            score: 0,
            max_score: 0,
            override_score: None,
            answer,
        }
    }

    pub fn current_score(&self) -> Score {
        Score::new(self.score, self.max_score)
    }

    pub fn apply(&mut self, score: Score) {
        self.score = score.score;
        self.max_score = score.max_score;
    }
}
