use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::score::Score;

/// Aggregate result of a task, made up of linked block results.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TaskResult {
    pub id: String,
    pub student_id: String,
    pub date: DateTime<Utc>,
    pub score: i32,
    pub max_score: i32,
}

impl TaskResult {
    pub fn new(student_id: &str) -> Self {
        TaskResult {
            id: Uuid::new_v4().to_string(),
            student_id: student_id.to_string(),
            date: Utc::now(),
            score: 0,
            max_score: 0,
        }
    }

    pub fn apply(&mut self, totals: Score) {
        self.score = totals.score;
        self.max_score = totals.max_score;
    }
}
