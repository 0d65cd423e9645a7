use serde::Serialize;

use crate::models::domain::{BlockResult, Score};

#[derive(Debug, Clone, Serialize)]
pub struct GradeResponse {
    pub result_id: String,
    pub score: i32,
    pub max_score: i32,
    pub full_marks: bool,
    pub persisted: bool,
}

impl GradeResponse {
    pub fn new(result: &BlockResult, persisted: bool) -> Self {
        GradeResponse {
            result_id: result.id.clone(),
            score: result.score,
            max_score: result.max_score,
            full_marks: result.current_score().is_full(),
            persisted,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegradeBlockResponse {
    pub block_id: String,
    pub regraded: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskTotalsResponse {
    pub task_result_id: String,
    pub score: i32,
    pub max_score: i32,
}

impl TaskTotalsResponse {
    pub fn new(task_result_id: &str, totals: Score) -> Self {
        TaskTotalsResponse {
            task_result_id: task_result_id.to_string(),
            score: totals.score,
            max_score: totals.max_score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub database: String,
    pub status: &'static str,
}
