use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Records that a block result rolls up into a task result.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TaskResultBlockResultLink {
    pub id: String,
    pub task_result_id: String,
    pub block_result_id: String,
    pub created_at: DateTime<Utc>,
}

impl TaskResultBlockResultLink {
    pub fn new(task_result_id: &str, block_result_id: &str) -> Self {
        TaskResultBlockResultLink {
            id: Uuid::new_v4().to_string(),
            task_result_id: task_result_id.to_string(),
            block_result_id: block_result_id.to_string(),
            created_at: Utc::now(),
        }
    }
}
