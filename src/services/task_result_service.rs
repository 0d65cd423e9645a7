use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Score, TaskResult, TaskResultBlockResultLink},
    repositories::{BlockResultRepository, TaskResultLinkRepository, TaskResultRepository},
};

pub struct TaskResultService {
    task_results: Arc<dyn TaskResultRepository>,
    block_results: Arc<dyn BlockResultRepository>,
    links: Arc<dyn TaskResultLinkRepository>,
}

impl TaskResultService {
    pub fn new(
        task_results: Arc<dyn TaskResultRepository>,
        block_results: Arc<dyn BlockResultRepository>,
        links: Arc<dyn TaskResultLinkRepository>,
    ) -> Self {
        Self {
            task_results,
            block_results,
            links,
        }
    }

    pub async fn get_task_result(&self, id: &str) -> AppResult<TaskResult> {
        self.task_results
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task result with id '{}' not found", id)))
    }

    /// Rolls a block result up into a task result. Both must already exist.
    pub async fn link(
        &self,
        task_result_id: &str,
        block_result_id: &str,
    ) -> AppResult<TaskResultBlockResultLink> {
        self.get_task_result(task_result_id).await?;
        if self.block_results.find_by_id(block_result_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Block result with id '{}' not found",
                block_result_id
            )));
        }

        let link = self
            .links
            .create(TaskResultBlockResultLink::new(task_result_id, block_result_id))
            .await?;

        log::info!(
            "Linked block result {} to task result {}",
            block_result_id,
            task_result_id
        );
        Ok(link)
    }

    /// Drops every link of a deleted task result.
    pub async fn unlink_task_result(&self, task_result_id: &str) -> AppResult<u64> {
        let removed = self.links.delete_by_task_result(task_result_id).await?;
        log::debug!("Removed {} link(s) of task result {}", removed, task_result_id);
        Ok(removed)
    }

    /// Drops every link of a deleted block result.
    pub async fn unlink_block_result(&self, block_result_id: &str) -> AppResult<u64> {
        let removed = self.links.delete_by_block_result(block_result_id).await?;
        log::debug!("Removed {} link(s) of block result {}", removed, block_result_id);
        Ok(removed)
    }

    /// Sums the linked block results into the task result and stores the totals.
    pub async fn refresh_totals(&self, task_result_id: &str) -> AppResult<Score> {
        let mut task_result = self.get_task_result(task_result_id).await?;
        let links = self.links.find_by_task_result(task_result_id).await?;

        let mut totals = Score::default();
        for link in &links {
            match self.block_results.find_by_id(&link.block_result_id).await? {
                Some(result) => totals = totals + result.current_score(),
                None => log::warn!(
                    "Task result {} links to missing block result {}",
                    task_result_id,
                    link.block_result_id
                ),
            }
        }

        task_result.apply(totals);
        self.task_results.update(task_result).await?;

        log::info!(
            "Task result {} totals refreshed from {} link(s): {}/{}",
            task_result_id,
            links.len(),
            totals.score,
            totals.max_score
        );
        Ok(totals)
    }
}
