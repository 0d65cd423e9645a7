#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use blockgrade::{
    errors::{AppError, AppResult},
    models::domain::{Block, BlockResult, ChoiceOption, TaskResult, TaskResultBlockResultLink},
    repositories::{
        BlockRepository, BlockResultRepository, ChoiceOptionRepository, TaskResultLinkRepository,
        TaskResultRepository,
    },
};

pub struct InMemoryBlockRepository {
    blocks: Arc<RwLock<HashMap<String, Block>>>,
}

impl InMemoryBlockRepository {
    pub fn new() -> Self {
        Self {
            blocks: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl BlockRepository for InMemoryBlockRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Block>> {
        let blocks = self.blocks.read().await;
        Ok(blocks.get(id).cloned())
    }

    async fn create(&self, block: Block) -> AppResult<Block> {
        let mut blocks = self.blocks.write().await;
        if blocks.contains_key(&block.id) {
            return Err(AppError::AlreadyExists(format!(
                "Block with id '{}' already exists",
                block.id
            )));
        }
        blocks.insert(block.id.clone(), block.clone());
        Ok(block)
    }

    async fn update(&self, block: Block) -> AppResult<Block> {
        let mut blocks = self.blocks.write().await;
        if !blocks.contains_key(&block.id) {
            return Err(AppError::NotFound(format!(
                "Block with id '{}' not found",
                block.id
            )));
        }
        blocks.insert(block.id.clone(), block.clone());
        Ok(block)
    }
}

pub struct InMemoryChoiceOptionRepository {
    options: Arc<RwLock<Vec<ChoiceOption>>>,
}

impl InMemoryChoiceOptionRepository {
    pub fn new() -> Self {
        Self {
            options: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ChoiceOptionRepository for InMemoryChoiceOptionRepository {
    async fn find_by_block(&self, block_id: &str) -> AppResult<Vec<ChoiceOption>> {
        let options = self.options.read().await;
        let mut items: Vec<_> = options
            .iter()
            .filter(|o| o.block_id == block_id)
            .cloned()
            .collect();
        items.sort_by_key(|o| o.id);
        Ok(items)
    }

    async fn create(&self, option: ChoiceOption) -> AppResult<ChoiceOption> {
        let mut options = self.options.write().await;
        if options.iter().any(|o| o.id == option.id) {
            return Err(AppError::AlreadyExists(format!(
                "Choice option with id '{}' already exists",
                option.id
            )));
        }
        options.push(option.clone());
        Ok(option)
    }
}

pub struct InMemoryBlockResultRepository {
    results: Arc<RwLock<HashMap<String, BlockResult>>>,
}

impl InMemoryBlockResultRepository {
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl BlockResultRepository for InMemoryBlockResultRepository {
    async fn create(&self, result: BlockResult) -> AppResult<BlockResult> {
        let mut results = self.results.write().await;
        if results.contains_key(&result.id) {
            return Err(AppError::AlreadyExists(format!(
                "Block result with id '{}' already exists",
                result.id
            )));
        }
        results.insert(result.id.clone(), result.clone());
        Ok(result)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<BlockResult>> {
        let results = self.results.read().await;
        Ok(results.get(id).cloned())
    }

    async fn save(&self, result: BlockResult) -> AppResult<BlockResult> {
        let mut results = self.results.write().await;
        if !results.contains_key(&result.id) {
            return Err(AppError::NotFound(format!(
                "Block result with id '{}' not found",
                result.id
            )));
        }
        results.insert(result.id.clone(), result.clone());
        Ok(result)
    }

    async fn find_by_block(&self, block_id: &str) -> AppResult<Vec<BlockResult>> {
        let results = self.results.read().await;
        let mut items: Vec<_> = results
            .values()
            .filter(|r| r.block_id == block_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }

    async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<BlockResult>> {
        let results = self.results.read().await;
        let mut items: Vec<_> = results
            .values()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(items)
    }
}

pub struct InMemoryTaskResultRepository {
    task_results: Arc<RwLock<HashMap<String, TaskResult>>>,
}

impl InMemoryTaskResultRepository {
    pub fn new() -> Self {
        Self {
            task_results: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl TaskResultRepository for InMemoryTaskResultRepository {
    async fn create(&self, task_result: TaskResult) -> AppResult<TaskResult> {
        let mut task_results = self.task_results.write().await;
        if task_results.contains_key(&task_result.id) {
            return Err(AppError::AlreadyExists(format!(
                "Task result with id '{}' already exists",
                task_result.id
            )));
        }
        task_results.insert(task_result.id.clone(), task_result.clone());
        Ok(task_result)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<TaskResult>> {
        let task_results = self.task_results.read().await;
        Ok(task_results.get(id).cloned())
    }

    async fn update(&self, task_result: TaskResult) -> AppResult<TaskResult> {
        let mut task_results = self.task_results.write().await;
        if !task_results.contains_key(&task_result.id) {
            return Err(AppError::NotFound(format!(
                "Task result with id '{}' not found",
                task_result.id
            )));
        }
        task_results.insert(task_result.id.clone(), task_result.clone());
        Ok(task_result)
    }
}

pub struct InMemoryTaskResultLinkRepository {
    links: Arc<RwLock<Vec<TaskResultBlockResultLink>>>,
}

impl InMemoryTaskResultLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl TaskResultLinkRepository for InMemoryTaskResultLinkRepository {
    async fn create(&self, link: TaskResultBlockResultLink) -> AppResult<TaskResultBlockResultLink> {
        let mut links = self.links.write().await;
        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_task_result(
        &self,
        task_result_id: &str,
    ) -> AppResult<Vec<TaskResultBlockResultLink>> {
        let links = self.links.read().await;
        Ok(links
            .iter()
            .filter(|l| l.task_result_id == task_result_id)
            .cloned()
            .collect())
    }

    async fn find_by_block_result(
        &self,
        block_result_id: &str,
    ) -> AppResult<Vec<TaskResultBlockResultLink>> {
        let links = self.links.read().await;
        Ok(links
            .iter()
            .filter(|l| l.block_result_id == block_result_id)
            .cloned()
            .collect())
    }

    async fn delete_by_task_result(&self, task_result_id: &str) -> AppResult<u64> {
        let mut links = self.links.write().await;
        let before = links.len();
        links.retain(|l| l.task_result_id != task_result_id);
        Ok((before - links.len()) as u64)
    }

    async fn delete_by_block_result(&self, block_result_id: &str) -> AppResult<u64> {
        let mut links = self.links.write().await;
        let before = links.len();
        links.retain(|l| l.block_result_id != block_result_id);
        Ok((before - links.len()) as u64)
    }
}
