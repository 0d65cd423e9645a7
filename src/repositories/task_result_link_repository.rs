use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::TaskResultBlockResultLink};

/// Links are never updated. The pair (task result, block result) is not unique.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskResultLinkRepository: Send + Sync {
    async fn create(&self, link: TaskResultBlockResultLink) -> AppResult<TaskResultBlockResultLink>;
    async fn find_by_task_result(
        &self,
        task_result_id: &str,
    ) -> AppResult<Vec<TaskResultBlockResultLink>>;
    async fn find_by_block_result(
        &self,
        block_result_id: &str,
    ) -> AppResult<Vec<TaskResultBlockResultLink>>;
    async fn delete_by_task_result(&self, task_result_id: &str) -> AppResult<u64>;
    async fn delete_by_block_result(&self, block_result_id: &str) -> AppResult<u64>;
}

pub struct MongoTaskResultLinkRepository {
    collection: Collection<TaskResultBlockResultLink>,
}

impl MongoTaskResultLinkRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for task result links collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let task_result_index = IndexModel::builder()
            .keys(doc! { "task_result_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("task_result_id".to_string())
                    .build(),
            )
            .build();

        let block_result_index = IndexModel::builder()
            .keys(doc! { "block_result_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("block_result_id".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(task_result_index).await?;
        self.collection.create_index(block_result_index).await?;

        log::info!("Successfully created indexes for task result links collection");
        Ok(())
    }
}

#[async_trait]
impl TaskResultLinkRepository for MongoTaskResultLinkRepository {
    async fn create(&self, link: TaskResultBlockResultLink) -> AppResult<TaskResultBlockResultLink> {
        self.collection.insert_one(&link).await?;
        Ok(link)
    }

    async fn find_by_task_result(
        &self,
        task_result_id: &str,
    ) -> AppResult<Vec<TaskResultBlockResultLink>> {
        let links = self
            .collection
            .find(doc! { "task_result_id": task_result_id })
            .await?
            .try_collect()
            .await?;
        Ok(links)
    }

    async fn find_by_block_result(
        &self,
        block_result_id: &str,
    ) -> AppResult<Vec<TaskResultBlockResultLink>> {
        let links = self
            .collection
            .find(doc! { "block_result_id": block_result_id })
            .await?
            .try_collect()
            .await?;
        Ok(links)
    }

    async fn delete_by_task_result(&self, task_result_id: &str) -> AppResult<u64> {
        let outcome = self
            .collection
            .delete_many(doc! { "task_result_id": task_result_id })
            .await?;
        Ok(outcome.deleted_count)
    }

    async fn delete_by_block_result(&self, block_result_id: &str) -> AppResult<u64> {
        let outcome = self
            .collection
            .delete_many(doc! { "block_result_id": block_result_id })
            .await?;
        Ok(outcome.deleted_count)
    }
}
