use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::BlockResult,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlockResultRepository: Send + Sync {
    async fn create(&self, result: BlockResult) -> AppResult<BlockResult>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<BlockResult>>;
    /// Stores the current state of an existing result.
    async fn save(&self, result: BlockResult) -> AppResult<BlockResult>;
    async fn find_by_block(&self, block_id: &str) -> AppResult<Vec<BlockResult>>;
    async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<BlockResult>>;
}

pub struct MongoBlockResultRepository {
    collection: Collection<BlockResult>,
}

impl MongoBlockResultRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for block_results collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let block_index = IndexModel::builder()
            .keys(doc! { "block_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("block_id".to_string())
                    .build(),
            )
            .build();

        let student_index = IndexModel::builder()
            .keys(doc! { "student_id": 1, "date": -1 })
            .options(
                IndexOptions::builder()
                    .name("student_date".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(block_index).await?;
        self.collection.create_index(student_index).await?;

        log::info!("Successfully created indexes for block_results collection");
        Ok(())
    }
}

#[async_trait]
impl BlockResultRepository for MongoBlockResultRepository {
    async fn create(&self, result: BlockResult) -> AppResult<BlockResult> {
        self.collection.insert_one(&result).await?;
        Ok(result)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<BlockResult>> {
        let result = self.collection.find_one(doc! { "id": id }).await?;
        Ok(result)
    }

    async fn save(&self, result: BlockResult) -> AppResult<BlockResult> {
        let outcome = self
            .collection
            .replace_one(doc! { "id": &result.id }, &result)
            .await?;

        if outcome.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Block result with id '{}' not found",
                result.id
            )));
        }

        Ok(result)
    }

    async fn find_by_block(&self, block_id: &str) -> AppResult<Vec<BlockResult>> {
        let results = self
            .collection
            .find(doc! { "block_id": block_id })
            .await?
            .try_collect()
            .await?;
        Ok(results)
    }

    async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<BlockResult>> {
        let results = self
            .collection
            .find(doc! { "student_id": student_id })
            .sort(doc! { "date": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(results)
    }
}
