use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::TaskResult,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskResultRepository: Send + Sync {
    async fn create(&self, task_result: TaskResult) -> AppResult<TaskResult>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<TaskResult>>;
    async fn update(&self, task_result: TaskResult) -> AppResult<TaskResult>;
}

pub struct MongoTaskResultRepository {
    collection: Collection<TaskResult>,
}

impl MongoTaskResultRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for task_results collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        log::info!("Successfully created indexes for task_results collection");
        Ok(())
    }
}

#[async_trait]
impl TaskResultRepository for MongoTaskResultRepository {
    async fn create(&self, task_result: TaskResult) -> AppResult<TaskResult> {
        self.collection.insert_one(&task_result).await?;
        Ok(task_result)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<TaskResult>> {
        let task_result = self.collection.find_one(doc! { "id": id }).await?;
        Ok(task_result)
    }

    async fn update(&self, task_result: TaskResult) -> AppResult<TaskResult> {
        let outcome = self
            .collection
            .replace_one(doc! { "id": &task_result.id }, &task_result)
            .await?;

        if outcome.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Task result with id '{}' not found",
                task_result.id
            )));
        }

        Ok(task_result)
    }
}
