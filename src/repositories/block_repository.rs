use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Block,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlockRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Block>>;
    async fn create(&self, block: Block) -> AppResult<Block>;
    async fn update(&self, block: Block) -> AppResult<Block>;
}

pub struct MongoBlockRepository {
    collection: Collection<Block>,
}

impl MongoBlockRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for blocks collection");

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

        log::info!("Successfully created indexes for blocks collection");
        Ok(())
    }
}

#[async_trait]
impl BlockRepository for MongoBlockRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Block>> {
        let block = self.collection.find_one(doc! { "id": id }).await?;
        Ok(block)
    }

    async fn create(&self, block: Block) -> AppResult<Block> {
        self.collection.insert_one(&block).await?;
        Ok(block)
    }

    async fn update(&self, block: Block) -> AppResult<Block> {
        let result = self
            .collection
            .replace_one(doc! { "id": &block.id }, &block)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Block with id '{}' not found",
                block.id
            )));
        }

        Ok(block)
    }
}
