use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::ChoiceOption};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChoiceOptionRepository: Send + Sync {
    async fn find_by_block(&self, block_id: &str) -> AppResult<Vec<ChoiceOption>>;
    async fn create(&self, option: ChoiceOption) -> AppResult<ChoiceOption>;
}

pub struct MongoChoiceOptionRepository {
    collection: Collection<ChoiceOption>,
}

impl MongoChoiceOptionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for choice_options collection");

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

        self.collection.create_index(id_index).await?;
        self.collection.create_index(block_index).await?;

        log::info!("Successfully created indexes for choice_options collection");
        Ok(())
    }
}

#[async_trait]
impl ChoiceOptionRepository for MongoChoiceOptionRepository {
    async fn find_by_block(&self, block_id: &str) -> AppResult<Vec<ChoiceOption>> {
        let options = self
            .collection
            .find(doc! { "block_id": block_id })
            .sort(doc! { "id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(options)
    }

    async fn create(&self, option: ChoiceOption) -> AppResult<ChoiceOption> {
        self.collection.insert_one(&option).await?;
        Ok(option)
    }
}
