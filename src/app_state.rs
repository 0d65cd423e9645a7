use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoBlockRepository, MongoBlockResultRepository, MongoChoiceOptionRepository,
        MongoTaskResultLinkRepository, MongoTaskResultRepository,
    },
    services::{BlockResultService, TaskResultService},
};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub block_result_service: Arc<BlockResultService>,
    pub task_result_service: Arc<TaskResultService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        config.validate()?;
        let db = Database::connect(&config).await?;

        let block_repository = Arc::new(MongoBlockRepository::new(&db, &config.blocks_collection));
        block_repository.ensure_indexes().await?;

        let option_repository = Arc::new(MongoChoiceOptionRepository::new(
            &db,
            &config.choice_options_collection,
        ));
        option_repository.ensure_indexes().await?;

        let block_result_repository = Arc::new(MongoBlockResultRepository::new(
            &db,
            &config.block_results_collection,
        ));
        block_result_repository.ensure_indexes().await?;

        let task_result_repository = Arc::new(MongoTaskResultRepository::new(
            &db,
            &config.task_results_collection,
        ));
        task_result_repository.ensure_indexes().await?;

        let link_repository = Arc::new(MongoTaskResultLinkRepository::new(
            &db,
            &config.task_result_links_collection,
        ));
        link_repository.ensure_indexes().await?;

        let block_result_service = Arc::new(BlockResultService::new(
            block_repository,
            option_repository,
            block_result_repository.clone(),
        ));
        let task_result_service = Arc::new(TaskResultService::new(
            task_result_repository,
            block_result_repository,
            link_repository,
        ));

        Ok(Self {
            db,
            block_result_service,
            task_result_service,
            config: Arc::new(config),
        })
    }
}
