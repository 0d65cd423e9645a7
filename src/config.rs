use std::env;
use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    pub mongo_db_name: String,
    pub blocks_collection: String,
    pub choice_options_collection: String,
    pub block_results_collection: String,
    pub task_results_collection: String,
    pub task_result_links_collection: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: SecretString::from(
                env::var("MONGO_CONN_STRING")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            ),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "blockgrade-local".to_string()),
            blocks_collection: env::var("BLOCKS_COLLECTION")
                .unwrap_or_else(|_| "blocks".to_string()),
            choice_options_collection: env::var("CHOICE_OPTIONS_COLLECTION")
                .unwrap_or_else(|_| "choice_options".to_string()),
            block_results_collection: env::var("BLOCK_RESULTS_COLLECTION")
                .unwrap_or_else(|_| "block_results".to_string()),
            task_results_collection: env::var("TASK_RESULTS_COLLECTION")
                .unwrap_or_else(|_| "task_results".to_string()),
            task_result_links_collection: env::var("TASK_RESULT_LINKS_COLLECTION")
                .unwrap_or_else(|_| "task_result_block_results".to_string()),
        }
    }

    /// Rejects empty database or collection names.
    pub fn validate(&self) -> AppResult<()> {
        let names = [
            ("MONGO_DB_NAME", &self.mongo_db_name),
            ("BLOCKS_COLLECTION", &self.blocks_collection),
            ("CHOICE_OPTIONS_COLLECTION", &self.choice_options_collection),
            ("BLOCK_RESULTS_COLLECTION", &self.block_results_collection),
            ("TASK_RESULTS_COLLECTION", &self.task_results_collection),
            ("TASK_RESULT_LINKS_COLLECTION", &self.task_result_links_collection),
        ];

        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(AppError::ValidationError(format!("{} must not be empty", key)));
            }
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: SecretString::from("mongodb://localhost:27017".to_string()),
            mongo_db_name: "blockgrade-test".to_string(),
            blocks_collection: "blocks".to_string(),
            choice_options_collection: "choice_options".to_string(),
            block_results_collection: "block_results".to_string(),
            task_results_collection: "task_results".to_string(),
            task_result_links_collection: "task_result_block_results".to_string(),
        }
    }
}
