pub mod block_repository;
pub mod block_result_repository;
pub mod choice_option_repository;
pub mod task_result_link_repository;
pub mod task_result_repository;

pub use block_repository::{BlockRepository, MongoBlockRepository};
pub use block_result_repository::{BlockResultRepository, MongoBlockResultRepository};
pub use choice_option_repository::{ChoiceOptionRepository, MongoChoiceOptionRepository};
pub use task_result_link_repository::{MongoTaskResultLinkRepository, TaskResultLinkRepository};
pub use task_result_repository::{MongoTaskResultRepository, TaskResultRepository};
