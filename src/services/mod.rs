pub mod block_result_service;
pub mod grading_service;
pub mod task_result_service;

pub use block_result_service::{BlockResultService, GradeOutcome};
pub use grading_service::{GradingContext, GradingService};
pub use task_result_service::TaskResultService;
