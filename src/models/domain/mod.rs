pub mod block;
pub mod block_result;
pub mod choice_option;
pub mod score;
pub mod task_result;
pub mod task_result_link;
pub use block::{Block, BlockKind};
pub use block_result::{BlockResult, SubmittedAnswer};
pub use choice_option::ChoiceOption;
pub use score::Score;
pub use task_result::TaskResult;
pub use task_result_link::TaskResultBlockResultLink;
