use serde::{Deserialize, Serialize};

/// One selectable option of a choice block.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChoiceOption {
    pub id: i64,
    pub block_id: String,
    pub text: String,
    pub is_correct: bool,
}

impl ChoiceOption {
    pub fn new(id: i64, block_id: &str, text: &str, is_correct: bool) -> Self {
        ChoiceOption {
            id,
            block_id: block_id.to_string(),
            text: text.to_string(),
            is_correct,
        }
    }
}
