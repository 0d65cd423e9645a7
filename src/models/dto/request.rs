use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::errors::AppResult;
use crate::models::domain::block_result::{SubmittedAnswer, FREE_TEXT_MAX_LEN};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    #[validate(length(min = 1, max = 100))]
    pub student_id: String,

    #[validate(length(min = 1, max = 100))]
    pub block_id: String,

    #[validate(custom(function = "validate_answer_input"))]
    pub answer: AnswerInput,

    #[serde(default)]
    pub override_score: Option<i32>,
}

/// A submitted answer as it arrives from the caller. Numeric answers are raw text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerInput {
    Manual,
    Acknowledgement(bool),
    Choice(Vec<i64>),
    Numeric(Option<String>),
    FreeText(Option<String>),
}

impl AnswerInput {
    /// Converts into the stored answer. A blank numeric answer counts as absent.
    pub fn into_answer(self) -> AppResult<SubmittedAnswer> {
        let answer = match self {
            AnswerInput::Manual => SubmittedAnswer::Manual,
            AnswerInput::Acknowledgement(read) => SubmittedAnswer::Acknowledgement(read),
            AnswerInput::Choice(ids) => SubmittedAnswer::Choice(ids),
            AnswerInput::Numeric(raw) => {
                let value = match raw.as_deref().map(str::trim) {
                    None | Some("") => None,
                    Some(text) => Some(text.parse::<f64>()?),
                };
                SubmittedAnswer::Numeric(value)
            }
            AnswerInput::FreeText(text) => SubmittedAnswer::FreeText(text),
        };
        Ok(answer)
    }
}

fn validate_answer_input(answer: &AnswerInput) -> Result<(), ValidationError> {
    if let AnswerInput::FreeText(Some(text)) = answer {
        if text.chars().count() > FREE_TEXT_MAX_LEN {
            let mut err = ValidationError::new("free_text_too_long");
            err.message = Some(
                format!("Free-text answers are limited to {} characters", FREE_TEXT_MAX_LEN).into(),
            );
            return Err(err);
        }
    }
    Ok(())
}
