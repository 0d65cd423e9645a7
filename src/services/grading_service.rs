use crate::errors::AppResult;
use crate::models::domain::{Block, ChoiceOption, Score, SubmittedAnswer};

/// Read-only view of the question a result is graded against.
#[derive(Clone, Copy, Debug)]
pub struct GradingContext<'a> {
    pub block: &'a Block,
    /// Options of the block. Only consulted for choice answers.
    pub options: &'a [ChoiceOption],
}

impl<'a> GradingContext<'a> {
    pub fn new(block: &'a Block) -> Self {
        GradingContext {
            block,
            options: &[],
        }
    }

    pub fn with_options(block: &'a Block, options: &'a [ChoiceOption]) -> Self {
        GradingContext { block, options }
    }
}

pub struct GradingService;

impl GradingService {
    /// Computes the score of an answer without touching storage.
    ///
    /// `max_score` is derived from the live block on every call, never taken
    /// from `current`. A non-zero `override_score` replaces the derived score
    /// when it lies in `1..=max_score`; otherwise it is ignored and the
    /// current score stays. Choice answers reset both columns to zero before
    /// the override check, so a positive override never lands on them.
    pub fn score(
        answer: &SubmittedAnswer,
        ctx: &GradingContext<'_>,
        current: Score,
        override_score: Option<i32>,
    ) -> AppResult<Score> {
        let score = match override_score.filter(|value| *value != 0) {
            Some(value) => Self::overridden(answer, ctx, current, value),
            None => Self::derive(answer, ctx, current)?,
        };

        log::debug!(
            "Graded {} answer for block {}: {}/{}",
            answer.variant_name(),
            ctx.block.id,
            score.score,
            score.max_score
        );

        Ok(score)
    }

    /// Whether a scored result is stored by the grading flow. The manual
    /// variant only computes; its callers store it themselves.
    pub fn persists(answer: &SubmittedAnswer) -> bool {
        !matches!(answer, SubmittedAnswer::Manual)
    }

    /// Whether an override replaces the score of a result worth `max_score`.
    pub fn accepts_override(value: i32, max_score: i32) -> bool {
        value > 0 && value <= max_score
    }

    fn overridden(
        answer: &SubmittedAnswer,
        ctx: &GradingContext<'_>,
        current: Score,
        value: i32,
    ) -> Score {
        let base = match answer {
            SubmittedAnswer::Choice(_) => Score::new(0, 0),
            _ => Score::new(current.score, ctx.block.score),
        };

        if Self::accepts_override(value, base.max_score) {
            Score::new(value, base.max_score)
        } else {
            log::warn!(
                "Ignoring override {} outside 1..={} for block {}, keeping score {}",
                value,
                base.max_score,
                ctx.block.id,
                base.score
            );
            base
        }
    }

    fn derive(
        answer: &SubmittedAnswer,
        ctx: &GradingContext<'_>,
        current: Score,
    ) -> AppResult<Score> {
        let block = ctx.block;
        let max_score = block.score;

        let score = match answer {
            SubmittedAnswer::Manual => Score::new(current.score, max_score),
            SubmittedAnswer::Acknowledgement(true) => Score::new(max_score, max_score),
            SubmittedAnswer::Acknowledgement(false) => Score::new(current.score, max_score),
            SubmittedAnswer::Choice(selected) => {
                let mut score = Score::new(0, 0);
                for option in ctx.options.iter().filter(|o| o.is_correct) {
                    score.max_score += 1;
                    if selected.contains(&option.id) {
                        score.score += 1;
                    }
                }
                score
            }
            SubmittedAnswer::Numeric(None) => Score::new(0, max_score),
            SubmittedAnswer::Numeric(Some(value)) => {
                let correct = match block.correct_answer.as_deref() {
                    Some(text) => Some(text.trim().parse::<f64>()?),
                    None => None,
                };
                let earned = if correct == Some(*value) { max_score } else { 0 };
                Score::new(earned, max_score)
            }
            SubmittedAnswer::FreeText(text) => {
                let earned = match (text, &block.correct_answer) {
                    (Some(given), Some(expected)) if given == expected => max_score,
                    _ => 0,
                };
                Score::new(earned, max_score)
            }
        };

        Ok(score)
    }
}
