use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Block, BlockKind, BlockResult, ChoiceOption, Score},
        dto::request::SubmitAnswerRequest,
    },
    repositories::{BlockRepository, BlockResultRepository, ChoiceOptionRepository},
    services::grading_service::{GradingContext, GradingService},
};

/// A graded result and whether the grading flow stored it.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeOutcome {
    pub result: BlockResult,
    pub persisted: bool,
}

pub struct BlockResultService {
    blocks: Arc<dyn BlockRepository>,
    options: Arc<dyn ChoiceOptionRepository>,
    results: Arc<dyn BlockResultRepository>,
}

impl BlockResultService {
    pub fn new(
        blocks: Arc<dyn BlockRepository>,
        options: Arc<dyn ChoiceOptionRepository>,
        results: Arc<dyn BlockResultRepository>,
    ) -> Self {
        Self {
            blocks,
            options,
            results,
        }
    }

    pub async fn get_result(&self, id: &str) -> AppResult<BlockResult> {
        self.results
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Block result with id '{}' not found", id)))
    }

    pub async fn save(&self, result: BlockResult) -> AppResult<BlockResult> {
        self.results.save(result).await
    }

    /// Scores `result` against its block and stores it, except for manual
    /// results which are only updated in memory.
    pub async fn grade(
        &self,
        mut result: BlockResult,
        override_score: Option<i32>,
    ) -> AppResult<GradeOutcome> {
        let block = self.load_block(&result.block_id).await?;
        let options = self.load_options(&block).await?;

        Self::score_in_place(&mut result, &block, &options, override_score)?;

        let persisted = GradingService::persists(&result.answer);
        if persisted {
            result = self.results.save(result).await?;
        }

        log::info!(
            "Graded result {} for student {} on block {}: {}/{}",
            result.id,
            result.student_id,
            result.block_id,
            result.score,
            result.max_score
        );

        Ok(GradeOutcome { result, persisted })
    }

    /// Grades a new submission and stores it once, graded. Nothing is stored
    /// when grading fails.
    pub async fn submit(&self, request: SubmitAnswerRequest) -> AppResult<GradeOutcome> {
        request.validate()?;

        let block = self.load_block(&request.block_id).await?;
        let answer = request.answer.into_answer()?;
        if !answer.fits(block.kind) {
            return Err(AppError::ValidationError(format!(
                "A {} answer cannot be submitted for block '{}'",
                answer.variant_name(),
                block.id
            )));
        }
        let options = self.load_options(&block).await?;

        let mut result = BlockResult::new(&request.student_id, &block.id, answer);
        Self::score_in_place(&mut result, &block, &options, request.override_score)?;
        let result = self.results.create(result).await?;

        log::info!(
            "Recorded submission {} for student {} on block {}: {}/{}",
            result.id,
            result.student_id,
            result.block_id,
            result.score,
            result.max_score
        );

        Ok(GradeOutcome {
            result,
            persisted: true,
        })
    }

    pub async fn regrade(
        &self,
        result_id: &str,
        override_score: Option<i32>,
    ) -> AppResult<GradeOutcome> {
        let result = self.get_result(result_id).await?;
        self.grade(result, override_score).await
    }

    /// Re-scores every stored result of a block, picking up a changed point
    /// value. Stored overrides are re-applied; one that no longer fits under
    /// the block's value is dropped and the result is derived from its answer
    /// starting at 0. Returns how many results were written.
    pub async fn regrade_block(&self, block_id: &str) -> AppResult<usize> {
        let block = self.load_block(block_id).await?;
        let options = self.load_options(&block).await?;
        let results = self.results.find_by_block(block_id).await?;

        let mut regraded = 0;
        for mut result in results {
            let before = result.clone();

            let mut stored_override = result.override_score;
            if let Some(value) = stored_override {
                if !GradingService::accepts_override(value, block.score) {
                    log::warn!(
                        "Dropping override {} on result {}: block {} is now worth {}",
                        value,
                        result.id,
                        block.id,
                        block.score
                    );
                    result.score = 0;
                    stored_override = None;
                }
            }

            Self::score_in_place(&mut result, &block, &options, stored_override)?;
            if result == before {
                continue;
            }
            self.results.save(result).await?;
            regraded += 1;
        }

        log::info!("Re-graded {} result(s) for block {}", regraded, block_id);
        Ok(regraded)
    }

    /// Scores the result and records which override, if any, produced the
    /// score. A rejected override leaves the recorded one untouched.
    fn score_in_place(
        result: &mut BlockResult,
        block: &Block,
        options: &[ChoiceOption],
        override_score: Option<i32>,
    ) -> AppResult<()> {
        let ctx = GradingContext::with_options(block, options);
        let requested = override_score.filter(|value| *value != 0);
        let score: Score =
            GradingService::score(&result.answer, &ctx, result.current_score(), requested)?;

        result.apply(score);
        match requested {
            Some(value) if GradingService::accepts_override(value, score.max_score) => {
                result.override_score = Some(value);
            }
            Some(_) => {}
            None => result.override_score = None,
        }
        Ok(())
    }

    async fn load_block(&self, block_id: &str) -> AppResult<Block> {
        self.blocks
            .find_by_id(block_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Block with id '{}' not found", block_id)))
    }

    async fn load_options(&self, block: &Block) -> AppResult<Vec<ChoiceOption>> {
        if block.kind == BlockKind::Choice {
            self.options.find_by_block(&block.id).await
        } else {
            Ok(Vec::new())
        }
    }
}
