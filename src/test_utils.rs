use crate::models::domain::{Block, BlockKind, ChoiceOption};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Numeric block worth 5 points whose answer is 3.5
    pub fn numeric_block() -> Block {
        block_with_id("numeric-1", BlockKind::Numeric, 5, Some("3.5"))
    }

    /// Choice block with options 10 and 20 correct, 30 incorrect
    pub fn choice_block() -> (Block, Vec<ChoiceOption>) {
        let block = block_with_id("choice-1", BlockKind::Choice, 1, None);
        let options = vec![
            ChoiceOption::new(10, &block.id, "A", true),
            ChoiceOption::new(20, &block.id, "B", true),
            ChoiceOption::new(30, &block.id, "C", false),
        ];
        (block, options)
    }

    pub fn block_with_id(
        id: &str,
        kind: BlockKind,
        score: i32,
        correct_answer: Option<&str>,
    ) -> Block {
        let mut block = Block::new("question", kind, score, correct_answer);
        block.id = id.to_string();
        block
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_numeric_block() {
        let block = numeric_block();
        assert_eq!(block.id, "numeric-1");
        assert_eq!(block.correct_answer.as_deref(), Some("3.5"));
    }

    #[test]
    fn test_fixtures_choice_block() {
        let (block, options) = choice_block();
        assert_eq!(options.len(), 3);
        assert!(options.iter().all(|o| o.block_id == block.id));
        assert_eq!(options.iter().filter(|o| o.is_correct).count(), 2);
    }
}
