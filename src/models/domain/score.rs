use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Points earned against points available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Score {
    pub score: i32,
    pub max_score: i32,
}

impl Score {
    pub fn new(score: i32, max_score: i32) -> Self {
        Score { score, max_score }
    }

    pub fn is_full(&self) -> bool {
        self.max_score > 0 && self.score == self.max_score
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, other: Score) -> Score {
        Score {
            score: self.score.saturating_add(other.score),
            max_score: self.max_score.saturating_add(other.max_score),
        }
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Score {
        iter.fold(Score::default(), Add::add)
    }
}
