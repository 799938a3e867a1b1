//! Grid scoring strategies
//!
//! Defines the Scorer trait and concrete implementations.

use crate::core::Grid;
use serde::Deserialize;

/// Comparable grid quality; higher is better
pub type Score = i64;

/// A strategy for rating a finished grid
pub trait Scorer {
    /// Score `grid`, given how many words of the list it could not place
    ///
    /// Must not depend on anything but the grid's counters and
    /// `unplaced_word_count`.
    fn score_grid(&self, grid: &Grid, unplaced_word_count: usize) -> Score;
}

/// Enum wrapper for all scorer types
///
/// Allows runtime selection of the scorer while maintaining static dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScorerType {
    /// Weighted sum of grid counters
    Simple(SimpleScorer),
}

impl Scorer for ScorerType {
    fn score_grid(&self, grid: &Grid, unplaced_word_count: usize) -> Score {
        match self {
            Self::Simple(s) => s.score_grid(grid, unplaced_word_count),
        }
    }
}

impl ScorerType {
    /// Names accepted by [`ScorerType::from_name`]
    pub const NAMES: &'static [&'static str] = &["simple"];

    /// Create a scorer from its configured name
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str, weights: SimpleScorer) -> Option<Self> {
        match name {
            "simple" => Some(Self::Simple(weights)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Simple(_) => "simple",
        }
    }
}

/// Weighted sum of grid counters
///
/// ```text
/// score = base_score
///       - missing_word_penalty * unplaced words
///       + word_crossing_bonus  * crossings
///       + placed_word_bonus    * placed words
///       + placed_letter_bonus  * (crossings + placed letters)
///       - used_column_penalty  * width
///       - used_row_penalty     * height
/// ```
///
/// A crossing holds one letter of each of two words while the placed letter
/// count holds it once, so crossings are added to the letter term again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimpleScorer {
    pub base_score: Score,
    pub placed_word_bonus: Score,
    pub placed_letter_bonus: Score,
    pub word_crossing_bonus: Score,
    pub missing_word_penalty: Score,
    pub used_row_penalty: Score,
    pub used_column_penalty: Score,
}

impl SimpleScorer {
    /// Weights as `(name, value)` pairs, in configuration order
    #[must_use]
    pub fn weights(&self) -> [(&'static str, Score); 7] {
        [
            ("base_score", self.base_score),
            ("placed_word_bonus", self.placed_word_bonus),
            ("placed_letter_bonus", self.placed_letter_bonus),
            ("word_crossing_bonus", self.word_crossing_bonus),
            ("missing_word_penalty", self.missing_word_penalty),
            ("used_row_penalty", self.used_row_penalty),
            ("used_column_penalty", self.used_column_penalty),
        ]
    }
}

impl Scorer for SimpleScorer {
    fn score_grid(&self, grid: &Grid, unplaced_word_count: usize) -> Score {
        let crossings = grid.word_crossing_count() as Score;
        let placed_words = grid.placed_word_count() as Score;
        let placed_letters = grid.placed_letter_count() as Score;

        self.base_score - self.missing_word_penalty * unplaced_word_count as Score
            + self.word_crossing_bonus * crossings
            + self.placed_word_bonus * placed_words
            + self.placed_letter_bonus * (crossings + placed_letters)
            - self.used_column_penalty * grid.width() as Score
            - self.used_row_penalty * grid.height() as Score
    }
}
