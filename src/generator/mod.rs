//! Crossword generation
//!
//! Randomized multi-trial grid construction and pluggable grid scoring.

mod engine;
pub mod scorer;
pub mod seed;

pub use engine::{GenerationResult, Generator, GeneratorSettings, TrialReport};
pub use scorer::{Score, Scorer, ScorerType, SimpleScorer};
