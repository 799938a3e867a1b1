//! Command implementations

pub mod generate;
pub mod stats;

pub use generate::{GenerateOptions, GenerateOutcome, run_generate, unplaced_words};
pub use stats::{StatsResult, TrialSample, run_stats, summarize};
