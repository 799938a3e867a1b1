//! Stats command
//!
//! Runs every trial and summarizes the score spread instead of printing a
//! grid.

use crate::generator::{Generator, Score, Scorer};
use crate::output::formatters::progress_style;
use indicatif::ProgressBar;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Per-trial data kept for the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialSample {
    pub index: usize,
    pub score: Score,
    pub placed_word_count: usize,
}

/// Summary of a stats run
#[derive(Debug)]
pub struct StatsResult {
    pub trial_count: usize,
    pub word_count: usize,
    pub min_score: Score,
    pub max_score: Score,
    pub mean_score: f64,
    /// Lowest trial index reaching `max_score`
    pub best_trial_index: usize,
    /// Placed word count → number of trials
    pub placed_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub trials_per_second: f64,
}

/// Summarize trial samples
///
/// Returns `None` for an empty sample set.
#[must_use]
pub fn summarize(samples: &[TrialSample], word_count: usize) -> Option<StatsResult> {
    let best = samples
        .iter()
        .max_by(|a, b| a.score.cmp(&b.score).then(b.index.cmp(&a.index)))?;
    let min_score = samples.iter().map(|s| s.score).min()?;

    let total: f64 = samples.iter().map(|s| s.score as f64).sum();

    let mut placed_distribution = BTreeMap::new();
    for sample in samples {
        *placed_distribution
            .entry(sample.placed_word_count)
            .or_insert(0) += 1;
    }

    Some(StatsResult {
        trial_count: samples.len(),
        word_count,
        min_score,
        max_score: best.score,
        mean_score: total / samples.len() as f64,
        best_trial_index: best.index,
        placed_distribution,
        duration: Duration::ZERO,
        trials_per_second: 0.0,
    })
}

/// Run all trials of `generator` and summarize their scores
///
/// Returns `None` when the trial count is zero.
pub fn run_stats<S: Scorer + Sync>(
    generator: &Generator<'_, S>,
    show_progress: bool,
) -> Option<StatsResult> {
    let trial_count = generator.settings().trial_count;

    let pb = if show_progress {
        ProgressBar::new(trial_count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(progress_style());
    pb.set_message("collecting scores");

    let samples = Mutex::new(Vec::with_capacity(trial_count));
    let start = Instant::now();

    generator.generate_with(|report| {
        samples
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(TrialSample {
                index: report.index,
                score: report.score,
                placed_word_count: report.grid.placed_word_count(),
            });
        pb.inc(1);
    });

    let duration = start.elapsed();
    pb.finish_and_clear();

    let samples = samples.into_inner().unwrap_or_else(PoisonError::into_inner);
    let mut result = summarize(&samples, generator.words().len())?;
    result.duration = duration;
    result.trials_per_second = trial_count as f64 / duration.as_secs_f64().max(f64::EPSILON);

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, WordList};
    use crate::generator::{GeneratorSettings, SimpleScorer};

    fn sample(index: usize, score: Score, placed_word_count: usize) -> TrialSample {
        TrialSample {
            index,
            score,
            placed_word_count,
        }
    }

    #[test]
    fn summarize_basic() {
        let samples = [
            sample(0, 10, 3),
            sample(1, 40, 5),
            sample(2, -5, 2),
            sample(3, 15, 3),
        ];
        let stats = summarize(&samples, 6).unwrap();

        assert_eq!(stats.trial_count, 4);
        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.min_score, -5);
        assert_eq!(stats.max_score, 40);
        assert!((stats.mean_score - 15.0).abs() < f64::EPSILON);
        assert_eq!(stats.best_trial_index, 1);
        assert_eq!(stats.placed_distribution.get(&3), Some(&2));
        assert_eq!(stats.placed_distribution.get(&5), Some(&1));
        assert_eq!(stats.placed_distribution.values().sum::<usize>(), 4);
    }

    #[test]
    fn summarize_tie_prefers_lowest_index() {
        // Samples arrive in completion order, not index order
        let samples = [sample(5, 20, 2), sample(2, 20, 2), sample(9, 20, 2)];
        let stats = summarize(&samples, 2).unwrap();
        assert_eq!(stats.best_trial_index, 2);
    }

    #[test]
    fn summarize_empty() {
        assert!(summarize(&[], 3).is_none());
    }

    #[test]
    fn run_stats_agrees_with_generator() {
        let words: WordList = ["OCEAN", "EARTH", "CLOCK", "HONEY", "TREE", "RAIN", "TEA"]
            .iter()
            .enumerate()
            .map(|(i, text)| Word::new(i as u32 + 1, "Clue", *text).unwrap())
            .collect();
        let scorer = SimpleScorer {
            base_score: 100,
            placed_word_bonus: 10,
            word_crossing_bonus: 3,
            missing_word_penalty: 10,
            ..SimpleScorer::default()
        };
        let settings = GeneratorSettings {
            trial_count: 25,
            max_width: 10,
            max_height: 10,
        };
        let generator = Generator::new(&words, scorer, settings, 2024);

        let stats = run_stats(&generator, false).unwrap();
        let best = generator.generate().unwrap();

        assert_eq!(stats.trial_count, 25);
        assert_eq!(stats.max_score, best.score);
        assert_eq!(stats.best_trial_index, best.trial_index);
        assert!(stats.min_score <= stats.max_score);
    }
}
