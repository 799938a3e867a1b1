//! Generate command
//!
//! Runs every trial behind a progress bar and collects the best grid.

use crate::core::{Grid, Word};
use crate::generator::{GenerationResult, Generator, Score, Scorer, TrialReport};
use crate::output::{formatters::progress_style, print_interim_best};
use indicatif::ProgressBar;
use rustc_hash::FxHashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Options for a generate run
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Draw a progress bar while trials run
    pub show_progress: bool,
    /// Print the best grid so far after every N finished trials
    pub report_every: Option<usize>,
}

/// Result of a generate run
pub struct GenerateOutcome {
    pub best: Option<GenerationResult>,
    pub seed: u64,
    pub trial_count: usize,
    pub word_count: usize,
    /// Words missing from the best grid, in list order
    pub unplaced_words: Vec<Word>,
    pub duration: Duration,
    pub trials_per_second: f64,
}

/// Best trial seen so far while trials are still running
struct RunningBest {
    best: Mutex<Option<(Score, usize, Grid)>>,
    finished: AtomicUsize,
    report_every: Option<usize>,
}

impl RunningBest {
    fn new(report_every: Option<usize>) -> Self {
        Self {
            best: Mutex::new(None),
            finished: AtomicUsize::new(0),
            report_every: report_every.filter(|&n| n > 0),
        }
    }

    fn observe(&self, report: &TrialReport<'_>, pb: &ProgressBar) {
        let mut best = self.best.lock().unwrap_or_else(PoisonError::into_inner);

        let improves = best.as_ref().is_none_or(|(score, index, _)| {
            report.score > *score || (report.score == *score && report.index < *index)
        });
        if improves {
            *best = Some((report.score, report.index, report.grid.clone()));
            pb.set_message(format!("best score {}", report.score));
        }

        let finished = self.finished.fetch_add(1, Ordering::Relaxed) + 1;
        if let (Some(every), Some((score, index, grid))) = (self.report_every, best.as_ref()) {
            if finished % every == 0 {
                pb.suspend(|| print_interim_best(finished, *index, *score, grid));
            }
        }

        pb.inc(1);
    }
}

/// Run all trials of `generator`
pub fn run_generate<S: Scorer + Sync>(
    generator: &Generator<'_, S>,
    options: GenerateOptions,
) -> GenerateOutcome {
    let trial_count = generator.settings().trial_count;

    let pb = if options.show_progress {
        ProgressBar::new(trial_count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(progress_style());

    let running = RunningBest::new(options.report_every);
    let start = Instant::now();

    let best = generator.generate_with(|report| running.observe(report, &pb));

    let duration = start.elapsed();
    pb.finish_and_clear();

    let unplaced_words = best
        .as_ref()
        .map(|result| unplaced_words(generator.words(), &result.grid))
        .unwrap_or_default();

    GenerateOutcome {
        best,
        seed: generator.seed(),
        trial_count,
        word_count: generator.words().len(),
        unplaced_words,
        duration,
        trials_per_second: trial_count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Words of `words` that `grid` does not contain
#[must_use]
pub fn unplaced_words(words: &[Word], grid: &Grid) -> Vec<Word> {
    let placed: FxHashSet<_> = grid.placements().iter().map(|p| p.word.id()).collect();

    words
        .iter()
        .filter(|word| !placed.contains(&word.id()))
        .cloned()
        .collect()
}
