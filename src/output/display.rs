//! Display functions for command results

use super::formatters::{EMPTY_GLYPH, create_progress_bar, format_duration, grid_lines};
use crate::commands::{GenerateOutcome, StatsResult};
use crate::core::{Direction, Grid};
use crate::generator::{GeneratorSettings, Score, ScorerType};
use colored::Colorize;

/// Print the run parameters before trials start
pub fn print_run_header(
    seed: u64,
    settings: GeneratorSettings,
    scorer: &ScorerType,
    word_source: &str,
    word_count: usize,
) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CROSSWORD GENERATOR".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n⚙️  {}", "Run:".bright_cyan().bold());
    println!("   Seed:             {}", seed.to_string().bright_yellow());
    println!("   Trials:           {}", settings.trial_count);
    println!(
        "   Max size:         {}×{}",
        settings.max_width, settings.max_height
    );
    println!("   Words:            {word_count} ({word_source})");

    println!("\n⚖️  {} {}", "Scoring:".bright_cyan().bold(), scorer.name());
    let ScorerType::Simple(weights) = scorer;
    for (name, value) in weights.weights() {
        println!("   {name:<22}{value:>6}");
    }
    println!();
}

/// Print a grid with colored letters and dotted empty cells
pub fn print_grid(grid: &Grid) {
    if grid.placed_word_count() == 0 {
        println!("   {}", "(empty grid)".bright_black());
        return;
    }

    for line in grid_lines(grid) {
        let cells: Vec<String> = line
            .split(' ')
            .map(|glyph| {
                if glyph.starts_with(EMPTY_GLYPH) {
                    glyph.bright_black().to_string()
                } else {
                    glyph.bright_white().bold().to_string()
                }
            })
            .collect();
        println!("   {}", cells.join(" "));
    }
}

/// Print numbered Across and Down clue lists
pub fn print_clues(grid: &Grid) {
    for direction in [Direction::Horizontal, Direction::Vertical] {
        let entries = grid.numbered_entries_in(direction);
        if entries.is_empty() {
            continue;
        }

        println!("\n   {}", direction.label().bright_cyan().bold());
        for entry in entries {
            println!(
                "   {:>3}. {} {}",
                entry.number,
                entry.word.clue(),
                format!("({})", entry.word.len()).bright_black()
            );
        }
    }
}

/// Print the running best grid during a generate run
pub fn print_interim_best(finished: usize, trial_index: usize, score: Score, grid: &Grid) {
    println!(
        "\n{} after {finished} trials: score {} (trial {trial_index})",
        "Best so far".bright_cyan().bold(),
        score.to_string().bright_yellow()
    );
    print_grid(grid);
}

/// Print the result of a generate run
pub fn print_generate_outcome(outcome: &GenerateOutcome) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "RESULT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let Some(best) = &outcome.best else {
        println!("\n{}", "No trials were run.".yellow());
        return;
    };
    let grid = &best.grid;

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Seed:             {}", outcome.seed);
    println!(
        "   Score:            {}",
        best.score.to_string().bright_yellow().bold()
    );
    println!("   Best trial:       {} of {}", best.trial_index, outcome.trial_count);
    println!(
        "   Words placed:     {}/{}",
        grid.placed_word_count(),
        outcome.word_count
    );
    println!("   Letters:          {}", grid.placed_letter_count());
    println!("   Crossings:        {}", grid.word_crossing_count());
    println!("   Size:             {}×{}", grid.width(), grid.height());
    println!(
        "   Time taken:       {} ({:.0} trials/s)",
        format_duration(outcome.duration),
        outcome.trials_per_second
    );

    println!("\n🧩 {}", "Grid:".bright_cyan().bold());
    print_grid(grid);
    print_clues(grid);

    if !outcome.unplaced_words.is_empty() {
        let missing: Vec<&str> = outcome.unplaced_words.iter().map(|w| w.text()).collect();
        println!(
            "\n{} {}",
            "Not placed:".yellow(),
            missing.join(", ").bright_black()
        );
    }
}

/// Print the result of a stats run
pub fn print_stats_result(result: &StatsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TRIAL STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Scores:".bright_cyan().bold());
    println!("   Trials:           {}", result.trial_count);
    println!(
        "   Best:             {} (trial {})",
        result.max_score.to_string().green().bold(),
        result.best_trial_index
    );
    println!("   Mean:             {:.1}", result.mean_score);
    println!(
        "   Worst:            {}",
        result.min_score.to_string().yellow()
    );
    println!(
        "   Time taken:       {} ({:.0} trials/s)",
        format_duration(result.duration),
        result.trials_per_second
    );

    println!("\n📈 {}", "Words placed:".bright_cyan().bold());
    for (&placed, &count) in result.placed_distribution.iter().rev() {
        let pct = count as f64 / result.trial_count as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {placed:>3}/{:<3} {} {count:5} ({pct:5.1}%)",
            result.word_count,
            bar.green()
        );
    }
}
