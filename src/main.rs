//! Crossword Generator - CLI
//!
//! Generates crossword grids from a clue/word list and prints, exports or
//! browses the best one.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use crossword_gen::{
    commands::{GenerateOptions, run_generate, run_stats},
    config::Config,
    generator::{Generator, ScorerType, seed::seed_from_clock},
    output::{print_generate_outcome, print_run_header, print_stats_result, write_latex},
    wordlists::WordProviderType,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "crossword_gen",
    about = "Crossword grid generator using randomized multi-trial placement",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (JSON); bundled defaults when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// RNG seed; derived from the clock when omitted
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Number of trials (overrides crossword_generation_count)
    #[arg(short = 'n', long, global = true)]
    trials: Option<u32>,

    /// Maximum grid width (overrides max_width)
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Maximum grid height (overrides max_height)
    #[arg(long, global = true)]
    height: Option<u32>,

    /// CSV word list with `clue,word` lines (overrides the wordlist section)
    #[arg(short, long, global = true)]
    wordlist: Option<PathBuf>,

    /// Suppress the run header and progress bar
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a crossword and print it (default)
    Generate {
        /// Also write the puzzle as a LaTeX document
        #[arg(long, value_name = "FILE")]
        latex: Option<PathBuf>,

        /// Print the best grid so far every N finished trials
        #[arg(long, value_name = "N")]
        report_every: Option<usize>,
    },

    /// Run all trials and print score statistics
    Stats,

    /// Generate a crossword and browse it in the terminal
    View,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let settings = config.generator_settings()?;
    let scorer = config.scorer()?;
    let provider = config.word_provider()?;

    let words = provider.load()?;
    if words.is_empty() {
        bail!("Word list {} is empty", describe_provider(&provider));
    }

    let seed = cli.seed.unwrap_or_else(seed_from_clock);

    if !cli.quiet {
        print_run_header(
            seed,
            settings,
            &scorer,
            &describe_provider(&provider),
            words.len(),
        );
    }

    let generator = Generator::new(&words, scorer, settings, seed);

    match cli.command {
        None => run_generate_command(&generator, None, None, cli.quiet),
        Some(Commands::Generate {
            latex,
            report_every,
        }) => run_generate_command(&generator, latex.as_deref(), report_every, cli.quiet),
        Some(Commands::Stats) => {
            run_stats_command(&generator, cli.quiet);
            Ok(())
        }
        Some(Commands::View) => run_view_command(&generator, cli.quiet),
    }
}

/// Load the config file (or the bundled one) and apply command-line overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::bundled()?,
    };

    if let Some(trials) = cli.trials {
        config.constraints.crossword_generation_count = i64::from(trials);
    }
    if let Some(width) = cli.width {
        config.constraints.max_width = i64::from(width);
    }
    if let Some(height) = cli.height {
        config.constraints.max_height = i64::from(height);
    }
    if let Some(path) = &cli.wordlist {
        config.use_csv_wordlist(path);
    }

    Ok(config)
}

fn describe_provider(provider: &WordProviderType) -> String {
    match provider {
        WordProviderType::Csv(csv) => csv.path().display().to_string(),
        WordProviderType::Builtin(_) => "built-in sample list".to_string(),
    }
}

fn run_generate_command(
    generator: &Generator<'_, ScorerType>,
    latex: Option<&Path>,
    report_every: Option<usize>,
    quiet: bool,
) -> Result<()> {
    let options = GenerateOptions {
        show_progress: !quiet,
        report_every,
    };

    let outcome = run_generate(generator, options);
    print_generate_outcome(&outcome);

    if let (Some(path), Some(best)) = (latex, &outcome.best) {
        write_latex(&best.grid, path)
            .with_context(|| format!("Could not write LaTeX file {}", path.display()))?;
        println!("\nLaTeX puzzle written to {}", path.display());
    }

    Ok(())
}

fn run_stats_command(generator: &Generator<'_, ScorerType>, quiet: bool) {
    match run_stats(generator, !quiet) {
        Some(result) => print_stats_result(&result),
        None => println!("No trials were run."),
    }
}

fn run_view_command(generator: &Generator<'_, ScorerType>, quiet: bool) -> Result<()> {
    use crossword_gen::interactive::{App, run_tui};

    let options = GenerateOptions {
        show_progress: !quiet,
        report_every: None,
    };
    let outcome = run_generate(generator, options);

    let Some(best) = outcome.best else {
        bail!("No trials were run");
    };

    let title = format!("seed {} · score {}", outcome.seed, best.score);
    let app = App::new(&best.grid, title);
    run_tui(app)
}
