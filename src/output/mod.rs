//! Terminal output formatting
//!
//! Console and LaTeX renderings of generated grids and run summaries.

pub mod display;
pub mod formatters;
pub mod latex;

pub use display::{
    print_clues, print_generate_outcome, print_grid, print_interim_best, print_run_header,
    print_stats_result,
};
pub use latex::{LatexPuzzle, write_latex};
