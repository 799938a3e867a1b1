//! Crossword Generator
//!
//! Builds crossword grids from clue/word lists by randomized greedy
//! placement, repeated over many independent trials, keeping the
//! best-scoring grid.
//!
//! # Quick Start
//!
//! ```rust
//! use crossword_gen::core::Word;
//! use crossword_gen::generator::{Generator, GeneratorSettings, SimpleScorer};
//!
//! let words = vec![
//!     Word::new(1, "Feline household pet", "cat").unwrap(),
//!     Word::new(2, "Sticky road surface", "tar").unwrap(),
//! ];
//! let scorer = SimpleScorer {
//!     placed_word_bonus: 10,
//!     ..SimpleScorer::default()
//! };
//! let settings = GeneratorSettings {
//!     trial_count: 10,
//!     ..GeneratorSettings::default()
//! };
//!
//! let generator = Generator::new(&words, scorer, settings, 42);
//! let best = generator.generate().unwrap();
//! assert_eq!(best.grid.placed_word_count(), 2);
//! println!("{}", best.grid);
//! ```

// Core domain types
pub mod core;

// Trial generation and scoring
pub mod generator;

// Word lists
pub mod wordlists;

// Configuration file
pub mod config;

// Command implementations
pub mod commands;

// Terminal and LaTeX output
pub mod output;

// Interactive TUI viewer
pub mod interactive;
