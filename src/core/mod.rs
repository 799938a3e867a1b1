//! Core domain types for crossword construction
//!
//! Words, placement anchors and the letter grid with its placement rules.
//! Everything here is deterministic; randomness lives in the generator.

mod grid;
mod location;
mod numbering;
mod word;

pub use grid::{EMPTY_CELL, Grid, MAX_GRID_SIDE, Placement};
pub use location::{Direction, Idx, Location};
pub use numbering::NumberedEntry;
pub use word::{Word, WordError, WordId, WordList};
