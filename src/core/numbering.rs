//! Clue numbering for rendered puzzles
//!
//! Start cells are numbered in reading order; an across and a down entry
//! starting on the same cell share one number.

use super::grid::Grid;
use super::location::{Direction, Location};
use super::word::Word;

/// A placed word with its printed clue number
#[derive(Debug, Clone, Copy)]
pub struct NumberedEntry<'a> {
    pub number: usize,
    /// First-letter cell in visible coordinates
    pub location: Location,
    pub word: &'a Word,
}

impl Grid {
    /// All placed words in reading order with their clue numbers
    ///
    /// # Examples
    /// ```
    /// use crossword_gen::core::{Direction, Grid, Word};
    ///
    /// let mut grid = Grid::new(10, 10);
    /// grid.place_first_word(&Word::new(1, "Pet", "CAT").unwrap(), Direction::Horizontal);
    ///
    /// let entries = grid.numbered_entries();
    /// assert_eq!(entries.len(), 1);
    /// assert_eq!(entries[0].number, 1);
    /// ```
    #[must_use]
    pub fn numbered_entries(&self) -> Vec<NumberedEntry<'_>> {
        let mut entries: Vec<(Location, &Word)> = self
            .placements()
            .iter()
            .map(|p| (self.visible_location(p.location), &p.word))
            .collect();

        // Across before down on a shared start cell
        entries.sort_by_key(|(loc, _)| {
            (loc.row, loc.column, loc.direction == Direction::Vertical)
        });

        let mut numbered = Vec::with_capacity(entries.len());
        let mut number = 0;
        let mut last_cell = None;

        for (location, word) in entries {
            let cell = (location.row, location.column);
            if last_cell != Some(cell) {
                number += 1;
                last_cell = Some(cell);
            }
            numbered.push(NumberedEntry {
                number,
                location,
                word,
            });
        }

        numbered
    }

    /// Numbered entries running in one direction, in number order
    #[must_use]
    pub fn numbered_entries_in(&self, direction: Direction) -> Vec<NumberedEntry<'_>> {
        self.numbered_entries()
            .into_iter()
            .filter(|entry| entry.location.direction == direction)
            .collect()
    }
}
