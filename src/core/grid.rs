//! Crossword letter grid
//!
//! Owns the letter matrix, the placement history and all placement-validity
//! rules. The matrix is allocated at twice the declared maximum size in each
//! axis so the anchor word can sit in the center and later words can grow
//! the puzzle in any direction; the used area must still fit the declared
//! size.

use super::location::{Direction, Idx, Location};
use super::word::Word;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::fmt;

/// Marker stored in cells that hold no letter
pub const EMPTY_CELL: u8 = b'-';

/// Largest accepted maximum width or height; larger requests are clamped
pub const MAX_GRID_SIDE: usize = 1024;

/// A word together with where it was placed (internal coordinates)
#[derive(Debug, Clone)]
pub struct Placement {
    pub location: Location,
    pub word: Word,
}

/// Smallest rectangle enclosing every placed letter, in internal coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UsedBounds {
    min_row: Idx,
    max_row: Idx,
    min_column: Idx,
    max_column: Idx,
}

impl UsedBounds {
    const fn at(row: Idx, column: Idx) -> Self {
        Self {
            min_row: row,
            max_row: row,
            min_column: column,
            max_column: column,
        }
    }

    /// Bounds grown to also cover the segment from `start` to `end`
    fn including(self, start: (Idx, Idx), end: (Idx, Idx)) -> Self {
        Self {
            min_row: self.min_row.min(start.0).min(end.0),
            max_row: self.max_row.max(start.0).max(end.0),
            min_column: self.min_column.min(start.1).min(end.1),
            max_column: self.max_column.max(start.1).max(end.1),
        }
    }

    /// `max - min` along the row axis
    const fn row_span(&self) -> Idx {
        self.max_row - self.min_row
    }

    /// `max - min` along the column axis
    const fn column_span(&self) -> Idx {
        self.max_column - self.min_column
    }
}

/// Crossword grid built up by successive word placements
///
/// Placements are append-only; there is no removal or backtracking.
#[derive(Debug, Clone)]
pub struct Grid {
    internal_rows: Idx,
    internal_columns: Idx,
    max_rows: Idx,
    max_columns: Idx,
    cells: Vec<u8>,
    letter_index: FxHashMap<u8, BTreeSet<usize>>,
    placements: Vec<Placement>,
    bounds: UsedBounds,
    placed_letters: usize,
    crossings: usize,
}

impl Grid {
    /// Create an empty grid whose used area may not exceed
    /// `max_rows` × `max_columns`
    ///
    /// Either limit above [`MAX_GRID_SIDE`] is clamped to it.
    ///
    /// # Examples
    /// ```
    /// use crossword_gen::core::{Direction, Grid, Word};
    ///
    /// let mut grid = Grid::new(10, 10);
    /// let cat = Word::new(1, "Feline household pet", "CAT").unwrap();
    /// let tar = Word::new(2, "Sticky black substance", "TAR").unwrap();
    ///
    /// assert!(grid.place_first_word(&cat, Direction::Horizontal));
    /// let candidates = grid.valid_placements(&tar);
    /// assert!(!candidates.is_empty());
    /// assert!(grid.place_word(&tar, candidates[0]));
    /// assert_eq!(grid.word_crossing_count(), 1);
    /// ```
    #[must_use]
    pub fn new(max_rows: usize, max_columns: usize) -> Self {
        // Clamped sides keep the doubled matrix size well inside Idx
        let max_rows = max_rows.min(MAX_GRID_SIDE) as Idx;
        let max_columns = max_columns.min(MAX_GRID_SIDE) as Idx;
        let internal_rows = 2 * max_rows;
        let internal_columns = 2 * max_columns;

        Self {
            internal_rows,
            internal_columns,
            max_rows,
            max_columns,
            cells: vec![EMPTY_CELL; (internal_rows * internal_columns) as usize],
            letter_index: FxHashMap::default(),
            placements: Vec::new(),
            // The anchor word is centered, so the used area starts there
            bounds: UsedBounds::at(max_rows, max_columns),
            placed_letters: 0,
            crossings: 0,
        }
    }

    /// Matrix offset of an internal cell, or `None` outside the matrix
    #[inline]
    fn offset(&self, row: Idx, column: Idx) -> Option<usize> {
        let inside = (0..self.internal_rows).contains(&row)
            && (0..self.internal_columns).contains(&column);
        inside.then(|| (row * self.internal_columns + column) as usize)
    }

    #[inline]
    fn coords(&self, offset: usize) -> (Idx, Idx) {
        let offset = offset as Idx;
        (offset / self.internal_columns, offset % self.internal_columns)
    }

    /// True if the cell is inside the matrix and holds a letter
    #[inline]
    fn is_occupied(&self, (row, column): (Idx, Idx)) -> bool {
        self.offset(row, column)
            .is_some_and(|i| self.cells[i] != EMPTY_CELL)
    }

    /// Check that `word` at `loc` stays inside the matrix and keeps the used
    /// area within the declared maximum size
    #[must_use]
    pub fn is_in_bounds(&self, word: &Word, loc: Location) -> bool {
        let start = (loc.row, loc.column);
        let end = loc.end(word.len());

        if self.offset(start.0, start.1).is_none() || self.offset(end.0, end.1).is_none() {
            return false;
        }

        let grown = self.bounds.including(start, end);
        grown.row_span() < self.max_rows && grown.column_span() < self.max_columns
    }

    /// Check whether `word` can be laid at `loc` against the current grid
    ///
    /// Rejects placements that abut another word end-to-end, run alongside
    /// another word without crossing it, conflict with an existing letter,
    /// or overlap a collinear word. A placement must also write at least one
    /// new letter.
    #[must_use]
    pub fn is_valid_placement(&self, word: &Word, loc: Location) -> bool {
        if !self.is_in_bounds(word, loc) {
            return false;
        }

        let length = word.len() as Idx;
        if self.is_occupied(loc.cell_at(-1)) || self.is_occupied(loc.cell_at(length)) {
            return false;
        }

        let (side_row, side_column) = loc.direction.perpendicular().step();
        let mut writes_new_letter = false;

        for (i, &letter) in word.letters().iter().enumerate() {
            let i = i as Idx;
            let (row, column) = loc.cell_at(i);
            let Some(offset) = self.offset(row, column) else {
                return false;
            };

            match self.cells[offset] {
                EMPTY_CELL => {
                    if self.is_occupied((row - side_row, column - side_column))
                        || self.is_occupied((row + side_row, column + side_column))
                    {
                        return false;
                    }
                    writes_new_letter = true;
                }
                existing if existing != letter => return false,
                // Crossing: the following cell along this word must be free,
                // otherwise the two words overlap collinearly
                _ => {
                    if self.is_occupied(loc.cell_at(i + 1)) {
                        return false;
                    }
                }
            }
        }

        writes_new_letter
    }

    /// Write `word` at `loc` without any checks
    ///
    /// Existing letters under the word are overwritten. Callers must have
    /// validated the placement beforehand.
    ///
    /// # Panics
    /// Panics if any letter would fall outside the internal matrix.
    pub fn place_word_unchecked(&mut self, word: &Word, loc: Location) {
        for (i, &letter) in word.letters().iter().enumerate() {
            let (row, column) = loc.cell_at(i as Idx);
            let offset = self
                .offset(row, column)
                .unwrap_or_else(|| panic!("placement of {word} at {loc} leaves the grid"));

            match self.cells[offset] {
                EMPTY_CELL => self.placed_letters += 1,
                existing if existing == letter => self.crossings += 1,
                existing => {
                    if let Some(cells) = self.letter_index.get_mut(&existing) {
                        cells.remove(&offset);
                    }
                }
            }

            self.cells[offset] = letter;
            self.letter_index.entry(letter).or_default().insert(offset);
        }

        self.bounds = self
            .bounds
            .including((loc.row, loc.column), loc.end(word.len()));
        self.placements.push(Placement {
            location: loc,
            word: word.clone(),
        });
    }

    /// Place `word` at `loc` if the placement is valid
    ///
    /// Returns false and leaves the grid untouched otherwise.
    pub fn place_word(&mut self, word: &Word, loc: Location) -> bool {
        if !self.is_valid_placement(word, loc) {
            return false;
        }
        self.place_word_unchecked(word, loc);
        true
    }

    /// Place the anchor word centered in the internal matrix
    ///
    /// Returns false if the grid already holds a word or the word does not
    /// fit the declared size.
    pub fn place_first_word(&mut self, word: &Word, direction: Direction) -> bool {
        if !self.placements.is_empty() {
            return false;
        }

        let half = (word.len() / 2) as Idx;
        let mut loc = Location::new(self.internal_rows / 2, self.internal_columns / 2, direction);
        match direction {
            Direction::Vertical => loc.row -= half,
            Direction::Horizontal => loc.column -= half,
        }

        self.place_word(word, loc)
    }

    /// Append every valid crossing location for `word` to `out`
    ///
    /// Each grid cell holding one of the word's letters yields one vertical
    /// and one horizontal candidate aligning that letter with the cell. A
    /// location reachable through several crossings is appended once per
    /// crossing.
    pub fn get_valid_placements(&self, word: &Word, out: &mut Vec<Location>) {
        for (i, letter) in word.letters().iter().enumerate() {
            let Some(offsets) = self.letter_index.get(letter) else {
                continue;
            };
            let i = i as Idx;

            for &offset in offsets {
                let (row, column) = self.coords(offset);
                let candidates = [
                    Location::new(row - i, column, Direction::Vertical),
                    Location::new(row, column - i, Direction::Horizontal),
                ];
                out.extend(
                    candidates
                        .into_iter()
                        .filter(|&candidate| self.is_valid_placement(word, candidate)),
                );
            }
        }
    }

    /// Convenience wrapper around [`Grid::get_valid_placements`]
    #[must_use]
    pub fn valid_placements(&self, word: &Word) -> Vec<Location> {
        let mut out = Vec::new();
        self.get_valid_placements(word, &mut out);
        out
    }

    #[inline]
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    #[inline]
    #[must_use]
    pub fn placed_word_count(&self) -> usize {
        self.placements.len()
    }

    /// Number of letter cells, each crossing counted once
    #[inline]
    #[must_use]
    pub const fn placed_letter_count(&self) -> usize {
        self.placed_letters
    }

    /// Number of cells shared by two words
    #[inline]
    #[must_use]
    pub const fn word_crossing_count(&self) -> usize {
        self.crossings
    }

    /// Height limit of the used area
    #[inline]
    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows as usize
    }

    #[inline]
    #[must_use]
    pub const fn max_columns(&self) -> usize {
        self.max_columns as usize
    }

    /// Number of used columns (0 for an empty grid)
    #[must_use]
    pub fn width(&self) -> usize {
        if self.placements.is_empty() {
            0
        } else {
            (self.bounds.column_span() + 1) as usize
        }
    }

    /// Number of used rows (0 for an empty grid)
    #[must_use]
    pub fn height(&self) -> usize {
        if self.placements.is_empty() {
            0
        } else {
            (self.bounds.row_span() + 1) as usize
        }
    }

    /// Letter at a visible position, `(0, 0)` being the top-left used cell
    ///
    /// Returns `None` for empty cells and for any position outside the used
    /// area, negative positions included.
    #[must_use]
    pub fn cell(&self, row: Idx, column: Idx) -> Option<u8> {
        if row < 0 || column < 0 || row >= self.height() as Idx || column >= self.width() as Idx {
            return None;
        }

        self.offset(row + self.bounds.min_row, column + self.bounds.min_column)
            .map(|i| self.cells[i])
            .filter(|&c| c != EMPTY_CELL)
    }

    /// Map an internal location to visible coordinates
    #[must_use]
    pub const fn visible_location(&self, loc: Location) -> Location {
        Location::new(
            loc.row - self.bounds.min_row,
            loc.column - self.bounds.min_column,
            loc.direction,
        )
    }

    /// Word whose first letter sits at the visible position and runs in
    /// `direction`
    #[must_use]
    pub fn word_starting_at(&self, row: Idx, column: Idx, direction: Direction) -> Option<&Word> {
        let target = Location::new(
            row + self.bounds.min_row,
            column + self.bounds.min_column,
            direction,
        );
        self.placements
            .iter()
            .find(|p| p.location == target)
            .map(|p| &p.word)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() as Idx {
            let line: String = (0..self.width() as Idx)
                .map(|column| char::from(self.cell(row, column).unwrap_or(EMPTY_CELL)))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
