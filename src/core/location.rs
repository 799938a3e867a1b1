//! Word placement anchors
//!
//! A Location is the cell holding a word's first letter plus its orientation.

use std::fmt;

/// Signed grid coordinate
///
/// Signed so candidate anchors derived by stepping back from a crossing cell
/// can fall before the grid origin and be rejected by bounds checks.
pub type Idx = i32;

/// Orientation of a placed word
///
/// The numeric encoding is fixed (`Vertical = 0`, `Horizontal = 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Vertical = 0,
    Horizontal = 1,
}

impl Direction {
    pub const ALL: [Self; 2] = [Self::Vertical, Self::Horizontal];

    /// Row/column step from one letter of a word to the next
    #[inline]
    #[must_use]
    pub const fn step(self) -> (Idx, Idx) {
        match self {
            Self::Vertical => (1, 0),
            Self::Horizontal => (0, 1),
        }
    }

    /// The other axis
    #[inline]
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Conventional crossword name for entries in this direction
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vertical => "Down",
            Self::Horizontal => "Across",
        }
    }
}

/// First-letter cell and orientation of a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: Idx,
    pub column: Idx,
    pub direction: Direction,
}

impl Location {
    #[must_use]
    pub const fn new(row: Idx, column: Idx, direction: Direction) -> Self {
        Self {
            row,
            column,
            direction,
        }
    }

    /// Cell of the letter at `offset` along the placement axis
    ///
    /// Negative offsets and offsets past the word end are allowed; they name
    /// the cells before the first and after the last letter.
    #[inline]
    #[must_use]
    pub const fn cell_at(&self, offset: Idx) -> (Idx, Idx) {
        let (dr, dc) = self.direction.step();
        (self.row + dr * offset, self.column + dc * offset)
    }

    /// Cell of the last letter of a word of `length` letters
    #[inline]
    #[must_use]
    pub const fn end(&self, length: usize) -> (Idx, Idx) {
        self.cell_at(length as Idx - 1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}",
            self.row,
            self.column,
            self.direction.label().to_lowercase()
        )
    }
}
