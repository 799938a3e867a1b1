//! LaTeX puzzle rendering
//!
//! Produces a standalone document for the `cwpuzzle` package. The puzzle is
//! one row and one column larger than the grid: a word's start marker sits in
//! the cell before its first letter, above it for down entries and to its
//! left for across entries. Down and across markers are numbered
//! independently in scan order.

use crate::core::{Direction, Grid, Idx, Word};
use std::fmt::{self, Write as _};
use std::fs;
use std::io;
use std::path::Path;

const PREAMBLE: &str = r"
\documentclass{article}

\usepackage{amssymb}
\usepackage{relsize}
\usepackage[a4paper, margin=1cm]{geometry}
\usepackage[small]{cwpuzzle}

\begin{document}
";

const PUZZLE_MACROS: &str = r"
\renewcommand{\PuzzleUnitlength}{13pt}
\newcommand{\cluer}[1]{\textbf{#1}^\blacktriangleright}
\newcommand{\clued}[1]{\textbf{#1}\blacktriangledown}
";

const CLOSING: &str = r"
\end{document}
";

/// One cell of the enlarged puzzle
struct PuzzleCell {
    content: Option<u8>,
    down_marker: Option<usize>,
    across_marker: Option<usize>,
}

/// A grid laid out as a `cwpuzzle` with its clue lists
///
/// # Examples
/// ```
/// use crossword_gen::core::{Direction, Grid, Word};
/// use crossword_gen::output::latex::LatexPuzzle;
///
/// let mut grid = Grid::new(10, 10);
/// grid.place_first_word(&Word::new(1, "Pet", "CAT").unwrap(), Direction::Horizontal);
///
/// let document = LatexPuzzle::new(&grid).to_string();
/// assert!(document.contains(r"\begin{Puzzle}{4}{2}"));
/// ```
pub struct LatexPuzzle<'g> {
    rows: Vec<Vec<PuzzleCell>>,
    down_clues: Vec<(usize, &'g Word)>,
    across_clues: Vec<(usize, &'g Word)>,
}

impl<'g> LatexPuzzle<'g> {
    #[must_use]
    pub fn new(grid: &'g Grid) -> Self {
        let height = grid.height() as Idx;
        let width = grid.width() as Idx;

        let mut rows = Vec::with_capacity(grid.height() + 1);
        let mut down_clues = Vec::new();
        let mut across_clues = Vec::new();

        for i in 0..=height {
            let mut row = Vec::with_capacity(grid.width() + 1);
            for j in 0..=width {
                let down_marker = grid
                    .word_starting_at(i, j - 1, Direction::Vertical)
                    .map(|word| {
                        down_clues.push((down_clues.len() + 1, word));
                        down_clues.len()
                    });
                let across_marker = grid
                    .word_starting_at(i - 1, j, Direction::Horizontal)
                    .map(|word| {
                        across_clues.push((across_clues.len() + 1, word));
                        across_clues.len()
                    });

                row.push(PuzzleCell {
                    content: grid.cell(i - 1, j - 1),
                    down_marker,
                    across_marker,
                });
            }
            rows.push(row);
        }

        Self {
            rows,
            down_clues,
            across_clues,
        }
    }

    fn write_puzzle(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.rows.first().map_or(0, Vec::len);
        writeln!(f)?;
        writeln!(f, "\\begin{{Puzzle}}{{{columns}}}{{{}}}", self.rows.len())?;

        for row in &self.rows {
            for cell in row {
                f.write_char('|')?;

                if cell.down_marker.is_some() || cell.across_marker.is_some() {
                    f.write_str("[$")?;
                    if let Some(n) = cell.down_marker {
                        write!(f, "_{{\\clued{{{n}}}}}")?;
                    }
                    if let Some(n) = cell.across_marker {
                        write!(f, "^{{\\cluer{{{n}}}}}")?;
                    }
                    f.write_str("$]")?;
                }

                match cell.content {
                    Some(letter) => write!(f, " {}", char::from(letter))?,
                    None => f.write_str("{}")?,
                }
            }
            writeln!(f, "|.")?;
        }

        writeln!(f, "\\end{{Puzzle}}")
    }

    fn write_clues(
        f: &mut fmt::Formatter<'_>,
        direction: Direction,
        clues: &[(usize, &Word)],
    ) -> fmt::Result {
        if clues.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "\\section*{{{}}}", direction.label())?;
        writeln!(f, "\\begin{{description}}")?;
        for (number, word) in clues {
            writeln!(f, "  \\item[{number}] {}", escape_latex(word.clue()))?;
        }
        writeln!(f, "\\end{{description}}")
    }
}

impl fmt::Display for LatexPuzzle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PREAMBLE)?;
        f.write_str(PUZZLE_MACROS)?;
        self.write_puzzle(f)?;
        Self::write_clues(f, Direction::Horizontal, &self.across_clues)?;
        Self::write_clues(f, Direction::Vertical, &self.down_clues)?;
        f.write_str(CLOSING)
    }
}

/// Escape characters with special meaning in LaTeX text
#[must_use]
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '~' => escaped.push_str(r"\textasciitilde{}"),
            '^' => escaped.push_str(r"\textasciicircum{}"),
            '\\' => escaped.push_str(r"\textbackslash{}"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Write the LaTeX document for `grid` to `path`
///
/// # Errors
/// Returns the underlying I/O error if the file cannot be written.
pub fn write_latex(grid: &Grid, path: &Path) -> io::Result<()> {
    fs::write(path, LatexPuzzle::new(grid).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Location;

    /// C A T
    /// - - E
    /// - - A
    fn setup_grid() -> Grid {
        let mut grid = Grid::new(10, 10);
        let cat = Word::new(1, "Pet that purrs", "CAT").unwrap();
        let tea = Word::new(2, "Earl Grey, e.g.", "TEA").unwrap();
        assert!(grid.place_first_word(&cat, Direction::Horizontal));
        let anchor = grid.placements()[0].location;
        assert!(grid.place_word(
            &tea,
            Location::new(anchor.row, anchor.column + 2, Direction::Vertical)
        ));
        grid
    }

    #[test]
    fn puzzle_body_places_markers_before_words() {
        let grid = setup_grid();
        let document = LatexPuzzle::new(&grid).to_string();

        let expected = "\\begin{Puzzle}{4}{4}\n\
                        |{}|{}|{}|[$_{\\clued{1}}$]{}|.\n\
                        |[$^{\\cluer{1}}$]{}| C| A| T|.\n\
                        |{}|{}|{}| E|.\n\
                        |{}|{}|{}| A|.\n\
                        \\end{Puzzle}\n";
        assert!(document.contains(expected), "{document}");
    }

    #[test]
    fn document_framing() {
        let grid = setup_grid();
        let document = LatexPuzzle::new(&grid).to_string();

        assert!(document.starts_with("\n\\documentclass{article}"));
        assert!(document.contains("\\usepackage[small]{cwpuzzle}"));
        assert!(document.contains("\\newcommand{\\clued}[1]"));
        assert!(document.trim_end().ends_with("\\end{document}"));
    }

    #[test]
    fn clue_lists_use_marker_numbers() {
        let grid = setup_grid();
        let document = LatexPuzzle::new(&grid).to_string();

        assert!(document.contains("\\section*{Across}"));
        assert!(document.contains("\\item[1] Pet that purrs"));
        assert!(document.contains("\\section*{Down}"));
        assert!(document.contains("\\item[1] Earl Grey, e.g."));
    }

    #[test]
    fn counters_are_independent_and_in_scan_order() {
        // C A T
        // - - E
        // P E A
        let mut grid = setup_grid();
        let anchor = grid.placements()[0].location;
        let pea = Word::new(3, "Pod vegetable", "PEA").unwrap();
        assert!(grid.place_word(
            &pea,
            Location::new(anchor.row + 2, anchor.column, Direction::Horizontal)
        ));

        let puzzle = LatexPuzzle::new(&grid);
        let across: Vec<_> = puzzle
            .across_clues
            .iter()
            .map(|(n, w)| (*n, w.text()))
            .collect();
        let down: Vec<_> = puzzle
            .down_clues
            .iter()
            .map(|(n, w)| (*n, w.text()))
            .collect();

        assert_eq!(across, vec![(1, "CAT"), (2, "PEA")]);
        assert_eq!(down, vec![(1, "TEA")]);
    }

    #[test]
    fn empty_grid_renders_single_cell() {
        let grid = Grid::new(5, 5);
        let document = LatexPuzzle::new(&grid).to_string();
        assert!(document.contains("\\begin{Puzzle}{1}{1}\n|{}|.\n\\end{Puzzle}"));
        assert!(!document.contains("\\section*"));
    }

    #[test]
    fn escapes_special_characters() {
        assert_eq!(escape_latex("50% & more"), "50\\% \\& more");
        assert_eq!(escape_latex("a_b{c}"), "a\\_b\\{c\\}");
        assert_eq!(escape_latex("x^2"), "x\\textasciicircum{}2");
    }

    #[test]
    fn write_latex_creates_file() {
        let grid = setup_grid();
        let path = std::env::temp_dir().join(format!(
            "crossword_gen_{}_puzzle.tex",
            std::process::id()
        ));
        write_latex(&grid, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\\begin{Puzzle}"));
        fs::remove_file(&path).unwrap();
    }
}
