//! Formatting utilities for terminal output

use crate::core::Grid;
use indicatif::ProgressStyle;
use std::time::Duration;

/// Glyph for an empty cell in text renderings
pub const EMPTY_GLYPH: char = '·';

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}";

/// Progress bar style shared by the trial-running commands
#[must_use]
pub fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Glyph for one grid cell
#[must_use]
pub fn cell_glyph(cell: Option<u8>) -> char {
    cell.map_or(EMPTY_GLYPH, char::from)
}

/// Used area of `grid` as text, one row per line and cells separated by a
/// space
///
/// An empty grid yields no lines.
#[must_use]
pub fn grid_lines(grid: &Grid) -> Vec<String> {
    (0..grid.height() as i32)
        .map(|row| {
            (0..grid.width() as i32)
                .map(|column| cell_glyph(grid.cell(row, column)).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Compact human-readable duration
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.2}s")
    } else {
        let whole = duration.as_secs();
        format!("{}m {:02}s", whole / 60, whole % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Location, Word};

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn grid_lines_show_empty_cells() {
        let mut grid = Grid::new(10, 10);
        let cat = Word::new(1, "Pet", "CAT").unwrap();
        let tea = Word::new(2, "Drink", "TEA").unwrap();
        assert!(grid.place_first_word(&cat, Direction::Horizontal));
        let anchor = grid.placements()[0].location;
        assert!(grid.place_word(
            &tea,
            Location::new(anchor.row, anchor.column + 2, Direction::Vertical)
        ));

        assert_eq!(grid_lines(&grid), vec!["C A T", "· · E", "· · A"]);
    }

    #[test]
    fn grid_lines_empty_grid() {
        assert!(grid_lines(&Grid::new(5, 5)).is_empty());
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.50s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 05s");
    }
}
