//! TUI application state and logic

use crate::core::{Direction, Grid, Idx, NumberedEntry};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Puzzle viewer state
pub struct App<'a> {
    pub grid: &'a Grid,
    pub across: Vec<NumberedEntry<'a>>,
    pub down: Vec<NumberedEntry<'a>>,
    /// Which clue list has focus
    pub direction: Direction,
    /// Index into the focused list
    pub selected: usize,
    pub reveal: bool,
    pub should_quit: bool,
    /// Shown in the header, e.g. seed and score
    pub title: String,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(grid: &'a Grid, title: impl Into<String>) -> Self {
        let across = grid.numbered_entries_in(Direction::Horizontal);
        let down = grid.numbered_entries_in(Direction::Vertical);
        let direction = if across.is_empty() && !down.is_empty() {
            Direction::Vertical
        } else {
            Direction::Horizontal
        };

        Self {
            grid,
            across,
            down,
            direction,
            selected: 0,
            reveal: false,
            should_quit: false,
            title: title.into(),
        }
    }

    /// Entries of the focused list
    #[must_use]
    pub fn entries(&self) -> &[NumberedEntry<'a>] {
        match self.direction {
            Direction::Horizontal => &self.across,
            Direction::Vertical => &self.down,
        }
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&NumberedEntry<'a>> {
        self.entries().get(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.entries().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.entries().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.perpendicular();
        self.selected = 0;
    }

    pub fn toggle_reveal(&mut self) {
        self.reveal = !self.reveal;
    }

    /// Whether the visible cell belongs to the selected entry
    #[must_use]
    pub fn is_highlighted(&self, row: Idx, column: Idx) -> bool {
        self.selected_entry().is_some_and(|entry| {
            (0..entry.word.len() as Idx).any(|offset| entry.location.cell_at(offset) == (row, column))
        })
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Tab => self.toggle_direction(),
            KeyCode::Char('r') => self.toggle_reveal(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup or cleanup fails.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Location, Word};

    /// C A T
    /// - - E
    /// P E A
    fn setup_grid() -> Grid {
        let mut grid = Grid::new(10, 10);
        let cat = Word::new(1, "Pet", "CAT").unwrap();
        let tea = Word::new(2, "Drink", "TEA").unwrap();
        let pea = Word::new(3, "Pod vegetable", "PEA").unwrap();
        assert!(grid.place_first_word(&cat, Direction::Horizontal));
        let anchor = grid.placements()[0].location;
        assert!(grid.place_word(
            &tea,
            Location::new(anchor.row, anchor.column + 2, Direction::Vertical)
        ));
        assert!(grid.place_word(
            &pea,
            Location::new(anchor.row + 2, anchor.column, Direction::Horizontal)
        ));
        grid
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn starts_on_first_across_clue() {
        let grid = setup_grid();
        let app = App::new(&grid, "test");

        assert_eq!(app.direction, Direction::Horizontal);
        assert_eq!(app.across.len(), 2);
        assert_eq!(app.down.len(), 1);
        assert_eq!(app.selected_entry().unwrap().word.text(), "CAT");
        assert!(!app.reveal);
    }

    #[test]
    fn selection_wraps() {
        let grid = setup_grid();
        let mut app = App::new(&grid, "test");

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_entry().unwrap().word.text(), "PEA");
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_entry().unwrap().word.text(), "CAT");
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected_entry().unwrap().word.text(), "PEA");
    }

    #[test]
    fn tab_switches_list() {
        let grid = setup_grid();
        let mut app = App::new(&grid, "test");
        press(&mut app, KeyCode::Down);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.direction, Direction::Vertical);
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_entry().unwrap().word.text(), "TEA");
    }

    #[test]
    fn highlight_follows_selection() {
        let grid = setup_grid();
        let mut app = App::new(&grid, "test");

        assert!(app.is_highlighted(0, 0));
        assert!(app.is_highlighted(0, 2));
        assert!(!app.is_highlighted(1, 2));

        press(&mut app, KeyCode::Tab);
        assert!(app.is_highlighted(0, 2));
        assert!(app.is_highlighted(1, 2));
        assert!(app.is_highlighted(2, 2));
        assert!(!app.is_highlighted(0, 0));
    }

    #[test]
    fn reveal_and_quit_keys() {
        let grid = setup_grid();
        let mut app = App::new(&grid, "test");

        press(&mut app, KeyCode::Char('r'));
        assert!(app.reveal);
        press(&mut app, KeyCode::Char('r'));
        assert!(!app.reveal);

        assert!(!app.should_quit);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn empty_grid_has_no_selection() {
        let grid = Grid::new(5, 5);
        let mut app = App::new(&grid, "empty");

        assert!(app.selected_entry().is_none());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Tab);
        assert!(app.selected_entry().is_none());
        assert!(!app.is_highlighted(0, 0));
    }
}
