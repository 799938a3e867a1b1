//! TUI rendering with ratatui
//!
//! Grid, clue list and status bar for the puzzle viewer.

use super::app::App;
use crate::core::Idx;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Grid
            Constraint::Percentage(50), // Clues
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_clues(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🧩 CROSSWORD - {}", app.title))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let grid = app.grid;

    let lines: Vec<Line> = (0..grid.height() as Idx)
        .map(|row| {
            let spans: Vec<Span> = (0..grid.width() as Idx)
                .map(|column| cell_span(app, row, column))
                .collect();
            Line::from(spans)
        })
        .collect();

    let content = if lines.is_empty() {
        vec![Line::from("Nothing was placed")]
    } else {
        lines
    };

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Grid {}×{} of {}×{} ",
                grid.width(),
                grid.height(),
                grid.max_columns(),
                grid.max_rows()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn cell_span(app: &App, row: Idx, column: Idx) -> Span<'static> {
    let Some(letter) = app.grid.cell(row, column) else {
        return Span::styled(" · ", Style::default().fg(Color::DarkGray));
    };

    let text = if app.reveal {
        format!(" {} ", char::from(letter))
    } else {
        " □ ".to_string()
    };

    let style = if app.is_highlighted(row, column) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    Span::styled(text, style)
}

fn render_clues(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .entries()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3}. ", entry.number),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(entry.word.clue().to_string()),
                Span::styled(
                    format!(" ({})", entry.word.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let other = app.direction.perpendicular();
    let title = format!(
        " {} | TAB for {} ",
        app.direction.label(),
        other.label()
    );

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(app.selected_entry().map(|_| app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(50),
        ])
        .split(area);

    let position = match app.selected_entry() {
        Some(entry) => format!(
            "{} {} of {}",
            entry.number,
            app.direction.label(),
            app.entries().len()
        ),
        None => format!("No {} clues", app.direction.label().to_lowercase()),
    };
    f.render_widget(
        Paragraph::new(position).alignment(Alignment::Center),
        chunks[0],
    );

    let reveal = if app.reveal { "Letters: shown" } else { "Letters: hidden" };
    f.render_widget(
        Paragraph::new(reveal).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("q: Quit | ↑/↓: Select | TAB: Across/Down | r: Reveal")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
