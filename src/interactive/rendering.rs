//! TUI rendering with ratatui
//!
//! Grid, on-screen keyboard, messages and status bar.

use super::app::{App, MessageStyle};
use crate::core::{COLS, LetterStatus, ROWS};
use crate::game::{Cell, GameState, KeyboardState};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Background and foreground for a status
#[must_use]
pub fn status_style(status: LetterStatus) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        LetterStatus::Correct => base.bg(Color::Green).fg(Color::Black),
        LetterStatus::Present => base.bg(Color::Yellow).fg(Color::Black),
        LetterStatus::Absent => base.bg(Color::DarkGray).fg(Color::White),
        LetterStatus::Unset => base.fg(Color::White),
    }
}

/// Main UI rendering function
pub fn ui<W: WordSource>(f: &mut Frame, app: &App<W>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Grid
            Constraint::Length(8),  // Keyboard
            Constraint::Min(4),     // Messages
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app.session.keyboard(), chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let mut spans = vec![Span::styled(
        "WORDLE",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    // Reveal the word once the game is over
    if let Some(target) = app.session.target() {
        let color = match app.state() {
            GameState::Won => Color::Green,
            _ => Color::Red,
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            target.text().to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile(cell: Cell) -> Span<'static> {
    let letter = cell.letter.map_or(' ', char::from);
    let style = if cell.status.is_set() || cell.is_empty() {
        status_style(cell.status)
    } else {
        // Typed but not yet submitted
        status_style(LetterStatus::Unset).bg(Color::Indexed(236))
    };
    Span::styled(format!(" {letter} "), style)
}

/// Grid rows as lines of tiles, blank line between rows
#[must_use]
pub fn grid_lines(rows: &[[Cell; COLS]]) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(rows.len() * 2);
    for row in rows {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for (i, &cell) in row.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(tile(cell));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }
    lines
}

fn render_grid<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let grid = Paragraph::new(grid_lines(app.session.board().rows()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Guess {} ", (app.session.guesses_used() + 1).min(ROWS)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(grid, area);
}

/// Keyboard rows, with ENTER and DEL around the bottom row
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<Line<'static>> {
    let key_style = Style::default().fg(Color::Black).bg(Color::Gray);

    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .flat_map(|(i, row)| {
            let mut spans = Vec::new();
            if i == KEYBOARD_ROWS.len() - 1 {
                spans.push(Span::styled(" ENTER ", key_style));
                spans.push(Span::raw(" "));
            }
            for b in row.bytes() {
                let status = keyboard.status(b);
                let style = if status.is_set() {
                    status_style(status)
                } else {
                    key_style
                };
                spans.push(Span::styled(format!(" {} ", char::from(b)), style));
                spans.push(Span::raw(" "));
            }
            if i == KEYBOARD_ROWS.len() - 1 {
                spans.push(Span::styled(" DEL ", key_style));
            }
            [Line::from(spans), Line::default()]
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardState, area: Rect) {
    let widget = Paragraph::new(keyboard_lines(keyboard))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_messages<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.session.outcome().is_decided() {
        "n: New Game | q/Esc: Quit"
    } else {
        "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
