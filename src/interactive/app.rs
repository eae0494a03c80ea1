//! TUI application state and logic

use crate::core::ROWS;
use crate::game::{
    GameState, IgnoreReason, InputQueue, Outcome, Response, Session, Statistics, SubmitResult,
};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<W: WordSource> {
    pub session: Session<W>,
    pub input: InputQueue,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Key name the session's classifier understands, if any
#[must_use]
pub fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Enter => Some("Enter".to_string()),
        KeyCode::Backspace => Some("Backspace".to_string()),
        KeyCode::Char(c) => Some(c.to_string()),
        _ => None,
    }
}

impl<W: WordSource> App<W> {
    #[must_use]
    pub fn new(session: Session<W>) -> Self {
        Self {
            session,
            input: InputQueue::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden word in six tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Backspace to delete, Enter to submit.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n' | 'N') if self.session.outcome().is_decided() => {
                self.new_game();
            }
            KeyCode::Char('q' | 'Q') if self.session.outcome().is_decided() => {
                self.should_quit = true;
            }
            code => {
                if let Some(name) = key_name(code) {
                    self.input.push(name);
                }
                self.process_input();
            }
        }
    }

    /// Drain queued keys into the session and react to each response
    pub fn process_input(&mut self) {
        for response in self.session.drain(&mut self.input) {
            self.handle_response(response);
        }
    }

    fn handle_response(&mut self, response: Response) {
        match response {
            Response::LetterPlaced | Response::LetterDeleted => {}
            Response::Scored(result) => self.handle_scored(&result),
            Response::Ignored(IgnoreReason::RowIncomplete) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Response::Ignored(IgnoreReason::UnknownWord) => {
                self.add_message("Not in word list", MessageStyle::Error);
            }
            Response::Ignored(IgnoreReason::GameOver) => {
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Response::Ignored(reason) => debug!("input ignored: {reason:?}"),
        }
    }

    fn handle_scored(&mut self, result: &SubmitResult) {
        match self.session.outcome() {
            Outcome::Won => {
                let guess_count = result.next_row;
                self.stats.record(Outcome::Won, guess_count);

                let celebration = match guess_count {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };

                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::Lost => {
                self.stats.record(Outcome::Lost, ROWS);
                let target = self
                    .session
                    .target()
                    .map(|t| t.text().to_string())
                    .unwrap_or_default();
                self.add_message(&format!("The word was {target}"), MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::Undecided => {
                self.add_message(
                    &format!(
                        "{} {}  ({} left)",
                        result.guess,
                        result.feedback.to_emoji(),
                        ROWS - result.next_row
                    ),
                    MessageStyle::Info,
                );
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.input = InputQueue::new();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.session.state()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource>(app: App<W>) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, W: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<W>,
) -> Result<Statistics> {
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

    Ok(app.stats)
}
