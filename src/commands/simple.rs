//! Simple line-based game mode
//!
//! Text-based game without TUI: each line is one guess.

use crate::core::{COLS, Word, WordError};
use crate::game::{IgnoreReason, InputQueue, Outcome, Response, Session, Statistics};
use crate::output::{print_board, print_keyboard, print_statistics};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use log::debug;
use std::io::{self, Write};

/// What the player typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewGame,
    Guess(String),
}

impl Command {
    /// Parse one input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewGame,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Feed a whole guess through the session's key handling
///
/// A guess that is not a valid word never reaches the board. On rejection
/// the typed letters are removed again so the next line starts on an empty
/// row. Returns the final response.
pub fn play_guess<W: WordSource>(session: &mut Session<W>, guess: &str) -> Response {
    let word = match Word::new(guess) {
        Ok(word) => word,
        Err(e) => {
            debug!("guess {guess:?} rejected: {e}");
            return Response::Ignored(malformed_reason(&e));
        }
    };

    let mut queue = InputQueue::new();
    queue.push_word(word.text());
    let response = session
        .drain(&mut queue)
        .pop()
        .unwrap_or(Response::Ignored(IgnoreReason::InvalidKey));

    if response.is_ignored() {
        for _ in 0..COLS {
            queue.push("Backspace");
        }
        session.drain(&mut queue);
    }

    response
}

fn malformed_reason(error: &WordError) -> IgnoreReason {
    match error {
        WordError::InvalidLength(len) if *len < COLS => IgnoreReason::RowIncomplete,
        WordError::InvalidLength(_) => IgnoreReason::RowFull,
        WordError::NonAscii | WordError::InvalidCharacters => IgnoreReason::InvalidKey,
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<W: WordSource>(session: &mut Session<W>) -> Result<Statistics> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden {COLS}-letter word. After each guess:");
    println!("  - {} letter is in the right spot", " G ".black().on_green());
    println!("  - {} letter is in the word, elsewhere", " Y ".black().on_yellow());
    println!("  - {} letter is not in the word\n", " - ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut stats = Statistics::default();

    loop {
        print_board(session.board());
        print_keyboard(session.keyboard());

        let Some(input) = get_user_input(&format!("Guess {}", session.guesses_used() + 1))? else {
            return Ok(stats);
        };

        match Command::parse(&input) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(stats);
            }
            Command::NewGame => {
                session.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            Command::Guess(guess) => {
                if let Err(e) = Word::new(guess.as_str()) {
                    println!("❌ {e}\n");
                    continue;
                }

                match play_guess(session, &guess) {
                    Response::Ignored(IgnoreReason::UnknownWord) => {
                        println!("❌ '{}' is not in the word list\n", guess.to_uppercase());
                        continue;
                    }
                    Response::Ignored(reason) => {
                        debug!("guess {guess:?} ignored: {reason:?}");
                        continue;
                    }
                    _ => {}
                }
            }
        }

        if session.outcome().is_decided() {
            print_board(session.board());
            announce(session);
            stats.record(session.outcome(), session.guesses_used());
            print_statistics(&stats);

            match get_user_input("Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session.reset();
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(stats);
                }
            }
        }
    }
}

fn announce<W: WordSource>(session: &Session<W>) {
    let target = session
        .target()
        .map(|t| t.text().to_string())
        .unwrap_or_default();

    match session.outcome() {
        Outcome::Won => {
            let turn = session.guesses_used();
            println!("{}", "═".repeat(60).bright_cyan());
            println!(
                "  {} Solved {} in {} {}",
                "🎉".bright_green(),
                target.bright_yellow().bold(),
                turn.to_string().bright_cyan().bold(),
                if turn == 1 { "guess" } else { "guesses" }
            );
            println!("{}", "═".repeat(60).bright_cyan());
        }
        Outcome::Lost => {
            println!("{}", "═".repeat(60).red());
            println!("  Out of guesses. The word was {}", target.bright_yellow().bold());
            println!("{}", "═".repeat(60).red());
        }
        Outcome::Undecided => {}
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
