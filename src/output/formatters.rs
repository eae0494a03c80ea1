//! Formatting utilities for terminal output

use crate::core::LetterStatus;
use crate::game::{Cell, KeyboardState};
use colored::{ColoredString, Colorize};

/// On-screen keyboard, QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A letter tile colored by its status
#[must_use]
pub fn colored_tile(letter: Option<u8>, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", letter.map_or(' ', char::from));
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
        LetterStatus::Unset => text.bold(),
    }
}

/// One board row as colored tiles
#[must_use]
pub fn row_to_colored(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|cell| colored_tile(cell.letter, cell.status).to_string())
        .collect()
}

/// Keyboard rows with each key colored by its best-known status
#[must_use]
pub fn keyboard_to_colored(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .bytes()
                .map(|b| colored_tile(Some(b), keyboard.status(b)).to_string())
                .collect();
            // Stagger rows like a physical keyboard
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
