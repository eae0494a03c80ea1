//! Core domain types for the game
//!
//! Words, letter statuses and guess scoring. Pure, no I/O, no game state.

mod feedback;
mod frequency;
mod status;
mod word;

pub use feedback::Feedback;
pub use frequency::LetterCounter;
pub use status::LetterStatus;
pub use word::{Word, WordError};

/// Number of guesses per game
pub const ROWS: usize = 6;

/// Letters per word
pub const COLS: usize = 5;

/// Size of the A-Z alphabet
pub const ALPHABET_LEN: usize = 26;
