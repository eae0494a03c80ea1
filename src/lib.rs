//! Wordle Game
//!
//! A terminal Wordle with duplicate-aware scoring, a ratatui TUI and a
//! line-based mode.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Word};
//!
//! let guess = Word::new("paper").unwrap();
//! let target = Word::new("apple").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &target);
//! assert_eq!(feedback.to_string(), "YYGY-");
//! ```

// Core domain types
pub mod core;

// Board, keyboard and session state machine
pub mod game;

// Word lists and target selection
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
