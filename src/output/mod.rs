//! Terminal output formatting
//!
//! Colored tiles, keyboard and statistics for the line-based front end.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_score_result, print_statistics};
