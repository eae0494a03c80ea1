//! Display functions for the line-based front end

use super::formatters::{
    colored_tile, create_progress_bar, keyboard_to_colored, row_to_colored,
};
use crate::core::{Feedback, Word};
use crate::game::{Board, KeyboardState, Statistics};
use colored::Colorize;

/// Print every row of the board, typed or not
pub fn print_board(board: &Board) {
    println!();
    for row in board.rows() {
        println!("  {}", row_to_colored(row));
    }
    println!();
}

/// Print the colored on-screen keyboard
pub fn print_keyboard(keyboard: &KeyboardState) {
    for line in keyboard_to_colored(keyboard) {
        println!("  {line}");
    }
    println!();
}

/// Print the feedback for a single guess against a target
pub fn print_score_result(guess: &Word, target: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().bright_white().bold(),
        target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let tiles: String = guess
        .chars()
        .iter()
        .zip(feedback.statuses())
        .map(|(&b, &s)| colored_tile(Some(b), s).to_string())
        .collect();

    println!("\n  {tiles}");
    println!("  {}  ({feedback})", feedback.to_emoji());
    println!(
        "\n  Correct: {}  Present: {}",
        feedback.count_correct().to_string().green().bold(),
        feedback.count_present().to_string().yellow().bold()
    );
}

/// Print win rate and guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!(
        "   Played: {}   Won: {}   Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max as f64, 20);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
    println!();
}
