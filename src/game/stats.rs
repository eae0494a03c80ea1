//! Running totals across games in one process

use super::Outcome;
use crate::core::ROWS;

/// Games played, games won and how many guesses each win took
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n - 1` counts wins in `n` guesses
    pub guess_distribution: [usize; ROWS],
}

impl Statistics {
    /// Count a finished game; undecided outcomes are ignored
    pub fn record(&mut self, outcome: Outcome, guesses: usize) {
        match outcome {
            Outcome::Undecided => {}
            Outcome::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = guesses
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot += 1;
                }
            }
            Outcome::Lost => self.total_games += 1,
        }
    }

    /// Win percentage, 0 when no games were played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
