//! Guess scoring and its per-position feedback
//!
//! Feedback for a guess is one [`LetterStatus`] per position:
//! - `Correct` = letter in the right position
//! - `Present` = letter in the target, elsewhere, with an unclaimed occurrence left
//! - `Absent` = no unclaimed occurrence left

use super::{COLS, LetterStatus, Word};
use std::fmt;

/// Scored feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; COLS]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterStatus::Correct; COLS]);

    /// Score `guess` against `target`
    ///
    /// Duplicate letters are handled the Wordle way.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches as correct and remove them from the
    ///    target's letter pool
    /// 2. Second pass, left to right: mark remaining letters present while the
    ///    pool still holds an occurrence, absent otherwise
    ///
    /// Exact matches claim their occurrence first, so an earlier misplaced copy
    /// can never take credit away from a later exact match.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterStatus, Word};
    ///
    /// let guess = Word::new("paper").unwrap();
    /// let target = Word::new("apple").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.status_at(2), LetterStatus::Correct);
    /// assert_eq!(feedback.status_at(4), LetterStatus::Absent);
    /// assert_eq!(feedback.count_correct(), 1);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterStatus::Absent; COLS];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = LetterStatus::Correct;
                available.take(g);
            }
        }

        // Second pass: misplaced letters from what is left of the pool
        for (status, &letter) in result.iter_mut().zip(guess.chars()) {
            if *status != LetterStatus::Correct && available.take(letter) {
                *status = LetterStatus::Present;
            }
        }

        Self(result)
    }

    /// Status sequence in position order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; COLS] {
        &self.0
    }

    /// Status at a position
    ///
    /// # Panics
    /// Panics if position >= [`COLS`]
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Number of positions scored correct
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterStatus::Correct)
    }

    /// Number of positions scored present
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Render as emoji squares, e.g. "🟨🟨🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.code())?;
        }
        Ok(())
    }
}

/// Parse feedback from a string like "YYGY-" or "🟨🟨🟩🟨⬜"
///
/// Accepts:
/// - 'G'/'g'/🟩 for correct
/// - 'Y'/'y'/🟨 for present
/// - '-'/'_'/⬜ for absent
impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != COLS {
            return Err(format!("Invalid feedback string: {s}"));
        }

        let mut statuses = [LetterStatus::Unset; COLS];
        for (slot, ch) in statuses.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterStatus::Correct,
                'Y' | 'y' | '🟨' => LetterStatus::Present,
                '-' | '_' | '⬜' => LetterStatus::Absent,
                _ => return Err(format!("Invalid feedback string: {s}")),
            };
        }

        Ok(Self(statuses))
    }
}
