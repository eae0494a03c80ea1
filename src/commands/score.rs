//! Score a single guess against a chosen target

use crate::core::{Feedback, Word, WordError};

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target` without playing a game
///
/// # Errors
///
/// Returns `WordError` if either argument is not a valid word.
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let feedback = Feedback::calculate(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}
