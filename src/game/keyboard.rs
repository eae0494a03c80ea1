//! Best-known status of every letter across all guesses

use crate::core::{ALPHABET_LEN, Feedback, LetterStatus, Word};

/// Letter to status map for A-Z
///
/// Each letter only ever moves up the precedence order
/// `Correct > Present > Absent > Unset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    statuses: [LetterStatus; ALPHABET_LEN],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the map
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterStatus, Word};
    /// use wordle_game::game::KeyboardState;
    ///
    /// let target = Word::new("apple").unwrap();
    /// let guess = Word::new("paper").unwrap();
    /// let mut keyboard = KeyboardState::new();
    /// keyboard.apply(&guess, &Feedback::calculate(&guess, &target));
    ///
    /// // P is misplaced at position 0 but exact at position 2
    /// assert_eq!(keyboard.status(b'P'), LetterStatus::Correct);
    /// assert_eq!(keyboard.status(b'R'), LetterStatus::Absent);
    /// ```
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &candidate) in guess.chars().iter().zip(feedback.statuses()) {
            if let Some(slot) = Self::index(letter).map(|i| &mut self.statuses[i]) {
                *slot = slot.upgrade(candidate);
            }
        }
    }

    /// Status of an uppercase letter; `Unset` for anything outside A-Z
    #[must_use]
    pub fn status(&self, letter: u8) -> LetterStatus {
        Self::index(letter).map_or(LetterStatus::Unset, |i| self.statuses[i])
    }

    /// `(letter, status)` pairs from A to Z
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        (b'A'..=b'Z').zip(self.statuses.iter().copied())
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_uppercase()
            .then(|| usize::from(letter - b'A'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn apply(keyboard: &mut KeyboardState, guess: &str, target: &str) {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        keyboard.apply(&guess, &Feedback::calculate(&guess, &target));
    }

    #[test]
    fn fresh_keyboard_is_unset() {
        let keyboard = KeyboardState::new();
        assert!(keyboard.iter().all(|(_, s)| s == LetterStatus::Unset));
        assert_eq!(keyboard.iter().count(), ALPHABET_LEN);
    }

    #[test]
    fn apply_sets_each_status() {
        let mut keyboard = KeyboardState::new();
        apply(&mut keyboard, "beast", "feast");

        assert_eq!(keyboard.status(b'B'), LetterStatus::Absent);
        assert_eq!(keyboard.status(b'E'), LetterStatus::Correct);
        assert_eq!(keyboard.status(b'T'), LetterStatus::Correct);
        assert_eq!(keyboard.status(b'F'), LetterStatus::Unset);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keyboard = KeyboardState::new();
        apply(&mut keyboard, "apple", "apple");
        apply(&mut keyboard, "paste", "apple");
        apply(&mut keyboard, "games", "tower");

        assert_eq!(keyboard.status(b'A'), LetterStatus::Correct);
        assert_eq!(keyboard.status(b'P'), LetterStatus::Correct);
        assert_eq!(keyboard.status(b'E'), LetterStatus::Correct);
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut keyboard = KeyboardState::new();
        apply(&mut keyboard, "paint", "apple");
        assert_eq!(keyboard.status(b'A'), LetterStatus::Present);

        apply(&mut keyboard, "apple", "apple");
        assert_eq!(keyboard.status(b'A'), LetterStatus::Correct);
    }

    #[test]
    fn non_letters_are_unset() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.status(b'a'), LetterStatus::Unset);
        assert_eq!(keyboard.status(b'1'), LetterStatus::Unset);
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        "[A-F]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn applying_twice_is_idempotent(guess in word_strategy(), target in word_strategy()) {
            let feedback = Feedback::calculate(&guess, &target);
            let mut keyboard = KeyboardState::new();
            keyboard.apply(&guess, &feedback);
            let once = keyboard.clone();
            keyboard.apply(&guess, &feedback);
            prop_assert_eq!(keyboard, once);
        }

        #[test]
        fn statuses_are_monotonic(
            target in word_strategy(),
            guesses in proptest::collection::vec(word_strategy(), 1..8),
        ) {
            let mut keyboard = KeyboardState::new();
            for guess in guesses {
                let before = keyboard.clone();
                keyboard.apply(&guess, &Feedback::calculate(&guess, &target));
                for ((_, old), (_, new)) in before.iter().zip(keyboard.iter()) {
                    prop_assert!(new >= old);
                }
            }
        }
    }
}
