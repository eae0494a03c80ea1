//! Word representation
//!
//! A Word stores a validated, uppercase word of exactly [`COLS`] letters.

use super::{COLS, LetterCounter};
use std::fmt;
use thiserror::Error;

/// A fixed-length word over the A-Z alphabet
///
/// The text is normalized to uppercase on construction, so `apple`, `Apple`
/// and `APPLE` are the same word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; COLS],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {COLS} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly [`COLS`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("apple").unwrap();
    /// assert_eq!(word.text(), "APPLE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_uppercase();

        if text.len() != COLS {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; COLS];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Build a word from board letters
    ///
    /// Letters are expected to be uppercase A-Z already; anything else is
    /// rejected the same way [`Word::new`] would reject it.
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not an uppercase letter.
    pub fn from_letters(letters: [u8; COLS]) -> Result<Self, WordError> {
        if !letters.iter().all(u8::is_ascii_uppercase) {
            return Err(WordError::InvalidCharacters);
        }

        let text = letters.iter().map(|&b| char::from(b)).collect();
        Ok(Self {
            text,
            chars: letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; COLS] {
        &self.chars
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= [`COLS`]
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Occurrence count of every letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounter {
        LetterCounter::from_word(self)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("APPLE").unwrap();
        assert_eq!(word.text(), "APPLE");
        assert_eq!(word.chars(), b"APPLE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("feast").unwrap();
        assert_eq!(word.text(), "FEAST");

        let word2 = Word::new("FeAsT").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crané"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_from_letters() {
        let word = Word::from_letters(*b"PAPER").unwrap();
        assert_eq!(word.text(), "PAPER");
        assert_eq!(word, Word::new("paper").unwrap());

        assert!(Word::from_letters(*b"pa\0er").is_err());
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("beast").unwrap();
        assert_eq!(word.char_at(0), b'B');
        assert_eq!(word.char_at(4), b'T');
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("apple").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.remaining(b'P'), 2);
        assert_eq!(counts.remaining(b'A'), 1);
        assert_eq!(counts.remaining(b'Z'), 0);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "games".parse().unwrap();
        assert_eq!(format!("{word}"), "GAMES");
    }

    #[test]
    fn word_error_messages() {
        assert_eq!(
            WordError::InvalidLength(3).to_string(),
            "Word must be exactly 5 letters, got 3"
        );
    }
}
