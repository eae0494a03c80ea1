//! Target word providers
//!
//! A [`WordSource`] picks the hidden word for each session and answers
//! whether a guess is a known word.

use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Error type for word source construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("word list is empty")]
    Empty,
}

/// Supplies targets and a dictionary check
pub trait WordSource {
    /// Choose the target for a new session
    fn pick_target(&mut self) -> Word;

    /// Whether `word` is in this source's dictionary
    fn contains(&self, word: &Word) -> bool;
}

/// Uniform random choice from a fixed list
pub struct RandomWordSource {
    words: Vec<Word>,
    known: FxHashSet<Word>,
    rng: StdRng,
}

impl RandomWordSource {
    /// Build a source seeded from the OS
    ///
    /// # Errors
    /// Returns `SourceError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, SourceError> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Build a source with a deterministic sequence of targets
    ///
    /// # Errors
    /// Returns `SourceError::Empty` if `words` is empty.
    pub fn with_seed(words: Vec<Word>, seed: u64) -> Result<Self, SourceError> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<Word>, rng: StdRng) -> Result<Self, SourceError> {
        if words.is_empty() {
            return Err(SourceError::Empty);
        }

        let known = words.iter().cloned().collect();
        Ok(Self { words, known, rng })
    }
}

impl WordSource for RandomWordSource {
    fn pick_target(&mut self) -> Word {
        // Construction guarantees a non-empty list
        let index = self.rng.random_range(0..self.words.len());
        self.words[index].clone()
    }

    fn contains(&self, word: &Word) -> bool {
        self.known.contains(word)
    }
}

/// Cycles through a list in order
///
/// Handy for tests and scripted games where the target must be known.
#[derive(Debug, Clone)]
pub struct FixedWordSource {
    words: Vec<Word>,
    next: usize,
}

impl FixedWordSource {
    /// # Errors
    /// Returns `SourceError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, SourceError> {
        if words.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(Self { words, next: 0 })
    }

    /// Source that always returns `word`
    #[must_use]
    pub fn single(word: Word) -> Self {
        Self {
            words: vec![word],
            next: 0,
        }
    }
}

impl WordSource for FixedWordSource {
    fn pick_target(&mut self) -> Word {
        let word = self.words[self.next].clone();
        self.next = (self.next + 1) % self.words.len();
        word
    }

    fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}
