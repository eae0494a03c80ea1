//! Remaining-occurrence counter for duplicate-aware scoring

use super::Word;
use rustc_hash::FxHashMap;

/// Multiset of the letters of a target word that have not been claimed yet
///
/// Built fresh for every evaluation; scoring consumes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounter {
    counts: FxHashMap<u8, u8>,
}

impl LetterCounter {
    /// Count every letter of `word`
    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        let mut counts = FxHashMap::default();
        for &ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `letter` still available
    #[inline]
    #[must_use]
    pub fn remaining(&self, letter: u8) -> u8 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Claim one occurrence of `letter`
    ///
    /// Returns `false`, leaving the counter untouched, when none is left.
    pub fn take(&mut self, letter: u8) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}
