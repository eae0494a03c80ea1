//! Per-letter status and its precedence order

use std::fmt;

/// What is known about a letter at a position, or on the keyboard
///
/// Variants are declared in ascending precedence so the derived `Ord` gives
/// `Correct > Present > Absent > Unset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Not scored yet
    #[default]
    Unset,
    /// No unclaimed occurrence left in the target
    Absent,
    /// In the target, but at another position
    Present,
    /// In the target at this exact position
    Correct,
}

impl LetterStatus {
    /// Whether this status has been assigned by scoring
    #[inline]
    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Return the higher-precedence of the two statuses
    #[inline]
    #[must_use]
    pub fn upgrade(self, candidate: Self) -> Self {
        self.max(candidate)
    }

    /// Single-character code: `G`, `Y`, `-`, or `.` for unset
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
            Self::Unset => '.',
        }
    }

    /// Emoji square for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Unset => '⬛',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unset => "unset",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_order() {
        assert!(LetterStatus::Correct > LetterStatus::Present);
        assert!(LetterStatus::Present > LetterStatus::Absent);
        assert!(LetterStatus::Absent > LetterStatus::Unset);
    }

    #[test]
    fn upgrade_never_downgrades() {
        assert_eq!(
            LetterStatus::Correct.upgrade(LetterStatus::Absent),
            LetterStatus::Correct
        );
        assert_eq!(
            LetterStatus::Absent.upgrade(LetterStatus::Present),
            LetterStatus::Present
        );
        assert_eq!(
            LetterStatus::Unset.upgrade(LetterStatus::Unset),
            LetterStatus::Unset
        );
    }

    #[test]
    fn default_is_unset() {
        assert_eq!(LetterStatus::default(), LetterStatus::Unset);
        assert!(!LetterStatus::Unset.is_set());
        assert!(LetterStatus::Absent.is_set());
    }
}
