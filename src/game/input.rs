//! Classified input events and the queue that feeds them to a session

use std::collections::VecDeque;

/// A key the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Uppercase A-Z
    Letter(u8),
    Delete,
    Enter,
}

/// Turns raw key names into [`InputEvent`]s
///
/// Returns `None` for keys the game does not accept.
pub trait KeyClassifier {
    fn classify(&self, raw: &str) -> Option<InputEvent>;
}

/// Accepts `"Enter"`, `"Backspace"` and single ASCII letters in either case
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardKeys;

impl KeyClassifier for StandardKeys {
    fn classify(&self, raw: &str) -> Option<InputEvent> {
        match raw {
            "Enter" => Some(InputEvent::Enter),
            "Backspace" => Some(InputEvent::Delete),
            _ => match raw.as_bytes() {
                [b] if b.is_ascii_alphabetic() => {
                    Some(InputEvent::Letter(b.to_ascii_uppercase()))
                }
                _ => None,
            },
        }
    }
}

/// FIFO of raw keys waiting to be processed
///
/// Front ends push keys as they arrive; [`Session::drain`](super::Session::drain)
/// consumes them one at a time.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    keys: VecDeque<String>,
}

impl InputQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, raw: impl Into<String>) {
        self.keys.push_back(raw.into());
    }

    /// Queue every letter of `text` followed by `Enter`
    pub fn push_word(&mut self, text: &str) {
        for ch in text.chars() {
            self.push(ch.to_string());
        }
        self.push("Enter");
    }

    pub fn pop(&mut self) -> Option<String> {
        self.keys.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
