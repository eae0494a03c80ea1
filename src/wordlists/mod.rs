//! Word lists and target selection
//!
//! Provides the embedded target list, file loading and the [`WordSource`]
//! implementations a session draws its targets from.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
pub use source::{FixedWordSource, RandomWordSource, SourceError, WordSource};
