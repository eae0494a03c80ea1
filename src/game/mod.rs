//! Game state: board, keyboard, input and the session tying them together

mod board;
mod input;
mod keyboard;
mod session;
mod stats;

pub use board::{Board, Cell, Cursor, SubmitResult};
pub use input::{InputEvent, InputQueue, KeyClassifier, StandardKeys};
pub use keyboard::KeyboardState;
pub use session::{GameState, IgnoreReason, Outcome, Response, Session, SessionConfig};
pub use stats::Statistics;
