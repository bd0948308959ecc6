//! Core domain types for the game
//!
//! Pure value types: words and the feedback computed between them.
//! Nothing here knows about timers, sessions or storage.

mod feedback;
mod word;

pub use feedback::{Feedback, KEYBOARD_ROWS, KeyboardMarks, Mark};
pub use word::{WORD_LEN, Word, WordError};
