//! Engine input/output vocabulary
//!
//! Presentation layers push [`Key`]s in and drain [`GameEvent`]s out; the
//! engine never touches rendering state directly.

use super::timer::Urgency;
use crate::core::{Feedback, Word};

/// The three input primitives the engine accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Backspace,
    Enter,
}

/// Why a session was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    RowsExhausted,
    TimeExpired,
}

/// Terminal outcome of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionResult {
    Win { attempts: usize },
    Loss { reason: LossReason },
}

impl SessionResult {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win { .. })
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingStart,
    InProgress,
    Won,
    LostRowsExhausted,
    LostTimeExpired,
}

impl Phase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(
            self,
            Self::Won | Self::LostRowsExhausted | Self::LostTimeExpired
        )
    }
}

/// Notifications for the presentation layer, in emission order
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A board slot changed; `None` means it was cleared
    TileChanged {
        row: usize,
        col: usize,
        letter: Option<char>,
    },
    /// Feedback for a row, on submission or re-evaluation after rotation
    FeedbackReady {
        row: usize,
        guess: Word,
        feedback: Feedback,
    },
    /// Keyboard colours must be recomputed from `Game::keyboard_marks`
    KeyboardColorsInvalidated,
    /// A submitted guess was not in the vocabulary; time was deducted
    GuessRejected { guess: String, penalty: f64 },
    /// The secret changed
    WordRotated {
        change_count: u32,
        max_changes: u32,
        /// Columns whose letter changed and may be shown shifting
        changed_columns: Vec<usize>,
        /// Locked columns, which must not be perturbed
        locked_columns: Vec<usize>,
    },
    FinalCountdownStarted { seconds: u32 },
    SessionEnded { result: SessionResult, secret: Word },
    TimerTick { remaining_seconds: u32, urgency: Urgency },
}
