//! Game engine
//!
//! A [`Game`] is driven by two inputs, key presses and timer ticks, and
//! reports every visible change as a [`GameEvent`].

pub mod config;
mod events;
mod locked;
mod session;
mod timer;

pub use config::GameConfig;
pub use events::{GameEvent, Key, LossReason, Phase, SessionResult};
pub use locked::LockedPositions;
pub use session::{Game, Row, SubmitOutcome};
pub use timer::{RotationTimer, TimerEvent, TimerHandle, Urgency};
