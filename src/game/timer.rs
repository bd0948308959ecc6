//! Rotation countdown
//!
//! ```text
//! Counting --expiry--> Rotating --> Counting
//! Counting --expiry, budget spent--> FinalCountdown --expiry--> Terminated
//! ```
//!
//! The timer is a pure state machine over seconds; it never reads a clock.
//! Whoever drives the session measures elapsed time and feeds it to
//! [`RotationTimer::tick`].

use super::config::GameConfig;

/// Float drift from repeated 0.1 s steps must not delay expiry by a tick
const EXPIRY_EPSILON: f64 = 1e-6;

/// What a tick crossing zero asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Swap the secret word; the clock has been reset to the rotation interval
    Rotate { change_count: u32 },
    /// Rotation budget exhausted; the clock now runs the final countdown
    FinalCountdown { change_count: u32 },
    /// The final countdown ran out
    Expired,
}

/// Display classification of the remaining time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Normal,
    Warning,
    Critical,
}

/// Identifies the one live tick schedule of a session
///
/// A new handle is issued on every `start`; ticks delivered under any other
/// handle are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub(crate) const fn new(generation: u64) -> Self {
        Self(generation)
    }

    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Countdown that drives word rotation and the final countdown
#[derive(Debug, Clone, PartialEq)]
pub struct RotationTimer {
    rotation_interval: f64,
    final_duration: f64,
    max_changes: u32,
    warning_threshold: f64,
    critical_threshold: f64,
    remaining: f64,
    change_count: u32,
    final_countdown: bool,
    terminated: bool,
}

impl RotationTimer {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rotation_interval: config.rotation_interval,
            final_duration: config.final_countdown,
            max_changes: config.max_word_changes,
            warning_threshold: config.warning_threshold,
            critical_threshold: config.critical_threshold,
            remaining: config.rotation_interval.max(0.0),
            change_count: 0,
            final_countdown: false,
            terminated: false,
        }
    }

    /// Back to a full rotation interval with the budget restored
    pub fn reset(&mut self) {
        self.remaining = self.rotation_interval.max(0.0);
        self.change_count = 0;
        self.final_countdown = false;
        self.terminated = false;
    }

    /// Advance by `delta` seconds
    ///
    /// At most one expiry is handled per call; any overshoot beyond zero is
    /// discarded when the clock is reset.
    pub fn tick(&mut self, delta: f64) -> Option<TimerEvent> {
        if self.terminated {
            return None;
        }

        self.remaining = (self.remaining - delta.max(0.0)).max(0.0);
        if self.remaining > EXPIRY_EPSILON {
            return None;
        }

        if self.final_countdown {
            self.remaining = 0.0;
            self.terminated = true;
            return Some(TimerEvent::Expired);
        }

        if self.change_count < self.max_changes {
            self.change_count += 1;
        }

        if self.change_count >= self.max_changes {
            self.final_countdown = true;
            self.remaining = self.final_duration.max(0.0);
            Some(TimerEvent::FinalCountdown {
                change_count: self.change_count,
            })
        } else {
            self.remaining = self.rotation_interval.max(0.0);
            Some(TimerEvent::Rotate {
                change_count: self.change_count,
            })
        }
    }

    /// Remove `seconds` from the clock, clamped at zero
    ///
    /// Expiry is not processed here; the next tick picks it up.
    pub fn penalize(&mut self, seconds: f64) {
        self.remaining = (self.remaining - seconds.max(0.0)).max(0.0);
    }

    #[must_use]
    pub const fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Whole seconds for display, rounded up
    #[must_use]
    pub fn display_seconds(&self) -> u32 {
        self.remaining.ceil() as u32
    }

    #[must_use]
    pub fn urgency(&self) -> Urgency {
        if self.remaining <= self.critical_threshold {
            Urgency::Critical
        } else if self.remaining <= self.warning_threshold {
            Urgency::Warning
        } else {
            Urgency::Normal
        }
    }

    #[must_use]
    pub const fn change_count(&self) -> u32 {
        self.change_count
    }

    #[must_use]
    pub const fn max_changes(&self) -> u32 {
        self.max_changes
    }

    #[must_use]
    pub const fn is_final_countdown(&self) -> bool {
        self.final_countdown
    }
}
