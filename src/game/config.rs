//! Tunable game constants

/// Seconds between secret word rotations
pub const WORD_CHANGE_INTERVAL: f64 = 60.0;
/// Seconds removed from the clock for a guess that is not a word
pub const TIME_PENALTY: f64 = 5.0;
/// Timer expiries before the final countdown starts
pub const MAX_WORD_CHANGES: u32 = 3;
/// Length of the final countdown
pub const FINAL_COUNTDOWN: f64 = 60.0;
/// Granularity of timer ticks
pub const TICK_INTERVAL: f64 = 0.1;
/// Rows on the board
pub const MAX_ROWS: usize = 6;
/// Remaining seconds at or below which the timer shows as a warning
pub const WARNING_THRESHOLD: f64 = 20.0;
/// Remaining seconds at or below which the timer shows as critical
pub const CRITICAL_THRESHOLD: f64 = 10.0;

/// Configuration for one game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub rotation_interval: f64,
    pub final_countdown: f64,
    pub time_penalty: f64,
    pub max_word_changes: u32,
    pub tick_interval: f64,
    pub max_rows: usize,
    pub warning_threshold: f64,
    pub critical_threshold: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rotation_interval: WORD_CHANGE_INTERVAL,
            final_countdown: FINAL_COUNTDOWN,
            time_penalty: TIME_PENALTY,
            max_word_changes: MAX_WORD_CHANGES,
            tick_interval: TICK_INTERVAL,
            max_rows: MAX_ROWS,
            warning_threshold: WARNING_THRESHOLD,
            critical_threshold: CRITICAL_THRESHOLD,
        }
    }
}

impl GameConfig {
    /// Tick interval as a `Duration`, for drivers that schedule ticks
    #[must_use]
    pub fn tick_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(self.tick_interval.max(0.001))
    }
}
