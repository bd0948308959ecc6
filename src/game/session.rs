//! Game session state machine
//!
//! ```text
//! AwaitingStart -> InProgress -> { Won, LostRowsExhausted, LostTimeExpired }
//! ```
//!
//! [`Game`] owns the secret word, the board, the guess history and the
//! rotation timer. It is advanced only by key input and timer ticks, both
//! delivered serially by a presentation layer, and reports everything that
//! changed through an event outbox.

use super::config::GameConfig;
use super::events::{GameEvent, Key, LossReason, Phase, SessionResult};
use super::locked::LockedPositions;
use super::timer::{RotationTimer, TimerEvent, TimerHandle, Urgency};
use crate::core::{Feedback, KeyboardMarks, WORD_LEN, Word};
use crate::error::ConfigurationError;
use crate::stats::{Stats, StatsLedger};
use crate::wordlists::WordSource;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// One board row: each slot empty or an uppercase letter
pub type Row = [Option<char>; WORD_LEN];

/// Result of pressing Enter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitOutcome {
    /// No session in progress
    Ignored,
    /// Fewer than five letters typed
    Incomplete,
    /// Not in the word list; `penalty` seconds were deducted
    InvalidWord { penalty: f64 },
    /// Scored, and the game continues on the next row
    Accepted { feedback: Feedback },
    /// Scored, and the game is over
    Ended {
        feedback: Feedback,
        result: SessionResult,
    },
}

/// A single game session and the stats it reports into
pub struct Game {
    config: GameConfig,
    words: WordSource,
    ledger: StatsLedger,
    rng: StdRng,
    phase: Phase,
    secret: Option<Word>,
    board: Vec<Row>,
    row: usize,
    col: usize,
    guesses: Vec<Word>,
    feedback: Vec<Feedback>,
    locked: LockedPositions,
    timer: RotationTimer,
    handle: Option<TimerHandle>,
    generation: u64,
    result: Option<SessionResult>,
    events: Vec<GameEvent>,
}

impl Game {
    #[must_use]
    pub fn new(words: WordSource, config: GameConfig, ledger: StatsLedger) -> Self {
        let timer = RotationTimer::new(&config);
        let board = vec![[None; WORD_LEN]; config.max_rows];
        Self {
            config,
            words,
            ledger,
            rng: StdRng::from_os_rng(),
            phase: Phase::AwaitingStart,
            secret: None,
            board,
            row: 0,
            col: 0,
            guesses: Vec::new(),
            feedback: Vec::new(),
            locked: LockedPositions::default(),
            timer,
            handle: None,
            generation: 0,
            result: None,
            events: Vec::new(),
        }
    }

    /// Use a deterministic RNG for secret selection and rotation
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Start a fresh session with a random secret
    ///
    /// Any running session is abandoned without touching stats, and its timer
    /// handle is invalidated before new state is installed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the word pool cannot support the
    /// configured number of rotations.
    pub fn start(&mut self) -> Result<(), ConfigurationError> {
        self.cancel_timer();
        self.words.ensure_rotatable(self.config.max_word_changes)?;
        let secret = self.words.random_word(&mut self.rng, None)?.clone();
        self.begin(secret);
        Ok(())
    }

    /// Start a fresh session with a chosen secret
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the pool cannot support rotation or
    /// `secret` is not in the pool.
    pub fn start_with_secret(&mut self, secret: Word) -> Result<(), ConfigurationError> {
        self.cancel_timer();
        self.words.ensure_rotatable(self.config.max_word_changes)?;
        if !self.words.is_valid(&secret) {
            return Err(ConfigurationError::SecretNotInPool {
                word: secret.text().to_string(),
            });
        }
        self.begin(secret);
        Ok(())
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.handle.take() {
            tracing::debug!(
                generation = handle.generation(),
                "abandoning session in progress"
            );
        }
    }

    fn begin(&mut self, secret: Word) {
        self.generation += 1;
        tracing::info!(generation = self.generation, "session started");
        tracing::debug!(secret = %secret, "secret chosen");

        self.secret = Some(secret);
        self.board = vec![[None; WORD_LEN]; self.config.max_rows];
        self.row = 0;
        self.col = 0;
        self.guesses.clear();
        self.feedback.clear();
        self.locked.reset();
        self.timer.reset();
        self.result = None;
        self.events.clear();
        self.phase = Phase::InProgress;
        self.handle = Some(TimerHandle::new(self.generation));

        self.events.push(GameEvent::KeyboardColorsInvalidated);
        self.emit_timer();
    }

    /// Route one of the three input primitives
    ///
    /// Returns the submit outcome for `Enter`, `None` otherwise.
    pub fn handle_key(&mut self, key: Key) -> Option<SubmitOutcome> {
        match key {
            Key::Letter(ch) => {
                self.input_letter(ch);
                None
            }
            Key::Backspace => {
                self.backspace();
                None
            }
            Key::Enter => Some(self.submit_guess()),
        }
    }

    /// Type a letter into the current row
    ///
    /// Returns false, changing nothing, for non-letters, a full row, or when
    /// no session is in progress.
    pub fn input_letter(&mut self, ch: char) -> bool {
        if self.phase != Phase::InProgress || self.col >= WORD_LEN || !ch.is_ascii_alphabetic() {
            return false;
        }

        let letter = ch.to_ascii_uppercase();
        self.board[self.row][self.col] = Some(letter);
        self.events.push(GameEvent::TileChanged {
            row: self.row,
            col: self.col,
            letter: Some(letter),
        });
        self.col += 1;
        true
    }

    /// Remove the last typed letter of the current row
    pub fn backspace(&mut self) -> bool {
        if self.phase != Phase::InProgress || self.col == 0 {
            return false;
        }

        self.col -= 1;
        self.board[self.row][self.col] = None;
        self.events.push(GameEvent::TileChanged {
            row: self.row,
            col: self.col,
            letter: None,
        });
        true
    }

    /// Score the current row against the secret
    pub fn submit_guess(&mut self) -> SubmitOutcome {
        if self.phase != Phase::InProgress {
            return SubmitOutcome::Ignored;
        }
        if self.col < WORD_LEN {
            return SubmitOutcome::Incomplete;
        }

        let text: String = self.board[self.row].iter().flatten().collect();
        let Ok(guess) = Word::new(&text) else {
            return SubmitOutcome::Incomplete;
        };

        if !self.words.is_valid(&guess) {
            let penalty = self.config.time_penalty;
            self.timer.penalize(penalty);
            tracing::debug!(guess = %guess, penalty, "guess not in word list");
            self.events.push(GameEvent::GuessRejected {
                guess: text,
                penalty,
            });
            self.emit_timer();
            return SubmitOutcome::InvalidWord { penalty };
        }

        let Some(secret) = self.secret.as_ref() else {
            return SubmitOutcome::Ignored;
        };
        let feedback = Feedback::evaluate(secret, &guess);

        self.locked.record_correct(feedback.correct_columns());
        self.guesses.push(guess.clone());
        self.feedback.push(feedback);
        self.events.push(GameEvent::FeedbackReady {
            row: self.row,
            guess,
            feedback,
        });
        self.events.push(GameEvent::KeyboardColorsInvalidated);

        if feedback.is_solved() {
            let result = SessionResult::Win {
                attempts: self.row + 1,
            };
            self.finish(result);
            return SubmitOutcome::Ended { feedback, result };
        }

        self.row += 1;
        self.col = 0;

        if self.row >= self.config.max_rows {
            let result = SessionResult::Loss {
                reason: LossReason::RowsExhausted,
            };
            self.finish(result);
            return SubmitOutcome::Ended { feedback, result };
        }

        SubmitOutcome::Accepted { feedback }
    }

    /// Advance the rotation timer by `delta` seconds
    ///
    /// Ignored unless `handle` is the live handle of a session in progress.
    pub fn tick(&mut self, handle: TimerHandle, delta: f64) {
        if self.phase != Phase::InProgress || self.handle != Some(handle) {
            tracing::trace!(generation = handle.generation(), "dropping stale tick");
            return;
        }

        match self.timer.tick(delta) {
            None => {}
            Some(TimerEvent::Rotate { change_count }) => self.rotate(change_count),
            Some(TimerEvent::FinalCountdown { change_count }) => {
                tracing::info!(change_count, "final countdown started");
                self.events.push(GameEvent::FinalCountdownStarted {
                    seconds: self.timer.display_seconds(),
                });
            }
            Some(TimerEvent::Expired) => {
                self.emit_timer();
                self.finish(SessionResult::Loss {
                    reason: LossReason::TimeExpired,
                });
                return;
            }
        }

        self.emit_timer();
    }

    fn rotate(&mut self, change_count: u32) {
        let Some(old) = self.secret.clone() else {
            return;
        };
        let new = match self.words.random_word(&mut self.rng, Some(&old)) {
            Ok(word) => word.clone(),
            Err(e) => {
                tracing::error!(error = %e, "rotation skipped");
                return;
            }
        };

        let changed_columns = old
            .differing_columns(&new)
            .into_iter()
            .filter(|&col| !self.locked.is_locked(col))
            .collect();

        tracing::info!(
            change_count,
            max_changes = self.timer.max_changes(),
            "secret word rotated"
        );
        self.events.push(GameEvent::WordRotated {
            change_count,
            max_changes: self.timer.max_changes(),
            changed_columns,
            locked_columns: self.locked.columns(),
        });

        let refreshed: Vec<Feedback> = self
            .guesses
            .iter()
            .map(|guess| Feedback::evaluate(&new, guess))
            .collect();
        for (row, feedback) in refreshed.into_iter().enumerate() {
            self.feedback[row] = feedback;
            self.events.push(GameEvent::FeedbackReady {
                row,
                guess: self.guesses[row].clone(),
                feedback,
            });
        }
        self.events.push(GameEvent::KeyboardColorsInvalidated);
        self.secret = Some(new);
    }

    fn finish(&mut self, result: SessionResult) {
        self.phase = match result {
            SessionResult::Win { .. } => Phase::Won,
            SessionResult::Loss {
                reason: LossReason::RowsExhausted,
            } => Phase::LostRowsExhausted,
            SessionResult::Loss {
                reason: LossReason::TimeExpired,
            } => Phase::LostTimeExpired,
        };
        self.handle = None;
        self.result = Some(result);

        let stats = if result.is_win() {
            self.ledger.record_win()
        } else {
            self.ledger.record_loss()
        };
        tracing::info!(
            ?result,
            wins = stats.wins,
            streak = stats.streak,
            "session ended"
        );

        if let Some(secret) = self.secret.clone() {
            self.events.push(GameEvent::SessionEnded { result, secret });
        }
    }

    fn emit_timer(&mut self) {
        self.events.push(GameEvent::TimerTick {
            remaining_seconds: self.timer.display_seconds(),
            urgency: self.timer.urgency(),
        });
    }

    /// Take every event emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn result(&self) -> Option<SessionResult> {
        self.result
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn words(&self) -> &WordSource {
        &self.words
    }

    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.ledger.current()
    }

    /// Live tick handle, `None` when no session is running
    #[must_use]
    pub const fn timer_handle(&self) -> Option<TimerHandle> {
        self.handle
    }

    /// Cursor as (row, column)
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    #[must_use]
    pub fn board(&self) -> &[Row] {
        &self.board
    }

    /// Submitted guesses with their feedback against the current secret
    pub fn history(&self) -> impl Iterator<Item = (&Word, &Feedback)> {
        self.guesses.iter().zip(self.feedback.iter())
    }

    #[must_use]
    pub fn keyboard_marks(&self) -> KeyboardMarks {
        KeyboardMarks::from_rows(self.history())
    }

    #[must_use]
    pub fn locked_columns(&self) -> Vec<usize> {
        self.locked.columns()
    }

    #[must_use]
    pub const fn remaining_time(&self) -> f64 {
        self.timer.remaining()
    }

    #[must_use]
    pub fn display_seconds(&self) -> u32 {
        self.timer.display_seconds()
    }

    #[must_use]
    pub fn urgency(&self) -> Urgency {
        self.timer.urgency()
    }

    #[must_use]
    pub const fn word_change_count(&self) -> u32 {
        self.timer.change_count()
    }

    #[must_use]
    pub const fn max_word_changes(&self) -> u32 {
        self.timer.max_changes()
    }

    #[must_use]
    pub const fn is_final_countdown(&self) -> bool {
        self.timer.is_final_countdown()
    }

    /// The secret, once the session is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        if self.phase.is_over() {
            self.secret.as_ref()
        } else {
            None
        }
    }
}
