//! Wordshift
//!
//! A timed Wordle variant: the secret word is replaced on a timer, a fixed
//! number of times, while letters already placed correctly stay locked.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordshift::core::Word;
//! use wordshift::game::{Game, GameConfig, Key};
//! use wordshift::stats::StatsLedger;
//! use wordshift::wordlists::WordSource;
//!
//! let words = WordSource::embedded().unwrap();
//! let mut game = Game::new(words, GameConfig::default(), StatsLedger::in_memory());
//! game.start_with_secret(Word::new("crane").unwrap()).unwrap();
//!
//! for c in "toast".chars() {
//!     game.handle_key(Key::Letter(c));
//! }
//! println!("{:?}", game.handle_key(Key::Enter));
//!
//! // Advance the clock; the word rotates after 60 seconds
//! if let Some(handle) = game.timer_handle() {
//!     game.tick(handle, 60.0);
//! }
//! for event in game.drain_events() {
//!     println!("{event:?}");
//! }
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Game engine
pub mod game;

// Win/streak persistence
pub mod stats;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
