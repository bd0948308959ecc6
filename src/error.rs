//! Error types shared across the engine
//!
//! - `LoadError`: word list unreachable or empty, fatal to session start
//! - `ConfigurationError`: word pool too small to support rotation
//! - `PersistenceError`: stats could not be read or written, never fatal
//!
//! Rejected guesses are not errors: they surface as
//! [`SubmitOutcome::InvalidWord`](crate::game::SubmitOutcome::InvalidWord).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a usable vocabulary
#[derive(Error, Debug)]
pub enum LoadError {
    /// The word list file could not be read
    #[error("failed to read word list {path}: {source}")]
    Io {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Nothing survived filtering to 5-letter words
    #[error("word list {origin} contains no 5-letter words")]
    Empty {
        /// Human-readable origin of the list (path or "embedded")
        origin: String,
    },
}

/// The configured vocabulary cannot support the configured game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Rotation needs at least two distinct words to choose between
    #[error(
        "word pool has {size} word(s) but {max_changes} rotation(s) are configured; \
         at least 2 words are required"
    )]
    PoolTooSmall {
        /// Number of words in the pool
        size: usize,
        /// Configured rotation budget
        max_changes: u32,
    },

    /// A fixed secret was requested that the player could never type
    #[error("secret word {word} is not in the word list")]
    SecretNotInPool {
        /// The requested secret
        word: String,
    },

    /// Asked for a word other than the only word in the pool
    #[error("cannot pick a word other than {word}: it is the only word in the pool")]
    NoAlternative {
        /// The sole word in the pool
        word: String,
    },
}

/// Stats could not be loaded or saved
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("stats storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("stats serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No platform data directory could be resolved
    #[error("no data directory available for stats")]
    NoDataDir,
}
