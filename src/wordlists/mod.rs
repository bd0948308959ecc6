//! Vocabulary for the game
//!
//! [`WordSource`] is both the pool secrets are drawn from and the dictionary
//! guesses are validated against.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use crate::error::{ConfigurationError, LoadError};
use rand::Rng;
use std::path::Path;

/// Origin label for the compiled-in list
pub const EMBEDDED: &str = "embedded";

/// A loaded, deduplicated, non-empty vocabulary
#[derive(Debug, Clone)]
pub struct WordSource {
    /// Sorted and deduplicated; never empty
    words: Vec<Word>,
    origin: String,
}

impl WordSource {
    /// Build a source from already-parsed words
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Empty` if `words` yields nothing.
    pub fn from_words(
        words: impl IntoIterator<Item = Word>,
        origin: impl Into<String>,
    ) -> Result<Self, LoadError> {
        let origin = origin.into();
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();

        if words.is_empty() {
            return Err(LoadError::Empty { origin });
        }

        tracing::debug!(count = words.len(), origin = %origin, "word list loaded");
        Ok(Self { words, origin })
    }

    /// The list compiled in from `data/words.txt`
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Empty` if the embedded list has no usable words.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_words(loader::words_from_slice(WORDS), EMBEDDED)
    }

    /// Load a newline-delimited list from disk
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if unreadable, `LoadError::Empty` if nothing
    /// survives filtering.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path)?;
        Self::from_words(words, path.display().to_string())
    }

    /// Resolve the `--wordlist` flag: `embedded` or a file path
    ///
    /// # Errors
    ///
    /// Propagates the underlying load failure.
    pub fn load(wordlist: &str) -> Result<Self, LoadError> {
        if wordlist == EMBEDDED {
            Self::embedded()
        } else {
            Self::from_file(wordlist)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Check vocabulary membership
    #[must_use]
    pub fn is_valid(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// Load-time check that the pool can support `max_changes` rotations
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::PoolTooSmall` when rotation is enabled
    /// but the pool has fewer than two words.
    pub fn ensure_rotatable(&self, max_changes: u32) -> Result<(), ConfigurationError> {
        if max_changes > 0 && self.words.len() < 2 {
            return Err(ConfigurationError::PoolTooSmall {
                size: self.words.len(),
                max_changes,
            });
        }
        Ok(())
    }

    /// Draw a word uniformly at random, never returning `exclude`
    ///
    /// Sampling skips over the excluded word's slot instead of retrying, so it
    /// terminates for every pool size.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::NoAlternative` if `exclude` is the only
    /// word in the pool.
    pub fn random_word<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        exclude: Option<&Word>,
    ) -> Result<&Word, ConfigurationError> {
        let excluded = exclude.and_then(|w| self.words.binary_search(w).ok());

        let index = match excluded {
            None => rng.random_range(0..self.words.len()),
            Some(_) if self.words.len() < 2 => {
                return Err(ConfigurationError::NoAlternative {
                    word: self.words[0].text().to_string(),
                });
            }
            Some(skip) => {
                let i = rng.random_range(0..self.words.len() - 1);
                if i >= skip { i + 1 } else { i }
            }
        };

        Ok(&self.words[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn source(words: &[&str]) -> WordSource {
        WordSource::from_words(loader::words_from_slice(words), "test").unwrap()
    }

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_alphabetic()),
                "Word '{word}' contains non-letters"
            );
        }
    }

    #[test]
    fn embedded_source_loads() {
        let source = WordSource::embedded().unwrap();
        assert_eq!(source.origin(), EMBEDDED);
        assert!(source.len() >= 2);
        assert!(source.is_valid(&Word::new("crane").unwrap()));
    }

    #[test]
    fn empty_list_is_load_error() {
        let err = WordSource::from_words(Vec::new(), "nothing").unwrap_err();
        assert!(matches!(err, LoadError::Empty { origin } if origin == "nothing"));
    }

    #[test]
    fn duplicates_collapse() {
        let source = source(&["crane", "CRANE", "toast"]);
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn membership_is_case_insensitive_via_word() {
        let source = source(&["crane", "toast"]);
        assert!(source.is_valid(&Word::new("Toast").unwrap()));
        assert!(!source.is_valid(&Word::new("slate").unwrap()));
    }

    #[test]
    fn singleton_pool_rejected_for_rotation() {
        let source = source(&["crane"]);
        assert_eq!(
            source.ensure_rotatable(3),
            Err(ConfigurationError::PoolTooSmall {
                size: 1,
                max_changes: 3
            })
        );
        assert!(source.ensure_rotatable(0).is_ok());
    }

    #[test]
    fn random_word_never_returns_excluded() {
        let source = source(&["crane", "toast", "slate"]);
        let mut rng = StdRng::seed_from_u64(7);

        for word in source.words() {
            for _ in 0..200 {
                let next = source.random_word(&mut rng, Some(word)).unwrap();
                assert_ne!(next, word);
            }
        }
    }

    #[test]
    fn random_word_covers_every_alternative() {
        let source = source(&["crane", "toast", "slate"]);
        let crane = Word::new("crane").unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(source.random_word(&mut rng, Some(&crane)).unwrap().clone());
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn random_word_singleton_with_exclusion_is_error() {
        let source = source(&["crane"]);
        let crane = Word::new("crane").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(source.random_word(&mut rng, None).is_ok());
        assert!(matches!(
            source.random_word(&mut rng, Some(&crane)),
            Err(ConfigurationError::NoAlternative { .. })
        ));
    }
}
