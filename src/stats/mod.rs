//! Win/streak bookkeeping that outlives individual sessions

mod store;

pub use store::{JsonFileStore, MemoryStore, STATS_KEY, StatsStore, file_or_memory};

use serde::{Deserialize, Serialize};

/// Persisted win counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub wins: u32,
    pub streak: u32,
}

/// In-memory stats plus the store they are written through
///
/// Every mutation is saved immediately. A failed save is logged and the
/// in-memory value stays authoritative, so gameplay never depends on storage.
pub struct StatsLedger {
    stats: Stats,
    store: Box<dyn StatsStore>,
}

impl StatsLedger {
    /// Read the stored stats, falling back to zeroes if absent or unreadable
    #[must_use]
    pub fn load(store: Box<dyn StatsStore>) -> Self {
        let stats = match store.load() {
            Ok(Some(stats)) => stats,
            Ok(None) => Stats::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load stats, starting from zero");
                Stats::default()
            }
        };
        tracing::debug!(wins = stats.wins, streak = stats.streak, "stats loaded");
        Self { stats, store }
    }

    /// A ledger backed by a fresh [`MemoryStore`]
    #[must_use]
    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryStore::default()))
    }

    #[must_use]
    pub const fn current(&self) -> Stats {
        self.stats
    }

    pub fn record_win(&mut self) -> Stats {
        self.stats.wins = self.stats.wins.saturating_add(1);
        self.stats.streak = self.stats.streak.saturating_add(1);
        self.persist();
        self.stats
    }

    pub fn record_loss(&mut self) -> Stats {
        self.stats.streak = 0;
        self.persist();
        self.stats
    }

    /// Zero both counters
    pub fn reset(&mut self) -> Stats {
        self.stats = Stats::default();
        self.persist();
        self.stats
    }

    fn persist(&self) {
        match self.store.save(&self.stats) {
            Ok(()) => tracing::debug!(
                wins = self.stats.wins,
                streak = self.stats.streak,
                "stats saved"
            ),
            Err(e) => tracing::warn!(error = %e, "failed to save stats"),
        }
    }
}

impl std::fmt::Debug for StatsLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsLedger")
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
