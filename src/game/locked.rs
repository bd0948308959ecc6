//! Columns the player has confirmed correct

use crate::core::WORD_LEN;

/// Set of board columns that have received a `Correct` mark this session
///
/// Survives word rotations; only [`reset`](Self::reset) clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockedPositions([bool; WORD_LEN]);

impl LockedPositions {
    /// Union `columns` into the set; out-of-range columns are ignored
    pub fn record_correct(&mut self, columns: impl IntoIterator<Item = usize>) {
        for col in columns {
            if let Some(slot) = self.0.get_mut(col) {
                *slot = true;
            }
        }
    }

    #[must_use]
    pub fn is_locked(&self, col: usize) -> bool {
        self.0.get(col).copied().unwrap_or(false)
    }

    pub fn reset(&mut self) {
        self.0 = [false; WORD_LEN];
    }

    /// Locked columns in ascending order
    #[must_use]
    pub fn columns(&self) -> Vec<usize> {
        (0..WORD_LEN).filter(|&c| self.0[c]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_union_and_idempotent() {
        let mut locked = LockedPositions::default();
        locked.record_correct([0, 2]);
        locked.record_correct([2, 4]);
        locked.record_correct([2]);

        assert_eq!(locked.columns(), vec![0, 2, 4]);
        assert!(locked.is_locked(2));
        assert!(!locked.is_locked(1));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut locked = LockedPositions::default();
        locked.record_correct([7]);
        assert!(locked.columns().is_empty());
        assert!(!locked.is_locked(7));
    }

    #[test]
    fn reset_clears_everything() {
        let mut locked = LockedPositions::default();
        locked.record_correct(0..WORD_LEN);
        locked.reset();
        assert_eq!(locked, LockedPositions::default());
    }
}
