// ABOUTME: Per-proposal stone tracking with idempotent placement
// ABOUTME: Counts distinct voters who placed a binding commitment token

use std::collections::HashSet;

/// Outcome of a stone placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StonePlacement {
    /// True only the first time this voter stones this proposal
    pub is_new: bool,
    /// Total distinct stoners after the call
    pub total: u64,
}

/// Per-proposal stone state.
///
/// A voter may place at most one stone per proposal; repeat placements are
/// idempotent. Stones are never removed.
#[derive(Debug, Default, Clone)]
pub struct StoneLedger {
    voters: HashSet<String>,
}

impl StoneLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the voter's stone, reporting whether it is a new placement
    pub fn set_stone(&mut self, voter: &str) -> StonePlacement {
        let is_new = self.voters.insert(voter.to_string());
        StonePlacement {
            is_new,
            total: self.voters.len() as u64,
        }
    }

    /// Number of distinct voters who placed a stone
    pub fn count(&self) -> u64 {
        self.voters.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_stone_is_new() {
        let mut ledger = StoneLedger::new();
        let placement = ledger.set_stone("ada");
        assert!(placement.is_new);
        assert_eq!(placement.total, 1);
    }

    #[test]
    fn test_repeat_stone_is_idempotent() {
        let mut ledger = StoneLedger::new();
        ledger.set_stone("ada");
        let repeat = ledger.set_stone("ada");
        assert!(!repeat.is_new);
        assert_eq!(repeat.total, 1);
        assert_eq!(ledger.count(), 1);
    }

    #[test]
    fn test_distinct_voters_accumulate() {
        let mut ledger = StoneLedger::new();
        ledger.set_stone("ada");
        ledger.set_stone("bob");
        let third = ledger.set_stone("cyd");
        assert!(third.is_new);
        assert_eq!(third.total, 3);
    }
}
