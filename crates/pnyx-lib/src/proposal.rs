// ABOUTME: Proposal identity and per-proposal record types
// ABOUTME: Defines ProposalKey, ProposalRecord, and the Snapshot returned by operations

use crate::rating::RatingAggregator;
use crate::stones::StoneLedger;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Composite identity of one proposal: a suggestion under an issue under a
/// domain. Proposals are created implicitly on first touch and never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProposalKey {
    pub domain: String,
    pub issue: String,
    pub suggestion: String,
}

impl ProposalKey {
    pub fn new(
        domain: impl Into<String>,
        issue: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            issue: issue.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// Mutable per-proposal state: the rating aggregator, the stone ledger, and
/// activity timestamps.
#[derive(Debug)]
pub struct ProposalRecord {
    pub ratings: RatingAggregator,
    pub stones: StoneLedger,
    /// When the proposal was first touched
    pub created_at: DateTime<Utc>,
    /// Updated on every rate or stone placement
    pub last_activity_at: DateTime<Utc>,
}

impl ProposalRecord {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            ratings: RatingAggregator::new(),
            stones: StoneLedger::new(),
            created_at: now,
            last_activity_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }
}

impl Default for ProposalRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Consistent view of one proposal as of the moment an operation applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Rounded mean rating of the proposal
    pub avg_rating: i32,
    /// Distinct voters who stoned the proposal
    pub stones: u64,
    /// The domain's treasury balance
    pub treasury: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_equality_is_structural() {
        let a = ProposalKey::new("PartyProgram", "Transport", "More bike lanes");
        let b = ProposalKey::new("PartyProgram", "Transport", "More bike lanes");
        let c = ProposalKey::new("PartyProgram", "Transport", "Congestion charge");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = ProposalRecord::new();
        assert_eq!(record.ratings.mean(), 0);
        assert_eq!(record.stones.count(), 0);
        assert_eq!(record.created_at, record.last_activity_at);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snapshot = Snapshot {
            avg_rating: 2,
            stones: 3,
            treasury: 350_000,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"avgRating":2,"stones":3,"treasury":350000}"#);
    }
}
