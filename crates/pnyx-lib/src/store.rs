// ABOUTME: The proposal store orchestrating ratings, stones, and treasuries
// ABOUTME: Owns all per-proposal records and per-domain accounts behind locks

use crate::proposal::{ProposalKey, ProposalRecord, Snapshot};
use crate::ranking::{self, ScoredSuggestion};
use crate::rating::{RATING_MAX, RATING_MIN};
use crate::treasury::TreasuryAccount;
use crate::{PnyxError, PolicyConfig, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

/// Shared, mutable ledger of all proposals and domain treasuries.
///
/// The store is the only mutation path. Each proposal's state lives behind
/// its own mutex, so operations on different proposals never contend; the
/// maps themselves are only write-locked long enough to insert a missing
/// record. Callers own the store explicitly (no global instance) and share
/// it via `Arc` when operating concurrently.
#[derive(Debug)]
pub struct ProposalStore {
    config: PolicyConfig,
    proposals: RwLock<HashMap<ProposalKey, Arc<Mutex<ProposalRecord>>>>,
    treasuries: RwLock<HashMap<String, Arc<TreasuryAccount>>>,
}

impl ProposalStore {
    /// Create an empty store with the given funding policies
    pub fn new(config: PolicyConfig) -> Self {
        Self {
            config,
            proposals: RwLock::new(HashMap::new()),
            treasuries: RwLock::new(HashMap::new()),
        }
    }

    /// Create an empty store with default policies for every domain
    pub fn with_defaults() -> Self {
        Self::new(PolicyConfig::default())
    }

    /// Register a proposal without rating or stoning it.
    ///
    /// Upsert only: a repeat submit of an existing proposal changes nothing.
    /// The snapshot reflects whatever activity the proposal already has.
    pub fn submit(&self, domain: &str, issue: &str, suggestion: &str, voter: &str) -> Result<Snapshot> {
        validate_identifiers(domain, issue, suggestion, voter)?;
        let policy = self.config.policy_for(domain)?;

        let record = self.record(ProposalKey::new(domain, issue, suggestion));
        let (avg_rating, stones) = {
            let record = record.lock().expect("proposal lock poisoned");
            (record.ratings.mean(), record.stones.count())
        };
        let treasury = self.treasury(domain, policy.initial_balance).balance();

        Ok(Snapshot {
            avg_rating,
            stones,
            treasury,
        })
    }

    /// Insert or replace the voter's rating on a proposal.
    ///
    /// Fails with [`PnyxError::InvalidRating`] for values outside [-5, 5]
    /// without touching any state.
    pub fn rate(
        &self,
        domain: &str,
        issue: &str,
        suggestion: &str,
        voter: &str,
        rating: i32,
    ) -> Result<Snapshot> {
        validate_identifiers(domain, issue, suggestion, voter)?;
        // Reject before the upsert so a failed rate leaves no record behind.
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return Err(PnyxError::InvalidRating { value: rating });
        }
        let policy = self.config.policy_for(domain)?;

        let record = self.record(ProposalKey::new(domain, issue, suggestion));
        let (avg_rating, stones) = {
            let mut record = record.lock().expect("proposal lock poisoned");
            let mean = record.ratings.rate(voter, rating)?;
            record.touch();
            (mean, record.stones.count())
        };
        let treasury = self.treasury(domain, policy.initial_balance).balance();

        Ok(Snapshot {
            avg_rating,
            stones,
            treasury,
        })
    }

    /// Place the voter's stone on a proposal.
    ///
    /// The first stone from a voter charges the domain treasury one stone
    /// cost; repeats are idempotent and leave the treasury untouched. The
    /// proposal lock is released before the treasury is charged; the
    /// returned balance always reflects this call's own charge.
    pub fn set_stone(&self, domain: &str, issue: &str, suggestion: &str, voter: &str) -> Result<Snapshot> {
        validate_identifiers(domain, issue, suggestion, voter)?;
        let policy = self.config.policy_for(domain)?;

        let record = self.record(ProposalKey::new(domain, issue, suggestion));
        let (avg_rating, placement) = {
            let mut record = record.lock().expect("proposal lock poisoned");
            let placement = record.stones.set_stone(voter);
            if placement.is_new {
                record.touch();
            }
            (record.ratings.mean(), placement)
        };

        let account = self.treasury(domain, policy.initial_balance);
        let treasury = if placement.is_new {
            account.charge(policy.stone_cost)
        } else {
            account.balance()
        };

        Ok(Snapshot {
            avg_rating,
            stones: placement.total,
            treasury,
        })
    }

    /// Current treasury balance of a domain, creating its account if needed
    pub fn treasury_balance(&self, domain: &str) -> Result<i64> {
        if domain.trim().is_empty() {
            return Err(PnyxError::InvalidIdentifier { field: "domain" });
        }
        let policy = self.config.policy_for(domain)?;
        Ok(self.treasury(domain, policy.initial_balance).balance())
    }

    /// Rank an issue's suggestions by consensus score (sum of ratings)
    /// descending, ties broken by stone count. Unknown issues rank empty.
    pub fn rank_suggestions(&self, domain: &str, issue: &str) -> Vec<ScoredSuggestion> {
        ranking::rank_by_score(self.collect_scores(domain, issue))
    }

    /// The issue's consensus winner, or `None` while nothing is rated
    pub fn consensus_winner(&self, domain: &str, issue: &str) -> Option<ScoredSuggestion> {
        ranking::consensus_winner(self.collect_scores(domain, issue))
    }

    fn collect_scores(&self, domain: &str, issue: &str) -> Vec<ScoredSuggestion> {
        let proposals = self.proposals.read().expect("proposal map poisoned");
        let mut scored: Vec<ScoredSuggestion> = proposals
            .iter()
            .filter(|(key, _)| key.domain == domain && key.issue == issue)
            .map(|(key, record)| {
                let record = record.lock().expect("proposal lock poisoned");
                ScoredSuggestion {
                    suggestion: key.suggestion.clone(),
                    score: record.ratings.total(),
                    stones: record.stones.count(),
                    rating_count: record.ratings.len(),
                }
            })
            .collect();
        // Map iteration order is arbitrary; fix it before the stable rank.
        scored.sort_by(|a, b| a.suggestion.cmp(&b.suggestion));
        scored
    }

    /// Fetch or create the record for a key. Lock-then-check-then-create:
    /// concurrent first touches converge on a single record.
    fn record(&self, key: ProposalKey) -> Arc<Mutex<ProposalRecord>> {
        {
            let proposals = self.proposals.read().expect("proposal map poisoned");
            if let Some(record) = proposals.get(&key) {
                return Arc::clone(record);
            }
        }
        let mut proposals = self.proposals.write().expect("proposal map poisoned");
        Arc::clone(proposals.entry(key).or_default())
    }

    /// Fetch or create a domain's treasury account, funded with the
    /// policy's initial balance on first touch.
    fn treasury(&self, domain: &str, initial_balance: i64) -> Arc<TreasuryAccount> {
        {
            let treasuries = self.treasuries.read().expect("treasury map poisoned");
            if let Some(account) = treasuries.get(domain) {
                return Arc::clone(account);
            }
        }
        let mut treasuries = self.treasuries.write().expect("treasury map poisoned");
        Arc::clone(
            treasuries
                .entry(domain.to_string())
                .or_insert_with(|| Arc::new(TreasuryAccount::new(initial_balance))),
        )
    }
}

fn validate_identifiers(domain: &str, issue: &str, suggestion: &str, voter: &str) -> Result<()> {
    for (field, value) in [
        ("domain", domain),
        ("issue", issue),
        ("suggestion", suggestion),
        ("voter", voter),
    ] {
        if value.trim().is_empty() {
            return Err(PnyxError::InvalidIdentifier { field });
        }
    }
    Ok(())
}
