// ABOUTME: Core library for the pnyx governance ledger
// ABOUTME: Proposals accumulate ratings and stones; stones deplete domain treasuries

pub mod config;
pub mod error;
pub mod proposal;
pub mod ranking;
pub mod rating;
pub mod stones;
pub mod store;
pub mod treasury;

pub use config::PolicyConfig;
pub use error::PnyxError;
pub use proposal::{ProposalKey, ProposalRecord, Snapshot};
pub use ranking::ScoredSuggestion;
pub use rating::{RatingAggregator, RATING_MAX, RATING_MIN};
pub use stones::{StoneLedger, StonePlacement};
pub use store::ProposalStore;
pub use treasury::{DomainPolicy, TreasuryAccount};

/// Result type alias using [`PnyxError`]
pub type Result<T> = std::result::Result<T, PnyxError>;
