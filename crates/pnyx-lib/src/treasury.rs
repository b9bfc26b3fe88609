// ABOUTME: Per-domain treasury accounting depleted by stone placements
// ABOUTME: Defines DomainPolicy (initial balance, stone cost) and TreasuryAccount

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Funding rules for one domain.
///
/// The defaults mirror the whitepaper test party: a 500 000 pnyx genesis
/// treasury and a 50 000 pnyx stone cost. Both are overridable per domain
/// through [`crate::PolicyConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainPolicy {
    /// Treasury balance a domain starts with
    #[serde(default = "default_initial_balance")]
    pub initial_balance: i64,
    /// Amount each new stone deducts from the domain treasury
    #[serde(default = "default_stone_cost")]
    pub stone_cost: i64,
}

fn default_initial_balance() -> i64 {
    500_000
}

fn default_stone_cost() -> i64 {
    50_000
}

impl Default for DomainPolicy {
    fn default() -> Self {
        Self {
            initial_balance: default_initial_balance(),
            stone_cost: default_stone_cost(),
        }
    }
}

/// Shared balance for one domain.
///
/// The balance only moves down, by one stone cost per distinct stoning
/// event anywhere in the domain. No floor: the balance may go negative.
#[derive(Debug)]
pub struct TreasuryAccount {
    balance: Mutex<i64>,
}

impl TreasuryAccount {
    /// Open an account with the given starting balance
    pub fn new(initial_balance: i64) -> Self {
        Self {
            balance: Mutex::new(initial_balance),
        }
    }

    /// Atomically deduct `step` and return the new balance
    pub fn charge(&self, step: i64) -> i64 {
        let mut balance = self.balance.lock().expect("treasury lock poisoned");
        *balance -= step;
        *balance
    }

    /// Current balance
    pub fn balance(&self) -> i64 {
        *self.balance.lock().expect("treasury lock poisoned")
    }
}
