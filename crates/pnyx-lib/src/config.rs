// ABOUTME: Policy configuration for domain treasuries
// ABOUTME: Maps domain names to DomainPolicy with a default fallback, loadable from JSON

use crate::{DomainPolicy, PnyxError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for per-domain funding policies.
///
/// Domains without an explicit entry fall back to `default`, which itself
/// falls back to [`DomainPolicy::default`] when the file omits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfig {
    /// Policy applied to domains without an explicit entry
    #[serde(default)]
    pub default: DomainPolicy,
    /// Named per-domain overrides
    #[serde(default)]
    pub domains: HashMap<String, DomainPolicy>,
}

impl PolicyConfig {
    /// Load policy config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse policy config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(PnyxError::from)
    }

    /// Effective policy for a domain, validated for use.
    ///
    /// A non-positive stone cost cannot fund the treasury invariant and is
    /// rejected with [`PnyxError::InvalidPolicy`].
    pub fn policy_for(&self, domain: &str) -> Result<DomainPolicy> {
        let policy = self.domains.get(domain).copied().unwrap_or(self.default);
        if policy.stone_cost <= 0 {
            return Err(PnyxError::InvalidPolicy(format!(
                "stone cost for domain '{domain}' must be positive, got {}",
                policy.stone_cost
            )));
        }
        Ok(policy)
    }
}
