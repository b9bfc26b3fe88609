// ABOUTME: 'pnyx replay' command implementation
// ABOUTME: Applies a JSON actions file against a fresh ledger and prints snapshots

use super::{live_line, load_policies};
use pnyx_lib::{ProposalStore, Result, Snapshot};
use serde::Deserialize;
use serde_json::json;
use std::fs;

/// Configuration for replay command
pub struct ReplayConfig {
    pub file: String,
    pub policy_path: Option<String>,
    pub json: bool,
    pub verbose: bool,
}

/// One ledger operation in an actions file
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Action {
    Submit {
        domain: String,
        issue: String,
        suggestion: String,
        voter: String,
    },
    Rate {
        domain: String,
        issue: String,
        suggestion: String,
        voter: String,
        rating: i32,
    },
    Stone {
        domain: String,
        issue: String,
        suggestion: String,
        voter: String,
    },
}

impl Action {
    fn domain_and_issue(&self) -> (&str, &str) {
        match self {
            Action::Submit { domain, issue, .. }
            | Action::Rate { domain, issue, .. }
            | Action::Stone { domain, issue, .. } => (domain, issue),
        }
    }
}

/// An actions file: a list of operations applied in order
#[derive(Debug, Deserialize)]
pub struct Script {
    pub actions: Vec<Action>,
}

/// Replay an actions file and print one snapshot per action, then the
/// rankings of every issue the script touched.
pub fn run(config: &ReplayConfig) -> Result<()> {
    let script: Script = serde_json::from_str(&fs::read_to_string(&config.file)?)?;
    let store = ProposalStore::new(load_policies(config.policy_path.as_deref())?);

    if config.verbose {
        println!("Replaying {} actions from {}", script.actions.len(), config.file);
    }

    let mut issues_touched: Vec<(String, String)> = Vec::new();
    for action in &script.actions {
        let snapshot = apply(&store, action)?;
        let (domain, issue) = action.domain_and_issue();
        let touched = (domain.to_string(), issue.to_string());
        if !issues_touched.contains(&touched) {
            issues_touched.push(touched);
        }

        if config.json {
            println!("{}", serde_json::to_string(&snapshot)?);
        } else {
            println!("{}", live_line(&snapshot));
        }
    }

    for (domain, issue) in &issues_touched {
        let ranked = store.rank_suggestions(domain, issue);
        if config.json {
            let line = json!({ "domain": domain, "issue": issue, "ranking": ranked });
            println!("{line}");
        } else {
            println!("📋 Ranking for {domain}/{issue}");
            for (place, entry) in ranked.iter().enumerate() {
                println!(
                    "  {}. {} (score {}, stones {}, ratings {})",
                    place + 1,
                    entry.suggestion,
                    entry.score,
                    entry.stones,
                    entry.rating_count
                );
            }
        }
    }

    Ok(())
}

fn apply(store: &ProposalStore, action: &Action) -> Result<Snapshot> {
    match action {
        Action::Submit {
            domain,
            issue,
            suggestion,
            voter,
        } => store.submit(domain, issue, suggestion, voter),
        Action::Rate {
            domain,
            issue,
            suggestion,
            voter,
            rating,
        } => store.rate(domain, issue, suggestion, voter, *rating),
        Action::Stone {
            domain,
            issue,
            suggestion,
            voter,
        } => store.set_stone(domain, issue, suggestion, voter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_parsing() {
        let json = r#"{
            "actions": [
                { "op": "submit", "domain": "d", "issue": "i", "suggestion": "s", "voter": "ada" },
                { "op": "rate", "domain": "d", "issue": "i", "suggestion": "s", "voter": "ada", "rating": 3 },
                { "op": "stone", "domain": "d", "issue": "i", "suggestion": "s", "voter": "ada" }
            ]
        }"#;
        let script: Script = serde_json::from_str(json).unwrap();
        assert_eq!(script.actions.len(), 3);
        assert!(matches!(script.actions[1], Action::Rate { rating: 3, .. }));
    }

    #[test]
    fn test_unknown_op_rejected() {
        let json = r#"{ "actions": [ { "op": "retract", "domain": "d", "issue": "i", "suggestion": "s", "voter": "ada" } ] }"#;
        assert!(serde_json::from_str::<Script>(json).is_err());
    }
}
