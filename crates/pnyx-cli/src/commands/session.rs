// ABOUTME: 'pnyx session' command implementation
// ABOUTME: Interactive front-end prompting for voter, issue, suggestion, rating, and stone

use super::{live_line, load_policies};
use pnyx_lib::{PnyxError, ProposalStore, Result};
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

/// Configuration for session command
pub struct SessionConfig {
    pub domain: String,
    pub policy_path: Option<String>,
    pub verbose: bool,
}

/// Run an interactive voting session against a fresh ledger.
///
/// Each round submits a suggestion, asks for a rating, and optionally
/// places a stone. The session ends on EOF or an empty voter name, then
/// prints the rankings of every issue touched.
pub fn run(config: &SessionConfig) -> Result<()> {
    let store = ProposalStore::new(load_policies(config.policy_path.as_deref())?);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    if config.verbose {
        println!("Session in domain '{}'", config.domain);
    }

    let mut issues_touched: BTreeSet<String> = BTreeSet::new();

    loop {
        let Some(voter) = prompt(&mut input, "Voter: ")? else {
            break;
        };
        let Some(issue) = prompt(&mut input, "Issue: ")? else {
            break;
        };
        let Some(suggestion) = prompt(&mut input, "Suggestion: ")? else {
            break;
        };

        println!("Submitting: {suggestion} in {}/{issue} by {voter}", config.domain);
        let snapshot = store.submit(&config.domain, &issue, &suggestion, &voter)?;
        println!("{}", live_line(&snapshot));
        issues_touched.insert(issue.clone());

        loop {
            let Some(raw) = prompt(&mut input, "Rate (-5 to +5): ")? else {
                return finish(&store, &config.domain, &issues_touched);
            };
            let Ok(rating) = raw.parse::<i32>() else {
                eprintln!("❌ Not a number: {raw}");
                continue;
            };
            match store.rate(&config.domain, &issue, &suggestion, &voter, rating) {
                Ok(snapshot) => {
                    println!("{voter} rates {suggestion} with {rating}");
                    println!("{}", live_line(&snapshot));
                    break;
                }
                Err(e @ PnyxError::InvalidRating { .. }) => {
                    eprintln!("❌ {e}");
                }
                Err(e) => return Err(e),
            }
        }

        let Some(answer) = prompt(&mut input, "Place stone? [y/N]: ")? else {
            break;
        };
        if answer.eq_ignore_ascii_case("y") {
            println!("{voter} sets stone on {suggestion}");
            let snapshot = store.set_stone(&config.domain, &issue, &suggestion, &voter)?;
            println!("{}", live_line(&snapshot));
        }
    }

    finish(&store, &config.domain, &issues_touched)
}

/// Print a prompt and read one trimmed line. `None` on EOF or empty input.
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    let line = line.trim().to_string();
    if line.is_empty() {
        return Ok(None);
    }
    Ok(Some(line))
}

fn finish(store: &ProposalStore, domain: &str, issues: &BTreeSet<String>) -> Result<()> {
    for issue in issues {
        let ranked = store.rank_suggestions(domain, issue);
        if ranked.is_empty() {
            continue;
        }
        println!("\n📋 Ranking for {domain}/{issue}");
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
        if let Some(winner) = store.consensus_winner(domain, issue) {
            println!("  🏆 Consensus winner: {}", winner.suggestion);
        }
    }
    Ok(())
}
