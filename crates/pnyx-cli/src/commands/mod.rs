// ABOUTME: Command implementations for the pnyx CLI
// ABOUTME: Submodules for the session and replay commands

pub mod replay;
pub mod session;

use pnyx_lib::{PolicyConfig, Result, Snapshot};

/// Load policies from the given path, or library defaults when absent
pub fn load_policies(path: Option<&str>) -> Result<PolicyConfig> {
    match path {
        Some(path) => PolicyConfig::from_file(path),
        None => Ok(PolicyConfig::default()),
    }
}

/// Render a snapshot the way the voting front-end displays it.
///
/// Treasury is shown as a zero-padded 6-digit figure; that is purely
/// presentation, the core reports a plain integer.
pub fn live_line(snapshot: &Snapshot) -> String {
    format!(
        "Live: Avg Rating: {}, Stones: {}, Treasury: {:06}",
        snapshot.avg_rating, snapshot.stones, snapshot.treasury
    )
}
