// ABOUTME: pnyx CLI entry point for the governance ledger
// ABOUTME: Provides subcommands: session, replay

mod commands;

use clap::{Parser, Subcommand};

/// pnyx CLI - Rate and stone governance proposals against a shared treasury
#[derive(Parser)]
#[command(name = "pnyx")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive voting session: submit, rate, and stone suggestions
    Session {
        /// Domain the session operates in
        #[arg(long, default_value = "PartyProgram")]
        domain: String,
        /// Path to a policy JSON file (initial balances, stone costs)
        #[arg(long)]
        config: Option<String>,
    },
    /// Apply a JSON file of actions against a fresh ledger
    Replay {
        /// Path to the actions file
        file: String,
        /// Path to a policy JSON file (initial balances, stone costs)
        #[arg(long)]
        config: Option<String>,
        /// Emit one JSON line per snapshot instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Session { domain, config } => {
            commands::session::run(&commands::session::SessionConfig {
                domain,
                policy_path: config,
                verbose: cli.verbose,
            })
        }
        Commands::Replay { file, config, json } => {
            commands::replay::run(&commands::replay::ReplayConfig {
                file,
                policy_path: config,
                json,
                verbose: cli.verbose,
            })
        }
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
