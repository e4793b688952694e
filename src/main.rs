//! Vigil - Background Command-Polling Agent
//!
//! Main entry point: wires explicit file paths, loads configuration, and
//! starts the polling loop. A missing or malformed configuration is fatal
//! and journaled before the loop is ever entered.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vigil::store::Journal;
use vigil::{Agent, AgentPaths, Config};

/// Vigil - Background Command-Polling Agent
#[derive(Parser, Debug)]
#[command(name = "vigil")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding config.json, activity.log, and commands_run.txt
    #[arg(long, short = 'd', default_value = ".")]
    dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let paths = AgentPaths::new(&args.dir);
    let journal = Journal::new(paths.journal_file());

    let config = match Config::load(&paths.config_file()) {
        Ok(config) => config,
        Err(e) => {
            journal.record(&format!("Failed to load config: {}", e));
            tracing::error!("{}", e);
            return Ok(());
        }
    };

    let agent = match Agent::new(config, &paths) {
        Ok(agent) => agent,
        Err(e) => {
            journal.record(&format!("Failed to start agent: {}", e));
            tracing::error!("{}", e);
            return Ok(());
        }
    };

    // run() only returns if something escapes the per-step guards.
    if let Err(e) = agent.run().await {
        journal.record(&format!("Unexpected error: {}", e));
        tracing::error!("agent loop terminated: {}", e);
    }

    Ok(())
}
