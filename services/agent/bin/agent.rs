//! Main Entrypoint for the Voice Interrupt Agent
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment and the command line.
//! 2. Initializing logging.
//! 3. Loading the event script.
//! 4. Replaying it through an interrupt decider and logging a summary on
//!    completion or Ctrl+C.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use voice_interrupt_agent::{
    config::{Config, parse_ignored_words},
    runner::run_session,
    script::load_script,
};

/// Replays a scripted voice session through the interrupt decider.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to a JSON-lines event script, or `-` to read it from stdin.
    script: PathBuf,

    /// Comma-separated filler words; overrides IGNORED_WORDS.
    #[arg(long)]
    ignored_words: Option<String>,
}

/// Listens for the `Ctrl+C` signal to stop the replay early.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = ?e, "Failed to install Ctrl+C handler.");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal. Stopping replay...");
}

async fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    // --- 3. Load Script ---
    let steps = load_script(&cli.script)?;
    info!(steps = steps.len(), script = %cli.script.display(), "Script loaded.");

    // --- 4. Replay ---
    let summary = run_session(config.ignored_words.clone(), &steps, shutdown_signal()).await?;
    info!(
        events = summary.events_published,
        interrupts = summary.interrupts,
        "Session finished."
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // --- 1. Load Configuration ---
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(raw) = &cli.ignored_words {
        config.ignored_words = parse_ignored_words("--ignored-words", raw)?;
    }

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .init();
    info!(ignored_words = %config.ignored_words, "Using ignored words.");

    if let Err(e) = run(&cli, &config).await {
        error!(error = ?e, "Agent terminated with error.");
        return Err(e);
    }
    Ok(())
}
