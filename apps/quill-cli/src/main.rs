//! # Quill
//!
//! Terminal client for the blog backend. An optional path picks the starting
//! screen, e.g. `quill /blogs`; `quill --help` lists the backend options.

use anyhow::Context;
use clap::Parser;

mod cli;
mod config;
mod console;
mod render;
mod screens;
mod state;
mod telemetry;

use cli::Cli;
use config::AppConfig;
use console::Console;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file before clap reads the QUILL_* variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli);
    telemetry::init_telemetry(&config.telemetry);

    let state = AppState::new(&config.backend)
        .await
        .context("Failed to set up the backend")?;

    tracing::info!(start = %cli.start, "Starting Quill");
    let mut console = Console::new(
        tokio::io::BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    );
    screens::run(&state, &mut console, cli.start).await?;

    tracing::info!("Goodbye");
    Ok(())
}
