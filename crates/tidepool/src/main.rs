//! Tidepool - unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tidepool::{Cli, Command, SceneConfig, Simulation};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            log_file,
        } => run_play(config, seed, log_file).await,
        Command::Simulate {
            config,
            games,
            seed,
            json,
            transcript,
        } => run_simulate(config, games, seed, json, transcript),
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Play in the terminal, logging to a file so the screen stays clean.
async fn run_play(config: PathBuf, seed: Option<u64>, log_file: PathBuf) -> Result<()> {
    let file = std::fs::File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    let config = load_config(&config)?;
    tidepool::tui::run_tui(&config, seed).await
}

/// Play many games headless and print the tally.
#[instrument(skip(config))]
fn run_simulate(
    config: PathBuf,
    games: u32,
    seed: Option<u64>,
    json: bool,
    transcript: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&config)?;
    let mut simulation = Simulation::new(seed, config.game().timing());
    let tally = simulation
        .run(games, |record| {
            if transcript {
                println!(
                    "Game {} (random human as {}): {}\n{}\n",
                    record.number(),
                    record.human(),
                    record.outcome(),
                    record.board()
                );
            }
        })
        .context("Simulation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{tally}");
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<SceneConfig> {
    let config = SceneConfig::load_or_default(path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    info!(path = %path.display(), "Scene config ready");
    Ok(config)
}
