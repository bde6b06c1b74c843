//! Command-line interface for tidepool.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tidepool - tic-tac-toe on a rolling sea
#[derive(Parser, Debug)]
#[command(name = "tidepool")]
#[command(about = "Tic-tac-toe against a random opponent over animated waves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to the scene config (defaults are used when it does not exist)
        #[arg(short, long, default_value = "tidepool.toml")]
        config: PathBuf,

        /// Seed for the opponent, for a repeatable game
        #[arg(long)]
        seed: Option<u64>,

        /// Where to write logs while the screen is in use
        #[arg(long, default_value = "tidepool.log")]
        log_file: PathBuf,
    },

    /// Play many games headless and print the tally
    Simulate {
        /// Path to the scene config (defaults are used when it does not exist)
        #[arg(short, long, default_value = "tidepool.toml")]
        config: PathBuf,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for both seats, for a repeatable run
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,

        /// Print every final board
        #[arg(long)]
        transcript: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_defaults() {
        let cli = Cli::try_parse_from(["tidepool", "play"]).unwrap();
        match cli.command {
            Command::Play {
                config,
                seed,
                log_file,
            } => {
                assert_eq!(config, PathBuf::from("tidepool.toml"));
                assert_eq!(seed, None);
                assert_eq!(log_file, PathBuf::from("tidepool.log"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_simulate_flags() {
        let cli = Cli::try_parse_from([
            "tidepool",
            "simulate",
            "--games",
            "25",
            "--seed",
            "7",
            "--json",
            "-c",
            "scene.toml",
        ])
        .unwrap();
        match cli.command {
            Command::Simulate {
                config,
                games,
                seed,
                json,
                transcript,
            } => {
                assert_eq!(config, PathBuf::from("scene.toml"));
                assert_eq!(games, 25);
                assert_eq!(seed, Some(7));
                assert!(json);
                assert!(!transcript);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
