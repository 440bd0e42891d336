//! Command-line interface for chroma_shift.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Chroma Shift - reach the goal by matching the color under your feet
#[derive(Parser, Debug)]
#[command(name = "chroma_shift")]
#[command(about = "Grid color puzzle for the terminal", long_about = None)]
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
        /// Layout and config overrides
        #[command(flatten)]
        settings: SettingsArgs,

        /// Where to write logs; the terminal belongs to the game
        #[arg(long, default_value = "chroma_shift.log")]
        log_file: PathBuf,
    },

    /// Print one generated grid as text and exit
    Preview {
        /// Layout and config overrides
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

/// Flags shared by every command that builds a game.
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    /// Path to the settings file
    #[arg(short, long, default_value = chroma_shift::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Grid side length
    #[arg(long)]
    pub size: Option<usize>,

    /// Number of obstacles
    #[arg(long)]
    pub obstacles: Option<usize>,

    /// RNG seed for a reproducible grid
    #[arg(long)]
    pub seed: Option<u64>,
}
