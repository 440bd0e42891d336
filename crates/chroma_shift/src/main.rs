//! Chroma Shift - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use chroma_core::GridGenerator;
use chroma_shift::{GameSettings, init_file_logging, run_tui};
use clap::Parser;
use cli::{Cli, Command, SettingsArgs};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { settings, log_file } => play(settings, &log_file).await,
        Command::Preview { settings } => preview(settings),
    }
}

fn load_settings(args: SettingsArgs) -> Result<GameSettings> {
    let settings = GameSettings::load_or_default(&args.config)?
        .with_overrides(args.size, args.obstacles, args.seed);
    Ok(settings)
}

/// Run the terminal game
#[instrument(skip(args))]
async fn play(args: SettingsArgs, log_file: &Path) -> Result<()> {
    init_file_logging(log_file, "info")?;
    let settings = load_settings(args)?;
    info!(?settings, "Starting Chroma Shift");

    let best_times = run_tui(&settings).await?;

    let labels = best_times
        .times()
        .iter()
        .map(|t| format!("{:.1}s", t.as_secs_f64()))
        .collect::<Vec<_>>();
    if labels.is_empty() {
        println!("No wins this time.");
    } else {
        println!("Best Times: {}", labels.join(" "));
    }
    Ok(())
}

/// Print one grid and exit
fn preview(args: SettingsArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = load_settings(args)?;
    let layout = settings.layout()?;
    let grid = settings.generator().generate(&layout);

    println!("{}", grid.display());
    println!(
        "{}x{} grid, {} obstacles, start (0, 0), goal {}",
        grid.size(),
        grid.size(),
        grid.obstacle_count(),
        grid.goal()
    );
    Ok(())
}
