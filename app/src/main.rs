//! Bento Grid - composition shell
//!
//! Owns one grid controller and talks to a rendering surface over
//! line-delimited JSON: one event per stdin line in, one frame per line out.

mod protocol;

use anyhow::Context;
use clap::Parser;
use grid_engine::{GridController, GridSettings, SettingsManager};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "bento-grid", about = "Bento grid composer speaking JSON events on stdin/stdout")]
struct Args {
    /// Directory holding settings.json
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Viewport width in pixels, used to pick the breakpoint column count
    #[arg(long)]
    width: Option<u32>,

    /// Start from an empty grid instead of the seed composition
    #[arg(long)]
    empty: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the protocol
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::info!("Starting Bento Grid");

    let mut settings = load_settings(args.settings.as_ref())?;
    if args.empty {
        settings.seed_composition = false;
    }

    let mut controller = GridController::from_settings(&settings, args.width)
        .context("failed to create grid controller")?;
    tracing::info!(columns = controller.columns(), boxes = controller.model().len(), "Grid ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    protocol::write_frame(&mut out, &controller, None)?;
    out.flush()?;

    let applied = protocol::run(&mut controller, &mut stdin.lock(), &mut out)
        .context("failed to process events")?;

    tracing::info!(applied, "Input closed, shutting down");
    Ok(())
}

fn load_settings(dir: Option<&PathBuf>) -> anyhow::Result<GridSettings> {
    let Some(dir) = dir else {
        return Ok(GridSettings::default());
    };

    let mut manager = SettingsManager::new(dir);
    tracing::info!("Settings file: {:?}", manager.settings_path());
    let settings = manager
        .load_sync()
        .with_context(|| format!("failed to load settings from {}", dir.display()))?;
    Ok(settings.clone())
}
