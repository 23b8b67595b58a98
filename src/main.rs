/*
 * Heading-Frame Boid Viewer
 *
 * Opens a window showing a flock of agents that each steer in their own
 * heading-relative frame by three rules:
 * 1. Cohesion: turn towards nearby agents and speed up
 * 2. Separation: turn away from them and slow down
 * 3. Alignment: turn towards their average heading
 *
 * Agents that leave the arena re-enter from a random edge.
 */

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use frame_boids::app;
use frame_boids::params::FlockParams;

#[derive(Parser)]
#[clap(author, version, about = "Heading-frame boid flocking viewer")]
struct Cli {
    /// Path to a TOML parameter file
    #[clap(short, long)]
    config: Option<String>,

    /// Number of agents
    #[clap(short = 'n', long)]
    count: Option<usize>,

    /// Arena width
    #[clap(long)]
    width: Option<f64>,

    /// Arena height
    #[clap(long)]
    height: Option<f64>,

    /// Seed for spawn points and headings
    #[clap(short, long)]
    seed: Option<u64>,

    /// Debug logging
    #[clap(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    let mut params = match &cli.config {
        Some(path) => FlockParams::from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => FlockParams::default(),
    };

    // Command line flags win over the config file
    if let Some(count) = cli.count {
        params.count = count;
    }
    if let Some(width) = cli.width {
        params.width = width;
    }
    if let Some(height) = cli.height {
        params.height = height;
    }
    if cli.seed.is_some() {
        params.seed = cli.seed;
    }
    params
        .validate_for_viewer()
        .context("Invalid simulation parameters")?;

    info!(
        "Starting viewer: {} agents in a {}x{} arena",
        params.count, params.width, params.height
    );
    app::run(params);

    Ok(())
}
