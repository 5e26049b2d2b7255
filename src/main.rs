//! Shearing-box scaling benchmark.
//!
//! Builds a patch of a dense planetary ring, runs it for the configured time
//! budget and appends one `particle_count / wall seconds` line to the results
//! file of the selected collision backend.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use ring_core::{CollisionBackend, ScenarioConfig};
use ring_sim::{ShearingBoxScenario, SimulationContext, Stationary, TracingSink, run};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ringbox", version, about)]
struct Args {
    /// Width of one root cell, overriding the config
    #[arg(allow_negative_numbers = true)]
    box_size: Option<String>,

    /// TOML scenario file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Collision backend whose results file receives the record
    #[arg(short, long)]
    backend: Option<CollisionBackend>,

    /// Seed for the initial conditions
    #[arg(long)]
    seed: Option<u64>,

    /// Directory holding the scaling_*.txt files
    #[arg(long)]
    results_dir: Option<PathBuf>,
}

fn build_config(args: &Args) -> Result<ScenarioConfig> {
    let mut config = match &args.config {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => ScenarioConfig::default(),
    };
    if let Some(backend) = args.backend {
        config.backend = backend;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(dir) = &args.results_dir {
        config.results_dir = dir.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let started = Instant::now();
    ringbox::logging::init_tracing();

    let args = Args::parse();
    let config = build_config(&args)?;

    let mut ctx = SimulationContext::new(&config)?.with_start(started);
    let mut scenario = ShearingBoxScenario::new(config);
    let report = run(
        &mut ctx,
        &mut scenario,
        &mut Stationary,
        &mut TracingSink,
        args.box_size.as_slice(),
    )?;

    info!(
        particles = report.particle_count,
        steps = report.steps,
        seed = ctx.seed(),
        results = %scenario.recorder().path().display(),
        "run complete"
    );
    Ok(())
}
