//! Compare scaling measurements across collision backends.
//! Reads every scaling_*.txt in the results directory and prints one table
//! per backend plus the fitted exponent k of t ~ N^k.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ring_core::CollisionBackend;
use ring_storage::{read_records, scaling_exponent};
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "scaling_report", about)]
struct Args {
    /// Directory holding the scaling_*.txt files
    #[arg(long, default_value = ".")]
    results_dir: PathBuf,
}

fn main() -> Result<()> {
    ringbox::logging::init_tracing();
    let args = Args::parse();

    for backend in CollisionBackend::ALL {
        let path = args.results_dir.join(backend.results_file_name());
        if !path.exists() {
            warn!(path = %path.display(), "no results for backend");
            continue;
        }

        let mut records = read_records(&path)?;
        records.sort_by_key(|r| r.particle_count);

        println!("== {backend} ({} runs)", records.len());
        println!("{:>10} {:>14} {:>16}", "N", "elapsed [s]", "per particle [us]");
        for r in &records {
            let per_particle = if r.particle_count > 0 {
                r.elapsed_seconds / r.particle_count as f64 * 1e6
            } else {
                0.0
            };
            println!(
                "{:>10} {:>14.6} {:>16.3}",
                r.particle_count, r.elapsed_seconds, per_particle
            );
        }
        match scaling_exponent(&records) {
            Some(k) => println!("scaling exponent: {k:.3}"),
            None => println!("scaling exponent: n/a"),
        }
        println!();
    }
    Ok(())
}
