//! Prints the convex hull facets of every point set read from stdin.
//!
//! Usage:
//!   convex-hull < points.txt
//!   convex-hull --angle 0.05 < points.txt
//!   convex-hull --json < points.txt

use clap::Parser;
use config::constants::HullConfig;
use hull_cli::{read_stdin, report};
use kinetic_hull::io::{parse_point_sets, write_hull, write_hull_json};
use kinetic_hull::{convex_hull_with, HullResult};
use log::info;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "convex-hull", version, about = "Convex hull facets of 3D point sets")]
struct Cli {
    /// Perturbation rotation angle in radians
    #[arg(long)]
    angle: Option<f64>,

    /// Print each hull as a JSON array of facets
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli) -> HullResult<()> {
    let mut config = HullConfig::default();
    if let Some(angle) = cli.angle {
        config = config.with_perturbation_angle(angle);
    }

    let sets = parse_point_sets(&read_stdin()?)?;
    info!("read {} point sets", sets.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for points in &sets {
        let facets = convex_hull_with(points, &config)?;
        if cli.json {
            write_hull_json(&mut out, &facets)?;
        } else {
            write_hull(&mut out, &facets)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    report(run(&cli))
}
