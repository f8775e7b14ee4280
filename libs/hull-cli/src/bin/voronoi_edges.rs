//! Prints the mean edge count of the bounded Voronoi cells of planar sites
//! read from stdin.
//!
//! Usage:
//!   voronoi-edges < sites.txt
//!   voronoi-edges --angle 1e-7 < sites.txt

use clap::Parser;
use config::constants::HullConfig;
use hull_cli::{read_stdin, report};
use kinetic_hull::io::{parse_sites, write_mean};
use kinetic_hull::voronoi::mean_voronoi_polygon_edges_with;
use kinetic_hull::HullResult;
use log::info;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "voronoi-edges",
    version,
    about = "Mean edge count of bounded Voronoi cells"
)]
struct Cli {
    /// Perturbation rotation angle in radians for the lifted sites
    #[arg(long)]
    angle: Option<f64>,
}

fn run(cli: &Cli) -> HullResult<()> {
    let mut config = HullConfig::default();
    if let Some(angle) = cli.angle {
        config = config.with_lifted_perturbation_angle(angle);
    }

    let sites = parse_sites(&read_stdin()?)?;
    info!("read {} sites", sites.len());

    let mean = mean_voronoi_polygon_edges_with(&sites, &config)?;
    let mut out = io::stdout().lock();
    write_mean(&mut out, mean)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    report(run(&cli))
}
