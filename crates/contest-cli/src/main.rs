//! Command line interface for the three-player contest solver
//!
//! `contest solve K1 K2 K3` solves one bid-cost triple both analytically
//! and numerically and prints the comparison. `contest sweep` evaluates
//! the closed form along a k_3 grid and exports it as TSV.

use anyhow::Result;
use clap::{Parser, Subcommand};
use contest_cli::{backend, report::Report, tsv};
use contest_logic::{build_lp, solve_analytical, sweep_k3, BidCosts};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "contest", version, about = "Three-player contest-design equilibrium solver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one bid-cost triple analytically and numerically
    Solve {
        /// Bid cost of Player 1
        k1: f64,
        /// Bid cost of Player 2
        k2: f64,
        /// Bid cost of Player 3
        k3: f64,

        /// Output format (human, json)
        #[arg(short, long, default_value = "human")]
        format: String,
    },
    /// Sweep k_3 and export the solution path as TSV
    Sweep {
        /// Fixed bid cost of Player 1
        #[arg(long, default_value_t = 5.0 / 6.0)]
        k1: f64,

        /// Fixed bid cost of Player 2
        #[arg(long, default_value_t = 1.0)]
        k2: f64,

        /// Lower end of the k_3 range
        #[arg(long, default_value_t = 1.0)]
        from: f64,

        /// Upper end of the k_3 range
        #[arg(long, default_value_t = 3.5)]
        to: f64,

        /// Number of evenly spaced sample points
        #[arg(long, default_value_t = 10_000)]
        samples: usize,

        /// Output directory for the TSV files
        #[arg(short, long, default_value = "data/three_players")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    match Cli::parse().command {
        Commands::Solve { k1, k2, k3, format } => solve(k1, k2, k3, &format),
        Commands::Sweep {
            k1,
            k2,
            from,
            to,
            samples,
            output,
        } => sweep(k1, k2, from, to, samples, &output),
    }
}

fn solve(k1: f64, k2: f64, k3: f64, format: &str) -> Result<()> {
    let costs = BidCosts::new(k1, k2, k3)?;
    let numerical = backend::solve_lp(&build_lp(costs))?;
    let analytical = solve_analytical(costs);
    let report = Report::new(costs, numerical, analytical);
    match format {
        "json" => println!("{}", report.render_json()?),
        _ => print!("{}", report.render_human()),
    }
    Ok(())
}

fn sweep(k1: f64, k2: f64, from: f64, to: f64, samples: usize, output: &Path) -> Result<()> {
    let points = sweep_k3(k1, k2, from, to, samples)?;
    tsv::write_sweep(output, &points)?;
    println!(
        "swept {} points of k_3 in [{}, {}] into {}",
        points.len(),
        from,
        to,
        output.display()
    );
    Ok(())
}
