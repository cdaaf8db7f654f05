//! Debt Sim CLI
//!
//! Command-line interface for running avalanche payoff simulations

use anyhow::Context;
use clap::Parser;
use debt_sim::loan::load_portfolio;
use debt_sim::plot::{self, PlotMode};
use debt_sim::report;
use debt_sim::{SimulationConfig, SimulationEngine};
use std::fs::File;
use std::path::PathBuf;

/// Simulate paying off a set of loans under a fixed monthly budget,
/// highest interest rate first.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Debts CSV file with Balance, Interest Rate, and Start Month columns
    csv: PathBuf,

    /// Monthly payment budget in dollars
    #[arg(long)]
    payment: f64,

    /// Maximum number of months to simulate
    #[arg(long, default_value_t = 360)]
    months: u32,

    /// Charts to render: balances, individual balances, total balance,
    /// pie, all, or none
    #[arg(long, default_value = "none")]
    plots: String,

    /// Where to write the rendered SVG
    #[arg(long, default_value = "payoff_plot.svg")]
    plot_output: PathBuf,

    /// Write the full simulated portfolio state as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write month-by-month balance trajectories as CSV
    #[arg(long)]
    trajectories: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut portfolio = load_portfolio(&args.csv)
        .map_err(|err| anyhow::anyhow!("{err}"))
        .with_context(|| format!("failed to load loans from {}", args.csv.display()))?;

    let engine = SimulationEngine::new(SimulationConfig {
        months: args.months,
        monthly_payment: args.payment,
    });
    engine.run(&mut portfolio);

    report::print_summary(&portfolio.summary(), args.payment);

    if let Some(path) = &args.trajectories {
        let mut file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        report::write_trajectories(&portfolio, &mut file)?;
        println!("Trajectories written to: {}", path.display());
    }

    if let Some(path) = &args.json {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &portfolio)?;
        println!("Portfolio state written to: {}", path.display());
    }

    let mode = PlotMode::parse(&args.plots);
    let written = plot::render(&portfolio, mode, args.payment, &args.plot_output)
        .map_err(|err| anyhow::anyhow!("{err}"))
        .context("failed to render charts")?;
    if written {
        println!("Charts written to: {}", args.plot_output.display());
    }

    Ok(())
}
