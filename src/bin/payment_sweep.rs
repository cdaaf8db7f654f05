//! Compare payoff outcomes across a range of monthly payment levels
//!
//! Loads a debts CSV once, fans the simulations out in parallel, and prints
//! an aligned comparison table (optionally written as CSV).

use anyhow::Context;
use clap::Parser;
use debt_sim::ScenarioRunner;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Sweep monthly payment levels over one set of loans.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Debts CSV file with Balance, Interest Rate, and Start Month columns
    csv: PathBuf,

    /// Payment levels to compare, in dollars per month
    #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
    payments: Vec<f64>,

    /// Maximum number of months to simulate per scenario
    #[arg(long, default_value_t = 360)]
    months: u32,

    /// Write the comparison table as CSV
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let start = Instant::now();
    let runner = ScenarioRunner::from_csv_path(&args.csv)
        .map_err(|err| anyhow::anyhow!("{err}"))
        .with_context(|| format!("failed to load loans from {}", args.csv.display()))?;
    println!(
        "Loaded {} loans (${:.2} total) in {:?}",
        runner.portfolio().loans.len(),
        runner.portfolio().total_balance,
        start.elapsed()
    );

    let sweep_start = Instant::now();
    let results = runner.run_payment_sweep(args.months, &args.payments);
    println!(
        "Ran {} scenarios in {:?}\n",
        results.len(),
        sweep_start.elapsed()
    );

    println!(
        "{:>12} {:>8} {:>14} {:>14} {:>14}",
        "Payment", "Months", "Final Balance", "Total Paid", "Interest"
    );
    println!("{}", "-".repeat(66));
    for (payment, portfolio) in args.payments.iter().zip(&results) {
        println!(
            "{:>12.2} {:>8} {:>14.2} {:>14.2} {:>14.2}",
            payment,
            portfolio.months_elapsed(),
            portfolio.total_balance,
            portfolio.total_amount_paid,
            portfolio.total_interest_paid,
        );
    }

    if let Some(path) = &args.output {
        let mut file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        writeln!(file, "Payment,Months,FinalBalance,TotalPaid,InterestPaid")?;
        for (payment, portfolio) in args.payments.iter().zip(&results) {
            writeln!(
                file,
                "{:.2},{},{:.2},{:.2},{:.2}",
                payment,
                portfolio.months_elapsed(),
                portfolio.total_balance,
                portfolio.total_amount_paid,
                portfolio.total_interest_paid,
            )?;
        }
        println!("\nComparison written to: {}", path.display());
    }

    Ok(())
}
