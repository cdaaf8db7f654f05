//! Console reporting and trajectory export for finished simulations

use crate::portfolio::Portfolio;
use crate::simulation::SimulationSummary;
use std::io::{self, Write};

/// Print the human-readable payoff summary
pub fn print_summary(summary: &SimulationSummary, monthly_payment: f64) {
    let (years, months) = summary.years_and_months();

    println!(
        "{}'s starting loan total: ${}.",
        summary.title,
        format_money(summary.starting_balance)
    );
    println!(
        "Paying ${} per month will result in achieving a balance of ${} after {} months ({}y {}m).",
        monthly_payment,
        format_money(summary.final_balance),
        summary.months_elapsed,
        years,
        months
    );
    println!(
        "This resulted in paying a total of ${}, which means we paid ${} in interest.\n",
        format_money(summary.total_amount_paid),
        format_money(summary.total_interest_paid)
    );
}

/// Write month-by-month balances as CSV: the aggregate plus one column per
/// loan. Loans settle at different months, so exhausted histories pad with 0.
pub fn write_trajectories<W: Write>(portfolio: &Portfolio, writer: &mut W) -> io::Result<()> {
    write!(writer, "Month,TotalBalance")?;
    for idx in 1..=portfolio.loans.len() {
        write!(writer, ",Loan{}", idx)?;
    }
    writeln!(writer)?;

    for (row, month) in portfolio.month_history.iter().enumerate() {
        write!(
            writer,
            "{},{:.2}",
            month, portfolio.total_balance_history[row]
        )?;
        for loan in &portfolio.loans {
            let balance = loan.balance_history.get(row).copied().unwrap_or(0.0);
            write!(writer, ",{:.2}", balance)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Format a dollar amount with comma-grouped thousands and cents
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{:02}", if negative { "-" } else { "" }, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::Loan;
    use crate::simulation::{SimulationConfig, SimulationEngine};

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(1234.5), "1,234.50");
        assert_eq!(format_money(1_000_000.0), "1,000,000.00");
        assert_eq!(format_money(999.999), "1,000.00");
        assert_eq!(format_money(-42.5), "-42.50");
    }

    #[test]
    fn test_write_trajectories() {
        let mut portfolio = Portfolio::new(
            vec![
                Loan::new(100.0, 0.0, 0).unwrap(),
                Loan::new(200.0, 0.05, 0).unwrap(),
            ],
            "Export",
        );
        SimulationEngine::new(SimulationConfig {
            months: 3,
            monthly_payment: 150.0,
        })
        .run(&mut portfolio);

        let mut buffer = Vec::new();
        write_trajectories(&portfolio, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Month,TotalBalance,Loan1,Loan2"));

        // One row per simulated month including month 0, each fully populated
        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), portfolio.month_history.len());
        assert!(rows[0].starts_with("0,300.00,100.00,200.00"));
        assert!(rows.iter().all(|row| row.split(',').count() == 4));
    }
}
