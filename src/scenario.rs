//! Scenario runner for comparing payment levels
//!
//! Pre-loads a portfolio once, then allows running many simulations with
//! different configurations without re-reading the CSV file.

use crate::loan::load_portfolio;
use crate::portfolio::Portfolio;
use crate::simulation::{SimulationConfig, SimulationEngine};
use rayon::prelude::*;
use std::error::Error;
use std::path::Path;

/// Pre-loaded scenario runner for efficient batch simulations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv_path(Path::new("debts/tristan_loans.csv"))?;
///
/// // Run many scenarios with different payment levels
/// for payment in [1500.0, 2000.0, 2500.0] {
///     let config = SimulationConfig { months: 360, monthly_payment: payment };
///     let result = runner.run(config);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Pristine pre-simulation portfolio, cloned for every run
    base_portfolio: Portfolio,
}

impl ScenarioRunner {
    /// Create runner over an already-built portfolio
    pub fn new(base_portfolio: Portfolio) -> Self {
        Self { base_portfolio }
    }

    /// Create runner by loading loans from a debts CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            base_portfolio: load_portfolio(path)?,
        })
    }

    /// Run a single simulation with the given config, returning the
    /// finished portfolio. The base portfolio is never mutated.
    pub fn run(&self, config: SimulationConfig) -> Portfolio {
        let mut portfolio = self.base_portfolio.clone();
        SimulationEngine::new(config).run(&mut portfolio);
        portfolio
    }

    /// Run one simulation per payment level, in parallel. Results come back
    /// in the same order as `payments`.
    pub fn run_payment_sweep(&self, months: u32, payments: &[f64]) -> Vec<Portfolio> {
        payments
            .par_iter()
            .map(|&monthly_payment| {
                self.run(SimulationConfig {
                    months,
                    monthly_payment,
                })
            })
            .collect()
    }

    /// Get reference to the base portfolio for inspection
    pub fn portfolio(&self) -> &Portfolio {
        &self.base_portfolio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::Loan;

    fn test_runner() -> ScenarioRunner {
        ScenarioRunner::new(Portfolio::new(
            vec![
                Loan::new(12000.0, 0.065, 0).unwrap(),
                Loan::new(5000.0, 0.045, 0).unwrap(),
            ],
            "Sweep",
        ))
    }

    #[test]
    fn test_run_leaves_base_untouched() {
        let runner = test_runner();
        let result = runner.run(SimulationConfig {
            months: 360,
            monthly_payment: 500.0,
        });

        assert!(result.is_settled());
        assert_eq!(runner.portfolio().total_balance, 17000.0);
        assert_eq!(runner.portfolio().month_history, vec![0]);
    }

    #[test]
    fn test_payment_sweep_ordering() {
        let runner = test_runner();
        let results = runner.run_payment_sweep(360, &[400.0, 800.0, 1600.0]);
        assert_eq!(results.len(), 3);

        // A bigger budget never takes longer and never pays more interest
        for pair in results.windows(2) {
            assert!(pair[1].months_elapsed() <= pair[0].months_elapsed());
            assert!(pair[1].total_interest_paid <= pair[0].total_interest_paid);
        }
    }
}
