//! Summary figures for a finished simulation

use serde::{Deserialize, Serialize};

/// Headline numbers read off a portfolio after the engine has run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Portfolio display label
    pub title: String,

    /// Aggregate balance at month 0
    pub starting_balance: f64,

    /// Aggregate balance when the run stopped
    pub final_balance: f64,

    /// Months actually simulated (early payoff stops the clock)
    pub months_elapsed: u32,

    /// Cumulative payment applied across all loans
    pub total_amount_paid: f64,

    /// Total paid minus principal retired, rounded to cents
    pub total_interest_paid: f64,
}

impl SimulationSummary {
    /// Elapsed horizon as whole years and leftover months
    pub fn years_and_months(&self) -> (u32, u32) {
        (self.months_elapsed / 12, self.months_elapsed % 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_and_months() {
        let summary = SimulationSummary {
            title: "Test".to_string(),
            starting_balance: 1000.0,
            final_balance: 0.0,
            months_elapsed: 27,
            total_amount_paid: 1100.0,
            total_interest_paid: 100.0,
        };

        assert_eq!(summary.years_and_months(), (2, 3));
    }
}
