//! Portfolio aggregate state and avalanche payoff ordering

use crate::loan::Loan;
use crate::simulation::SimulationSummary;
use serde::{Deserialize, Serialize};

/// A collection of loans simulated together under one payment budget.
///
/// Membership is fixed at construction; the simulation driver mutates the
/// loans and the aggregate trajectories in place, after which the portfolio
/// is read-only input for reporting and plotting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// The loans, in input-file order (the ranking tie-break order)
    pub loans: Vec<Loan>,

    /// Display label for reports and chart titles
    pub title: String,

    /// Sum of all loans' current balances
    pub total_balance: f64,

    /// Aggregate balance at the end of each simulated month
    pub total_balance_history: Vec<f64>,

    /// Month numbers parallel to `total_balance_history`, starting at 0
    pub month_history: Vec<u32>,

    /// Cumulative payment applied across all loans
    pub total_amount_paid: f64,

    /// Total paid minus principal retired, set when a simulation finishes
    pub total_interest_paid: f64,
}

impl Portfolio {
    /// Create a portfolio over the given loans
    pub fn new(loans: Vec<Loan>, title: impl Into<String>) -> Self {
        let total_balance = loans.iter().map(|loan| loan.balance).sum();

        Self {
            loans,
            title: title.into(),
            total_balance,
            total_balance_history: vec![total_balance],
            month_history: vec![0],
            total_amount_paid: 0.0,
            total_interest_paid: 0.0,
        }
    }

    /// Order still-owing loans for this month's payment cascade.
    ///
    /// Returns indices into `loans`, highest accruing rate first. Each round
    /// scans the remaining candidates and takes the loan whose rate strictly
    /// exceeds the running maximum among those already accruing interest
    /// (`current_month > deferral_months`). When no candidate qualifies the
    /// scan's initial pick stands and the first remaining candidate is
    /// taken, so deferred-but-active loans absorb cash in input order until
    /// their interest starts.
    pub fn rank_active_loans(&self, current_month: u32) -> Vec<usize> {
        let mut candidates: Vec<usize> = self
            .loans
            .iter()
            .enumerate()
            .filter(|(_, loan)| loan.balance > 0.0)
            .map(|(i, _)| i)
            .collect();

        let mut ordered = Vec::with_capacity(candidates.len());

        while !candidates.is_empty() {
            let mut max_rate = 0.0;
            let mut selected = 0;

            for (pos, &idx) in candidates.iter().enumerate() {
                let loan = &self.loans[idx];
                if loan.annual_rate > max_rate && loan.accruing_before(current_month) {
                    max_rate = loan.annual_rate;
                    selected = pos;
                }
            }

            ordered.push(candidates.remove(selected));
        }

        ordered
    }

    /// Recompute `total_balance` as the sum over all loans
    pub fn recompute_total_balance(&mut self) {
        self.total_balance = self.loans.iter().map(|loan| loan.balance).sum();
    }

    /// Whether every loan has been paid down to zero.
    ///
    /// Settlement snaps each loan's balance to exactly 0.0, so this is the
    /// drift-free form of the aggregate-equals-zero check.
    pub fn is_settled(&self) -> bool {
        self.loans.iter().all(Loan::is_settled)
    }

    /// Aggregate balance at month 0
    pub fn starting_balance(&self) -> f64 {
        self.total_balance_history[0]
    }

    /// Months actually simulated so far
    pub fn months_elapsed(&self) -> u32 {
        *self.month_history.last().unwrap_or(&0)
    }

    /// Summary figures for the reporting adapter
    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            title: self.title.clone(),
            starting_balance: self.starting_balance(),
            final_balance: self.total_balance,
            months_elapsed: self.months_elapsed(),
            total_amount_paid: self.total_amount_paid,
            total_interest_paid: self.total_interest_paid,
        }
    }
}
