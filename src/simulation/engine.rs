//! Simulation driver for the monthly payment cascade

use crate::portfolio::Portfolio;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Maximum number of months to simulate
    pub months: u32,

    /// Fixed payment budget available each month
    pub monthly_payment: f64,
}

/// Runs the month-by-month avalanche cascade over a portfolio.
///
/// Each month the still-owing loans are ranked highest-accruing-rate first;
/// the first loan receives the full budget and every later loan receives
/// only the previous loan's rollover. The loop is strictly sequential:
/// each month's ordering depends on the prior month's balances, and cash
/// cascades in priority order within a month.
pub struct SimulationEngine {
    config: SimulationConfig,
}

impl SimulationEngine {
    /// Create an engine with the given config
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Run the simulation, mutating the portfolio's loans and aggregate
    /// trajectories in place. Stops early once every loan is settled.
    pub fn run(&self, portfolio: &mut Portfolio) {
        for month in 1..=self.config.months {
            let ordered = portfolio.rank_active_loans(month);

            let mut cash = self.config.monthly_payment;
            for idx in ordered {
                let outcome = portfolio.loans[idx].advance_one_month(cash);
                cash = outcome.rollover;
                portfolio.total_amount_paid += outcome.applied;
            }

            portfolio.recompute_total_balance();
            portfolio.total_balance_history.push(portfolio.total_balance);
            portfolio.month_history.push(month);

            if portfolio.is_settled() {
                break;
            }
        }

        let principal_retired = portfolio.starting_balance() - portfolio.total_balance;
        portfolio.total_interest_paid = round_cents(portfolio.total_amount_paid - principal_retired);
    }
}

/// Round to whole cents
fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::Loan;
    use approx::assert_relative_eq;

    fn loan(balance: f64, rate: f64, deferral: u32) -> Loan {
        Loan::new(balance, rate, deferral).unwrap()
    }

    fn run(portfolio: &mut Portfolio, months: u32, monthly_payment: f64) {
        SimulationEngine::new(SimulationConfig {
            months,
            monthly_payment,
        })
        .run(portfolio);
    }

    #[test]
    fn test_two_loan_cascade_month() {
        let mut portfolio = Portfolio::new(
            vec![loan(1200.0, 0.06, 0), loan(1200.0, 0.03, 0)],
            "Cascade",
        );
        run(&mut portfolio, 1, 1300.0);

        // A accrues to 1206.02, settles, and rolls 93.98 into B;
        // B accrues to 1203.00 and absorbs the rollover.
        let a = &portfolio.loans[0];
        let b = &portfolio.loans[1];
        assert_eq!(a.balance, 0.0);
        assert_relative_eq!(b.balance, 1109.0187787, epsilon = 1e-4);
        assert_relative_eq!(portfolio.total_amount_paid, 1300.0, epsilon = 1e-9);
        assert_relative_eq!(portfolio.total_balance, b.balance, epsilon = 1e-9);
    }

    #[test]
    fn test_early_termination_on_full_payoff() {
        let mut portfolio = Portfolio::new(vec![loan(100.0, 0.0, 0)], "Single");
        run(&mut portfolio, 24, 100.0);

        assert!(portfolio.is_settled());
        assert_eq!(portfolio.months_elapsed(), 1);
        assert_eq!(portfolio.month_history, vec![0, 1]);
        assert_eq!(portfolio.total_interest_paid, 0.0);
        assert_eq!(portfolio.total_amount_paid, 100.0);
    }

    #[test]
    fn test_single_shot_payoff_when_budget_covers_everything() {
        let mut portfolio = Portfolio::new(
            vec![
                loan(1000.0, 0.05, 0),
                loan(500.0, 0.10, 0),
                loan(250.0, 0.02, 0),
            ],
            "OneShot",
        );
        // Budget comfortably above starting total plus one month of interest
        run(&mut portfolio, 120, 2000.0);

        assert_eq!(portfolio.months_elapsed(), 1);
        assert!(portfolio.is_settled());
        assert!(portfolio.loans.iter().all(Loan::is_settled));
    }

    #[test]
    fn test_conservation_of_paid_cash() {
        let mut portfolio = Portfolio::new(
            vec![loan(3000.0, 0.07, 0), loan(2000.0, 0.04, 0)],
            "Conserve",
        );
        run(&mut portfolio, 360, 400.0);

        // Everything paid went to either retiring principal or interest
        let principal_retired = portfolio.starting_balance() - portfolio.total_balance;
        assert_relative_eq!(
            portfolio.total_amount_paid,
            principal_retired + portfolio.total_interest_paid,
            epsilon = 0.01
        );
        assert!(portfolio.is_settled());
        assert!(portfolio.total_interest_paid > 0.0);
    }

    #[test]
    fn test_full_horizon_without_settlement() {
        // Payment below the interest keeps the loan growing for the whole run
        let mut portfolio = Portfolio::new(vec![loan(10000.0, 0.12, 0)], "Growing");
        run(&mut portfolio, 12, 50.0);

        assert_eq!(portfolio.months_elapsed(), 12);
        assert_eq!(portfolio.month_history.len(), 13);
        assert!(portfolio.total_balance > 10000.0);
        assert_eq!(portfolio.total_amount_paid, 600.0);
        // Negative amortization: interest paid exceeds the cash paid in
        assert!(portfolio.total_interest_paid > 600.0);
        assert_relative_eq!(
            portfolio.total_interest_paid,
            round_cents(600.0 - (10000.0 - portfolio.total_balance)),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_deferred_loan_decreases_linearly_until_accrual() {
        let mut portfolio = Portfolio::new(vec![loan(1000.0, 0.05, 12)], "Deferred");
        run(&mut portfolio, 11, 50.0);

        // No interest while current_month < deferral_months
        assert_relative_eq!(portfolio.total_balance, 1000.0 - 11.0 * 50.0, epsilon = 1e-9);
        let history = &portfolio.loans[0].balance_history;
        for (idx, balance) in history.iter().enumerate() {
            assert_relative_eq!(*balance, 1000.0 - 50.0 * idx as f64, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_deferred_loan_still_receives_cascade() {
        // The high-rate loan is deferred, so cash lands on it only through the
        // ranking fallback; the accruing loan leads once its rate qualifies.
        let mut portfolio = Portfolio::new(
            vec![loan(500.0, 0.02, 0), loan(1000.0, 0.09, 24)],
            "Mixed",
        );
        run(&mut portfolio, 3, 600.0);

        // Month 1: 500 loan accrues to 500.83, settles; 99.17 rolls into the
        // deferred loan as a simple subtraction.
        assert!(portfolio.loans[0].is_settled());
        assert!(portfolio.loans[1].balance < 1000.0);
        assert_eq!(portfolio.loans[0].month_history, vec![0, 1]);
    }

    #[test]
    fn test_settled_loans_stop_accumulating_history() {
        let mut portfolio = Portfolio::new(
            vec![loan(100.0, 0.0, 0), loan(500.0, 0.05, 0)],
            "Ragged",
        );
        run(&mut portfolio, 6, 300.0);

        // The 5% loan leads the avalanche and settles in month 2; from then
        // on it is skipped from the cascade and its history stops growing.
        let settled = &portfolio.loans[1];
        assert!(settled.is_settled());
        assert!(settled.balance_history.len() < portfolio.month_history.len());
        assert_eq!(*settled.balance_history.last().unwrap(), 0.0);
    }
}
