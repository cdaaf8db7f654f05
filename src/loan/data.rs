//! Loan state and month-by-month payment application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures for loan inputs
#[derive(Debug, Error, PartialEq)]
pub enum LoanError {
    #[error("loan balance must be non-negative, got {0}")]
    NegativeBalance(f64),
    #[error("annual interest rate must be non-negative, got {0}")]
    NegativeRate(f64),
}

/// Result of applying one month of payment to a loan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentOutcome {
    /// Cash left over after the loan settled (0 while the loan still owes)
    pub rollover: f64,

    /// Portion of the payment actually absorbed by the loan
    pub applied: f64,
}

/// A single interest-bearing loan and its simulated trajectory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    /// Balance at creation, kept for reporting and chart labels
    pub start_balance: f64,

    /// Current outstanding principal, never negative
    pub balance: f64,

    /// Annual interest rate in decimal form (0.05 = 5%)
    pub annual_rate: f64,

    /// Months from simulation start before interest begins accruing
    pub deferral_months: u32,

    /// Balance at the end of each simulated month; entry 0 is the start balance
    pub balance_history: Vec<f64>,

    /// Month numbers parallel to `balance_history`, starting at 0
    pub month_history: Vec<u32>,
}

impl Loan {
    /// Create a loan, rejecting out-of-range inputs before any state is built
    pub fn new(balance: f64, annual_rate: f64, deferral_months: u32) -> Result<Self, LoanError> {
        if balance < 0.0 {
            return Err(LoanError::NegativeBalance(balance));
        }
        if annual_rate < 0.0 {
            return Err(LoanError::NegativeRate(annual_rate));
        }

        Ok(Self {
            start_balance: balance,
            balance,
            annual_rate,
            deferral_months,
            balance_history: vec![balance],
            month_history: vec![0],
        })
    }

    /// Apply one month of accrual and payment.
    ///
    /// Interest compounds continuously at the nominal annual rate over one
    /// month (`balance * exp(rate / 12)`); during the deferral window the
    /// payment is a simple subtraction. If the payment overshoots, the loan
    /// settles to exactly 0 and the unused cash comes back as `rollover`.
    pub fn advance_one_month(&mut self, payment: f64) -> PaymentOutcome {
        let current_month = self.month_history.last().copied().unwrap_or(0) + 1;

        let new_balance = if current_month < self.deferral_months {
            self.balance - payment
        } else {
            self.balance * (self.annual_rate / 12.0).exp() - payment
        };

        if new_balance < 0.0 {
            self.balance = 0.0;
            self.balance_history.push(0.0);
            self.month_history.push(current_month);

            PaymentOutcome {
                rollover: -new_balance,
                applied: payment + new_balance,
            }
        } else {
            self.balance = new_balance;
            self.balance_history.push(new_balance);
            self.month_history.push(current_month);

            PaymentOutcome {
                rollover: 0.0,
                applied: payment,
            }
        }
    }

    /// Whether the loan has been paid down to zero
    pub fn is_settled(&self) -> bool {
        self.balance <= 0.0
    }

    /// Whether interest started accruing strictly before `current_month`.
    ///
    /// This is the payoff-ordering eligibility test. Accrual itself begins
    /// in the month equal to `deferral_months` (the `current_month <
    /// deferral_months` check inside `advance_one_month`), so a loan accrues
    /// for one month before it becomes eligible for priority ranking.
    pub fn accruing_before(&self, current_month: u32) -> bool {
        current_month > self.deferral_months
    }
}
