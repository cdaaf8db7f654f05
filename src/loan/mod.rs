//! Loan data structures and debts-file loading

mod data;
pub mod loader;

pub use data::{Loan, LoanError, PaymentOutcome};
pub use loader::{extract_title, load_loans, load_loans_from_reader, load_portfolio};
