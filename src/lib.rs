//! Debt Sim - Avalanche-strategy loan payoff simulator
//!
//! This library provides:
//! - Per-loan monthly interest accrual and payment application
//! - Portfolio-level payment ordering and rollover-cash cascading
//! - A month-by-month simulation driver with aggregate bookkeeping
//! - Console reporting, trajectory export, and SVG chart rendering
//! - A parallel scenario runner for comparing payment levels

pub mod loan;
pub mod plot;
pub mod portfolio;
pub mod report;
pub mod scenario;
pub mod simulation;

// Re-export commonly used types
pub use loan::{Loan, LoanError, PaymentOutcome};
pub use plot::PlotMode;
pub use portfolio::Portfolio;
pub use scenario::ScenarioRunner;
pub use simulation::{SimulationConfig, SimulationEngine, SimulationSummary};
