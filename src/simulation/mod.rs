//! Simulation engine for avalanche payoff runs

mod engine;
mod summary;

pub use engine::{SimulationConfig, SimulationEngine};
pub use summary::SimulationSummary;
