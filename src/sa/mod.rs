//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! The neighborhood is a swap of two distinct positions; cooling is
//! geometric from 1000 down to 0.001 with factor 0.9999 unless configured
//! otherwise.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;

pub use config::{SaConfig, ALPHA, INITIAL_TEMPERATURE, MIN_TEMPERATURE};
pub use runner::{AnnealingSolver, SaResult, SaRunner};
