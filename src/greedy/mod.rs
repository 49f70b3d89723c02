//! Greedy constructive heuristic.
//!
//! Ranks models with composable priority rules and fills the line
//! round-robin over that ranking:
//!
//! - **Rules**: [`PriorityRule`] implementations score a model; lower is better.
//!   [`MostOptions`] and [`MostVehicles`] are the defaults.
//! - **Engine**: [`RuleEngine`] applies rules in order, later rules breaking
//!   ties of earlier ones, then a [`TieBreaker`].
//! - **Solver**: [`GreedySolver`] builds, scores, and emits one sequence.
//!
//! # References
//!
//! Dispatching rule composition: Pinedo (2016), "Scheduling: Theory,
//! Algorithms, and Systems"

mod priority;
mod solver;

pub use priority::{MostOptions, MostVehicles, PriorityRule, RuleEngine, TieBreaker};
pub use solver::GreedySolver;
