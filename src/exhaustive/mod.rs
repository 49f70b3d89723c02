//! Exhaustive branch-and-bound search.
//!
//! Enumerates every arrangement consistent with the model counts, pruning a
//! prefix as soon as its penalty reaches the best complete penalty found so
//! far. Guarantees a globally optimal sequence on termination.
//!
//! # References
//!
//! Land & Doig (1960), "An Automatic Method of Solving Discrete Programming Problems"

mod solver;

pub use solver::{ExhaustiveResult, ExhaustiveSolver, SearchStatus};
