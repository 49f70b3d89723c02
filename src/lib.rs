//! Car sequencing on a mixed-model assembly line.
//!
//! A line builds a fixed multiset of vehicles. Each vehicle model needs a
//! subset of options, and each option `s` can be fitted to at most `c_s`
//! vehicles in any `n_s` consecutive positions. The goal is an ordering
//! that minimizes the total excess over all windows.
//!
//! - **Model**: [`model::Problem`], [`model::Solution`], and the
//!   [`model::SolutionSink`] output seam.
//! - **Penalty**: incremental sliding-window evaluation ([`penalty::penalty_at`])
//!   plus a direct ground-truth enumerator.
//! - **Exhaustive**: branch-and-bound search that proves optimality.
//! - **Greedy**: priority-ranked round-robin construction.
//! - **Simulated Annealing (SA)**: swap-neighborhood annealing with a
//!   geometric cooling schedule.
//! - **IO**: instance loader and solution file writer.
//!
//! # Architecture
//!
//! All solvers implement [`solver::Solver`] and are single-threaded. They
//! emit complete sequences to a sink as they find them; the last emission
//! is the answer. The three `carseq-*` binaries wire a solver between an
//! instance file and a solution file (see [`cli`]).

pub mod cli;
pub mod construct;
pub mod exhaustive;
pub mod greedy;
pub mod io;
pub mod model;
pub mod penalty;
pub mod sa;
pub mod solver;
