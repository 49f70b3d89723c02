//! Single-pass greedy construction.

use super::priority::{MostOptions, MostVehicles, RuleEngine};
use crate::construct::round_robin;
use crate::model::{Problem, Solution, SolutionSink};
use crate::penalty::sequence_penalty;
use crate::solver::Solver;
use std::time::Instant;

/// Greedy solver.
///
/// 1. Ranks models with a [`RuleEngine`] (by default: most options first,
///    then most vehicles, ties in load order).
/// 2. Fills the line round-robin over that ranking, skipping models that are
///    out of stock.
/// 3. Scores the sequence once and emits it.
///
/// No lookahead and no backtracking; the result is deterministic.
#[derive(Debug)]
pub struct GreedySolver {
    engine: RuleEngine,
}

impl GreedySolver {
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(MostOptions)
                .with_rule(MostVehicles),
        }
    }

    /// Uses a custom ranking instead of the default one.
    pub fn with_engine(engine: RuleEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Model indices in the order the round-robin visits them.
    pub fn priority_order(&self, problem: &Problem) -> Vec<usize> {
        self.engine.sort_indices(problem.models())
    }
}

impl Default for GreedySolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for GreedySolver {
    type Output = Solution;

    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve<S: SolutionSink>(&self, problem: &Problem, mut sink: S) -> Result<Solution, S::Error> {
        let start = Instant::now();

        let order = self.priority_order(problem);
        let sequence = round_robin(problem, &order);
        if sequence.len() < problem.total_vehicles() {
            tracing::warn!(
                placed = sequence.len(),
                total = problem.total_vehicles(),
                "greedy: supply ran out before the line was full"
            );
        }

        let penalty = sequence_penalty(problem, &sequence);
        let solution = Solution::new(penalty, start.elapsed(), problem.identifiers(&sequence));
        sink.emit(&solution)?;

        tracing::info!(
            penalty,
            rules = ?self.engine.rule_names(),
            "greedy: sequence built"
        );

        Ok(solution)
    }
}
