//! Depth-first branch-and-bound over per-model supply.

use crate::model::{Problem, Solution, SolutionSink};
use crate::penalty::penalty_at;
use crate::solver::{SolveOutput, Solver};
use std::time::Instant;

/// Status of the search after it ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The search space was exhausted and the last emission is optimal.
    Optimal,
    /// No complete sequence could be laid out from the given supply.
    NoSolution,
}

/// Result of an exhaustive search.
#[derive(Debug, Clone)]
pub struct ExhaustiveResult {
    pub status: SearchStatus,
    /// The optimal sequence (the last emission).
    pub best: Option<Solution>,
    /// Number of complete sequences emitted; penalties strictly decrease.
    pub emissions: usize,
    /// Number of tentative placements evaluated.
    pub nodes: usize,
    /// Number of placements cut by the bound.
    pub pruned: usize,
}

impl SolveOutput for ExhaustiveResult {
    fn best(&self) -> Option<&Solution> {
        self.best.as_ref()
    }
}

/// One level of the search: the next model to try at this depth and the
/// penalty accumulated by the prefix before it.
#[derive(Debug, Clone, Copy)]
struct Frame {
    next: usize,
    prior: u64,
}

/// Exhaustive branch-and-bound solver.
///
/// Positions are filled left to right. At each depth every model with
/// remaining supply is tried in index order; the prefix penalty is
/// extended with [`penalty_at`] and the branch is descended only if it is
/// strictly below the best complete penalty found so far. Every complete
/// sequence reached is therefore strictly better than the previous one,
/// and the last one emitted is a global optimum.
///
/// The search keeps an explicit stack of [`Frame`]s instead of recursing;
/// pushing a frame commits a placement and popping it undoes it.
///
/// # Complexity
///
/// Worst case is the multinomial number of arrangements of the model
/// counts. There is no time limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Solver for ExhaustiveSolver {
    type Output = ExhaustiveResult;

    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn solve<S: SolutionSink>(
        &self,
        problem: &Problem,
        mut sink: S,
    ) -> Result<ExhaustiveResult, S::Error> {
        let start = Instant::now();
        let total = problem.total_vehicles();
        let models = problem.model_count();

        let mut sequence = vec![0usize; total];
        let mut used = vec![0usize; models];
        let mut best_penalty = u64::MAX;
        let mut best: Option<Solution> = None;
        let mut emissions = 0usize;
        let mut nodes = 0usize;
        let mut pruned = 0usize;

        let mut stack = Vec::with_capacity(total + 1);
        stack.push(Frame { next: 0, prior: 0 });

        while let Some(depth) = stack.len().checked_sub(1) {
            if depth == total {
                let penalty = stack[depth].prior;
                let solution =
                    Solution::new(penalty, start.elapsed(), problem.identifiers(&sequence));
                sink.emit(&solution)?;
                tracing::debug!(penalty, nodes, "exhaustive: improved sequence");

                best_penalty = penalty;
                best = Some(solution);
                emissions += 1;

                stack.pop();
                if depth > 0 {
                    used[sequence[depth - 1]] -= 1;
                }
                continue;
            }

            let frame = &mut stack[depth];
            let candidate = (frame.next..models).find(|&i| used[i] < problem.model(i).count());

            match candidate {
                Some(model) => {
                    frame.next = model + 1;
                    let prior = frame.prior;

                    sequence[depth] = model;
                    used[model] += 1;
                    nodes += 1;

                    let penalty = penalty_at(problem, &sequence, depth, prior);
                    if penalty < best_penalty {
                        stack.push(Frame {
                            next: 0,
                            prior: penalty,
                        });
                    } else {
                        used[model] -= 1;
                        pruned += 1;
                    }
                }
                None => {
                    stack.pop();
                    if depth > 0 {
                        used[sequence[depth - 1]] -= 1;
                    }
                }
            }
        }

        let status = if best.is_some() {
            SearchStatus::Optimal
        } else {
            tracing::warn!(
                total,
                supply = problem.supply(),
                "exhaustive: supply cannot fill the line"
            );
            SearchStatus::NoSolution
        };

        tracing::info!(
            penalty = ?best.as_ref().map(|s| s.penalty),
            emissions,
            nodes,
            pruned,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "exhaustive: search finished"
        );

        Ok(ExhaustiveResult {
            status,
            best,
            emissions,
            nodes,
            pruned,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MemorySink, Model, ModelId, OptionConstraint};

    fn scenario() -> Problem {
        Problem::new(
            4,
            vec![OptionConstraint::new(1, 2), OptionConstraint::new(2, 3)],
            vec![
                Model::new(ModelId::new(0), 2, vec![true, false]),
                Model::new(ModelId::new(1), 2, vec![false, true]),
            ],
        )
    }

    #[test]
    fn test_scenario_reaches_zero() {
        let problem = scenario();
        let mut sink = MemorySink::new();
        let result = ExhaustiveSolver::new().solve(&problem, &mut sink).unwrap();

        assert_eq!(result.status, SearchStatus::Optimal);
        let best = result.best.unwrap();
        assert_eq!(best.penalty, 0);
        assert_eq!(best.occurrences(ModelId::new(0)), 2);
        assert_eq!(best.occurrences(ModelId::new(1)), 2);
        assert_eq!(sink.last().map(|s| s.penalty), Some(0));
        assert_eq!(sink.len(), result.emissions);
    }

    #[test]
    fn test_first_emission_is_lexicographic_first() {
        // The first complete sequence is 0 0 1 1 (penalty 1); the search then
        // improves to a zero-penalty sequence.
        let problem = scenario();
        let mut sink = MemorySink::new();
        ExhaustiveSolver::new().solve(&problem, &mut sink).unwrap();

        let first = &sink.emissions()[0];
        let ids: Vec<usize> = first.sequence.iter().map(|m| m.value()).collect();
        assert_eq!(ids, vec![0, 0, 1, 1]);
        assert_eq!(first.penalty, 1);
    }

    #[test]
    fn test_emissions_strictly_decrease() {
        let problem = Problem::new(
            6,
            vec![OptionConstraint::new(1, 2), OptionConstraint::new(1, 3)],
            vec![
                Model::new(ModelId::new(0), 2, vec![true, true]),
                Model::new(ModelId::new(1), 2, vec![true, false]),
                Model::new(ModelId::new(2), 2, vec![false, false]),
            ],
        );
        let mut sink = MemorySink::new();
        ExhaustiveSolver::new().solve(&problem, &mut sink).unwrap();

        assert!(!sink.is_empty());
        for pair in sink.emissions().windows(2) {
            assert!(pair[1].penalty < pair[0].penalty);
        }
    }

    #[test]
    fn test_infeasible_instance_reports_minimum() {
        // Three vehicles that all need an option with capacity 1 of 2.
        let problem = Problem::new(
            3,
            vec![OptionConstraint::new(1, 2)],
            vec![Model::new(ModelId::new(0), 3, vec![true])],
        );
        let result = ExhaustiveSolver::new()
            .solve(&problem, MemorySink::new())
            .unwrap();
        // Windows [0,1] and [1,2] each exceed by one.
        assert_eq!(result.best.map(|s| s.penalty), Some(2));
        assert_eq!(result.emissions, 1);
    }

    #[test]
    fn test_short_supply_finds_nothing() {
        let problem = Problem::new(
            3,
            vec![OptionConstraint::new(1, 2)],
            vec![Model::new(ModelId::new(0), 2, vec![true])],
        );
        let mut sink = MemorySink::new();
        let result = ExhaustiveSolver::new().solve(&problem, &mut sink).unwrap();
        assert_eq!(result.status, SearchStatus::NoSolution);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_empty_line_emits_empty_sequence() {
        let problem = Problem::new(0, Vec::new(), Vec::new());
        let result = ExhaustiveSolver::new()
            .solve(&problem, MemorySink::new())
            .unwrap();
        let best = result.best.unwrap();
        assert!(best.sequence.is_empty());
        assert_eq!(best.penalty, 0);
    }

    #[test]
    fn test_pruning_happens() {
        let problem = Problem::new(
            6,
            vec![OptionConstraint::new(1, 2)],
            vec![
                Model::new(ModelId::new(0), 3, vec![true]),
                Model::new(ModelId::new(1), 3, vec![false]),
            ],
        );
        let result = ExhaustiveSolver::new()
            .solve(&problem, MemorySink::new())
            .unwrap();
        assert_eq!(result.best.map(|s| s.penalty), Some(0));
        assert!(result.pruned > 0);
    }
}
