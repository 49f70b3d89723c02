//! Common solver interface.

use crate::model::{Problem, Solution, SolutionSink};

/// A sequencing algorithm.
///
/// Implementors emit zero or more complete sequences to the sink while they
/// run; the last emission is the answer. The returned output carries run
/// statistics and a copy of that answer.
pub trait Solver {
    type Output: SolveOutput;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn solve<S: SolutionSink>(&self, problem: &Problem, sink: S) -> Result<Self::Output, S::Error>;
}

/// Access to the final answer of a solver run.
pub trait SolveOutput {
    /// The last emitted solution, or `None` if the solver emitted nothing.
    fn best(&self) -> Option<&Solution>;
}

impl SolveOutput for Solution {
    fn best(&self) -> Option<&Solution> {
        Some(self)
    }
}
