//! Emitted solutions and the sink that receives them.

use super::problem::ModelId;
use std::convert::Infallible;
use std::time::Duration;

/// Immutable snapshot of a complete sequence handed to a [`SolutionSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Total window-violation penalty of `sequence`.
    pub penalty: u64,
    /// Time since the emitting solver started.
    pub elapsed: Duration,
    /// Model identifiers in line order.
    pub sequence: Vec<ModelId>,
}

impl Solution {
    pub fn new(penalty: u64, elapsed: Duration, sequence: Vec<ModelId>) -> Self {
        Self {
            penalty,
            elapsed,
            sequence,
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Number of times `id` appears in the sequence.
    pub fn occurrences(&self, id: ModelId) -> usize {
        self.sequence.iter().filter(|&&m| m == id).count()
    }

    pub fn is_feasible(&self) -> bool {
        self.penalty == 0
    }
}

/// Receiver of candidate solutions.
///
/// Solvers may emit many times during one run; each emission supersedes the
/// previous one, so only the last emission is the solver's answer.
pub trait SolutionSink {
    type Error;

    fn emit(&mut self, solution: &Solution) -> Result<(), Self::Error>;
}

impl<S: SolutionSink + ?Sized> SolutionSink for &mut S {
    type Error = S::Error;

    fn emit(&mut self, solution: &Solution) -> Result<(), Self::Error> {
        (**self).emit(solution)
    }
}

/// Sink that keeps every emission in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    emissions: Vec<Solution>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emissions(&self) -> &[Solution] {
        &self.emissions
    }

    /// The final answer, if anything was emitted.
    pub fn last(&self) -> Option<&Solution> {
        self.emissions.last()
    }

    pub fn len(&self) -> usize {
        self.emissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emissions.is_empty()
    }

    pub fn into_emissions(self) -> Vec<Solution> {
        self.emissions
    }
}

impl SolutionSink for MemorySink {
    type Error = Infallible;

    fn emit(&mut self, solution: &Solution) -> Result<(), Infallible> {
        self.emissions.push(solution.clone());
        Ok(())
    }
}
