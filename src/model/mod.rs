//! Problem model and solution types.
//!
//! - [`Problem`]: the immutable instance (line length, option constraints, models)
//! - [`Solution`]: a complete sequence snapshot with its penalty and timing
//! - [`SolutionSink`]: the output seam every solver emits through

mod problem;
mod solution;

pub use problem::{Model, ModelId, OptionConstraint, Problem, ProblemError};
pub use solution::{MemorySink, Solution, SolutionSink};
