//! Instance files in, solution files out.
//!
//! - [`InstanceLoader`]: parses the whitespace-separated instance format and
//!   validates it
//! - [`SolutionWriter`]: a [`SolutionSink`](crate::model::SolutionSink) that
//!   rewrites one file per emission

mod err;
mod loader;
mod writer;

pub use err::LoaderError;
pub use loader::InstanceLoader;
pub use writer::{write_solution, SolutionWriter};
