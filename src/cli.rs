//! Shared entry point for the `carseq-*` binaries.
//!
//! Every binary takes exactly two positional arguments, `<input> <output>`:
//! the instance file to read and the solution file to (re)write on every
//! emission. Logs go to stderr and are filtered by `RUST_LOG` (default
//! `info`). `CARSEQ_SEED` fixes the annealing seed.

use crate::exhaustive::ExhaustiveSolver;
use crate::greedy::GreedySolver;
use crate::io::{InstanceLoader, LoaderError, SolutionWriter};
use crate::model::{Problem, Solution};
use crate::sa::{AnnealingSolver, SaConfig};
use crate::solver::{SolveOutput, Solver};
use std::fmt;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable that fixes the annealing seed.
pub const SEED_ENV: &str = "CARSEQ_SEED";

/// Which solver a binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Exhaustive,
    Greedy,
    Annealing,
}

impl Algorithm {
    pub fn binary_name(self) -> &'static str {
        match self {
            Algorithm::Exhaustive => "carseq-exhaustive",
            Algorithm::Greedy => "carseq-greedy",
            Algorithm::Annealing => "carseq-annealing",
        }
    }
}

#[derive(Debug)]
pub enum CliError {
    Usage(&'static str),
    Seed(String),
    Load(LoaderError),
    Write(std::io::Error),
}

impl From<LoaderError> for CliError {
    fn from(e: LoaderError) -> Self {
        Self::Load(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Write(e)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(bin) => write!(f, "usage: {bin} <input> <output>"),
            CliError::Seed(v) => write!(f, "{SEED_ENV} must be an unsigned integer, got {v:?}"),
            CliError::Load(e) => write!(f, "cannot load instance: {e}"),
            CliError::Write(e) => write!(f, "cannot write solution: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Installs the stderr log subscriber. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parses a raw `CARSEQ_SEED` value. Unset means a fresh random seed.
fn parse_seed(raw: Option<String>) -> Result<Option<u64>, CliError> {
    match raw {
        Some(v) => v
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| CliError::Seed(v)),
        None => Ok(None),
    }
}

fn solve_to_file<V: Solver>(
    solver: &V,
    problem: &Problem,
    writer: &mut SolutionWriter,
) -> Result<Option<Solution>, CliError> {
    tracing::info!(solver = solver.name(), output = %writer.path().display(), "solving");
    let output = solver.solve(problem, &mut *writer)?;
    Ok(output.best().cloned())
}

/// Runs `algorithm` with process-style arguments (program name first).
///
/// Returns the final answer, or `None` if the solver emitted nothing (the
/// output file is then left untouched).
pub fn run<I>(algorithm: Algorithm, args: I) -> Result<Option<Solution>, CliError>
where
    I: IntoIterator<Item = String>,
{
    run_with_seed(algorithm, args, std::env::var(SEED_ENV).ok())
}

/// [`run`] with the raw seed value passed in instead of read from the
/// environment. `seed` is only parsed for [`Algorithm::Annealing`].
pub fn run_with_seed<I>(
    algorithm: Algorithm,
    args: I,
    seed: Option<String>,
) -> Result<Option<Solution>, CliError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().skip(1).collect();
    let [input, output] = args.as_slice() else {
        return Err(CliError::Usage(algorithm.binary_name()));
    };

    let problem = InstanceLoader::new().from_path(input)?;
    tracing::info!(
        input = %input,
        cars = problem.total_vehicles(),
        options = problem.option_count(),
        models = problem.model_count(),
        "instance loaded"
    );

    let mut writer = SolutionWriter::new(output);
    let best = match algorithm {
        Algorithm::Exhaustive => solve_to_file(&ExhaustiveSolver::new(), &problem, &mut writer)?,
        Algorithm::Greedy => solve_to_file(&GreedySolver::new(), &problem, &mut writer)?,
        Algorithm::Annealing => {
            let mut config = SaConfig::default();
            config.seed = parse_seed(seed)?;
            solve_to_file(&AnnealingSolver::new(config), &problem, &mut writer)?
        }
    };

    match &best {
        Some(s) => tracing::info!(
            penalty = s.penalty,
            writes = writer.writes(),
            "final solution written"
        ),
        None => tracing::warn!("no solution was emitted; output file not written"),
    }
    Ok(best)
}

/// `main` body shared by the binaries.
pub fn main(algorithm: Algorithm) -> ExitCode {
    init_tracing();
    match run(algorithm, std::env::args()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e @ CliError::Usage(_)) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
