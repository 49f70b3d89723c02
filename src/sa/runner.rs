//! SA execution loop.

use super::config::SaConfig;
use crate::construct::load_order;
use crate::model::{Problem, Solution, SolutionSink};
use crate::penalty::sequence_penalty;
use crate::solver::{SolveOutput, Solver};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The last emitted (strictly improving) sequence, if any.
    pub best: Option<Solution>,

    /// Penalty of the working sequence when the loop stopped.
    pub final_penalty: u64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves; equals the number of emissions.
    pub improving_moves: usize,
}

impl SolveOutput for SaResult {
    fn best(&self) -> Option<&Solution> {
        self.best.as_ref()
    }
}

/// Executes the Simulated Annealing algorithm.
///
/// The start is the load-order round-robin placement, shuffled. Each
/// iteration swaps two distinct random positions of the working sequence.
/// A strictly better neighbor is emitted and adopted; any other neighbor is
/// adopted with probability `exp(-Δ / T)` but never emitted, so the last
/// emission is the answer even if the loop ends on a worse state.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA, seeding the generator from `config.seed` or from a fresh
    /// random seed.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`SaConfig::validate`].
    pub fn run<S: SolutionSink>(
        problem: &Problem,
        config: &SaConfig,
        sink: S,
    ) -> Result<SaResult, S::Error> {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::debug!(seed, "sa: seeded generator");
        let mut rng = StdRng::seed_from_u64(seed);
        Self::run_with_rng(problem, config, &mut rng, sink)
    }

    /// Runs SA with a caller-supplied random stream.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`SaConfig::validate`].
    pub fn run_with_rng<R: Rng, S: SolutionSink>(
        problem: &Problem,
        config: &SaConfig,
        rng: &mut R,
        mut sink: S,
    ) -> Result<SaResult, S::Error> {
        config.validate().expect("invalid SaConfig");
        let start = Instant::now();

        let mut current = load_order(problem);
        current.shuffle(rng);
        let len = current.len();

        let mut current_penalty = sequence_penalty(problem, &current);
        let mut neighbor = current.clone();
        let mut best: Option<Solution> = None;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        if len < 2 && temperature > config.min_temperature {
            tracing::warn!(len, "sa: fewer than two vehicles, no swap is possible");
        }

        while len >= 2 && temperature > config.min_temperature {
            neighbor.copy_from_slice(&current);
            let (i, j) = random_pair(len, rng);
            neighbor.swap(i, j);
            let neighbor_penalty = sequence_penalty(problem, &neighbor);

            if neighbor_penalty < current_penalty {
                let solution = Solution::new(
                    neighbor_penalty,
                    start.elapsed(),
                    problem.identifiers(&neighbor),
                );
                sink.emit(&solution)?;
                tracing::debug!(
                    penalty = neighbor_penalty,
                    iteration = iterations,
                    temperature,
                    "sa: improved sequence"
                );
                best = Some(solution);

                std::mem::swap(&mut current, &mut neighbor);
                current_penalty = neighbor_penalty;
                improving_moves += 1;
                accepted_moves += 1;
            } else {
                // Metropolis acceptance criterion
                let delta = (neighbor_penalty - current_penalty) as f64;
                let probability = (-delta / temperature).exp();
                if rng.random::<f64>() < probability {
                    std::mem::swap(&mut current, &mut neighbor);
                    current_penalty = neighbor_penalty;
                    accepted_moves += 1;
                }
            }

            iterations += 1;
            temperature *= config.alpha;
        }

        tracing::info!(
            penalty = ?best.as_ref().map(|s| s.penalty),
            final_penalty = current_penalty,
            iterations,
            accepted_moves,
            improving_moves,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "sa: cooling finished"
        );

        Ok(SaResult {
            best,
            final_penalty: current_penalty,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        })
    }
}

/// Two distinct positions in `0..len`, uniformly at random. `len >= 2`.
fn random_pair<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(0..len);
    let mut j = rng.random_range(0..len - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}

/// [`Solver`] adapter around [`SaRunner`].
#[derive(Debug, Clone, Default)]
pub struct AnnealingSolver {
    config: SaConfig,
}

impl AnnealingSolver {
    pub fn new(config: SaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }
}

impl Solver for AnnealingSolver {
    type Output = SaResult;

    fn name(&self) -> &'static str {
        "annealing"
    }

    fn solve<S: SolutionSink>(&self, problem: &Problem, sink: S) -> Result<SaResult, S::Error> {
        SaRunner::run(problem, &self.config, sink)
    }
}
