//! Criterion benchmarks for the penalty evaluator and the three solvers.
//!
//! Uses synthetic instances built from a fixed pattern so runs are
//! comparable across machines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use carseq::construct::load_order;
use carseq::exhaustive::ExhaustiveSolver;
use carseq::greedy::GreedySolver;
use carseq::model::{MemorySink, Model, ModelId, OptionConstraint, Problem};
use carseq::penalty::sequence_penalty;
use carseq::sa::{SaConfig, SaRunner};
use carseq::solver::Solver;

// ===========================================================================
// Synthetic instances
// ===========================================================================

/// `models` classes over five options with the classic 1/2, 2/3, 1/3, 2/5,
/// 1/5 ratios; model `i` requires option `s` when bit `s` of `i` is set.
fn synthetic(models: usize, per_model: usize) -> Problem {
    let options = vec![
        OptionConstraint::new(1, 2),
        OptionConstraint::new(2, 3),
        OptionConstraint::new(1, 3),
        OptionConstraint::new(2, 5),
        OptionConstraint::new(1, 5),
    ];
    let models: Vec<Model> = (0..models)
        .map(|i| {
            let requires = (0..options.len()).map(|s| (i >> s) & 1 == 1).collect();
            Model::new(ModelId::new(i), per_model, requires)
        })
        .collect();
    Problem::new(models.len() * per_model, options, models)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_penalty(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_penalty");

    for &(models, per_model) in &[(4usize, 5usize), (8, 10), (16, 20)] {
        let problem = synthetic(models, per_model);
        let sequence = load_order(&problem);
        group.bench_with_input(
            BenchmarkId::from_parameter(problem.total_vehicles()),
            &(problem, sequence),
            |b, (p, s)| b.iter(|| black_box(sequence_penalty(black_box(p), black_box(s)))),
        );
    }
    group.finish();
}

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive");
    group.sample_size(10);

    for &(models, per_model) in &[(3usize, 2usize), (4, 2), (3, 3)] {
        let problem = synthetic(models, per_model);
        group.bench_with_input(
            BenchmarkId::new(format!("k{models}_x{per_model}"), problem.total_vehicles()),
            &problem,
            |b, p| {
                b.iter(|| {
                    let result = ExhaustiveSolver::new().solve(black_box(p), MemorySink::new());
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");

    for &(models, per_model) in &[(8usize, 10usize), (16, 20), (32, 30)] {
        let problem = synthetic(models, per_model);
        let solver = GreedySolver::new();
        group.bench_with_input(
            BenchmarkId::from_parameter(problem.total_vehicles()),
            &problem,
            |b, p| b.iter(|| black_box(solver.solve(black_box(p), MemorySink::new()))),
        );
    }
    group.finish();
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa");
    group.sample_size(10);

    for &(models, per_model) in &[(4usize, 5usize), (8, 10)] {
        let problem = synthetic(models, per_model);
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(0.1)
            .with_alpha(0.999)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(problem.total_vehicles()),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = SaRunner::run(black_box(p), black_box(c), MemorySink::new());
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_penalty, bench_exhaustive, bench_greedy, bench_sa);
criterion_main!(benches);
