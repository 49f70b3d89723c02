//! Two options, two models, four cars: alternating is feasible.

use carseq::exhaustive::ExhaustiveSolver;
use carseq::greedy::GreedySolver;
use carseq::io::InstanceLoader;
use carseq::model::{MemorySink, ModelId, Problem};
use carseq::sa::{AnnealingSolver, SaConfig};
use carseq::solver::{SolveOutput, Solver};

const INSTANCE: &str = "\
4 2 2
1 2
2 3
0 2 1 0
1 2 0 1
";

fn problem() -> Problem {
    InstanceLoader::new().from_str(INSTANCE).unwrap()
}

fn final_penalty<V: Solver>(solver: &V, problem: &Problem) -> Option<u64> {
    let mut sink = MemorySink::new();
    let output = solver.solve(problem, &mut sink).unwrap();
    assert_eq!(output.best(), sink.last());
    if let Some(best) = output.best() {
        assert_eq!(best.occurrences(ModelId::new(0)), 2);
        assert_eq!(best.occurrences(ModelId::new(1)), 2);
    }
    output.best().map(|s| s.penalty)
}

#[test]
fn exhaustive_finds_zero() {
    assert_eq!(final_penalty(&ExhaustiveSolver::new(), &problem()), Some(0));
}

#[test]
fn greedy_finds_zero() {
    assert_eq!(final_penalty(&GreedySolver::new(), &problem()), Some(0));
}

#[test]
fn annealing_reports_zero_or_nothing() {
    // A shuffled start may already be optimal, in which case nothing
    // strictly improves and nothing is emitted.
    for seed in 0..5 {
        let solver = AnnealingSolver::new(SaConfig::default().with_seed(seed));
        let penalty = final_penalty(&solver, &problem());
        assert!(matches!(penalty, None | Some(0)), "seed {seed}: {penalty:?}");
    }
}

#[test]
fn solvers_have_names() {
    assert_eq!(ExhaustiveSolver::new().name(), "exhaustive");
    assert_eq!(GreedySolver::new().name(), "greedy");
    assert_eq!(AnnealingSolver::default().name(), "annealing");
}
