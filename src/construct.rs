//! Round-robin supply placement.
//!
//! Position `p` takes the model at rank `p mod K`; when that model is out of
//! stock the ranks after it are scanned cyclically for the first model that
//! still has vehicles left. The result has the right multiplicities and no
//! regard for the window constraints.

use crate::model::Problem;

/// Builds a sequence of model indices by cycling through `order`.
///
/// `order` lists model indices by rank. Placement stops early if every
/// model in `order` runs out before `problem.total_vehicles()` positions
/// are filled, so the result may be shorter than the line on inconsistent
/// input.
pub fn round_robin(problem: &Problem, order: &[usize]) -> Vec<usize> {
    let total = problem.total_vehicles();
    let ranks = order.len();
    let mut used = vec![0usize; problem.model_count()];
    let mut sequence = Vec::with_capacity(total);

    for position in 0..total {
        let next = (0..ranks)
            .map(|offset| order[(position + offset) % ranks])
            .find(|&m| used[m] < problem.model(m).count());

        match next {
            Some(m) => {
                used[m] += 1;
                sequence.push(m);
            }
            None => break,
        }
    }

    sequence
}

/// Round-robin placement over the models in load order.
pub fn load_order(problem: &Problem) -> Vec<usize> {
    let order: Vec<usize> = (0..problem.model_count()).collect();
    round_robin(problem, &order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Model, ModelId, OptionConstraint};

    fn problem(counts: &[usize]) -> Problem {
        let total = counts.iter().sum();
        let models = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| Model::new(ModelId::new(i), c, vec![false]))
            .collect();
        Problem::new(total, vec![OptionConstraint::new(1, 1)], models)
    }

    #[test]
    fn test_cycles_through_models() {
        let p = problem(&[2, 2, 2]);
        assert_eq!(load_order(&p), vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_skips_exhausted_models() {
        // Position 3 wants rank 0 (empty) and falls through to rank 1.
        let p = problem(&[1, 3, 1]);
        assert_eq!(load_order(&p), vec![0, 1, 2, 1, 1]);
    }

    #[test]
    fn test_custom_order() {
        let p = problem(&[1, 2]);
        assert_eq!(round_robin(&p, &[1, 0]), vec![1, 0, 1]);
    }

    #[test]
    fn test_short_supply_stops() {
        let p = Problem::new(
            5,
            vec![OptionConstraint::new(1, 1)],
            vec![Model::new(ModelId::new(0), 2, vec![true])],
        );
        assert_eq!(load_order(&p), vec![0, 0]);
    }

    #[test]
    fn test_no_models() {
        let p = Problem::new(3, Vec::new(), Vec::new());
        assert!(load_order(&p).is_empty());
    }
}
