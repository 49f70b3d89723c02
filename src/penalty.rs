//! Sliding-window penalty evaluation.
//!
//! For every option `s` with constraint `(c, n)`, each window of `n`
//! consecutive positions costs `max(0, requirers − c)`. Windows clipped by
//! the start of the line (`[0, e]` for `e < n − 1`) and by its end
//! (`[i, C − 1]` for `C − n + 1 ≤ i < C − 1`) are charged as well.
//!
//! [`penalty_at`] charges only the windows that close at one index, so a
//! prefix can be scored position by position while it is being built. That
//! is what lets the branch-and-bound search prune partial sequences.
//!
//! Sequences are slices of model *indices* into [`Problem::models`].
//! Options with a zero-width window never contribute.

use crate::model::{OptionConstraint, Problem};

/// Number of vehicles in `sequence[from..=to]` that require `option`.
#[inline]
fn requirers(
    problem: &Problem,
    sequence: &[usize],
    option: usize,
    from: usize,
    to: usize,
) -> usize {
    sequence[from..=to]
        .iter()
        .filter(|&&m| problem.requires(m, option))
        .count()
}

/// First start index of a trailing window that is not already charged as a
/// leading or full window.
#[inline]
fn first_trailing_start(len: usize, c: &OptionConstraint) -> usize {
    (len + 1).saturating_sub(c.window()).max(1)
}

/// Adds to `prior` the penalty of every window that ends at index `k`.
///
/// `sequence[0..=k]` must be assigned. When `k` is the last index of the
/// line (`problem.total_vehicles() − 1`) the trailing truncated windows are
/// charged too. Calling this for `k = 0..C` in order, threading the result
/// into `prior`, yields the penalty of the whole sequence.
pub fn penalty_at(problem: &Problem, sequence: &[usize], k: usize, prior: u64) -> u64 {
    let is_last = k + 1 == problem.total_vehicles();
    let mut added = 0u64;

    for (s, c) in problem.options().iter().enumerate() {
        let n = c.window();
        if n == 0 {
            continue;
        }

        let from = if k + 1 < n { 0 } else { k + 1 - n };
        added += c.excess(requirers(problem, sequence, s, from, k));

        if is_last {
            for start in first_trailing_start(k + 1, c)..k {
                added += c.excess(requirers(problem, sequence, s, start, k));
            }
        }
    }

    prior + added
}

/// Penalty of a complete sequence, accumulated index by index.
///
/// Only the first `problem.total_vehicles()` positions are considered.
pub fn sequence_penalty(problem: &Problem, sequence: &[usize]) -> u64 {
    let len = sequence.len().min(problem.total_vehicles());
    (0..len).fold(0, |acc, k| penalty_at(problem, sequence, k, acc))
}

/// Penalty of a complete sequence by enumerating every window directly.
///
/// Independent of [`penalty_at`]; the two must always agree for sequences
/// of length `problem.total_vehicles()`.
pub fn direct_penalty(problem: &Problem, sequence: &[usize]) -> u64 {
    let len = sequence.len();
    let mut total = 0u64;
    if len == 0 {
        return 0;
    }

    for (s, c) in problem.options().iter().enumerate() {
        let n = c.window();
        if n == 0 {
            continue;
        }

        // Leading windows [0, e].
        for end in 0..(n - 1).min(len) {
            total += c.excess(requirers(problem, sequence, s, 0, end));
        }

        // Full windows [j, j + n - 1].
        if len >= n {
            for start in 0..=(len - n) {
                total += c.excess(requirers(problem, sequence, s, start, start + n - 1));
            }
        }

        // Trailing windows [i, len - 1], down to width two.
        for start in first_trailing_start(len, c)..len - 1 {
            total += c.excess(requirers(problem, sequence, s, start, len - 1));
        }
    }

    total
}
