//! Bounded "pick any element satisfying a predicate" sampling.

use rand::Rng;
use rand::prelude::IndexedRandom;

/// Picks a uniformly random index in `0..n` for which `eligible` holds.
///
/// Tries up to `attempts` random re-rolls first, then falls back to
/// choosing among all eligible indices. Returns `None` only when no index
/// is eligible.
pub(crate) fn sample_where<R, F>(
    n: usize,
    attempts: usize,
    rng: &mut R,
    eligible: F,
) -> Option<usize>
where
    R: Rng,
    F: Fn(usize) -> bool,
{
    if n == 0 {
        return None;
    }
    for _ in 0..attempts {
        let i = rng.random_range(0..n);
        if eligible(i) {
            return Some(i);
        }
    }
    let candidates: Vec<usize> = (0..n).filter(|&i| eligible(i)).collect();
    candidates.choose(rng).copied()
}
