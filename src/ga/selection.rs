//! Parent selection and best-individual extraction.
//!
//! Roster fitness values are penalties (≤ 0), so a textbook roulette wheel
//! has no meaningful draw range. [`Selection::Roulette`] shifts every score
//! by `|min| + 1` to make the weights strictly positive.
//! [`Selection::LegacyRoulette`] keeps the unshifted mechanics: an integer
//! draw between 0 and the score total, walked by subtracting scores. When
//! every score is negative the remainder only grows during the walk, so the
//! first individual is always returned.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Parent selection strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Fitness-proportionate selection over shifted, strictly positive weights.
    #[default]
    Roulette,
    /// Unshifted draw-and-subtract walk with first-individual fallback.
    LegacyRoulette,
}

impl Selection {
    /// Selects one parent and returns its index in `scores`.
    ///
    /// `scores` must be non-empty; the returned index is always in range.
    pub fn select<R: Rng>(&self, scores: &[f64], rng: &mut R) -> usize {
        match self {
            Selection::Roulette => shifted_roulette(scores, rng),
            Selection::LegacyRoulette => legacy_roulette(scores, rng),
        }
    }
}

fn shifted_roulette<R: Rng>(scores: &[f64], rng: &mut R) -> usize {
    if scores.len() < 2 {
        return 0;
    }
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let offset = min.abs() + 1.0;
    let total: f64 = scores.iter().map(|s| s + offset).sum();
    if !total.is_finite() || total <= 0.0 {
        return 0;
    }

    let draw = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, s) in scores.iter().enumerate() {
        cumulative += s + offset;
        if draw < cumulative {
            return i;
        }
    }
    scores.len() - 1
}

fn legacy_roulette<R: Rng>(scores: &[f64], rng: &mut R) -> usize {
    let total = scores.iter().sum::<f64>().trunc() as i64;
    let (lo, hi) = if total < 0 { (total, 0) } else { (0, total) };
    let mut remainder = rng.random_range(lo..=hi) as f64;

    for (i, s) in scores.iter().enumerate() {
        remainder -= s;
        if remainder <= 0.0 {
            return i;
        }
    }
    0
}

/// Index of the highest score; ties go to the first occurrence.
///
/// Returns `None` for an empty slice.
pub fn best_index(scores: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &s) in scores.iter().enumerate() {
        match best {
            Some((_, b)) if s <= b => {}
            _ => best = Some((i, s)),
        }
    }
    best.map(|(i, _)| i)
}
