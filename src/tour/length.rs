//! Closed-tour length evaluation and permutation helpers.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{Point, Tour};

/// Total Euclidean length of the closed tour.
///
/// Sums the segment lengths between consecutive tour positions, including
/// the wrap-around segment from the last position back to the first. Pure
/// and O(N); this is the hot path of the optimizer (called once per
/// proposed neighbor).
///
/// A tour of fewer than two positions has length 0.0.
pub fn tour_length(points: &[Point], tour: &[usize]) -> f64 {
    let n = tour.len();
    (0..n)
        .map(|k| points[tour[k]].distance(points[tour[(k + 1) % n]]))
        .sum()
}

/// Uniformly random permutation of `0..n`.
pub fn random_tour<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Tour {
    let mut tour: Tour = (0..n).collect();
    tour.shuffle(rng);
    tour
}

/// Whether `tour` contains each index in `0..tour.len()` exactly once.
pub fn is_permutation(tour: &[usize]) -> bool {
    let n = tour.len();
    let mut seen = vec![false; n];
    for &idx in tour {
        if idx >= n || seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    true
}
