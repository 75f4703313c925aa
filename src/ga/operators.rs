//! Permutation operators: PMX crossover and swap mutation.
//!
//! Both keep the permutation invariant of [`Tour`]: offspring and mutants
//! contain every city exactly once.
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::index::sample;
use rand::Rng;

use super::types::Tour;
use crate::error::{Result, TspError};

// ============================================================================
// Crossover
// ============================================================================

/// Partially Mapped Crossover (PMX) producing one offspring from `pool`.
///
/// # Algorithm (Goldberg & Lingle, 1985)
///
/// 1. Pick two distinct parents `p1`, `p2` from the pool
/// 2. Pick two distinct cut points and order them as `c1 < c2`
/// 3. Copy `p1[c1..c2]` into the child at the same positions
/// 4. Place each value of `p2[c1..c2]` missing from the child by following
///    the position mapping through `p2` until a free slot is found
/// 5. Fill remaining slots from `p2`
///
/// Cut points are drawn from `0..pool.len()`, not from the tour length,
/// and are clamped to the tour length when the pool is larger.
///
/// # Errors
///
/// - [`TspError::InsufficientPool`] if the pool holds fewer than 2 tours.
/// - [`TspError::DegenerateTour`] if the parents are not permutations of
///   the same city set.
pub fn pmx_crossover<R: Rng>(pool: &[Tour], rng: &mut R) -> Result<Tour> {
    if pool.len() < 2 {
        return Err(TspError::InsufficientPool { pool: pool.len() });
    }

    let parents = sample(rng, pool.len(), 2);
    let p1 = &pool[parents.index(0)];
    let p2 = &pool[parents.index(1)];

    let (c1, c2) = crossover_points(pool.len(), p1.len(), rng);
    pmx_child(p1, p2, c1, c2)
}

/// Two distinct points from `0..range`, ordered and clamped to `tour_len`.
///
/// `range` must be at least 2.
fn crossover_points<R: Rng>(range: usize, tour_len: usize, rng: &mut R) -> (usize, usize) {
    let points = sample(rng, range, 2);
    let (a, b) = (points.index(0), points.index(1));
    let (c1, c2) = if a < b { (a, b) } else { (b, a) };
    (c1.min(tour_len), c2.min(tour_len))
}

/// Builds the PMX child of `p1` and `p2` for the segment `c1..c2`.
///
/// # Errors
///
/// [`TspError::DegenerateTour`] if either parent is not a permutation of
/// `0..p1.len()`, or the segment lies outside the tour.
pub fn pmx_child(p1: &Tour, p2: &Tour, c1: usize, c2: usize) -> Result<Tour> {
    let n = p1.len();
    p1.validate(n)?;
    p2.validate(n)?;
    if c1 > c2 || c2 > n {
        return Err(TspError::DegenerateTour(format!(
            "crossover segment {c1}..{c2} outside tour of length {n}"
        )));
    }
    let (p1, p2) = (p1.cities(), p2.cities());

    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut from_p1 = vec![false; n];
    for i in c1..c2 {
        child[i] = Some(p1[i]);
        from_p1[p1[i]] = true;
    }

    let mut pos_in_p2 = vec![0usize; n];
    for (pos, &city) in p2.iter().enumerate() {
        pos_in_p2[city] = pos;
    }

    // Placed in ascending city order.
    let mut pending: Vec<usize> = p2[c1..c2]
        .iter()
        .copied()
        .filter(|&city| !from_p1[city])
        .collect();
    pending.sort_unstable();

    for city in pending {
        let mut pos = pos_in_p2[city];
        let mut steps = 0;
        while let Some(occupant) = child[pos] {
            steps += 1;
            if steps > n {
                return Err(TspError::DegenerateTour(format!(
                    "PMX mapping chain for city {city} did not reach a free slot"
                )));
            }
            pos = pos_in_p2[occupant];
        }
        child[pos] = Some(city);
    }

    let cities = child
        .into_iter()
        .enumerate()
        .map(|(i, slot)| slot.unwrap_or(p2[i]))
        .collect();
    Tour::new(cities, n)
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: with probability `rate`, exchange two distinct random
/// positions in place.
///
/// Returns `true` if a swap happened. Tours with fewer than two cities are
/// never changed. A non-finite `rate` is treated as 0.
pub fn swap_mutation<R: Rng>(tour: &mut Tour, rate: f64, rng: &mut R) -> bool {
    let rate = if rate.is_finite() { rate.clamp(0.0, 1.0) } else { 0.0 };
    if !rng.random_bool(rate) {
        return false;
    }
    let n = tour.len();
    if n < 2 {
        return false;
    }
    let picks = sample(rng, n, 2);
    tour.cities_mut().swap(picks.index(0), picks.index(1));
    true
}

// ============================================================================
// Tests
// ============================================================================
