//! Survivor selection: elitism plus fitness-proportionate sampling.
//!
//! Each generation the population is scored by `fitness = K / length`
//! (higher is better). Two sets are drawn independently from the full
//! population:
//!
//! - **Elite**: the best `⌊n/2⌋` tours, carried over unchanged.
//! - **Selected**: `⌊n/2⌋` tours drawn by roulette wheel *without
//!   replacement*, used as the crossover parent pool.
//!
//! A tour may appear in both sets.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use super::config::GaConfig;
use super::types::Tour;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};

/// Fitness of a tour of the given length: `scale / length`.
///
/// A zero-length tour has infinite fitness, which selection rejects.
pub fn fitness(length: f64, scale: f64) -> f64 {
    scale / length
}

/// Result of one selection round.
#[derive(Debug, Clone)]
pub struct SelectionOutcome {
    /// Parent pool drawn by roulette wheel, in draw order.
    pub selected: Vec<Tour>,
    /// Best tours by fitness, best first.
    pub elite: Vec<Tour>,
    /// Length of every tour of the input population, in population order.
    pub lengths: Vec<f64>,
}

/// Runs elitism and roulette selection over `population`.
///
/// Both output sets hold `⌊population.len() / 2⌋` tours.
///
/// # Errors
///
/// - [`TspError::InvalidPopulation`] if the population is empty or the
///   total fitness is not a finite positive number.
/// - [`TspError::DegenerateTour`] if a tour is not a permutation of the
///   matrix's cities.
pub fn select<R: Rng>(
    population: &[Tour],
    matrix: &DistanceMatrix,
    config: &GaConfig,
    rng: &mut R,
) -> Result<SelectionOutcome> {
    if population.is_empty() {
        return Err(TspError::InvalidPopulation("population is empty".into()));
    }

    let lengths = population
        .iter()
        .map(|tour| matrix.tour_length(tour))
        .collect::<Result<Vec<f64>>>()?;
    let fitnesses: Vec<f64> = lengths
        .iter()
        .map(|&len| fitness(len, config.fitness_scale))
        .collect();

    let total: f64 = fitnesses.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(TspError::InvalidPopulation(format!(
            "total fitness must be finite and positive, got {total}"
        )));
    }

    let count = population.len() / 2;

    let elite = elite_indices(&fitnesses, count)
        .into_iter()
        .map(|i| population[i].clone())
        .collect();

    let selected = roulette_without_replacement(&fitnesses, count, rng)?
        .into_iter()
        .map(|i| population[i].clone())
        .collect();

    Ok(SelectionOutcome {
        selected,
        elite,
        lengths,
    })
}

/// Indices of the `count` fittest entries, best first.
///
/// The sort is stable: equal fitness keeps population order.
pub fn elite_indices(fitnesses: &[f64], count: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitnesses.len()).collect();
    order.sort_by(|&a, &b| {
        fitnesses[b]
            .partial_cmp(&fitnesses[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order.truncate(count);
    order
}

/// Draws `count` distinct indices, each draw proportional to the fitness
/// share among the entries not yet drawn.
///
/// # Errors
///
/// [`TspError::InvalidPopulation`] if fewer than `count` entries exist or
/// the remaining fitness sum is not positive.
pub fn roulette_without_replacement<R: Rng>(
    fitnesses: &[f64],
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let mut wheel: Vec<(usize, f64)> = fitnesses.iter().copied().enumerate().collect();
    let mut picked = Vec::with_capacity(count);

    for draw in 0..count {
        if wheel.is_empty() {
            return Err(TspError::InvalidPopulation(format!(
                "roulette wheel exhausted after {draw} of {count} draws"
            )));
        }
        let total: f64 = wheel.iter().map(|&(_, f)| f).sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(TspError::InvalidPopulation(format!(
                "remaining fitness must be finite and positive, got {total}"
            )));
        }

        let threshold = rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        let mut slot = wheel.len() - 1; // floating-point fallback
        for (i, &(_, f)) in wheel.iter().enumerate() {
            cumulative += f;
            if cumulative > threshold {
                slot = i;
                break;
            }
        }

        let (index, _) = wheel.remove(slot);
        picked.push(index);
    }

    Ok(picked)
}
