//! Evolution driver.
//!
//! [`GaRunner`] runs the fixed-length evolutionary loop:
//! initialization → (selection → PMX breeding → swap mutation → replace)
//! × `max_generations`.

use log::{debug, info, warn};

use super::config::GaConfig;
use super::operators::{pmx_crossover, swap_mutation};
use super::population::random_population;
use super::selection::select;
use super::types::Tour;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::random::create_rng;

/// Driver state, reported in debug logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Building the random initial population.
    Initializing,
    /// Running the given generation (0-based).
    Evolving(usize),
    /// Final population is ready.
    Done,
}

/// Length statistics of the population a generation started from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index (0-based).
    pub generation: usize,
    /// Shortest tour length.
    pub best_length: f64,
    /// Mean tour length.
    pub mean_length: f64,
    /// Longest tour length.
    pub worst_length: f64,
    /// Number of offspring that were mutated this generation.
    pub mutations: usize,
}

impl GenerationStats {
    fn from_lengths(generation: usize, lengths: &[f64]) -> Self {
        let best_length = lengths.iter().copied().fold(f64::INFINITY, f64::min);
        let worst_length = lengths.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean_length = if lengths.is_empty() {
            0.0
        } else {
            lengths.iter().sum::<f64>() / lengths.len() as f64
        };
        Self {
            generation,
            best_length,
            mean_length,
            worst_length,
            mutations: 0,
        }
    }
}

/// Outcome of a run: the final generation and its history.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Final population: elites first, then offspring.
    pub population: Vec<Tour>,

    /// Length of each tour of `population`, in the same order.
    pub lengths: Vec<f64>,

    /// Shortest tour of the final population.
    pub best: Tour,

    /// Length of `best`.
    pub best_length: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Seed the run was driven by.
    pub seed: u64,

    /// Per-generation statistics, one entry per generation.
    pub history: Vec<GenerationStats>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_tspga::distance::DistanceMatrix;
/// use u_tspga::ga::{GaConfig, GaRunner};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 4.0, 5.0],
///     vec![2.0, 4.0, 0.0, 6.0],
///     vec![3.0, 5.0, 6.0, 0.0],
/// ])
/// .expect("valid matrix");
/// let config = GaConfig::default()
///     .with_population_size(8)
///     .with_max_generations(10)
///     .with_n_cities(4)
///     .with_seed(42);
/// let result = GaRunner::run(&dm, &config).expect("run succeeds");
/// assert_eq!(result.population.len(), 8);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA.
    ///
    /// # Errors
    ///
    /// Any operator failure aborts the run and is returned as is.
    pub fn run(matrix: &DistanceMatrix, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_observer(matrix, config, |_| {})
    }

    /// Runs the GA, calling `observer` after every generation.
    pub fn run_with_observer<F>(
        matrix: &DistanceMatrix,
        config: &GaConfig,
        mut observer: F,
    ) -> Result<GaResult>
    where
        F: FnMut(&GenerationStats),
    {
        config.validate()?;
        if config.n_cities != matrix.size() {
            return Err(TspError::InvalidInput(format!(
                "configured for {} cities but the matrix covers {}",
                config.n_cities,
                matrix.size()
            )));
        }
        if config.population_size % 2 == 1 {
            warn!(
                "odd population size {}: breeding {} offspring from a pool of {}",
                config.population_size,
                config.offspring_count(),
                config.pool_size()
            );
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        info!(
            "starting GA: {} tours, {} generations, {} cities, seed {}",
            config.population_size, config.max_generations, config.n_cities, seed
        );

        debug!("phase {:?}", Phase::Initializing);
        let mut population = random_population(config.population_size, config.n_cities, &mut rng);
        let mut history = Vec::with_capacity(config.max_generations);

        for gen in 0..config.max_generations {
            debug!("phase {:?}", Phase::Evolving(gen));

            let outcome = select(&population, matrix, config, &mut rng)?;
            let mut stats = GenerationStats::from_lengths(gen, &outcome.lengths);

            let target = population.len() - outcome.elite.len();
            let mut offspring = Vec::with_capacity(target);
            while offspring.len() < target {
                offspring.push(pmx_crossover(&outcome.selected, &mut rng)?);
            }
            for child in &mut offspring {
                if swap_mutation(child, config.mutation_rate, &mut rng) {
                    stats.mutations += 1;
                }
            }

            let mut next_gen = outcome.elite;
            next_gen.extend(offspring);
            population = next_gen;

            debug!(
                "generation {}: best {:.2}, mean {:.2}, worst {:.2}, {} mutations",
                gen, stats.best_length, stats.mean_length, stats.worst_length, stats.mutations
            );
            observer(&stats);
            history.push(stats);
        }

        let lengths = population
            .iter()
            .map(|tour| matrix.tour_length(tour))
            .collect::<Result<Vec<f64>>>()?;
        let best_idx = lengths
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
            .ok_or_else(|| TspError::InvalidPopulation("final population is empty".into()))?;

        debug!("phase {:?}", Phase::Done);
        info!(
            "finished after {} generations: best length {:.2}",
            config.max_generations, lengths[best_idx]
        );

        Ok(GaResult {
            best: population[best_idx].clone(),
            best_length: lengths[best_idx],
            population,
            lengths,
            generations: config.max_generations,
            seed,
            history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Cities evenly spaced on a circle; the optimum is the polygon.
    fn circle_matrix(n: usize) -> DistanceMatrix {
        let points: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let a = std::f64::consts::TAU * i as f64 / n as f64;
                (100.0 * a.cos(), 100.0 * a.sin())
            })
            .collect();
        let rows = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if i == j {
                            0.0
                        } else {
                            let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                            (dx * dx + dy * dy).sqrt()
                        }
                    })
                    .collect()
            })
            .collect();
        DistanceMatrix::from_rows(rows).expect("valid")
    }

    fn polygon_length(n: usize) -> f64 {
        let side = 2.0 * 100.0 * (std::f64::consts::PI / n as f64).sin();
        side * n as f64
    }

    #[test]
    fn test_zero_generations_returns_initial_population() {
        let dm = circle_matrix(6);
        let config = GaConfig::default()
            .with_population_size(4)
            .with_max_generations(0)
            .with_n_cities(6)
            .with_seed(42);

        let result = GaRunner::run(&dm, &config).expect("valid");
        let expected = random_population(4, 6, &mut create_rng(42));

        assert_eq!(result.population, expected);
        assert_eq!(result.generations, 0);
        assert!(result.history.is_empty());
        for tour in &result.population {
            assert!(tour.is_permutation_of(6));
        }
    }

    #[test]
    fn test_population_size_constant() {
        let dm = circle_matrix(8);
        for pop_size in [4, 5, 7, 10] {
            let config = GaConfig::default()
                .with_population_size(pop_size)
                .with_max_generations(15)
                .with_n_cities(8)
                .with_seed(1);
            let result = GaRunner::run(&dm, &config).expect("valid");
            assert_eq!(result.population.len(), pop_size);
            assert_eq!(result.lengths.len(), pop_size);
            for tour in &result.population {
                assert!(tour.is_permutation_of(8));
            }
        }
    }

    #[test]
    fn test_best_never_worsens() {
        let dm = circle_matrix(10);
        let config = GaConfig::default()
            .with_population_size(30)
            .with_max_generations(40)
            .with_n_cities(10)
            .with_seed(42);
        let result = GaRunner::run(&dm, &config).expect("valid");

        assert_eq!(result.history.len(), 40);
        for window in result.history.windows(2) {
            assert!(
                window[1].best_length <= window[0].best_length + 1e-9,
                "elitism keeps the best tour: {} > {}",
                window[1].best_length,
                window[0].best_length
            );
        }
        let last = result.history.last().expect("40 generations");
        assert!(result.best_length <= last.best_length + 1e-9);
    }

    #[test]
    fn test_improves_on_circle() {
        let dm = circle_matrix(10);
        let config = GaConfig::default()
            .with_population_size(100)
            .with_max_generations(50)
            .with_n_cities(10)
            .with_seed(7);
        let result = GaRunner::run(&dm, &config).expect("valid");
        let first = &result.history[0];

        assert!(result.best_length <= first.best_length);
        assert!(result.best_length >= polygon_length(10) - 1e-6);
        assert!(
            (result.best_length - dm.tour_length(&result.best).expect("valid")).abs() < 1e-9
        );
    }

    #[test]
    fn test_seed_reproducible() {
        let dm = circle_matrix(9);
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(10)
            .with_n_cities(9)
            .with_seed(123);
        let a = GaRunner::run(&dm, &config).expect("valid");
        let b = GaRunner::run(&dm, &config).expect("valid");
        assert_eq!(a.population, b.population);
        assert_eq!(a.history, b.history);
        assert_eq!(a.seed, 123);
    }

    #[test]
    fn test_observer_sees_every_generation() {
        let dm = circle_matrix(6);
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(12)
            .with_n_cities(6)
            .with_seed(3);
        let mut seen = Vec::new();
        GaRunner::run_with_observer(&dm, &config, |s| seen.push(s.generation)).expect("valid");
        assert_eq!(seen, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_no_mutation_when_rate_zero() {
        let dm = circle_matrix(6);
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(5)
            .with_n_cities(6)
            .with_mutation_rate(0.0)
            .with_seed(3);
        let result = GaRunner::run(&dm, &config).expect("valid");
        assert!(result.history.iter().all(|s| s.mutations == 0));
    }

    #[test]
    fn test_pool_too_small() {
        let dm = circle_matrix(5);
        let config = GaConfig::default()
            .with_population_size(3)
            .with_max_generations(1)
            .with_n_cities(5)
            .with_seed(3);
        let err = GaRunner::run(&dm, &config).unwrap_err();
        assert!(matches!(err, TspError::InsufficientPool { pool: 1 }));
    }

    #[test]
    fn test_city_count_mismatch() {
        let dm = circle_matrix(5);
        let config = GaConfig::default().with_n_cities(6).with_seed(3);
        assert!(matches!(
            GaRunner::run(&dm, &config),
            Err(TspError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_invalid_config() {
        let dm = circle_matrix(5);
        let config = GaConfig::default().with_population_size(0).with_n_cities(5);
        assert!(matches!(
            GaRunner::run(&dm, &config),
            Err(TspError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_stats_from_lengths() {
        let stats = GenerationStats::from_lengths(3, &[4.0, 2.0, 6.0]);
        assert_eq!(stats.generation, 3);
        assert_eq!(stats.best_length, 2.0);
        assert_eq!(stats.worst_length, 6.0);
        assert!((stats.mean_length - 4.0).abs() < 1e-12);
    }
}
