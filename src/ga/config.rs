//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of a run. It is passed explicitly to
//! each operator and to the driver.

use crate::error::{Result, TspError};

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_tspga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 50);
/// assert_eq!(config.n_cities, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tspga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_max_generations(200)
///     .with_n_cities(24)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in every generation.
    ///
    /// Half (rounded down) survives as elites and half forms the parent
    /// pool, so evolving needs at least 4 tours.
    pub population_size: usize,

    /// Exact number of generations to run. Zero returns the initial
    /// population unchanged.
    pub max_generations: usize,

    /// Number of leading cities of the dataset to route through.
    pub n_cities: usize,

    /// Probability that an offspring gets a two-position swap (0.0–1.0).
    pub mutation_rate: f64,

    /// Constant `K` in `fitness = K / length`.
    pub fitness_scale: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed, which the runner logs.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 50,
            n_cities: 10,
            mutation_rate: 0.6,
            fitness_scale: 10_000.0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the number of cities.
    pub fn with_n_cities(mut self, n: usize) -> Self {
        self.n_cities = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the fitness scale `K`.
    pub fn with_fitness_scale(mut self, k: f64) -> Self {
        self.fitness_scale = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of tours carried over unchanged each generation.
    pub fn elite_count(&self) -> usize {
        self.population_size / 2
    }

    /// Number of tours drawn by roulette into the parent pool.
    pub fn pool_size(&self) -> usize {
        self.population_size / 2
    }

    /// Number of offspring bred each generation.
    ///
    /// Fills the population back to `population_size`, which is one more
    /// than the pool size when `population_size` is odd.
    pub fn offspring_count(&self) -> usize {
        self.population_size - self.elite_count()
    }

    /// Validates the configuration.
    ///
    /// A pool too small for crossover is not rejected here; it surfaces
    /// as [`TspError::InsufficientPool`] on the first generation.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(TspError::InvalidConfig(
                "population_size must be positive".into(),
            ));
        }
        if self.n_cities == 0 {
            return Err(TspError::InvalidConfig("n_cities must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::InvalidConfig(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !self.fitness_scale.is_finite() || self.fitness_scale <= 0.0 {
            return Err(TspError::InvalidConfig(format!(
                "fitness_scale must be finite and positive, got {}",
                self.fitness_scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 50);
        assert_eq!(config.n_cities, 10);
        assert!((config.mutation_rate - 0.6).abs() < 1e-10);
        assert!((config.fitness_scale - 10_000.0).abs() < 1e-10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(5)
            .with_n_cities(6)
            .with_mutation_rate(0.25)
            .with_fitness_scale(1.0)
            .with_seed(42);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.max_generations, 5);
        assert_eq!(config.n_cities, 6);
        assert!((config.mutation_rate - 0.25).abs() < 1e-10);
        assert!((config.fitness_scale - 1.0).abs() < 1e-10);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_mutation_rate() {
        assert_eq!(GaConfig::default().with_mutation_rate(2.0).mutation_rate, 1.0);
        assert_eq!(GaConfig::default().with_mutation_rate(-1.0).mutation_rate, 0.0);
    }

    #[test]
    fn test_split_counts_even() {
        let config = GaConfig::default().with_population_size(10);
        assert_eq!(config.elite_count(), 5);
        assert_eq!(config.pool_size(), 5);
        assert_eq!(config.offspring_count(), 5);
    }

    #[test]
    fn test_split_counts_odd() {
        let config = GaConfig::default().with_population_size(7);
        assert_eq!(config.elite_count(), 3);
        assert_eq!(config.pool_size(), 3);
        assert_eq!(config.offspring_count(), 4);
    }

    #[test]
    fn test_validate_zero_population() {
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(config.validate(), Err(TspError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_zero_cities() {
        assert!(GaConfig::default().with_n_cities(0).validate().is_err());
    }

    #[test]
    fn test_validate_fitness_scale() {
        assert!(GaConfig::default().with_fitness_scale(0.0).validate().is_err());
        assert!(GaConfig::default()
            .with_fitness_scale(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_raw_mutation_rate() {
        let config = GaConfig {
            mutation_rate: 1.5,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_generations_is_valid() {
        assert!(GaConfig::default().with_max_generations(0).validate().is_ok());
    }
}
