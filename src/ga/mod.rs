//! Genetic algorithm for the symmetric TSP.
//!
//! Tours are permutations of city indices. Each generation keeps the best
//! half unchanged (elitism), draws the other half by roulette wheel as a
//! parent pool, and refills the population with PMX offspring that may
//! receive a two-city swap.
//!
//! # Key Types
//!
//! - [`Tour`]: A validated permutation of city indices
//! - [`GaConfig`]: Run parameters (population size, generations, rates, seed)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final population with per-generation statistics
//! - [`Report`]: Final population rendered with city names
//!
//! # Submodules
//!
//! - [`operators`]: PMX crossover and swap mutation
//! - [`selection`]: Elitism and roulette-wheel sampling without replacement
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod population;
mod report;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use population::random_population;
pub use report::{NamedTour, Report};
pub use runner::{GaResult, GaRunner, GenerationStats, Phase};
pub use selection::SelectionOutcome;
pub use types::Tour;
