//! Genetic-algorithm solver for the symmetric Traveling Salesman Problem.
//!
//! Evolves a fixed-size population of tours over a fixed number of
//! generations:
//!
//! - **Selection**: fitness-proportionate (roulette wheel) sampling without
//!   replacement, plus elitism of the best half.
//! - **Crossover**: Partially Mapped Crossover (PMX).
//! - **Mutation**: probabilistic two-city swap.
//!
//! # Architecture
//!
//! - [`data`]: loads the `;`-delimited city/distance table
//! - [`distance`]: the immutable symmetric distance matrix and tour lengths
//! - [`ga`]: tours, operators, configuration and the evolution driver
//! - [`random`]: seeded random number helpers
//! - [`error`]: the crate-wide error type
//!
//! # Example
//!
//! ```
//! use u_tspga::data::DistanceTable;
//! use u_tspga::ga::{GaConfig, GaRunner, Report};
//!
//! let text = "A;B;C;D\n0;1;2;3\n1;0;4;5\n2;4;0;6\n3;5;6;0\n";
//! let cities = DistanceTable::parse(text)?.select(4)?;
//! let config = GaConfig::default()
//!     .with_population_size(10)
//!     .with_max_generations(5)
//!     .with_n_cities(4)
//!     .with_seed(42);
//! let result = GaRunner::run(cities.matrix(), &config)?;
//! let report = Report::new(&result, &cities)?;
//! assert_eq!(report.tours().len(), 10);
//! # Ok::<(), u_tspga::error::TspError>(())
//! ```

pub mod data;
pub mod distance;
pub mod error;
pub mod ga;
pub mod random;

pub use error::{Result, TspError};
