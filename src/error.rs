//! Error types shared by every stage of a run.
//!
//! All failures are fatal to the run: loading, selection, crossover and
//! the driver return [`TspError`] and the caller aborts.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;

/// Errors raised while loading data or evolving tours.
#[derive(Error, Debug)]
pub enum TspError {
    /// Malformed distance table or city count out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Empty population or non-positive total fitness reached selection.
    #[error("invalid population: {0}")]
    InvalidPopulation(String),

    /// Crossover needs at least two parents.
    #[error("insufficient parent pool: need at least 2 tours, got {pool}")]
    InsufficientPool { pool: usize },

    /// A tour violates the permutation invariant.
    #[error("degenerate tour: {0}")]
    DegenerateTour(String),

    /// Configuration parameter out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failure reading the dataset.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
