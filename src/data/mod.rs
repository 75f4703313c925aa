//! City dataset loading.
//!
//! Reads the `;`-delimited name/distance table and turns its leading
//! `n_cities` block into a [`CityTable`] the solver works on.

mod loader;

pub use loader::{CityTable, DistanceTable};
