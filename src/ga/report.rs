//! Human-readable report of the final generation.

use std::fmt;

use super::runner::GaResult;
use crate::data::CityTable;
use crate::error::{Result, TspError};

/// One tour rendered with city names.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedTour {
    /// City names in visiting order.
    pub cities: Vec<String>,
    /// Closed tour length.
    pub length: f64,
}

impl fmt::Display for NamedTour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, name) in self.cities.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{name}'")?;
        }
        write!(f, "] {:?}", self.length)
    }
}

/// Final population with city names, in population order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    tours: Vec<NamedTour>,
    best: usize,
}

impl Report {
    /// Maps every tour of `result` back to city names.
    ///
    /// Fails with [`TspError::InvalidInput`] if a city index has no name
    /// in `cities`.
    pub fn new(result: &GaResult, cities: &CityTable) -> Result<Self> {
        let tours = result
            .population
            .iter()
            .zip(&result.lengths)
            .map(|(tour, &length)| {
                let names = tour
                    .cities()
                    .iter()
                    .map(|&i| {
                        cities.name_of(i).map(str::to_string).ok_or_else(|| {
                            TspError::InvalidInput(format!("no city name for index {i}"))
                        })
                    })
                    .collect::<Result<Vec<String>>>()?;
                Ok(NamedTour {
                    cities: names,
                    length,
                })
            })
            .collect::<Result<Vec<NamedTour>>>()?;

        let best = tours
            .iter()
            .enumerate()
            .min_by(|a, b| {
                a.1.length
                    .partial_cmp(&b.1.length)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
            .unwrap_or(0);

        Ok(Self { tours, best })
    }

    /// All tours, in population order.
    pub fn tours(&self) -> &[NamedTour] {
        &self.tours
    }

    /// The shortest tour, if the population was not empty.
    pub fn best(&self) -> Option<&NamedTour> {
        self.tours.get(self.best)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Last gen: final tours")?;
        for tour in &self.tours {
            writeln!(f, "{tour}")?;
        }
        Ok(())
    }
}
