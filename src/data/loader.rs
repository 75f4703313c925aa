//! Parser for the city distance table.
//!
//! # Format
//!
//! ```text
//! "Barcelona";"Belgrade";"Berlin"
//! 0.00;1528.13;1497.61
//! 1528.13;0.00;999.25
//! 1497.61;999.25;0.00
//! ```
//!
//! The first row names the cities; row `i` after it holds the distances
//! from city `i` to every city, in header order. Fields may be wrapped in
//! double quotes, in which case they may contain `;` and `""` escapes.
//! Blank lines are ignored.

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};

/// The full dataset as read from disk, before any city count is applied.
///
/// Only shape and numeric syntax are checked here; matrix invariants are
/// checked on the block actually used, in [`DistanceTable::select`].
#[derive(Debug, Clone)]
pub struct DistanceTable {
    names: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DistanceTable {
    /// Reads and parses a table from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let table = Self::parse(&text)?;
        debug!(
            "loaded {} cities from {}",
            table.names.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parses a table from its textual form.
    pub fn parse(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .quote(b'"')
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let names: Vec<String> = reader
            .headers()
            .map_err(|e| TspError::InvalidInput(format!("failed to read city names: {e}")))?
            .iter()
            .map(str::to_string)
            .collect();
        if names.is_empty() {
            return Err(TspError::InvalidInput("distance table is empty".into()));
        }

        let mut seen = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(TspError::InvalidInput(format!(
                    "city name in column {i} is empty"
                )));
            }
            if seen.insert(name.as_str(), i).is_some() {
                return Err(TspError::InvalidInput(format!(
                    "duplicate city name {name:?}"
                )));
            }
        }

        let mut rows = Vec::with_capacity(names.len());
        for record in reader.records() {
            let record = record
                .map_err(|e| TspError::InvalidInput(format!("failed to read row: {e}")))?;
            let line_no = record.position().map_or(0, |p| p.line());
            let row = record
                .iter()
                .map(|f| {
                    f.parse::<f64>().map_err(|_| {
                        TspError::InvalidInput(format!("line {line_no}: {f:?} is not a number"))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            if row.len() != names.len() {
                return Err(TspError::InvalidInput(format!(
                    "line {line_no}: expected {} distances, got {}",
                    names.len(),
                    row.len()
                )));
            }
            rows.push(row);
        }

        if rows.len() != names.len() {
            return Err(TspError::InvalidInput(format!(
                "expected {} distance rows, got {}",
                names.len(),
                rows.len()
            )));
        }

        Ok(Self { names, rows })
    }

    /// Number of cities available.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the table names no city.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Builds the working table for the first `n_cities` cities.
    ///
    /// Fails with [`TspError::InvalidInput`] if `n_cities` is zero or
    /// larger than the table, or if the selected block is not a valid
    /// symmetric distance matrix.
    pub fn select(&self, n_cities: usize) -> Result<CityTable> {
        if n_cities == 0 {
            return Err(TspError::InvalidInput("n_cities must be positive".into()));
        }
        if n_cities > self.len() {
            return Err(TspError::InvalidInput(format!(
                "requested {n_cities} cities but the table has only {}",
                self.len()
            )));
        }
        let rows = self.rows[..n_cities]
            .iter()
            .map(|row| row[..n_cities].to_vec())
            .collect();
        let matrix = DistanceMatrix::from_rows(rows)?;
        CityTable::new(self.names[..n_cities].to_vec(), matrix)
    }
}

/// City names, their indices, and the distances between them.
#[derive(Debug, Clone)]
pub struct CityTable {
    names: Vec<String>,
    index: HashMap<String, usize>,
    matrix: DistanceMatrix,
}

impl CityTable {
    /// Pairs `names[i]` with row/column `i` of `matrix`.
    pub fn new(names: Vec<String>, matrix: DistanceMatrix) -> Result<Self> {
        if names.len() != matrix.size() {
            return Err(TspError::InvalidInput(format!(
                "{} names for a {}x{} matrix",
                names.len(),
                matrix.size(),
                matrix.size()
            )));
        }
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(TspError::InvalidInput(format!(
                    "duplicate city name {name:?}"
                )));
            }
        }
        Ok(Self {
            names,
            index,
            matrix,
        })
    }

    /// City names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Index of the city called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Name of the city at `index`.
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// The distance matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if there are no cities.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
