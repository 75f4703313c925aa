//! Dense symmetric distance matrix.

use crate::error::{Result, TspError};
use crate::ga::Tour;

/// Tolerance used when checking `D[i][j] == D[j][i]`.
const SYMMETRY_TOL: f64 = 1e-9;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once from validated rows and read-only afterwards.
///
/// # Examples
///
/// ```
/// use u_tspga::distance::DistanceMatrix;
/// use u_tspga::ga::Tour;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 4.0, 5.0],
///     vec![2.0, 4.0, 0.0, 6.0],
///     vec![3.0, 5.0, 6.0, 0.0],
/// ])
/// .expect("valid matrix");
/// let len = dm.tour_length(&Tour::identity(4)).expect("valid tour");
/// assert!((len - 14.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds a matrix from explicit rows.
    ///
    /// Fails with [`TspError::InvalidInput`] unless the rows form a square,
    /// symmetric matrix of finite, non-negative values with a zero diagonal.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(TspError::InvalidInput(format!(
                    "matrix is not square: row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        let dm = Self { data, size };
        dm.check()?;
        Ok(dm)
    }

    fn check(&self) -> Result<()> {
        for i in 0..self.size {
            for j in 0..self.size {
                let d = self.get(i, j);
                if !d.is_finite() || d < 0.0 {
                    return Err(TspError::InvalidInput(format!(
                        "distance ({i}, {j}) = {d} is not a finite non-negative number"
                    )));
                }
            }
            if self.get(i, i) != 0.0 {
                return Err(TspError::InvalidInput(format!(
                    "diagonal entry ({i}, {i}) must be 0, got {}",
                    self.get(i, i)
                )));
            }
        }
        if !self.is_symmetric(SYMMETRY_TOL) {
            return Err(TspError::InvalidInput("matrix is not symmetric".into()));
        }
        Ok(())
    }

    /// Returns the distance between two cities.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities covered.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Length of the closed tour, including the edge back to the start.
    ///
    /// Fails with [`TspError::DegenerateTour`] if `tour` is not a
    /// permutation of `0..size`.
    pub fn tour_length(&self, tour: &Tour) -> Result<f64> {
        tour.validate(self.size)?;
        Ok(self.cycle_length(tour.cities()))
    }

    fn cycle_length(&self, cities: &[usize]) -> f64 {
        let (first, last) = match (cities.first(), cities.last()) {
            (Some(&f), Some(&l)) => (f, l),
            _ => return 0.0,
        };
        let open: f64 = cities.windows(2).map(|w| self.get(w[0], w[1])).sum();
        open + self.get(last, first)
    }
}
