//! Tour representation.
//!
//! A [`Tour`] is a cyclic visiting order: a permutation of the city
//! indices `0..n`. Every operator in this crate produces tours that keep
//! that invariant, and [`Tour::new`] rejects anything else.

use crate::error::{Result, TspError};

/// A permutation of city indices visited in order, wrapping from the last
/// city back to the first.
///
/// # Examples
///
/// ```
/// use u_tspga::ga::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1], 3).expect("valid permutation");
/// assert_eq!(tour.cities(), &[2, 0, 1]);
/// assert!(Tour::new(vec![0, 0, 1], 3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Creates a tour after checking it is a permutation of `0..n`.
    pub fn new(cities: Vec<usize>, n: usize) -> Result<Self> {
        let tour = Self(cities);
        tour.validate(n)?;
        Ok(tour)
    }

    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Wraps a vector that the caller has already built as a permutation.
    pub(crate) fn from_permutation(cities: Vec<usize>) -> Self {
        Self(cities)
    }

    /// Returns the visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.0
    }

    /// Mutable access for in-place operators. Callers must only permute.
    pub(crate) fn cities_mut(&mut self) -> &mut [usize] {
        &mut self.0
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the tour visits no city.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the tour and returns the underlying order.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Returns true if every index in `0..n` appears exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        self.validate(n).is_ok()
    }

    /// Checks the permutation invariant and reports the first violation.
    pub fn validate(&self, n: usize) -> Result<()> {
        if self.0.len() != n {
            return Err(TspError::DegenerateTour(format!(
                "expected {n} cities, got {}",
                self.0.len()
            )));
        }
        let mut seen = vec![false; n];
        for (pos, &city) in self.0.iter().enumerate() {
            if city >= n {
                return Err(TspError::DegenerateTour(format!(
                    "city {city} at position {pos} is out of range 0..{n}"
                )));
            }
            if seen[city] {
                return Err(TspError::DegenerateTour(format!(
                    "city {city} appears more than once"
                )));
            }
            seen[city] = true;
        }
        Ok(())
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_permutation() {
        let tour = Tour::new(vec![3, 1, 0, 2], 4).expect("valid");
        assert_eq!(tour.len(), 4);
        assert!(!tour.is_empty());
        assert_eq!(tour.into_inner(), vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = Tour::new(vec![0, 1, 1], 3).unwrap_err();
        assert!(matches!(err, TspError::DegenerateTour(_)));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Tour::new(vec![0, 1, 3], 3).is_err());
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        assert!(Tour::new(vec![0, 1], 3).is_err());
        assert!(Tour::new(vec![0, 1, 2, 3], 3).is_err());
    }

    #[test]
    fn test_identity() {
        let tour = Tour::identity(5);
        assert_eq!(tour.cities(), &[0, 1, 2, 3, 4]);
        assert!(tour.is_permutation_of(5));
        assert!(!tour.is_permutation_of(4));
    }
}
