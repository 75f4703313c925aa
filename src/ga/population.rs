//! Initial population.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::Tour;

/// Creates `pop_size` independent, uniformly random tours over `n_cities`.
///
/// Tours are not deduplicated.
pub fn random_population<R: Rng>(pop_size: usize, n_cities: usize, rng: &mut R) -> Vec<Tour> {
    (0..pop_size)
        .map(|_| {
            let mut cities: Vec<usize> = (0..n_cities).collect();
            cities.shuffle(rng);
            Tour::from_permutation(cities)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_sizes_and_validity() {
        let mut rng = create_rng(42);
        let pop = random_population(25, 9, &mut rng);
        assert_eq!(pop.len(), 25);
        for tour in &pop {
            assert!(tour.is_permutation_of(9), "invalid tour: {tour:?}");
        }
    }

    #[test]
    fn test_tours_are_independent() {
        let mut rng = create_rng(42);
        let pop = random_population(30, 12, &mut rng);
        let distinct: std::collections::HashSet<&Tour> = pop.iter().collect();
        // 12! orderings; a collision among 30 draws would signal shared state.
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_empty_population() {
        let mut rng = create_rng(42);
        assert!(random_population(0, 5, &mut rng).is_empty());
    }

    #[test]
    fn test_first_city_roughly_uniform() {
        let mut rng = create_rng(3);
        let mut counts = [0u32; 4];
        for tour in random_population(8000, 4, &mut rng) {
            counts[tour.cities()[0]] += 1;
        }
        for &c in &counts {
            assert!(c > 1700 && c < 2300, "expected ~2000 each, got {counts:?}");
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let a = random_population(10, 8, &mut create_rng(5));
        let b = random_population(10, 8, &mut create_rng(5));
        assert_eq!(a, b);
    }
}
