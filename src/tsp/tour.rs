//! Tours and tour length evaluation.

use super::city::City;
use crate::error::{Result, TourError};
use rand::seq::SliceRandom;
use rand::Rng;

/// A cyclic visiting order: a permutation of `0..n`.
///
/// Every constructor enforces the permutation invariant, and operations
/// return new tours instead of mutating shared ones. The edge from the
/// last city back to the first is part of the tour.
///
/// # Examples
///
/// ```
/// use u_anneal::tsp::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1]).unwrap();
/// assert_eq!(tour.order(), &[2, 0, 1]);
/// assert!(Tour::new(vec![0, 0, 1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Creates a tour from a visiting order, checking it is a permutation.
    pub fn new(order: Vec<usize>) -> Result<Self> {
        validate_order(&order, order.len())?;
        Ok(Self(order))
    }

    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// A uniformly random tour over `n` cities.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        Self(order)
    }

    pub fn order(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Returns a copy with the cities at positions `i` and `j` exchanged.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swapped(&self, i: usize, j: usize) -> Tour {
        let mut order = self.0.clone();
        order.swap(i, j);
        Tour(order)
    }

    /// Returns a copy with two distinct, uniformly drawn positions exchanged.
    ///
    /// Tours with fewer than two cities have no such move and are returned
    /// unchanged without drawing from `rng`.
    pub fn swapped_random<R: Rng>(&self, rng: &mut R) -> Tour {
        let n = self.len();
        if n < 2 {
            return self.clone();
        }
        let i = rng.random_range(0..n);
        // Draw from the n-1 remaining positions so j != i.
        let mut j = rng.random_range(0..n - 1);
        if j >= i {
            j += 1;
        }
        self.swapped(i, j)
    }

    /// Total cyclic length of this tour over `cities`.
    ///
    /// Fails if the tour does not cover exactly `cities.len()` cities.
    pub fn length(&self, cities: &[City]) -> Result<f64> {
        if self.len() != cities.len() {
            return Err(TourError::LengthMismatch {
                expected: cities.len(),
                actual: self.len(),
            }
            .into());
        }
        Ok(cyclic_length(cities, &self.0))
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = crate::error::AnnealError;

    fn try_from(order: Vec<usize>) -> Result<Self> {
        Tour::new(order)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Tour {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let order = Vec::<usize>::deserialize(deserializer)?;
        Tour::new(order).map_err(serde::de::Error::custom)
    }
}

/// Random perturbation of `tour`: a single transposition of two distinct
/// positions. See [`Tour::swapped_random`].
pub fn perturb<R: Rng>(tour: &Tour, rng: &mut R) -> Tour {
    tour.swapped_random(rng)
}

/// Total cyclic length of visiting `cities` in `order`.
///
/// `order` must be a permutation of `0..cities.len()`; anything else is
/// rejected instead of producing a wrong cost. Zero for one city or none.
///
/// # Examples
///
/// ```
/// use u_anneal::tsp::{tour_length, City};
///
/// let square = [
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(1.0, 1.0),
///     City::new(0.0, 1.0),
/// ];
/// assert!((tour_length(&square, &[0, 1, 2, 3]).unwrap() - 4.0).abs() < 1e-10);
/// assert!(tour_length(&square, &[0, 1, 2, 2]).is_err());
/// ```
pub fn tour_length(cities: &[City], order: &[usize]) -> Result<f64> {
    validate_order(order, cities.len())?;
    Ok(cyclic_length(cities, order))
}

/// Checks that `order` is a permutation of `0..n`.
pub fn validate_order(order: &[usize], n: usize) -> std::result::Result<(), TourError> {
    if order.len() != n {
        return Err(TourError::LengthMismatch {
            expected: n,
            actual: order.len(),
        });
    }
    let mut seen = vec![false; n];
    for &index in order {
        if index >= n {
            return Err(TourError::IndexOutOfRange { index, len: n });
        }
        if seen[index] {
            return Err(TourError::DuplicateIndex { index });
        }
        seen[index] = true;
    }
    Ok(())
}

pub(crate) fn cyclic_length(cities: &[City], order: &[usize]) -> f64 {
    let n = order.len();
    if n <= 1 {
        return 0.0;
    }
    (0..n)
        .map(|i| cities[order[i]].distance_to(&cities[order[(i + 1) % n]]))
        .sum()
}
