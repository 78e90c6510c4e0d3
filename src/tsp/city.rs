//! City coordinates and Euclidean distance.

/// A city location in the plane.
///
/// Cities are identified by their position in the input sequence.
///
/// # Examples
///
/// ```
/// use u_anneal::tsp::City;
///
/// let a = City::new(0.0, 0.0);
/// let b = City::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    x: f64,
    y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Euclidean distance between two cities.
pub fn distance(a: &City, b: &City) -> f64 {
    a.distance_to(b)
}
