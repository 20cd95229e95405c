//! Point and point-set types.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A location in the plane.
///
/// # Examples
///
/// ```
/// use u_tsp_exhaustive::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        crate::distance::euclidean(self, other)
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An ordered, non-empty, immutable sequence of points.
///
/// Everything downstream refers to points by their index in this set.
///
/// # Examples
///
/// ```
/// use u_tsp_exhaustive::models::PointSet;
///
/// let points = PointSet::from_pairs(&[(0.0, 0.0), (3.0, 4.0)]).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points.get(1).x(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Creates a point set.
    ///
    /// Fails if `points` is empty or any coordinate is NaN or infinite.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::invalid_input("point set is empty"));
        }
        if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
            return Err(Error::invalid_input(format!(
                "point {idx} has a non-finite coordinate"
            )));
        }
        Ok(Self { points })
    }

    /// Creates a point set from `(x, y)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::new(pairs.iter().copied().map(Point::from).collect())
    }

    /// Samples `n` points uniformly from the square `[0, extent)²`.
    ///
    /// Fails if `extent` is not a positive finite number or `n` is zero.
    pub fn random<R: Rng>(n: usize, extent: f64, rng: &mut R) -> Result<Self> {
        if !extent.is_finite() || extent <= 0.0 {
            return Err(Error::invalid_input(format!(
                "extent must be positive, got {extent}"
            )));
        }
        let points = (0..n)
            .map(|_| Point::new(rng.random_range(0.0..extent), rng.random_range(0.0..extent)))
            .collect();
        Self::new(points)
    }

    /// Number of points (never zero).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    pub fn get(&self, idx: usize) -> &Point {
        &self.points[idx]
    }

    /// Returns the underlying points.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl TryFrom<Vec<Point>> for PointSet {
    type Error = Error;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<PointSet> for Vec<Point> {
    fn from(set: PointSet) -> Self {
        set.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_point_accessors() {
        let p = Point::new(1.5, -2.0);
        assert_eq!(p.x(), 1.5);
        assert_eq!(p.y(), -2.0);
        assert_eq!(Point::from((1.5, -2.0)), p);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_set_empty_rejected() {
        let err = PointSet::new(vec![]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_point_set_non_finite_rejected() {
        let err = PointSet::from_pairs(&[(0.0, 0.0), (f64::NAN, 1.0)]).unwrap_err();
        assert!(err.to_string().contains("point 1"));
        assert!(PointSet::from_pairs(&[(f64::INFINITY, 0.0)]).is_err());
    }

    #[test]
    fn test_point_set_indexing() {
        let ps = PointSet::from_pairs(&[(0.0, 0.0), (2.0, 3.0), (5.0, 4.0)]).expect("valid");
        assert_eq!(ps.len(), 3);
        assert!(!ps.is_empty());
        assert_eq!(*ps.get(2), Point::new(5.0, 4.0));
        assert_eq!(ps.as_slice().len(), 3);
    }

    #[test]
    fn test_point_set_random_is_seeded() {
        let a = PointSet::random(6, 100.0, &mut StdRng::seed_from_u64(7)).expect("valid");
        let b = PointSet::random(6, 100.0, &mut StdRng::seed_from_u64(7)).expect("valid");
        assert_eq!(a, b);
        assert!(a
            .as_slice()
            .iter()
            .all(|p| (0.0..100.0).contains(&p.x()) && (0.0..100.0).contains(&p.y())));
        assert!(PointSet::random(3, 0.0, &mut StdRng::seed_from_u64(7)).is_err());
    }

    #[test]
    fn test_point_set_json() {
        let ps: PointSet = serde_json::from_str(r#"[{"x":0,"y":0},{"x":3,"y":4}]"#).expect("json");
        assert_eq!(ps.len(), 2);
        let back = serde_json::to_string(&ps).expect("serialize");
        assert_eq!(back, r#"[{"x":0.0,"y":0.0},{"x":3.0,"y":4.0}]"#);
        assert!(serde_json::from_str::<PointSet>("[]").is_err());
    }
}
