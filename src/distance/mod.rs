//! Point-to-point distances.
//!
//! Provides the Euclidean metric and a dense matrix of precomputed
//! pairwise distances for a [`PointSet`](crate::models::PointSet).

mod matrix;

pub use matrix::DistanceMatrix;

use crate::models::Point;

/// Euclidean distance `sqrt((x2-x1)² + (y2-y1)²)`.
///
/// # Examples
///
/// ```
/// use u_tsp_exhaustive::distance::euclidean;
/// use u_tsp_exhaustive::models::Point;
///
/// let d = euclidean(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
#[inline]
pub fn euclidean(p1: &Point, p2: &Point) -> f64 {
    let dx = p2.x() - p1.x();
    let dy = p2.y() - p1.y();
    (dx * dx + dy * dy).sqrt()
}
