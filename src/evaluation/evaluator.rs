//! Closed-tour and open-path length computation.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::{PointSet, Route};

/// Cost of visiting points in a given order. Lower is better.
///
/// Implementations must be pure: workers call `cost` concurrently on a
/// shared reference.
pub trait TourCost: Send + Sync {
    /// Number of points an order must cover.
    fn size(&self) -> usize;

    /// Cost of the given order of point indices.
    fn cost(&self, order: &[usize]) -> f64;
}

/// Closed-tour length: consecutive edges plus the edge from last back to first.
///
/// # Examples
///
/// ```
/// use u_tsp_exhaustive::distance::DistanceMatrix;
/// use u_tsp_exhaustive::evaluation::{ClosedTour, TourCost};
/// use u_tsp_exhaustive::models::PointSet;
///
/// let points = PointSet::from_pairs(&[(0.0, 0.0), (3.0, 4.0)]).unwrap();
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((ClosedTour::new(&dm).cost(&[0, 1]) - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ClosedTour<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> ClosedTour<'a> {
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }
}

impl TourCost for ClosedTour<'_> {
    fn size(&self) -> usize {
        self.distances.size()
    }

    fn cost(&self, order: &[usize]) -> f64 {
        let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
            return 0.0;
        };
        open_sum(self.distances, order) + self.distances.get(last, first)
    }
}

/// Open-path length: consecutive edges only, no return to the start.
#[derive(Debug, Clone, Copy)]
pub struct OpenPath<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> OpenPath<'a> {
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }
}

impl TourCost for OpenPath<'_> {
    fn size(&self) -> usize {
        self.distances.size()
    }

    fn cost(&self, order: &[usize]) -> f64 {
        open_sum(self.distances, order)
    }
}

#[inline]
fn open_sum(distances: &DistanceMatrix, order: &[usize]) -> f64 {
    order
        .windows(2)
        .map(|w| distances.get(w[0], w[1]))
        .sum()
}

/// Total length of the closed tour `route` over `points`.
///
/// Sums the distances between consecutive points plus the closing edge back
/// to the first. A single-point tour has length 0.
///
/// # Examples
///
/// ```
/// use u_tsp_exhaustive::evaluation::tour_length;
/// use u_tsp_exhaustive::models::{PointSet, Route};
///
/// let points = PointSet::from_pairs(&[(0.0, 0.0), (3.0, 4.0)]).unwrap();
/// let route = Route::new(vec![1, 0]).unwrap();
/// assert!((tour_length(&route, &points).unwrap() - 10.0).abs() < 1e-10);
/// ```
pub fn tour_length(route: &Route, points: &PointSet) -> Result<f64> {
    check_len(route, points)?;
    let order = route.indices();
    let open: f64 = order
        .windows(2)
        .map(|w| points.get(w[0]).distance_to(points.get(w[1])))
        .sum();
    let closing = points
        .get(order[order.len() - 1])
        .distance_to(points.get(order[0]));
    Ok(open + closing)
}

/// Length of the open path visiting `points` in `route` order.
///
/// Unlike [`tour_length`], no edge is added from the last point back to the
/// first.
pub fn path_length(route: &Route, points: &PointSet) -> Result<f64> {
    check_len(route, points)?;
    Ok(route
        .indices()
        .windows(2)
        .map(|w| points.get(w[0]).distance_to(points.get(w[1])))
        .sum())
}

fn check_len(route: &Route, points: &PointSet) -> Result<()> {
    if route.len() != points.len() {
        return Err(Error::invalid_input(format!(
            "route covers {} points but the point set has {}",
            route.len(),
            points.len()
        )));
    }
    Ok(())
}
