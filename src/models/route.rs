//! Closed-tour route type.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A visiting order over point indices `0..n`, each appearing exactly once.
///
/// The tour is closed: an implicit edge runs from the last index back to the
/// first.
///
/// # Examples
///
/// ```
/// use u_tsp_exhaustive::models::Route;
///
/// let route = Route::new(vec![2, 0, 1]).unwrap();
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.rotated_to(0).indices(), &[0, 1, 2]);
/// assert!(Route::new(vec![0, 0, 1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Route {
    indices: Vec<usize>,
}

impl Route {
    /// Creates a route, checking that `indices` is a permutation of `0..len`.
    pub fn new(indices: Vec<usize>) -> Result<Self> {
        if indices.is_empty() {
            return Err(Error::invalid_input("route is empty"));
        }
        let n = indices.len();
        let mut seen = vec![false; n];
        for &idx in &indices {
            if idx >= n {
                return Err(Error::invalid_input(format!(
                    "route index {idx} out of range for {n} points"
                )));
            }
            if seen[idx] {
                return Err(Error::invalid_input(format!(
                    "route visits index {idx} more than once"
                )));
            }
            seen[idx] = true;
        }
        Ok(Self { indices })
    }

    /// Wraps indices already known to form a permutation.
    pub(crate) fn from_permutation(indices: Vec<usize>) -> Self {
        debug_assert!(Self::new(indices.clone()).is_ok());
        Self { indices }
    }

    /// Point indices in visiting order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of points visited.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the route visits no points (never for a valid route).
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the same cycle starting at `start`.
    ///
    /// Returns an unchanged copy if `start` is not on the route.
    pub fn rotated_to(&self, start: usize) -> Route {
        let pos = self.indices.iter().position(|&i| i == start).unwrap_or(0);
        let mut out = Vec::with_capacity(self.indices.len());
        out.extend_from_slice(&self.indices[pos..]);
        out.extend_from_slice(&self.indices[..pos]);
        Route { indices: out }
    }

    /// Returns the same cycle traversed in the opposite direction.
    pub fn reversed(&self) -> Route {
        let mut out = self.indices.clone();
        out.reverse();
        Route { indices: out }
    }
}

impl TryFrom<Vec<usize>> for Route {
    type Error = Error;

    fn try_from(indices: Vec<usize>) -> Result<Self> {
        Self::new(indices)
    }
}

impl From<Route> for Vec<usize> {
    fn from(route: Route) -> Self {
        route.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_valid() {
        let r = Route::new(vec![1, 3, 0, 2]).expect("valid");
        assert_eq!(r.len(), 4);
        assert!(!r.is_empty());
        assert_eq!(r.indices(), &[1, 3, 0, 2]);
    }

    #[test]
    fn test_route_rejects_repeat() {
        let err = Route::new(vec![0, 1, 1]).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_route_rejects_out_of_range() {
        let err = Route::new(vec![0, 3, 1]).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_route_rejects_empty() {
        assert!(Route::new(vec![]).is_err());
    }

    #[test]
    fn test_route_rotation() {
        let r = Route::new(vec![2, 3, 0, 1]).expect("valid");
        assert_eq!(r.rotated_to(0).indices(), &[0, 1, 2, 3]);
        assert_eq!(r.rotated_to(3).indices(), &[3, 0, 1, 2]);
        assert_eq!(r.rotated_to(9), r);
    }

    #[test]
    fn test_route_reversed() {
        let r = Route::new(vec![0, 1, 2]).expect("valid");
        assert_eq!(r.reversed().indices(), &[2, 1, 0]);
    }

    #[test]
    fn test_route_json_validates() {
        let r: Route = serde_json::from_str("[1,0]").expect("json");
        assert_eq!(r.indices(), &[1, 0]);
        assert!(serde_json::from_str::<Route>("[1,1]").is_err());
        assert_eq!(serde_json::to_string(&r).expect("serialize"), "[1,0]");
    }
}
