//! Brute-force search driven through a [`DistanceService`].

use serde::Serialize;

use super::payload::{City, DistanceRequest, DistanceService};
use crate::error::{Error, Result};
use crate::permutation::PermutationSpace;

/// Best ordering found by [`best_route_via_service`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceSearchResult {
    /// City identifiers in visiting order.
    pub ids: Vec<String>,
    /// Open-path length reported by the service.
    pub total_distance: f64,
    /// Number of service calls made.
    pub requests: u64,
}

/// Asks `service` to price every ordering of `cities` and keeps the cheapest.
///
/// Orderings are tried lexicographically by input position and one request
/// is sent per ordering; the first ordering wins ties. Any failed request
/// aborts the search.
///
/// # Examples
///
/// ```
/// use u_tsp_exhaustive::service::{best_route_via_service, City, LocalDistanceService};
///
/// let cities = vec![
///     City::new("A", 0.0, 0.0),
///     City::new("B", 2.0, 0.0),
///     City::new("C", 1.0, 0.0),
/// ];
/// let best = best_route_via_service(&LocalDistanceService, &cities).unwrap();
/// assert_eq!(best.ids, vec!["A", "C", "B"]);
/// assert!((best.total_distance - 2.0).abs() < 1e-10);
/// ```
pub fn best_route_via_service<S: DistanceService + ?Sized>(
    service: &S,
    cities: &[City],
) -> Result<ServiceSearchResult> {
    if cities.is_empty() {
        return Err(Error::invalid_input("no cities to route"));
    }
    let space = PermutationSpace::new(cities.len())?;

    let mut best: Option<(Vec<usize>, f64)> = None;
    for order in &space {
        let request = DistanceRequest::new(order.iter().map(|&i| cities[i].clone()).collect());
        let total = service.calculate_distance(&request)?.total_distance;
        log::trace!("service priced {order:?} at {total}");
        if best.as_ref().map_or(true, |(_, d)| total < *d) {
            best = Some((order, total));
        }
    }

    let (order, total_distance) =
        best.ok_or_else(|| Error::service("no ordering was priced"))?;
    log::info!(
        "service search over {} cities made {} requests: best {total_distance:.4}",
        cities.len(),
        space.len()
    );

    Ok(ServiceSearchResult {
        ids: order.into_iter().map(|i| cities[i].id.clone()).collect(),
        total_distance,
        requests: space.len(),
    })
}
