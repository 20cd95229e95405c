//! Distance service contract.
//!
//! An external service prices an ordered list of identified cities as the
//! sum of consecutive distances. That is an open path: unlike
//! [`tour_length`](crate::evaluation::tour_length) it does not add the edge
//! from the last city back to the first.
//!
//! - [`DistanceRequest`] / [`DistanceResponse`] — JSON payloads
//! - [`DistanceService`] — the request/response seam
//! - [`LocalDistanceService`] — in-process implementation
//! - [`best_route_via_service`] — brute-force client that queries the service once per ordering

mod client;
mod payload;

pub use client::{best_route_via_service, ServiceSearchResult};
pub use payload::{
    City, DistanceRequest, DistanceResponse, DistanceService, LocalDistanceService,
    CALCULATE_DISTANCE_PATH,
};
