//! Request and response payloads of the distance service.

use serde::{Deserialize, Serialize};

use crate::distance::euclidean;
use crate::error::{Error, Result};
use crate::models::Point;

/// HTTP path the service answers on (`POST`).
pub const CALCULATE_DISTANCE_PATH: &str = "/calculate_distance";

/// A named location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self { id: id.into(), x, y }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Cities in visiting order.
///
/// # Examples
///
/// ```
/// use u_tsp_exhaustive::service::DistanceRequest;
///
/// let req = DistanceRequest::from_json(r#"{"cities":[{"id":"A","x":0,"y":0}]}"#).unwrap();
/// assert_eq!(req.cities[0].id, "A");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceRequest {
    pub cities: Vec<City>,
}

impl DistanceRequest {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Total open-path length of the requested order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResponse {
    pub total_distance: f64,
}

impl DistanceResponse {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Prices a visiting order.
///
/// Implementations may be remote; a failed call surfaces as
/// [`Error::Service`] and is never retried.
pub trait DistanceService {
    fn calculate_distance(&self, request: &DistanceRequest) -> Result<DistanceResponse>;
}

/// In-process distance service.
///
/// # Examples
///
/// ```
/// use u_tsp_exhaustive::service::{City, DistanceRequest, DistanceService, LocalDistanceService};
///
/// let req = DistanceRequest::new(vec![City::new("A", 0.0, 0.0), City::new("B", 3.0, 4.0)]);
/// let resp = LocalDistanceService.calculate_distance(&req).unwrap();
/// assert!((resp.total_distance - 5.0).abs() < 1e-10); // no return leg
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDistanceService;

impl LocalDistanceService {
    /// Answers a raw JSON request body with a raw JSON response body.
    pub fn handle_json(&self, body: &str) -> Result<String> {
        let request = DistanceRequest::from_json(body)?;
        self.calculate_distance(&request)?.to_json()
    }
}

impl DistanceService for LocalDistanceService {
    fn calculate_distance(&self, request: &DistanceRequest) -> Result<DistanceResponse> {
        if let Some(city) = request
            .cities
            .iter()
            .find(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(Error::service(format!(
                "city {} has a non-finite coordinate",
                city.id
            )));
        }
        let total_distance = request
            .cities
            .windows(2)
            .map(|w| euclidean(&w[0].point(), &w[1].point()))
            .sum();
        Ok(DistanceResponse { total_distance })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> Vec<City> {
        vec![
            City::new("A", 0.0, 0.0),
            City::new("B", 3.0, 4.0),
            City::new("C", 6.0, 0.0),
            City::new("D", 2.0, 1.0),
        ]
    }

    #[test]
    fn test_open_path_sum() {
        let resp = LocalDistanceService
            .calculate_distance(&DistanceRequest::new(abcd()))
            .expect("ok");
        let expected = 5.0 + 5.0 + 17f64.sqrt();
        assert!((resp.total_distance - expected).abs() < 1e-10);
    }

    #[test]
    fn test_empty_and_single_are_zero() {
        let svc = LocalDistanceService;
        let empty = svc.calculate_distance(&DistanceRequest::new(vec![])).expect("ok");
        assert_eq!(empty.total_distance, 0.0);
        let single = svc
            .calculate_distance(&DistanceRequest::new(vec![City::new("A", 1.0, 1.0)]))
            .expect("ok");
        assert_eq!(single.total_distance, 0.0);
    }

    #[test]
    fn test_handle_json_round_trip() {
        let body = r#"{"cities":[{"id":"A","x":0,"y":0},{"id":"B","x":3,"y":4}]}"#;
        let out = LocalDistanceService.handle_json(body).expect("ok");
        assert_eq!(out, r#"{"total_distance":5.0}"#);
        assert_eq!(DistanceResponse::from_json(&out).expect("json").total_distance, 5.0);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = LocalDistanceService.handle_json(r#"{"towns":[]}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_request_json_field_names() {
        let json = DistanceRequest::new(vec![City::new("A", 1.0, 2.0)])
            .to_json()
            .expect("json");
        assert_eq!(json, r#"{"cities":[{"id":"A","x":1.0,"y":2.0}]}"#);
    }
}
