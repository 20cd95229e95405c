//! # u-tsp-exhaustive
//!
//! Exact Traveling Salesman solver by exhaustive enumeration, with the
//! permutation space statically partitioned across parallel workers.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, PointSet, Route)
//! - [`distance`] — Euclidean metric and dense distance matrix
//! - [`evaluation`] — Closed-tour and open-path cost functions
//! - [`permutation`] — Lexicographic permutation space with unranking
//! - [`partition`] — Balanced contiguous chunking of the rank range
//! - [`solver`] — Per-chunk workers and the parallel orchestrator
//! - [`service`] — Distance service payloads and its brute-force client
//!
//! ## Example
//!
//! ```
//! use u_tsp_exhaustive::models::Point;
//! use u_tsp_exhaustive::solver::solve;
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(2.0, 3.0),
//!     Point::new(5.0, 4.0),
//!     Point::new(1.0, 6.0),
//! ];
//! let sequential = solve(&points, 1).unwrap();
//! let parallel = solve(&points, 4).unwrap();
//! assert!((sequential.distance - parallel.distance).abs() < 1e-9);
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod partition;
pub mod permutation;
pub mod service;
pub mod solver;

pub use error::{Error, Result};
