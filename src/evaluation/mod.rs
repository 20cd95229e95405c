//! Tour cost evaluation.
//!
//! - [`tour_length`] — closed-tour length of a validated [`Route`](crate::models::Route)
//! - [`path_length`] — open-path length (no return edge)
//! - [`TourCost`] — the cost seam used by the enumeration workers

mod evaluator;

pub use evaluator::{path_length, tour_length, ClosedTour, OpenPath, TourCost};
