//! Domain model types for exhaustive tour search.
//!
//! Points live in an immutable [`PointSet`]; everything else refers to them
//! by index. A [`Route`] is a validated permutation of those indices that
//! describes a closed tour.

mod point;
mod route;

pub use point::{Point, PointSet};
pub use route::Route;
