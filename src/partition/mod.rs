//! Static partitioning of the enumeration space.
//!
//! The rank range `[0, total)` is cut into contiguous [`Chunk`]s whose sizes
//! differ by at most one; earlier chunks absorb the remainder.

mod chunk;

pub use chunk::{split, Chunk};
