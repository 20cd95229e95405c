//! Exhaustive TSP solver.
//!
//! # Algorithm
//!
//! 1. Enumerate the `n!` orderings of the points lexicographically.
//! 2. Split the rank range `[0, n!)` into one contiguous chunk per worker.
//! 3. Each worker scans its chunk, keeping its cheapest tour.
//! 4. Gather every chunk result, then reduce in chunk order.
//!
//! With one worker this is the plain sequential scan; with more, only the
//! partitioning changes, so the optimum and the reported route are the same.
//!
//! # Complexity
//!
//! O(n · n!) time, O(n²) memory for the shared distance matrix.

mod config;
mod runner;
mod worker;

pub use config::{available_workers, SolverConfig};
pub use runner::{solve, ExhaustiveSolver, SearchOutcome, SolveResult};
pub use worker::{scan_chunk, ChunkResult};
