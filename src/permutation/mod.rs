//! The space of all visiting orders.
//!
//! Orders of `0..n` are enumerated in lexicographic order, so every
//! permutation has a well-defined position (its rank) in `0..n!`. Any rank
//! can be turned back into its permutation without walking the ones before
//! it, which lets a worker start scanning in the middle of the space.
//!
//! # Reference
//!
//! Knuth, D.E. (2011). *The Art of Computer Programming*, Vol. 4A,
//! §7.2.1.2 (Algorithm L, lexicographic permutation generation).

mod space;

pub use space::{factorial, next_permutation, PermutationSpace, Permutations, MAX_POINTS};
