//! Contiguous rank ranges and the balanced splitter.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A half-open range `[start, end)` of permutation ranks assigned to one worker.
///
/// `index` is the chunk's position in its partition and fixes the order in
/// which chunk results are reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    index: usize,
    start: u64,
    end: u64,
}

impl Chunk {
    /// Creates a chunk. `end` is raised to `start` if it is smaller.
    pub fn new(index: usize, start: u64, end: u64) -> Self {
        Self {
            index,
            start,
            end: end.max(start),
        }
    }

    /// Position of this chunk within its partition.
    pub fn index(&self) -> usize {
        self.index
    }

    /// First rank (inclusive).
    pub fn start(&self) -> u64 {
        self.start
    }

    /// One past the last rank.
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of ranks covered.
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Returns `true` if the chunk covers no ranks.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The chunk as a rank range.
    pub fn range(&self) -> Range<u64> {
        self.start..self.end
    }
}

/// Splits `[0, total)` into `parts` contiguous chunks.
///
/// With `base = total / parts` and `remainder = total % parts`, the first
/// `remainder` chunks hold `base + 1` ranks and the rest hold `base`. When
/// `parts > total` the trailing chunks are empty.
///
/// Fails only if `parts` is zero.
///
/// # Examples
///
/// ```
/// use u_tsp_exhaustive::partition::split;
///
/// let chunks = split(10, 3).unwrap();
/// let sizes: Vec<u64> = chunks.iter().map(|c| c.len()).collect();
/// assert_eq!(sizes, vec![4, 3, 3]);
/// assert_eq!(chunks[1].range(), 4..7);
/// ```
pub fn split(total: u64, parts: usize) -> Result<Vec<Chunk>> {
    if parts == 0 {
        return Err(Error::invalid_input("cannot split work into zero parts"));
    }
    let parts_u64 = parts as u64;
    let base = total / parts_u64;
    let remainder = total % parts_u64;

    let mut chunks = Vec::with_capacity(parts);
    let mut start = 0u64;
    for i in 0..parts {
        let extra = u64::from((i as u64) < remainder);
        let end = start + base + extra;
        chunks.push(Chunk::new(i, start, end));
        start = end;
    }
    debug_assert_eq!(start, total);
    Ok(chunks)
}
