//! Per-chunk linear scan.

use std::panic::{self, AssertUnwindSafe};

use crate::error::{Error, Result};
use crate::evaluation::TourCost;
use crate::partition::Chunk;
use crate::permutation::{next_permutation, PermutationSpace};

/// Best order found within one chunk.
///
/// Empty chunks report `order = None` and `distance = +inf`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkResult {
    /// The chunk that was scanned.
    pub chunk: Chunk,
    /// Lowest-cost order in the chunk, earliest rank on ties.
    pub order: Option<Vec<usize>>,
    /// Cost of `order`, or `f64::INFINITY` if the chunk was empty.
    pub distance: f64,
}

impl ChunkResult {
    fn empty(chunk: Chunk) -> Self {
        Self {
            chunk,
            order: None,
            distance: f64::INFINITY,
        }
    }
}

/// Scans every permutation whose rank lies in `chunk` and keeps the cheapest.
///
/// The scan unranks the chunk's first permutation and then steps through the
/// rest in place, so no permutation before the chunk is ever produced. The
/// first order seen is kept unless a later one is strictly cheaper.
pub fn scan_chunk<C: TourCost + ?Sized>(
    space: &PermutationSpace,
    chunk: Chunk,
    cost: &C,
) -> ChunkResult {
    let range = chunk.range();
    let Some(mut current) = space.iter_range(range.clone()).next() else {
        return ChunkResult::empty(chunk);
    };

    let mut best_distance = cost.cost(&current);
    let mut best = current.clone();
    for _ in (range.start + 1)..range.end {
        next_permutation(&mut current);
        let d = cost.cost(&current);
        if d < best_distance {
            best_distance = d;
            best.copy_from_slice(&current);
        }
    }

    log::debug!(
        "chunk {} [{}, {}): best {best_distance:.4}",
        chunk.index(),
        chunk.start(),
        chunk.end()
    );

    ChunkResult {
        chunk,
        order: Some(best),
        distance: best_distance,
    }
}

/// Runs [`scan_chunk`], converting a panic inside the scan into
/// [`Error::WorkerFailure`] for that chunk.
pub(crate) fn run_worker<C: TourCost + ?Sized>(
    space: &PermutationSpace,
    chunk: Chunk,
    cost: &C,
) -> Result<ChunkResult> {
    panic::catch_unwind(AssertUnwindSafe(|| scan_chunk(space, chunk, cost))).map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "worker panicked".to_string());
        log::error!("chunk {} failed: {message}", chunk.index());
        Error::worker_failure(chunk.index(), message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::evaluation::ClosedTour;
    use crate::models::PointSet;

    fn diamond() -> DistanceMatrix {
        let points = PointSet::from_pairs(&[(0.0, 0.0), (2.0, 3.0), (5.0, 4.0), (1.0, 6.0)])
            .expect("valid");
        DistanceMatrix::from_points(&points)
    }

    #[test]
    fn test_scan_whole_space() {
        let dm = diamond();
        let cost = ClosedTour::new(&dm);
        let space = PermutationSpace::new(4).expect("valid");
        let result = scan_chunk(&space, Chunk::new(0, 0, 24), &cost);

        let brute = space
            .iter()
            .map(|p| cost.cost(&p))
            .fold(f64::INFINITY, f64::min);
        assert!((result.distance - brute).abs() < 1e-12);
        assert!((cost.cost(result.order.as_deref().expect("some")) - result.distance).abs() < 1e-12);
    }

    #[test]
    fn test_scan_sub_range_only_sees_its_ranks() {
        let dm = diamond();
        let cost = ClosedTour::new(&dm);
        let space = PermutationSpace::new(4).expect("valid");
        let chunk = Chunk::new(1, 6, 12);
        let result = scan_chunk(&space, chunk, &cost);

        let order = result.order.expect("some");
        // Ranks 6..12 are exactly the permutations starting with 1.
        assert_eq!(order[0], 1);
        let expected = space
            .iter_range(6..12)
            .map(|p| cost.cost(&p))
            .fold(f64::INFINITY, f64::min);
        assert!((result.distance - expected).abs() < 1e-12);
    }

    #[test]
    fn test_scan_empty_chunk() {
        let dm = diamond();
        let space = PermutationSpace::new(4).expect("valid");
        let result = scan_chunk(&space, Chunk::new(30, 24, 24), &ClosedTour::new(&dm));
        assert!(result.order.is_none());
        assert_eq!(result.distance, f64::INFINITY);
    }

    #[test]
    fn test_tie_keeps_earliest_rank() {
        // Every order of two points costs the same.
        let points = PointSet::from_pairs(&[(0.0, 0.0), (3.0, 4.0)]).expect("valid");
        let dm = DistanceMatrix::from_points(&points);
        let space = PermutationSpace::new(2).expect("valid");
        let result = scan_chunk(&space, Chunk::new(0, 0, 2), &ClosedTour::new(&dm));
        assert_eq!(result.order, Some(vec![0, 1]));
        assert!((result.distance - 10.0).abs() < 1e-12);
    }

    struct Exploding;

    impl TourCost for Exploding {
        fn size(&self) -> usize {
            3
        }
        fn cost(&self, order: &[usize]) -> f64 {
            if order == [1, 0, 2] {
                panic!("cost function exploded");
            }
            1.0
        }
    }

    #[test]
    fn test_run_worker_reports_panic() {
        let space = PermutationSpace::new(3).expect("valid");
        let err = run_worker(&space, Chunk::new(1, 2, 4), &Exploding).unwrap_err();
        match err {
            Error::WorkerFailure { chunk, message } => {
                assert_eq!(chunk, 1);
                assert!(message.contains("exploded"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(run_worker(&space, Chunk::new(0, 0, 2), &Exploding).is_ok());
    }
}
