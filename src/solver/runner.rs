//! Orchestration: partition, dispatch, gather, reduce.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::config::SolverConfig;
use super::worker::{run_worker, ChunkResult};
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::evaluation::{ClosedTour, TourCost};
use crate::models::{Point, PointSet, Route};
use crate::partition::split;
use crate::permutation::PermutationSpace;

/// Result of an exhaustive solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Optimal closed tour; the lexicographically earliest on ties.
    pub route: Route,

    /// Length of `route`.
    pub distance: f64,

    /// Wall time of the whole solve, serialized as seconds.
    #[serde(serialize_with = "as_secs", deserialize_with = "from_secs")]
    pub elapsed: Duration,

    /// Number of workers the search actually ran with.
    pub workers: usize,
}

impl SolveResult {
    /// Elapsed wall time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

fn as_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

fn from_secs<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Duration, D::Error> {
    let secs = f64::deserialize(deserializer)?;
    Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
}

/// Best order over the whole space for an arbitrary cost.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Lowest-cost order, earliest rank on ties.
    pub order: Vec<usize>,
    /// Its cost.
    pub distance: f64,
    /// Number of workers used.
    pub workers: usize,
}

/// Exhaustive search over every visiting order.
///
/// The `n!` permutations are split into one contiguous chunk per worker,
/// each chunk is scanned on its own thread, and the per-chunk minima are
/// reduced in chunk order. Workers share only the read-only distance data.
///
/// # Examples
///
/// ```
/// use u_tsp_exhaustive::models::PointSet;
/// use u_tsp_exhaustive::solver::{ExhaustiveSolver, SolverConfig};
///
/// let points = PointSet::from_pairs(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let result = ExhaustiveSolver::new(SolverConfig::default().with_workers(3))
///     .solve(&points)
///     .unwrap();
/// assert!((result.distance - 4.0).abs() < 1e-10);
/// assert_eq!(result.route.indices(), &[0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSolver {
    config: SolverConfig,
}

impl ExhaustiveSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds the shortest closed tour through `points`.
    pub fn solve(&self, points: &PointSet) -> Result<SolveResult> {
        let started = Instant::now();
        let distances = DistanceMatrix::from_points(points);
        let outcome = self.search(&ClosedTour::new(&distances))?;
        let elapsed = started.elapsed();

        log::info!(
            "solved {} points with {} workers in {:.6}s: best {:.4}",
            points.len(),
            outcome.workers,
            elapsed.as_secs_f64(),
            outcome.distance
        );

        Ok(SolveResult {
            route: Route::from_permutation(outcome.order),
            distance: outcome.distance,
            elapsed,
            workers: outcome.workers,
        })
    }

    /// Finds the order of `0..cost.size()` minimising `cost`.
    pub fn search<C: TourCost + ?Sized>(&self, cost: &C) -> Result<SearchOutcome> {
        self.config.validate()?;
        let space = PermutationSpace::new(cost.size())?;
        let workers = self.config.effective_workers(space.len());
        let chunks = split(space.len(), workers)?;

        log::debug!(
            "searching {} permutations of {} points across {workers} chunks",
            space.len(),
            space.n()
        );

        let results = if workers == 1 {
            chunks
                .into_iter()
                .map(|chunk| run_worker(&space, chunk, cost))
                .collect::<Vec<_>>()
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .map_err(|e| Error::Pool(e.to_string()))?;
            pool.install(|| {
                chunks
                    .into_par_iter()
                    .map(|chunk| run_worker(&space, chunk, cost))
                    .collect::<Vec<_>>()
            })
        };

        let best = reduce(results)?;
        let order = best.order.ok_or_else(|| {
            Error::worker_failure(best.chunk.index(), "no candidate order in any chunk")
        })?;

        Ok(SearchOutcome {
            order,
            distance: best.distance,
            workers,
        })
    }
}

/// Reduces per-chunk results, given in chunk order, to the global minimum.
///
/// Any failed chunk fails the whole reduction. Among equal minima the
/// lowest-index chunk wins, which is also the earliest rank overall.
fn reduce(results: Vec<Result<ChunkResult>>) -> Result<ChunkResult> {
    let mut best: Option<ChunkResult> = None;
    for result in results {
        let candidate = result?;
        if candidate.order.is_none() {
            continue;
        }
        let improves = best
            .as_ref()
            .map_or(true, |current| candidate.distance < current.distance);
        if improves {
            best = Some(candidate);
        }
    }
    best.ok_or_else(|| Error::worker_failure(0, "every chunk was empty"))
}

/// Shortest closed tour through `points` using `worker_count` workers.
///
/// `worker_count == 1` is the sequential scan. Fails with
/// [`Error::InvalidInput`] if `points` is empty, has a non-finite
/// coordinate, or has more than [`MAX_POINTS`](crate::permutation::MAX_POINTS)
/// entries, or if `worker_count` is zero.
///
/// # Examples
///
/// ```
/// use u_tsp_exhaustive::models::Point;
/// use u_tsp_exhaustive::solver::solve;
///
/// let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
/// let result = solve(&points, 2).unwrap();
/// assert!((result.distance - 10.0).abs() < 1e-10);
/// ```
pub fn solve(points: &[Point], worker_count: usize) -> Result<SolveResult> {
    let points = PointSet::new(points.to_vec())?;
    ExhaustiveSolver::new(SolverConfig::default().with_workers(worker_count)).solve(&points)
}
