//! Solver configuration.

use std::thread;

use crate::error::{Error, Result};

/// Configuration for [`ExhaustiveSolver`](super::ExhaustiveSolver).
///
/// # Examples
///
/// ```
/// use u_tsp_exhaustive::solver::SolverConfig;
///
/// let config = SolverConfig::default().with_workers(4);
/// assert_eq!(config.workers, 4);
/// assert_eq!(SolverConfig::sequential().workers, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Requested number of concurrent workers.
    ///
    /// Clamped at solve time to the number of permutations, since extra
    /// workers would only receive empty chunks.
    pub workers: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            workers: available_workers(),
        }
    }
}

impl SolverConfig {
    /// A single-worker configuration: the plain sequential scan.
    pub fn sequential() -> Self {
        Self { workers: 1 }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::invalid_input("worker count must be at least 1"));
        }
        Ok(())
    }

    /// Worker count actually used for a space of `total` permutations.
    pub(crate) fn effective_workers(&self, total: u64) -> usize {
        let cap = usize::try_from(total).unwrap_or(usize::MAX);
        self.workers.min(cap).max(1)
    }
}

/// Number of hardware execution contexts, or 1 if it cannot be determined.
pub fn available_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
