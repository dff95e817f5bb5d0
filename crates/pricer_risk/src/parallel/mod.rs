//! Rayon-based parallelisation utilities.
//!
//! This module provides the threshold/batch configuration shared by the
//! book risk run and the f32 batch pricing front end.
//!
//! # Performance Targets
//!
//! - Small inputs stay on the calling thread
//! - Large inputs are split into batches of at least `batch_size` items

pub mod batch;

pub use batch::{price_batch, BatchQuote};

use rayon::prelude::*;
use serde::Deserialize;

/// Batch size for parallel processing.
///
/// Empirically tuned for cache efficiency.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Default minimum item count before work is spread over the pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Maps each item through `mapper`, in parallel once `config` says so.
///
/// Output order always matches input order.
///
/// # Arguments
///
/// * `items` - Slice of items to process
/// * `config` - Threshold and minimum batch length
/// * `mapper` - Function to apply to each item
pub fn parallel_map<T, R, F>(items: &[T], config: &ParallelConfig, mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    if config.should_parallelize(items.len()) {
        items
            .par_iter()
            .with_min_len(config.batch_size)
            .map(mapper)
            .collect()
    } else {
        items.iter().map(mapper).collect()
    }
}

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Minimum number of items handed to one worker
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Configuration that never leaves the calling thread.
    pub fn sequential() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: usize::MAX,
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}
