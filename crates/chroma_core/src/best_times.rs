//! Fastest completion times seen by this process.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Number of best times kept by default.
pub const DEFAULT_BEST_TIMES_CAPACITY: usize = 2;

/// Ascending list of the fastest completion times, bounded by a capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTimes {
    capacity: usize,
    times: Vec<Duration>,
}

impl BestTimes {
    /// Creates an empty list keeping at most `capacity` times.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            times: Vec::new(),
        }
    }

    /// Inserts a completion time, keeping only the `capacity` smallest.
    ///
    /// Returns the rank (0 = fastest) if the time made the list.
    #[instrument(skip(self))]
    pub fn record(&mut self, time: Duration) -> Option<usize> {
        let rank = self.times.partition_point(|t| *t <= time);
        if rank >= self.capacity {
            return None;
        }
        self.times.insert(rank, time);
        self.times.truncate(self.capacity);
        debug!(rank, "Best time recorded");
        Some(rank)
    }

    /// Times in ascending order.
    pub fn times(&self) -> &[Duration] {
        &self.times
    }

    /// Maximum number of times kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if no time has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl Default for BestTimes {
    fn default() -> Self {
        Self::new(DEFAULT_BEST_TIMES_CAPACITY)
    }
}
