//! Statistics collected during an MCTS search.

use std::time::Duration;

/// Summary statistics gathered while running [`crate::Mcts::search`].
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of iterations performed.
    pub iterations: u64,

    /// Total wall-clock time spent searching.
    pub total_time: Duration,

    /// Total number of nodes in the tree, including the root.
    pub tree_size: usize,

    /// Maximum depth reached below the root.
    pub max_depth: usize,

    /// Whether the search stopped because its time budget expired rather
    /// than its iteration budget being exhausted.
    pub stopped_early: bool,
}

impl SearchStatistics {
    /// A fresh, empty statistics object, counting the root as the only node.
    pub fn new() -> Self {
        SearchStatistics {
            iterations: 0,
            total_time: Duration::from_secs(0),
            tree_size: 1,
            max_depth: 0,
            stopped_early: false,
        }
    }

    /// Average wall-clock time per iteration, in microseconds.
    pub fn avg_time_per_iteration_us(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.total_time.as_micros() as f64 / self.iterations as f64
    }

    /// Iterations completed per second of wall-clock time.
    pub fn iterations_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.iterations as f64 / self.total_time.as_secs_f64()
    }

    /// A human-readable summary, suitable for logging or CLI output.
    pub fn summary(&self) -> String {
        format!(
            "MCTS Search Statistics:\n\
             - Iterations: {}\n\
             - Total time: {:.3} seconds\n\
             - Tree size: {} nodes\n\
             - Max depth: {}\n\
             - Avg time per iteration: {:.3} \u{b5}s\n\
             - Iterations per second: {:.1}\n\
             - Stopped early: {}",
            self.iterations,
            self.total_time.as_secs_f64(),
            self.tree_size,
            self.max_depth,
            self.avg_time_per_iteration_us(),
            self.iterations_per_second(),
            self.stopped_early
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
