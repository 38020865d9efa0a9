//! Search instrumentation
//!
//! Searches count nodes and cutoffs locally and publish them here once the
//! call finishes, so readers never contend with the hot loop.

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::time::Duration;

use serde::Serialize;

/// Read-only snapshot of engine counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EngineStats {
    /// Nodes visited by the last `compute_move`
    pub nodes_searched: u64,
    /// Alpha-beta cutoffs in the last `compute_move`
    pub cutoffs: u64,
    /// Entries in the transposition cache right now
    pub cache_entries: usize,
    /// Wall-clock time of the last `compute_move`
    pub last_search_duration: Duration,
    /// Deepest fully completed iteration (0 for the one-ply heuristic)
    pub depth_reached: u8,
    /// Cache lookups that hit, over the engine's lifetime
    pub cache_hits: u64,
    /// Cache lookups that missed, over the engine's lifetime
    pub cache_misses: u64,
}

impl EngineStats {
    /// Cutoffs per visited node, as a percentage
    #[must_use]
    pub fn pruning_efficiency(&self) -> f64 {
        if self.nodes_searched == 0 {
            return 0.0;
        }
        self.cutoffs as f64 / self.nodes_searched as f64 * 100.0
    }
}

/// Counters published by the last finished search
#[derive(Debug, Default)]
pub struct Instrumentation {
    nodes: AtomicU64,
    cutoffs: AtomicU64,
    duration_nanos: AtomicU64,
    depth: AtomicU8,
}

impl Instrumentation {
    /// Zero the per-search counters before a new search starts.
    pub fn reset(&self) {
        self.nodes.store(0, Ordering::Relaxed);
        self.cutoffs.store(0, Ordering::Relaxed);
        self.depth.store(0, Ordering::Relaxed);
    }

    /// Publish the totals of a finished search.
    pub fn record(&self, nodes: u64, cutoffs: u64, depth: u8, elapsed: Duration) {
        self.nodes.store(nodes, Ordering::Relaxed);
        self.cutoffs.store(cutoffs, Ordering::Relaxed);
        self.depth.store(depth, Ordering::Relaxed);
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.duration_nanos.store(nanos, Ordering::Relaxed);
    }

    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn cutoffs(&self) -> u64 {
        self.cutoffs.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn last_duration(&self) -> Duration {
        Duration::from_nanos(self.duration_nanos.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pruning_efficiency() {
        let stats = EngineStats {
            nodes_searched: 200,
            cutoffs: 50,
            ..EngineStats::default()
        };
        assert!((stats.pruning_efficiency() - 25.0).abs() < 1e-9);
        assert_eq!(EngineStats::default().pruning_efficiency(), 0.0);
    }

    #[test]
    fn test_record_and_reset() {
        let inst = Instrumentation::default();
        inst.record(1234, 56, 4, Duration::from_millis(12));
        assert_eq!(inst.nodes(), 1234);
        assert_eq!(inst.cutoffs(), 56);
        assert_eq!(inst.depth(), 4);
        assert_eq!(inst.last_duration(), Duration::from_millis(12));

        inst.reset();
        assert_eq!((inst.nodes(), inst.cutoffs(), inst.depth()), (0, 0, 0));
        // Duration of the previous call stays visible
        assert_eq!(inst.last_duration(), Duration::from_millis(12));
    }

    #[test]
    fn test_stats_serialize() {
        let stats = EngineStats {
            nodes_searched: 10,
            cutoffs: 2,
            cache_entries: 7,
            ..EngineStats::default()
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["nodes_searched"], 10);
        assert_eq!(json["cache_entries"], 7);
        assert!(json.get("last_search_duration").is_some());
    }
}
