//! Transposition cache for search results
//!
//! Stores search results keyed by board [`Fingerprint`], so a position
//! reached again (through another move order, or in a later search on the
//! same engine) can reuse the earlier work.
//!
//! The cache is shared by every search running on one engine instance, so
//! all methods take `&self`. Reads proceed in parallel; writes take the
//! lock exclusively.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos};
//! use gomoku::search::{CacheEntry, EntryType, Fingerprint, TranspositionCache};
//!
//! let cache = TranspositionCache::new(1024);
//! let key = Fingerprint::of(&Board::new());
//!
//! cache.put(key, CacheEntry {
//!     score: 100,
//!     depth: 3,
//!     bound: EntryType::Exact,
//!     best_move: Some(Pos::new(7, 7)),
//! });
//!
//! let entry = cache.get(&key).unwrap();
//! assert_eq!(entry.score, 100);
//! assert_eq!(cache.len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::Serialize;

use super::fingerprint::Fingerprint;
use crate::board::Pos;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

/// Cached result for one position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    /// Evaluation score
    pub score: i32,
    /// Remaining depth the score was searched to
    pub depth: u8,
    /// How `score` relates to the true value
    pub bound: EntryType,
    /// Best move found for this position
    pub best_move: Option<Pos>,
}

/// Concurrent map from board fingerprint to search result.
///
/// Replacement is keep-deeper-wins: an existing entry is only overwritten by
/// one searched at least as deep. With a non-zero capacity, inserting a new
/// key into a full cache clears the whole cache first.
pub struct TranspositionCache {
    map: RwLock<HashMap<Fingerprint, CacheEntry>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl TranspositionCache {
    /// Create a cache holding at most `capacity` entries (0 = unbounded).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a position. Counts a hit or a miss.
    #[must_use]
    pub fn get(&self, key: &Fingerprint) -> Option<CacheEntry> {
        let entry = self.map.read().get(key).copied();
        let counter = if entry.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        entry
    }

    /// Store a result.
    ///
    /// Returns `false` if an existing deeper entry was kept instead.
    pub fn put(&self, key: Fingerprint, entry: CacheEntry) -> bool {
        let mut map = self.map.write();

        if let Some(existing) = map.get_mut(&key) {
            if entry.depth < existing.depth {
                return false;
            }
            *existing = entry;
            return true;
        }

        if self.capacity > 0 && map.len() >= self.capacity {
            log::debug!("transposition cache reached {} entries, clearing", map.len());
            map.clear();
        }
        map.insert(key, entry);
        true
    }

    /// Drop every entry. Hit and miss counters are kept.
    pub fn clear(&self) {
        let mut map = self.map.write();
        log::debug!("clearing transposition cache ({} entries)", map.len());
        map.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }

    /// Configured capacity (0 = unbounded)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for TranspositionCache {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CACHE_CAPACITY)
    }
}

/// Snapshot of cache usage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Entries currently stored
    pub entries: usize,
    /// Lookups that found an entry
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
}

impl CacheStats {
    /// Percentage of lookups that hit (0 when nothing was looked up)
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            return 0.0;
        }
        self.hits as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Stone};

    fn key(n: u8) -> Fingerprint {
        let mut board = Board::new();
        board.place_stone(Pos::from_index(usize::from(n)), Stone::Human);
        Fingerprint::of(&board)
    }

    fn entry(score: i32, depth: u8) -> CacheEntry {
        CacheEntry {
            score,
            depth,
            bound: EntryType::Exact,
            best_move: Some(Pos::new(9, 9)),
        }
    }

    #[test]
    fn test_put_get() {
        let cache = TranspositionCache::new(0);
        assert!(cache.put(key(0), entry(100, 5)));

        let found = cache.get(&key(0)).unwrap();
        assert_eq!(found.score, 100);
        assert_eq!(found.best_move, Some(Pos::new(9, 9)));
        assert!(cache.get(&key(1)).is_none());
    }

    #[test]
    fn test_replacement_deeper() {
        let cache = TranspositionCache::new(0);
        cache.put(key(0), entry(100, 3));
        assert!(cache.put(key(0), entry(200, 5)));
        assert_eq!(cache.get(&key(0)).unwrap().score, 200);
    }

    #[test]
    fn test_replacement_same_depth() {
        let cache = TranspositionCache::new(0);
        cache.put(key(0), entry(100, 5));
        // Same depth should replace (newer info)
        assert!(cache.put(key(0), entry(200, 5)));
        assert_eq!(cache.get(&key(0)).unwrap().score, 200);
    }

    #[test]
    fn test_no_replacement_shallower() {
        let cache = TranspositionCache::new(0);
        cache.put(key(0), entry(100, 5));
        assert!(!cache.put(key(0), entry(200, 3)), "Shallower entry must not replace deeper");
        let kept = cache.get(&key(0)).unwrap();
        assert_eq!((kept.score, kept.depth), (100, 5));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let cache = TranspositionCache::new(0);
        cache.put(key(0), entry(100, 5));
        cache.put(key(1), entry(100, 5));
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get(&key(0)).is_none());
    }

    #[test]
    fn test_capacity_clears_as_unit() {
        let cache = TranspositionCache::new(3);
        assert_eq!(cache.capacity(), 3);
        for n in 0..3 {
            cache.put(key(n), entry(i32::from(n), 1));
        }
        assert_eq!(cache.len(), 3);

        // Updating an existing key never triggers the clear
        cache.put(key(2), entry(42, 2));
        assert_eq!(cache.len(), 3);

        cache.put(key(3), entry(3, 1));
        assert_eq!(cache.len(), 1, "Full cache should be cleared before insert");
        assert!(cache.get(&key(3)).is_some());
        assert!(cache.get(&key(0)).is_none());
    }

    #[test]
    fn test_unbounded() {
        let cache = TranspositionCache::new(0);
        for n in 0..200 {
            cache.put(key(n), entry(0, 1));
        }
        assert_eq!(cache.len(), 200);
    }

    #[test]
    fn test_stats() {
        let cache = TranspositionCache::new(0);
        let stats = cache.stats();
        assert_eq!(stats, CacheStats::default());
        assert_eq!(stats.hit_rate(), 0.0);

        cache.put(key(0), entry(1, 1));
        let _ = cache.get(&key(0));
        let _ = cache.get(&key(0));
        let _ = cache.get(&key(0));
        let _ = cache.get(&key(1));

        let stats = cache.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.hits, 3);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_entry_types_preserved() {
        let cache = TranspositionCache::new(0);
        let bounds = [EntryType::Exact, EntryType::LowerBound, EntryType::UpperBound];
        for (n, bound) in bounds.into_iter().enumerate() {
            let mut e = entry(10, 4);
            e.bound = bound;
            e.best_move = None;
            cache.put(key(n as u8), e);
        }
        for (n, bound) in bounds.into_iter().enumerate() {
            let found = cache.get(&key(n as u8)).unwrap();
            assert_eq!(found.bound, bound);
            assert!(found.best_move.is_none());
        }
    }

    #[test]
    fn test_concurrent_access() {
        let cache = TranspositionCache::new(0);

        // 4 writers on disjoint keys, 4 readers on the same keys
        std::thread::scope(|s| {
            for t in 0..4u8 {
                let cache = &cache;
                s.spawn(move || {
                    for i in 0..50u8 {
                        cache.put(key(t * 50 + i), entry(i32::from(i), 2));
                    }
                });
                s.spawn(move || {
                    for i in 0..50u8 {
                        let _ = cache.get(&key(t * 50 + i));
                    }
                });
            }
        });

        assert_eq!(cache.len(), 200);
        let stats = cache.stats();
        assert_eq!(stats.hits + stats.misses, 200);
    }
}
