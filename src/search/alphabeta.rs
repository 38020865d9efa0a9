//! Alpha-Beta search with iterative deepening and transposition cache
//!
//! Minimax from the engine's point of view: the engine maximizes, the human
//! minimizes. Every hypothetical placement goes through
//! [`Board::place_scoped`], so the scratch board is restored on every exit
//! path, cutoffs and deadline aborts included.
//!
//! # Features
//!
//! - Iterative deepening to a maximum depth under a wall-clock deadline
//! - Transposition cache shared with other searches on the same engine
//! - Early exit once a forced win is found
//! - Candidate moves restricted to the neighbourhood of existing stones
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::{Searcher, TranspositionCache};
//!
//! let cache = TranspositionCache::new(0);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Human);
//!
//! let deadline = Instant::now() + Duration::from_secs(1);
//! let mut searcher = Searcher::new(&cache, deadline);
//! let result = searcher.search(&mut board, Some(Pos::new(7, 7)), 2);
//! assert!(result.best_move.is_some());
//! ```

use std::time::Instant;

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, PatternScore};
use crate::rules::check_win;

use super::fingerprint::Fingerprint;
use super::movegen::generate_candidates;
use super::tt::{CacheEntry, EntryType, TranspositionCache};

/// Score of a decided game, from the engine's point of view
pub const WIN_SCORE: i32 = PatternScore::FIVE;

/// Infinity score for alpha-beta bounds
const INF: i32 = i32::MAX;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Evaluation score of the best move
    pub score: i32,
    /// Deepest iteration that completed before the deadline
    pub depth: u8,
    /// Total nodes visited, aborted iterations included
    pub nodes: u64,
    /// Alpha-beta and cache-bound cutoffs
    pub cutoffs: u64,
}

/// Single-threaded searcher for one top-level call.
///
/// Holds the per-call counters and deadline; the cache it borrows may be
/// shared with searchers running on other threads.
pub struct Searcher<'a> {
    cache: &'a TranspositionCache,
    deadline: Instant,
    nodes: u64,
    cutoffs: u64,
    stopped: bool,
}

impl<'a> Searcher<'a> {
    #[must_use]
    pub fn new(cache: &'a TranspositionCache, deadline: Instant) -> Self {
        Self {
            cache,
            deadline,
            nodes: 0,
            cutoffs: 0,
            stopped: false,
        }
    }

    /// Search for the engine's best move using iterative deepening.
    ///
    /// Runs depths `1..=max_depth` with a full window. An iteration cut short
    /// by the deadline is discarded; the best result of the completed
    /// iterations is returned. A later depth only replaces it with a strictly
    /// better score. Stops early once a forced win is found.
    ///
    /// `board` is used as scratch space and is unchanged on return.
    pub fn search(
        &mut self,
        board: &mut Board,
        last_move: Option<Pos>,
        max_depth: u8,
    ) -> SearchResult {
        let mut best: Option<(Pos, i32)> = None;
        let mut depth_reached = 0;

        for depth in 1..=max_depth {
            let (score, mov) = self.search_root(board, depth, last_move);

            if self.stopped {
                log::debug!("depth {depth} abandoned at deadline after {} nodes", self.nodes);
                break;
            }

            depth_reached = depth;
            log::debug!(
                "depth {depth}: score={score} move={} nodes={} cutoffs={}",
                mov.map_or_else(|| "-".to_string(), |p| p.to_string()),
                self.nodes,
                self.cutoffs
            );

            if let Some(mov) = mov {
                if best.map_or(true, |(_, best_score)| score > best_score) {
                    best = Some((mov, score));
                }
            }

            if best.is_some_and(|(_, s)| s >= WIN_SCORE) {
                break;
            }
        }

        SearchResult {
            best_move: best.map(|(mov, _)| mov),
            score: best.map_or(0, |(_, score)| score),
            depth: depth_reached,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        }
    }

    /// Whether the deadline has cut this search short.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// One iteration at the root: the engine to move, full window.
    ///
    /// Every candidate is expanded on every call. The root entry is written
    /// to the cache but never read back here, so a warm cache cannot replace
    /// the move the completed iterations chose.
    fn search_root(
        &mut self,
        board: &mut Board,
        depth: u8,
        last_move: Option<Pos>,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        if self.check_time() {
            return (0, None);
        }
        if let Some(score) = terminal_score(board, last_move) {
            return (score, None);
        }

        let candidates = generate_candidates(board);
        if candidates.is_empty() {
            return (0, None);
        }

        let key = Fingerprint::of(board);
        let mut alpha = -INF;
        let mut best_score = -INF;
        let mut best_move = None;

        for mov in candidates {
            let (score, _) = {
                let mut placed = board.place_scoped(mov, Stone::Engine);
                self.minimax(&mut placed, depth - 1, alpha, INF, false, Some(mov))
            };

            if self.stopped {
                return (0, None);
            }

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(score);
        }

        self.cache.put(
            key,
            CacheEntry {
                score: best_score,
                depth,
                bound: EntryType::Exact,
                best_move,
            },
        );

        (best_score, best_move)
    }

    #[inline]
    fn check_time(&mut self) -> bool {
        if !self.stopped && Instant::now() >= self.deadline {
            self.stopped = true;
        }
        self.stopped
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// `last_move` produced the current position; `maximizing` is true when
    /// the engine is to move.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        last_move: Option<Pos>,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        if self.check_time() {
            return (0, None);
        }

        // Terminal positions take priority over the cache and the leaf eval
        if let Some(score) = terminal_score(board, last_move) {
            return (score, None);
        }

        if depth == 0 {
            return (evaluate(board, last_move), None);
        }

        let orig_alpha = alpha;
        let orig_beta = beta;
        let key = Fingerprint::of(board);

        if let Some(entry) = self.cache.get(&key) {
            if entry.depth >= depth {
                match entry.bound {
                    EntryType::Exact => return (entry.score, entry.best_move),
                    EntryType::LowerBound => alpha = alpha.max(entry.score),
                    EntryType::UpperBound => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    self.cutoffs += 1;
                    log::trace!("cache bound cutoff at depth {depth}: {:?}", entry.bound);
                    return (entry.score, entry.best_move);
                }
            }
        }

        let candidates = generate_candidates(board);
        if candidates.is_empty() {
            return (0, None);
        }

        let side = if maximizing { Stone::Engine } else { Stone::Human };
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mov in candidates {
            let (score, _) = {
                let mut placed = board.place_scoped(mov, side);
                self.minimax(&mut placed, depth - 1, alpha, beta, !maximizing, Some(mov))
            };

            // Abandoned subtree: the caller discards this iteration anyway
            if self.stopped {
                return (0, None);
            }

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                beta = beta.min(score);
            }

            if alpha >= beta {
                self.cutoffs += 1;
                break;
            }
        }

        let bound = if best_score <= orig_alpha {
            EntryType::UpperBound
        } else if best_score >= orig_beta {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        };
        self.cache.put(
            key,
            CacheEntry {
                score: best_score,
                depth,
                bound,
                best_move,
            },
        );

        (best_score, best_move)
    }
}

/// Score of a decided position, or `None` while the game is still open.
///
/// Only the stone at `last_move` can have completed a five.
fn terminal_score(board: &Board, last_move: Option<Pos>) -> Option<i32> {
    if let Some(pos) = last_move {
        let owner = board.get(pos);
        if owner != Stone::Empty && check_win(board, pos, owner) {
            return Some(if owner == Stone::Engine { WIN_SCORE } else { -WIN_SCORE });
        }
    }
    board.is_full().then_some(0)
}
