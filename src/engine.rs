//! Main AI Engine integrating all search components
//!
//! The engine maps a [`Difficulty`] to a [`Strategy`] at the top level:
//!
//! 1. **Easy**: one-ply heuristic (win, else block, else best cell)
//! 2. **Medium / Hard / Expert**: alpha-beta with iterative deepening to
//!    depth 4 / 6 / 8, bounded by the configured time limit
//!
//! One engine can serve many games at once. All search entry points take
//! `&self`; the only state shared between concurrent calls is the
//! transposition cache and the instrumentation counters.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut engine = AIEngine::new();
//! engine.set_time_limit(Duration::from_millis(500));
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Human);
//!
//! let mv = engine.compute_move(&board, Some(Pos::new(7, 7)), Difficulty::Medium);
//! assert!(board.is_empty(mv.pos()));
//! println!("Play at ({}, {}) score {}", mv.x, mv.y, mv.score);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::search::{
    generate_candidates, one_ply_move, EngineStats, Instrumentation, Searcher, TranspositionCache,
};

/// Score reported when no search produced a move
pub const FALLBACK_SCORE: i32 = -1;

/// Upper bound applied to the time limit when computing a deadline
const MAX_TIME_LIMIT: Duration = Duration::from_secs(24 * 60 * 60);

/// Playing strength
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// All tiers, weakest first
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Nominal search depth of the tier. Easy never searches.
    #[must_use]
    pub const fn max_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => 8,
        }
    }

    /// Algorithm used for this tier
    #[must_use]
    pub const fn strategy(self) -> Strategy {
        match self {
            Difficulty::Easy => Strategy::OnePly,
            _ => Strategy::IterativeDeepening {
                max_depth: self.max_depth(),
            },
        }
    }

    /// Parse a difficulty name, falling back to [`Difficulty::Medium`].
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or(Difficulty::Medium)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(EngineError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// How a move is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Win, else block, else best single cell
    OnePly,
    /// Alpha-beta to increasing depths until the deadline
    IterativeDeepening { max_depth: u8 },
}

/// Move chosen by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AIMove {
    pub x: u8,
    pub y: u8,
    /// Engine-perspective score; +/-100000 is a forced win/loss
    pub score: i32,
}

impl AIMove {
    #[must_use]
    pub fn new(pos: Pos, score: i32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            score,
        }
    }

    #[must_use]
    pub fn pos(&self) -> Pos {
        Pos::new(self.x, self.y)
    }
}

/// Main AI Engine for Gomoku.
///
/// Owns the transposition cache shared by every call on this instance.
/// The engine is `Send + Sync`; wrap it in an `Arc` or borrow it across
/// scoped threads to serve several games at once.
pub struct AIEngine {
    config: EngineConfig,
    cache: TranspositionCache,
    instrumentation: Instrumentation,
}

impl AIEngine {
    /// Create an engine with the default configuration (5 s per move).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let cache = TranspositionCache::new(config.cache_capacity);
        log::debug!(
            "engine ready: time limit {:?}, cache capacity {}",
            config.time_limit,
            cache.capacity()
        );
        Self {
            cache,
            instrumentation: Instrumentation::default(),
            config,
        }
    }

    /// Change the wall-clock budget for later calls.
    pub fn set_time_limit(&mut self, time_limit: Duration) {
        self.config.time_limit = time_limit;
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Choose the engine's next move.
    ///
    /// `board` must already contain `last_move`, the opponent's move that
    /// produced it. The board is copied into a private scratch buffer, so the
    /// caller's board is never touched.
    ///
    /// Never fails: if the deadline expires before a move is found, the first
    /// candidate (or the centre when there is none) is returned with score -1.
    pub fn compute_move(
        &self,
        board: &Board,
        last_move: Option<Pos>,
        difficulty: Difficulty,
    ) -> AIMove {
        let start = Instant::now();
        self.instrumentation.reset();

        let mut scratch = board.clone();
        let (found, nodes, cutoffs, depth) = match difficulty.strategy() {
            Strategy::OnePly => (one_ply_move(&mut scratch), 0, 0, 0),
            Strategy::IterativeDeepening { max_depth } => {
                let deadline = start + self.config.time_limit.min(MAX_TIME_LIMIT);
                let result =
                    Searcher::new(&self.cache, deadline).search(&mut scratch, last_move, max_depth);
                let found = result.best_move.map(|mov| (mov, result.score));
                (found, result.nodes, result.cutoffs, result.depth)
            }
        };

        let (pos, score) = found.unwrap_or_else(|| {
            let fallback = generate_candidates(board).first().copied().unwrap_or(Pos::CENTER);
            log::warn!(
                "no move found within {:?}, falling back to {fallback}",
                self.config.time_limit
            );
            (fallback, FALLBACK_SCORE)
        });

        let elapsed = start.elapsed();
        self.instrumentation.record(nodes, cutoffs, depth, elapsed);

        log::info!(
            "{difficulty}: move {pos} score={score} depth={depth} nodes={nodes} cutoffs={cutoffs} time={elapsed:?} cache={}",
            self.cache.len()
        );

        AIMove::new(pos, score)
    }

    /// [`compute_move`](Self::compute_move) on raw caller input.
    ///
    /// `grid[y][x]` holds 0 (empty), 1 (opponent) or 2 (engine). A last move
    /// of `(-1, -1)` means there is none.
    pub fn compute_move_from_grid<R: AsRef<[i32]>>(
        &self,
        grid: &[R],
        last_move: (i32, i32),
        difficulty: Difficulty,
    ) -> Result<AIMove, EngineError> {
        let board = Board::from_grid(grid)?;
        let last_move = Pos::from_last_move(last_move.0, last_move.1)?;
        Ok(self.compute_move(&board, last_move, difficulty))
    }

    /// Snapshot of the counters. Safe to call while searches are running.
    #[must_use]
    pub fn stats(&self) -> EngineStats {
        let cache = self.cache.stats();
        EngineStats {
            nodes_searched: self.instrumentation.nodes(),
            cutoffs: self.instrumentation.cutoffs(),
            cache_entries: cache.entries,
            last_search_duration: self.instrumentation.last_duration(),
            depth_reached: self.instrumentation.depth(),
            cache_hits: cache.hits,
            cache_misses: cache.misses,
        }
    }

    /// Empty the transposition cache.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
