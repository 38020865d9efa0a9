//! Gomoku AI move search
//!
//! A move-search engine for five-in-a-row on a 15x15 board:
//! - Free-style rules: five or more in a row wins, no captures
//! - Cells are empty, human (opponent) or engine
//! - The engine always moves next and maximizes its own score
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and scoped placement
//! - [`rules`]: Five-in-a-row detection
//! - [`eval`]: Pattern windows and static evaluation
//! - [`search`]: Candidate generation, transposition cache, alpha-beta
//! - [`engine`]: Difficulty policy and the public entry points
//! - [`config`]: Time budget and cache capacity
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use gomoku::{AIEngine, Board, Difficulty, EngineConfig, Pos, Stone};
//!
//! let config = EngineConfig::default().with_time_limit(Duration::from_millis(500));
//! let engine = AIEngine::with_config(config);
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Human);
//!
//! let mv = engine.compute_move(&board, Some(Pos::new(7, 7)), Difficulty::Medium);
//! board.place_stone(mv.pos(), Stone::Engine);
//!
//! let stats = engine.stats();
//! assert!(stats.cache_entries > 0);
//! ```
//!
//! # Difficulty
//!
//! - Easy: one-ply heuristic, no search
//! - Medium / Hard / Expert: iterative deepening to depth 4 / 6 / 8
//!
//! Every call is bounded by the configured time limit (5 s by default).

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{AIEngine, AIMove, Difficulty, Strategy};
pub use error::{ConfigError, EngineError};
pub use search::EngineStats;
