//! Search module for the Gomoku AI
//!
//! Contains:
//! - Candidate move generation around existing stones
//! - SHA-256 board fingerprints for position identification
//! - Transposition cache for sharing search results
//! - Alpha-Beta search with iterative deepening
//! - One-ply heuristic for the lowest difficulty
//! - Instrumentation counters

pub mod alphabeta;
pub mod fingerprint;
pub mod movegen;
pub mod one_ply;
pub mod stats;
pub mod tt;

pub use alphabeta::{SearchResult, Searcher, WIN_SCORE};
pub use fingerprint::Fingerprint;
pub use movegen::generate_candidates;
pub use one_ply::{one_ply_move, BLOCK_SCORE};
pub use stats::{EngineStats, Instrumentation};
pub use tt::{CacheEntry, CacheStats, EntryType, TranspositionCache};
