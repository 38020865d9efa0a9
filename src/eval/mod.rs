//! Static evaluation
//!
//! - [`patterns`]: pattern table and window classification
//! - [`heuristic`]: cell and board scoring built on the patterns

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_cell, window_at};
pub use patterns::{classify, PatternScore, Sym, Window};
