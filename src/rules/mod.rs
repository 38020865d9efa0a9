//! Game rules for standard five-in-a-row
//!
//! - Five or more contiguous stones on any axis wins
//! - A full board without a five is a draw

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, check_winner, find_five_positions, has_five_in_row, DIRECTIONS};
