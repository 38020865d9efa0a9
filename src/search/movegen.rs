//! Candidate move generation
//!
//! Restricts the search frontier to empty cells near existing stones, which
//! cuts branching from up to 225 moves per ply to a few dozen.

use crate::board::{Board, Pos, TOTAL_CELLS};

/// Chebyshev radius around each stone that yields candidates
const NEIGHBOR_RADIUS: i32 = 2;

/// Chebyshev radius around the centre used on an empty board
const OPENING_RADIUS: i32 = 1;

/// Generate candidate moves in row-major order.
///
/// Every empty cell within distance 2 of any stone is a candidate. On an
/// empty board the candidates are the empty cells within distance 1 of
/// the centre. The result is deduplicated and never contains an occupied
/// cell.
#[must_use]
pub fn generate_candidates(board: &Board) -> Vec<Pos> {
    let mut marked = [false; TOTAL_CELLS];

    if board.is_board_empty() {
        mark_around(board, Pos::CENTER, OPENING_RADIUS, &mut marked);
    } else {
        for stone in board.occupied().iter_ones() {
            mark_around(board, stone, NEIGHBOR_RADIUS, &mut marked);
        }
    }

    marked
        .iter()
        .enumerate()
        .filter(|(_, &m)| m)
        .map(|(idx, _)| Pos::from_index(idx))
        .collect()
}

#[inline]
fn mark_around(board: &Board, center: Pos, radius: i32, marked: &mut [bool; TOTAL_CELLS]) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if let Some(pos) = center.offset(dx, dy) {
                if board.is_empty(pos) {
                    marked[pos.to_index()] = true;
                }
            }
        }
    }
}
