//! Five-in-a-row detection
//!
//! A side wins by placing five or more of its stones contiguously along one
//! of the four axes. There are no captures and no forbidden moves.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 axes), as `(dx, dy)`
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal \
    (1, -1), // Diagonal /
];

/// Count contiguous `stone` cells from `pos` (exclusive) stepping by `(dx, dy)`.
#[inline]
fn run_length(board: &Board, pos: Pos, dx: i32, dy: i32, stone: Stone) -> u32 {
    let mut count = 0;
    let mut cur = pos.offset(dx, dy);
    while let Some(p) = cur {
        if board.get(p) != stone {
            break;
        }
        count += 1;
        cur = p.offset(dx, dy);
    }
    count
}

/// Whether `stone` at `pos` completes five or more in a row.
///
/// Counts contiguous same-side stones in both directions along each axis.
/// Off-board and opposing cells end a run. The cell at `pos` itself is
/// counted as `stone` whatever the board holds there.
#[inline]
pub fn check_win(board: &Board, pos: Pos, stone: Stone) -> bool {
    if stone == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dx, dy)| {
        1 + run_length(board, pos, dx, dy, stone) + run_length(board, pos, -dx, -dy, stone) >= 5
    })
}

/// Find the positions of a 5-in-a-row if one exists.
pub fn find_five_positions(board: &Board, stone: Stone) -> Option<Vec<Pos>> {
    let stones = board.stones(stone)?;

    for pos in stones.iter_ones() {
        for &(dx, dy) in &DIRECTIONS {
            // Only start from the first stone of a run
            if pos.offset(-dx, -dy).is_some_and(|prev| board.get(prev) == stone) {
                continue;
            }
            let mut line = vec![pos];
            let mut cur = pos.offset(dx, dy);
            while let Some(p) = cur {
                if board.get(p) != stone {
                    break;
                }
                line.push(p);
                cur = p.offset(dx, dy);
            }
            if line.len() >= 5 {
                return Some(line);
            }
        }
    }
    None
}

/// Check if there's 5+ in a row anywhere for the given side
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    find_five_positions(board, stone).is_some()
}

/// Side holding a five, if any.
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Engine, Stone::Human]
        .into_iter()
        .find(|&stone| has_five_in_row(board, stone))
}
