//! Static evaluation of cells and whole boards
//!
//! Only used at depth-0 leaves of the search and by the one-ply heuristic.
//! Board scores are from the engine's point of view: engine stones count
//! positive, opponent stones negative.

use crate::board::{Board, Pos, Stone};
use crate::rules::DIRECTIONS;

use super::patterns::{classify, Sym, Window, WINDOW_CENTER, WINDOW_LEN};

/// Manhattan radius inside which the last move earns a centre bonus
const CENTER_BONUS_RADIUS: i32 = 7;

/// Weight per distance unit of the centre bonus
const CENTER_BONUS_WEIGHT: i32 = 2;

/// Build the nine-cell window through `pos` along `(dx, dy)`.
///
/// The centre is always recorded as `side`'s own stone, so an empty cell is
/// scored as if `side` had just played there.
#[must_use]
pub fn window_at(board: &Board, pos: Pos, dx: i32, dy: i32, side: Stone) -> Window {
    let mut window = [Sym::Edge; WINDOW_LEN];
    for (i, slot) in window.iter_mut().enumerate() {
        #[allow(clippy::cast_possible_wrap)]
        let step = i as i32 - WINDOW_CENTER as i32;
        if step == 0 {
            *slot = Sym::Own;
            continue;
        }
        *slot = match pos.offset(dx * step, dy * step) {
            None => Sym::Edge,
            Some(p) => match board.get(p) {
                Stone::Empty => Sym::Empty,
                s if s == side => Sym::Own,
                _ => Sym::Opp,
            },
        };
    }
    window
}

/// Score a single cell for `side`: the sum of its four axis windows.
#[must_use]
pub fn evaluate_cell(board: &Board, pos: Pos, side: Stone) -> i32 {
    DIRECTIONS
        .iter()
        .map(|&(dx, dy)| classify(&window_at(board, pos, dx, dy, side)))
        .sum()
}

/// Evaluate the whole board from the engine's perspective.
///
/// Every occupied cell contributes its [`evaluate_cell`] score, signed by
/// owner. The last move adds a small bonus the closer it is to the centre.
#[must_use]
pub fn evaluate(board: &Board, last_move: Option<Pos>) -> i32 {
    let engine: i32 = board
        .engine
        .iter_ones()
        .map(|pos| evaluate_cell(board, pos, Stone::Engine))
        .sum();
    let human: i32 = board
        .human
        .iter_ones()
        .map(|pos| evaluate_cell(board, pos, Stone::Human))
        .sum();

    engine - human + center_bonus(last_move)
}

#[inline]
fn center_bonus(last_move: Option<Pos>) -> i32 {
    last_move.map_or(0, |pos| {
        (CENTER_BONUS_RADIUS - i32::from(pos.manhattan(Pos::CENTER))) * CENTER_BONUS_WEIGHT
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board, None), 0, "Empty board should have score 0");
    }

    #[test]
    fn test_single_center_stone() {
        let mut board = Board::new();
        board.place_stone(Pos::CENTER, Stone::Engine);
        // 4 isolated axes + full centre bonus
        assert_eq!(evaluate(&board, Some(Pos::CENTER)), 4 + 14);
    }

    #[test]
    fn test_center_bonus_falls_off() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::Engine);
        // Corner is 14 steps from centre: (7 - 14) * 2
        assert_eq!(evaluate(&board, Some(Pos::new(0, 0))), 4 - 14);
    }

    #[test]
    fn test_window_edges() {
        let board = Board::new();
        let window = window_at(&board, Pos::new(1, 0), 1, 0, Stone::Engine);
        assert_eq!(window[0], Sym::Edge);
        assert_eq!(window[1], Sym::Edge);
        assert_eq!(window[2], Sym::Edge);
        assert_eq!(window[3], Sym::Empty);
        assert_eq!(window[WINDOW_CENTER], Sym::Own);
    }

    #[test]
    fn test_window_is_relative_to_side() {
        let mut board = Board::new();
        board.place_stone(Pos::new(6, 7), Stone::Human);
        board.place_stone(Pos::new(8, 7), Stone::Engine);
        let for_engine = window_at(&board, Pos::CENTER, 1, 0, Stone::Engine);
        let for_human = window_at(&board, Pos::CENTER, 1, 0, Stone::Human);
        assert_eq!((for_engine[3], for_engine[5]), (Sym::Opp, Sym::Own));
        assert_eq!((for_human[3], for_human[5]), (Sym::Own, Sym::Opp));
    }

    #[test]
    fn test_evaluate_cell_open_four() {
        let mut board = Board::new();
        for x in 5..9 {
            board.place_stone(Pos::new(x, 7), Stone::Engine);
        }
        // Horizontal four plus three isolated axes
        assert_eq!(
            evaluate_cell(&board, Pos::new(6, 7), Stone::Engine),
            PatternScore::OPEN_FOUR + 3 * PatternScore::ISOLATED
        );
        // Empty cell completing the five
        assert_eq!(
            evaluate_cell(&board, Pos::new(9, 7), Stone::Engine),
            PatternScore::FIVE + 3 * PatternScore::ISOLATED
        );
    }

    #[test]
    fn test_evaluate_cell_block() {
        let mut board = Board::new();
        for x in 5..9 {
            board.place_stone(Pos::new(x, 7), Stone::Human);
        }
        assert_eq!(
            evaluate_cell(&board, Pos::new(9, 7), Stone::Engine),
            PatternScore::BLOCK_FOUR + 3 * PatternScore::ISOLATED
        );
    }

    #[test]
    fn test_evaluate_perspective() {
        let mut ours = Board::new();
        let mut theirs = Board::new();
        for x in 1..4 {
            ours.place_stone(Pos::new(x, 9), Stone::Engine);
            theirs.place_stone(Pos::new(x, 9), Stone::Human);
        }
        let a = evaluate(&ours, None);
        let b = evaluate(&theirs, None);
        assert!(a > 0, "Our pattern should give positive score, got {a}");
        assert_eq!(a, -b, "Evaluation should be antisymmetric without a last move");
    }

    #[test]
    fn test_five_dominates() {
        let mut board = Board::new();
        for x in 0..5 {
            board.place_stone(Pos::new(x, 9), Stone::Human);
        }
        let score = evaluate(&board, None);
        assert!(score <= -PatternScore::FIVE, "Opponent five should be very negative, got {score}");
    }
}
