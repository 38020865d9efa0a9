//! One-ply heuristic for the lowest difficulty
//!
//! No tree search: take a winning move if there is one, otherwise block the
//! opponent's winning move, otherwise play the candidate whose cell scores
//! best for the engine.

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate_cell;
use crate::rules::check_win;

use super::alphabeta::WIN_SCORE;
use super::movegen::generate_candidates;

/// Score reported for a move that blocks an immediate loss
pub const BLOCK_SCORE: i32 = 900;

/// First candidate (in scan order) that makes five for `stone`.
fn first_five(board: &mut Board, candidates: &[Pos], stone: Stone) -> Option<Pos> {
    candidates.iter().copied().find(|&pos| {
        let placed = board.place_scoped(pos, stone);
        check_win(&placed, pos, stone)
    })
}

/// Pick the engine's move without searching.
///
/// Returns `None` only when there are no candidates.
pub fn one_ply_move(board: &mut Board) -> Option<(Pos, i32)> {
    let candidates = generate_candidates(board);

    if let Some(pos) = first_five(board, &candidates, Stone::Engine) {
        return Some((pos, WIN_SCORE));
    }
    if let Some(pos) = first_five(board, &candidates, Stone::Human) {
        return Some((pos, BLOCK_SCORE));
    }

    let mut best: Option<(Pos, i32)> = None;
    for &pos in &candidates {
        let score = evaluate_cell(board, pos, Stone::Engine);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    #[test]
    fn test_takes_win() {
        let mut board = Board::new();
        for x in 5..9 {
            board.place_stone(Pos::new(x, 7), Stone::Engine);
        }
        // Opponent four elsewhere must not distract from our own win
        for y in 0..4 {
            board.place_stone(Pos::new(1, y), Stone::Human);
        }
        let (pos, score) = one_ply_move(&mut board).unwrap();
        assert_eq!(pos, Pos::new(4, 7), "First winning cell in scan order");
        assert_eq!(score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_loss() {
        let mut board = Board::new();
        for x in 5..9 {
            board.place_stone(Pos::new(x, 7), Stone::Human);
        }
        let (pos, score) = one_ply_move(&mut board).unwrap();
        assert_eq!(pos, Pos::new(4, 7));
        assert_eq!(score, BLOCK_SCORE);
    }

    #[test]
    fn test_prefers_best_cell() {
        let mut board = Board::new();
        board.place_stone(Pos::new(6, 7), Stone::Engine);
        board.place_stone(Pos::new(7, 7), Stone::Engine);
        board.place_stone(Pos::new(3, 3), Stone::Human);

        let (pos, score) = one_ply_move(&mut board).unwrap();
        // Extending the two to an open three beats every other cell
        assert!(pos == Pos::new(5, 7) || pos == Pos::new(8, 7), "got {pos}");
        assert!(score >= PatternScore::OPEN_THREE);
    }

    #[test]
    fn test_empty_board_stays_central() {
        let mut board = Board::new();
        let (pos, _) = one_ply_move(&mut board).unwrap();
        assert!(pos.chebyshev(Pos::CENTER) <= 1);
    }

    #[test]
    fn test_board_restored() {
        let mut board = Board::new();
        for x in 5..8 {
            board.place_stone(Pos::new(x, 7), Stone::Human);
        }
        let before = board.clone();
        let _ = one_ply_move(&mut board);
        assert_eq!(board, before);
    }
}
