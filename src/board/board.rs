//! Board structure with make/unmake support

use std::ops::{Deref, DerefMut};

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::EngineError;

/// Game board.
///
/// The search uses a single board as scratch space: every hypothetical
/// placement goes through [`Board::place_scoped`] so the stone is removed
/// again on every exit path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Opponent (human) stones
    pub human: Bitboard,
    /// Engine stones
    pub engine: Bitboard,
    /// Number of stones on the board
    stone_count: u8,
}

impl Board {
    pub fn new() -> Self {
        Self {
            human: Bitboard::new(),
            engine: Bitboard::new(),
            stone_count: 0,
        }
    }

    /// Build a board from a `grid[y][x]` of wire codes (0 empty, 1 human, 2 engine).
    ///
    /// # Example
    ///
    /// ```
    /// use gomoku::{Board, Pos, Stone};
    ///
    /// let mut grid = vec![vec![0; 15]; 15];
    /// grid[7][8] = 2;
    /// let board = Board::from_grid(&grid).unwrap();
    /// assert_eq!(board.get(Pos::new(8, 7)), Stone::Engine);
    /// ```
    pub fn from_grid<R: AsRef<[i32]>>(grid: &[R]) -> Result<Self, EngineError> {
        if grid.len() != BOARD_SIZE || grid.iter().any(|row| row.as_ref().len() != BOARD_SIZE) {
            return Err(EngineError::InvalidDimensions {
                rows: grid.len(),
                cols: grid.first().map_or(0, |row| row.as_ref().len()),
            });
        }

        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, &value) in row.as_ref().iter().enumerate() {
                let stone =
                    Stone::from_code(value).ok_or(EngineError::InvalidCell { x, y, value })?;
                #[allow(clippy::cast_possible_truncation)]
                board.place_stone(Pos::new(x as u8, y as u8), stone);
            }
        }
        Ok(board)
    }

    /// Export as `grid[y][x]` wire codes.
    pub fn to_grid(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            grid[pos.y as usize][pos.x as usize] = self.get(pos).code();
        }
        grid
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.engine.get(pos) {
            Stone::Engine
        } else if self.human.get(pos) {
            Stone::Human
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.human.get(pos) && !self.engine.get(pos)
    }

    /// In bounds and empty
    #[inline]
    pub fn is_valid_move(&self, x: i32, y: i32) -> bool {
        Pos::try_new(x, y).is_ok_and(|pos| self.is_empty(pos))
    }

    /// Place a stone on an empty cell. Placing `Stone::Empty` is a no-op.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(
            stone == Stone::Empty || self.is_empty(pos),
            "place on occupied cell {pos}"
        );
        match stone {
            Stone::Human => self.human.set(pos),
            Stone::Engine => self.engine.set(pos),
            Stone::Empty => return,
        }
        self.stone_count += 1;
    }

    /// Remove a stone, restoring the cell to empty
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        if !self.is_empty(pos) {
            self.human.clear(pos);
            self.engine.clear(pos);
            self.stone_count -= 1;
        }
    }

    /// Place a stone for the lifetime of the returned guard.
    ///
    /// The guard dereferences to the board; dropping it removes the stone.
    ///
    /// ```
    /// use gomoku::{Board, Pos, Stone};
    ///
    /// let mut board = Board::new();
    /// {
    ///     let placed = board.place_scoped(Pos::CENTER, Stone::Engine);
    ///     assert_eq!(placed.get(Pos::CENTER), Stone::Engine);
    /// }
    /// assert!(board.is_empty(Pos::CENTER));
    /// ```
    #[inline]
    pub fn place_scoped(&mut self, pos: Pos, stone: Stone) -> PlacedStone<'_> {
        self.place_stone(pos, stone);
        PlacedStone { board: self, pos }
    }

    /// Get bitboard for a side (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Human => Some(&self.human),
            Stone::Engine => Some(&self.engine),
            Stone::Empty => None,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.human.union(&self.engine)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        u32::from(self.stone_count)
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stone_count == 0
    }

    /// True when all 225 cells are occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count as usize == TOTAL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A stone placed by [`Board::place_scoped`], removed again on drop.
pub struct PlacedStone<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl PlacedStone<'_> {
    /// Where the stone was placed
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for PlacedStone<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for PlacedStone<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PlacedStone<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}
