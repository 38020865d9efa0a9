//! Board representation for 15x15 five-in-a-row

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, PlacedStone};

use crate::error::EngineError;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Cell contents. The numeric codes match the wire encoding used by callers:
/// 0 = empty, 1 = opponent (human), 2 = engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Human,
    Engine,
}

impl Stone {
    /// Wire code of this cell (0, 1 or 2)
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Stone::Empty => 0,
            Stone::Human => 1,
            Stone::Engine => 2,
        }
    }

    /// Decode a wire cell value
    #[inline]
    pub fn from_code(code: i32) -> Option<Stone> {
        match code {
            0 => Some(Stone::Empty),
            1 => Some(Stone::Human),
            2 => Some(Stone::Engine),
            _ => None,
        }
    }
}

/// Position on the board. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    /// Board center (7, 7)
    pub const CENTER: Pos = Pos {
        x: (BOARD_SIZE / 2) as u8,
        y: (BOARD_SIZE / 2) as u8,
    };

    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    /// Checked constructor for raw caller coordinates.
    pub fn try_new(x: i32, y: i32) -> Result<Self, EngineError> {
        if Self::is_valid(x, y) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Ok(Self::new(x as u8, y as u8))
        } else {
            Err(EngineError::OutOfBounds { x, y })
        }
    }

    /// Decode an optional last move where `(-1, -1)` is the "no move" sentinel.
    pub fn from_last_move(x: i32, y: i32) -> Result<Option<Self>, EngineError> {
        if x == -1 && y == -1 {
            return Ok(None);
        }
        Self::try_new(x, y).map(Some)
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % BOARD_SIZE) as u8,
            y: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// Offset by `(dx, dy)`, or `None` when it leaves the board.
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Pos> {
        let x = i32::from(self.x) + dx;
        let y = i32::from(self.y) + dy;
        if Self::is_valid(x, y) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Chebyshev (king-move) distance
    #[inline]
    pub fn chebyshev(self, other: Pos) -> u8 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Manhattan distance
    #[inline]
    pub fn manhattan(self, other: Pos) -> u8 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major scan order
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
