//! Board fingerprints for the transposition cache
//!
//! The 225 cells are flattened row by row into ASCII digits (`'0'`, `'1'`,
//! `'2'`) and hashed with SHA-256. The fingerprint depends only on board
//! content, never on the move order that produced it.

use sha2::{Digest, Sha256};

use crate::board::{Board, Pos, TOTAL_CELLS};

/// SHA-256 digest of a board's contents
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Fingerprint the full board content.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        let mut symbols = [b'0'; TOTAL_CELLS];
        for (idx, symbol) in symbols.iter_mut().enumerate() {
            *symbol = b'0' + board.get(Pos::from_index(idx)).code();
        }
        Self(Sha256::digest(symbols).into())
    }

    /// Raw digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First 8 bytes are plenty to tell entries apart in logs
        write!(f, "Fingerprint(")?;
        for byte in &self.0[..8] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_same_content_same_fingerprint() {
        let mut a = Board::new();
        a.place_stone(Pos::new(3, 3), Stone::Human);
        a.place_stone(Pos::new(4, 4), Stone::Engine);

        // Same stones, different placement order
        let mut b = Board::new();
        b.place_stone(Pos::new(4, 4), Stone::Engine);
        b.place_stone(Pos::new(3, 3), Stone::Human);

        assert_eq!(Fingerprint::of(&a), Fingerprint::of(&b));
    }

    #[test]
    fn test_side_matters() {
        let mut a = Board::new();
        a.place_stone(Pos::CENTER, Stone::Human);
        let mut b = Board::new();
        b.place_stone(Pos::CENTER, Stone::Engine);
        assert_ne!(Fingerprint::of(&a), Fingerprint::of(&b));
        assert_ne!(Fingerprint::of(&a), Fingerprint::of(&Board::new()));
    }

    #[test]
    fn test_make_unmake_restores_fingerprint() {
        let mut board = Board::new();
        board.place_stone(Pos::new(1, 2), Stone::Human);
        let before = Fingerprint::of(&board);
        {
            let placed = board.place_scoped(Pos::new(2, 2), Stone::Engine);
            assert_ne!(Fingerprint::of(&placed), before);
        }
        assert_eq!(Fingerprint::of(&board), before);
    }

    #[test]
    fn test_empty_board_digest() {
        // sha256 of 225 ASCII '0' characters
        let expected: [u8; 32] = Sha256::digest([b'0'; TOTAL_CELLS]).into();
        assert_eq!(Fingerprint::of(&Board::new()).as_bytes(), &expected);
    }

    #[test]
    fn test_debug_is_short_hex() {
        let s = format!("{:?}", Fingerprint::of(&Board::new()));
        assert!(s.starts_with("Fingerprint("));
        assert_eq!(s.len(), "Fingerprint(".len() + 16 + "..)".len());
    }
}
