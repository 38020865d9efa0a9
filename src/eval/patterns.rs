//! Pattern scores and window classification
//!
//! A window is the nine cells along one axis centred on the cell being
//! scored: four cells on either side plus the centre. Cells are recorded
//! relative to the side being scored, with [`Sym::Edge`] standing in for
//! off-board cells.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - decided game
    pub const FIVE: i32 = 100_000;
    /// Four in a row with at least one open end: `_OOOO` or `OOOO_`
    pub const OPEN_FOUR: i32 = 10_000;
    /// Stone capping an opposing four: `XXXXO` or `OXXXX`
    pub const BLOCK_FOUR: i32 = 5_000;
    /// Three with both ends open: `_OOO_`
    pub const OPEN_THREE: i32 = 1_000;
    /// Three with one open end: `OOO_` or `_OOO`
    pub const HALF_OPEN_THREE: i32 = 100;
    /// Two with both ends open: `_OO_`
    pub const OPEN_TWO: i32 = 50;
    /// Adjacent to any stone on this axis
    pub const CONTACT: i32 = 10;
    /// Nothing next to it on this axis
    pub const ISOLATED: i32 = 1;
}

/// One window cell, relative to the side being scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sym {
    Own,
    Opp,
    Empty,
    Edge,
}

/// Cells per window
pub const WINDOW_LEN: usize = 9;
/// Index of the scored cell inside a window
pub const WINDOW_CENTER: usize = 4;

/// Nine cells along one axis
pub type Window = [Sym; WINDOW_LEN];

use Sym::{Empty as E, Opp as X, Own as O};

/// Ordered pattern table, strongest first. The first pattern found anywhere
/// in the window decides its score.
const PATTERNS: &[(&[Sym], i32)] = &[
    (&[O, O, O, O, O], PatternScore::FIVE),
    (&[E, O, O, O, O], PatternScore::OPEN_FOUR),
    (&[O, O, O, O, E], PatternScore::OPEN_FOUR),
    // The centre is always Own, so these only match when it caps the four
    (&[X, X, X, X, O], PatternScore::BLOCK_FOUR),
    (&[O, X, X, X, X], PatternScore::BLOCK_FOUR),
    (&[E, O, O, O, E], PatternScore::OPEN_THREE),
    (&[O, O, O, E], PatternScore::HALF_OPEN_THREE),
    (&[E, O, O, O], PatternScore::HALF_OPEN_THREE),
    (&[E, O, O, E], PatternScore::OPEN_TWO),
];

#[inline]
fn contains(window: &Window, pattern: &[Sym]) -> bool {
    window.windows(pattern.len()).any(|w| w == pattern)
}

/// Score one window.
#[must_use]
pub fn classify(window: &Window) -> i32 {
    if let Some(&(_, score)) = PATTERNS.iter().find(|(p, _)| contains(window, p)) {
        return score;
    }

    let touching = |s: Sym| matches!(s, Sym::Own | Sym::Opp);
    if touching(window[WINDOW_CENTER - 1]) || touching(window[WINDOW_CENTER + 1]) {
        PatternScore::CONTACT
    } else {
        PatternScore::ISOLATED
    }
}
