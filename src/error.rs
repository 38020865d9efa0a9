//! Error types for the boundaries of the engine
//!
//! The search itself is total over well-formed boards; these errors only
//! arise when decoding caller input or loading configuration.

/// Errors raised while decoding caller input
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Grid is not 15x15
    #[error("board must be 15x15, got {rows} rows x {cols} columns")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Cell value outside {0, 1, 2}
    #[error("invalid cell value {value} at ({x}, {y})")]
    InvalidCell { x: usize, y: usize, value: i32 },

    /// Coordinate outside 0..15
    #[error("coordinate ({x}, {y}) is off the board")]
    OutOfBounds { x: i32, y: i32 },

    /// Difficulty name not recognised
    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),
}

/// Errors raised while loading [`crate::config::EngineConfig`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable could not be parsed
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    /// A zero time budget would stop every search before depth 1
    #[error("time limit must be greater than zero")]
    ZeroTimeLimit,
}
