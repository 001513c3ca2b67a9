//! Error types for the lotto-draw core.

use thiserror::Error;

/// Errors produced by draw operations.
#[derive(Debug, Error, PartialEq)]
pub enum DrawError {
    /// A batch was requested with a set count outside the supported range.
    #[error("invalid set count {count}: expected {min}..={max}")]
    InvalidCount { count: usize, min: usize, max: usize },

    /// A ball value was outside the drawable range.
    #[error("ball value {0} out of range 1..=45")]
    OutOfRange(u32),

    /// Caller-supplied values do not form a valid combination.
    #[error("invalid combination: {0}")]
    InvalidCombination(String),

    /// The random source kept repeating values until the safety cap tripped.
    #[error("random source exhausted: {accepted} distinct values after {draws} draws")]
    SourceExhausted { draws: usize, accepted: usize },

    /// A stagger offset was negative, not finite, or too large.
    #[error("invalid stagger '{name}': {value}")]
    InvalidStagger { name: String, value: f64 },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A saved draw file was read but is not a valid draw seed.
    #[error("invalid seed file: {0}")]
    InvalidSeedFile(String),

    /// Reading or writing a saved draw failed.
    #[error("I/O error: {0}")]
    Io(String),
}
