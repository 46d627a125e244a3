//! Setup-time errors
//!
//! Stepping a session never fails. Everything that can go wrong happens
//! while building the tuning or the key map.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("`{field}` must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("friction must be in (0, 1], got {0}")]
    FrictionOutOfRange(f32),

    #[error("drift interval is inverted: min {min} > max {max}")]
    DriftInterval { min: f32, max: f32 },

    #[error("keyboard layout has no rows")]
    EmptyLayout,

    #[error("keyboard layout rows are all empty")]
    EmptyRows,

    #[error("key `{0}` appears more than once in the keyboard layout")]
    DuplicateKey(char),

    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
}
