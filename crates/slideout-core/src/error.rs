#![forbid(unsafe_code)]

//! Error types for the panel engine.

use thiserror::Error;

/// Anchor validation failure.
///
/// Raised when an anchor is set outside the closed interval `[0.0, 1.0]`
/// (NaN included). The previous anchor value is always retained.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum AnchorError {
    #[error("anchor must be between 0.0 and 1.0, got {value}")]
    OutOfRange { value: f32 },
}

/// Host constraint failures detected at first layout.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MountError {
    /// The panel's owned visual content must be exactly one element.
    #[error("slide-out panel requires exactly one child visual, found {found}")]
    InvalidChildCount { found: usize },
}
