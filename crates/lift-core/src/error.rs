//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::Floor;

/// The error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiftError {
    #[error("a hall call at floor {0} must be Up or Down, not Idle")]
    IdleCall(Floor),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lift-core`.
pub type LiftResult<T> = Result<T, LiftError>;
