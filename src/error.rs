//! Error types for the landing page.

use thiserror::Error;

/// Rejected animation parameters. Raised when a counter is built, never while it runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// Target is negative, NaN, infinite or too large to count exactly
    #[error("invalid counter target {0}: must be a finite number between 0 and 2^53")]
    InvalidTarget(f64),

    /// Target has a fractional part
    #[error("invalid counter target {0}: must be a whole number")]
    FractionalTarget(f64),

    /// Duration is zero, negative, NaN or infinite
    #[error("invalid animation duration {0}ms: must be a finite number > 0")]
    InvalidDuration(f64),
}

/// Errors while loading the embedded site configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("site config field `{0}` is empty")]
    MissingField(&'static str),
}
