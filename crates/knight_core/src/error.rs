//! Error types for config and history I/O.
//!
//! The trainer state machine itself never fails: rejected moves and exhausted
//! task sampling are ordinary outcomes, not errors.

use thiserror::Error;

/// A string that is not a two-character square name like `e4`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid square `{0}`: expected a file a-h followed by a rank 1-8")]
pub struct ParseSquareError(pub String);

#[derive(Error, Debug)]
pub enum TrainerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    ParseSquare(#[from] ParseSquareError),

    #[error("Invalid config: {0}")]
    InvalidConfig(&'static str),
}
