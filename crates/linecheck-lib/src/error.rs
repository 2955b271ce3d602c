use thiserror::Error;

/// Convenient result alias for the line check library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a coordinate array holds fewer than two numbers.
    #[error("position requires at least 2 coordinates, got {found}")]
    InvalidPosition { found: usize },

    /// Raised when a line string has too few positions to form a segment.
    #[error("line string requires at least {required} positions, got {found}")]
    TooFewPositions { required: usize, found: usize },

    /// Wrapper for JSON encoding and decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
