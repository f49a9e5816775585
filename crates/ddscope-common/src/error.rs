//! Error types for ddscope-common.

use thiserror::Error;

/// Common error type for ddscope operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// End of buffer reached while reading.
    #[error("unexpected end of buffer: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
