//! Error types for DDS handling.

use thiserror::Error;

/// Fatal conditions that stop a DDS load.
///
/// Recoverable anomalies never surface as an `Error`; they are recorded as
/// warnings in a [`Diagnostics`](crate::Diagnostics) log instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] ddscope_common::Error),

    /// The buffer cannot hold the magic and the primary header.
    #[error("buffer too small: needed {needed} bytes, got {available}")]
    TooSmall { needed: usize, available: usize },

    /// Invalid DDS magic.
    #[error("invalid DDS magic: expected 'DDS ', got {0:?}")]
    BadMagic([u8; 4]),

    /// The pixel format announces a DXT10 extension that is not there.
    #[error("DXT10 extension truncated: needed {needed} bytes, got {available}")]
    Truncated { needed: usize, available: usize },

    /// No bits-per-pixel value could be derived for the resolved format.
    #[error("cannot deduce bits per pixel for format {0}")]
    UndeducibleBitsPerPixel(String),

    /// Extraction produced no image levels at all.
    #[error("no image data")]
    NoImageData,

    /// An operation needed a loaded buffer but none was installed.
    #[error("no DDS buffer loaded")]
    NotLoaded,
}

/// Result type for DDS operations.
pub type Result<T> = std::result::Result<T, Error>;
