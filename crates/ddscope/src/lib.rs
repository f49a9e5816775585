//! ddscope - DDS texture inspection library.
//!
//! This crate provides a unified interface to the ddscope crates.
//!
//! # Crates
//!
//! - [`ddscope_common`] - Binary reading primitives
//! - [`ddscope_dds`] - DDS header parsing, format resolution and mip extraction
//!
//! # Example
//!
//! ```no_run
//! use ddscope::prelude::*;
//!
//! let data = std::fs::read("texture.dds")?;
//! let (texture, diagnostics) = DdsTexture::from_bytes(data);
//! for entry in diagnostics.entries() {
//!     println!("{entry}");
//! }
//! if !diagnostics.is_fatal() {
//!     println!("{} levels", texture.levels().count());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use ddscope_common as common;
pub use ddscope_dds as dds;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ddscope_common::BinaryReader;
    pub use ddscope_dds::{
        is_dds, Compression, DdsTexture, Diagnostics, DxgiFormat, FourCC, ImageLevel, Severity,
    };
}

// Re-export commonly used types at the crate root
pub use ddscope_dds::DdsTexture;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
