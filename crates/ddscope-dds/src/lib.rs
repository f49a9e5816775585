//! DDS (DirectDraw Surface) texture parsing.
//!
//! A DDS file is a 4-byte magic, a 124-byte header, an optional 20-byte
//! DXT10 extension and the pixel payload. The pixel format can be signalled
//! several overlapping ways (FourCC codes, legacy D3D9 format numbers stored
//! as FourCCs, DXGI enumerants, or raw channel bitmasks); this crate
//! resolves them to one canonical description, computes the pixel layout,
//! and carves bounds-checked views of every mip level out of the buffer.
//!
//! Malformed files degrade gracefully: every stage reports into a
//! [`Diagnostics`] log, and only [`Severity::Fatal`] entries stop processing.
//!
//! # Example
//!
//! ```no_run
//! use ddscope_dds::{DdsTexture, Severity};
//!
//! let data = std::fs::read("texture.dds")?;
//! let (texture, diagnostics) = DdsTexture::from_bytes(data);
//! if diagnostics.severity() < Severity::Fatal {
//!     if let Some(top) = texture.get_image_data(0, 0) {
//!         println!("{:?}: {}x{}", texture.format(), top.width, top.height);
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod diagnostics;
mod error;
mod extract;
mod format;
mod header;
mod layout;
mod legacy;
mod resolve;
mod texture;

#[cfg(test)]
mod test_support;

pub use diagnostics::{Diagnosed, Diagnostic, Diagnostics, Severity};
pub use error::{Error, Result};
pub use extract::{data_offset, extract_levels, Extraction, LevelRecord, MAX_BYTES_PER_PIXEL};
pub use format::{Compression, DxgiFormat, FormatInfo};
pub use header::{
    caps2, ddpf, ddsd, is_dds, AlphaMode, DdsHeader, DdsHeaderDxt10, DdsPixelFormat, FourCC,
    ResourceDimension, DDS_MAGIC, DXT10_OFFSET,
};
pub use layout::{compute_layout, ChannelBits, Dimensions, PixelLayout, MAX_MIP_COUNT};
pub use legacy::LegacyFormat;
pub use resolve::{lookup_four_cc, resolve_format, ColorTransform, FormatSource, ResolvedFormat};
pub use texture::{DdsTexture, ImageLevel};

/// Look up a legacy D3D9 device format stored in the FourCC slot.
pub fn lookup_legacy_format(code: u32) -> Option<&'static LegacyFormat> {
    legacy::lookup(code)
}
