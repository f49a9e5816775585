//! Image data extraction.
//!
//! Payload is stored array-slice-major, mip-level-minor. Each level's byte
//! length follows from the resolved format; the walk stops at the first
//! level that does not fit and shrinks the reported dimensions to match
//! what was actually carved out.

use std::fmt;
use std::ops::Range;

use crate::format::DxgiFormat;
use crate::header::{DdsHeader, DdsHeaderDxt10, DXT10_OFFSET};
use crate::layout::{Dimensions, PixelLayout};
use crate::resolve::ResolvedFormat;
use crate::{Diagnosed, Diagnostics, Error, Result};

/// Largest plausible number of bytes per pixel of any supported format.
pub const MAX_BYTES_PER_PIXEL: u64 = 16;

/// Byte offset of the first payload byte.
pub fn data_offset(has_dxt10: bool) -> usize {
    if has_dxt10 {
        DXT10_OFFSET + DdsHeaderDxt10::SIZE
    } else {
        DXT10_OFFSET
    }
}

/// Position and extent of one extracted level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRecord {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    /// Byte range within the file buffer.
    pub range: Range<usize>,
}

/// Levels carved out of a buffer and the dimensions they actually cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub levels: Vec<LevelRecord>,
    pub dimensions: Dimensions,
}

/// How the byte size of a level is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SizeRule {
    Blocks { width: u64, height: u64, bytes: u64 },
    /// 4:2:2 packed, one unit per horizontal pixel pair.
    Packed422 { bytes_per_pair: u64 },
    /// 4:1:1 planar.
    Nv11,
    /// 4:2:0 planar: a luma plane followed by half as much chroma.
    Planar420 { bytes_per_pair: u64 },
    /// Rows rounded to whole bytes per depth slice.
    Dense { bits_per_pixel: u64 },
    /// Whole level rounded to whole bytes.
    Bitmask { bits_per_pixel: u64 },
}

impl SizeRule {
    fn select(
        header: &DdsHeader,
        resolved: &ResolvedFormat,
        layout: &PixelLayout,
        log: &mut Diagnostics,
    ) -> Self {
        let bits_per_pixel = layout.bits_per_pixel as u64;
        let format = match resolved.format {
            Some(format) if !resolved.bitmasked => format,
            _ => {
                let stored = match resolved.bit_count {
                    0 => bits_per_pixel,
                    n => n as u64,
                };
                return Self::Bitmask { bits_per_pixel: stored };
            }
        };

        match format {
            DxgiFormat::R8G8_B8G8_UNORM | DxgiFormat::G8R8_G8B8_UNORM | DxgiFormat::YUY2 => {
                return Self::Packed422 { bytes_per_pair: 4 }
            }
            DxgiFormat::Y210 | DxgiFormat::Y216 => return Self::Packed422 { bytes_per_pair: 8 },
            DxgiFormat::NV11 => return Self::Nv11,
            DxgiFormat::NV12 | DxgiFormat::OPAQUE_420 => {
                return Self::Planar420 { bytes_per_pair: 2 }
            }
            DxgiFormat::P010 | DxgiFormat::P016 => return Self::Planar420 { bytes_per_pair: 4 },
            _ => {}
        }

        let (block_width, block_height) = (layout.block_width as u64, layout.block_height as u64);
        if resolved.compression.is_compressed() || (block_width, block_height) != (1, 1) {
            let bytes = match resolved.compression.block_bytes() {
                0 => bits_per_pixel * block_width * block_height / 8,
                n => n as u64,
            };
            return Self::Blocks {
                width: block_width,
                height: block_height,
                bytes,
            };
        }

        let declared = header.pixel_format.rgb_bit_count;
        if declared != 0 && declared <= 128 && declared != layout.bits_per_pixel {
            log.warn(format!(
                "header bit count {declared} disagrees with {format} ({} bits); using {}",
                layout.bits_per_pixel, layout.bits_per_pixel
            ));
        }
        Self::Dense { bits_per_pixel }
    }

    /// Byte size of a `width` x `height` x `depth` level, `None` on overflow.
    fn level_size(self, width: u32, height: u32, depth: u32) -> Option<u64> {
        let (w, h, d) = (width as u64, height as u64, depth as u64);
        match self {
            Self::Blocks {
                width,
                height,
                bytes,
            } => w
                .div_ceil(width)
                .checked_mul(h.div_ceil(height))?
                .checked_mul(d)?
                .checked_mul(bytes),
            Self::Packed422 { bytes_per_pair } => w
                .div_ceil(2)
                .checked_mul(bytes_per_pair)?
                .checked_mul(h)?
                .checked_mul(d),
            Self::Nv11 => w.div_ceil(4).checked_mul(4 * 2)?.checked_mul(h)?.checked_mul(d),
            Self::Planar420 { bytes_per_pair } => {
                let luma = w.div_ceil(2).checked_mul(bytes_per_pair)?.checked_mul(h)?;
                let chroma = luma.div_ceil(2);
                luma.checked_add(chroma)?.checked_mul(d)
            }
            Self::Dense { bits_per_pixel } => bits_per_pixel
                .checked_mul(w)?
                .checked_mul(h)?
                .div_ceil(8)
                .checked_mul(d),
            Self::Bitmask { bits_per_pixel } => Some(
                bits_per_pixel
                    .checked_mul(w)?
                    .checked_mul(h)?
                    .checked_mul(d)?
                    .div_ceil(8),
            ),
        }
    }
}

/// Why a level could not be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anomaly {
    Overflow,
    Empty,
    PastEnd { size: u64, remaining: usize },
    TooDense { size: u64 },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => f.write_str("level size overflows"),
            Self::Empty => f.write_str("level size is zero"),
            Self::PastEnd { size, remaining } => {
                write!(f, "level needs {size} bytes but only {remaining} remain")
            }
            Self::TooDense { size } => write!(
                f,
                "level size {size} exceeds {MAX_BYTES_PER_PIXEL} bytes per pixel"
            ),
        }
    }
}

fn check_level(
    size: Option<u64>,
    remaining: usize,
    width: u32,
    height: u32,
    depth: u32,
) -> std::result::Result<usize, Anomaly> {
    let size = size.ok_or(Anomaly::Overflow)?;
    if size == 0 {
        return Err(Anomaly::Empty);
    }
    let pixels = (width as u64)
        .saturating_mul(height as u64)
        .saturating_mul(depth as u64)
        .max(1);
    if size / pixels > MAX_BYTES_PER_PIXEL {
        return Err(Anomaly::TooDense { size });
    }
    match usize::try_from(size) {
        Ok(size) if size <= remaining => Ok(size),
        _ => Err(Anomaly::PastEnd { size, remaining }),
    }
}

/// Walk every slice and mip level, carving byte ranges out of `buffer`.
///
/// Fails with [`Error::NoImageData`] when not even the first level fits.
pub fn extract_levels(
    buffer: &[u8],
    header: &DdsHeader,
    resolved: &ResolvedFormat,
    layout: &PixelLayout,
    declared: Dimensions,
    data_offset: usize,
) -> Diagnosed<Result<Extraction>> {
    let mut log = Diagnostics::new();
    let rule = SizeRule::select(header, resolved, layout, &mut log);

    let mut dimensions = declared;
    let mut levels = Vec::new();
    let mut offset = data_offset;

    'slices: for slice in 0..declared.array_size {
        let (mut width, mut height, mut depth) = (declared.width, declared.height, declared.depth);
        for mip in 0..declared.mip_count {
            let remaining = buffer.len().saturating_sub(offset);
            let size = rule.level_size(width, height, depth);
            match check_level(size, remaining, width, height, depth) {
                Ok(size) => {
                    levels.push(LevelRecord {
                        width,
                        height,
                        depth,
                        range: offset..offset + size,
                    });
                    offset += size;
                }
                Err(anomaly) => {
                    log.warn(format!(
                        "slice {slice} mip {mip} ({width}x{height}x{depth}): {anomaly}; \
                         truncating extraction"
                    ));
                    truncate(&mut dimensions, &mut levels, slice, mip, &mut log);
                    break 'slices;
                }
            }
            width = (width / 2).max(1);
            height = (height / 2).max(1);
            depth = (depth / 2).max(1);
        }
    }

    if levels.is_empty() {
        return Diagnosed::new(Err(Error::NoImageData), log);
    }

    tracing::trace!(levels = levels.len(), end = offset, "extracted image data");
    Diagnosed::new(Ok(Extraction { levels, dimensions }), log)
}

/// Shrink `dimensions` to the levels that survived a stop at `(slice, mip)`.
fn truncate(
    dimensions: &mut Dimensions,
    levels: &mut Vec<LevelRecord>,
    slice: u32,
    mip: u32,
    log: &mut Diagnostics,
) {
    if slice == 0 {
        dimensions.mip_count = mip;
        dimensions.array_size = 1;
    } else {
        dimensions.array_size = slice;
        levels.truncate(slice as usize * dimensions.mip_count as usize);
    }

    if dimensions.cubemap && dimensions.array_size % 6 != 0 {
        let whole = dimensions.array_size / 6 * 6;
        if whole == 0 {
            log.warn(format!(
                "only {} of 6 cube faces present; no longer a cube map",
                dimensions.array_size
            ));
            dimensions.cubemap = false;
        } else {
            dimensions.array_size = whole;
            levels.truncate(whole as usize * dimensions.mip_count as usize);
        }
    }
}
