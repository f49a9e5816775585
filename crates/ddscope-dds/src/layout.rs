//! Layout calculation: surface dimensions and per-pixel geometry.

use crate::format::{Compression, DxgiFormat};
use crate::header::{caps2, ddpf, ddsd, DdsHeader, DdsHeaderDxt10, ResourceDimension};
use crate::resolve::{ColorTransform, ResolvedFormat};
use crate::{Diagnosed, Diagnostics, Error, Result};

/// Largest mip chain a 32-bit dimension can have.
pub const MAX_MIP_COUNT: u32 = 31;

/// Surface extent and mip/array structure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub mip_count: u32,
    /// Number of array slices; six per cube for cube maps.
    pub array_size: u32,
    pub cubemap: bool,
    pub volume: bool,
}

impl Dimensions {
    /// Derive dimensions from the headers, clamping out-of-range values.
    pub fn from_headers(header: &DdsHeader, dxt10: Option<&DdsHeaderDxt10>) -> Diagnosed<Self> {
        let mut log = Diagnostics::new();

        if header.width == 0 || header.height == 0 {
            log.warn(format!(
                "degenerate extent {}x{}; treating zero as 1",
                header.width, header.height
            ));
        }

        let mip_count = match header.mipmap_count {
            0 => 1,
            n if n > MAX_MIP_COUNT => {
                log.warn(format!("mip count {n} exceeds {MAX_MIP_COUNT}; using 1"));
                1
            }
            n => n,
        };

        let mut volume = header.caps2 & caps2::VOLUME != 0 || header.flags & ddsd::DEPTH != 0;
        let mut array_size = 1;
        let mut cubemap = false;
        let mut height = header.height.max(1);

        match dxt10 {
            Some(ext) => {
                match ext.dimension() {
                    ResourceDimension::Texture1D => {
                        if header.flags & ddsd::HEIGHT != 0 && header.height != 1 {
                            log.warn(format!(
                                "1D texture with height {}; using 1",
                                header.height
                            ));
                        }
                        height = 1;
                        volume = false;
                    }
                    ResourceDimension::Texture2D => volume = false,
                    ResourceDimension::Texture3D => volume = true,
                    other => log.warn(format!(
                        "unexpected resource dimension {other:?}; continuing as 2D"
                    )),
                }

                array_size = match ext.array_size {
                    0 => {
                        log.warn("DXT10 array size is zero; using 1");
                        1
                    }
                    n => n,
                };

                if ext.is_cubemap() {
                    cubemap = true;
                    array_size = array_size.saturating_mul(6);
                }
            }
            None => {
                let cube_bits = header.caps2 & (caps2::CUBEMAP | caps2::CUBEMAP_ALL_FACES);
                if cube_bits != 0 {
                    if cube_bits != (caps2::CUBEMAP | caps2::CUBEMAP_ALL_FACES) {
                        log.warn(format!(
                            "incomplete cube map caps {:#x}; treating as a full cube map",
                            header.caps2
                        ));
                    }
                    cubemap = true;
                    array_size = 6;
                }
            }
        }

        if volume && array_size > 1 {
            log.warn(format!("volume texture with {array_size} array slices"));
        }

        let depth = if volume { header.depth.max(1) } else { 1 };

        Diagnosed::new(
            Self {
                width: header.width.max(1),
                height,
                depth,
                mip_count,
                array_size,
                cubemap,
                volume,
            },
            log,
        )
    }
}

/// Bit count and right shift of one channel mask.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelBits {
    pub count: u8,
    pub shift: u8,
}

impl ChannelBits {
    /// Measure the contiguous run of set bits starting at the lowest set
    /// bit. Non-contiguous masks are cut at the first gap.
    pub fn from_mask(mask: u32) -> Self {
        if mask == 0 {
            return Self::default();
        }
        let shift = mask.trailing_zeros();
        let count = (mask >> shift).trailing_ones();
        Self {
            count: count as u8,
            shift: shift as u8,
        }
    }
}

/// Per-pixel geometry of a resolved format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PixelLayout {
    pub bits_per_pixel: u32,
    pub channel_count: u8,
    pub block_width: u32,
    pub block_height: u32,
    /// Channel bits in R, G, B, A slot order.
    pub channels: [ChannelBits; 4],
    pub srgb: bool,
}

/// Compute the pixel layout, substituting an RGBA8 fallback for formats
/// that have no direct layout.
///
/// Returns the resolved format as well because the fallback replaces it.
/// A substituted format stays bitmasked with its stored bit count, so
/// levels are still sized by the density actually present in the file.
pub fn compute_layout(
    header: &DdsHeader,
    mut resolved: ResolvedFormat,
) -> Diagnosed<Result<(ResolvedFormat, PixelLayout)>> {
    let mut log = Diagnostics::new();

    let bits_per_pixel = match resolved.format {
        Some(format) if format.is_unsupported() => {
            log.warn(format!(
                "{format} has no direct layout; substituting R8G8B8A8_UNORM"
            ));
            resolved.bit_count = match resolved.bit_count {
                0 => match infer_bits_from_pitch(header, &mut log) {
                    0 => palette_bits(format),
                    n => n,
                },
                n => n,
            };
            resolved.format = Some(DxgiFormat::R8G8B8A8_UNORM);
            resolved.bitmasked = true;
            resolved.masks = [0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0xFF00_0000];
            32
        }
        Some(format) if !resolved.bitmasked => format.bits_per_pixel(),
        _ if resolved.bit_count != 0 => resolved.bit_count,
        _ => infer_bits_from_pitch(header, &mut log),
    };

    if bits_per_pixel == 0 {
        let name = match resolved.format {
            Some(format) => format.to_string(),
            None => format!("FourCC {}", resolved.four_cc),
        };
        return Diagnosed::new(Err(Error::UndeducibleBitsPerPixel(name)), log);
    }

    let channel_count = match resolved.format {
        Some(format) if !resolved.bitmasked => channel_count(format, &resolved),
        _ => resolved.masks.iter().filter(|m| **m != 0).count() as u8,
    };

    let (block_width, block_height) = match resolved.format {
        Some(format) if !resolved.bitmasked => format.block_size(),
        _ => (1, 1),
    };

    let srgb = header.pixel_format.has_flag(ddpf::SRGB)
        || resolved.format.is_some_and(DxgiFormat::is_srgb);

    let layout = PixelLayout {
        bits_per_pixel,
        channel_count,
        block_width,
        block_height,
        channels: resolved.masks.map(ChannelBits::from_mask),
        srgb,
    };
    Diagnosed::new(Ok((resolved, layout)), log)
}

fn channel_count(format: DxgiFormat, resolved: &ResolvedFormat) -> u8 {
    match resolved.compression {
        Compression::Bc3Dxt4 | Compression::Bc3Dxt5
            if resolved.normal_map || resolved.transform == ColorTransform::AlphaGreenBlueRed =>
        {
            3
        }
        Compression::Bc5 if resolved.normal_map => 3,
        Compression::Bc5 => 2,
        _ => format.channel_count(),
    }
}

/// Stored density of the palette and intensity-alpha formats.
fn palette_bits(format: DxgiFormat) -> u32 {
    match format {
        DxgiFormat::A8P8 => 16,
        _ => 8,
    }
}

/// Bits per pixel for files that only carry a pitch.
fn infer_bits_from_pitch(header: &DdsHeader, log: &mut Diagnostics) -> u32 {
    let pitch = header.pitch_or_linear_size;
    let width = header.width;
    if pitch == 0 || width == 0 {
        return 0;
    }
    if pitch % width != 0 {
        log.warn(format!(
            "pitch {pitch} is not a multiple of width {width}; bits per pixel is approximate"
        ));
    }
    (pitch / width).saturating_mul(8)
}
