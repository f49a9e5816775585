//! DDS header structures and the header reader.
//!
//! Fields are read one by one at fixed little-endian offsets. The structs
//! below are plain Rust values, never overlaid onto the input bytes.

use std::fmt;

use ddscope_common::BinaryReader;

use crate::{Diagnostics, Error, Result};

/// DDS file magic bytes ("DDS ").
pub const DDS_MAGIC: &[u8; 4] = b"DDS ";

/// Length of the magic.
pub const MAGIC_LEN: usize = 4;

/// Absolute offset of the DXT10 extension, right after magic and header.
pub const DXT10_OFFSET: usize = MAGIC_LEN + DdsHeader::SIZE as usize;

/// Header flags (`DDSD_*`).
pub mod ddsd {
    pub const CAPS: u32 = 0x1;
    pub const HEIGHT: u32 = 0x2;
    pub const WIDTH: u32 = 0x4;
    pub const PITCH: u32 = 0x8;
    pub const PIXELFORMAT: u32 = 0x1000;
    pub const MIPMAPCOUNT: u32 = 0x20000;
    pub const LINEARSIZE: u32 = 0x80000;
    pub const DEPTH: u32 = 0x800000;
}

/// Pixel format flags (`DDPF_*`), including the writer-specific extensions
/// for premultiplied alpha, sRGB and normal maps.
pub mod ddpf {
    pub const ALPHAPIXELS: u32 = 0x1;
    pub const ALPHA: u32 = 0x2;
    pub const FOURCC: u32 = 0x4;
    pub const PALETTEINDEXED8: u32 = 0x20;
    pub const RGB: u32 = 0x40;
    pub const YUV: u32 = 0x200;
    pub const ALPHAPREMULT: u32 = 0x8000;
    pub const LUMINANCE: u32 = 0x20000;
    pub const BUMPDUDV: u32 = 0x80000;
    pub const SRGB: u32 = 0x4000_0000;
    pub const NORMAL: u32 = 0x8000_0000;
}

/// Second capability word (`DDSCAPS2_*`).
pub mod caps2 {
    pub const CUBEMAP: u32 = 0x200;
    pub const CUBEMAP_POSITIVEX: u32 = 0x400;
    pub const CUBEMAP_NEGATIVEX: u32 = 0x800;
    pub const CUBEMAP_POSITIVEY: u32 = 0x1000;
    pub const CUBEMAP_NEGATIVEY: u32 = 0x2000;
    pub const CUBEMAP_POSITIVEZ: u32 = 0x4000;
    pub const CUBEMAP_NEGATIVEZ: u32 = 0x8000;
    pub const CUBEMAP_ALL_FACES: u32 = CUBEMAP_POSITIVEX
        | CUBEMAP_NEGATIVEX
        | CUBEMAP_POSITIVEY
        | CUBEMAP_NEGATIVEY
        | CUBEMAP_POSITIVEZ
        | CUBEMAP_NEGATIVEZ;
    pub const VOLUME: u32 = 0x200000;
}

/// DDS file header (124 bytes following the magic).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DdsHeader {
    /// Header size (should be 124).
    pub size: u32,
    /// Header flags, see [`ddsd`].
    pub flags: u32,
    /// Image height.
    pub height: u32,
    /// Image width.
    pub width: u32,
    /// Pitch or linear size.
    pub pitch_or_linear_size: u32,
    /// Depth (for volume textures).
    pub depth: u32,
    /// Number of mipmap levels.
    pub mipmap_count: u32,
    /// Reserved.
    pub reserved1: [u32; 11],
    /// Pixel format.
    pub pixel_format: DdsPixelFormat,
    /// Surface capabilities.
    pub caps: u32,
    /// Surface capabilities 2, see [`caps2`].
    pub caps2: u32,
    /// Surface capabilities 3.
    pub caps3: u32,
    /// Surface capabilities 4.
    pub caps4: u32,
    /// Reserved.
    pub reserved2: u32,
}

impl DdsHeader {
    /// Expected header size.
    pub const SIZE: u32 = 124;

    /// Absolute offset of the nested pixel format block.
    pub const PIXEL_FORMAT_OFFSET: usize = MAGIC_LEN + 72;

    /// Absolute offset of the first capability word.
    pub const CAPS_OFFSET: usize = Self::PIXEL_FORMAT_OFFSET + DdsPixelFormat::SIZE as usize;

    /// Check the magic and read the primary header from the start of a file.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < MAGIC_LEN {
            return Err(Error::TooSmall {
                needed: MAGIC_LEN,
                available: data.len(),
            });
        }

        let mut reader = BinaryReader::new(data);
        let magic: [u8; 4] = reader.read_array()?;
        if &magic != DDS_MAGIC {
            return Err(Error::BadMagic(magic));
        }

        if data.len() < DXT10_OFFSET {
            return Err(Error::TooSmall {
                needed: DXT10_OFFSET,
                available: data.len(),
            });
        }

        let size = reader.read_u32()?;
        let flags = reader.read_u32()?;
        let height = reader.read_u32()?;
        let width = reader.read_u32()?;
        let pitch_or_linear_size = reader.read_u32()?;
        let depth = reader.read_u32()?;
        let mipmap_count = reader.read_u32()?;
        let reserved1 = reader.read_u32_array::<11>()?;

        let pixel_format = DdsPixelFormat::read(&mut BinaryReader::new_at(
            data,
            Self::PIXEL_FORMAT_OFFSET,
        ))?;

        let mut reader = BinaryReader::new_at(data, Self::CAPS_OFFSET);
        let [caps, caps2, caps3, caps4, reserved2] = reader.read_u32_array::<5>()?;

        Ok(Self {
            size,
            flags,
            height,
            width,
            pitch_or_linear_size,
            depth,
            mipmap_count,
            reserved1,
            pixel_format,
            caps,
            caps2,
            caps3,
            caps4,
            reserved2,
        })
    }

    /// Check if this is a DX10 extended header.
    pub fn is_dx10(&self) -> bool {
        self.pixel_format.four_cc == FourCC::DX10
    }

    /// Report structural fields that disagree with the fixed layout.
    ///
    /// Mismatched size fields are only warned about; the layout is fixed
    /// regardless of what the file claims.
    pub fn validate(&self) -> Diagnostics {
        let mut log = Diagnostics::new();
        if self.size != Self::SIZE {
            log.warn(format!(
                "header size field is {}, expected {}",
                self.size,
                Self::SIZE
            ));
        }
        if self.pixel_format.size != DdsPixelFormat::SIZE {
            log.warn(format!(
                "pixel format size field is {}, expected {}",
                self.pixel_format.size,
                DdsPixelFormat::SIZE
            ));
        }
        log
    }
}

/// DDS pixel format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DdsPixelFormat {
    /// Structure size (should be 32).
    pub size: u32,
    /// Pixel format flags, see [`ddpf`].
    pub flags: u32,
    /// Four-character code for compression.
    pub four_cc: FourCC,
    /// Number of bits per pixel (for uncompressed).
    pub rgb_bit_count: u32,
    /// Channel bit masks in R, G, B, A slot order.
    pub bit_masks: [u32; 4],
}

impl DdsPixelFormat {
    /// Expected structure size.
    pub const SIZE: u32 = 32;

    fn read(reader: &mut BinaryReader<'_>) -> Result<Self> {
        Ok(Self {
            size: reader.read_u32()?,
            flags: reader.read_u32()?,
            four_cc: FourCC(reader.read_array()?),
            rgb_bit_count: reader.read_u32()?,
            bit_masks: reader.read_u32_array::<4>()?,
        })
    }

    /// Check a pixel format flag.
    pub fn has_flag(&self, flag: u32) -> bool {
        self.flags & flag != 0
    }
}

/// Four-character code for compression type.
///
/// Legacy writers also store plain D3D9 device format numbers here, so the
/// code is equally meaningful as a little-endian `u32`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// No code.
    pub const NONE: Self = Self([0; 4]);
    /// DXT1 compression.
    pub const DXT1: Self = Self(*b"DXT1");
    /// DXT2 compression (premultiplied DXT3).
    pub const DXT2: Self = Self(*b"DXT2");
    /// DXT3 compression.
    pub const DXT3: Self = Self(*b"DXT3");
    /// DXT4 compression (premultiplied DXT5).
    pub const DXT4: Self = Self(*b"DXT4");
    /// DXT5 compression.
    pub const DXT5: Self = Self(*b"DXT5");
    /// DXT5 with the red channel moved into alpha.
    pub const RXGB: Self = Self(*b"RXGB");
    /// DX10 extended header.
    pub const DX10: Self = Self(*b"DX10");
    /// ATI1 (BC4) compression.
    pub const ATI1: Self = Self(*b"ATI1");
    /// ATI2 (BC5, red/green swapped) compression.
    pub const ATI2: Self = Self(*b"ATI2");
    /// BC4U compression.
    pub const BC4U: Self = Self(*b"BC4U");
    /// BC4S compression.
    pub const BC4S: Self = Self(*b"BC4S");
    /// BC5U compression.
    pub const BC5U: Self = Self(*b"BC5U");
    /// BC5S compression.
    pub const BC5S: Self = Self(*b"BC5S");
    /// BC6H compression.
    pub const BC6H: Self = Self(*b"BC6H");
    /// BC7 compression.
    pub const BC7L: Self = Self(*b"BC7L");
    /// BC7 compression, alternate spelling.
    pub const BC70: Self = Self(*b"BC70");
    /// BC7 compression, alternate spelling.
    pub const ZOLA: Self = Self(*b"ZOLA");
    /// Packed 4:2:2 RGBG.
    pub const RGBG: Self = Self(*b"RGBG");
    /// Packed 4:2:2 GRGB.
    pub const GRGB: Self = Self(*b"GRGB");
    /// Packed 4:2:2 YUY2.
    pub const YUY2: Self = Self(*b"YUY2");
    /// Packed 4:2:2 UYVY.
    pub const UYVY: Self = Self(*b"UYVY");

    /// Swizzle codes some NVTT versions store in the bit count field.
    pub const A2XY: Self = Self(*b"A2XY");
    pub const A2D5: Self = Self(*b"A2D5");

    /// Build a code from its little-endian numeric value.
    pub const fn from_u32(value: u32) -> Self {
        Self(value.to_le_bytes())
    }

    /// The little-endian numeric value of the code.
    pub const fn as_u32(self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    pub const fn is_none(self) -> bool {
        self.as_u32() == 0
    }

    /// Spell an ASTC footprint code: `AS` followed by the block width and
    /// height as upper-case hex digits. The alternate spelling writes each
    /// dimension as `'0' + n`, so 10 becomes `:` and 12 becomes `<`.
    pub const fn astc(width: u8, height: u8, alternate: bool) -> Self {
        Self([b'A', b'S', astc_digit(width, alternate), astc_digit(height, alternate)])
    }
}

const fn astc_digit(value: u8, alternate: bool) -> u8 {
    if value < 10 || alternate {
        b'0' + value
    } else {
        b'A' + value - 10
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            write!(f, "{}", String::from_utf8_lossy(&self.0))
        } else {
            write!(f, "D3DFMT({})", self.as_u32())
        }
    }
}

/// Resource dimension carried by the DXT10 extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceDimension {
    Unknown,
    Buffer,
    Texture1D,
    Texture2D,
    Texture3D,
    Other(u32),
}

impl From<u32> for ResourceDimension {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::Unknown,
            1 => Self::Buffer,
            2 => Self::Texture1D,
            3 => Self::Texture2D,
            4 => Self::Texture3D,
            other => Self::Other(other),
        }
    }
}

/// Alpha interpretation, from the low three bits of `misc_flags2`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphaMode {
    #[default]
    Unknown,
    Straight,
    Premultiplied,
    Opaque,
    Custom,
    Other(u32),
}

impl AlphaMode {
    /// Decode the alpha mode bits of a DXT10 `misc_flags2` word.
    pub fn from_misc_flags2(misc_flags2: u32) -> Self {
        match misc_flags2 & DdsHeaderDxt10::ALPHA_MODE_MASK {
            0 => Self::Unknown,
            1 => Self::Straight,
            2 => Self::Premultiplied,
            3 => Self::Opaque,
            4 => Self::Custom,
            other => Self::Other(other),
        }
    }
}

/// DX10 extended header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DdsHeaderDxt10 {
    /// DXGI format.
    pub dxgi_format: u32,
    /// Resource dimension.
    pub resource_dimension: u32,
    /// Misc flags.
    pub misc_flag: u32,
    /// Array size.
    pub array_size: u32,
    /// Misc flags 2.
    pub misc_flags2: u32,
}

impl DdsHeaderDxt10 {
    /// Size of the extension in bytes.
    pub const SIZE: usize = 20;

    /// `misc_flag` bit marking a cube map.
    pub const MISC_TEXTURECUBE: u32 = 0x4;

    /// Bits of `misc_flags2` holding the alpha mode.
    pub const ALPHA_MODE_MASK: u32 = 0x7;

    /// Read the extension that follows the primary header.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let needed = DXT10_OFFSET + Self::SIZE;
        if data.len() < needed {
            return Err(Error::Truncated {
                needed,
                available: data.len(),
            });
        }

        let mut reader = BinaryReader::new_at(data, DXT10_OFFSET);
        let [dxgi_format, resource_dimension, misc_flag, array_size, misc_flags2] =
            reader.read_u32_array::<5>()?;
        Ok(Self {
            dxgi_format,
            resource_dimension,
            misc_flag,
            array_size,
            misc_flags2,
        })
    }

    pub fn dimension(&self) -> ResourceDimension {
        ResourceDimension::from(self.resource_dimension)
    }

    pub fn is_cubemap(&self) -> bool {
        self.misc_flag & Self::MISC_TEXTURECUBE != 0
    }

    pub fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::from_misc_flags2(self.misc_flags2)
    }
}

/// Cheap check whether `data` starts like a DDS file.
pub fn is_dds(data: &[u8]) -> bool {
    data.len() >= DXT10_OFFSET && &data[..MAGIC_LEN] == DDS_MAGIC
}
