//! DXGI format enumerants and their fixed per-format geometry.
//!
//! Values follow the DXGI numbering, including the Xbox depth/stencil
//! extensions (116-120) and the ASTC footprints (133-187).

use std::fmt;

use crate::header::AlphaMode;

/// A DXGI format enumerant.
///
/// This is an open newtype: values read from a file that are not known
/// here are still representable and simply have no [`FormatInfo`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DxgiFormat(pub u32);

/// Fixed geometry of one DXGI format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    pub format: DxgiFormat,
    pub name: &'static str,
    /// Bits per pixel. Block formats report their effective per-pixel
    /// cost; ASTC reports the 128-bit block cost.
    pub bits_per_pixel: u32,
    /// Number of stored channels (0 for formats without a direct layout).
    pub channels: u8,
    pub block_width: u8,
    pub block_height: u8,
}

impl FormatInfo {
    const fn new(
        format: DxgiFormat,
        name: &'static str,
        bits_per_pixel: u32,
        channels: u8,
        block_width: u8,
        block_height: u8,
    ) -> Self {
        Self {
            format,
            name,
            bits_per_pixel,
            channels,
            block_width,
            block_height,
        }
    }
}

impl DxgiFormat {
    /// Look up the fixed geometry of this format.
    pub fn info(self) -> Option<&'static FormatInfo> {
        FORMAT_TABLE
            .binary_search_by_key(&self, |info| info.format)
            .ok()
            .map(|index| &FORMAT_TABLE[index])
    }

    /// Enumerant name without the `DXGI_FORMAT_` prefix.
    pub fn name(self) -> Option<&'static str> {
        self.info().map(|info| info.name)
    }

    /// Bits per pixel, or 0 when unknown.
    pub fn bits_per_pixel(self) -> u32 {
        self.info().map_or(0, |info| info.bits_per_pixel)
    }

    /// Stored channel count, or 0 when unknown.
    pub fn channel_count(self) -> u8 {
        self.info().map_or(0, |info| info.channels)
    }

    /// Compressed block footprint; `(1, 1)` for uncompressed formats.
    pub fn block_size(self) -> (u32, u32) {
        self.info().map_or((1, 1), |info| {
            (info.block_width as u32, info.block_height as u32)
        })
    }

    pub fn is_block_compressed(self) -> bool {
        self.block_size() != (1, 1)
    }

    pub fn is_astc(self) -> bool {
        (Self::ASTC_4X4_TYPELESS.0..=Self::ASTC_12X12_UNORM_SRGB.0).contains(&self.0)
    }

    pub fn is_srgb(self) -> bool {
        self.name().is_some_and(|name| name.ends_with("_SRGB"))
    }

    /// Palette and luminance-alpha formats that are read with an 8-bit RGBA
    /// fallback layout instead.
    pub fn is_unsupported(self) -> bool {
        matches!(self, Self::AI44 | Self::IA44 | Self::P8 | Self::A8P8)
    }

    /// Formats whose packed bit layout has to be described with masks,
    /// returned as `(bit_count, [r, g, b, a])`.
    pub fn packed_masks(self) -> Option<(u32, [u32; 4])> {
        let masks = match self {
            Self::R10G10B10A2_TYPELESS
            | Self::R10G10B10A2_UNORM
            | Self::R10G10B10A2_UINT
            | Self::R10G10B10_XR_BIAS_A2_UNORM => {
                (32, [0x0000_03FF, 0x000F_FC00, 0x3FF0_0000, 0xC000_0000])
            }
            Self::R11G11B10_FLOAT => (32, [0x0000_07FF, 0x003F_F800, 0xFFC0_0000, 0]),
            Self::R9G9B9E5_SHAREDEXP => {
                (32, [0x0000_01FF, 0x0003_FE00, 0x07FC_0000, 0xF800_0000])
            }
            Self::B5G6R5_UNORM => (16, [0xF800, 0x07E0, 0x001F, 0]),
            Self::B5G5R5A1_UNORM => (16, [0x7C00, 0x03E0, 0x001F, 0x8000]),
            Self::B4G4R4A4_UNORM => (16, [0x0F00, 0x00F0, 0x000F, 0xF000]),
            Self::A4B4G4R4_UNORM => (16, [0xF000, 0x0F00, 0x00F0, 0x000F]),
            _ => return None,
        };
        Some(masks)
    }
}

impl From<u32> for DxgiFormat {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for DxgiFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "DXGI({})", self.0),
        }
    }
}

/// Block compression family of a texture.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    #[default]
    None,
    Bc1,
    Bc2Dxt2,
    Bc2Dxt3,
    Bc3Dxt4,
    Bc3Dxt5,
    Bc4,
    Bc5,
    Bc6hUnsigned,
    Bc6hSigned,
    Bc7,
    Astc,
}

impl Compression {
    /// Derive the family from a canonical format. BC2/BC3 are reported as
    /// their premultiplied DXT2/DXT4 variants when the alpha is premultiplied.
    pub fn from_format(format: DxgiFormat, alpha_mode: AlphaMode) -> Self {
        let premultiplied = alpha_mode == AlphaMode::Premultiplied;
        match format {
            DxgiFormat::BC1_TYPELESS | DxgiFormat::BC1_UNORM | DxgiFormat::BC1_UNORM_SRGB => {
                Self::Bc1
            }
            DxgiFormat::BC2_TYPELESS | DxgiFormat::BC2_UNORM | DxgiFormat::BC2_UNORM_SRGB => {
                if premultiplied {
                    Self::Bc2Dxt2
                } else {
                    Self::Bc2Dxt3
                }
            }
            DxgiFormat::BC3_TYPELESS | DxgiFormat::BC3_UNORM | DxgiFormat::BC3_UNORM_SRGB => {
                if premultiplied {
                    Self::Bc3Dxt4
                } else {
                    Self::Bc3Dxt5
                }
            }
            DxgiFormat::BC4_TYPELESS | DxgiFormat::BC4_UNORM | DxgiFormat::BC4_SNORM => Self::Bc4,
            DxgiFormat::BC5_TYPELESS | DxgiFormat::BC5_UNORM | DxgiFormat::BC5_SNORM => Self::Bc5,
            DxgiFormat::BC6H_TYPELESS | DxgiFormat::BC6H_UF16 => Self::Bc6hUnsigned,
            DxgiFormat::BC6H_SF16 => Self::Bc6hSigned,
            DxgiFormat::BC7_TYPELESS | DxgiFormat::BC7_UNORM | DxgiFormat::BC7_UNORM_SRGB => {
                Self::Bc7
            }
            _ if format.is_astc() => Self::Astc,
            _ => Self::None,
        }
    }

    pub fn is_compressed(self) -> bool {
        self != Self::None
    }

    /// Bytes per compressed block.
    pub fn block_bytes(self) -> usize {
        match self {
            Self::None => 0,
            Self::Bc1 | Self::Bc4 => 8,
            _ => 16,
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Bc1 => "BC1",
            Self::Bc2Dxt2 => "BC2 (DXT2)",
            Self::Bc2Dxt3 => "BC2 (DXT3)",
            Self::Bc3Dxt4 => "BC3 (DXT4)",
            Self::Bc3Dxt5 => "BC3 (DXT5)",
            Self::Bc4 => "BC4",
            Self::Bc5 => "BC5",
            Self::Bc6hUnsigned => "BC6H (unsigned)",
            Self::Bc6hSigned => "BC6H (signed)",
            Self::Bc7 => "BC7",
            Self::Astc => "ASTC",
        };
        f.write_str(name)
    }
}

impl DxgiFormat {
    pub const UNKNOWN: Self = Self(0);
    pub const R32G32B32A32_TYPELESS: Self = Self(1);
    pub const R32G32B32A32_FLOAT: Self = Self(2);
    pub const R32G32B32A32_UINT: Self = Self(3);
    pub const R32G32B32A32_SINT: Self = Self(4);
    pub const R32G32B32_TYPELESS: Self = Self(5);
    pub const R32G32B32_FLOAT: Self = Self(6);
    pub const R32G32B32_UINT: Self = Self(7);
    pub const R32G32B32_SINT: Self = Self(8);
    pub const R16G16B16A16_TYPELESS: Self = Self(9);
    pub const R16G16B16A16_FLOAT: Self = Self(10);
    pub const R16G16B16A16_UNORM: Self = Self(11);
    pub const R16G16B16A16_UINT: Self = Self(12);
    pub const R16G16B16A16_SNORM: Self = Self(13);
    pub const R16G16B16A16_SINT: Self = Self(14);
    pub const R32G32_TYPELESS: Self = Self(15);
    pub const R32G32_FLOAT: Self = Self(16);
    pub const R32G32_UINT: Self = Self(17);
    pub const R32G32_SINT: Self = Self(18);
    pub const R32G8X24_TYPELESS: Self = Self(19);
    pub const D32_FLOAT_S8X24_UINT: Self = Self(20);
    pub const R32_FLOAT_X8X24_TYPELESS: Self = Self(21);
    pub const X32_TYPELESS_G8X24_UINT: Self = Self(22);
    pub const R10G10B10A2_TYPELESS: Self = Self(23);
    pub const R10G10B10A2_UNORM: Self = Self(24);
    pub const R10G10B10A2_UINT: Self = Self(25);
    pub const R11G11B10_FLOAT: Self = Self(26);
    pub const R8G8B8A8_TYPELESS: Self = Self(27);
    pub const R8G8B8A8_UNORM: Self = Self(28);
    pub const R8G8B8A8_UNORM_SRGB: Self = Self(29);
    pub const R8G8B8A8_UINT: Self = Self(30);
    pub const R8G8B8A8_SNORM: Self = Self(31);
    pub const R8G8B8A8_SINT: Self = Self(32);
    pub const R16G16_TYPELESS: Self = Self(33);
    pub const R16G16_FLOAT: Self = Self(34);
    pub const R16G16_UNORM: Self = Self(35);
    pub const R16G16_UINT: Self = Self(36);
    pub const R16G16_SNORM: Self = Self(37);
    pub const R16G16_SINT: Self = Self(38);
    pub const R32_TYPELESS: Self = Self(39);
    pub const D32_FLOAT: Self = Self(40);
    pub const R32_FLOAT: Self = Self(41);
    pub const R32_UINT: Self = Self(42);
    pub const R32_SINT: Self = Self(43);
    pub const R24G8_TYPELESS: Self = Self(44);
    pub const D24_UNORM_S8_UINT: Self = Self(45);
    pub const R24_UNORM_X8_TYPELESS: Self = Self(46);
    pub const X24_TYPELESS_G8_UINT: Self = Self(47);
    pub const R8G8_TYPELESS: Self = Self(48);
    pub const R8G8_UNORM: Self = Self(49);
    pub const R8G8_UINT: Self = Self(50);
    pub const R8G8_SNORM: Self = Self(51);
    pub const R8G8_SINT: Self = Self(52);
    pub const R16_TYPELESS: Self = Self(53);
    pub const R16_FLOAT: Self = Self(54);
    pub const D16_UNORM: Self = Self(55);
    pub const R16_UNORM: Self = Self(56);
    pub const R16_UINT: Self = Self(57);
    pub const R16_SNORM: Self = Self(58);
    pub const R16_SINT: Self = Self(59);
    pub const R8_TYPELESS: Self = Self(60);
    pub const R8_UNORM: Self = Self(61);
    pub const R8_UINT: Self = Self(62);
    pub const R8_SNORM: Self = Self(63);
    pub const R8_SINT: Self = Self(64);
    pub const A8_UNORM: Self = Self(65);
    pub const R1_UNORM: Self = Self(66);
    pub const R9G9B9E5_SHAREDEXP: Self = Self(67);
    pub const R8G8_B8G8_UNORM: Self = Self(68);
    pub const G8R8_G8B8_UNORM: Self = Self(69);
    pub const BC1_TYPELESS: Self = Self(70);
    pub const BC1_UNORM: Self = Self(71);
    pub const BC1_UNORM_SRGB: Self = Self(72);
    pub const BC2_TYPELESS: Self = Self(73);
    pub const BC2_UNORM: Self = Self(74);
    pub const BC2_UNORM_SRGB: Self = Self(75);
    pub const BC3_TYPELESS: Self = Self(76);
    pub const BC3_UNORM: Self = Self(77);
    pub const BC3_UNORM_SRGB: Self = Self(78);
    pub const BC4_TYPELESS: Self = Self(79);
    pub const BC4_UNORM: Self = Self(80);
    pub const BC4_SNORM: Self = Self(81);
    pub const BC5_TYPELESS: Self = Self(82);
    pub const BC5_UNORM: Self = Self(83);
    pub const BC5_SNORM: Self = Self(84);
    pub const B5G6R5_UNORM: Self = Self(85);
    pub const B5G5R5A1_UNORM: Self = Self(86);
    pub const B8G8R8A8_UNORM: Self = Self(87);
    pub const B8G8R8X8_UNORM: Self = Self(88);
    pub const R10G10B10_XR_BIAS_A2_UNORM: Self = Self(89);
    pub const B8G8R8A8_TYPELESS: Self = Self(90);
    pub const B8G8R8A8_UNORM_SRGB: Self = Self(91);
    pub const B8G8R8X8_TYPELESS: Self = Self(92);
    pub const B8G8R8X8_UNORM_SRGB: Self = Self(93);
    pub const BC6H_TYPELESS: Self = Self(94);
    pub const BC6H_UF16: Self = Self(95);
    pub const BC6H_SF16: Self = Self(96);
    pub const BC7_TYPELESS: Self = Self(97);
    pub const BC7_UNORM: Self = Self(98);
    pub const BC7_UNORM_SRGB: Self = Self(99);
    pub const AYUV: Self = Self(100);
    pub const Y410: Self = Self(101);
    pub const Y416: Self = Self(102);
    pub const NV12: Self = Self(103);
    pub const P010: Self = Self(104);
    pub const P016: Self = Self(105);
    pub const OPAQUE_420: Self = Self(106);
    pub const YUY2: Self = Self(107);
    pub const Y210: Self = Self(108);
    pub const Y216: Self = Self(109);
    pub const NV11: Self = Self(110);
    pub const AI44: Self = Self(111);
    pub const IA44: Self = Self(112);
    pub const P8: Self = Self(113);
    pub const A8P8: Self = Self(114);
    pub const B4G4R4A4_UNORM: Self = Self(115);
    pub const R10G10B10_7E3_A2_FLOAT: Self = Self(116);
    pub const R10G10B10_6E4_A2_FLOAT: Self = Self(117);
    pub const D16_UNORM_S8_UINT: Self = Self(118);
    pub const R16_UNORM_X8_TYPELESS: Self = Self(119);
    pub const X16_TYPELESS_G8_UINT: Self = Self(120);
    pub const P208: Self = Self(130);
    pub const V208: Self = Self(131);
    pub const V408: Self = Self(132);
    pub const ASTC_4X4_TYPELESS: Self = Self(133);
    pub const ASTC_4X4_UNORM: Self = Self(134);
    pub const ASTC_4X4_UNORM_SRGB: Self = Self(135);
    pub const ASTC_5X4_TYPELESS: Self = Self(137);
    pub const ASTC_5X4_UNORM: Self = Self(138);
    pub const ASTC_5X4_UNORM_SRGB: Self = Self(139);
    pub const ASTC_5X5_TYPELESS: Self = Self(141);
    pub const ASTC_5X5_UNORM: Self = Self(142);
    pub const ASTC_5X5_UNORM_SRGB: Self = Self(143);
    pub const ASTC_6X5_TYPELESS: Self = Self(145);
    pub const ASTC_6X5_UNORM: Self = Self(146);
    pub const ASTC_6X5_UNORM_SRGB: Self = Self(147);
    pub const ASTC_6X6_TYPELESS: Self = Self(149);
    pub const ASTC_6X6_UNORM: Self = Self(150);
    pub const ASTC_6X6_UNORM_SRGB: Self = Self(151);
    pub const ASTC_8X5_TYPELESS: Self = Self(153);
    pub const ASTC_8X5_UNORM: Self = Self(154);
    pub const ASTC_8X5_UNORM_SRGB: Self = Self(155);
    pub const ASTC_8X6_TYPELESS: Self = Self(157);
    pub const ASTC_8X6_UNORM: Self = Self(158);
    pub const ASTC_8X6_UNORM_SRGB: Self = Self(159);
    pub const ASTC_8X8_TYPELESS: Self = Self(161);
    pub const ASTC_8X8_UNORM: Self = Self(162);
    pub const ASTC_8X8_UNORM_SRGB: Self = Self(163);
    pub const ASTC_10X5_TYPELESS: Self = Self(165);
    pub const ASTC_10X5_UNORM: Self = Self(166);
    pub const ASTC_10X5_UNORM_SRGB: Self = Self(167);
    pub const ASTC_10X6_TYPELESS: Self = Self(169);
    pub const ASTC_10X6_UNORM: Self = Self(170);
    pub const ASTC_10X6_UNORM_SRGB: Self = Self(171);
    pub const ASTC_10X8_TYPELESS: Self = Self(173);
    pub const ASTC_10X8_UNORM: Self = Self(174);
    pub const ASTC_10X8_UNORM_SRGB: Self = Self(175);
    pub const ASTC_10X10_TYPELESS: Self = Self(177);
    pub const ASTC_10X10_UNORM: Self = Self(178);
    pub const ASTC_10X10_UNORM_SRGB: Self = Self(179);
    pub const ASTC_12X10_TYPELESS: Self = Self(181);
    pub const ASTC_12X10_UNORM: Self = Self(182);
    pub const ASTC_12X10_UNORM_SRGB: Self = Self(183);
    pub const ASTC_12X12_TYPELESS: Self = Self(185);
    pub const ASTC_12X12_UNORM: Self = Self(186);
    pub const ASTC_12X12_UNORM_SRGB: Self = Self(187);
    pub const A4B4G4R4_UNORM: Self = Self(191);
}

/// Every known enumerant, sorted by value.
static FORMAT_TABLE: &[FormatInfo] = &[
    FormatInfo::new(DxgiFormat::UNKNOWN, "UNKNOWN", 0, 0, 1, 1),
    FormatInfo::new(DxgiFormat::R32G32B32A32_TYPELESS, "R32G32B32A32_TYPELESS", 128, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R32G32B32A32_FLOAT, "R32G32B32A32_FLOAT", 128, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R32G32B32A32_UINT, "R32G32B32A32_UINT", 128, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R32G32B32A32_SINT, "R32G32B32A32_SINT", 128, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R32G32B32_TYPELESS, "R32G32B32_TYPELESS", 96, 3, 1, 1),
    FormatInfo::new(DxgiFormat::R32G32B32_FLOAT, "R32G32B32_FLOAT", 96, 3, 1, 1),
    FormatInfo::new(DxgiFormat::R32G32B32_UINT, "R32G32B32_UINT", 96, 3, 1, 1),
    FormatInfo::new(DxgiFormat::R32G32B32_SINT, "R32G32B32_SINT", 96, 3, 1, 1),
    FormatInfo::new(DxgiFormat::R16G16B16A16_TYPELESS, "R16G16B16A16_TYPELESS", 64, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R16G16B16A16_FLOAT, "R16G16B16A16_FLOAT", 64, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R16G16B16A16_UNORM, "R16G16B16A16_UNORM", 64, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R16G16B16A16_UINT, "R16G16B16A16_UINT", 64, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R16G16B16A16_SNORM, "R16G16B16A16_SNORM", 64, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R16G16B16A16_SINT, "R16G16B16A16_SINT", 64, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R32G32_TYPELESS, "R32G32_TYPELESS", 64, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R32G32_FLOAT, "R32G32_FLOAT", 64, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R32G32_UINT, "R32G32_UINT", 64, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R32G32_SINT, "R32G32_SINT", 64, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R32G8X24_TYPELESS, "R32G8X24_TYPELESS", 64, 2, 1, 1),
    FormatInfo::new(DxgiFormat::D32_FLOAT_S8X24_UINT, "D32_FLOAT_S8X24_UINT", 64, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R32_FLOAT_X8X24_TYPELESS, "R32_FLOAT_X8X24_TYPELESS", 64, 1, 1, 1),
    FormatInfo::new(DxgiFormat::X32_TYPELESS_G8X24_UINT, "X32_TYPELESS_G8X24_UINT", 64, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R10G10B10A2_TYPELESS, "R10G10B10A2_TYPELESS", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R10G10B10A2_UNORM, "R10G10B10A2_UNORM", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R10G10B10A2_UINT, "R10G10B10A2_UINT", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R11G11B10_FLOAT, "R11G11B10_FLOAT", 32, 3, 1, 1),
    FormatInfo::new(DxgiFormat::R8G8B8A8_TYPELESS, "R8G8B8A8_TYPELESS", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R8G8B8A8_UNORM, "R8G8B8A8_UNORM", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R8G8B8A8_UNORM_SRGB, "R8G8B8A8_UNORM_SRGB", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R8G8B8A8_UINT, "R8G8B8A8_UINT", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R8G8B8A8_SNORM, "R8G8B8A8_SNORM", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R8G8B8A8_SINT, "R8G8B8A8_SINT", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R16G16_TYPELESS, "R16G16_TYPELESS", 32, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R16G16_FLOAT, "R16G16_FLOAT", 32, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R16G16_UNORM, "R16G16_UNORM", 32, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R16G16_UINT, "R16G16_UINT", 32, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R16G16_SNORM, "R16G16_SNORM", 32, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R16G16_SINT, "R16G16_SINT", 32, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R32_TYPELESS, "R32_TYPELESS", 32, 1, 1, 1),
    FormatInfo::new(DxgiFormat::D32_FLOAT, "D32_FLOAT", 32, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R32_FLOAT, "R32_FLOAT", 32, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R32_UINT, "R32_UINT", 32, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R32_SINT, "R32_SINT", 32, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R24G8_TYPELESS, "R24G8_TYPELESS", 32, 2, 1, 1),
    FormatInfo::new(DxgiFormat::D24_UNORM_S8_UINT, "D24_UNORM_S8_UINT", 32, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R24_UNORM_X8_TYPELESS, "R24_UNORM_X8_TYPELESS", 32, 1, 1, 1),
    FormatInfo::new(DxgiFormat::X24_TYPELESS_G8_UINT, "X24_TYPELESS_G8_UINT", 32, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R8G8_TYPELESS, "R8G8_TYPELESS", 16, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R8G8_UNORM, "R8G8_UNORM", 16, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R8G8_UINT, "R8G8_UINT", 16, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R8G8_SNORM, "R8G8_SNORM", 16, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R8G8_SINT, "R8G8_SINT", 16, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R16_TYPELESS, "R16_TYPELESS", 16, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R16_FLOAT, "R16_FLOAT", 16, 1, 1, 1),
    FormatInfo::new(DxgiFormat::D16_UNORM, "D16_UNORM", 16, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R16_UNORM, "R16_UNORM", 16, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R16_UINT, "R16_UINT", 16, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R16_SNORM, "R16_SNORM", 16, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R16_SINT, "R16_SINT", 16, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R8_TYPELESS, "R8_TYPELESS", 8, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R8_UNORM, "R8_UNORM", 8, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R8_UINT, "R8_UINT", 8, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R8_SNORM, "R8_SNORM", 8, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R8_SINT, "R8_SINT", 8, 1, 1, 1),
    FormatInfo::new(DxgiFormat::A8_UNORM, "A8_UNORM", 8, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R1_UNORM, "R1_UNORM", 1, 1, 1, 1),
    FormatInfo::new(DxgiFormat::R9G9B9E5_SHAREDEXP, "R9G9B9E5_SHAREDEXP", 32, 3, 1, 1),
    FormatInfo::new(DxgiFormat::R8G8_B8G8_UNORM, "R8G8_B8G8_UNORM", 16, 3, 1, 1),
    FormatInfo::new(DxgiFormat::G8R8_G8B8_UNORM, "G8R8_G8B8_UNORM", 16, 3, 1, 1),
    FormatInfo::new(DxgiFormat::BC1_TYPELESS, "BC1_TYPELESS", 4, 4, 4, 4),
    FormatInfo::new(DxgiFormat::BC1_UNORM, "BC1_UNORM", 4, 4, 4, 4),
    FormatInfo::new(DxgiFormat::BC1_UNORM_SRGB, "BC1_UNORM_SRGB", 4, 4, 4, 4),
    FormatInfo::new(DxgiFormat::BC2_TYPELESS, "BC2_TYPELESS", 8, 4, 4, 4),
    FormatInfo::new(DxgiFormat::BC2_UNORM, "BC2_UNORM", 8, 4, 4, 4),
    FormatInfo::new(DxgiFormat::BC2_UNORM_SRGB, "BC2_UNORM_SRGB", 8, 4, 4, 4),
    FormatInfo::new(DxgiFormat::BC3_TYPELESS, "BC3_TYPELESS", 8, 4, 4, 4),
    FormatInfo::new(DxgiFormat::BC3_UNORM, "BC3_UNORM", 8, 4, 4, 4),
    FormatInfo::new(DxgiFormat::BC3_UNORM_SRGB, "BC3_UNORM_SRGB", 8, 4, 4, 4),
    FormatInfo::new(DxgiFormat::BC4_TYPELESS, "BC4_TYPELESS", 4, 1, 4, 4),
    FormatInfo::new(DxgiFormat::BC4_UNORM, "BC4_UNORM", 4, 1, 4, 4),
    FormatInfo::new(DxgiFormat::BC4_SNORM, "BC4_SNORM", 4, 1, 4, 4),
    FormatInfo::new(DxgiFormat::BC5_TYPELESS, "BC5_TYPELESS", 8, 2, 4, 4),
    FormatInfo::new(DxgiFormat::BC5_UNORM, "BC5_UNORM", 8, 2, 4, 4),
    FormatInfo::new(DxgiFormat::BC5_SNORM, "BC5_SNORM", 8, 2, 4, 4),
    FormatInfo::new(DxgiFormat::B5G6R5_UNORM, "B5G6R5_UNORM", 16, 3, 1, 1),
    FormatInfo::new(DxgiFormat::B5G5R5A1_UNORM, "B5G5R5A1_UNORM", 16, 4, 1, 1),
    FormatInfo::new(DxgiFormat::B8G8R8A8_UNORM, "B8G8R8A8_UNORM", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::B8G8R8X8_UNORM, "B8G8R8X8_UNORM", 32, 3, 1, 1),
    FormatInfo::new(DxgiFormat::R10G10B10_XR_BIAS_A2_UNORM, "R10G10B10_XR_BIAS_A2_UNORM", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::B8G8R8A8_TYPELESS, "B8G8R8A8_TYPELESS", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::B8G8R8A8_UNORM_SRGB, "B8G8R8A8_UNORM_SRGB", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::B8G8R8X8_TYPELESS, "B8G8R8X8_TYPELESS", 32, 3, 1, 1),
    FormatInfo::new(DxgiFormat::B8G8R8X8_UNORM_SRGB, "B8G8R8X8_UNORM_SRGB", 32, 3, 1, 1),
    FormatInfo::new(DxgiFormat::BC6H_TYPELESS, "BC6H_TYPELESS", 8, 3, 4, 4),
    FormatInfo::new(DxgiFormat::BC6H_UF16, "BC6H_UF16", 8, 3, 4, 4),
    FormatInfo::new(DxgiFormat::BC6H_SF16, "BC6H_SF16", 8, 3, 4, 4),
    FormatInfo::new(DxgiFormat::BC7_TYPELESS, "BC7_TYPELESS", 8, 4, 4, 4),
    FormatInfo::new(DxgiFormat::BC7_UNORM, "BC7_UNORM", 8, 4, 4, 4),
    FormatInfo::new(DxgiFormat::BC7_UNORM_SRGB, "BC7_UNORM_SRGB", 8, 4, 4, 4),
    FormatInfo::new(DxgiFormat::AYUV, "AYUV", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::Y410, "Y410", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::Y416, "Y416", 64, 4, 1, 1),
    FormatInfo::new(DxgiFormat::NV12, "NV12", 12, 3, 1, 1),
    FormatInfo::new(DxgiFormat::P010, "P010", 24, 3, 1, 1),
    FormatInfo::new(DxgiFormat::P016, "P016", 24, 3, 1, 1),
    FormatInfo::new(DxgiFormat::OPAQUE_420, "420_OPAQUE", 12, 3, 1, 1),
    FormatInfo::new(DxgiFormat::YUY2, "YUY2", 16, 3, 1, 1),
    FormatInfo::new(DxgiFormat::Y210, "Y210", 32, 3, 1, 1),
    FormatInfo::new(DxgiFormat::Y216, "Y216", 32, 3, 1, 1),
    FormatInfo::new(DxgiFormat::NV11, "NV11", 12, 3, 1, 1),
    FormatInfo::new(DxgiFormat::AI44, "AI44", 0, 0, 1, 1),
    FormatInfo::new(DxgiFormat::IA44, "IA44", 0, 0, 1, 1),
    FormatInfo::new(DxgiFormat::P8, "P8", 0, 0, 1, 1),
    FormatInfo::new(DxgiFormat::A8P8, "A8P8", 0, 0, 1, 1),
    FormatInfo::new(DxgiFormat::B4G4R4A4_UNORM, "B4G4R4A4_UNORM", 16, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R10G10B10_7E3_A2_FLOAT, "R10G10B10_7E3_A2_FLOAT", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::R10G10B10_6E4_A2_FLOAT, "R10G10B10_6E4_A2_FLOAT", 32, 4, 1, 1),
    FormatInfo::new(DxgiFormat::D16_UNORM_S8_UINT, "D16_UNORM_S8_UINT", 24, 2, 1, 1),
    FormatInfo::new(DxgiFormat::R16_UNORM_X8_TYPELESS, "R16_UNORM_X8_TYPELESS", 24, 1, 1, 1),
    FormatInfo::new(DxgiFormat::X16_TYPELESS_G8_UINT, "X16_TYPELESS_G8_UINT", 24, 1, 1, 1),
    FormatInfo::new(DxgiFormat::P208, "P208", 16, 3, 1, 1),
    FormatInfo::new(DxgiFormat::V208, "V208", 16, 3, 1, 1),
    FormatInfo::new(DxgiFormat::V408, "V408", 24, 3, 1, 1),
    FormatInfo::new(DxgiFormat::ASTC_4X4_TYPELESS, "ASTC_4X4_TYPELESS", 128, 4, 4, 4),
    FormatInfo::new(DxgiFormat::ASTC_4X4_UNORM, "ASTC_4X4_UNORM", 128, 4, 4, 4),
    FormatInfo::new(DxgiFormat::ASTC_4X4_UNORM_SRGB, "ASTC_4X4_UNORM_SRGB", 128, 4, 4, 4),
    FormatInfo::new(DxgiFormat::ASTC_5X4_TYPELESS, "ASTC_5X4_TYPELESS", 128, 4, 5, 4),
    FormatInfo::new(DxgiFormat::ASTC_5X4_UNORM, "ASTC_5X4_UNORM", 128, 4, 5, 4),
    FormatInfo::new(DxgiFormat::ASTC_5X4_UNORM_SRGB, "ASTC_5X4_UNORM_SRGB", 128, 4, 5, 4),
    FormatInfo::new(DxgiFormat::ASTC_5X5_TYPELESS, "ASTC_5X5_TYPELESS", 128, 4, 5, 5),
    FormatInfo::new(DxgiFormat::ASTC_5X5_UNORM, "ASTC_5X5_UNORM", 128, 4, 5, 5),
    FormatInfo::new(DxgiFormat::ASTC_5X5_UNORM_SRGB, "ASTC_5X5_UNORM_SRGB", 128, 4, 5, 5),
    FormatInfo::new(DxgiFormat::ASTC_6X5_TYPELESS, "ASTC_6X5_TYPELESS", 128, 4, 6, 5),
    FormatInfo::new(DxgiFormat::ASTC_6X5_UNORM, "ASTC_6X5_UNORM", 128, 4, 6, 5),
    FormatInfo::new(DxgiFormat::ASTC_6X5_UNORM_SRGB, "ASTC_6X5_UNORM_SRGB", 128, 4, 6, 5),
    FormatInfo::new(DxgiFormat::ASTC_6X6_TYPELESS, "ASTC_6X6_TYPELESS", 128, 4, 6, 6),
    FormatInfo::new(DxgiFormat::ASTC_6X6_UNORM, "ASTC_6X6_UNORM", 128, 4, 6, 6),
    FormatInfo::new(DxgiFormat::ASTC_6X6_UNORM_SRGB, "ASTC_6X6_UNORM_SRGB", 128, 4, 6, 6),
    FormatInfo::new(DxgiFormat::ASTC_8X5_TYPELESS, "ASTC_8X5_TYPELESS", 128, 4, 8, 5),
    FormatInfo::new(DxgiFormat::ASTC_8X5_UNORM, "ASTC_8X5_UNORM", 128, 4, 8, 5),
    FormatInfo::new(DxgiFormat::ASTC_8X5_UNORM_SRGB, "ASTC_8X5_UNORM_SRGB", 128, 4, 8, 5),
    FormatInfo::new(DxgiFormat::ASTC_8X6_TYPELESS, "ASTC_8X6_TYPELESS", 128, 4, 8, 6),
    FormatInfo::new(DxgiFormat::ASTC_8X6_UNORM, "ASTC_8X6_UNORM", 128, 4, 8, 6),
    FormatInfo::new(DxgiFormat::ASTC_8X6_UNORM_SRGB, "ASTC_8X6_UNORM_SRGB", 128, 4, 8, 6),
    FormatInfo::new(DxgiFormat::ASTC_8X8_TYPELESS, "ASTC_8X8_TYPELESS", 128, 4, 8, 8),
    FormatInfo::new(DxgiFormat::ASTC_8X8_UNORM, "ASTC_8X8_UNORM", 128, 4, 8, 8),
    FormatInfo::new(DxgiFormat::ASTC_8X8_UNORM_SRGB, "ASTC_8X8_UNORM_SRGB", 128, 4, 8, 8),
    FormatInfo::new(DxgiFormat::ASTC_10X5_TYPELESS, "ASTC_10X5_TYPELESS", 128, 4, 10, 5),
    FormatInfo::new(DxgiFormat::ASTC_10X5_UNORM, "ASTC_10X5_UNORM", 128, 4, 10, 5),
    FormatInfo::new(DxgiFormat::ASTC_10X5_UNORM_SRGB, "ASTC_10X5_UNORM_SRGB", 128, 4, 10, 5),
    FormatInfo::new(DxgiFormat::ASTC_10X6_TYPELESS, "ASTC_10X6_TYPELESS", 128, 4, 10, 6),
    FormatInfo::new(DxgiFormat::ASTC_10X6_UNORM, "ASTC_10X6_UNORM", 128, 4, 10, 6),
    FormatInfo::new(DxgiFormat::ASTC_10X6_UNORM_SRGB, "ASTC_10X6_UNORM_SRGB", 128, 4, 10, 6),
    FormatInfo::new(DxgiFormat::ASTC_10X8_TYPELESS, "ASTC_10X8_TYPELESS", 128, 4, 10, 8),
    FormatInfo::new(DxgiFormat::ASTC_10X8_UNORM, "ASTC_10X8_UNORM", 128, 4, 10, 8),
    FormatInfo::new(DxgiFormat::ASTC_10X8_UNORM_SRGB, "ASTC_10X8_UNORM_SRGB", 128, 4, 10, 8),
    FormatInfo::new(DxgiFormat::ASTC_10X10_TYPELESS, "ASTC_10X10_TYPELESS", 128, 4, 10, 10),
    FormatInfo::new(DxgiFormat::ASTC_10X10_UNORM, "ASTC_10X10_UNORM", 128, 4, 10, 10),
    FormatInfo::new(DxgiFormat::ASTC_10X10_UNORM_SRGB, "ASTC_10X10_UNORM_SRGB", 128, 4, 10, 10),
    FormatInfo::new(DxgiFormat::ASTC_12X10_TYPELESS, "ASTC_12X10_TYPELESS", 128, 4, 12, 10),
    FormatInfo::new(DxgiFormat::ASTC_12X10_UNORM, "ASTC_12X10_UNORM", 128, 4, 12, 10),
    FormatInfo::new(DxgiFormat::ASTC_12X10_UNORM_SRGB, "ASTC_12X10_UNORM_SRGB", 128, 4, 12, 10),
    FormatInfo::new(DxgiFormat::ASTC_12X12_TYPELESS, "ASTC_12X12_TYPELESS", 128, 4, 12, 12),
    FormatInfo::new(DxgiFormat::ASTC_12X12_UNORM, "ASTC_12X12_UNORM", 128, 4, 12, 12),
    FormatInfo::new(DxgiFormat::ASTC_12X12_UNORM_SRGB, "ASTC_12X12_UNORM_SRGB", 128, 4, 12, 12),
    FormatInfo::new(DxgiFormat::A4B4G4R4_UNORM, "A4B4G4R4_UNORM", 16, 4, 1, 1),
];
