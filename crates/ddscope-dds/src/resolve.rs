//! Format resolution.
//!
//! Works out the canonical pixel format of a file from the overloaded
//! signals a DDS header can carry. Precedence, first match wins:
//!
//! 1. a known compressed or packed FourCC,
//! 2. the DXT10 extension's DXGI format,
//! 3. a legacy D3D9 device format number stored as the FourCC,
//! 4. the raw bitmasks of the pixel format block.
//!
//! The parsed header is never modified; derived bit counts and masks are
//! returned in [`ResolvedFormat`].

use std::fmt;

use crate::format::{Compression, DxgiFormat};
use crate::header::{ddpf, AlphaMode, DdsHeader, DdsHeaderDxt10, FourCC};
use crate::{legacy, Diagnosed, Diagnostics};

/// Colour reconstruction hint for consumers of the pixel data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTransform {
    #[default]
    None,
    /// Single channel is luminance and should be replicated to RGB.
    Luminance,
    /// Channels are stored as A, G, B, R (`RXGB`).
    AlphaGreenBlueRed,
    /// Two stored channels; the third is reconstructed as a unit normal.
    OrthonormalReconstruct,
    /// Red and green are stored swapped.
    SwapRedGreen,
    /// Red and blue are stored swapped.
    SwapRedBlue,
    /// Channels hold YUV rather than RGB.
    Yuv,
}

impl fmt::Display for ColorTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Luminance => "luminance",
            Self::AlphaGreenBlueRed => "AGBR",
            Self::OrthonormalReconstruct => "orthonormal",
            Self::SwapRedGreen => "swap RG",
            Self::SwapRedBlue => "swap RB",
            Self::Yuv => "YUV",
        };
        f.write_str(name)
    }
}

/// Which signal the format was resolved from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatSource {
    FourCC,
    Dxt10,
    Legacy,
    #[default]
    Bitmask,
}

/// Output of format resolution.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFormat {
    /// Canonical format; `None` in bitmask mode.
    pub format: Option<DxgiFormat>,
    pub compression: Compression,
    pub transform: ColorTransform,
    pub alpha_mode: AlphaMode,
    pub normal_map: bool,
    /// Pixel data must be decoded through `masks` rather than `format`.
    pub bitmasked: bool,
    /// Bit count, either copied from the header or implied by the format.
    pub bit_count: u32,
    /// Channel masks in R, G, B, A slot order.
    pub masks: [u32; 4],
    pub source: FormatSource,
    /// The code that was used for resolution, after presence fixups.
    pub four_cc: FourCC,
}

impl ResolvedFormat {
    fn from_header(header: &DdsHeader, dxt10: Option<&DdsHeaderDxt10>) -> Self {
        let pf = &header.pixel_format;
        let alpha_mode = match dxt10 {
            Some(ext) => ext.alpha_mode(),
            None if pf.has_flag(ddpf::ALPHAPREMULT) => AlphaMode::Premultiplied,
            None => AlphaMode::Unknown,
        };
        Self {
            alpha_mode,
            normal_map: pf.has_flag(ddpf::NORMAL),
            bit_count: pf.rgb_bit_count,
            masks: pf.bit_masks,
            four_cc: pf.four_cc,
            ..Self::default()
        }
    }

    /// Flip the red/green swap hint. Other transforms are left alone.
    pub fn toggle_swap_red_green(&mut self) {
        self.transform = match self.transform {
            ColorTransform::None => ColorTransform::SwapRedGreen,
            ColorTransform::SwapRedGreen => ColorTransform::None,
            other => other,
        };
    }

    /// Apply the transform hints that hold regardless of how the format
    /// was resolved. Later rules win.
    fn apply_transform_hints(&mut self, header: &DdsHeader) {
        let pf = &header.pixel_format;
        match FourCC::from_u32(pf.rgb_bit_count) {
            FourCC::A2XY => self.transform = ColorTransform::SwapRedGreen,
            FourCC::A2D5 => self.transform = ColorTransform::AlphaGreenBlueRed,
            _ => {}
        }
        if pf.has_flag(ddpf::YUV) {
            self.transform = ColorTransform::Yuv;
        }
        if pf.has_flag(ddpf::LUMINANCE) {
            self.transform = ColorTransform::Luminance;
        }
        if !self.bitmasked && self.format.is_some_and(stores_red_blue_swapped) {
            self.transform = ColorTransform::SwapRedBlue;
        }
    }

    fn apply_masks(&mut self, (bit_count, masks): (u32, [u32; 4])) {
        self.bit_count = bit_count;
        self.masks = masks;
        self.bitmasked = true;
    }
}

fn stores_red_blue_swapped(format: DxgiFormat) -> bool {
    matches!(
        format,
        DxgiFormat::B5G5R5A1_UNORM
            | DxgiFormat::B8G8R8A8_UNORM
            | DxgiFormat::B8G8R8A8_TYPELESS
            | DxgiFormat::B8G8R8A8_UNORM_SRGB
            | DxgiFormat::B8G8R8X8_UNORM
            | DxgiFormat::B8G8R8X8_TYPELESS
            | DxgiFormat::B8G8R8X8_UNORM_SRGB
    )
}

/// Compressed and packed FourCCs with a fixed mapping.
static FOURCC_TABLE: &[(FourCC, DxgiFormat, Compression)] = &[
    (FourCC::DXT1, DxgiFormat::BC1_UNORM, Compression::Bc1),
    (FourCC::DXT2, DxgiFormat::BC2_UNORM, Compression::Bc2Dxt2),
    (FourCC::DXT3, DxgiFormat::BC2_UNORM, Compression::Bc2Dxt3),
    (FourCC::DXT4, DxgiFormat::BC3_UNORM, Compression::Bc3Dxt4),
    (FourCC::DXT5, DxgiFormat::BC3_UNORM, Compression::Bc3Dxt5),
    (FourCC::RXGB, DxgiFormat::BC3_UNORM, Compression::Bc3Dxt5),
    (FourCC::ATI1, DxgiFormat::BC4_UNORM, Compression::Bc4),
    (FourCC::BC4U, DxgiFormat::BC4_UNORM, Compression::Bc4),
    (FourCC::BC4S, DxgiFormat::BC4_SNORM, Compression::Bc4),
    (FourCC::ATI2, DxgiFormat::BC5_UNORM, Compression::Bc5),
    (FourCC::BC5U, DxgiFormat::BC5_UNORM, Compression::Bc5),
    (FourCC::BC5S, DxgiFormat::BC5_SNORM, Compression::Bc5),
    (FourCC::BC6H, DxgiFormat::BC6H_UF16, Compression::Bc6hUnsigned),
    (FourCC::BC7L, DxgiFormat::BC7_UNORM, Compression::Bc7),
    (FourCC::BC70, DxgiFormat::BC7_UNORM, Compression::Bc7),
    (FourCC::ZOLA, DxgiFormat::BC7_UNORM, Compression::Bc7),
    (FourCC::RGBG, DxgiFormat::R8G8_B8G8_UNORM, Compression::None),
    (FourCC::GRGB, DxgiFormat::G8R8_G8B8_UNORM, Compression::None),
    (FourCC::YUY2, DxgiFormat::YUY2, Compression::None),
    (FourCC::UYVY, DxgiFormat::R8G8_B8G8_UNORM, Compression::None),
];

/// ASTC footprints and their UNORM formats.
static ASTC_FOOTPRINTS: &[(u8, u8, DxgiFormat)] = &[
    (4, 4, DxgiFormat::ASTC_4X4_UNORM),
    (5, 4, DxgiFormat::ASTC_5X4_UNORM),
    (5, 5, DxgiFormat::ASTC_5X5_UNORM),
    (6, 5, DxgiFormat::ASTC_6X5_UNORM),
    (6, 6, DxgiFormat::ASTC_6X6_UNORM),
    (8, 5, DxgiFormat::ASTC_8X5_UNORM),
    (8, 6, DxgiFormat::ASTC_8X6_UNORM),
    (8, 8, DxgiFormat::ASTC_8X8_UNORM),
    (10, 5, DxgiFormat::ASTC_10X5_UNORM),
    (10, 6, DxgiFormat::ASTC_10X6_UNORM),
    (10, 8, DxgiFormat::ASTC_10X8_UNORM),
    (10, 10, DxgiFormat::ASTC_10X10_UNORM),
    (12, 10, DxgiFormat::ASTC_12X10_UNORM),
    (12, 12, DxgiFormat::ASTC_12X12_UNORM),
];

/// Map a FourCC with a fixed meaning to its format and compression family.
pub fn lookup_four_cc(code: FourCC) -> Option<(DxgiFormat, Compression)> {
    if let Some(&(_, format, compression)) = FOURCC_TABLE.iter().find(|(cc, ..)| *cc == code) {
        return Some((format, compression));
    }
    ASTC_FOOTPRINTS
        .iter()
        .find(|(w, h, _)| code == FourCC::astc(*w, *h, false) || code == FourCC::astc(*w, *h, true))
        .map(|&(_, _, format)| (format, Compression::Astc))
}

/// Resolve the canonical format of a file.
pub fn resolve_format(
    header: &DdsHeader,
    dxt10: Option<&DdsHeaderDxt10>,
) -> Diagnosed<ResolvedFormat> {
    let mut log = Diagnostics::new();
    let mut resolved = ResolvedFormat::from_header(header, dxt10);
    let pf = &header.pixel_format;

    match dxt10 {
        Some(_) => log.info("DXT10 extension header present"),
        None => log.info("no DXT10 extension header"),
    }

    let code = pf.four_cc;
    let flagged = pf.has_flag(ddpf::FOURCC);
    if flagged && code.is_none() {
        log.warn("FOURCC flag set but the FourCC is zero");
    } else if !flagged && !code.is_none() {
        log.warn(format!("FourCC {code} present without the FOURCC flag; using it anyway"));
    }

    if let Some((format, compression)) = lookup_four_cc(code) {
        resolved.format = Some(format);
        resolved.compression = compression;
        resolved.source = FormatSource::FourCC;

        match code {
            FourCC::DXT2 | FourCC::DXT4 => resolved.alpha_mode = AlphaMode::Premultiplied,
            FourCC::RXGB => {
                resolved.transform = ColorTransform::AlphaGreenBlueRed;
                resolved.normal_map = false;
            }
            FourCC::ATI2 => resolved.toggle_swap_red_green(),
            _ => {}
        }
        resolved.apply_transform_hints(header);
        return Diagnosed::new(resolved, log);
    }

    if code == FourCC::DX10 {
        if let Some(ext) = dxt10 {
            let format = DxgiFormat(ext.dxgi_format);
            resolved.format = Some(format);
            resolved.compression = Compression::from_format(format, resolved.alpha_mode);
            resolved.source = FormatSource::Dxt10;
            if let Some(masks) = format.packed_masks() {
                resolved.apply_masks(masks);
            }
            if format.info().is_none() {
                log.warn(format!("unknown DXGI format {}", ext.dxgi_format));
            }
            resolved.apply_transform_hints(header);
            return Diagnosed::new(resolved, log);
        }
    }

    if let Some(entry) = legacy::lookup(code.as_u32()) {
        resolved.source = FormatSource::Legacy;
        resolved.transform = entry.transform;
        if let Some(masks) = entry.masks {
            resolved.apply_masks(masks);
        }
        match entry.format {
            Some(format) => {
                resolved.format = Some(format);
                resolved.compression = Compression::from_format(format, resolved.alpha_mode);
            }
            None => resolved.bitmasked = true,
        }
        resolved.apply_transform_hints(header);
        return Diagnosed::new(resolved, log);
    }

    if !code.is_none() {
        log.warn(format!("unrecognized FourCC {code}; falling back to bitmasks"));
    }

    resolved.bitmasked = true;
    resolved.source = FormatSource::Bitmask;
    let deducible = ddpf::RGB | ddpf::LUMINANCE | ddpf::ALPHA | ddpf::BUMPDUDV | ddpf::YUV;
    if pf.flags & deducible == 0 {
        log.warn("pixel format has no RGB, luminance, alpha or bump flags");
    }
    resolved.apply_transform_hints(header);

    Diagnosed::new(resolved, log)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test_support::DdsBuilder;
    use crate::Severity;

    fn resolve(data: &[u8]) -> (ResolvedFormat, Diagnostics) {
        let header = DdsHeader::parse(data).unwrap();
        let ext = header
            .is_dx10()
            .then(|| DdsHeaderDxt10::parse(data).unwrap());
        let diagnosed = resolve_format(&header, ext.as_ref());
        (diagnosed.value, diagnosed.diagnostics)
    }

    #[rstest]
    #[case(FourCC::DXT1, DxgiFormat::BC1_UNORM, Compression::Bc1)]
    #[case(FourCC::DXT3, DxgiFormat::BC2_UNORM, Compression::Bc2Dxt3)]
    #[case(FourCC::DXT5, DxgiFormat::BC3_UNORM, Compression::Bc3Dxt5)]
    #[case(FourCC::ATI1, DxgiFormat::BC4_UNORM, Compression::Bc4)]
    #[case(FourCC::BC4S, DxgiFormat::BC4_SNORM, Compression::Bc4)]
    #[case(FourCC::BC5S, DxgiFormat::BC5_SNORM, Compression::Bc5)]
    #[case(FourCC::BC6H, DxgiFormat::BC6H_UF16, Compression::Bc6hUnsigned)]
    #[case(FourCC::ZOLA, DxgiFormat::BC7_UNORM, Compression::Bc7)]
    #[case(FourCC(*b"AS44"), DxgiFormat::ASTC_4X4_UNORM, Compression::Astc)]
    #[case(FourCC(*b"ASCA"), DxgiFormat::ASTC_12X10_UNORM, Compression::Astc)]
    #[case(FourCC(*b"AS::"), DxgiFormat::ASTC_10X10_UNORM, Compression::Astc)]
    #[case(FourCC(*b"AS:5"), DxgiFormat::ASTC_10X5_UNORM, Compression::Astc)]
    #[case(FourCC(*b"AS<:"), DxgiFormat::ASTC_12X10_UNORM, Compression::Astc)]
    #[case(FourCC(*b"AS<<"), DxgiFormat::ASTC_12X12_UNORM, Compression::Astc)]
    #[case(FourCC::YUY2, DxgiFormat::YUY2, Compression::None)]
    fn test_four_cc_table(
        #[case] code: FourCC,
        #[case] format: DxgiFormat,
        #[case] compression: Compression,
    ) {
        let data = DdsBuilder::new(4, 4).four_cc(code).build();
        let (resolved, log) = resolve(&data);

        assert_eq!(resolved.format, Some(format));
        assert_eq!(resolved.compression, compression);
        assert_eq!(resolved.source, FormatSource::FourCC);
        assert!(!resolved.bitmasked);
        assert_eq!(log.severity(), Severity::Info);
    }

    #[test]
    fn test_premultiplied_dxt() {
        let data = DdsBuilder::new(4, 4).four_cc(FourCC::DXT2).build();
        let (resolved, _) = resolve(&data);
        assert_eq!(resolved.compression, Compression::Bc2Dxt2);
        assert_eq!(resolved.alpha_mode, AlphaMode::Premultiplied);

        let data = DdsBuilder::new(4, 4).four_cc(FourCC::DXT4).build();
        let (resolved, _) = resolve(&data);
        assert_eq!(resolved.compression, Compression::Bc3Dxt4);
        assert_eq!(resolved.alpha_mode, AlphaMode::Premultiplied);
    }

    #[test]
    fn test_rxgb_clears_normal_map() {
        let data = DdsBuilder::new(4, 4)
            .four_cc(FourCC::RXGB)
            .pf_flags(ddpf::FOURCC | ddpf::NORMAL)
            .build();
        let (resolved, _) = resolve(&data);

        assert_eq!(resolved.transform, ColorTransform::AlphaGreenBlueRed);
        assert!(!resolved.normal_map);
    }

    #[test]
    fn test_ati2_toggles_swap() {
        let data = DdsBuilder::new(4, 4).four_cc(FourCC::ATI2).build();
        let (mut resolved, _) = resolve(&data);
        assert_eq!(resolved.transform, ColorTransform::SwapRedGreen);

        resolved.toggle_swap_red_green();
        assert_eq!(resolved.transform, ColorTransform::None);

        let data = DdsBuilder::new(4, 4).four_cc(FourCC::BC5U).build();
        let (resolved, _) = resolve(&data);
        assert_eq!(resolved.transform, ColorTransform::None);
    }

    #[test]
    fn test_dx10_format() {
        let data = DdsBuilder::new(8, 8).dx10(DxgiFormat::BC7_UNORM_SRGB.0).build();
        let (resolved, log) = resolve(&data);

        assert_eq!(resolved.format, Some(DxgiFormat::BC7_UNORM_SRGB));
        assert_eq!(resolved.compression, Compression::Bc7);
        assert_eq!(resolved.source, FormatSource::Dxt10);
        assert!(log.entries()[0].message.contains("DXT10"));
    }

    #[test]
    fn test_dx10_premultiplied_bc3() {
        let data = DdsBuilder::new(8, 8)
            .dx10(DxgiFormat::BC3_UNORM.0)
            .misc_flags2(2)
            .build();
        let (resolved, _) = resolve(&data);
        assert_eq!(resolved.alpha_mode, AlphaMode::Premultiplied);
        assert_eq!(resolved.compression, Compression::Bc3Dxt4);
    }

    #[rstest]
    #[case(DxgiFormat::B5G6R5_UNORM, 16, [0xF800, 0x07E0, 0x001F, 0])]
    #[case(DxgiFormat::R10G10B10A2_UNORM, 32, [0x3FF, 0xFFC00, 0x3FF0_0000, 0xC000_0000])]
    #[case(DxgiFormat::R9G9B9E5_SHAREDEXP, 32, [0x1FF, 0x3FE00, 0x7FC_0000, 0xF800_0000])]
    #[case(DxgiFormat::B4G4R4A4_UNORM, 16, [0x0F00, 0x00F0, 0x000F, 0xF000])]
    fn test_dx10_packed_masks(
        #[case] format: DxgiFormat,
        #[case] bit_count: u32,
        #[case] masks: [u32; 4],
    ) {
        let data = DdsBuilder::new(4, 4).dx10(format.0).build();
        let (resolved, _) = resolve(&data);

        assert_eq!(resolved.format, Some(format));
        assert_eq!(resolved.bit_count, bit_count);
        assert_eq!(resolved.masks, masks);
        assert!(resolved.bitmasked);
    }

    #[test]
    fn test_dx10_unpacked_keeps_header_masks() {
        let data = DdsBuilder::new(4, 4).dx10(DxgiFormat::R8G8B8A8_UNORM.0).build();
        let (resolved, _) = resolve(&data);
        assert_eq!(resolved.masks, [0; 4]);
        assert_eq!(resolved.bit_count, 0);
        assert!(!resolved.bitmasked);
    }

    #[test]
    fn test_legacy_code_with_masks() {
        let data = DdsBuilder::new(4, 4).four_cc(FourCC::from_u32(21)).build();
        let (resolved, _) = resolve(&data);

        assert_eq!(resolved.format, Some(DxgiFormat::B8G8R8A8_UNORM));
        assert_eq!(resolved.source, FormatSource::Legacy);
        assert_eq!(resolved.bit_count, 32);
        assert_eq!(resolved.masks[0], 0x00FF_0000);
        assert!(resolved.bitmasked);
        assert_eq!(resolved.transform, ColorTransform::None);
    }

    #[test]
    fn test_legacy_stencil_code() {
        let data = DdsBuilder::new(4, 4).four_cc(FourCC::from_u32(85)).build();
        let (resolved, log) = resolve(&data);

        assert_eq!(resolved.format, Some(DxgiFormat::R8_UINT));
        assert_eq!(resolved.source, FormatSource::Legacy);
        assert_eq!(log.severity(), Severity::Info);
    }

    #[test]
    fn test_legacy_code_without_masks_uses_format() {
        let data = DdsBuilder::new(4, 4).four_cc(FourCC::from_u32(36)).build();
        let (resolved, _) = resolve(&data);

        assert_eq!(resolved.format, Some(DxgiFormat::R16G16B16A16_UNORM));
        assert!(!resolved.bitmasked);
    }

    #[test]
    fn test_legacy_code_without_dxgi_equivalent() {
        let data = DdsBuilder::new(4, 4).four_cc(FourCC::from_u32(20)).build();
        let (resolved, _) = resolve(&data);

        assert_eq!(resolved.format, None);
        assert!(resolved.bitmasked);
        assert_eq!(resolved.bit_count, 24);
    }

    #[test]
    fn test_legacy_luminance_and_float() {
        let data = DdsBuilder::new(4, 4).four_cc(FourCC::from_u32(51)).build();
        let (resolved, _) = resolve(&data);
        assert_eq!(resolved.transform, ColorTransform::Luminance);

        let data = DdsBuilder::new(4, 4).four_cc(FourCC::from_u32(113)).build();
        let (resolved, _) = resolve(&data);
        assert_eq!(resolved.format, Some(DxgiFormat::R16G16B16A16_FLOAT));
        assert_eq!(resolved.bit_count, 0);
    }

    #[test]
    fn test_four_cc_without_flag_warns() {
        let data = DdsBuilder::new(4, 4)
            .four_cc(FourCC::DXT1)
            .pf_flags(0)
            .build();
        let (resolved, log) = resolve(&data);

        assert_eq!(resolved.compression, Compression::Bc1);
        assert_eq!(log.severity(), Severity::Warning);
    }

    #[test]
    fn test_flag_without_four_cc_warns() {
        let data = DdsBuilder::new(4, 4)
            .rgb(32, [0xFF, 0xFF00, 0xFF0000, 0xFF000000])
            .pf_flags(ddpf::FOURCC | ddpf::RGB)
            .build();
        let (resolved, log) = resolve(&data);

        assert!(resolved.bitmasked);
        assert_eq!(log.severity(), Severity::Warning);
    }

    #[test]
    fn test_bitmask_fallback() {
        let data = DdsBuilder::new(4, 4)
            .rgb(32, [0x00FF0000, 0x0000FF00, 0x000000FF, 0xFF000000])
            .build();
        let (resolved, log) = resolve(&data);

        assert!(resolved.bitmasked);
        assert_eq!(resolved.format, None);
        assert_eq!(resolved.source, FormatSource::Bitmask);
        assert_eq!(resolved.bit_count, 32);
        assert_eq!(log.severity(), Severity::Info);
    }

    #[test]
    fn test_luminance_bitmask() {
        let data = DdsBuilder::new(4, 4)
            .rgb(8, [0xFF, 0, 0, 0])
            .pf_flags(ddpf::LUMINANCE)
            .build();
        let (resolved, _) = resolve(&data);
        assert_eq!(resolved.transform, ColorTransform::Luminance);
    }

    #[test]
    fn test_unknown_four_cc_falls_back() {
        let data = DdsBuilder::new(4, 4).four_cc(FourCC(*b"ETC1")).build();
        let (resolved, log) = resolve(&data);

        assert!(resolved.bitmasked);
        assert_eq!(log.severity(), Severity::Warning);
    }

    #[rstest]
    #[case(DxgiFormat::B8G8R8A8_UNORM)]
    #[case(DxgiFormat::B8G8R8A8_UNORM_SRGB)]
    #[case(DxgiFormat::B8G8R8X8_TYPELESS)]
    fn test_bgr_formats_swap_red_blue(#[case] format: DxgiFormat) {
        let data = DdsBuilder::new(4, 4).dx10(format.0).build();
        let (resolved, _) = resolve(&data);
        assert_eq!(resolved.transform, ColorTransform::SwapRedBlue);
    }

    #[test]
    fn test_masked_bgr_formats_keep_channel_order() {
        let data = DdsBuilder::new(4, 4).dx10(DxgiFormat::B5G5R5A1_UNORM.0).build();
        let (resolved, _) = resolve(&data);
        assert!(resolved.bitmasked);
        assert_eq!(resolved.transform, ColorTransform::None);

        let data = DdsBuilder::new(4, 4).dx10(DxgiFormat::R8G8B8A8_UNORM.0).build();
        let (resolved, _) = resolve(&data);
        assert_eq!(resolved.transform, ColorTransform::None);
    }

    #[rstest]
    #[case(FourCC::A2XY, ColorTransform::SwapRedGreen)]
    #[case(FourCC::A2D5, ColorTransform::AlphaGreenBlueRed)]
    fn test_swizzle_code_in_bit_count(#[case] code: FourCC, #[case] transform: ColorTransform) {
        let data = DdsBuilder::new(4, 4)
            .four_cc(FourCC::DXT5)
            .rgb_bit_count(code.as_u32())
            .build();
        let (resolved, _) = resolve(&data);

        assert_eq!(resolved.compression, Compression::Bc3Dxt5);
        assert_eq!(resolved.transform, transform);
    }

    #[test]
    fn test_swizzle_code_overrides_ati2_toggle() {
        let data = DdsBuilder::new(4, 4)
            .four_cc(FourCC::ATI2)
            .rgb_bit_count(FourCC::A2XY.as_u32())
            .build();
        let (resolved, _) = resolve(&data);
        assert_eq!(resolved.transform, ColorTransform::SwapRedGreen);
    }

    #[test]
    fn test_yuv_flag() {
        let data = DdsBuilder::new(4, 4)
            .rgb(32, [0xFF, 0xFF00, 0xFF0000, 0xFF000000])
            .pf_flags(ddpf::YUV)
            .build();
        let (resolved, log) = resolve(&data);

        assert!(resolved.bitmasked);
        assert_eq!(resolved.transform, ColorTransform::Yuv);
        assert_eq!(log.severity(), Severity::Info);
    }

    #[test]
    fn test_luminance_flag_wins_over_yuv() {
        let data = DdsBuilder::new(4, 4)
            .rgb(8, [0xFF, 0, 0, 0])
            .pf_flags(ddpf::YUV | ddpf::LUMINANCE)
            .build();
        let (resolved, _) = resolve(&data);
        assert_eq!(resolved.transform, ColorTransform::Luminance);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let files = [
            DdsBuilder::new(4, 4).four_cc(FourCC::DXT5).build(),
            DdsBuilder::new(4, 4).four_cc(FourCC::ATI2).build(),
            DdsBuilder::new(4, 4).four_cc(FourCC::from_u32(117)).build(),
            DdsBuilder::new(4, 4).dx10(DxgiFormat::BC5_UNORM.0).build(),
        ];
        for data in files {
            let (first, _) = resolve(&data);
            let (second, _) = resolve(&data);
            assert_eq!(first, second);
        }
    }
}
