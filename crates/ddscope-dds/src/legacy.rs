//! Legacy D3D9 device format numbers stored in the FourCC slot.
//!
//! Older writers put a `D3DFORMAT` value (20-119) where a FourCC belongs.
//! Each entry maps to a canonical DXGI format where one exists and, where
//! the device format implies a fixed bit layout, to an explicit bit count
//! and channel masks. Entries without a DXGI equivalent are read through
//! their masks alone.

use crate::format::DxgiFormat;
use crate::format::DxgiFormat as F;
use crate::resolve::ColorTransform;

/// One legacy device format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyFormat {
    pub code: u32,
    pub name: &'static str,
    pub format: Option<DxgiFormat>,
    /// Bit count and `[r, g, b, a]` masks implied by the device format.
    pub masks: Option<(u32, [u32; 4])>,
    pub transform: ColorTransform,
}

const fn entry(
    code: u32,
    name: &'static str,
    format: Option<DxgiFormat>,
    masks: Option<(u32, [u32; 4])>,
) -> LegacyFormat {
    LegacyFormat {
        code,
        name,
        format,
        masks,
        transform: ColorTransform::None,
    }
}

const fn with_transform(format: LegacyFormat, transform: ColorTransform) -> LegacyFormat {
    LegacyFormat { transform, ..format }
}

/// Sorted by device format number.
static LEGACY_TABLE: &[LegacyFormat] = &[
    entry(20, "R8G8B8", None, Some((24, [0xFF_0000, 0x00_FF00, 0x00_00FF, 0]))),
    entry(21, "A8R8G8B8", Some(F::B8G8R8A8_UNORM), Some((32, [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000]))),
    entry(22, "X8R8G8B8", Some(F::B8G8R8X8_UNORM), Some((32, [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0]))),
    entry(23, "R5G6B5", Some(F::B5G6R5_UNORM), Some((16, [0xF800, 0x07E0, 0x001F, 0]))),
    entry(24, "X1R5G5B5", None, Some((16, [0x7C00, 0x03E0, 0x001F, 0]))),
    entry(25, "A1R5G5B5", Some(F::B5G5R5A1_UNORM), Some((16, [0x7C00, 0x03E0, 0x001F, 0x8000]))),
    entry(26, "A4R4G4B4", Some(F::B4G4R4A4_UNORM), Some((16, [0x0F00, 0x00F0, 0x000F, 0xF000]))),
    entry(27, "R3G3B2", None, Some((8, [0xE0, 0x1C, 0x03, 0]))),
    entry(28, "A8", Some(F::A8_UNORM), Some((8, [0, 0, 0, 0xFF]))),
    entry(29, "A8R3G3B2", None, Some((16, [0x00E0, 0x001C, 0x0003, 0xFF00]))),
    entry(30, "X4R4G4B4", None, Some((16, [0x0F00, 0x00F0, 0x000F, 0]))),
    entry(31, "A2B10G10R10", Some(F::R10G10B10A2_UNORM), Some((32, [0x0000_03FF, 0x000F_FC00, 0x3FF0_0000, 0xC000_0000]))),
    entry(32, "A8B8G8R8", Some(F::R8G8B8A8_UNORM), Some((32, [0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0xFF00_0000]))),
    entry(33, "X8B8G8R8", None, Some((32, [0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0]))),
    entry(34, "G16R16", Some(F::R16G16_UNORM), Some((32, [0x0000_FFFF, 0xFFFF_0000, 0, 0]))),
    entry(35, "A2R10G10B10", None, Some((32, [0x3FF0_0000, 0x000F_FC00, 0x0000_03FF, 0xC000_0000]))),
    entry(36, "A16B16G16R16", Some(F::R16G16B16A16_UNORM), None),
    entry(40, "A8P8", Some(F::A8P8), None),
    entry(41, "P8", Some(F::P8), None),
    with_transform(entry(50, "L8", Some(F::R8_UNORM), Some((8, [0xFF, 0, 0, 0]))), ColorTransform::Luminance),
    with_transform(entry(51, "A8L8", Some(F::R8G8_UNORM), Some((16, [0x00FF, 0, 0, 0xFF00]))), ColorTransform::Luminance),
    with_transform(entry(52, "A4L4", None, Some((8, [0x0F, 0, 0, 0xF0]))), ColorTransform::Luminance),
    entry(60, "V8U8", Some(F::R8G8_SNORM), Some((16, [0x00FF, 0xFF00, 0, 0]))),
    entry(61, "L6V5U5", None, Some((16, [0x001F, 0x03E0, 0xFC00, 0]))),
    entry(62, "X8L8V8U8", None, Some((32, [0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0]))),
    entry(63, "Q8W8V8U8", Some(F::R8G8B8A8_SNORM), Some((32, [0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0xFF00_0000]))),
    entry(64, "V16U16", Some(F::R16G16_SNORM), Some((32, [0x0000_FFFF, 0xFFFF_0000, 0, 0]))),
    entry(67, "A2W10V10U10", None, Some((32, [0x0000_03FF, 0x000F_FC00, 0x3FF0_0000, 0xC000_0000]))),
    entry(70, "D16_LOCKABLE", Some(F::D16_UNORM), None),
    entry(71, "D32", None, Some((32, [0xFFFF_FFFF, 0, 0, 0]))),
    entry(73, "D15S1", None, Some((16, [0xFFFE, 0, 0, 0x0001]))),
    entry(75, "D24S8", Some(F::D24_UNORM_S8_UINT), None),
    entry(77, "D24X8", None, Some((32, [0x00FF_FFFF, 0, 0, 0]))),
    entry(79, "D24X4S4", None, Some((32, [0x00FF_FFFF, 0, 0, 0x0F00_0000]))),
    entry(80, "D16", Some(F::D16_UNORM), None),
    with_transform(entry(81, "L16", Some(F::R16_UNORM), Some((16, [0xFFFF, 0, 0, 0]))), ColorTransform::Luminance),
    entry(82, "D32F_LOCKABLE", Some(F::D32_FLOAT), None),
    entry(83, "D24FS8", None, Some((32, [0x00FF_FFFF, 0, 0, 0xFF00_0000]))),
    entry(85, "S8_LOCKABLE", Some(F::R8_UINT), None),
    entry(110, "Q16W16V16U16", Some(F::R16G16B16A16_SNORM), None),
    entry(111, "R16F", Some(F::R16_FLOAT), None),
    entry(112, "G16R16F", Some(F::R16G16_FLOAT), None),
    entry(113, "A16B16G16R16F", Some(F::R16G16B16A16_FLOAT), None),
    entry(114, "R32F", Some(F::R32_FLOAT), None),
    entry(115, "G32R32F", Some(F::R32G32_FLOAT), None),
    entry(116, "A32B32G32R32F", Some(F::R32G32B32A32_FLOAT), None),
    with_transform(entry(117, "CxV8U8", Some(F::R8G8_SNORM), Some((16, [0x00FF, 0xFF00, 0, 0]))), ColorTransform::OrthonormalReconstruct),
    entry(118, "A1", None, Some((1, [0, 0, 0, 0x1]))),
    entry(119, "A2B10G10R10_XR_BIAS", Some(F::R10G10B10_XR_BIAS_A2_UNORM), Some((32, [0x0000_03FF, 0x000F_FC00, 0x3FF0_0000, 0xC000_0000]))),
];

/// Look up a legacy device format by its numeric value.
pub fn lookup(code: u32) -> Option<&'static LegacyFormat> {
    LEGACY_TABLE
        .binary_search_by_key(&code, |entry| entry.code)
        .ok()
        .map(|index| &LEGACY_TABLE[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted() {
        assert!(LEGACY_TABLE.windows(2).all(|w| w[0].code < w[1].code));
    }

    #[test]
    fn test_lookup() {
        let argb = lookup(21).unwrap();
        assert_eq!(argb.name, "A8R8G8B8");
        assert_eq!(argb.format, Some(DxgiFormat::B8G8R8A8_UNORM));
        assert_eq!(argb.masks.unwrap().1[3], 0xFF00_0000);

        let stencil = lookup(85).unwrap();
        assert_eq!(stencil.name, "S8_LOCKABLE");
        assert_eq!(stencil.format, Some(DxgiFormat::R8_UINT));

        assert!(lookup(19).is_none());
        assert!(lookup(120).is_none());
        assert!(lookup(u32::from_le_bytes(*b"DXT1")).is_none());
    }

    #[test]
    fn test_transforms() {
        assert_eq!(lookup(50).unwrap().transform, ColorTransform::Luminance);
        assert_eq!(lookup(81).unwrap().transform, ColorTransform::Luminance);
        assert_eq!(
            lookup(117).unwrap().transform,
            ColorTransform::OrthonormalReconstruct
        );
        assert_eq!(lookup(21).unwrap().transform, ColorTransform::None);
    }

    #[test]
    fn test_mask_bit_counts_fit() {
        for entry in LEGACY_TABLE {
            if let Some((bits, masks)) = entry.masks {
                let combined = masks.iter().fold(0u64, |acc, m| acc | *m as u64);
                assert!(combined < (1u64 << bits), "{} masks exceed bit count", entry.name);
            }
        }
    }
}
