//! The loaded texture: owned buffer plus everything derived from it.

use std::ops::Range;

use crate::extract::{data_offset, extract_levels, LevelRecord};
use crate::format::{Compression, DxgiFormat};
use crate::header::{AlphaMode, DdsHeader, DdsHeaderDxt10};
use crate::layout::{compute_layout, ChannelBits, Dimensions, PixelLayout};
use crate::resolve::{resolve_format, ColorTransform, ResolvedFormat};
use crate::{Diagnostics, Error};

/// Borrowed view of one mip level of one array slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLevel<'a> {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub data: &'a [u8],
}

/// Result of a successful verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Verified {
    resolved: ResolvedFormat,
    layout: PixelLayout,
    declared: Dimensions,
}

/// A DDS file and its resolved format, layout and image levels.
///
/// Loading parses and verifies the headers; image levels are carved out
/// separately by [`DdsTexture::populate_image_data`]. Each operation returns
/// a [`Diagnostics`] log that must be checked for fatal entries before any
/// derived value is trusted.
///
/// # Example
///
/// ```no_run
/// use ddscope_dds::DdsTexture;
///
/// let data = std::fs::read("texture.dds")?;
/// let (texture, diagnostics) = DdsTexture::from_bytes(data);
/// if !diagnostics.is_fatal() {
///     for level in texture.levels() {
///         println!("{}x{}: {} bytes", level.width, level.height, level.data.len());
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct DdsTexture {
    buffer: Vec<u8>,
    header: Option<DdsHeader>,
    dxt10: Option<DdsHeaderDxt10>,
    /// Cached verification log; verification runs at most once per load.
    verification: Option<Diagnostics>,
    verified: Option<Verified>,
    dimensions: Dimensions,
    levels: Vec<LevelRecord>,
}

impl DdsTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and fully extract a texture in one step.
    pub fn from_bytes(buffer: Vec<u8>) -> (Self, Diagnostics) {
        let mut texture = Self::new();
        let log = texture.load(buffer);
        if log.is_fatal() {
            return (texture, log);
        }
        let log = texture.populate_image_data();
        (texture, log)
    }

    /// Install `buffer`, parse its headers and verify the format.
    ///
    /// Any previously loaded state is discarded. On a fatal header error the
    /// fields that were parsed remain inspectable.
    pub fn load(&mut self, buffer: Vec<u8>) -> Diagnostics {
        let _span = tracing::debug_span!("dds_load", len = buffer.len()).entered();
        *self = Self {
            buffer,
            ..Self::default()
        };

        let mut log = Diagnostics::new();
        let header = match DdsHeader::parse(&self.buffer) {
            Ok(header) => header,
            Err(err) => return self.fail_load(log, err),
        };
        self.header = Some(header);

        if header.is_dx10() {
            match DdsHeaderDxt10::parse(&self.buffer) {
                Ok(ext) => self.dxt10 = Some(ext),
                Err(err) => return self.fail_load(log, err),
            }
        }

        log.merge(self.verify());
        log
    }

    fn fail_load(&mut self, mut log: Diagnostics, err: Error) -> Diagnostics {
        log.fatal(err);
        self.verification = Some(log.clone());
        log
    }

    /// Resolve the format, layout and declared dimensions.
    ///
    /// The result is cached; later calls return the same log without
    /// repeating the work.
    pub fn verify(&mut self) -> Diagnostics {
        if let Some(log) = &self.verification {
            return log.clone();
        }
        let Some(header) = self.header else {
            let mut log = Diagnostics::new();
            log.fatal(Error::NotLoaded);
            return log;
        };

        let dxt10 = self.dxt10.as_ref();
        let mut log = header.validate();
        let resolved = resolve_format(&header, dxt10).unpack(&mut log);
        let declared = Dimensions::from_headers(&header, dxt10).unpack(&mut log);
        self.dimensions = declared;

        match compute_layout(&header, resolved).unpack(&mut log) {
            Ok((resolved, layout)) => {
                self.verified = Some(Verified {
                    resolved,
                    layout,
                    declared,
                });
            }
            Err(err) => log.fatal(err),
        }

        self.verification = Some(log.clone());
        log
    }

    /// Carve the image levels out of the buffer.
    ///
    /// Returns the verification log extended with extraction diagnostics.
    /// Repeated calls give identical results for the same buffer.
    pub fn populate_image_data(&mut self) -> Diagnostics {
        let _span = tracing::debug_span!("dds_populate", len = self.buffer.len()).entered();
        let mut log = self.verify();
        if log.is_fatal() {
            return log;
        }
        let (Some(header), Some(verified)) = (self.header, self.verified) else {
            log.fatal(Error::NotLoaded);
            return log;
        };

        let extraction = extract_levels(
            &self.buffer,
            &header,
            &verified.resolved,
            &verified.layout,
            verified.declared,
            data_offset(self.dxt10.is_some()),
        )
        .unpack(&mut log);

        match extraction {
            Ok(extraction) => {
                self.levels = extraction.levels;
                self.dimensions = extraction.dimensions;
            }
            Err(err) => {
                self.levels.clear();
                self.dimensions = verified.declared;
                log.fatal(err);
            }
        }

        tracing::debug!(
            levels = self.levels.len(),
            severity = %log.severity(),
            "populated image data"
        );
        log
    }

    /// Whether verification has run and succeeded.
    pub fn is_verified(&self) -> bool {
        self.verified.is_some()
    }

    pub fn header(&self) -> Option<&DdsHeader> {
        self.header.as_ref()
    }

    pub fn dxt10(&self) -> Option<&DdsHeaderDxt10> {
        self.dxt10.as_ref()
    }

    pub fn resolved(&self) -> Option<&ResolvedFormat> {
        self.verified.as_ref().map(|v| &v.resolved)
    }

    pub fn layout(&self) -> Option<&PixelLayout> {
        self.verified.as_ref().map(|v| &v.layout)
    }

    /// Effective dimensions: declared until extraction, then what was extracted.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Canonical format, `None` in bitmask mode or before verification.
    pub fn format(&self) -> Option<DxgiFormat> {
        self.resolved().and_then(|r| r.format)
    }

    pub fn compression(&self) -> Compression {
        self.resolved().map(|r| r.compression).unwrap_or_default()
    }

    pub fn color_transform(&self) -> ColorTransform {
        self.resolved().map(|r| r.transform).unwrap_or_default()
    }

    /// Whether the colour channels are stored out of RGBA order.
    pub fn swizzle(&self) -> bool {
        matches!(
            self.color_transform(),
            ColorTransform::SwapRedGreen
                | ColorTransform::SwapRedBlue
                | ColorTransform::AlphaGreenBlueRed
        )
    }

    pub fn alpha_mode(&self) -> AlphaMode {
        self.resolved().map(|r| r.alpha_mode).unwrap_or_default()
    }

    pub fn is_bitmasked(&self) -> bool {
        self.resolved().is_some_and(|r| r.bitmasked)
    }

    /// Channel masks in R, G, B, A slot order.
    pub fn channel_masks(&self) -> [u32; 4] {
        self.resolved().map(|r| r.masks).unwrap_or_default()
    }

    pub fn is_srgb(&self) -> bool {
        self.layout().is_some_and(|l| l.srgb)
    }

    pub fn bits_per_pixel(&self) -> u32 {
        self.layout().map_or(0, |l| l.bits_per_pixel)
    }

    pub fn channel_count(&self) -> u8 {
        self.layout().map_or(0, |l| l.channel_count)
    }

    pub fn channel_layout(&self) -> [ChannelBits; 4] {
        self.layout().map(|l| l.channels).unwrap_or_default()
    }

    pub fn block_size(&self) -> (u32, u32) {
        self.layout()
            .map_or((1, 1), |l| (l.block_width, l.block_height))
    }

    pub fn is_cubemap(&self) -> bool {
        self.dimensions.cubemap
    }

    pub fn is_volume(&self) -> bool {
        self.dimensions.volume
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn depth(&self) -> u32 {
        self.dimensions.depth
    }

    pub fn mip_count(&self) -> u32 {
        self.dimensions.mip_count
    }

    pub fn array_size(&self) -> u32 {
        self.dimensions.array_size
    }

    /// Byte offset of the first payload byte.
    pub fn data_offset(&self) -> usize {
        data_offset(self.dxt10.is_some())
    }

    fn level_index(&self, mip: u32, array: u32) -> Option<usize> {
        if mip >= self.dimensions.mip_count || array >= self.dimensions.array_size {
            return None;
        }
        Some(array as usize * self.dimensions.mip_count as usize + mip as usize)
    }

    /// Byte range of a level within [`DdsTexture::buffer`].
    pub fn level_range(&self, mip: u32, array: u32) -> Option<Range<usize>> {
        let index = self.level_index(mip, array)?;
        self.levels.get(index).map(|record| record.range.clone())
    }

    /// View of mip level `mip` in array slice `array`.
    pub fn get_image_data(&self, mip: u32, array: u32) -> Option<ImageLevel<'_>> {
        let record = self.levels.get(self.level_index(mip, array)?)?;
        self.view(record)
    }

    /// All extracted levels in storage order.
    pub fn levels(&self) -> impl Iterator<Item = ImageLevel<'_>> {
        self.levels.iter().filter_map(|record| self.view(record))
    }

    fn view(&self, record: &LevelRecord) -> Option<ImageLevel<'_>> {
        Some(ImageLevel {
            width: record.width,
            height: record.height,
            depth: record.depth,
            data: self.buffer.get(record.range.clone())?,
        })
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_buffer(self) -> Vec<u8> {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{caps2, ddpf, FourCC};
    use crate::test_support::DdsBuilder;
    use crate::Severity;

    #[test]
    fn test_scenario_dxt1_single_level() {
        let data = DdsBuilder::new(4, 4)
            .four_cc(FourCC::DXT1)
            .payload(8)
            .build();
        let (texture, log) = DdsTexture::from_bytes(data);

        assert!(!log.is_fatal());
        assert_eq!(texture.compression(), Compression::Bc1);
        assert_eq!(texture.block_size(), (4, 4));
        assert_eq!(texture.bits_per_pixel(), 4);
        assert_eq!(texture.levels().count(), 1);

        let level = texture.get_image_data(0, 0).unwrap();
        assert_eq!((level.width, level.height, level.depth), (4, 4, 1));
        assert_eq!(level.data.len(), 8);
        assert_eq!(level.data, &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_scenario_dx10_full_mip_chain() {
        let expected = [262144, 65536, 16384, 4096, 1024, 256, 64, 16, 4];
        let data = DdsBuilder::new(256, 256)
            .dx10(DxgiFormat::R8G8B8A8_UNORM.0)
            .mips(9)
            .payload(expected.iter().sum())
            .build();
        let (texture, log) = DdsTexture::from_bytes(data);

        assert_eq!(log.severity(), Severity::Info);
        assert_eq!(texture.mip_count(), 9);
        assert_eq!(texture.array_size(), 1);
        assert_eq!(texture.channel_count(), 4);
        assert_eq!(texture.data_offset(), 148);

        let sizes: Vec<_> = texture.levels().map(|l| l.data.len()).collect();
        assert_eq!(sizes, expected);

        let widths: Vec<_> = texture.levels().map(|l| l.width).collect();
        assert_eq!(widths, [256, 128, 64, 32, 16, 8, 4, 2, 1]);
    }

    #[test]
    fn test_scenario_truncated_mip_chain() {
        let data = DdsBuilder::new(16, 16)
            .dx10(DxgiFormat::R8G8B8A8_UNORM.0)
            .mips(5)
            .payload(1024 + 256 + 64)
            .build();
        let (texture, log) = DdsTexture::from_bytes(data);

        assert_eq!(log.severity(), Severity::Warning);
        assert_eq!(texture.levels().count(), 3);
        assert_eq!(texture.mip_count(), 3);
        assert!(texture.get_image_data(3, 0).is_none());
        assert_eq!(texture.header().unwrap().mipmap_count, 5);
    }

    #[test]
    fn test_scenario_truncated_dxt10_header() {
        let data = DdsBuilder::new(64, 64)
            .dx10(DxgiFormat::BC7_UNORM.0)
            .build();
        let (texture, log) = DdsTexture::from_bytes(data[..140].to_vec());

        assert_eq!(log.severity(), Severity::Fatal);
        assert_eq!(
            log.error(),
            Some(&Error::Truncated {
                needed: 148,
                available: 140
            })
        );
        assert_eq!(texture.levels().count(), 0);
        assert!(texture.dxt10().is_none());

        let header = texture.header().unwrap();
        assert_eq!((header.width, header.height), (64, 64));
        assert!(header.is_dx10());
    }

    #[test]
    fn test_bad_magic_leaves_no_header() {
        let mut data = DdsBuilder::new(4, 4).four_cc(FourCC::DXT1).payload(8).build();
        data[0] = b'X';
        let (texture, log) = DdsTexture::from_bytes(data);

        assert_eq!(log.error(), Some(&Error::BadMagic(*b"XDS ")));
        assert!(texture.header().is_none());
        assert!(!texture.is_verified());
    }

    #[test]
    fn test_populate_without_load() {
        let mut texture = DdsTexture::new();
        let log = texture.populate_image_data();
        assert_eq!(log.error(), Some(&Error::NotLoaded));
    }

    #[test]
    fn test_populate_after_fatal_load_stays_fatal() {
        let data = DdsBuilder::new(4, 4).dx10(DxgiFormat::BC1_UNORM.0).build();
        let mut texture = DdsTexture::new();
        let load = texture.load(data[..130].to_vec());
        let populate = texture.populate_image_data();

        assert!(load.is_fatal());
        assert_eq!(load, populate);
        assert_eq!(texture.levels().count(), 0);
    }

    #[test]
    fn test_populate_is_repeatable() {
        let data = DdsBuilder::new(8, 8)
            .four_cc(FourCC::DXT5)
            .mips(4)
            .payload(100)
            .build();
        let mut texture = DdsTexture::new();
        texture.load(data);

        let first = texture.populate_image_data();
        let first_count = texture.levels().count();
        let first_ranges: Vec<_> = (0..texture.mip_count())
            .filter_map(|mip| texture.level_range(mip, 0))
            .collect();

        let second = texture.populate_image_data();
        let second_ranges: Vec<_> = (0..texture.mip_count())
            .filter_map(|mip| texture.level_range(mip, 0))
            .collect();

        assert_eq!(first, second);
        assert_eq!(first_ranges, second_ranges);
        assert_eq!(first_count, texture.levels().count());
        assert_eq!(texture.mip_count(), 3);
    }

    #[test]
    fn test_verification_is_cached() {
        let data = DdsBuilder::new(4, 4).four_cc(FourCC::DXT1).payload(8).build();
        let mut texture = DdsTexture::new();
        let load = texture.load(data);

        assert!(texture.is_verified());
        assert_eq!(texture.verify(), load);
    }

    #[test]
    fn test_reload_discards_previous_state() {
        let mut texture = DdsTexture::new();
        texture.load(DdsBuilder::new(4, 4).four_cc(FourCC::DXT1).payload(8).build());
        texture.populate_image_data();
        assert_eq!(texture.levels().count(), 1);

        let log = texture.load(b"nope".to_vec());
        assert!(log.is_fatal());
        assert_eq!(texture.levels().count(), 0);
        assert!(texture.format().is_none());
    }

    #[test]
    fn test_cubemap_levels() {
        let data = DdsBuilder::new(4, 4)
            .four_cc(FourCC::DXT1)
            .caps2(caps2::CUBEMAP | caps2::CUBEMAP_ALL_FACES)
            .mips(3)
            .payload(6 * 3 * 8)
            .build();
        let (texture, log) = DdsTexture::from_bytes(data);

        assert!(!log.is_fatal());
        assert!(texture.is_cubemap());
        assert_eq!(texture.array_size(), 6);
        assert_eq!(texture.levels().count(), 18);

        let face = texture.level_range(0, 5).unwrap();
        assert_eq!(face.start, 128 + 5 * 24);
        assert!(texture.get_image_data(0, 6).is_none());
    }

    #[test]
    fn test_views_stay_within_buffer() {
        let files = [
            DdsBuilder::new(13, 7).four_cc(FourCC::DXT5).mips(4).payload(300).build(),
            DdsBuilder::new(9, 9)
                .rgb(24, [0xFF0000, 0xFF00, 0xFF, 0])
                .mips(4)
                .payload(243 + 48 + 12 + 3)
                .build(),
            DdsBuilder::new(6, 6)
                .dx10(DxgiFormat::NV12.0)
                .array_size(2)
                .payload(90)
                .build(),
            DdsBuilder::new(32, 32)
                .four_cc(FourCC(*b"AS55"))
                .mips(6)
                .payload(1000)
                .build(),
        ];
        for data in files {
            let len = data.len();
            let (texture, log) = DdsTexture::from_bytes(data);
            assert!(!log.is_fatal());
            assert!(texture.mip_count() >= 1 && texture.mip_count() <= 31);
            assert!(texture.array_size() >= 1);
            assert_eq!(
                texture.levels().count(),
                (texture.mip_count() * texture.array_size()) as usize
            );
            for array in 0..texture.array_size() {
                for mip in 0..texture.mip_count() {
                    let range = texture.level_range(mip, array).unwrap();
                    assert!(range.start >= texture.data_offset());
                    assert!(range.end <= len);
                }
            }
        }
    }

    #[test]
    fn test_mip_dimensions_halve() {
        let data = DdsBuilder::new(13, 7)
            .four_cc(FourCC::DXT1)
            .mips(4)
            .payload(64 + 16 + 8 + 8)
            .build();
        let (texture, _) = DdsTexture::from_bytes(data);
        let dims: Vec<_> = texture.levels().map(|l| (l.width, l.height)).collect();
        assert_eq!(dims, [(13, 7), (6, 3), (3, 1), (1, 1)]);
    }

    #[test]
    fn test_bitmask_accessors() {
        let data = DdsBuilder::new(2, 2)
            .rgb(16, [0xF800, 0x07E0, 0x001F, 0])
            .pf_flags(ddpf::RGB | ddpf::SRGB)
            .payload(8)
            .build();
        let (texture, _) = DdsTexture::from_bytes(data);

        assert!(texture.is_bitmasked());
        assert!(texture.is_srgb());
        assert!(texture.format().is_none());
        assert_eq!(texture.channel_masks()[1], 0x07E0);
        assert_eq!(texture.channel_layout()[2], ChannelBits { count: 5, shift: 0 });
        assert_eq!(texture.get_image_data(0, 0).unwrap().data.len(), 8);
    }

    #[test]
    fn test_alternate_astc_spelling_loads() {
        let data = DdsBuilder::new(16, 16)
            .four_cc(FourCC(*b"AS:5"))
            .payload(128)
            .build();
        let (texture, log) = DdsTexture::from_bytes(data);

        assert_eq!(log.severity(), Severity::Info);
        assert_eq!(texture.format(), Some(DxgiFormat::ASTC_10X5_UNORM));
        assert_eq!(texture.compression(), Compression::Astc);
        assert_eq!(texture.block_size(), (10, 5));
        assert_eq!(texture.get_image_data(0, 0).unwrap().data.len(), 128);
    }

    #[test]
    fn test_palette_file_keeps_levels() {
        let data = DdsBuilder::new(4, 4)
            .four_cc(FourCC::from_u32(41))
            .rgb_bit_count(8)
            .payload(16)
            .build();
        let (texture, log) = DdsTexture::from_bytes(data);

        assert_eq!(log.severity(), Severity::Warning);
        assert_eq!(texture.format(), Some(DxgiFormat::R8G8B8A8_UNORM));
        assert!(texture.is_bitmasked());
        assert_eq!(texture.bits_per_pixel(), 32);
        assert_eq!(texture.channel_count(), 4);
        assert_eq!(texture.mip_count(), 1);
        assert_eq!(texture.get_image_data(0, 0).unwrap().data.len(), 16);
    }

    #[test]
    fn test_packed_dx10_reports_masks() {
        let data = DdsBuilder::new(4, 4)
            .dx10(DxgiFormat::B5G6R5_UNORM.0)
            .payload(32)
            .build();
        let (texture, _) = DdsTexture::from_bytes(data);

        assert!(texture.is_bitmasked());
        assert_eq!(texture.format(), Some(DxgiFormat::B5G6R5_UNORM));
        assert_eq!(texture.channel_masks(), [0xF800, 0x07E0, 0x001F, 0]);
        assert_eq!(texture.get_image_data(0, 0).unwrap().data.len(), 32);
    }

    #[test]
    fn test_channel_swizzle() {
        let data = DdsBuilder::new(4, 4)
            .dx10(DxgiFormat::B8G8R8A8_UNORM.0)
            .payload(64)
            .build();
        let (texture, _) = DdsTexture::from_bytes(data);
        assert_eq!(texture.color_transform(), ColorTransform::SwapRedBlue);
        assert!(texture.swizzle());

        let data = DdsBuilder::new(4, 4).four_cc(FourCC::ATI2).payload(16).build();
        let (texture, _) = DdsTexture::from_bytes(data);
        assert_eq!(texture.color_transform(), ColorTransform::SwapRedGreen);
        assert!(texture.swizzle());

        let data = DdsBuilder::new(4, 4).four_cc(FourCC::DXT1).payload(8).build();
        let (texture, _) = DdsTexture::from_bytes(data);
        assert!(!texture.swizzle());
    }

    #[test]
    fn test_into_buffer_returns_input() {
        let data = DdsBuilder::new(4, 4).four_cc(FourCC::DXT1).payload(8).build();
        let (texture, _) = DdsTexture::from_bytes(data.clone());
        assert_eq!(texture.buffer(), data.as_slice());
        assert_eq!(texture.into_buffer(), data);
    }
}
