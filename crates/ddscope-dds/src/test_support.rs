//! Synthetic DDS files for unit tests.

use crate::header::{ddpf, ddsd, DdsHeader, DdsPixelFormat, FourCC, DDS_MAGIC};

/// Builds a DDS byte buffer field by field.
#[derive(Debug, Clone)]
pub struct DdsBuilder {
    flags: u32,
    width: u32,
    height: u32,
    pitch: u32,
    depth: u32,
    mips: u32,
    pf_flags: u32,
    four_cc: FourCC,
    bit_count: u32,
    masks: [u32; 4],
    caps2: u32,
    dx10: Option<[u32; 5]>,
    payload: usize,
}

impl DdsBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            flags: ddsd::CAPS | ddsd::HEIGHT | ddsd::WIDTH | ddsd::PIXELFORMAT,
            width,
            height,
            pitch: 0,
            depth: 0,
            mips: 1,
            pf_flags: 0,
            four_cc: FourCC::NONE,
            bit_count: 0,
            masks: [0; 4],
            caps2: 0,
            dx10: None,
            payload: 0,
        }
    }

    pub fn mips(mut self, count: u32) -> Self {
        self.mips = count;
        self.flags |= ddsd::MIPMAPCOUNT;
        self
    }

    pub fn rgb(mut self, bit_count: u32, masks: [u32; 4]) -> Self {
        self.pf_flags = ddpf::RGB;
        self.bit_count = bit_count;
        self.masks = masks;
        self
    }

    pub fn rgb_bit_count(mut self, bit_count: u32) -> Self {
        self.bit_count = bit_count;
        self
    }

    /// Replace the pixel format flags.
    pub fn pf_flags(mut self, flags: u32) -> Self {
        self.pf_flags = flags;
        self
    }

    pub fn four_cc(mut self, code: FourCC) -> Self {
        self.four_cc = code;
        self.pf_flags = ddpf::FOURCC;
        self
    }

    /// Add a DXT10 extension describing a single 2D texture.
    pub fn dx10(mut self, dxgi_format: u32) -> Self {
        self.four_cc = FourCC::DX10;
        self.pf_flags = ddpf::FOURCC;
        self.dx10 = Some([dxgi_format, 3, 0, 1, 0]);
        self
    }

    fn ext(&mut self) -> &mut [u32; 5] {
        self.dx10.get_or_insert([0, 3, 0, 1, 0])
    }

    pub fn resource_dimension(mut self, dimension: u32) -> Self {
        self.ext()[1] = dimension;
        self
    }

    pub fn misc_flag(mut self, flag: u32) -> Self {
        self.ext()[2] = flag;
        self
    }

    pub fn array_size(mut self, size: u32) -> Self {
        self.ext()[3] = size;
        self
    }

    pub fn misc_flags2(mut self, flags: u32) -> Self {
        self.ext()[4] = flags;
        self
    }

    pub fn caps2(mut self, caps2: u32) -> Self {
        self.caps2 = caps2;
        self
    }

    /// Set the header depth without the depth flag.
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn pitch(mut self, pitch: u32) -> Self {
        self.pitch = pitch;
        self
    }

    /// Append `len` payload bytes after the headers.
    pub fn payload(mut self, len: usize) -> Self {
        self.payload = len;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut words = vec![
            DdsHeader::SIZE,
            self.flags,
            self.height,
            self.width,
            self.pitch,
            self.depth,
            self.mips,
        ];
        words.extend([0; 11]);
        words.extend([
            DdsPixelFormat::SIZE,
            self.pf_flags,
            self.four_cc.as_u32(),
            self.bit_count,
        ]);
        words.extend(self.masks);
        words.extend([0x1000, self.caps2, 0, 0, 0]);
        if let Some(ext) = self.dx10 {
            words.extend(ext);
        }

        let mut data = DDS_MAGIC.to_vec();
        for word in words {
            data.extend_from_slice(&word.to_le_bytes());
        }
        data.extend((0..self.payload).map(|i| i as u8));
        data
    }
}
