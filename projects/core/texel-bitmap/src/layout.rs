//! Buffer layout: setup, mip offset table and face/frame addressing.
//!
//! A buffer holds `mip_count` little endian `i32` offsets followed by the payload. Offsets are
//! relative to the start of the payload and locate each mip inside face 0 of frame 0. Other faces
//! and frames repeat the same layout at `face_size` and `frame_size` strides.

use crate::bitmap::{Bitmap, MIP_OFFSET_SIZE};
use crate::data::BitmapData;
use crate::format::BitmapFormat;
use log::debug;
use texel_bitmap_common::color::Color8;

/// Faces in one frame of a cubemap.
pub const CUBEMAP_FACE_COUNT: u32 = 6;

/// Parameters for [`Bitmap::setup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapLayout {
    pub width: u32,
    pub height: u32,
    pub format: BitmapFormat,
    /// Bytes in one face, all mips included.
    pub face_size: u64,
    pub mip_count: u32,
    pub frame_count: u32,
    pub cubemap: bool,
}

impl BitmapLayout {
    /// Single mip, single frame layout of a canonical colour buffer of `data_len` bytes.
    pub fn single_color(width: u32, height: u32, data_len: usize) -> Self {
        Self {
            width,
            height,
            format: BitmapFormat::CANONICAL,
            face_size: (data_len - MIP_OFFSET_SIZE) as u64,
            mip_count: 1,
            frame_count: 1,
            cubemap: false,
        }
    }
}

impl<'a> Bitmap<'a> {
    /// Initialises the bitmap over `data`, releasing any previous buffer.
    ///
    /// # Panics
    ///
    /// If `layout` does not describe `data` exactly: the offset table plus `frame_count` frames
    /// of `face_size * face_count` bytes.
    pub fn setup(&mut self, layout: BitmapLayout, data: BitmapData<'a>) {
        let len = data.len() as u64;
        assert!(len > MIP_OFFSET_SIZE as u64, "buffer too small for an offset table");
        assert!(layout.face_size > 0, "face size must be non-zero");
        assert!(layout.face_size < len, "face size must be smaller than the buffer");
        assert!(layout.face_size <= u32::MAX as u64, "face size must fit in 32 bits");
        assert!(layout.mip_count > 0 && layout.mip_count <= u8::MAX as u32);
        assert!(layout.frame_count > 0, "a bitmap needs at least one frame");
        assert!(layout.width > 0 && layout.width <= u16::MAX as u32);
        assert!(layout.height > 0 && layout.height <= u16::MAX as u32);
        assert!(layout.format != BitmapFormat::Invalid, "invalid bitmap format");

        self.kill();

        self.header.flags.set_cubemap(layout.cubemap);
        self.header.flags.set_format(layout.format);
        self.header.face_size = layout.face_size as u32;
        self.header.width = layout.width as u16;
        self.header.height = layout.height as u16;
        self.header.mip_count = layout.mip_count as u8;
        self.install(data);

        let table_size = layout.mip_count as u64 * MIP_OFFSET_SIZE as u64;
        assert_eq!(
            self.frame_size(),
            (len - table_size) / layout.frame_count as u64,
            "frame size does not match the buffer"
        );
        assert_eq!(
            self.face_count() as u64 * self.face_size(),
            self.frame_size()
        );
        assert_eq!(layout.frame_count, self.frame_count());

        debug!(
            "bitmap setup: {}x{} {:?}, {} mips, {} frames, {} faces, {} bytes",
            layout.width,
            layout.height,
            layout.format,
            layout.mip_count,
            layout.frame_count,
            self.face_count(),
            len
        );
    }

    /// Reads entry `mip` of the offset table.
    pub fn mip_table_offset(&self, mip: u32) -> i32 {
        let start = mip as usize * MIP_OFFSET_SIZE;
        let mut bytes = [0u8; MIP_OFFSET_SIZE];
        bytes.copy_from_slice(&self.data()[start..start + MIP_OFFSET_SIZE]);
        i32::from_le_bytes(bytes)
    }

    /// Size of the offset table in bytes.
    #[inline]
    pub fn mip_table_size(&self) -> usize {
        self.mip_count() as usize * MIP_OFFSET_SIZE
    }

    /// The buffer past the offset table.
    pub fn payload(&self) -> &[u8] {
        &self.data()[self.mip_table_size()..]
    }

    pub fn payload_mut(&mut self) -> &mut [u8] {
        let start = self.mip_table_size();
        &mut self.data_mut()[start..]
    }

    /// Byte offset of a mip inside the payload.
    pub fn mip_offset(&self, mip: u32, face: u32, frame: u32) -> usize {
        debug_assert!(self.width() > 0 && self.height() > 0);
        debug_assert!(self.is_valid(), "bitmap has no buffer");
        debug_assert!(mip < self.mip_count(), "mip {mip} out of range");
        debug_assert!(face < self.face_count(), "face {face} out of range");
        debug_assert!(frame < self.frame_count(), "frame {frame} out of range");

        let offset = self.mip_table_offset(mip) as u64
            + frame as u64 * self.frame_size()
            + face as u64 * self.face_size();
        offset as usize
    }

    /// Size in bytes of one face's copy of `mip`.
    ///
    /// The last mip extends to the end of the face.
    pub fn mip_size(&self, mip: u32) -> usize {
        debug_assert!(mip < self.mip_count(), "mip {mip} out of range");
        let next = if mip + 1 == self.mip_count() {
            self.header.face_size as i64
        } else {
            self.mip_table_offset(mip + 1) as i64
        };
        (next - self.mip_table_offset(mip) as i64) as usize
    }

    /// Bytes of one mip of one face of one frame.
    pub fn mip(&self, mip: u32, face: u32, frame: u32) -> &[u8] {
        let start = self.mip_offset(mip, face, frame);
        let size = self.mip_size(mip);
        &self.payload()[start..start + size]
    }

    pub fn mip_mut(&mut self, mip: u32, face: u32, frame: u32) -> &mut [u8] {
        let start = self.mip_offset(mip, face, frame);
        let size = self.mip_size(mip);
        &mut self.payload_mut()[start..start + size]
    }

    /// A mip viewed as canonical colours.
    pub fn mip_colors(&self, mip: u32, face: u32, frame: u32) -> &[Color8] {
        debug_assert_eq!(self.format(), BitmapFormat::CANONICAL);
        bytemuck::cast_slice(self.mip(mip, face, frame))
    }

    pub fn mip_colors_mut(&mut self, mip: u32, face: u32, frame: u32) -> &mut [Color8] {
        debug_assert_eq!(self.format(), BitmapFormat::CANONICAL);
        bytemuck::cast_slice_mut(self.mip_mut(mip, face, frame))
    }

    /// 6 for cubemaps, 1 otherwise.
    pub fn face_count(&self) -> u32 {
        if self.is_cubemap() {
            CUBEMAP_FACE_COUNT
        } else {
            1
        }
    }

    pub fn frame_size(&self) -> u64 {
        self.header.face_size as u64 * self.face_count() as u64
    }

    pub fn face_size(&self) -> u64 {
        let frame_size = self.frame_size();
        let face_count = self.face_count() as u64;
        debug_assert_eq!(frame_size / face_count * face_count, frame_size);
        frame_size / face_count
    }

    /// Number of animation frames; 0 for an empty bitmap.
    pub fn frame_count(&self) -> u32 {
        let frame_size = self.frame_size();
        if frame_size == 0 {
            return 0;
        }
        let payload = self
            .header
            .data_size
            .saturating_sub(self.mip_table_size() as u64);
        (payload / frame_size) as u32
    }

    /// Mip levels in a complete chain down to a 1 pixel wide or high level.
    pub fn full_mip_chain_count(&self) -> u32 {
        let smaller = self.width().min(self.height());
        if smaller == 0 {
            return 0;
        }
        smaller.ilog2() + 1
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width() as f32 / self.height() as f32
    }

    pub fn is_square(&self) -> bool {
        debug_assert!(self.width() > 0 && self.height() > 0);
        self.width() == self.height()
    }

    pub fn is_power_of_two(&self) -> bool {
        debug_assert!(self.width() > 0 && self.height() > 0);
        self.width().is_power_of_two() && self.height().is_power_of_two()
    }
}
