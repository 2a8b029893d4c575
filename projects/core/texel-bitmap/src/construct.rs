//! Building bitmaps from colour buffers and from mip levels.

use crate::bitmap::{Bitmap, MIP_OFFSET_SIZE};
use crate::data::BitmapData;
use crate::layout::BitmapLayout;
use log::debug;

impl<'a> Bitmap<'a> {
    /// Allocates a zeroed canonical `width * height` bitmap with one mip and one frame.
    pub fn create_bitmap(&mut self, width: u32, height: u32) {
        let pixels = width as usize * height as usize;
        let data = vec![0u8; (1 + pixels) * MIP_OFFSET_SIZE];
        self.setup_from_color(width, height, BitmapData::Owned(data));
    }

    /// Initialises over a canonical colour buffer: one zero offset followed by the pixels.
    pub fn setup_from_color(&mut self, width: u32, height: u32, data: BitmapData<'a>) {
        let len = data.len();
        self.setup(BitmapLayout::single_color(width, height, len), data);
    }

    /// Wraps a borrowed canonical colour buffer without copying it.
    ///
    /// # Panics
    ///
    /// If `data` is not exactly `width * height` colours plus the offset entry.
    pub fn from_color_bytes(data: &'a [u8], width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize * 4 + MIP_OFFSET_SIZE,
            "colour buffer does not match the dimensions"
        );
        let mut bitmap = Self::default();
        bitmap.setup_from_color(width, height, BitmapData::Borrowed(data));
        bitmap
    }

    /// Builds a single frame bitmap with one mip per source, in order.
    ///
    /// Width, height and format come from `mips[0]`.
    ///
    /// # Panics
    ///
    /// If `mips` is empty or any source is empty or holds more than one mip.
    pub fn create_from_mips(&mut self, mips: &[&Bitmap<'_>]) {
        assert!(!mips.is_empty(), "at least one mip is required");
        assert!(
            mips.iter().all(|mip| mip.is_valid() && mip.mip_count() == 1),
            "sources must be single mip bitmaps"
        );

        let payloads: Vec<&[u8]> = mips.iter().map(|mip| mip.payload()).collect();
        let data = buffer_with_offset_table(&payloads);
        let total = data.len();
        let first = mips[0];
        let layout = BitmapLayout {
            width: first.width(),
            height: first.height(),
            format: first.format(),
            face_size: (total - MIP_OFFSET_SIZE * mips.len()) as u64,
            mip_count: mips.len() as u32,
            frame_count: 1,
            cubemap: false,
        };

        debug!("merging {} bitmaps into one mip chain", mips.len());
        self.setup(layout, BitmapData::Owned(data));
    }

    /// Copies the pixels of a single mip `source` into a new owned buffer.
    ///
    /// Only the dimensions, the format and the pixels of mip 0 carry over. The flags reset to
    /// their defaults: no cubemap, one frame, clamp to edge wrapping, sRGB and not premultiplied.
    /// This bitmap keeps its own clamp colour.
    ///
    /// # Panics
    ///
    /// If `source` is empty or holds more than one mip.
    pub fn copy_from(&mut self, source: &Bitmap<'_>) {
        self.create_from_mips(&[source]);
    }
}

/// Concatenates `payloads` behind a table of their cumulative offsets.
fn buffer_with_offset_table(payloads: &[&[u8]]) -> Vec<u8> {
    let table_size = payloads.len() * MIP_OFFSET_SIZE;
    let payload_size: usize = payloads.iter().map(|payload| payload.len()).sum();
    let mut data = Vec::with_capacity(table_size + payload_size);

    let mut offset = 0usize;
    for payload in payloads {
        data.extend_from_slice(&(offset as i32).to_le_bytes());
        offset += payload.len();
    }
    for payload in payloads {
        data.extend_from_slice(payload);
    }
    data
}
