//! The bitmap container, its header and lifecycle.

use crate::data::BitmapData;
use crate::flags::BitmapFlags;
use crate::format::{BitmapFormat, ColorSpace, WrapMode};
use texel_bitmap_common::color::Color8;

/// Size of one entry of the mip offset table.
pub const MIP_OFFSET_SIZE: usize = core::mem::size_of::<i32>();

/// The fixed size fields describing a bitmap's buffer.
///
/// These are exactly the fields persisted ahead of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    /// Total buffer size in bytes, offset table included.
    pub data_size: u64,
    /// Bytes in one face of one frame, covering every mip level.
    pub face_size: u32,
    pub height: u16,
    pub width: u16,
    pub flags: BitmapFlags,
    pub mip_count: u8,
    /// Colour sampled outside the texture in [`WrapMode::ClampToColor`].
    pub clamp_color: Color8,
}

impl Default for BitmapHeader {
    fn default() -> Self {
        Self {
            data_size: 0,
            face_size: 0,
            height: 0,
            width: 0,
            flags: BitmapFlags::default(),
            mip_count: 0,
            clamp_color: Color8::new(255, 255, 255, 255),
        }
    }
}

/// A texture holding mips, cubemap faces and animation frames in one buffer.
///
/// The bitmap is move-only. [`Bitmap::copy_from`] is the explicit deep copy and
/// [`Bitmap::take`] moves the contents out, leaving an empty bitmap behind.
#[derive(Debug, Default)]
pub struct Bitmap<'a> {
    pub(crate) header: BitmapHeader,
    pub(crate) data: Option<BitmapData<'a>>,
}

impl<'a> Bitmap<'a> {
    /// Builds a bitmap from a persisted header and its buffer.
    ///
    /// The owns-memory flag is taken from `data`, not from `header`.
    pub fn from_raw_parts(mut header: BitmapHeader, data: BitmapData<'a>) -> Self {
        debug_assert_eq!(header.data_size, data.len() as u64);
        header.flags.set_owns_memory(data.is_owned());
        Self {
            header,
            data: Some(data),
        }
    }

    /// Releases the buffer and zeroes the header. The clamp colour is kept.
    pub fn kill(&mut self) {
        self.data = None;
        self.header = BitmapHeader {
            clamp_color: self.header.clamp_color,
            ..Default::default()
        };
    }

    /// Moves the contents out, leaving this bitmap empty and non-owning.
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    pub(crate) fn install(&mut self, data: BitmapData<'a>) {
        self.header.flags.set_owns_memory(data.is_owned());
        self.header.data_size = data.len() as u64;
        self.data = Some(data);
    }

    /// Whole buffer, offset table included.
    ///
    /// # Panics
    ///
    /// If the bitmap holds no buffer.
    pub fn data(&self) -> &[u8] {
        match &self.data {
            Some(data) => data.as_slice(),
            None => panic!("bitmap has no buffer"),
        }
    }

    /// Mutable buffer access. Read-only views are copied into an owned buffer first.
    pub fn data_mut(&mut self) -> &mut [u8] {
        let flags = &mut self.header.flags;
        match &mut self.data {
            Some(data) => {
                // Only mutable views stay non-owning once written to.
                flags.set_owns_memory(!matches!(data, BitmapData::BorrowedMut(_)));
                data.make_mut()
            }
            None => panic!("bitmap has no buffer"),
        }
    }

    /// The header as persisted, flags included.
    pub fn header(&self) -> &BitmapHeader {
        &self.header
    }

    pub fn width(&self) -> u32 {
        self.header.width as u32
    }

    pub fn height(&self) -> u32 {
        self.header.height as u32
    }

    pub fn format(&self) -> BitmapFormat {
        self.header.flags.format()
    }

    /// Relabels the payload; the bytes are not converted.
    pub fn set_format(&mut self, format: BitmapFormat) {
        self.header.flags.set_format(format);
    }

    pub fn flags(&self) -> BitmapFlags {
        self.header.flags
    }

    pub fn color_space(&self) -> ColorSpace {
        self.header.flags.color_space()
    }

    pub fn set_color_space(&mut self, space: ColorSpace) {
        self.header.flags.set_color_space(space);
    }

    pub fn is_linear_space(&self) -> bool {
        self.header.flags.linear_space()
    }

    pub fn u_wrap_mode(&self) -> WrapMode {
        self.header.flags.u_wrap_mode()
    }

    pub fn set_u_wrap_mode(&mut self, mode: WrapMode) {
        self.header.flags.set_u_wrap_mode(mode);
    }

    pub fn v_wrap_mode(&self) -> WrapMode {
        self.header.flags.v_wrap_mode()
    }

    pub fn set_v_wrap_mode(&mut self, mode: WrapMode) {
        self.header.flags.set_v_wrap_mode(mode);
    }

    pub fn is_cubemap(&self) -> bool {
        self.header.flags.cubemap()
    }

    pub fn set_cubemap(&mut self, cubemap: bool) {
        self.header.flags.set_cubemap(cubemap);
    }

    pub fn is_premultiplied(&self) -> bool {
        self.header.flags.alpha_premultiplied()
    }

    /// Returns `true` if the bitmap releases its buffer when dropped or killed.
    pub fn owns_memory(&self) -> bool {
        self.data.as_ref().is_some_and(BitmapData::is_owned)
    }

    /// Returns `true` if the bitmap holds a buffer.
    pub fn is_valid(&self) -> bool {
        self.data.is_some()
    }

    pub fn clamp_color(&self) -> Color8 {
        self.header.clamp_color
    }

    pub fn set_clamp_color(&mut self, color: Color8) {
        self.header.clamp_color = color;
    }

    pub fn mip_count(&self) -> u32 {
        self.header.mip_count as u32
    }

    pub fn data_size(&self) -> u64 {
        self.header.data_size
    }

    pub fn is_signed(&self) -> bool {
        self.format().is_signed()
    }

    /// Static per-format answer; see [`Bitmap::compute_has_alpha_info`] for the content scan.
    pub fn has_alpha_channel(&self) -> bool {
        self.format().has_alpha_channel()
    }
}
