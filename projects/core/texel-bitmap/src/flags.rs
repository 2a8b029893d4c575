//! Packed bitmap flags.

use crate::format::{BitmapFormat, ColorSpace, WrapMode};
use bitfield::bitfield;

bitfield! {
    /// Bitmap state packed into 16 bits, as stored on disk.
    ///
    /// Bit layout:
    /// - Bit 0: Cubemap (6 faces per frame)
    /// - Bit 1: Owns memory
    /// - Bit 2: Alpha premultiplied
    /// - Bit 3: Linear colour space
    /// - Bits 4-5: U wrap mode
    /// - Bits 6-7: V wrap mode
    /// - Bits 8-15: [`BitmapFormat`]
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BitmapFlags(u16);
    impl Debug;
    u16;

    pub cubemap, set_cubemap: 0;
    pub owns_memory, set_owns_memory: 1;
    pub alpha_premultiplied, set_alpha_premultiplied: 2;
    pub linear_space, set_linear_space: 3;
    pub u_wrap_bits, set_u_wrap_bits: 5, 4;
    pub v_wrap_bits, set_v_wrap_bits: 7, 6;
    pub format_bits, set_format_bits: 15, 8;
}

impl BitmapFlags {
    /// Wraps a raw flags value.
    pub const fn from_raw(value: u16) -> Self {
        Self(value)
    }

    /// The raw 16-bit value.
    pub const fn raw(&self) -> u16 {
        self.0
    }

    /// The stored format, or [`BitmapFormat::Invalid`] for unknown identifiers.
    pub fn format(&self) -> BitmapFormat {
        BitmapFormat::from_u8(self.format_bits() as u8).unwrap_or_default()
    }

    pub fn set_format(&mut self, format: BitmapFormat) {
        self.set_format_bits(format as u16);
    }

    pub fn u_wrap_mode(&self) -> WrapMode {
        WrapMode::from_bits(self.u_wrap_bits())
    }

    pub fn set_u_wrap_mode(&mut self, mode: WrapMode) {
        self.set_u_wrap_bits(mode as u16);
    }

    pub fn v_wrap_mode(&self) -> WrapMode {
        WrapMode::from_bits(self.v_wrap_bits())
    }

    pub fn set_v_wrap_mode(&mut self, mode: WrapMode) {
        self.set_v_wrap_bits(mode as u16);
    }

    pub fn color_space(&self) -> ColorSpace {
        if self.linear_space() {
            ColorSpace::Linear
        } else {
            ColorSpace::Srgb
        }
    }

    pub fn set_color_space(&mut self, space: ColorSpace) {
        self.set_linear_space(space == ColorSpace::Linear);
    }
}
