//! The four channel colour value and its packed pixel codec.

use super::channel::Channel;
use super::format::ColorFormat;
use core::ops::{Index, IndexMut};

/// A colour with red, green, blue and alpha channels of type `T`.
///
/// Memory order is always R, G, B, A. For [`Color8`] this matches one pixel of
/// `R8G8B8A8` bitmap data, so pixel buffers can be viewed as `&[Color8]` through [`bytemuck`].
#[derive(Debug, Clone, Copy, Default)]
#[repr(C)]
pub struct Color<T: Channel> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
}

/// 8-bit per channel colour.
pub type Color8 = Color<u8>;
/// Single precision colour.
pub type ColorF32 = Color<f32>;
/// Double precision colour.
pub type ColorF64 = Color<f64>;

// SAFETY: `Color<u8>` is `repr(C)` with four `u8` fields, so it has no padding and every bit
// pattern is valid.
unsafe impl bytemuck::Zeroable for Color<u8> {}
unsafe impl bytemuck::Pod for Color<u8> {}

/// Moves the channel selected by `mask` so its top bit lands on bit 7.
#[inline(always)]
fn align_channel(raw: u32, mask: u32, shift: i32) -> u32 {
    let value = raw & mask;
    if shift < 0 {
        value << (-shift) as u32
    } else {
        value >> shift as u32
    }
}

/// Widens the top `bits` bits of `value` to a full byte by repeating them downwards.
#[inline(always)]
fn replicate_top_bits(value: u8, bits: u32) -> u8 {
    let mut out = value;
    let mut filled = bits;
    while filled < 8 {
        out |= out >> filled;
        filled *= 2;
    }
    out
}

#[inline(always)]
fn unpack_channel(raw: u32, mask: u32, shift: i32) -> u8 {
    let bits = mask.count_ones();
    if bits == 0 {
        return 0;
    }
    replicate_top_bits(align_channel(raw, mask, shift) as u8, bits)
}

#[inline(always)]
fn pack_channel(value: u8, mask: u32, shift: i32) -> u32 {
    let value = value as u32;
    let placed = if shift < 0 {
        value >> (-shift) as u32
    } else {
        value << shift as u32
    };
    placed & mask
}

impl<T: Channel> Color<T> {
    /// Creates a colour from its four channels.
    #[inline]
    pub const fn new(r: T, g: T, b: T, a: T) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque colour from three channels.
    #[inline]
    pub fn opaque(r: T, g: T, b: T) -> Self {
        Self::new(r, g, b, T::FULL)
    }

    /// Creates a colour from a `0xRRGGBBAA` value.
    ///
    /// ```
    /// use texel_bitmap_common::color::Color8;
    ///
    /// let green = Color8::from_packed(0x00FF00FF);
    /// assert_eq!((green.r, green.g, green.b, green.a), (0, 255, 0, 255));
    /// ```
    pub fn from_packed(value: u32) -> Self {
        let [r, g, b, a] = value.to_be_bytes();
        Self::new(T::from_u8(r), T::from_u8(g), T::from_u8(b), T::from_u8(a))
    }

    /// Inverse of [`Color::from_packed`].
    pub fn to_packed(&self) -> u32 {
        u32::from_be_bytes([self.r.to_u8(), self.g.to_u8(), self.b.to_u8(), self.a.to_u8()])
    }

    /// Creates an opaque colour from unit RGB values without clamping.
    pub fn from_rgb_array(rgb: [f32; 3]) -> Self {
        Self::new(T::from_unit(rgb[0]), T::from_unit(rgb[1]), T::from_unit(rgb[2]), T::FULL)
    }

    /// Creates a colour from unit RGBA values without clamping.
    pub fn from_rgba_array(rgba: [f32; 4]) -> Self {
        Self::new(
            T::from_unit(rgba[0]),
            T::from_unit(rgba[1]),
            T::from_unit(rgba[2]),
            T::from_unit(rgba[3]),
        )
    }

    /// Decodes a packed pixel word.
    ///
    /// Channels narrower than 8 bits are widened by replicating their top bits. Formats without
    /// an alpha channel decode as fully opaque.
    ///
    /// # Arguments
    ///
    /// * `raw` - The packed pixel, occupying the low `total_bits` of the word
    /// * `format` - Layout of `raw`; must not be [`ColorFormat::Invalid`]
    pub fn from_raw(raw: u32, format: ColorFormat) -> Self {
        debug_assert!(format != ColorFormat::Invalid, "cannot decode an invalid format");
        let desc = format.descriptor();

        let r = unpack_channel(raw, desc.r_mask, desc.r_shift);
        let g = unpack_channel(raw, desc.g_mask, desc.g_shift);
        let b = unpack_channel(raw, desc.b_mask, desc.b_shift);
        let a = if desc.has_alpha() {
            unpack_channel(raw, desc.a_mask, desc.a_shift)
        } else {
            u8::MAX
        };

        Self::new(T::from_u8(r), T::from_u8(g), T::from_u8(b), T::from_u8(a))
    }

    /// Encodes the colour as a packed pixel word of `format`.
    ///
    /// Bits of the word that belong to no channel are set to 1. Bits above the format's width
    /// are zero.
    pub fn to_raw(&self, format: ColorFormat) -> u32 {
        debug_assert!(format != ColorFormat::Invalid, "cannot encode an invalid format");
        let desc = format.descriptor();

        desc.unused_mask()
            | pack_channel(self.a.to_u8(), desc.a_mask, desc.a_shift)
            | pack_channel(self.r.to_u8(), desc.r_mask, desc.r_shift)
            | pack_channel(self.g.to_u8(), desc.g_mask, desc.g_shift)
            | pack_channel(self.b.to_u8(), desc.b_mask, desc.b_shift)
    }

    /// Channels as unit values in R, G, B, A order.
    pub fn rgba(&self) -> [f32; 4] {
        [self.r.to_unit(), self.g.to_unit(), self.b.to_unit(), self.a.to_unit()]
    }

    /// Colour channels as unit values in R, G, B order.
    pub fn rgb(&self) -> [f32; 3] {
        [self.r.to_unit(), self.g.to_unit(), self.b.to_unit()]
    }

    /// Sets all four channels from unit values, clamping each.
    pub fn setup_from_rgba(&mut self, r: f32, g: f32, b: f32, a: f32) -> &mut Self {
        self.r = T::from_unit_clamped(r);
        self.g = T::from_unit_clamped(g);
        self.b = T::from_unit_clamped(b);
        self.a = T::from_unit_clamped(a);
        self
    }

    /// Sets the colour channels from unit values and makes the colour opaque.
    pub fn setup_from_rgb(&mut self, r: f32, g: f32, b: f32) -> &mut Self {
        self.setup_from_rgba(r, g, b, 1.0)
    }

    /// Array form of [`Color::setup_from_rgba`].
    pub fn setup_from_rgba_array(&mut self, rgba: [f32; 4]) -> &mut Self {
        self.setup_from_rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Array form of [`Color::setup_from_rgb`].
    pub fn setup_from_rgb_array(&mut self, rgb: [f32; 3]) -> &mut Self {
        self.setup_from_rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Converts to another channel type.
    ///
    /// Integer to float divides by 255, float to integer multiplies by 255 and truncates.
    pub fn cast<U: Channel>(&self) -> Color<U> {
        if T::IS_INTEGER && U::IS_INTEGER {
            return Color::new(
                U::from_u8(self.r.to_u8()),
                U::from_u8(self.g.to_u8()),
                U::from_u8(self.b.to_u8()),
                U::from_u8(self.a.to_u8()),
            );
        }
        Color::new(
            U::from_unit_f64(self.r.to_unit_f64()),
            U::from_unit_f64(self.g.to_unit_f64()),
            U::from_unit_f64(self.b.to_unit_f64()),
            U::from_unit_f64(self.a.to_unit_f64()),
        )
    }
}

impl<T: Channel> Index<usize> for Color<T> {
    type Output = T;

    /// Channel by position: 0 red, 1 green, 2 blue, 3 alpha.
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("colour channel index {index} out of range"),
        }
    }
}

impl<T: Channel> IndexMut<usize> for Color<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("colour channel index {index} out of range"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[rstest]
    #[case(0xF81F, ColorFormat::Rgb565, Color8::new(255, 0, 255, 255))]
    #[case(0x07E0, ColorFormat::Rgb565, Color8::new(0, 255, 0, 255))]
    #[case(0x8421, ColorFormat::Rgb565, Color8::new(132, 134, 8, 255))]
    #[case(0xF00F, ColorFormat::Rgba4444, Color8::new(255, 0, 0, 255))]
    #[case(0x1234, ColorFormat::Argb4444, Color8::new(0x22, 0x33, 0x44, 0x11))]
    #[case(0x8000, ColorFormat::Argb1555, Color8::new(0, 0, 0, 255))]
    #[case(0x7FFF, ColorFormat::Argb1555, Color8::new(255, 255, 255, 0))]
    #[case(0x11223344, ColorFormat::Argb8888, Color8::new(0x22, 0x33, 0x44, 0x11))]
    #[case(0x11223344, ColorFormat::Bgra8888, Color8::new(0x33, 0x22, 0x11, 0x44))]
    #[case(0x112233FF, ColorFormat::Rgbu8888, Color8::new(0x11, 0x22, 0x33, 0xFF))]
    #[case(0x00AABBCC, ColorFormat::Rgb888, Color8::new(0xAA, 0xBB, 0xCC, 0xFF))]
    fn decodes_raw_pixels(#[case] raw: u32, #[case] format: ColorFormat, #[case] expected: Color8) {
        assert_eq!(Color8::from_raw(raw, format), expected);
    }

    #[rstest]
    #[case(0xF81F, ColorFormat::Rgb565)]
    #[case(0x1234, ColorFormat::Argb4444)]
    #[case(0xABCD, ColorFormat::Rgba4444)]
    #[case(0x8001, ColorFormat::Argb1555)]
    #[case(0x5553, ColorFormat::Rgba5551)]
    #[case(0x801F, ColorFormat::Urgb1555)]
    #[case(0x1234_56FF, ColorFormat::Rgbu8888)]
    #[case(0xFF12_3456, ColorFormat::Urgb8888)]
    #[case(0x1234_5678, ColorFormat::Abgr8888)]
    #[case(0x0012_3456, ColorFormat::Rgb888)]
    #[case(0x00FF_F81F, ColorFormat::Argb8565)]
    fn raw_words_survive_decoding(#[case] raw: u32, #[case] format: ColorFormat) {
        let color = Color8::from_raw(raw, format);
        assert_eq!(color.to_raw(format), raw, "{format:?}");
    }

    #[test]
    fn encoding_sets_unused_bits_within_format_width() {
        let black = Color8::new(0, 0, 0, 0);
        assert_eq!(black.to_raw(ColorFormat::Urgb1555), 0x8000);
        assert_eq!(black.to_raw(ColorFormat::Bgru8888), 0x0000_00FF);
        assert_eq!(black.to_raw(ColorFormat::Rgb565), 0);
    }

    #[test]
    fn encoding_truncates_to_channel_width() {
        let color = Color8::new(0xFF, 0x80, 0x0F, 0xFF);
        assert_eq!(color.to_raw(ColorFormat::Rgb565), 0xFC01);
    }

    #[test]
    fn float_colors_use_the_same_codec() {
        let color = ColorF32::from_raw(0xF81F, ColorFormat::Rgb565);
        assert_close(color.rgba(), [1.0, 0.0, 1.0, 1.0], 1e-6);
        assert_eq!(color.to_raw(ColorFormat::Rgb565), 0xF81F);
    }

    #[test]
    fn packed_value_is_rgba_high_to_low() {
        let color = Color8::from_packed(0x00FF_00FF);
        assert_eq!(color, Color8::new(0, 255, 0, 255));
        assert_eq!(color.to_packed(), 0x00FF_00FF);
        assert_eq!(Color8::from_packed(0x1234_5678).to_packed(), 0x1234_5678);
    }

    #[test]
    fn setup_clamps_out_of_range_input() {
        let mut color = Color8::default();
        color.setup_from_rgba(1.5, -0.5, 0.5, 2.0);
        assert_eq!(color, Color8::new(255, 0, 127, 255));

        let mut color = ColorF32::default();
        color.setup_from_rgb(2.0, -1.0, 0.25);
        assert_close(color.rgba(), [1.0, 0.0, 0.25, 1.0], 1e-6);
    }

    #[test]
    fn array_constructors_skip_clamping() {
        let color = ColorF32::from_rgb_array([1.5, 0.5, -0.5]);
        assert_close(color.rgba(), [1.5, 0.5, -0.5, 1.0], 1e-6);

        let color = Color8::from_rgba_array([0.5, 1.0, 0.0, 0.25]);
        assert_eq!(color, Color8::new(127, 255, 0, 63));
    }

    #[test]
    fn cast_between_channel_types() {
        let color = Color8::new(255, 0, 51, 102);
        let float: ColorF32 = color.cast();
        assert_close(float.rgba(), [1.0, 0.0, 0.2, 0.4], 1e-6);

        let back: Color8 = float.cast();
        assert_channels_near(back, color, 1);

        let wide: ColorF64 = float.cast();
        assert!((wide.b - 0.2).abs() < 1e-6);
        let narrow: ColorF32 = wide.cast();
        assert_close(narrow.rgba(), float.rgba(), 1e-6);
    }

    #[test]
    fn index_follows_rgba_order() {
        let mut color = Color8::new(1, 2, 3, 4);
        assert_eq!([color[0], color[1], color[2], color[3]], [1, 2, 3, 4]);
        color[2] = 9;
        assert_eq!(color.b, 9);
    }

    #[test]
    #[should_panic]
    fn index_past_alpha_panics() {
        let color = Color8::default();
        let _ = color[4];
    }

    #[test]
    fn color8_slices_cast_to_bytes() {
        let pixels = [Color8::new(1, 2, 3, 4), Color8::new(5, 6, 7, 8)];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
