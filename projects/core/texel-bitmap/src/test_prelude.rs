//! Common test imports and utilities for the bitmap tests.
//!
//! Import with `use crate::test_prelude::*;`.

pub use crate::{
    Bitmap, BitmapData, BitmapFormat, BitmapHeader, BitmapLayout, ColorSpace, WrapMode,
};
pub use rstest::rstest;
pub use texel_bitmap_common::color::*;

/// Builds a canonical `width * height` bitmap from per-pixel colours.
pub(crate) fn bitmap_from_pixels(width: u32, height: u32, pixels: &[Color8]) -> Bitmap<'static> {
    assert_eq!(pixels.len(), (width * height) as usize);
    let mut bitmap = Bitmap::default();
    bitmap.create_bitmap(width, height);
    bitmap.mip_colors_mut(0, 0, 0).copy_from_slice(pixels);
    bitmap
}

/// Asserts every channel of two colours differs by at most `tolerance`.
#[track_caller]
pub(crate) fn assert_channels_near(actual: Color8, expected: Color8, tolerance: u8) {
    for index in 0..4 {
        assert!(
            actual[index].abs_diff(expected[index]) <= tolerance,
            "channel {index} mismatch: got {actual:?}, expected {expected:?}"
        );
    }
}
