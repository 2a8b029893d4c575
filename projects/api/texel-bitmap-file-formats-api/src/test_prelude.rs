//! Common test imports and fixtures for the persistence tests.
//!
//! Import with `use crate::test_prelude::*;`.

pub use rstest::rstest;
pub use texel_bitmap::{Bitmap, BitmapData, BitmapFormat, BitmapLayout, WrapMode};
pub use texel_bitmap_common::color::Color8;

/// A 4x4 canonical cubemap with two mips and a distinct byte pattern in every face.
pub(crate) fn sample_cubemap() -> Bitmap<'static> {
    let mip0 = 4 * 4 * 4;
    let mip1 = 2 * 2 * 4;
    let mut data = Vec::new();
    data.extend_from_slice(&0i32.to_le_bytes());
    data.extend_from_slice(&(mip0 as i32).to_le_bytes());
    data.extend((0..6 * (mip0 + mip1)).map(|i| (i % 251) as u8));

    let mut bitmap = Bitmap::default();
    bitmap.setup(
        BitmapLayout {
            width: 4,
            height: 4,
            format: BitmapFormat::R8G8B8A8,
            face_size: (mip0 + mip1) as u64,
            mip_count: 2,
            frame_count: 1,
            cubemap: true,
        },
        BitmapData::Owned(data),
    );
    bitmap.set_v_wrap_mode(WrapMode::Mirror);
    bitmap.set_clamp_color(Color8::new(10, 20, 30, 40));
    bitmap
}

/// A canonical bitmap whose pixel `i` is `(i, 2i, 3i, 255 - i)`.
pub(crate) fn gradient_bitmap(width: u32, height: u32) -> Bitmap<'static> {
    let mut bitmap = Bitmap::default();
    bitmap.create_bitmap(width, height);
    for (index, color) in bitmap.mip_colors_mut(0, 0, 0).iter_mut().enumerate() {
        let i = index as u8;
        *color = Color8::new(i, i.wrapping_mul(2), i.wrapping_mul(3), 255 - i);
    }
    bitmap
}
