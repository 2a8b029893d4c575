#![no_main]

// Every packed value with its padding bits set survives a decode/encode cycle.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texel_bitmap_common::color::{Color8, ColorF32, ColorFormat};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct PackedPixel {
    pub raw: u32,
    pub format: u8,
}

fuzz_target!(|pixel: PackedPixel| {
    let formats = &ColorFormat::all_values()[1..];
    let format = formats[pixel.format as usize % formats.len()];
    let descriptor = format.descriptor();
    let raw = (pixel.raw & descriptor.width_mask()) | descriptor.unused_mask();

    assert_eq!(
        Color8::from_raw(raw, format).to_raw(format),
        raw,
        "{format:?}"
    );
    assert_eq!(
        ColorF32::from_raw(raw, format).to_raw(format),
        raw,
        "{format:?}"
    );
});
