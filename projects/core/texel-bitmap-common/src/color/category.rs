//! A fixed palette of visually distinct colours for labelling categories.

use super::channel::Channel;
use super::unit::Color;

/// Number of entries in the category palette.
pub const COLOR_CATEGORY_COUNT: usize = 20;

const CATEGORY_PALETTE: [u32; COLOR_CATEGORY_COUNT] = [
    0x1f77b4ff, 0xaec7e8ff, 0xff7f0eff, 0xffbb78ff, 0x2ca02cff, 0x98df8aff, 0xd62728ff,
    0xff9896ff, 0x9467bdff, 0xc5b0d5ff, 0x8c564bff, 0xc49c94ff, 0xe377c2ff, 0xf7b6d2ff,
    0x7f7f7fff, 0xc7c7c7ff, 0xbcbd22ff, 0xdbdb8dff, 0x17becfff, 0x9edae5ff,
];

/// Returns palette entry `index`.
///
/// # Panics
///
/// If `index >= COLOR_CATEGORY_COUNT`.
pub fn color_category<T: Channel>(index: usize) -> Color<T> {
    assert!(
        index < COLOR_CATEGORY_COUNT,
        "colour category {index} out of range"
    );
    Color::from_packed(CATEGORY_PALETTE[index])
}
