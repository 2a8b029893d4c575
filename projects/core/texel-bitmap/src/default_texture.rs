//! The shared placeholder texture: a grey checkerboard with red, green and blue arrows.

use crate::bitmap::Bitmap;
use crate::data::BitmapData;
use crate::format::{ColorSpace, WrapMode};
use std::sync::LazyLock;
use texel_bitmap_common::color::Color8;

/// Width and height of the default texture.
pub const DEFAULT_TEXTURE_SIZE: u32 = 256;

const CHECKER_SIZE: u32 = 16;
const ARROW_SIZE: u32 = 32;
const CHECKER_DARK: Color8 = Color8::new(128, 128, 128, 255);
const CHECKER_LIGHT: Color8 = Color8::new(187, 187, 187, 255);
const ARROW_COLORS: [Color8; 3] = [
    Color8::new(187, 50, 50, 255),
    Color8::new(50, 187, 50, 255),
    Color8::new(50, 50, 187, 255),
];
const DEFAULT_CLAMP_COLOR: Color8 = Color8::new(0, 0, 0, 0);

/// Offset table entry followed by the pixels. The zeroed first cell reads as offset 0.
static DEFAULT_CELLS: LazyLock<Vec<Color8>> = LazyLock::new(build_default_cells);

static DEFAULT_BITMAP: LazyLock<Bitmap<'static>> = LazyLock::new(|| {
    let mut bitmap = Bitmap::default();
    bitmap.set_default_texture();
    bitmap
});

fn build_default_cells() -> Vec<Color8> {
    let size = DEFAULT_TEXTURE_SIZE;
    let mut cells = vec![Color8::default(); (size * size) as usize + 1];
    let pixels = &mut cells[1..];

    for y in 0..size {
        for x in 0..size {
            let dark = ((y & CHECKER_SIZE) == CHECKER_SIZE) ^ ((x & CHECKER_SIZE) == CHECKER_SIZE);
            pixels[(x + y * size) as usize] = if dark { CHECKER_DARK } else { CHECKER_LIGHT };
        }
    }

    for (k, color) in ARROW_COLORS.iter().enumerate() {
        let left = k as u32 * ARROW_SIZE;
        let mut inset = 1;
        for y in 1..ARROW_SIZE - 1 {
            for x in inset..(ARROW_SIZE - 1 - inset) {
                pixels[(left + x + size * (ARROW_SIZE - y - 1)) as usize] = *color;
            }
            if y % 2 == 1 {
                inset += 1;
            }
        }
    }

    cells
}

/// The shared default texture. Built on first use.
pub fn default_bitmap() -> &'static Bitmap<'static> {
    &DEFAULT_BITMAP
}

impl Bitmap<'_> {
    /// Makes this bitmap a non-owning view of the shared default texture.
    pub fn set_default_texture(&mut self) {
        let bytes: &'static [u8] = bytemuck::cast_slice(DEFAULT_CELLS.as_slice());
        self.setup_from_color(
            DEFAULT_TEXTURE_SIZE,
            DEFAULT_TEXTURE_SIZE,
            BitmapData::Borrowed(bytes),
        );
        self.set_u_wrap_mode(WrapMode::Wrap);
        self.set_v_wrap_mode(WrapMode::Wrap);
        self.set_color_space(ColorSpace::Srgb);
        self.set_clamp_color(DEFAULT_CLAMP_COLOR);
    }
}
