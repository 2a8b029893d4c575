//! Alpha content analysis and premultiplication.

use crate::bitmap::Bitmap;
use crate::format::BitmapFormat;
use log::trace;
use texel_bitmap_common::color::Color8;

const OPAQUE_SEEN: u8 = 1;
const TRANSPARENT_SEEN: u8 = 2;

impl Bitmap<'_> {
    /// Returns `true` if mip 0 appears to carry alpha information.
    ///
    /// The scan latches which alpha extremes it has seen. It stops with `true` as soon as both
    /// fully opaque and fully transparent texels have appeared, or when the first texel has an
    /// intermediate alpha. Once an extreme is latched, intermediate alpha is ignored, so partial
    /// alpha that follows an opaque (or transparent) texel is not detected.
    ///
    /// # Panics
    ///
    /// If the format is not uncompressed.
    pub fn compute_has_alpha_info(&self) -> bool {
        let format = match self.format().color_format() {
            Some(format) => format,
            None => panic!("alpha scan needs an uncompressed format"),
        };

        let descriptor = format.descriptor();
        if !descriptor.has_alpha() {
            return false;
        }

        let stride = descriptor.bytes_per_pixel();
        let pixels = self.width() as usize * self.height() as usize;
        let texels = self.mip(0, 0, 0).chunks_exact(stride).take(pixels);

        let mut seen = 0u8;
        for texel in texels {
            let alpha = Color8::from_raw(read_texel(texel), format).a;
            seen |= (alpha == 255) as u8 * OPAQUE_SEEN;
            seen |= (alpha == 0) as u8 * TRANSPARENT_SEEN;
            if seen != OPAQUE_SEEN && seen != TRANSPARENT_SEEN {
                return true;
            }
        }
        false
    }

    /// Premultiplies mip 0 by its alpha, once.
    ///
    /// Bitmaps without meaningful alpha are left alone and are not flagged.
    ///
    /// # Panics
    ///
    /// If the format is not canonical.
    pub fn compute_premultiply_alpha(&mut self) {
        if self.is_premultiplied() {
            trace!("bitmap already premultiplied");
            return;
        }
        assert_eq!(
            self.format(),
            BitmapFormat::CANONICAL,
            "premultiplication needs the canonical format"
        );
        if !self.compute_has_alpha_info() {
            return;
        }

        for color in self.mip_colors_mut(0, 0, 0) {
            *color = color.premultiply_alpha();
        }
        self.header.flags.set_alpha_premultiplied(true);
    }
}

/// Reads one texel as stored, most significant byte first.
fn read_texel(texel: &[u8]) -> u32 {
    match *texel {
        [a, b] => u16::from_be_bytes([a, b]) as u32,
        [a, b, c] => u32::from_be_bytes([0, a, b, c]),
        [a, b, c, d] => u32::from_be_bytes([a, b, c, d]),
        _ => unreachable!("uncompressed texels are 2, 3 or 4 bytes wide"),
    }
}
