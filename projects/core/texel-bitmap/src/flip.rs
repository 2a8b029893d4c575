//! In-place vertical flip.

use crate::bitmap::Bitmap;
use crate::format::BitmapFormat;

impl Bitmap<'_> {
    /// Mirrors mip 0 vertically, swapping row `y` with row `height - 1 - y`.
    ///
    /// # Panics
    ///
    /// If the bitmap is empty, not canonical or has more than one mip.
    pub fn flip_y(&mut self) {
        assert!(self.is_valid(), "bitmap has no buffer");
        assert_eq!(self.format(), BitmapFormat::CANONICAL);
        assert_eq!(self.mip_count(), 1, "only single mip bitmaps can be flipped");

        let width = self.width() as usize;
        let mut rows = self.height();
        let mut pixels = self.mip_colors_mut(0, 0, 0);
        while rows > 1 {
            let (top, rest) = core::mem::take(&mut pixels).split_at_mut(width);
            let (rest, bottom) = rest.split_at_mut(rest.len() - width);
            top.swap_with_slice(bottom);
            pixels = rest;
            rows -= 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    fn row_colors(width: u32, height: u32) -> Vec<Color8> {
        (0..height)
            .flat_map(|y| (0..width).map(move |x| Color8::new(x as u8, y as u8, 0, 255)))
            .collect()
    }

    #[rstest]
    #[case(3, 1)]
    #[case(3, 2)]
    #[case(2, 5)]
    #[case(4, 4)]
    fn rows_are_mirrored(#[case] width: u32, #[case] height: u32) {
        let mut bitmap = bitmap_from_pixels(width, height, &row_colors(width, height));

        bitmap.flip_y();

        let colors = bitmap.mip_colors(0, 0, 0);
        for y in 0..height {
            for x in 0..width {
                let color = colors[(y * width + x) as usize];
                assert_eq!(color, Color8::new(x as u8, (height - 1 - y) as u8, 0, 255));
            }
        }
    }

    #[test]
    fn flipping_twice_restores_the_image() {
        let pixels = row_colors(5, 3);
        let mut bitmap = bitmap_from_pixels(5, 3, &pixels);

        bitmap.flip_y();
        bitmap.flip_y();

        assert_eq!(bitmap.mip_colors(0, 0, 0), pixels.as_slice());
    }

    #[test]
    #[should_panic(expected = "only single mip bitmaps can be flipped")]
    fn multi_mip_bitmaps_are_rejected() {
        let level0 = bitmap_from_pixels(2, 2, &row_colors(2, 2));
        let level1 = bitmap_from_pixels(1, 1, &row_colors(1, 1));
        let mut chain = Bitmap::default();
        chain.create_from_mips(&[&level0, &level1]);
        chain.flip_y();
    }
}
