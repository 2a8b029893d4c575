//! Packed uncompressed pixel formats and their bit layout descriptors.
//!
//! Format names list channels from the most significant bits of the packed word to the least
//! significant ones; `U` marks padding bits. For example [`ColorFormat::Rgb565`] stores red in
//! bits 15-11, green in bits 10-5 and blue in bits 4-0.
//!
//! Each format has a [`FormatDescriptor`] describing where every channel lives in the packed
//! word, and an ordered list of substitutes used by [`ColorFormat::find_closest_format`] when a
//! consumer cannot handle the exact format.

use derive_enum_all_values::AllValues;

/// Identifies one packed uncompressed pixel layout.
///
/// The discriminants are stable; they are stored in bitmap flags and double as the bit index
/// of [`ColorFormat::mask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u8)]
pub enum ColorFormat {
    /// No format. Never matched by the lookup functions.
    Invalid = 0,
    Bgra8888,
    Bgru8888,
    Argb8888,
    Urgb8888,
    Rgbu8888,
    Rgba8888,
    Abgr8888,
    Rgb888,
    Argb8565,
    Rgba4444,
    Rgb565,
    Bgra5551,
    Abgr4444,
    Argb4444,
    Bgr565,
    Argb1555,
    Rgba5551,
    Urgb1555,
    Rgbu5551,
    Abgr1555,
    Ubgr1555,
}

impl Default for ColorFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Bit layout of a single [`ColorFormat`].
///
/// `packed = (a << a_shift) | (r << r_shift) | (g << g_shift) | (b << b_shift)` reproduces the
/// packed word for 8-bit channel values, with negative shifts meaning a right shift by the
/// negated amount. Unpacking applies the shifts in the opposite direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub format: ColorFormat,
    /// The single bit identifying this format in a supported-formats bitset.
    pub format_mask: u32,
    /// Width of the packed word; 16, 24 or 32.
    pub total_bits: u32,
    /// Bits carrying colour or alpha data.
    pub used_bits: u32,
    pub a_shift: i32,
    pub r_shift: i32,
    pub g_shift: i32,
    pub b_shift: i32,
    pub a_mask: u32,
    pub r_mask: u32,
    pub g_mask: u32,
    pub b_mask: u32,
}

impl FormatDescriptor {
    const EMPTY: Self = Self {
        format: ColorFormat::Invalid,
        format_mask: 0,
        total_bits: 0,
        used_bits: 0,
        a_shift: 0,
        r_shift: 0,
        g_shift: 0,
        b_shift: 0,
        a_mask: 0,
        r_mask: 0,
        g_mask: 0,
        b_mask: 0,
    };

    /// Returns `true` if the format stores an alpha channel.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        self.a_mask != 0
    }

    /// Size of one packed pixel in bytes.
    #[inline]
    pub const fn bytes_per_pixel(&self) -> usize {
        (self.total_bits / 8) as usize
    }

    /// Mask covering every bit of the packed word.
    #[inline]
    pub const fn width_mask(&self) -> u32 {
        if self.total_bits >= 32 {
            u32::MAX
        } else {
            (1u32 << self.total_bits) - 1
        }
    }

    /// Bits inside the packed word that belong to no channel.
    #[inline]
    pub const fn unused_mask(&self) -> u32 {
        self.width_mask() & !(self.a_mask | self.r_mask | self.g_mask | self.b_mask)
    }
}

#[derive(Clone, Copy)]
enum Lane {
    A,
    R,
    G,
    B,
    U,
}

/// Builds a descriptor from `(lane, width)` pairs listed from the high bits down.
const fn describe(format: ColorFormat, total_bits: u32, lanes: &[(Lane, u32)]) -> FormatDescriptor {
    let mut desc = FormatDescriptor::EMPTY;
    desc.format = format;
    desc.format_mask = format.mask();
    desc.total_bits = total_bits;

    let mut offset = total_bits;
    let mut index = 0;
    while index < lanes.len() {
        let (lane, width) = lanes[index];
        offset -= width;

        let mask = ((1u32 << width) - 1) << offset;
        let shift = (offset + width) as i32 - 8;
        match lane {
            Lane::A => {
                desc.a_mask = mask;
                desc.a_shift = shift;
            }
            Lane::R => {
                desc.r_mask = mask;
                desc.r_shift = shift;
            }
            Lane::G => {
                desc.g_mask = mask;
                desc.g_shift = shift;
            }
            Lane::B => {
                desc.b_mask = mask;
                desc.b_shift = shift;
            }
            Lane::U => {}
        }

        if !matches!(lane, Lane::U) {
            desc.used_bits += width;
        }
        index += 1;
    }

    assert!(offset == 0, "channel widths must add up to the format width");
    desc
}

static DESCRIPTORS: [FormatDescriptor; ColorFormat::COUNT] = {
    use ColorFormat::*;
    use Lane::{A, B, G, R, U};
    [
        FormatDescriptor::EMPTY,
        describe(Bgra8888, 32, &[(B, 8), (G, 8), (R, 8), (A, 8)]),
        describe(Bgru8888, 32, &[(B, 8), (G, 8), (R, 8), (U, 8)]),
        describe(Argb8888, 32, &[(A, 8), (R, 8), (G, 8), (B, 8)]),
        describe(Urgb8888, 32, &[(U, 8), (R, 8), (G, 8), (B, 8)]),
        describe(Rgbu8888, 32, &[(R, 8), (G, 8), (B, 8), (U, 8)]),
        describe(Rgba8888, 32, &[(R, 8), (G, 8), (B, 8), (A, 8)]),
        describe(Abgr8888, 32, &[(A, 8), (B, 8), (G, 8), (R, 8)]),
        describe(Rgb888, 24, &[(R, 8), (G, 8), (B, 8)]),
        describe(Argb8565, 24, &[(A, 8), (R, 5), (G, 6), (B, 5)]),
        describe(Rgba4444, 16, &[(R, 4), (G, 4), (B, 4), (A, 4)]),
        describe(Rgb565, 16, &[(R, 5), (G, 6), (B, 5)]),
        describe(Bgra5551, 16, &[(B, 5), (G, 5), (R, 5), (A, 1)]),
        describe(Abgr4444, 16, &[(A, 4), (B, 4), (G, 4), (R, 4)]),
        describe(Argb4444, 16, &[(A, 4), (R, 4), (G, 4), (B, 4)]),
        describe(Bgr565, 16, &[(B, 5), (G, 6), (R, 5)]),
        describe(Argb1555, 16, &[(A, 1), (R, 5), (G, 5), (B, 5)]),
        describe(Rgba5551, 16, &[(R, 5), (G, 5), (B, 5), (A, 1)]),
        describe(Urgb1555, 16, &[(U, 1), (R, 5), (G, 5), (B, 5)]),
        describe(Rgbu5551, 16, &[(R, 5), (G, 5), (B, 5), (U, 1)]),
        describe(Abgr1555, 16, &[(A, 1), (B, 5), (G, 5), (R, 5)]),
        describe(Ubgr1555, 16, &[(U, 1), (B, 5), (G, 5), (R, 5)]),
    ]
};

impl ColorFormat {
    /// The canonical 32-bit format used for interchange.
    pub const DEFAULT: Self = Self::Rgba8888;

    /// Number of enumerants, [`ColorFormat::Invalid`] included.
    pub const COUNT: usize = Self::all_values().len();

    /// Converts from the stored `u8` value.
    ///
    /// Returns [`None`] if the value does not name a format.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::all_values().get(value as usize).copied()
    }

    /// Position of the format in the descriptor table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The single bit identifying this format inside a supported-formats bitset.
    #[inline]
    pub const fn mask(self) -> u32 {
        1u32 << (self as u32)
    }

    /// Returns the bit layout of this format.
    #[inline]
    pub fn descriptor(self) -> &'static FormatDescriptor {
        &DESCRIPTORS[self.index()]
    }

    /// Finds the format whose four channel masks match exactly.
    ///
    /// # Returns
    ///
    /// The first matching format in table order, or [`ColorFormat::Invalid`].
    pub fn find_format(a_mask: u32, r_mask: u32, g_mask: u32, b_mask: u32) -> Self {
        DESCRIPTORS
            .iter()
            .skip(1)
            .find(|desc| {
                desc.a_mask == a_mask
                    && desc.r_mask == r_mask
                    && desc.g_mask == g_mask
                    && desc.b_mask == b_mask
            })
            .map_or(Self::Invalid, |desc| desc.format)
    }

    /// Picks the best supported stand-in for `target`.
    ///
    /// # Arguments
    ///
    /// * `format_mask` - Bitset of [`ColorFormat::mask`] values the consumer supports
    /// * `target` - The format the data would ideally be stored in
    ///
    /// # Returns
    ///
    /// The first entry of `target`'s substitute ranking present in `format_mask`,
    /// or [`ColorFormat::Invalid`] when none is.
    pub fn find_closest_format(format_mask: u32, target: Self) -> Self {
        target
            .substitutes()
            .iter()
            .copied()
            .find(|candidate| format_mask & candidate.mask() != 0)
            .unwrap_or(Self::Invalid)
    }

    /// Acceptable substitutes for this format, best first.
    ///
    /// The ranking is hand curated: same channel layout first, then the same bit depth class,
    /// then the nearest superset.
    pub const fn substitutes(self) -> &'static [Self] {
        use ColorFormat::*;
        match self {
            Argb4444 => &[Argb4444, Rgba4444, Argb8565, Argb8888, Rgba8888, Abgr8888, Bgra8888],
            Rgba4444 => &[Rgba4444, Argb4444, Argb8565, Argb8888, Rgba8888, Abgr8888, Bgra8888],
            Rgb565 => &[Rgb565, Urgb1555, Rgbu5551, Ubgr1555, Rgb888, Rgbu8888, Urgb8888],
            Argb1555 => &[
                Argb1555, Rgba5551, Abgr1555, Argb8565, Argb8888, Rgba8888, Abgr8888, Bgra8888,
            ],
            Rgba5551 => &[
                Rgba5551, Argb1555, Abgr1555, Argb8565, Argb8888, Rgba8888, Abgr8888, Bgra8888,
            ],
            Urgb1555 => &[Urgb1555, Rgbu5551, Ubgr1555, Rgb565, Rgb888, Rgbu8888, Urgb8888],
            Rgbu5551 => &[Rgbu5551, Urgb1555, Ubgr1555, Rgb565, Rgb888, Rgbu8888, Urgb8888],
            Abgr1555 => &[
                Abgr1555, Rgba5551, Argb1555, Argb8565, Argb8888, Rgba8888, Abgr8888, Bgra8888,
            ],
            Rgb888 => &[Rgb888, Rgbu8888, Urgb8888],
            Argb8565 => &[Argb8565, Argb8888, Rgba8888, Abgr8888, Bgra8888],
            Rgbu8888 => &[Rgbu8888, Urgb8888, Rgb888],
            Urgb8888 => &[Urgb8888, Rgbu8888, Rgb888],
            Argb8888 => &[Argb8888, Rgba8888, Abgr8888, Bgra8888],
            Rgba8888 => &[Rgba8888, Argb8888, Abgr8888, Bgra8888],
            Abgr8888 => &[Abgr8888, Bgra8888, Argb8888, Rgba8888],
            Bgra8888 => &[Bgra8888, Abgr8888, Argb8888, Rgba8888],
            Bgru8888 => &[Bgru8888, Rgbu8888, Bgra8888, Abgr8888, Argb8888, Rgba8888],
            Invalid | Bgra5551 | Abgr4444 | Bgr565 | Ubgr1555 => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn descriptor_table_is_indexed_by_format() {
        for &format in ColorFormat::all_values() {
            assert_eq!(format.descriptor().format, format);
        }
    }

    #[test]
    fn channel_masks_never_overlap() {
        for desc in DESCRIPTORS.iter().skip(1) {
            let masks = [desc.a_mask, desc.r_mask, desc.g_mask, desc.b_mask];
            let union = masks.iter().fold(0u32, |acc, mask| acc | mask);
            let total: u32 = masks.iter().map(|mask| mask.count_ones()).sum();
            assert_eq!(union.count_ones(), total, "{:?}", desc.format);
            assert_eq!(total, desc.used_bits, "{:?}", desc.format);
            assert_eq!(union & !desc.width_mask(), 0, "{:?}", desc.format);
        }
    }

    #[rstest]
    #[case(ColorFormat::Rgba8888, 32, 32, [0xFF00_0000, 0x00FF_0000, 0x0000_FF00, 0x0000_00FF])]
    #[case(ColorFormat::Bgru8888, 32, 24, [0x0000_FF00, 0x00FF_0000, 0xFF00_0000, 0])]
    #[case(ColorFormat::Rgb888, 24, 24, [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0])]
    #[case(ColorFormat::Rgb565, 16, 16, [0xF800, 0x07E0, 0x001F, 0])]
    #[case(ColorFormat::Argb1555, 16, 16, [0x7C00, 0x03E0, 0x001F, 0x8000])]
    #[case(ColorFormat::Rgbu5551, 16, 15, [0xF800, 0x07C0, 0x003E, 0])]
    fn builds_expected_masks(
        #[case] format: ColorFormat,
        #[case] total_bits: u32,
        #[case] used_bits: u32,
        #[case] rgba_masks: [u32; 4],
    ) {
        let desc = format.descriptor();
        assert_eq!(desc.total_bits, total_bits);
        assert_eq!(desc.used_bits, used_bits);
        assert_eq!(
            [desc.r_mask, desc.g_mask, desc.b_mask, desc.a_mask],
            rgba_masks
        );
    }

    #[test]
    fn narrow_channels_get_negative_shifts() {
        let desc = ColorFormat::Rgba4444.descriptor();
        assert_eq!(desc.a_shift, -4);
        assert_eq!(desc.b_shift, 0);
        assert_eq!(desc.g_shift, 4);
        assert_eq!(desc.r_shift, 8);
    }

    #[test]
    fn find_format_matches_argb_8888() {
        let found =
            ColorFormat::find_format(0xFF00_0000, 0x00FF_0000, 0x0000_FF00, 0x0000_00FF);
        assert_eq!(found, ColorFormat::Argb8888);
    }

    #[rstest]
    #[case(0xF000, 0x0F00, 0x00F0, 0x000F, ColorFormat::Argb4444)]
    #[case(0x000F, 0xF000, 0x0F00, 0x00F0, ColorFormat::Rgba4444)]
    #[case(0, 0xF800, 0x07E0, 0x001F, ColorFormat::Rgb565)]
    #[case(0x1234, 0, 0, 0, ColorFormat::Invalid)]
    #[case(0, 0, 0, 0, ColorFormat::Invalid)]
    fn find_format_scans_exact_masks(
        #[case] a: u32,
        #[case] r: u32,
        #[case] g: u32,
        #[case] b: u32,
        #[case] expected: ColorFormat,
    ) {
        assert_eq!(ColorFormat::find_format(a, r, g, b), expected);
    }

    #[test]
    fn closest_format_walks_the_ranking() {
        let supported = ColorFormat::Argb8888.mask();
        assert_eq!(
            ColorFormat::find_closest_format(supported, ColorFormat::Rgba8888),
            ColorFormat::Argb8888
        );

        // Exact format wins when supported.
        let supported = ColorFormat::Argb8888.mask() | ColorFormat::Rgba8888.mask();
        assert_eq!(
            ColorFormat::find_closest_format(supported, ColorFormat::Rgba8888),
            ColorFormat::Rgba8888
        );

        let supported = ColorFormat::Rgb888.mask() | ColorFormat::Urgb8888.mask();
        assert_eq!(
            ColorFormat::find_closest_format(supported, ColorFormat::Rgb565),
            ColorFormat::Rgb888
        );
    }

    #[rstest]
    #[case(ColorFormat::Bgra5551)]
    #[case(ColorFormat::Abgr4444)]
    #[case(ColorFormat::Bgr565)]
    #[case(ColorFormat::Ubgr1555)]
    #[case(ColorFormat::Invalid)]
    fn formats_without_ranking_never_match(#[case] target: ColorFormat) {
        assert_eq!(
            ColorFormat::find_closest_format(u32::MAX, target),
            ColorFormat::Invalid
        );
    }

    #[test]
    fn closest_format_misses_when_nothing_is_supported() {
        let supported = ColorFormat::Rgb565.mask();
        assert_eq!(
            ColorFormat::find_closest_format(supported, ColorFormat::Argb8888),
            ColorFormat::Invalid
        );
    }

    #[test]
    fn from_u8_round_trips_every_format() {
        for &format in ColorFormat::all_values() {
            assert_eq!(ColorFormat::from_u8(format as u8), Some(format));
        }
        assert_eq!(ColorFormat::from_u8(ColorFormat::COUNT as u8), None);
    }
}
