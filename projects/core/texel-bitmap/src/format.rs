//! Pixel format identifiers, wrap modes and colour spaces stored in bitmap flags.

use derive_enum_all_values::AllValues;
use texel_bitmap_common::color::ColorFormat;

/// Storage format of a bitmap's pixel payload.
///
/// The uncompressed formats share their numbering with [`ColorFormat`] and can be decoded with
/// the colour codec. Everything from [`BitmapFormat::R32G32B32A32Float`] onwards is an opaque
/// identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
#[repr(u8)]
pub enum BitmapFormat {
    #[default]
    Invalid = 0,

    // Uncompressed
    B8G8R8A8 = ColorFormat::Bgra8888 as u8,
    B8G8R8U8 = ColorFormat::Bgru8888 as u8,
    A8R8G8B8 = ColorFormat::Argb8888 as u8,
    U8R8G8B8 = ColorFormat::Urgb8888 as u8,
    R8G8B8U8 = ColorFormat::Rgbu8888 as u8,
    R8G8B8A8 = ColorFormat::Rgba8888 as u8,
    R8G8B8 = ColorFormat::Rgb888 as u8,
    R4G4B4A4 = ColorFormat::Rgba4444 as u8,
    R5G6B5 = ColorFormat::Rgb565 as u8,
    B5G5R5A1 = ColorFormat::Bgra5551 as u8,

    // High precision
    R32G32B32A32Float = 14,
    R32G32B32Float,
    R32G32Float,
    R32Float,
    R16G16B16A16Sfloat,
    R16G16Sfloat,
    R16Sfloat,

    // S3TC, RGTC and BPTC
    Bc1Rgb,
    Bc1Rgba1,
    Bc2Rgba,
    Bc3Rgba,
    Bc3NormalYx,
    Bc4R,
    Bc5Rg,
    Bc5NormalYx,
    Bc6HSfloat,
    Bc6HUfloat,
    Bc7Rgba,

    // ETC2
    Etc2Rgb,
    Etc2Rgba1,
    Etc2Rgba,

    // ASTC
    Astc4x4,
    Astc5x4,
    Astc5x5,
    Astc6x5,
    Astc6x6,
    Astc8x5,
    Astc8x6,
    Astc8x8,
    Astc10x5,
    Astc10x6,
    Astc10x8,
    Astc10x10,
    Astc12x10,
    Astc12x12,

    // Palettised
    Pal4R8G8B8A8,
    Pal8R8G8B8A8,

    // PVRTC
    Pvr1Rgb2,
    Pvr1Rgba2,
    Pvr1Rgb4,
    Pvr1Rgba4,
    Pvr2Rgba2,
    Pvr2Rgba4,

    // Frame buffer formats
    D24S8Float,
    D24S8,
    R32,
    R8G8,
    R16G16B16A16,
    A2R10G10B10,
    B11G11R11Float,
    R8,
}

impl BitmapFormat {
    /// The canonical 8-bit RGBA format, one [`Color8`](texel_bitmap_common::color::Color8)
    /// per pixel.
    pub const CANONICAL: Self = Self::R8G8B8A8;

    /// Identifiers below this value are uncompressed colour formats.
    pub const UNCOMPRESSED_END: u8 = 13;

    /// Converts from the stored `u8` value.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|format| *format as u8 == value)
    }

    /// Returns `true` for the formats the colour codec can decode.
    pub fn is_uncompressed(self) -> bool {
        self != Self::Invalid && (self as u8) < Self::UNCOMPRESSED_END
    }

    /// The colour codec format matching this bitmap format, if it is uncompressed.
    pub fn color_format(self) -> Option<ColorFormat> {
        if !self.is_uncompressed() {
            return None;
        }
        ColorFormat::from_u8(self as u8)
    }

    /// Returns `true` if the format stores an alpha channel.
    pub fn has_alpha_channel(self) -> bool {
        matches!(
            self,
            Self::R4G4B4A4
                | Self::B5G5R5A1
                | Self::R8G8B8A8
                | Self::B8G8R8A8
                | Self::A8R8G8B8
                | Self::Pal4R8G8B8A8
                | Self::Pal8R8G8B8A8
                | Self::Etc2Rgba
                | Self::Bc1Rgba1
                | Self::Bc2Rgba
                | Self::Bc3Rgba
                | Self::Pvr1Rgba2
                | Self::Pvr1Rgba4
                | Self::Pvr2Rgba2
                | Self::Pvr2Rgba4
                | Self::R16G16B16A16
                | Self::R16G16B16A16Sfloat
                | Self::A2R10G10B10
                | Self::R32G32B32A32Float
        )
    }

    /// Returns `true` for formats holding signed values.
    pub fn is_signed(self) -> bool {
        self == Self::Bc6HSfloat
    }
}

/// Texture addressing outside the `[0, 1]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum WrapMode {
    #[default]
    ClampToEdge = 0,
    /// Outside texels take the bitmap's clamp colour.
    ClampToColor = 1,
    Wrap = 2,
    Mirror = 3,
}

impl WrapMode {
    /// Converts from the 2-bit flag value.
    pub fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0 => Self::ClampToEdge,
            1 => Self::ClampToColor,
            2 => Self::Wrap,
            _ => Self::Mirror,
        }
    }
}

/// Colour space of the pixel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ColorSpace {
    #[default]
    Srgb = 0,
    Linear = 1,
}
