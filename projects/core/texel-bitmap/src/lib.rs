#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]

pub mod alpha;
pub mod bitmap;
pub mod construct;
pub mod data;
pub mod default_texture;
pub mod flags;
pub mod flip;
pub mod format;
pub mod layout;

pub use bitmap::{Bitmap, BitmapHeader, MIP_OFFSET_SIZE};
pub use data::BitmapData;
pub use default_texture::{default_bitmap, DEFAULT_TEXTURE_SIZE};
pub use flags::BitmapFlags;
pub use format::{BitmapFormat, ColorSpace, WrapMode};
pub use layout::{BitmapLayout, CUBEMAP_FACE_COUNT};

#[cfg(test)]
pub(crate) mod test_prelude;
