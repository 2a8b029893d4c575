//! Colour values and the packed pixel codec.
//!
//! - [`format`]: packed pixel layouts, their descriptors and substitute matching
//! - [`Color`]: a four channel colour generic over [`Channel`]
//!
//! Colour space views, arithmetic and the category palette are implemented on [`Color`] in the
//! remaining submodules.

pub mod category;
pub mod channel;
pub mod format;
pub mod ops;
pub mod spaces;
pub mod unit;

pub use category::{color_category, COLOR_CATEGORY_COUNT};
pub use channel::Channel;
pub use format::{ColorFormat, FormatDescriptor};
pub use unit::{Color, Color8, ColorF32, ColorF64};
