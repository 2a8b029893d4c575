#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]

pub mod error;
pub mod serializer;
pub mod tga;
pub mod xbmp;

#[cfg(feature = "file-io")]
pub mod file_io;

pub use error::{
    SerializerError, SerializerResult, TgaError, TgaResult, XbmpError, XbmpResult,
};
pub use serializer::{SerializerConfig, StreamEndian, SERIALIZER_VERSION};

#[cfg(feature = "file-io")]
pub use file_io::{load_xbmp, read_xbmp, save_tga, save_xbmp, FileIoError};

#[cfg(test)]
pub(crate) mod test_prelude;
