//! Error types for bitmap persistence.

use thiserror::Error;

#[cfg(feature = "file-io")]
use crate::file_io::FileIoError;

/// Result type for XBMP operations
pub type XbmpResult<T> = Result<T, XbmpError>;

/// Result type for TGA export
pub type TgaResult<T> = Result<T, TgaError>;

/// Result type for the serializer bridge
pub type SerializerResult<T> = Result<T, SerializerError>;

/// Errors reading or writing the XBMP container.
///
/// A failed load leaves the target bitmap empty.
#[derive(Debug, Error)]
pub enum XbmpError {
    /// The file could not be opened or mapped
    #[cfg(feature = "file-io")]
    #[error("Failed to open file: {0}")]
    OpenFile(#[source] FileIoError),

    /// Input ends before the signature
    #[error("Failed to read the signature: required {required} bytes, got {actual} bytes")]
    ReadSignature { required: usize, actual: usize },

    /// Input is not an XBMP container
    #[error("Wrong file signature: expected {expected:#010x}, found {found:#010x}")]
    WrongSignature { expected: u32, found: u32 },

    /// Input ends inside the header
    #[error("Failed to read the header: required {required} bytes, got {actual} bytes")]
    ReadHeader { required: usize, actual: usize },

    /// Input ends before the payload declared by the header
    #[error("Failed to read data: required {required} bytes, got {actual} bytes")]
    ReadData { required: u64, actual: usize },

    /// Header declares a zero width, height or mip count
    #[error("Empty layout: {width}x{height} with {mip_count} mips")]
    EmptyLayout { width: u16, height: u16, mip_count: u8 },

    /// Mip offset table entry points outside its face
    #[error("Invalid offset for mip {mip}: {offset} is outside the {face_size} byte face")]
    InvalidMipOffset { mip: usize, offset: i32, face_size: u32 },

    /// Output buffer cannot hold the encoded bitmap
    #[error("Failed to write data: required {required} bytes, got {actual} bytes")]
    WriteData { required: usize, actual: usize },
}

/// Errors exporting a TGA image.
#[derive(Debug, Error)]
pub enum TgaError {
    /// The TGA file could not be created or mapped
    #[cfg(feature = "file-io")]
    #[error("Failed to open tga file: {0}")]
    OpenFile(#[source] FileIoError),

    /// Output buffer cannot hold the image
    #[error("Failed to write tga data: required {required} bytes, got {actual} bytes")]
    WriteData { required: usize, actual: usize },
}

/// Errors from the serializer bridge.
#[derive(Debug, Error)]
pub enum SerializerError {
    #[error("Failed to encode bitmap record: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Failed to decode bitmap record: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    /// The stream was written with another schema
    #[error("Unsupported bitmap record version {found}, expected {expected}")]
    UnsupportedVersion { expected: u16, found: u16 },

    /// The record's data size disagrees with its payload
    #[error("Bitmap record declares {declared} bytes but carries {actual} bytes")]
    SizeMismatch { declared: u64, actual: usize },
}
