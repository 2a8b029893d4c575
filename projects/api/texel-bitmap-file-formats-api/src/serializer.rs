//! Bitmap records for embedding in [`bincode`] streams.
//!
//! A stream holds [`SERIALIZER_VERSION`] followed by a [`BitmapRecord`]. Integers use fixed
//! width encoding in the byte order chosen by [`SerializerConfig`].

use crate::error::{SerializerError, SerializerResult};
use bincode::config::{self, Config};
use bincode::{Decode, Encode};
use log::debug;
use texel_bitmap::{Bitmap, BitmapData, BitmapFlags, BitmapHeader};
use texel_bitmap_common::color::Color8;
use texel_bitmap_common::endian::is_system_little;

/// Schema version of [`BitmapRecord`].
pub const SERIALIZER_VERSION: u16 = 2;

/// Byte order of an encoded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StreamEndian {
    #[default]
    Little,
    Big,
}

impl StreamEndian {
    /// The byte order of the running system.
    pub const fn native() -> Self {
        if is_system_little() {
            Self::Little
        } else {
            Self::Big
        }
    }
}

/// Options for [`serialize`] and [`deserialize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializerConfig {
    pub endian: StreamEndian,
}

/// The serialized form of a bitmap, fields in stream order.
///
/// The record always owns its payload.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct BitmapRecord {
    /// Offset table and pixel payload.
    pub data: Vec<u8>,
    pub data_size: u64,
    pub face_size: u32,
    pub height: u16,
    pub width: u16,
    pub flags: u16,
    pub mip_count: u8,
    pub clamp_r: u8,
    pub clamp_g: u8,
    pub clamp_b: u8,
    pub clamp_a: u8,
}

impl BitmapRecord {
    /// Captures `bitmap`, copying its buffer.
    ///
    /// # Panics
    ///
    /// If the bitmap has no buffer.
    pub fn from_bitmap(bitmap: &Bitmap<'_>) -> Self {
        let header = bitmap.header();
        Self {
            data: bitmap.data().to_vec(),
            data_size: header.data_size,
            face_size: header.face_size,
            height: header.height,
            width: header.width,
            flags: header.flags.raw(),
            mip_count: header.mip_count,
            clamp_r: header.clamp_color.r,
            clamp_g: header.clamp_color.g,
            clamp_b: header.clamp_color.b,
            clamp_a: header.clamp_color.a,
        }
    }

    /// Rebuilds an owning bitmap.
    pub fn into_bitmap(self) -> SerializerResult<Bitmap<'static>> {
        if self.data_size != self.data.len() as u64 {
            return Err(SerializerError::SizeMismatch {
                declared: self.data_size,
                actual: self.data.len(),
            });
        }

        let header = BitmapHeader {
            data_size: self.data_size,
            face_size: self.face_size,
            height: self.height,
            width: self.width,
            flags: BitmapFlags::from_raw(self.flags),
            mip_count: self.mip_count,
            clamp_color: Color8::new(self.clamp_r, self.clamp_g, self.clamp_b, self.clamp_a),
        };
        Ok(Bitmap::from_raw_parts(header, BitmapData::Owned(self.data)))
    }
}

/// Encodes `bitmap` as a versioned record.
pub fn serialize(bitmap: &Bitmap<'_>, settings: SerializerConfig) -> SerializerResult<Vec<u8>> {
    let record = BitmapRecord::from_bitmap(bitmap);
    let bytes = match settings.endian {
        StreamEndian::Little => encode_record(
            &record,
            config::standard()
                .with_little_endian()
                .with_fixed_int_encoding(),
        )?,
        StreamEndian::Big => encode_record(
            &record,
            config::standard().with_big_endian().with_fixed_int_encoding(),
        )?,
    };
    debug!(
        "serialized bitmap record v{SERIALIZER_VERSION}: {} bytes, {:?}",
        bytes.len(),
        settings.endian
    );
    Ok(bytes)
}

/// Decodes a versioned record produced by [`serialize`] with the same settings.
pub fn deserialize(input: &[u8], settings: SerializerConfig) -> SerializerResult<Bitmap<'static>> {
    let record = match settings.endian {
        StreamEndian::Little => decode_record(
            input,
            config::standard()
                .with_little_endian()
                .with_fixed_int_encoding(),
        )?,
        StreamEndian::Big => decode_record(
            input,
            config::standard().with_big_endian().with_fixed_int_encoding(),
        )?,
    };
    record.into_bitmap()
}

fn encode_record<C: Config>(record: &BitmapRecord, config: C) -> SerializerResult<Vec<u8>> {
    let mut bytes = bincode::encode_to_vec(SERIALIZER_VERSION, config)?;
    bytes.extend(bincode::encode_to_vec(record, config)?);
    Ok(bytes)
}

fn decode_record<C: Config>(input: &[u8], config: C) -> SerializerResult<BitmapRecord> {
    let (version, read): (u16, usize) = bincode::decode_from_slice(input, config)?;
    if version != SERIALIZER_VERSION {
        return Err(SerializerError::UnsupportedVersion {
            expected: SERIALIZER_VERSION,
            found: version,
        });
    }
    let (record, _): (BitmapRecord, usize) = bincode::decode_from_slice(&input[read..], config)?;
    Ok(record)
}
