//! The XBMP container: a signature, the bitmap header, then the raw buffer.
//!
//! The buffer is stored exactly as held in memory, mip offset table included, so a decoded bitmap
//! addresses its mips, faces and frames without any fix-ups. The container has a single schema
//! and carries no version field.

mod constants;
mod header;

pub use constants::{XBMP_HEADER_SIZE, XBMP_SIGNATURE};
pub use header::{read_header, write_header};

use crate::error::{XbmpError, XbmpResult};
use log::debug;
use texel_bitmap::{Bitmap, BitmapData, BitmapHeader, CUBEMAP_FACE_COUNT, MIP_OFFSET_SIZE};

/// Bytes needed to store `bitmap`.
pub fn encoded_size(bitmap: &Bitmap<'_>) -> usize {
    XBMP_HEADER_SIZE + bitmap.data_size() as usize
}

/// Writes `bitmap` into the start of `output`, returning the number of bytes written.
///
/// # Panics
///
/// If the bitmap has no buffer.
pub fn encode(bitmap: &Bitmap<'_>, output: &mut [u8]) -> XbmpResult<usize> {
    let required = encoded_size(bitmap);
    if output.len() < required {
        return Err(XbmpError::WriteData {
            required,
            actual: output.len(),
        });
    }

    write_unchecked(bitmap, &mut output[..required]);
    Ok(required)
}

/// Encodes `bitmap` into a new buffer.
///
/// # Panics
///
/// If the bitmap has no buffer.
pub fn encode_to_vec(bitmap: &Bitmap<'_>) -> Vec<u8> {
    let mut output = vec![0u8; encoded_size(bitmap)];
    write_unchecked(bitmap, &mut output);
    output
}

fn write_unchecked(bitmap: &Bitmap<'_>, output: &mut [u8]) {
    let (header_bytes, payload) = output.split_at_mut(XBMP_HEADER_SIZE);
    write_header(bitmap.header(), header_bytes);
    payload.copy_from_slice(bitmap.data());
    debug!(
        "encoded xbmp: {}x{} {:?}, {} bytes",
        bitmap.width(),
        bitmap.height(),
        bitmap.format(),
        output.len()
    );
}

/// Decodes into a bitmap owning a copy of the payload.
pub fn decode(input: &[u8]) -> XbmpResult<Bitmap<'static>> {
    let (header, payload) = split(input)?;
    Ok(Bitmap::from_raw_parts(
        header,
        BitmapData::Owned(payload.to_vec()),
    ))
}

/// Decodes into a bitmap borrowing its payload from `input`.
///
/// Writing to the returned bitmap copies the payload first.
pub fn decode_view(input: &[u8]) -> XbmpResult<Bitmap<'_>> {
    let (header, payload) = split(input)?;
    Ok(Bitmap::from_raw_parts(header, BitmapData::Borrowed(payload)))
}

/// Replaces the contents of `bitmap` with the decoded container.
///
/// The bitmap is killed first and stays empty when decoding fails.
pub fn decode_into(bitmap: &mut Bitmap<'_>, input: &[u8]) -> XbmpResult<()> {
    bitmap.kill();
    *bitmap = decode(input)?;
    Ok(())
}

fn split(input: &[u8]) -> XbmpResult<(BitmapHeader, &[u8])> {
    let header = read_header(input)?;
    let available = input.len() - XBMP_HEADER_SIZE;
    let data_size = match usize::try_from(header.data_size) {
        Ok(size) if size <= available => size,
        _ => {
            return Err(XbmpError::ReadData {
                required: header.data_size,
                actual: available,
            })
        }
    };

    debug!(
        "decoded xbmp header: {}x{}, {} mips, {} bytes",
        header.width, header.height, header.mip_count, data_size
    );
    let payload = &input[XBMP_HEADER_SIZE..XBMP_HEADER_SIZE + data_size];
    validate_layout(&header, payload)?;
    Ok((header, payload))
}

/// Rejects headers whose mips, faces or frames would address outside `payload`.
fn validate_layout(header: &BitmapHeader, payload: &[u8]) -> XbmpResult<()> {
    if header.width == 0 || header.height == 0 || header.mip_count == 0 {
        return Err(XbmpError::EmptyLayout {
            width: header.width,
            height: header.height,
            mip_count: header.mip_count,
        });
    }

    let table_size = header.mip_count as usize * MIP_OFFSET_SIZE;
    if payload.len() < table_size {
        return Err(XbmpError::ReadData {
            required: table_size as u64,
            actual: payload.len(),
        });
    }

    // At least one whole frame must follow the table.
    let faces = if header.flags.cubemap() {
        CUBEMAP_FACE_COUNT as u64
    } else {
        1
    };
    let frame_size = header.face_size as u64 * faces;
    let frames_bytes = (payload.len() - table_size) as u64;
    if header.face_size == 0 || frame_size > frames_bytes {
        return Err(XbmpError::ReadData {
            required: table_size as u64 + frame_size.max(1),
            actual: payload.len(),
        });
    }

    let mut previous = 0i32;
    for (mip, entry) in payload[..table_size].chunks_exact(MIP_OFFSET_SIZE).enumerate() {
        let offset = i32::from_le_bytes([entry[0], entry[1], entry[2], entry[3]]);
        if offset < previous || offset as i64 >= header.face_size as i64 {
            return Err(XbmpError::InvalidMipOffset {
                mip,
                offset,
                face_size: header.face_size,
            });
        }
        previous = offset;
    }
    Ok(())
}
