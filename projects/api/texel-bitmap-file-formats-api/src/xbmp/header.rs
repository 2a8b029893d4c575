//! Reading and writing the fixed XBMP header.

use super::constants::*;
use crate::error::{XbmpError, XbmpResult};
use endian_writer::{EndianReader, EndianWriter, LittleEndianReader, LittleEndianWriter};
use texel_bitmap::{BitmapFlags, BitmapHeader};
use texel_bitmap_common::color::Color8;

/// Validates the signature and parses the header that follows it.
pub fn read_header(input: &[u8]) -> XbmpResult<BitmapHeader> {
    if input.len() < SIGNATURE_SIZE {
        return Err(XbmpError::ReadSignature {
            required: SIGNATURE_SIZE,
            actual: input.len(),
        });
    }

    // SAFETY: We checked input.len() >= SIGNATURE_SIZE
    let mut reader = unsafe { LittleEndianReader::new(input.as_ptr()) };
    let signature = unsafe { reader.read_u32_at(SIGNATURE_OFFSET as isize) };
    if signature != XBMP_SIGNATURE {
        return Err(XbmpError::WrongSignature {
            expected: XBMP_SIGNATURE,
            found: signature,
        });
    }

    if input.len() < XBMP_HEADER_SIZE {
        return Err(XbmpError::ReadHeader {
            required: XBMP_HEADER_SIZE,
            actual: input.len(),
        });
    }

    // SAFETY: We checked input.len() >= XBMP_HEADER_SIZE, every field offset lies below it
    let header = unsafe {
        BitmapHeader {
            data_size: reader.read_u64_at(DATA_SIZE_OFFSET as isize),
            face_size: reader.read_u32_at(FACE_SIZE_OFFSET as isize),
            height: reader.read_u16_at(HEIGHT_OFFSET as isize),
            width: reader.read_u16_at(WIDTH_OFFSET as isize),
            flags: BitmapFlags::from_raw(reader.read_u16_at(FLAGS_OFFSET as isize)),
            mip_count: input[MIP_COUNT_OFFSET],
            clamp_color: read_color(input),
        }
    };
    Ok(header)
}

/// Writes the signature and `header` into the first [`XBMP_HEADER_SIZE`] bytes of `output`.
///
/// # Panics
///
/// If `output` is shorter than [`XBMP_HEADER_SIZE`].
pub fn write_header(header: &BitmapHeader, output: &mut [u8]) {
    assert!(output.len() >= XBMP_HEADER_SIZE);

    // SAFETY: We asserted output.len() >= XBMP_HEADER_SIZE
    unsafe {
        let mut writer = LittleEndianWriter::new(output.as_mut_ptr());
        writer.write_u32_at(XBMP_SIGNATURE, SIGNATURE_OFFSET as isize);
        writer.write_u64_at(header.data_size, DATA_SIZE_OFFSET as isize);
        writer.write_u32_at(header.face_size, FACE_SIZE_OFFSET as isize);
        writer.write_u16_at(header.height, HEIGHT_OFFSET as isize);
        writer.write_u16_at(header.width, WIDTH_OFFSET as isize);
        writer.write_u16_at(header.flags.raw(), FLAGS_OFFSET as isize);
    }
    output[MIP_COUNT_OFFSET] = header.mip_count;

    let color = header.clamp_color;
    output[CLAMP_COLOR_OFFSET..XBMP_HEADER_SIZE].copy_from_slice(&[
        color.r, color.g, color.b, color.a,
    ]);
}

fn read_color(input: &[u8]) -> Color8 {
    let bytes = &input[CLAMP_COLOR_OFFSET..XBMP_HEADER_SIZE];
    Color8::new(bytes[0], bytes[1], bytes[2], bytes[3])
}
