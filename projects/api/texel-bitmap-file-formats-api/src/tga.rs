//! Uncompressed 32-bit TGA export of mip 0.

use crate::error::{TgaError, TgaResult};
use endian_writer::{EndianWriter, LittleEndianWriter};
use log::debug;
use texel_bitmap::{Bitmap, BitmapFormat};

pub const TGA_HEADER_SIZE: usize = 18;

const IMAGE_TYPE_OFFSET: usize = 2;
const WIDTH_OFFSET: usize = 12;
const HEIGHT_OFFSET: usize = 14;
const BIT_DEPTH_OFFSET: usize = 16;
const DESCRIPTOR_OFFSET: usize = 17;

/// Uncompressed true colour.
const IMAGE_TYPE_TRUE_COLOR: u8 = 2;
const BIT_DEPTH: u8 = 32;
/// 8 alpha bits, top-left origin.
const IMAGE_DESCRIPTOR: u8 = 32;

/// Returns `true` for the formats TGA export accepts.
pub fn is_exportable(format: BitmapFormat) -> bool {
    matches!(
        format,
        BitmapFormat::R8G8B8A8
            | BitmapFormat::B8G8R8A8
            | BitmapFormat::R8G8B8U8
            | BitmapFormat::B8G8R8U8
    )
}

/// Bytes needed to export `bitmap`.
pub fn encoded_size(bitmap: &Bitmap<'_>) -> usize {
    TGA_HEADER_SIZE + pixel_bytes(bitmap)
}

fn pixel_bytes(bitmap: &Bitmap<'_>) -> usize {
    bitmap.width() as usize * bitmap.height() as usize * 4
}

/// Writes the TGA image of mip 0 into the start of `output`, returning the bytes written.
///
/// Pixels are written as B, G, R, A.
///
/// # Panics
///
/// If the bitmap is empty or not an 8-bit four channel format (see [`is_exportable`]).
pub fn encode(bitmap: &Bitmap<'_>, output: &mut [u8]) -> TgaResult<usize> {
    assert!(
        is_exportable(bitmap.format()),
        "tga export needs an 8-bit RGBA or BGRA bitmap"
    );
    let required = encoded_size(bitmap);
    if output.len() < required {
        return Err(TgaError::WriteData {
            required,
            actual: output.len(),
        });
    }

    write_unchecked(bitmap, &mut output[..required]);
    Ok(required)
}

/// Exports `bitmap` into a new buffer.
///
/// # Panics
///
/// Same as [`encode`].
pub fn encode_to_vec(bitmap: &Bitmap<'_>) -> Vec<u8> {
    assert!(
        is_exportable(bitmap.format()),
        "tga export needs an 8-bit RGBA or BGRA bitmap"
    );
    let mut output = vec![0u8; encoded_size(bitmap)];
    write_unchecked(bitmap, &mut output);
    output
}

fn write_unchecked(bitmap: &Bitmap<'_>, output: &mut [u8]) {
    let (header, pixels) = output.split_at_mut(TGA_HEADER_SIZE);
    header.fill(0);
    header[IMAGE_TYPE_OFFSET] = IMAGE_TYPE_TRUE_COLOR;
    header[BIT_DEPTH_OFFSET] = BIT_DEPTH;
    header[DESCRIPTOR_OFFSET] = IMAGE_DESCRIPTOR;

    // SAFETY: header is TGA_HEADER_SIZE bytes, both fields end below that
    unsafe {
        let mut writer = LittleEndianWriter::new(header.as_mut_ptr());
        writer.write_u16_at(bitmap.width() as u16, WIDTH_OFFSET as isize);
        writer.write_u16_at(bitmap.height() as u16, HEIGHT_OFFSET as isize);
    }

    let source = &bitmap.mip(0, 0, 0)[..pixels.len()];
    match bitmap.format() {
        BitmapFormat::B8G8R8A8 | BitmapFormat::B8G8R8U8 => pixels.copy_from_slice(source),
        _ => {
            for (out, texel) in pixels.chunks_exact_mut(4).zip(source.chunks_exact(4)) {
                out.copy_from_slice(&[texel[2], texel[1], texel[0], texel[3]]);
            }
        }
    }

    debug!(
        "encoded tga: {}x{} from {:?}",
        bitmap.width(),
        bitmap.height(),
        bitmap.format()
    );
}
