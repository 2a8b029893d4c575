//! XBMP container layout.
//!
//! All fields are little endian and tightly packed.

/// `'XBMP'` read as a little endian `u32`: bytes `50 4D 42 58` on disk.
pub const XBMP_SIGNATURE: u32 = 0x5842_4D50;

// Field offsets from the start of the file.
pub const SIGNATURE_OFFSET: usize = 0;
pub const DATA_SIZE_OFFSET: usize = 4;
pub const FACE_SIZE_OFFSET: usize = 12;
pub const HEIGHT_OFFSET: usize = 16;
pub const WIDTH_OFFSET: usize = 18;
pub const FLAGS_OFFSET: usize = 20;
pub const MIP_COUNT_OFFSET: usize = 22;
pub const CLAMP_COLOR_OFFSET: usize = 23;

pub const SIGNATURE_SIZE: usize = 4;

/// Signature plus header; the payload starts here.
pub const XBMP_HEADER_SIZE: usize = 27;
