//! File I/O implementation using lightweight-mmap.

use super::FileIoError;
use crate::error::{TgaError, TgaResult, XbmpError, XbmpResult};
use crate::{tga, xbmp};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use log::{debug, error};
use std::path::Path;
use texel_bitmap::Bitmap;

/// Loads an XBMP file into `bitmap`, replacing its contents.
///
/// The bitmap is killed first and stays empty if loading fails.
pub fn load_xbmp(bitmap: &mut Bitmap<'_>, path: &Path) -> XbmpResult<()> {
    bitmap.kill();
    let result = read_xbmp(path).map(|loaded| *bitmap = loaded);
    if let Err(err) = &result {
        error!("failed to load {}: {err}", path.display());
    }
    result
}

/// Reads an XBMP file into a new owning bitmap.
pub fn read_xbmp(path: &Path) -> XbmpResult<Bitmap<'static>> {
    let handle = ReadOnlyFileHandle::open(path).map_err(xbmp_open_error)?;
    let size = handle.size().map_err(xbmp_open_error)? as usize;
    // Empty files cannot be mapped; the decoder reports the missing signature.
    if size == 0 {
        return xbmp::decode(&[]);
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size).map_err(xbmp_open_error)?;
    let bitmap = xbmp::decode(mapping.as_slice())?;
    debug!(
        "loaded {}: {}x{} {:?}",
        path.display(),
        bitmap.width(),
        bitmap.height(),
        bitmap.format()
    );
    Ok(bitmap)
}

/// Writes `bitmap` as an XBMP file. The output directory must exist.
///
/// # Panics
///
/// If the bitmap has no buffer.
pub fn save_xbmp(bitmap: &Bitmap<'_>, path: &Path) -> XbmpResult<()> {
    let write = || -> XbmpResult<usize> {
        let size = xbmp::encoded_size(bitmap);
        let handle =
            ReadWriteFileHandle::create_preallocated(path, size as i64).map_err(xbmp_open_error)?;
        let mut mapping = ReadWriteMmap::new(&handle, 0, size).map_err(xbmp_open_error)?;
        xbmp::encode(bitmap, mapping.as_mut_slice())
    };

    match write() {
        Ok(written) => {
            debug!("saved {}: {written} bytes", path.display());
            Ok(())
        }
        Err(err) => {
            error!("failed to save {}: {err}", path.display());
            Err(err)
        }
    }
}

/// Exports mip 0 of `bitmap` as a TGA file. The output directory must exist.
///
/// # Panics
///
/// If the bitmap cannot be exported, see [`tga::encode`].
pub fn save_tga(bitmap: &Bitmap<'_>, path: &Path) -> TgaResult<()> {
    let write = || -> TgaResult<usize> {
        let size = tga::encoded_size(bitmap);
        let handle =
            ReadWriteFileHandle::create_preallocated(path, size as i64).map_err(tga_open_error)?;
        let mut mapping = ReadWriteMmap::new(&handle, 0, size).map_err(tga_open_error)?;
        tga::encode(bitmap, mapping.as_mut_slice())
    };

    match write() {
        Ok(written) => {
            debug!("saved {}: {written} bytes", path.display());
            Ok(())
        }
        Err(err) => {
            error!("failed to save tga {}: {err}", path.display());
            Err(err)
        }
    }
}

fn xbmp_open_error<E: Into<FileIoError>>(err: E) -> XbmpError {
    XbmpError::OpenFile(err.into())
}

fn tga_open_error<E: Into<FileIoError>>(err: E) -> TgaError {
    TgaError::OpenFile(err.into())
}
