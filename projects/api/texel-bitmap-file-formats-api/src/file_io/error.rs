//! Backend errors from opening and mapping files.

use lightweight_mmap::handles::HandleOpenError;
use lightweight_mmap::mmap::MmapError;
use thiserror::Error;

/// A file could not be opened, sized or mapped.
#[derive(Debug, Error)]
pub enum FileIoError {
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] HandleOpenError),

    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] MmapError),
}
