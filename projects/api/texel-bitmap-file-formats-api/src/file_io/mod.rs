//! Path based XBMP load/save and TGA export.
//!
//! Files are memory mapped and handed to the slice level codecs in [`crate::xbmp`] and
//! [`crate::tga`].

mod error;
mod lightweight_mmap_impl;

pub use error::FileIoError;
pub use lightweight_mmap_impl::*;
