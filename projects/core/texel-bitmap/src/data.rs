//! The memory block backing a bitmap.

/// Storage for a bitmap's offset table and pixel payload.
///
/// A bitmap owns its memory only through [`BitmapData::Owned`]; the two borrowed variants are
/// non-owning views and are never freed by the bitmap.
#[derive(Debug)]
pub enum BitmapData<'a> {
    /// Heap buffer released with the bitmap.
    Owned(Vec<u8>),
    /// Read-only view. Mutation copies it into an [`BitmapData::Owned`] buffer first.
    Borrowed(&'a [u8]),
    /// Mutable view of memory owned elsewhere.
    BorrowedMut(&'a mut [u8]),
}

impl<'a> BitmapData<'a> {
    /// Returns `true` if dropping this buffer releases its memory.
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Self::Owned(bytes) => bytes,
            Self::Borrowed(bytes) => bytes,
            Self::BorrowedMut(bytes) => bytes,
        }
    }

    /// Mutable access to the bytes.
    ///
    /// A [`BitmapData::Borrowed`] view is first copied into a new owned buffer, leaving the
    /// borrowed memory untouched.
    pub fn make_mut(&mut self) -> &mut [u8] {
        if let Self::Borrowed(bytes) = *self {
            *self = Self::Owned(bytes.to_vec());
        }

        match self {
            Self::Owned(bytes) => bytes.as_mut_slice(),
            Self::BorrowedMut(bytes) => &mut **bytes,
            Self::Borrowed(_) => &mut [],
        }
    }

    /// Converts into an owned buffer, copying borrowed memory.
    pub fn into_owned(self) -> Vec<u8> {
        match self {
            Self::Owned(bytes) => bytes,
            Self::Borrowed(bytes) => bytes.to_vec(),
            Self::BorrowedMut(bytes) => bytes.to_vec(),
        }
    }
}

impl From<Vec<u8>> for BitmapData<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Owned(bytes)
    }
}

impl<'a> From<&'a [u8]> for BitmapData<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Borrowed(bytes)
    }
}

impl<'a> From<&'a mut [u8]> for BitmapData<'a> {
    fn from(bytes: &'a mut [u8]) -> Self {
        Self::BorrowedMut(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_follows_the_variant() {
        let source = [1u8, 2, 3];
        assert!(BitmapData::from(source.to_vec()).is_owned());
        assert!(!BitmapData::from(&source[..]).is_owned());

        let mut scratch = source;
        assert!(!BitmapData::from(&mut scratch[..]).is_owned());
    }

    #[test]
    fn mutating_a_shared_view_copies_it() {
        let source = [1u8, 2, 3];
        let mut data = BitmapData::Borrowed(&source);

        data.make_mut()[0] = 9;

        assert!(data.is_owned());
        assert_eq!(data.as_slice(), &[9, 2, 3]);
        assert_eq!(source, [1, 2, 3]);
    }

    #[test]
    fn mutable_view_writes_through() {
        let mut target = [1u8, 2, 3];
        {
            let mut data = BitmapData::BorrowedMut(&mut target);
            data.make_mut()[2] = 7;
            assert!(!data.is_owned());
        }
        assert_eq!(target, [1, 2, 7]);
    }

    #[test]
    fn into_owned_copies_views() {
        let source = [4u8, 5];
        assert_eq!(BitmapData::Borrowed(&source).into_owned(), vec![4, 5]);
        assert_eq!(BitmapData::Owned(vec![6]).len(), 1);
        assert!(BitmapData::Owned(Vec::new()).is_empty());
    }
}
