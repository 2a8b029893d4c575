//! Byte order conversions for fixed width integers and floats.
//!
//! All conversions are pure and resolve at compile time to either a no-op or a byte swap,
//! depending on the target's endianness.

/// A fixed width value whose byte order can be reversed.
pub trait EndianSwap: Copy {
    /// Returns the value with its bytes in reverse order.
    fn swap_endian(self) -> Self;
}

macro_rules! impl_endian_swap_int {
    ($($ty:ty),*) => {
        $(
            impl EndianSwap for $ty {
                #[inline(always)]
                fn swap_endian(self) -> Self {
                    self.swap_bytes()
                }
            }
        )*
    };
}

impl_endian_swap_int!(u8, u16, u32, u64, i8, i16, i32, i64);

impl EndianSwap for f32 {
    #[inline(always)]
    fn swap_endian(self) -> Self {
        f32::from_bits(self.to_bits().swap_bytes())
    }
}

impl EndianSwap for f64 {
    #[inline(always)]
    fn swap_endian(self) -> Self {
        f64::from_bits(self.to_bits().swap_bytes())
    }
}

/// Returns `true` when the target stores the least significant byte first.
#[inline(always)]
pub const fn is_system_little() -> bool {
    cfg!(target_endian = "little")
}

/// Returns `true` when the target stores the most significant byte first.
#[inline(always)]
pub const fn is_system_big() -> bool {
    !is_system_little()
}

/// Converts a value in native byte order to little endian.
#[inline(always)]
pub fn system_to_little<T: EndianSwap>(value: T) -> T {
    if is_system_little() {
        value
    } else {
        value.swap_endian()
    }
}

/// Converts a value in native byte order to big endian.
#[inline(always)]
pub fn system_to_big<T: EndianSwap>(value: T) -> T {
    if is_system_little() {
        value.swap_endian()
    } else {
        value
    }
}

/// Converts a little endian value to native byte order.
#[inline(always)]
pub fn little_to_system<T: EndianSwap>(value: T) -> T {
    system_to_little(value)
}

/// Converts a big endian value to native byte order.
#[inline(always)]
pub fn big_to_system<T: EndianSwap>(value: T) -> T {
    system_to_big(value)
}
