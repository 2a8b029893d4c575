//! Scalar types usable as colour channels.
//!
//! Integer channels store `0..=255` and map to the unit range by dividing by 255.
//! Float channels store the unit value directly.

use core::fmt::Debug;

mod private {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A colour channel scalar; implemented for [`u8`], [`f32`] and [`f64`].
pub trait Channel: private::Sealed + Copy + Default + PartialOrd + Debug + 'static {
    /// Fully transparent / black.
    const ZERO: Self;
    /// Fully opaque / full intensity.
    const FULL: Self;
    /// Tolerance used by colour equality; the machine epsilon for floats.
    const EPSILON: f64;
    /// `true` for the 8-bit integer channel.
    const IS_INTEGER: bool;

    /// Value in the unit range.
    fn to_unit(self) -> f32;

    /// Value in the unit range, at double precision.
    fn to_unit_f64(self) -> f64;

    /// Builds a channel from a unit value, clamping to the representable range.
    fn from_unit_clamped(value: f32) -> Self;

    /// Builds a channel from a unit value without clamping.
    ///
    /// Integer channels saturate at the type bounds; floats keep the value as is.
    fn from_unit(value: f32) -> Self;

    /// Same as [`Channel::from_unit`], at double precision.
    fn from_unit_f64(value: f64) -> Self;

    /// Converts from an 8-bit channel value.
    fn from_u8(value: u8) -> Self;

    /// Converts to an 8-bit channel value, clamping floats to the unit range first.
    fn to_u8(self) -> u8;

    /// Encodes a normal component in `[-1, 1]`.
    fn encode_normal(value: f32) -> Self;

    /// Decodes a value written by [`Channel::encode_normal`].
    fn decode_normal(self) -> f32;

    /// Channel addition; saturating for integers.
    fn add(self, rhs: Self) -> Self;

    /// Channel subtraction; saturating for integers.
    fn sub(self, rhs: Self) -> Self;

    /// Channel multiplication; saturating for integers.
    fn mul(self, rhs: Self) -> Self;

    /// Returns `true` if the two values are within `epsilon` of each other.
    fn near(self, other: Self, epsilon: f64) -> bool;
}

impl Channel for u8 {
    const ZERO: Self = 0;
    const FULL: Self = 255;
    const EPSILON: f64 = 0.0;
    const IS_INTEGER: bool = true;

    #[inline]
    fn to_unit(self) -> f32 {
        self as f32 * (1.0 / 255.0)
    }

    #[inline]
    fn to_unit_f64(self) -> f64 {
        self as f64 * (1.0 / 255.0)
    }

    #[inline]
    fn from_unit_clamped(value: f32) -> Self {
        (value * 255.0).clamp(0.0, 255.0) as u8
    }

    #[inline]
    fn from_unit(value: f32) -> Self {
        (value * 255.0) as u8
    }

    #[inline]
    fn from_unit_f64(value: f64) -> Self {
        (value * 255.0) as u8
    }

    #[inline]
    fn from_u8(value: u8) -> Self {
        value
    }

    #[inline]
    fn to_u8(self) -> u8 {
        self
    }

    #[inline]
    fn encode_normal(value: f32) -> Self {
        ((value + 1.0) * 127.0 + 0.5).clamp(0.0, 255.0) as u8
    }

    #[inline]
    fn decode_normal(self) -> f32 {
        (self as f32 - 127.0) / 127.0
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.saturating_mul(rhs)
    }

    #[inline]
    fn near(self, other: Self, epsilon: f64) -> bool {
        (self.abs_diff(other) as f64) <= epsilon
    }
}

macro_rules! impl_float_channel {
    ($ty:ty, $epsilon:expr) => {
        impl Channel for $ty {
            const ZERO: Self = 0.0;
            const FULL: Self = 1.0;
            const EPSILON: f64 = $epsilon;
            const IS_INTEGER: bool = false;

            #[inline]
            fn to_unit(self) -> f32 {
                self as f32
            }

            #[inline]
            fn to_unit_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_unit_clamped(value: f32) -> Self {
                (value as $ty).clamp(0.0, 1.0)
            }

            #[inline]
            fn from_unit(value: f32) -> Self {
                value as $ty
            }

            #[inline]
            fn from_unit_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline]
            fn from_u8(value: u8) -> Self {
                value as $ty * (1.0 / 255.0)
            }

            #[inline]
            fn to_u8(self) -> u8 {
                (self * 255.0).clamp(0.0, 255.0) as u8
            }

            #[inline]
            fn encode_normal(value: f32) -> Self {
                ((value as $ty + 1.0) * 0.5).clamp(0.0, 1.0)
            }

            #[inline]
            fn decode_normal(self) -> f32 {
                ((self - 0.5) * 2.0) as f32
            }

            #[inline]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn near(self, other: Self, epsilon: f64) -> bool {
                ((self - other).abs() as f64) < epsilon
            }
        }
    };
}

impl_float_channel!(f32, f32::EPSILON as f64);
impl_float_channel!(f64, f64::EPSILON);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0)]
    #[case(1.0, 255)]
    #[case(0.5, 127)]
    #[case(-3.0, 0)]
    #[case(7.0, 255)]
    fn clamps_integer_channels(#[case] unit: f32, #[case] expected: u8) {
        assert_eq!(u8::from_unit_clamped(unit), expected);
    }

    #[test]
    fn clamps_float_channels_to_unit_range() {
        assert_eq!(f32::from_unit_clamped(1.5), 1.0);
        assert_eq!(f32::from_unit_clamped(-0.25), 0.0);
        assert_eq!(f64::from_unit_clamped(0.25), 0.25);
        // The direct path keeps out of range floats.
        assert_eq!(f32::from_unit(1.5), 1.5);
    }

    #[test]
    fn integer_arithmetic_saturates() {
        assert_eq!(Channel::add(200u8, 100), 255);
        assert_eq!(Channel::sub(10u8, 20), 0);
        assert_eq!(Channel::mul(2u8, 200), 255);
        assert_eq!(Channel::mul(3u8, 4), 12);
    }

    #[rstest]
    #[case(-1.0, 0)]
    #[case(0.0, 127)]
    #[case(1.0, 254)]
    fn encodes_integer_normals(#[case] normal: f32, #[case] expected: u8) {
        assert_eq!(u8::encode_normal(normal), expected);
    }

    #[test]
    fn float_normals_round_trip() {
        for normal in [-1.0f32, -0.5, 0.0, 0.25, 1.0] {
            let encoded = f32::encode_normal(normal);
            assert!((encoded.decode_normal() - normal).abs() < 1e-6);
        }
    }

    #[test]
    fn u8_unit_mapping_hits_bounds() {
        assert_eq!(0u8.to_unit(), 0.0);
        assert!((255u8.to_unit() - 1.0).abs() < 1e-6);
        assert!((f32::from_u8(255) - 1.0).abs() < 1e-6);
        assert_eq!(1.0f32.to_u8(), 255);
        assert_eq!(2.0f64.to_u8(), 255);
    }
}
