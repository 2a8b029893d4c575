//! Common test imports and utilities for the colour codec tests.
//!
//! Re-exports the crates and helpers used all over the test modules so each module can get away
//! with a single `use crate::test_prelude::*;`.

pub use crate::color::*;
pub use rstest::rstest;

/// Asserts every component of two float arrays is within `epsilon` of each other.
#[track_caller]
pub fn assert_close<const N: usize>(actual: [f32; N], expected: [f32; N], epsilon: f32) {
    for (index, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() < epsilon,
            "component {index} mismatch: got {actual:?}, expected {expected:?}"
        );
    }
}

/// Asserts every channel of two 8-bit colours differs by at most `tolerance`.
#[track_caller]
pub fn assert_channels_near(actual: Color8, expected: Color8, tolerance: u8) {
    for index in 0..4 {
        assert!(
            actual[index].abs_diff(expected[index]) <= tolerance,
            "channel {index} mismatch: got {actual:?}, expected {expected:?}"
        );
    }
}
