#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod color;
pub mod endian;

#[cfg(test)]
pub(crate) mod test_prelude;
