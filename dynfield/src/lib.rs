#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(any(feature = "std", test))]
extern crate std;

mod element;
mod encoding;
mod error;
mod field;
mod sqrt;

pub use crate::{
    element::FieldElement,
    encoding::{FieldBytes, hex_uint, uint_from_bytes, uint_to_bytes},
    error::{Error, Result},
    field::PrimeField,
};
pub use bigint;
pub use subtle;
pub use zeroize;

/// Fixed-capacity integer backing every field element.
pub type Uint = bigint::U576;

/// Number of limbs in [`Uint`].
pub const LIMBS: usize = Uint::LIMBS;

/// Largest supported modulus size in bits.
pub const MAX_MODULUS_BITS: usize = Uint::BITS - 2;

/// Byte order used when encoding/decoding field elements as bytestrings.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ByteOrder {
    /// Big endian.
    BigEndian,

    /// Little endian.
    LittleEndian,
}
