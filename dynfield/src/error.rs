//! Error types.

use core::fmt;

/// Error type.
///
/// Returned when a modulus cannot back a prime field: it is even, smaller than 3, wider than
/// [`MAX_MODULUS_BITS`][`crate::MAX_MODULUS_BITS`], or no quadratic non-residue could be found
/// for it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Error;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field error")
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
