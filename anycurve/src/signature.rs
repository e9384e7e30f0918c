//! Signatures produced by [`Curve::sign`][`crate::Curve::sign`].

use alloc::vec::Vec;
use core::fmt;

/// Signature made of two fixed-width halves: `r || s` for ECDSA, `R || S` for EdDSA.
#[derive(Clone, Eq, PartialEq)]
pub struct Signature {
    bytes: Vec<u8>,
}

impl Signature {
    pub(crate) fn from_halves(first: &[u8], second: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(first.len() + second.len());
        bytes.extend_from_slice(first);
        bytes.extend_from_slice(second);
        Self { bytes }
    }

    /// First half: the big endian `r` of ECDSA or the encoded point `R` of EdDSA.
    pub fn r_bytes(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() / 2]
    }

    /// Second half: the big endian `s` of ECDSA or the little endian `S` of EdDSA.
    pub fn s_bytes(&self) -> &[u8] {
        &self.bytes[self.bytes.len() / 2..]
    }

    /// Serialized signature.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Signature> for Vec<u8> {
    fn from(signature: Signature) -> Vec<u8> {
        signature.bytes
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(")?;
        for byte in &self.bytes {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}
