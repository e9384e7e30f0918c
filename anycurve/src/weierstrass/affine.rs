//! Affine curve points and their SEC1 encoding.

use super::Equation;
use crate::{Error, Result};
use alloc::{vec, vec::Vec};
use dynfield::{
    ByteOrder, FieldElement,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
};

/// SEC1 tag of a compressed point with even `y`.
const TAG_COMPRESSED_EVEN_Y: u8 = 0x02;

/// SEC1 tag of a compressed point with odd `y`.
const TAG_COMPRESSED_ODD_Y: u8 = 0x03;

/// SEC1 tag of an uncompressed point.
const TAG_UNCOMPRESSED: u8 = 0x04;

/// Point on a Weierstrass curve in affine coordinates.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AffinePoint {
    /// x-coordinate
    pub(crate) x: FieldElement,

    /// y-coordinate
    pub(crate) y: FieldElement,

    /// Is this point the point at infinity? 0 = no, 1 = yes
    pub(crate) infinity: u8,
}

impl AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub(crate) fn identity(eq: &Equation) -> Self {
        Self {
            x: eq.field.zero(),
            y: eq.field.zero(),
            infinity: 1,
        }
    }

    /// Is this point the point at infinity?
    pub(crate) fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Does this point satisfy the curve equation? The identity always does.
    pub(crate) fn is_on_curve(&self, eq: &Equation) -> Choice {
        self.y.square().ct_eq(&eq.rhs(&self.x)) | self.is_identity()
    }

    /// Length of a compressed SEC1 encoding for this curve.
    pub(crate) fn compressed_len(eq: &Equation) -> usize {
        eq.field.byte_len() + 1
    }

    /// Length of an uncompressed SEC1 encoding for this curve.
    pub(crate) fn uncompressed_len(eq: &Equation) -> usize {
        2 * eq.field.byte_len() + 1
    }

    /// Serialize as SEC1. The identity is encoded as an all-zero string of compressed length.
    pub(crate) fn to_bytes(&self, compress: bool, eq: &Equation) -> Vec<u8> {
        if bool::from(self.is_identity()) {
            return vec![0; Self::compressed_len(eq)];
        }

        let mut bytes = Vec::with_capacity(Self::uncompressed_len(eq));
        let x = eq.field.encode(&self.x, ByteOrder::BigEndian);

        if compress {
            let tag = u8::conditional_select(
                &TAG_COMPRESSED_EVEN_Y,
                &TAG_COMPRESSED_ODD_Y,
                self.y.is_odd(),
            );
            bytes.push(tag);
            bytes.extend_from_slice(&x);
        } else {
            bytes.push(TAG_UNCOMPRESSED);
            bytes.extend_from_slice(&x);
            bytes.extend_from_slice(&eq.field.encode(&self.y, ByteOrder::BigEndian));
        }

        bytes
    }

    /// Parse a SEC1 encoded point.
    pub(crate) fn from_bytes(bytes: &[u8], eq: &Equation) -> Result<Self> {
        let (tag, body) = bytes.split_first().ok_or(Error::InvalidEncodingLength)?;
        let field_len = eq.field.byte_len();

        match (*tag, body.len()) {
            (0x00, len) if len == field_len => {
                if body.iter().all(|&b| b == 0) {
                    Ok(Self::identity(eq))
                } else {
                    Err(Error::InvalidEncoding)
                }
            }
            (TAG_COMPRESSED_EVEN_Y | TAG_COMPRESSED_ODD_Y, len) if len == field_len => {
                let x = decode_coordinate(body, eq)?;
                Self::decompress(&x, Choice::from(tag & 1), eq)
            }
            (TAG_UNCOMPRESSED, len) if len == 2 * field_len => {
                let (x, y) = body.split_at(field_len);
                let point = Self {
                    x: decode_coordinate(x, eq)?,
                    y: decode_coordinate(y, eq)?,
                    infinity: 0,
                };

                if bool::from(point.is_on_curve(eq)) {
                    Ok(point)
                } else {
                    Err(Error::PointNotOnCurve)
                }
            }
            (_, len) if len == field_len || len == 2 * field_len => Err(Error::InvalidEncoding),
            _ => Err(Error::InvalidEncodingLength),
        }
    }

    /// Recover `y` from `x` and the parity of `y`.
    fn decompress(x: &FieldElement, y_is_odd: Choice, eq: &Equation) -> Result<Self> {
        let alpha = eq.rhs(x);
        let beta = Option::<FieldElement>::from(eq.field.sqrt(&alpha)).ok_or(Error::PointNotOnCurve)?;
        let y = FieldElement::conditional_select(&-beta, &beta, beta.is_odd().ct_eq(&y_is_odd));

        Ok(Self {
            x: *x,
            y,
            infinity: 0,
        })
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & self.infinity.ct_eq(&other.infinity)
    }
}

/// Decode a canonical big endian field element.
fn decode_coordinate(bytes: &[u8], eq: &Equation) -> Result<FieldElement> {
    Option::from(eq.field.decode(bytes, ByteOrder::BigEndian)).ok_or(Error::InvalidEncoding)
}
