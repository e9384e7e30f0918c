//! Integers modulo the group order.

use crate::{Error, Result};
use core::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};
use dynfield::{
    ByteOrder, FieldElement, Uint, uint_from_bytes,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
    zeroize::Zeroize,
};

/// Element of the scalar field `Z/nZ` of a curve.
///
/// Obtained from [`CurveParameters::scalar`][`crate::CurveParameters::scalar`] or
/// [`CurveParameters::reduce_scalar`][`crate::CurveParameters::reduce_scalar`]. Arithmetic
/// between scalars of different curves is a logic error.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Scalar(pub(crate) FieldElement);

impl Scalar {
    /// Canonical integer representative in `[0, n)`.
    pub fn to_uint(&self) -> Uint {
        self.0.to_uint()
    }

    /// Determine if this scalar is zero.
    pub fn is_zero(&self) -> Choice {
        self.0.is_zero()
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Multiplicative inverse modulo `n`.
    pub fn invert(&self) -> Result<Self> {
        Option::from(self.0.invert())
            .map(Self)
            .ok_or(Error::NotInvertible)
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(FieldElement::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x{:x})", self.to_uint())
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar(-self.0)
    }
}

macro_rules! impl_scalar_op {
    ($op:ident, $func:ident) => {
        impl $op<Scalar> for Scalar {
            type Output = Scalar;

            fn $func(self, rhs: Scalar) -> Scalar {
                Scalar($op::$func(self.0, rhs.0))
            }
        }

        impl $op<&Scalar> for Scalar {
            type Output = Scalar;

            fn $func(self, rhs: &Scalar) -> Scalar {
                Scalar($op::$func(self.0, rhs.0))
            }
        }

        impl $op<&Scalar> for &Scalar {
            type Output = Scalar;

            fn $func(self, rhs: &Scalar) -> Scalar {
                Scalar($op::$func(self.0, rhs.0))
            }
        }
    };
}

impl_scalar_op!(Add, add);
impl_scalar_op!(Sub, sub);
impl_scalar_op!(Mul, mul);

/// Leftmost `qlen` bits of `bytes` as an integer (RFC 6979 § 2.3.2).
pub(crate) fn bits2int(bytes: &[u8], qlen: usize) -> Uint {
    let len = bytes.len().min(qlen.div_ceil(8));
    let x = uint_from_bytes(&bytes[..len], ByteOrder::BigEndian).unwrap_or(Uint::ZERO);
    x.shr_vartime((8 * len).saturating_sub(qlen))
}

#[cfg(test)]
mod tests {
    use super::bits2int;
    use dynfield::{Uint, hex_uint};
    use hex_literal::hex;

    #[test]
    fn bits2int_truncates_to_order_width() {
        let h = hex!("af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf");

        // 163-bit order from RFC 6979 A.1: the digest keeps its leftmost 163 bits.
        assert_eq!(
            bits2int(&h, 163),
            hex_uint("5795edf0d54db760f156f0eb4a7a0fe38d418e813")
        );
        assert_eq!(
            bits2int(&h, 256),
            hex_uint("af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf")
        );
    }

    #[test]
    fn bits2int_short_input() {
        assert_eq!(bits2int(&[0x01, 0x02], 521), Uint::from_u64(0x0102));
        assert_eq!(bits2int(&[], 256), Uint::ZERO);
    }
}
