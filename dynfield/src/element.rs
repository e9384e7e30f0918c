//! Field elements.

use crate::{LIMBS, Uint};
use bigint::modular::runtime_mod::DynResidue;
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

/// Element of a [`PrimeField`][`crate::PrimeField`].
///
/// Internally represented in Montgomery form together with the parameters of its field.
/// All arithmetic returns fully reduced values. Combining elements of two different fields is
/// a logic error; it is caught by debug assertions.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct FieldElement(DynResidue<LIMBS>);

impl FieldElement {
    pub(crate) const fn from_residue(residue: DynResidue<LIMBS>) -> Self {
        Self(residue)
    }

    pub(crate) const fn residue(&self) -> &DynResidue<LIMBS> {
        &self.0
    }

    /// Canonical integer representative in `[0, p)`.
    pub fn to_uint(&self) -> Uint {
        self.0.retrieve()
    }

    /// Determine if this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.0.as_montgomery().ct_eq(&Uint::ZERO)
    }

    /// Determine if the canonical representative of this element is odd.
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_uint().as_words()[0] & 1) as u8)
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        Self(self.0 + self.0)
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Raises to the power `exp`.
    ///
    /// Constant time in the value of `self`. Only the bit length of `exp` may leak, so `exp`
    /// must not be secret.
    pub fn pow(&self, exp: &Uint) -> Self {
        Self(self.0.pow_bounded_exp(exp, exp.bits_vartime()))
    }

    /// Multiplicative inverse, or `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        let (inverse, invertible) = self.0.invert();
        CtOption::new(Self(inverse), Choice::from(invertible) & !self.is_zero())
    }

    #[inline(always)]
    fn debug_assert_same_field(&self, rhs: &Self) {
        debug_assert_eq!(
            self.0.params(),
            rhs.0.params(),
            "field elements belong to different fields"
        );
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(DynResidue::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:x})", self.to_uint())
    }
}

impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.neg())
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement(self.0.neg())
    }
}

macro_rules! impl_field_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident) => {
        impl $op<FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $op_fn(self, rhs: FieldElement) -> FieldElement {
                self.debug_assert_same_field(&rhs);
                FieldElement(self.0.$op_fn(&rhs.0))
            }
        }

        impl $op<&FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $op_fn(self, rhs: &FieldElement) -> FieldElement {
                self.debug_assert_same_field(rhs);
                FieldElement(self.0.$op_fn(&rhs.0))
            }
        }

        impl $op<FieldElement> for &FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $op_fn(self, rhs: FieldElement) -> FieldElement {
                self.debug_assert_same_field(&rhs);
                FieldElement(self.0.$op_fn(&rhs.0))
            }
        }

        impl $op<&FieldElement> for &FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $op_fn(self, rhs: &FieldElement) -> FieldElement {
                self.debug_assert_same_field(rhs);
                FieldElement(self.0.$op_fn(&rhs.0))
            }
        }

        impl $assign<FieldElement> for FieldElement {
            #[inline]
            fn $assign_fn(&mut self, rhs: FieldElement) {
                *self = $op::$op_fn(*self, &rhs);
            }
        }

        impl $assign<&FieldElement> for FieldElement {
            #[inline]
            fn $assign_fn(&mut self, rhs: &FieldElement) {
                *self = $op::$op_fn(*self, rhs);
            }
        }
    };
}

impl_field_op!(Add, add, AddAssign, add_assign);
impl_field_op!(Sub, sub, SubAssign, sub_assign);
impl_field_op!(Mul, mul, MulAssign, mul_assign);

#[cfg(test)]
mod tests {
    use crate::{PrimeField, Uint, hex_uint};
    use proptest::prelude::*;
    use subtle::ConstantTimeEq;

    fn p256() -> PrimeField {
        PrimeField::new(&hex_uint(
            "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        ))
        .unwrap()
    }

    #[test]
    fn zero_and_one() {
        let field = p256();
        assert!(bool::from(field.zero().is_zero()));
        assert!(!bool::from(field.one().is_zero()));
        assert_eq!(field.one().to_uint(), Uint::ONE);
        assert_eq!(field.zero() + field.one(), field.one());
    }

    #[test]
    fn wraps_around_modulus() {
        let field = p256();
        let minus_one = -field.one();
        assert_eq!(minus_one + field.one(), field.zero());
        assert_eq!(minus_one.to_uint(), field.modulus().wrapping_sub(&Uint::ONE));
        assert!(bool::from(minus_one.square().ct_eq(&field.one())));
    }

    #[test]
    fn zero_is_not_invertible() {
        let field = p256();
        assert!(bool::from(field.zero().invert().is_none()));
    }

    #[test]
    fn parity() {
        let field = p256();
        assert!(bool::from(field.one().is_odd()));
        assert!(!bool::from(field.from_u64(2).is_odd()));
        // p - 1 is even
        assert!(!bool::from((-field.one()).is_odd()));
    }

    #[test]
    fn small_modulus_arithmetic() {
        let field = PrimeField::new(&Uint::from_u64(23)).unwrap();
        assert_eq!(field.from_u64(20) + field.from_u64(5), field.from_u64(2));
        assert_eq!(field.from_u64(3) - field.from_u64(5), field.from_u64(21));
        assert_eq!(field.from_u64(7) * field.from_u64(10), field.from_u64(1));
        assert_eq!(field.from_u64(7).invert().unwrap(), field.from_u64(10));
        assert_eq!(field.from_u64(5).pow(&Uint::from_u64(22)), field.one());
    }

    #[test]
    fn debug_prints_hex() {
        let field = PrimeField::new(&Uint::from_u64(23)).unwrap();
        let rendered = std::format!("{:?}", field.from_u64(17));
        assert!(rendered.starts_with("FieldElement(0x"));
        assert!(rendered.ends_with("11)"));
    }

    proptest! {
        #[test]
        fn invert_is_inverse(n in 1u64..) {
            let field = p256();
            let x = field.from_u64(n);
            prop_assert_eq!(x * x.invert().unwrap(), field.one());
        }

        #[test]
        fn distributive(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
            let field = p256();
            let (a, b, c) = (field.from_u64(a), field.from_u64(b), field.from_u64(c));
            prop_assert_eq!(a * (b + c), a * b + a * c);
            prop_assert_eq!((a - b) + b, a);
            prop_assert_eq!(a.double(), a + a);
        }
    }
}
