//! Twisted Edwards curves `ax² + y² = 1 + dx²y²`.
//!
//! Points are kept in extended coordinates `(X : Y : Z : T)` with `x = X/Z`, `y = Y/Z` and
//! `xy = T/Z`. The unified addition law is complete when `a` is a square and `d` is not,
//! which holds for every twisted Edwards curve in [`crate::named`].

mod affine;
mod extended;

pub(crate) use self::{affine::AffinePoint, extended::ExtendedPoint};

use dynfield::{FieldElement, PrimeField, subtle::ConstantTimeEq};

/// Curve equation together with the constants the formulas need.
#[derive(Clone, Debug)]
pub(crate) struct Equation {
    pub(crate) field: PrimeField,
    pub(crate) a: FieldElement,
    pub(crate) d: FieldElement,
}

impl Equation {
    pub(crate) fn new(field: PrimeField, a: FieldElement, d: FieldElement) -> Self {
        Self { field, a, d }
    }

    /// Returns `true` if `(x, y)` satisfies `ax² + y² = 1 + dx²y²`.
    pub(crate) fn is_on_curve(&self, x: &FieldElement, y: &FieldElement) -> bool {
        let xx = x.square();
        let yy = y.square();
        let lhs = self.a * xx + yy;
        let rhs = self.field.one() + self.d * xx * yy;
        bool::from(lhs.ct_eq(&rhs))
    }

    /// Returns `true` if `a` and `d` define a non-degenerate curve.
    pub(crate) fn is_degenerate(&self) -> bool {
        bool::from(self.a.is_zero() | self.d.is_zero() | self.a.ct_eq(&self.d))
    }

    /// Width in bytes of an encoded point: the field element plus one sign bit.
    pub(crate) fn encoded_len(&self) -> usize {
        (self.field.bits() + 1).div_ceil(8)
    }
}
