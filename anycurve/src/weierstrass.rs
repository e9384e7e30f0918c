//! Short Weierstrass curves `y² = x³ + ax + b`.
//!
//! Points are kept in homogeneous projective coordinates and combined with the complete
//! formulas of Renes, Costello and Batina, which have no exceptional cases on curves of odd
//! order.

mod affine;
mod point_arithmetic;
mod projective;

pub(crate) use self::{affine::AffinePoint, projective::ProjectivePoint};

use self::point_arithmetic::EquationA;
use dynfield::{FieldElement, PrimeField};

/// Curve equation together with the constants the formulas need.
#[derive(Clone, Debug)]
pub(crate) struct Equation {
    pub(crate) field: PrimeField,
    pub(crate) a: FieldElement,
    pub(crate) b: FieldElement,
    /// `3b`
    pub(crate) b3: FieldElement,
    pub(crate) a_properties: EquationA,
}

impl Equation {
    pub(crate) fn new(field: PrimeField, a: FieldElement, b: FieldElement) -> Self {
        let a_properties = if a == -field.from_u64(3) {
            EquationA::MinusThree
        } else {
            EquationA::Generic
        };

        Self {
            field,
            a,
            b,
            b3: b.double() + b,
            a_properties,
        }
    }

    /// Right-hand side of the curve equation: `x³ + ax + b`.
    pub(crate) fn rhs(&self, x: &FieldElement) -> FieldElement {
        (x.square() + self.a) * x + self.b
    }

    /// Returns `true` if `4a³ + 27b² = 0`.
    pub(crate) fn is_singular(&self) -> bool {
        let four_a3 = self.field.from_u64(4) * self.a.square() * self.a;
        let twenty_seven_b2 = self.field.from_u64(27) * self.b.square();
        bool::from((four_a3 + twenty_seven_b2).is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::Equation;
    use super::point_arithmetic::EquationA;
    use dynfield::{PrimeField, Uint};

    #[test]
    fn detects_a_minus_three() {
        let field = PrimeField::new(&Uint::from_u64(1009)).unwrap();
        let eq = Equation::new(field, -field.from_u64(3), field.from_u64(7));
        assert_eq!(eq.a_properties, EquationA::MinusThree);

        let eq = Equation::new(field, field.from_u64(2), field.from_u64(7));
        assert_eq!(eq.a_properties, EquationA::Generic);
    }

    #[test]
    fn singular_curves() {
        let field = PrimeField::new(&Uint::from_u64(1009)).unwrap();
        assert!(Equation::new(field, field.zero(), field.zero()).is_singular());
        // y² = x³ - 3x + 2 = (x - 1)²(x + 2)
        assert!(Equation::new(field, -field.from_u64(3), field.from_u64(2)).is_singular());
        assert!(!Equation::new(field, field.zero(), field.from_u64(7)).is_singular());
    }
}
