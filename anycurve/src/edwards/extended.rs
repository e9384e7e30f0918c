#![allow(non_snake_case)]

use super::{AffinePoint, Equation};
use crate::scalar_mul::GroupLaw;
use dynfield::{
    FieldElement,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
};

/// Point on a twisted Edwards curve in extended coordinates.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ExtendedPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

impl ExtendedPoint {
    /// Identity point `(0, 1)`.
    pub(crate) fn identity(eq: &Equation) -> Self {
        Self {
            X: eq.field.zero(),
            Y: eq.field.one(),
            Z: eq.field.one(),
            T: eq.field.zero(),
        }
    }

    pub(crate) fn from_affine(p: &AffinePoint, eq: &Equation) -> Self {
        Self {
            X: p.x,
            Y: p.y,
            Z: eq.field.one(),
            T: p.x * p.y,
        }
    }

    /// Convert this point to an [`AffinePoint`].
    pub(crate) fn to_affine(&self) -> AffinePoint {
        let INV_Z = self.Z.invert().unwrap_or(self.Z);

        AffinePoint {
            x: self.X * INV_Z,
            y: self.Y * INV_Z,
        }
    }

    pub(crate) fn is_identity(&self) -> Choice {
        self.X.is_zero() & self.Y.ct_eq(&self.Z)
    }

    /// Add two points, `add-2008-hwcd` with a generic `a`.
    pub(crate) fn add(&self, other: &Self, eq: &Equation) -> Self {
        let aXX = eq.a * self.X * other.X; // aX1X2
        let dTT = eq.d * self.T * other.T; // dT1T2
        let ZZ = self.Z * other.Z; // Z1Z2
        let YY = self.Y * other.Y;
        let XY = (self.X * other.Y) + (self.Y * other.X);

        let E = ZZ - dTT;
        let F = ZZ + dTT;
        let G = YY - aXX;

        Self {
            X: XY * E,
            Y: G * F,
            Z: E * F,
            T: G * XY,
        }
    }

    /// Double this point, `dbl-2008-hwcd`.
    pub(crate) fn double(&self, eq: &Equation) -> Self {
        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ2 = self.Z.square().double();
        let aXX = eq.a * XX;
        let E = (self.X + self.Y).square() - XX - YY;
        let G = aXX + YY;
        let F = G - ZZ2;
        let H = aXX - YY;

        Self {
            X: E * F,
            Y: G * H,
            Z: F * G,
            T: E * H,
        }
    }

    pub(crate) fn neg(&self) -> Self {
        Self {
            X: -self.X,
            Y: self.Y,
            Z: self.Z,
            T: -self.T,
        }
    }
}

impl GroupLaw for ExtendedPoint {
    type Equation = Equation;

    fn identity(eq: &Equation) -> Self {
        ExtendedPoint::identity(eq)
    }

    fn add(&self, rhs: &Self, eq: &Equation) -> Self {
        ExtendedPoint::add(self, rhs, eq)
    }

    fn double(&self, eq: &Equation) -> Self {
        ExtendedPoint::double(self, eq)
    }

    fn neg(&self) -> Self {
        ExtendedPoint::neg(self)
    }
}

impl ConditionallySelectable for ExtendedPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

impl ConstantTimeEq for ExtendedPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        let XZ = self.X * other.Z;
        let ZX = self.Z * other.X;

        let YZ = self.Y * other.Z;
        let ZY = self.Z * other.Y;

        (XZ.ct_eq(&ZX)) & (YZ.ct_eq(&ZY))
    }
}

#[cfg(test)]
mod tests {
    use super::ExtendedPoint;
    use crate::edwards::{AffinePoint, Equation};
    use dynfield::{PrimeField, hex_uint, subtle::ConstantTimeEq};

    fn ed25519() -> (Equation, ExtendedPoint) {
        let field = PrimeField::new(&hex_uint(
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed",
        ))
        .unwrap();
        let d = field.reduce(&hex_uint(
            "52036cee2b6ffe738cc740797779e89800700a4d4141d8ab75eb4dca135978a3",
        ));
        let eq = Equation::new(field, -field.one(), d);
        let base = AffinePoint {
            x: field.reduce(&hex_uint(
                "216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a",
            )),
            y: field.reduce(&hex_uint(
                "6666666666666666666666666666666666666666666666666666666666666658",
            )),
        };
        let base = ExtendedPoint::from_affine(&base, &eq);
        (eq, base)
    }

    #[test]
    fn identity_laws() {
        let (eq, b) = ed25519();
        let id = ExtendedPoint::identity(&eq);
        assert!(bool::from(id.double(&eq).is_identity()));
        assert!(bool::from(id.add(&id, &eq).is_identity()));
        assert!(bool::from(id.neg().is_identity()));
        assert!(bool::from(b.add(&id, &eq).ct_eq(&b)));
        assert!(bool::from(b.add(&b.neg(), &eq).is_identity()));
        assert!(!bool::from(b.is_identity()));
    }

    #[test]
    fn double_is_add_to_self() {
        let (eq, b) = ed25519();
        let two_b = b.double(&eq);
        assert!(bool::from(two_b.ct_eq(&b.add(&b, &eq))));

        let four_b = two_b.double(&eq);
        assert!(bool::from(four_b.ct_eq(&two_b.add(&b, &eq).add(&b, &eq))));
    }

    #[test]
    fn results_stay_on_curve() {
        let (eq, b) = ed25519();
        let mut p = b;
        for _ in 0..8 {
            p = p.double(&eq).add(&b, &eq);
            let affine = p.to_affine();
            assert!(eq.is_on_curve(&affine.x, &affine.y));
            // T/Z = xy
            assert!(bool::from((p.T * p.Z).ct_eq(&(p.X * p.Y))));
        }
    }
}
