//! Projective curve points.

use super::{AffinePoint, Equation};
use crate::scalar_mul::GroupLaw;
use dynfield::{
    FieldElement,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
};

/// Point on a Weierstrass curve in projective coordinates.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl ProjectivePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub(crate) fn identity(eq: &Equation) -> Self {
        Self {
            x: eq.field.zero(),
            y: eq.field.one(),
            z: eq.field.zero(),
        }
    }

    /// Returns the affine representation of this point, or the identity.
    pub(crate) fn to_affine(&self, eq: &Equation) -> AffinePoint {
        let zinv = self.z.invert().unwrap_or(eq.field.zero());
        let affine = AffinePoint {
            x: self.x * zinv,
            y: self.y * zinv,
            infinity: 0,
        };

        AffinePoint::conditional_select(&affine, &AffinePoint::identity(eq), self.is_identity())
    }

    /// Lift an affine point into projective coordinates.
    pub(crate) fn from_affine(p: &AffinePoint, eq: &Equation) -> Self {
        let projective = Self {
            x: p.x,
            y: p.y,
            z: eq.field.one(),
        };

        Self::conditional_select(&projective, &Self::identity(eq), p.is_identity())
    }

    /// Is this point the identity point?
    pub(crate) fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Returns `-self`.
    pub(crate) fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl GroupLaw for ProjectivePoint {
    type Equation = Equation;

    fn identity(eq: &Equation) -> Self {
        ProjectivePoint::identity(eq)
    }

    fn add(&self, rhs: &Self, eq: &Equation) -> Self {
        eq.a_properties.add(self, rhs, eq)
    }

    fn double(&self, eq: &Equation) -> Self {
        eq.a_properties.double(self, eq)
    }

    fn neg(&self) -> Self {
        ProjectivePoint::neg(self)
    }
}

impl ConditionallySelectable for ProjectivePoint {
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ConstantTimeEq for ProjectivePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        // x1 * z2 == x2 * z1 && y1 * z2 == y2 * z1
        let x1 = self.x * other.z;
        let x2 = other.x * self.z;
        let y1 = self.y * other.z;
        let y2 = other.y * self.z;

        x1.ct_eq(&x2) & y1.ct_eq(&y2)
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectivePoint;
    use crate::{scalar_mul::GroupLaw, weierstrass::Equation};
    use dynfield::{PrimeField, Uint, hex_uint, subtle::ConstantTimeEq};

    /// secp256k1: exercises the generic formulas.
    fn k256() -> (Equation, ProjectivePoint) {
        let field = PrimeField::new(&hex_uint(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        ))
        .unwrap();
        let eq = Equation::new(field, field.zero(), field.from_u64(7));
        let g = ProjectivePoint {
            x: field.reduce(&hex_uint(
                "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            )),
            y: field.reduce(&hex_uint(
                "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
            )),
            z: field.one(),
        };
        (eq, g)
    }

    /// P-256: exercises the `a = -3` formulas.
    fn p256() -> (Equation, ProjectivePoint) {
        let p = hex_uint("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
        let field = PrimeField::new(&p).unwrap();
        let eq = Equation::new(
            field,
            field.reduce(&p.wrapping_sub(&Uint::from_u64(3))),
            field.reduce(&hex_uint(
                "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
            )),
        );
        let g = ProjectivePoint {
            x: field.reduce(&hex_uint(
                "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
            )),
            y: field.reduce(&hex_uint(
                "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
            )),
            z: field.one(),
        };
        (eq, g)
    }

    #[test]
    fn identity_laws() {
        for (eq, g) in [k256(), p256()] {
            let id = ProjectivePoint::identity(&eq);
            assert!(bool::from(GroupLaw::double(&id, &eq).is_identity()));
            assert!(bool::from(GroupLaw::add(&id, &id, &eq).is_identity()));
            assert!(bool::from(GroupLaw::add(&g, &id, &eq).ct_eq(&g)));
            assert!(bool::from(GroupLaw::add(&g, &g.neg(), &eq).is_identity()));
        }
    }

    #[test]
    fn double_is_add_to_self() {
        for (eq, g) in [k256(), p256()] {
            let two_g = GroupLaw::double(&g, &eq);
            assert!(bool::from(two_g.ct_eq(&GroupLaw::add(&g, &g, &eq))));

            let three_g = GroupLaw::add(&two_g, &g, &eq);
            assert!(bool::from(three_g.ct_eq(&GroupLaw::add(&g, &two_g, &eq))));
        }
    }

    #[test]
    fn affine_round_trip() {
        for (eq, g) in [k256(), p256()] {
            let four_g = GroupLaw::double(&GroupLaw::double(&g, &eq), &eq);
            let affine = four_g.to_affine(&eq);
            assert!(bool::from(affine.is_on_curve(&eq)));
            assert!(bool::from(ProjectivePoint::from_affine(&affine, &eq).ct_eq(&four_g)));

            let identity = ProjectivePoint::identity(&eq).to_affine(&eq);
            assert!(bool::from(identity.is_identity()));
        }
    }
}
