//! Curve parameter records.

use crate::{
    Error, Result, Scalar, edwards,
    point::{AffinePoint, Element, ProjectivePoint},
    weierstrass,
};
use alloc::sync::Arc;
use dynfield::{ByteOrder, FieldElement, PrimeField, Uint};
use tracing::debug;

/// Literal description of a curve: the configuration data from which a
/// [`CurveParameters`] is built and validated.
///
/// Coefficients and coordinates are integers in `[0, p)`; a negative coefficient is given by
/// its representative modulo `p`, see [`minus`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CurveDefinition {
    /// Name of the curve, e.g. `"secp256k1"`.
    pub name: &'static str,

    /// Curve equation.
    pub shape: CurveShape,

    /// Field modulus `p`.
    pub p: Uint,

    /// Order `n` of the subgroup generated by `G`.
    pub n: Uint,

    /// Cofactor `h`: the curve has `h·n` points.
    pub h: u64,

    /// Generator x-coordinate.
    pub gx: Uint,

    /// Generator y-coordinate.
    pub gy: Uint,
}

/// Curve equation and its coefficients.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CurveShape {
    /// `y² = x³ + ax + b`
    ShortWeierstrass {
        /// `a` coefficient
        a: Uint,
        /// `b` coefficient
        b: Uint,
    },

    /// `ax² + y² = 1 + dx²y²`
    TwistedEdwards {
        /// `a` coefficient
        a: Uint,
        /// `d` coefficient
        d: Uint,
    },
}

/// Curve family of a [`CurveShape`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CurveFamily {
    /// Short Weierstrass curve.
    ShortWeierstrass,

    /// Twisted Edwards curve.
    TwistedEdwards,
}

/// Representative of `-k` modulo `p`, for writing negative coefficients.
pub const fn minus(p: &Uint, k: u64) -> Uint {
    p.wrapping_sub(&Uint::from_u64(k))
}

/// Validated, immutable parameters of one curve.
///
/// Shared behind an [`Arc`] by every point of the curve and by every [`Curve`][`crate::Curve`]
/// instance bound to it.
#[derive(Debug)]
pub struct CurveParameters {
    definition: CurveDefinition,
    field: PrimeField,
    scalars: PrimeField,
    generator: Element,
}

impl CurveParameters {
    /// Validate a [`CurveDefinition`].
    ///
    /// Checks that both moduli define fields, that all coefficients and coordinates are
    /// reduced, that the equation is non-singular, that the generator is a point of order
    /// dividing `n` other than the identity, and the cofactor restrictions of each family:
    /// odd for short Weierstrass curves (the complete formulas require a group of odd order)
    /// and a power of two for twisted Edwards curves (scalar clamping).
    ///
    /// The primality of `p` and `n` is trusted.
    pub fn new(definition: CurveDefinition) -> Result<Arc<Self>> {
        let field = PrimeField::new(&definition.p)
            .map_err(|_| Error::InvalidCurveParameters("p must be an odd modulus of at most 574 bits"))?;
        let scalars = PrimeField::new(&definition.n)
            .map_err(|_| Error::InvalidCurveParameters("n must be an odd modulus of at most 574 bits"))?;

        if definition.h == 0 {
            return Err(Error::InvalidCurveParameters("cofactor must be at least 1"));
        }

        let coefficient = |x: &Uint| {
            Option::<FieldElement>::from(field.from_uint(x))
                .ok_or(Error::InvalidCurveParameters("coefficients must be reduced modulo p"))
        };
        let gx = Option::<FieldElement>::from(field.from_uint(&definition.gx))
            .ok_or(Error::InvalidCurveParameters("generator coordinates must be reduced modulo p"))?;
        let gy = Option::<FieldElement>::from(field.from_uint(&definition.gy))
            .ok_or(Error::InvalidCurveParameters("generator coordinates must be reduced modulo p"))?;

        let generator = match definition.shape {
            CurveShape::ShortWeierstrass { a, b } => {
                let eq = weierstrass::Equation::new(field, coefficient(&a)?, coefficient(&b)?);

                if eq.is_singular() {
                    return Err(Error::InvalidCurveParameters("curve is singular"));
                }

                if definition.h % 2 == 0 {
                    return Err(Error::InvalidCurveParameters(
                        "short Weierstrass curves must have an odd cofactor",
                    ));
                }

                let g = weierstrass::AffinePoint {
                    x: gx,
                    y: gy,
                    infinity: 0,
                };

                if !bool::from(g.is_on_curve(&eq)) {
                    return Err(Error::InvalidCurveParameters("generator is not on the curve"));
                }

                let g = weierstrass::ProjectivePoint::from_affine(&g, &eq);
                Element::Weierstrass(Arc::new(eq), g)
            }
            CurveShape::TwistedEdwards { a, d } => {
                if !definition.h.is_power_of_two() {
                    return Err(Error::InvalidCurveParameters(
                        "twisted Edwards curves must have a power of two cofactor",
                    ));
                }

                let eq = edwards::Equation::new(field, coefficient(&a)?, coefficient(&d)?);

                if eq.is_degenerate() {
                    return Err(Error::InvalidCurveParameters(
                        "a and d must be distinct and non-zero",
                    ));
                }

                if !eq.is_on_curve(&gx, &gy) {
                    return Err(Error::InvalidCurveParameters("generator is not on the curve"));
                }

                let g = edwards::AffinePoint { x: gx, y: gy };
                let g = edwards::ExtendedPoint::from_affine(&g, &eq);
                Element::Edwards(Arc::new(eq), g)
            }
        };

        if bool::from(generator.is_identity()) {
            return Err(Error::InvalidCurveParameters("generator is the identity"));
        }

        if !bool::from(generator.mul_vartime(&definition.n).is_identity()) {
            return Err(Error::InvalidCurveParameters("generator order does not divide n"));
        }

        let params = Self {
            definition,
            field,
            scalars,
            generator,
        };

        debug!(
            curve = params.name(),
            family = ?params.family(),
            field_bits = field.bits(),
            order_bits = scalars.bits(),
            "curve parameters validated"
        );

        Ok(Arc::new(params))
    }

    /// Name of the curve.
    pub fn name(&self) -> &'static str {
        self.definition.name
    }

    /// The definition these parameters were built from.
    pub fn definition(&self) -> &CurveDefinition {
        &self.definition
    }

    /// Curve family.
    pub fn family(&self) -> CurveFamily {
        match self.generator {
            Element::Weierstrass(..) => CurveFamily::ShortWeierstrass,
            Element::Edwards(..) => CurveFamily::TwistedEdwards,
        }
    }

    /// Base field `GF(p)`.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Scalar field `Z/nZ`.
    pub fn scalar_field(&self) -> &PrimeField {
        &self.scalars
    }

    /// Group order `n`.
    pub fn order(&self) -> &Uint {
        self.scalars.modulus()
    }

    /// Cofactor `h`.
    pub fn cofactor(&self) -> u64 {
        self.definition.h
    }

    /// Neutral element.
    pub fn identity(self: &Arc<Self>) -> ProjectivePoint {
        ProjectivePoint::new(self.clone(), self.generator.identity())
    }

    /// Base point `G`.
    pub fn generator(self: &Arc<Self>) -> ProjectivePoint {
        ProjectivePoint::new(self.clone(), self.generator.clone())
    }

    /// Affine base point `G`.
    pub fn generator_affine(self: &Arc<Self>) -> AffinePoint {
        self.generator().to_affine()
    }

    /// Scalar for an integer in `[0, n)`.
    pub fn scalar(&self, k: &Uint) -> Result<Scalar> {
        Option::from(self.scalars.from_uint(k))
            .map(Scalar)
            .ok_or(Error::ScalarOutOfRange)
    }

    /// Scalar for an integer of any size, reduced modulo `n`.
    pub fn reduce_scalar(&self, k: &Uint) -> Scalar {
        Scalar(self.scalars.reduce(k))
    }

    /// Scalar for a bytestring of any length interpreted as an integer and reduced modulo `n`.
    pub fn reduce_scalar_bytes(&self, bytes: &[u8], order: ByteOrder) -> Scalar {
        Scalar(self.scalars.reduce_bytes(bytes, order))
    }

    pub(crate) fn same_curve(&self, other: &Self) -> bool {
        core::ptr::eq(self, other) || self.definition == other.definition
    }

    /// Bits of `n`: the number of scalar bits processed by constant-time multiplication.
    pub(crate) fn order_bits(&self) -> usize {
        self.scalars.bits()
    }

    pub(crate) fn check_scalar_field(&self, k: &Scalar) -> Result<()> {
        if self.scalars.contains(&k.0) {
            Ok(())
        } else {
            Err(Error::TypeMismatch)
        }
    }
}
