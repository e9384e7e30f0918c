//! Group elements of a curve with runtime parameters.
//!
//! Each point carries the [`CurveParameters`] of its curve. Operations combining two points
//! check that both belong to the same curve and return [`Error::TypeMismatch`] otherwise.

use crate::{CurveParameters, Error, Result, Scalar, edwards, scalar_mul, weierstrass};
use alloc::{sync::Arc, vec::Vec};
use core::{fmt, ops::Neg};
use dynfield::{
    FieldElement, PrimeField, Uint,
    subtle::{Choice, ConstantTimeEq, ConstantTimeLess},
};

/// Point in the internal coordinates of its curve family, with the curve equation.
#[derive(Clone, Debug)]
pub(crate) enum Element {
    Weierstrass(Arc<weierstrass::Equation>, weierstrass::ProjectivePoint),
    Edwards(Arc<edwards::Equation>, edwards::ExtendedPoint),
}

impl Element {
    pub(crate) fn identity(&self) -> Self {
        match self {
            Self::Weierstrass(eq, _) => {
                Self::Weierstrass(eq.clone(), weierstrass::ProjectivePoint::identity(eq))
            }
            Self::Edwards(eq, _) => Self::Edwards(eq.clone(), edwards::ExtendedPoint::identity(eq)),
        }
    }

    pub(crate) fn is_identity(&self) -> Choice {
        match self {
            Self::Weierstrass(_, p) => p.is_identity(),
            Self::Edwards(_, p) => p.is_identity(),
        }
    }

    pub(crate) fn add(&self, rhs: &Self) -> Result<Self> {
        match (self, rhs) {
            (Self::Weierstrass(eq, a), Self::Weierstrass(_, b)) => {
                Ok(Self::Weierstrass(eq.clone(), scalar_mul::GroupLaw::add(a, b, &**eq)))
            }
            (Self::Edwards(eq, a), Self::Edwards(_, b)) => {
                Ok(Self::Edwards(eq.clone(), a.add(b, eq)))
            }
            _ => Err(Error::TypeMismatch),
        }
    }

    pub(crate) fn double(&self) -> Self {
        match self {
            Self::Weierstrass(eq, p) => {
                Self::Weierstrass(eq.clone(), scalar_mul::GroupLaw::double(p, &**eq))
            }
            Self::Edwards(eq, p) => Self::Edwards(eq.clone(), p.double(eq)),
        }
    }

    pub(crate) fn neg(&self) -> Self {
        match self {
            Self::Weierstrass(eq, p) => Self::Weierstrass(eq.clone(), p.neg()),
            Self::Edwards(eq, p) => Self::Edwards(eq.clone(), p.neg()),
        }
    }

    /// Constant-time multiplication processing the low `bits` bits of `k`.
    pub(crate) fn mul(&self, k: &Uint, bits: usize) -> Self {
        match self {
            Self::Weierstrass(eq, p) => {
                Self::Weierstrass(eq.clone(), scalar_mul::mul(p, k, bits, &**eq))
            }
            Self::Edwards(eq, p) => Self::Edwards(eq.clone(), scalar_mul::mul(p, k, bits, &**eq)),
        }
    }

    pub(crate) fn mul_vartime(&self, k: &Uint) -> Self {
        match self {
            Self::Weierstrass(eq, p) => {
                Self::Weierstrass(eq.clone(), scalar_mul::mul_vartime(p, k, &**eq))
            }
            Self::Edwards(eq, p) => Self::Edwards(eq.clone(), scalar_mul::mul_vartime(p, k, &**eq)),
        }
    }

    /// `a·P + b·Q` in variable time.
    pub(crate) fn lincomb_vartime(p: &Self, a: &Uint, q: &Self, b: &Uint) -> Result<Self> {
        match (p, q) {
            (Self::Weierstrass(eq, p), Self::Weierstrass(_, q)) => Ok(Self::Weierstrass(
                eq.clone(),
                scalar_mul::lincomb_vartime(&[(*p, *a), (*q, *b)], &**eq),
            )),
            (Self::Edwards(eq, p), Self::Edwards(_, q)) => Ok(Self::Edwards(
                eq.clone(),
                scalar_mul::lincomb_vartime(&[(*p, *a), (*q, *b)], &**eq),
            )),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub(crate) fn ct_eq(&self, rhs: &Self) -> Result<Choice> {
        match (self, rhs) {
            (Self::Weierstrass(_, a), Self::Weierstrass(_, b)) => Ok(a.ct_eq(b)),
            (Self::Edwards(_, a), Self::Edwards(_, b)) => Ok(a.ct_eq(b)),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub(crate) fn to_affine(&self) -> AffineElement {
        match self {
            Self::Weierstrass(eq, p) => AffineElement::Weierstrass(eq.clone(), p.to_affine(eq)),
            Self::Edwards(eq, p) => AffineElement::Edwards(eq.clone(), p.to_affine()),
        }
    }
}

/// Point in affine coordinates, with the curve equation.
#[derive(Clone, Debug)]
pub(crate) enum AffineElement {
    Weierstrass(Arc<weierstrass::Equation>, weierstrass::AffinePoint),
    Edwards(Arc<edwards::Equation>, edwards::AffinePoint),
}

impl AffineElement {
    /// Parse the canonical encoding of a point on the curve of `template`.
    fn from_bytes(template: &Element, bytes: &[u8]) -> Result<Self> {
        match template {
            Element::Weierstrass(eq, _) => Ok(Self::Weierstrass(
                eq.clone(),
                weierstrass::AffinePoint::from_bytes(bytes, eq)?,
            )),
            Element::Edwards(eq, _) => Ok(Self::Edwards(
                eq.clone(),
                edwards::AffinePoint::from_bytes(bytes, eq)?,
            )),
        }
    }

    fn from_coordinates(template: &Element, x: &Uint, y: &Uint) -> Result<Self> {
        let coordinate = |field: &PrimeField, c: &Uint| {
            Option::<FieldElement>::from(field.from_uint(c)).ok_or(Error::InvalidEncoding)
        };

        match template {
            Element::Weierstrass(eq, _) => {
                let point = weierstrass::AffinePoint {
                    x: coordinate(&eq.field, x)?,
                    y: coordinate(&eq.field, y)?,
                    infinity: 0,
                };

                if !bool::from(point.is_on_curve(eq)) {
                    return Err(Error::PointNotOnCurve);
                }

                Ok(Self::Weierstrass(eq.clone(), point))
            }
            Element::Edwards(eq, _) => {
                let point = edwards::AffinePoint {
                    x: coordinate(&eq.field, x)?,
                    y: coordinate(&eq.field, y)?,
                };

                if !eq.is_on_curve(&point.x, &point.y) {
                    return Err(Error::PointNotOnCurve);
                }

                Ok(Self::Edwards(eq.clone(), point))
            }
        }
    }

    fn to_projective(&self) -> Element {
        match self {
            Self::Weierstrass(eq, p) => Element::Weierstrass(
                eq.clone(),
                weierstrass::ProjectivePoint::from_affine(p, eq),
            ),
            Self::Edwards(eq, p) => {
                Element::Edwards(eq.clone(), edwards::ExtendedPoint::from_affine(p, eq))
            }
        }
    }

    fn is_identity(&self) -> Choice {
        match self {
            Self::Weierstrass(_, p) => p.is_identity(),
            Self::Edwards(eq, p) => p.is_identity(eq),
        }
    }

    fn to_bytes(&self, compress: bool) -> Vec<u8> {
        match self {
            Self::Weierstrass(eq, p) => p.to_bytes(compress, eq),
            Self::Edwards(eq, p) => p.to_bytes(eq),
        }
    }

    fn coordinates(&self) -> Option<(Uint, Uint)> {
        match self {
            Self::Weierstrass(_, p) if bool::from(p.is_identity()) => None,
            Self::Weierstrass(_, p) => Some((p.x.to_uint(), p.y.to_uint())),
            Self::Edwards(_, p) => Some((p.x.to_uint(), p.y.to_uint())),
        }
    }

    fn ct_eq(&self, rhs: &Self) -> Result<Choice> {
        match (self, rhs) {
            (Self::Weierstrass(_, a), Self::Weierstrass(_, b)) => Ok(a.ct_eq(b)),
            (Self::Edwards(_, a), Self::Edwards(_, b)) => Ok(a.ct_eq(b)),
            _ => Err(Error::TypeMismatch),
        }
    }
}

/// Point on a curve in the inversion-free coordinates of its family: projective `(X : Y : Z)`
/// for short Weierstrass curves, extended `(X : Y : Z : T)` for twisted Edwards curves.
///
/// Obtained from [`CurveParameters::identity`], [`CurveParameters::generator`], decoding, or
/// group operations on other points.
#[derive(Clone)]
pub struct ProjectivePoint {
    curve: Arc<CurveParameters>,
    element: Element,
}

impl ProjectivePoint {
    pub(crate) fn new(curve: Arc<CurveParameters>, element: Element) -> Self {
        Self { curve, element }
    }

    fn with(&self, element: Element) -> Self {
        Self::new(self.curve.clone(), element)
    }

    fn check_curve(&self, other: &Self) -> Result<()> {
        if self.curve.same_curve(&other.curve) {
            Ok(())
        } else {
            Err(Error::TypeMismatch)
        }
    }

    pub(crate) fn element(&self) -> &Element {
        &self.element
    }

    /// Parameters of the curve this point lies on.
    pub fn curve(&self) -> &Arc<CurveParameters> {
        &self.curve
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> Choice {
        self.element.is_identity()
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_curve(other)?;
        Ok(self.with(self.element.add(&other.element)?))
    }

    /// Returns `self - other`.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_curve(other)?;
        Ok(self.with(self.element.add(&other.element.neg())?))
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        self.with(self.element.double())
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Self {
        self.with(self.element.neg())
    }

    /// Compare two points of the same curve.
    pub fn equals(&self, other: &Self) -> Result<bool> {
        self.check_curve(other)?;
        Ok(bool::from(self.element.ct_eq(&other.element)?))
    }

    /// Multiply by a secret scalar `k ∈ [1, n)`.
    ///
    /// Runs in constant time with respect to `k`: every call on a given curve performs the same
    /// sequence of field operations and table accesses.
    pub fn multiply(&self, k: &Uint) -> Result<Self> {
        let in_range = !k.ct_eq(&Uint::ZERO) & k.ct_lt(self.curve.order());

        if !bool::from(in_range) {
            return Err(Error::ScalarOutOfRange);
        }

        Ok(self.with(self.element.mul(k, self.curve.order_bits())))
    }

    /// Multiply by a non-zero [`Scalar`] of this curve in constant time.
    pub fn multiply_scalar(&self, k: &Scalar) -> Result<Self> {
        self.curve.check_scalar_field(k)?;

        if bool::from(k.is_zero()) {
            return Err(Error::ScalarOutOfRange);
        }

        Ok(self.multiply_secret(k))
    }

    /// Constant-time multiplication by a scalar already known to belong to this curve.
    pub(crate) fn multiply_secret(&self, k: &Scalar) -> Self {
        self.with(self.element.mul(&k.to_uint(), self.curve.order_bits()))
    }

    /// Multiply by a public scalar `k ∈ [0, n)`.
    ///
    /// Running time depends on `k`; never use it with secret scalars.
    pub fn multiply_unsafe(&self, k: &Uint) -> Result<Self> {
        if k >= self.curve.order() {
            return Err(Error::ScalarOutOfRange);
        }

        Ok(self.with(self.element.mul_vartime(k)))
    }

    /// Compute `a·P + b·Q` for public scalars `a, b ∈ [0, n)` in variable time.
    pub fn lincomb_unsafe(p: &Self, a: &Uint, q: &Self, b: &Uint) -> Result<Self> {
        p.check_curve(q)?;

        if a >= p.curve.order() || b >= p.curve.order() {
            return Err(Error::ScalarOutOfRange);
        }

        Ok(p.with(Element::lincomb_vartime(&p.element, a, &q.element, b)?))
    }

    /// Multiply by the cofactor, mapping the point into the prime order subgroup.
    pub fn clear_cofactor(&self) -> Self {
        self.with(self.element.mul_vartime(&Uint::from_u64(self.curve.cofactor())))
    }

    /// Is this point in the subgroup of order `n`?
    pub fn is_torsion_free(&self) -> Choice {
        self.element.mul_vartime(self.curve.order()).is_identity()
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self) -> AffinePoint {
        AffinePoint {
            curve: self.curve.clone(),
            element: self.element.to_affine(),
        }
    }

    /// Convert from affine coordinates.
    pub fn from_affine(p: &AffinePoint) -> Self {
        Self::new(p.curve.clone(), p.element.to_projective())
    }

    /// Canonical encoding: SEC1 for short Weierstrass curves, where `compress` selects the
    /// compressed form, and the RFC 8032 style `y || sign(x)` for twisted Edwards curves,
    /// where it is ignored.
    pub fn to_bytes(&self, compress: bool) -> Vec<u8> {
        self.to_affine().to_bytes(compress)
    }

    /// Decode a point from its canonical encoding.
    pub fn from_bytes(curve: &Arc<CurveParameters>, bytes: &[u8]) -> Result<Self> {
        AffinePoint::from_bytes(curve, bytes).map(|p| Self::from_affine(&p))
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other).unwrap_or(false)
    }
}

impl Eq for ProjectivePoint {}

impl Neg for ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        self.negate()
    }
}

impl Neg for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        self.negate()
    }
}

impl From<AffinePoint> for ProjectivePoint {
    fn from(p: AffinePoint) -> Self {
        Self::from_affine(&p)
    }
}

impl From<&AffinePoint> for ProjectivePoint {
    fn from(p: &AffinePoint) -> Self {
        Self::from_affine(p)
    }
}

impl fmt::Debug for ProjectivePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProjectivePoint({:?})", self.to_affine())
    }
}

/// Point on a curve in affine coordinates `(x, y)`.
#[derive(Clone)]
pub struct AffinePoint {
    curve: Arc<CurveParameters>,
    element: AffineElement,
}

impl AffinePoint {
    /// Neutral element of `curve`.
    pub fn identity(curve: &Arc<CurveParameters>) -> Self {
        curve.identity().to_affine()
    }

    /// Point with the given coordinates, which must be reduced and satisfy the curve equation.
    pub fn from_coordinates(curve: &Arc<CurveParameters>, x: &Uint, y: &Uint) -> Result<Self> {
        let element = AffineElement::from_coordinates(curve.generator().element(), x, y)?;
        Ok(Self {
            curve: curve.clone(),
            element,
        })
    }

    /// Decode a point from its canonical encoding.
    ///
    /// Fails with [`Error::InvalidEncodingLength`] if the length matches no encoding of the
    /// curve, [`Error::InvalidEncoding`] for an unknown tag or an unreduced coordinate, and
    /// [`Error::PointNotOnCurve`] if no curve point has the decoded coordinates.
    pub fn from_bytes(curve: &Arc<CurveParameters>, bytes: &[u8]) -> Result<Self> {
        let element = AffineElement::from_bytes(curve.generator().element(), bytes)?;
        Ok(Self {
            curve: curve.clone(),
            element,
        })
    }

    /// Parameters of the curve this point lies on.
    pub fn curve(&self) -> &Arc<CurveParameters> {
        &self.curve
    }

    /// `(x, y)`, or `None` for the point at infinity of a short Weierstrass curve.
    pub fn coordinates(&self) -> Option<(Uint, Uint)> {
        self.element.coordinates()
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> Choice {
        self.element.is_identity()
    }

    /// Canonical encoding, see [`ProjectivePoint::to_bytes`].
    pub fn to_bytes(&self, compress: bool) -> Vec<u8> {
        self.element.to_bytes(compress)
    }

    /// Compare two points of the same curve.
    pub fn equals(&self, other: &Self) -> Result<bool> {
        if !self.curve.same_curve(&other.curve) {
            return Err(Error::TypeMismatch);
        }

        Ok(bool::from(self.element.ct_eq(&other.element)?))
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other).unwrap_or(false)
    }
}

impl Eq for AffinePoint {}

impl From<ProjectivePoint> for AffinePoint {
    fn from(p: ProjectivePoint) -> Self {
        p.to_affine()
    }
}

impl From<&ProjectivePoint> for AffinePoint {
    fn from(p: &ProjectivePoint) -> Self {
        p.to_affine()
    }
}

impl fmt::Debug for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coordinates() {
            Some((x, y)) => write!(
                f,
                "AffinePoint({}, x: 0x{:x}, y: 0x{:x})",
                self.curve.name(),
                x,
                y
            ),
            None => write!(f, "AffinePoint({}, identity)", self.curve.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{CurveParameters, Error, ProjectivePoint, named};
    use dynfield::Uint;

    #[test]
    fn weierstrass_identity_encoding() {
        let curve = CurveParameters::new(named::secp256r1_definition()).unwrap();
        let identity = curve.identity();
        let bytes = identity.to_bytes(true);
        assert_eq!(bytes, [0u8; 33]);
        assert_eq!(identity.to_affine().coordinates(), None);

        let decoded = ProjectivePoint::from_bytes(&curve, &bytes).unwrap();
        assert!(bool::from(decoded.is_identity()));
    }

    #[test]
    fn edwards_identity_coordinates() {
        let curve = CurveParameters::new(named::ed25519_definition()).unwrap();
        let identity = curve.identity().to_affine();
        assert_eq!(identity.coordinates(), Some((Uint::ZERO, Uint::ONE)));
    }

    #[test]
    fn multiply_range() {
        let curve = CurveParameters::new(named::secp256k1_definition()).unwrap();
        let g = curve.generator();
        let n = *curve.order();

        assert_eq!(g.multiply(&Uint::ZERO).unwrap_err(), Error::ScalarOutOfRange);
        assert_eq!(g.multiply(&n).unwrap_err(), Error::ScalarOutOfRange);
        assert_eq!(g.multiply_unsafe(&n).unwrap_err(), Error::ScalarOutOfRange);
        assert!(bool::from(g.multiply_unsafe(&Uint::ZERO).unwrap().is_identity()));
        assert_eq!(g.multiply(&Uint::ONE).unwrap(), g);
    }

    #[test]
    fn scalar_from_other_curve() {
        let k1 = CurveParameters::new(named::secp256k1_definition()).unwrap();
        let p256 = CurveParameters::new(named::secp256r1_definition()).unwrap();
        let k = p256.scalar(&Uint::from_u64(3)).unwrap();
        assert_eq!(
            k1.generator().multiply_scalar(&k).unwrap_err(),
            Error::TypeMismatch
        );
    }

    #[test]
    fn from_coordinates() {
        let curve = CurveParameters::new(named::secp256k1_definition()).unwrap();
        let definition = curve.definition();
        let g = crate::AffinePoint::from_coordinates(&curve, &definition.gx, &definition.gy)
            .unwrap();
        assert_eq!(ProjectivePoint::from(&g), curve.generator());

        assert_eq!(
            crate::AffinePoint::from_coordinates(&curve, &definition.gx, &Uint::ONE).unwrap_err(),
            Error::PointNotOnCurve
        );
        assert_eq!(
            crate::AffinePoint::from_coordinates(&curve, &definition.p, &Uint::ONE).unwrap_err(),
            Error::InvalidEncoding
        );
    }

    #[test]
    fn torsion() {
        let curve = CurveParameters::new(named::ed25519_definition()).unwrap();
        assert!(bool::from(curve.generator().is_torsion_free()));

        // (0, -1) has order two
        let p = curve.field().modulus().wrapping_sub(&Uint::ONE);
        let two_torsion = crate::AffinePoint::from_coordinates(&curve, &Uint::ZERO, &p).unwrap();
        let two_torsion = ProjectivePoint::from(two_torsion);
        assert!(!bool::from(two_torsion.is_torsion_free()));
        assert!(bool::from(two_torsion.clear_cofactor().is_identity()));
    }
}
