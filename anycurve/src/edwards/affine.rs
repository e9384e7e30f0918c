use super::Equation;
use crate::{Error, Result};
use alloc::vec::Vec;
use dynfield::{
    ByteOrder, FieldElement, uint_from_bytes, uint_to_bytes,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
};

/// Affine point on a twisted Edwards curve.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AffinePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl AffinePoint {
    pub(crate) fn is_identity(&self, eq: &Equation) -> Choice {
        self.x.is_zero() & self.y.ct_eq(&eq.field.one())
    }

    /// Standard compression; store `y` little-endian and the sign of `x` in the top bit.
    pub(crate) fn to_bytes(&self, eq: &Equation) -> Vec<u8> {
        let mut bytes = alloc::vec![0u8; eq.encoded_len()];
        uint_to_bytes(&self.y.to_uint(), &mut bytes, ByteOrder::LittleEndian);

        if let Some(last) = bytes.last_mut() {
            *last |= self.x.is_odd().unwrap_u8() << 7;
        }

        bytes
    }

    /// Decompress a point, recovering `x` from `y` and the sign bit.
    pub(crate) fn from_bytes(bytes: &[u8], eq: &Equation) -> Result<Self> {
        if bytes.len() != eq.encoded_len() {
            return Err(Error::InvalidEncodingLength);
        }

        let mut y_bytes = bytes.to_vec();
        let last = y_bytes.len() - 1;
        let sign = Choice::from(y_bytes[last] >> 7);
        y_bytes[last] &= 0x7f;

        let y: FieldElement = uint_from_bytes(&y_bytes, ByteOrder::LittleEndian)
            .and_then(|y| Option::from(eq.field.from_uint(&y)))
            .ok_or(Error::InvalidEncoding)?;

        // x² = (1 - y²) / (a - dy²)
        let yy = y.square();
        let numerator = eq.field.one() - yy;
        let denominator = eq.a - eq.d * yy;
        let xx = Option::from(denominator.invert())
            .map(|inv: FieldElement| numerator * inv)
            .ok_or(Error::PointNotOnCurve)?;
        let x = Option::<FieldElement>::from(eq.field.sqrt(&xx)).ok_or(Error::PointNotOnCurve)?;

        if bool::from(x.is_zero() & sign) {
            return Err(Error::InvalidEncoding);
        }

        let x = FieldElement::conditional_select(&-x, &x, x.is_odd().ct_eq(&sign));
        Ok(Self { x, y })
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::AffinePoint;
    use crate::{Error, edwards::Equation};
    use dynfield::{PrimeField, hex_uint, subtle::ConstantTimeEq};
    use hex_literal::hex;

    const BASE_ENCODED: [u8; 32] =
        hex!("5866666666666666666666666666666666666666666666666666666666666666");

    fn ed25519() -> Equation {
        let field = PrimeField::new(&hex_uint(
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed",
        ))
        .unwrap();
        let d = field.reduce(&hex_uint(
            "52036cee2b6ffe738cc740797779e89800700a4d4141d8ab75eb4dca135978a3",
        ));
        Equation::new(field, -field.one(), d)
    }

    #[test]
    fn base_point_encoding() {
        let eq = ed25519();
        let base = AffinePoint::from_bytes(&BASE_ENCODED, &eq).unwrap();
        assert_eq!(
            base.x.to_uint(),
            hex_uint("216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a")
        );
        assert_eq!(base.to_bytes(&eq), BASE_ENCODED);
    }

    #[test]
    fn sign_bit_selects_negation() {
        let eq = ed25519();
        let mut encoded = BASE_ENCODED;
        encoded[31] |= 0x80;
        let negated = AffinePoint::from_bytes(&encoded, &eq).unwrap();
        let base = AffinePoint::from_bytes(&BASE_ENCODED, &eq).unwrap();
        assert!(bool::from(negated.x.ct_eq(&-base.x)));
        assert_eq!(negated.to_bytes(&eq), encoded);
    }

    #[test]
    fn identity_encoding() {
        let eq = ed25519();
        let mut encoded = [0u8; 32];
        encoded[0] = 1;
        let identity = AffinePoint {
            x: eq.field.zero(),
            y: eq.field.one(),
        };
        assert_eq!(identity.to_bytes(&eq), encoded);

        let decoded = AffinePoint::from_bytes(&encoded, &eq).unwrap();
        assert!(bool::from(decoded.is_identity(&eq)));

        // x = 0 has no negative counterpart
        encoded[31] = 0x80;
        assert_eq!(AffinePoint::from_bytes(&encoded, &eq).unwrap_err(), Error::InvalidEncoding);
    }

    #[test]
    fn rejects_malformed() {
        let eq = ed25519();
        assert_eq!(
            AffinePoint::from_bytes(&BASE_ENCODED[..31], &eq).unwrap_err(),
            Error::InvalidEncodingLength
        );
        assert_eq!(AffinePoint::from_bytes(&[], &eq).unwrap_err(), Error::InvalidEncodingLength);

        // y = p is not canonical
        let p = hex!("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
        assert_eq!(AffinePoint::from_bytes(&p, &eq).unwrap_err(), Error::InvalidEncoding);

        // y = 2 is not the y-coordinate of any point
        let mut two = [0u8; 32];
        two[0] = 2;
        assert_eq!(AffinePoint::from_bytes(&two, &eq).unwrap_err(), Error::PointNotOnCurve);
    }
}
