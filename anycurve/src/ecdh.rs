//! Elliptic curve Diffie-Hellman.

use crate::{Error, ProjectivePoint, Result, Scalar, eddsa::ExpandedSecret};
use alloc::vec::Vec;
use dynfield::ByteOrder;

/// Big endian x-coordinate of `d·Q` on a short Weierstrass curve.
pub(crate) fn weierstrass(d: &Scalar, public_key: &ProjectivePoint) -> Result<Vec<u8>> {
    let shared = public_key.multiply_secret(d).to_affine();
    let (x, _) = shared.coordinates().ok_or(Error::IdentityElement)?;
    let field = public_key.curve().field();

    Ok(field.encode(&field.reduce(&x), ByteOrder::BigEndian).to_vec())
}

/// Encoding of `s·Q` on a twisted Edwards curve, computed as `(s / h)·(h·Q)` so that small
/// order components of `Q` are discarded exactly as multiplication by the clamped `s` would.
pub(crate) fn edwards(secret: &ExpandedSecret, public_key: &ProjectivePoint) -> Result<Vec<u8>> {
    let k = secret.cofactor_free_scalar(public_key.curve());
    let shared = public_key.clear_cofactor().multiply_secret(&k);

    if bool::from(shared.is_identity()) {
        return Err(Error::IdentityElement);
    }

    Ok(shared.to_bytes(true))
}

#[cfg(test)]
mod tests {
    use super::{edwards, weierstrass};
    use crate::{CurveParameters, Error, eddsa::ExpandedSecret, named};
    use dynfield::Uint;
    use sha2::Sha512;

    #[test]
    fn weierstrass_commutes() {
        let params = CurveParameters::new(named::secp256r1_definition()).unwrap();
        let g = params.generator();
        let a = params.scalar(&Uint::from_u64(1234)).unwrap();
        let b = params.scalar(&Uint::from_u64(5678)).unwrap();

        let shared_ab = weierstrass(&a, &g.multiply_secret(&b)).unwrap();
        let shared_ba = weierstrass(&b, &g.multiply_secret(&a)).unwrap();
        assert_eq!(shared_ab, shared_ba);
        assert_eq!(shared_ab.len(), 32);
    }

    #[test]
    fn weierstrass_identity_public_key() {
        let params = CurveParameters::new(named::secp256k1_definition()).unwrap();
        let a = params.scalar(&Uint::from_u64(7)).unwrap();
        assert_eq!(
            weierstrass(&a, &params.identity()).unwrap_err(),
            Error::IdentityElement
        );
    }

    #[test]
    fn edwards_commutes() {
        let params = CurveParameters::new(named::ed25519_definition()).unwrap();
        let g = params.generator();
        let a = ExpandedSecret::new::<Sha512>(&params, &[1; 32]).unwrap();
        let b = ExpandedSecret::new::<Sha512>(&params, &[2; 32]).unwrap();

        let a_pub = g.multiply_secret(a.scalar());
        let b_pub = g.multiply_secret(b.scalar());
        assert_eq!(edwards(&a, &b_pub).unwrap(), edwards(&b, &a_pub).unwrap());
    }

    #[test]
    fn edwards_small_order_public_key() {
        let params = CurveParameters::new(named::ed25519_definition()).unwrap();
        let a = ExpandedSecret::new::<Sha512>(&params, &[1; 32]).unwrap();
        assert_eq!(
            edwards(&a, &params.identity()).unwrap_err(),
            Error::IdentityElement
        );
    }
}
