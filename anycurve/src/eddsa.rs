//! EdDSA over twisted Edwards curves, following the generic construction of RFC 8032 § 3.
//!
//! With ed25519 and SHA-512 this is exactly Ed25519. Other curves use the same recipe with
//! their own widths: a seed of `ceil(bits(n) / 8)` bytes, points of `ceil((bits(p) + 1) / 8)`
//! bytes, and a signature `R || S` made of two such encodings.

use crate::{
    CurveParameters, Error, HashFunction, ProjectivePoint, Result, Scalar, Signature, hash,
};
use alloc::vec::Vec;
use dynfield::{ByteOrder, Uint, uint_from_bytes, uint_to_bytes};
use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Width in bytes of a secret seed.
pub(crate) fn seed_len(params: &CurveParameters) -> usize {
    params.order_bits().div_ceil(8)
}

/// Width in bytes of an encoded point and of `S`.
pub(crate) fn point_len(params: &CurveParameters) -> usize {
    (params.field().bits() + 1).div_ceil(8)
}

/// Secret scalar and nonce prefix derived from a seed.
pub(crate) struct ExpandedSecret {
    /// Clamped integer `s`, a multiple of the cofactor.
    clamped: Uint,
    /// `s mod n`
    scalar: Scalar,
    prefix: Vec<u8>,
}

impl ExpandedSecret {
    /// Hash and clamp a seed.
    pub(crate) fn new<D: HashFunction>(params: &CurveParameters, seed: &[u8]) -> Result<Self> {
        let len = seed_len(params);

        if seed.len() != len {
            return Err(Error::InvalidPrivateKeyLength);
        }

        let h = Zeroizing::new(hash::digest::<D>(&[seed]).to_vec());

        if h.len() < 2 * len {
            return Err(Error::InvalidCurveParameters(
                "digest output must be at least twice the seed length",
            ));
        }

        let clamped = clamp(
            &uint_from_bytes(&h[..len], ByteOrder::LittleEndian).ok_or(Error::InvalidPrivateKey)?,
            params,
        );
        let scalar = params.reduce_scalar(&clamped);

        if bool::from(scalar.is_zero()) {
            return Err(Error::InvalidPrivateKey);
        }

        Ok(Self {
            clamped,
            scalar,
            prefix: h[len..2 * len].to_vec(),
        })
    }

    /// `s mod n`
    pub(crate) fn scalar(&self) -> &Scalar {
        &self.scalar
    }

    /// `(s / h) mod n`: multiplying a cofactor-cleared point by it equals multiplying the
    /// original point by `s`.
    pub(crate) fn cofactor_free_scalar(&self, params: &CurveParameters) -> Scalar {
        let log2_h = params.cofactor().trailing_zeros();
        params.reduce_scalar(&self.clamped.shr_vartime(log2_h as usize))
    }
}

impl Drop for ExpandedSecret {
    fn drop(&mut self) {
        self.clamped.zeroize();
        self.scalar.zeroize();
        self.prefix.zeroize();
    }
}

impl ZeroizeOnDrop for ExpandedSecret {}

/// Clear the low `log2(h)` bits and every bit at or above `bits(p)`, then set bit
/// `bits(p) - 1`.
fn clamp(s: &Uint, params: &CurveParameters) -> Uint {
    let top = params.field().bits();
    let log2_h = params.cofactor().trailing_zeros() as usize;
    let unused = Uint::BITS - top;

    s.shl_vartime(unused)
        .shr_vartime(unused)
        .shr_vartime(log2_h)
        .shl_vartime(log2_h)
        | Uint::ONE.shl_vartime(top - 1)
}

fn encode_scalar(params: &CurveParameters, k: &Scalar) -> Vec<u8> {
    let mut out = alloc::vec![0; point_len(params)];
    uint_to_bytes(&k.to_uint(), &mut out, ByteOrder::LittleEndian);
    out
}

/// `H(parts) mod n`, reading the digest little endian.
fn challenge<D: HashFunction>(params: &CurveParameters, parts: &[&[u8]]) -> Scalar {
    params.reduce_scalar_bytes(&hash::digest::<D>(parts), ByteOrder::LittleEndian)
}

pub(crate) fn sign<D: HashFunction>(
    generator: &ProjectivePoint,
    secret: &ExpandedSecret,
    msg: &[u8],
) -> Signature {
    let params = generator.curve();
    let public_key = generator.multiply_secret(&secret.scalar).to_bytes(true);

    let r = challenge::<D>(params, &[&secret.prefix, msg]);
    let big_r = generator.multiply_secret(&r).to_bytes(true);
    let k = challenge::<D>(params, &[&big_r, &public_key, msg]);
    let s = r + k * secret.scalar;

    Signature::from_halves(&big_r, &encode_scalar(params, &s))
}

pub(crate) fn verify<D: HashFunction>(
    generator: &ProjectivePoint,
    public_key: &ProjectivePoint,
    msg: &[u8],
    signature: &[u8],
) -> Result<bool> {
    let params = generator.curve();
    let len = point_len(params);

    if signature.len() != 2 * len {
        return Err(Error::InvalidSignatureFormat);
    }

    let (r_bytes, s_bytes) = signature.split_at(len);
    let s = uint_from_bytes(s_bytes, ByteOrder::LittleEndian).ok_or(Error::InvalidSignatureFormat)?;
    let s = params.scalar(&s)?;

    let big_r = match ProjectivePoint::from_bytes(params, r_bytes) {
        Ok(big_r) => big_r,
        Err(_) => {
            trace!("signature rejected: R is not a curve point");
            return Ok(false);
        }
    };

    let k = challenge::<D>(params, &[r_bytes, &public_key.to_bytes(true), msg]);

    // [h](S·B - k·A - R) = O
    let check = ProjectivePoint::lincomb_unsafe(
        generator,
        &s.to_uint(),
        public_key,
        &(-k).to_uint(),
    )?
    .subtract(&big_r)?
    .clear_cofactor();

    Ok(bool::from(check.is_identity()))
}

#[cfg(test)]
mod tests {
    use super::{ExpandedSecret, clamp, sign, verify};
    use crate::{CurveParameters, Error, ProjectivePoint, named};
    use dynfield::{ByteOrder, Uint, hex_uint, uint_from_bytes};
    use hex_literal::hex;
    use sha2::{Sha256, Sha512};

    /// RFC 8032 § 7.1, test 2
    const SEED: [u8; 32] = hex!("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb");
    const PUBLIC_KEY: [u8; 32] =
        hex!("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c");
    const SIGNATURE: [u8; 64] = hex!(
        "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00"
    );

    #[test]
    fn rfc8032_test_2() {
        let params = CurveParameters::new(named::ed25519_definition()).unwrap();
        let g = params.generator();
        let secret = ExpandedSecret::new::<Sha512>(&params, &SEED).unwrap();

        let public_key = g.multiply_secret(secret.scalar());
        assert_eq!(public_key.to_bytes(true), PUBLIC_KEY);

        let signature = sign::<Sha512>(&g, &secret, &[0x72]);
        assert_eq!(signature.as_ref(), SIGNATURE);
        assert!(verify::<Sha512>(&g, &public_key, &[0x72], &SIGNATURE).unwrap());
        assert!(!verify::<Sha512>(&g, &public_key, &[0x73], &SIGNATURE).unwrap());
    }

    #[test]
    fn clamping() {
        let params = CurveParameters::new(named::ed25519_definition()).unwrap();
        let all_ones = uint_from_bytes(&[0xff; 32], ByteOrder::LittleEndian).unwrap();
        assert_eq!(
            clamp(&all_ones, &params),
            hex_uint("7ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff8")
        );

        let clamped = clamp(&Uint::ZERO, &params);
        assert_eq!(clamped, Uint::ONE.shl_vartime(254));
    }

    #[test]
    fn short_digest_is_rejected() {
        let params = CurveParameters::new(named::ed25519_definition()).unwrap();
        assert!(matches!(
            ExpandedSecret::new::<Sha256>(&params, &SEED),
            Err(Error::InvalidCurveParameters(_))
        ));
    }

    #[test]
    fn malformed_signatures() {
        let params = CurveParameters::new(named::ed25519_definition()).unwrap();
        let g = params.generator();
        let public_key = ProjectivePoint::from_bytes(&params, &PUBLIC_KEY).unwrap();

        assert_eq!(
            verify::<Sha512>(&g, &public_key, &[0x72], &SIGNATURE[..63]).unwrap_err(),
            Error::InvalidSignatureFormat
        );

        // S = 2^256 - 1 is not reduced
        let mut malleated = SIGNATURE;
        malleated[32..].copy_from_slice(&[0xff; 32]);
        assert_eq!(
            verify::<Sha512>(&g, &public_key, &[0x72], &malleated).unwrap_err(),
            Error::ScalarOutOfRange
        );

        // R with y = 2 does not decode
        let mut bad_r = SIGNATURE;
        bad_r[..32].copy_from_slice(&[0; 32]);
        bad_r[0] = 2;
        assert!(!verify::<Sha512>(&g, &public_key, &[0x72], &bad_r).unwrap());
    }
}
