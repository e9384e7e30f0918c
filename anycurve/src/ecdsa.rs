//! ECDSA over short Weierstrass curves with RFC 6979 deterministic nonces.
//!
//! Signatures are `r || s`, each a big endian integer as wide as the group order. `s` is not
//! normalized to the lower half of the scalar field.

use crate::{
    CurveParameters, Error, HashFunction, ProjectivePoint, Result, Scalar, Signature, hash,
    nonce::Nonces, scalar::bits2int,
};
use alloc::vec::Vec;
use dynfield::{ByteOrder, Uint, uint_from_bytes, uint_to_bytes};
use tracing::trace;

/// Width in bytes of a private key and of each signature half.
pub(crate) fn scalar_len(params: &CurveParameters) -> usize {
    params.order_bits().div_ceil(8)
}

/// Parse a big endian private key in `[1, n)`.
pub(crate) fn secret_scalar(params: &CurveParameters, bytes: &[u8]) -> Result<Scalar> {
    if bytes.len() != scalar_len(params) {
        return Err(Error::InvalidPrivateKeyLength);
    }

    let d = uint_from_bytes(bytes, ByteOrder::BigEndian).ok_or(Error::InvalidPrivateKeyLength)?;
    let d = params.scalar(&d).map_err(|_| Error::InvalidPrivateKey)?;

    if bool::from(d.is_zero()) {
        return Err(Error::InvalidPrivateKey);
    }

    Ok(d)
}

/// Message representative `bits2int(H(m)) mod n`.
fn message_scalar(params: &CurveParameters, digest: &[u8]) -> Scalar {
    params.reduce_scalar(&bits2int(digest, params.order_bits()))
}

fn scalar_bytes(params: &CurveParameters, k: &Scalar) -> Vec<u8> {
    let mut out = alloc::vec![0; scalar_len(params)];
    uint_to_bytes(&k.to_uint(), &mut out, ByteOrder::BigEndian);
    out
}

pub(crate) fn sign<D: HashFunction>(
    generator: &ProjectivePoint,
    d: &Scalar,
    msg: &[u8],
) -> Result<Signature> {
    let params = generator.curve();
    let digest = hash::digest::<D>(&[msg]);
    let z = message_scalar(params, &digest);
    let mut nonces = Nonces::<D>::new(params, d, &digest);

    loop {
        let k = nonces.next_nonce();
        let big_r = generator.multiply_secret(&k).to_affine();

        let Some((x, _)) = big_r.coordinates() else {
            continue;
        };

        let r = params.reduce_scalar(&x);

        if bool::from(r.is_zero()) {
            continue;
        }

        let s = k.invert()? * (z + r * d);

        if bool::from(s.is_zero()) {
            continue;
        }

        return Ok(Signature::from_halves(
            &scalar_bytes(params, &r),
            &scalar_bytes(params, &s),
        ));
    }
}

pub(crate) fn verify<D: HashFunction>(
    generator: &ProjectivePoint,
    public_key: &ProjectivePoint,
    msg: &[u8],
    signature: &[u8],
) -> Result<bool> {
    let params = generator.curve();
    let len = scalar_len(params);

    if signature.len() != 2 * len {
        return Err(Error::InvalidSignatureFormat);
    }

    let (r, s) = signature.split_at(len);
    let r = decode_nonzero(params, r)?;
    let s = decode_nonzero(params, s)?;

    let z = message_scalar(params, &hash::digest::<D>(&[msg]));
    let s_inv = s.invert()?;
    let u1 = z * s_inv;
    let u2 = r * s_inv;

    let big_r = ProjectivePoint::lincomb_unsafe(
        generator,
        &u1.to_uint(),
        public_key,
        &u2.to_uint(),
    )?;

    match big_r.to_affine().coordinates() {
        Some((x, _)) => Ok(params.reduce_scalar(&x) == r),
        None => {
            trace!("signature rejected: u1·G + u2·Q is the identity");
            Ok(false)
        }
    }
}

/// Decode a signature half, which must be in `[1, n)`.
fn decode_nonzero(params: &CurveParameters, bytes: &[u8]) -> Result<Scalar> {
    let k: Uint = uint_from_bytes(bytes, ByteOrder::BigEndian).ok_or(Error::InvalidSignatureFormat)?;
    let k = params.scalar(&k)?;

    if bool::from(k.is_zero()) {
        return Err(Error::ScalarOutOfRange);
    }

    Ok(k)
}

#[cfg(test)]
mod tests {
    use super::{secret_scalar, sign, verify};
    use crate::{CurveParameters, Error, named};
    use dynfield::{Uint, hex_uint};
    use hex_literal::hex;
    use sha2::Sha256;

    /// RFC 6979 A.2.5, P-256 with SHA-256, message "sample"
    #[test]
    fn p256_sample() {
        let params = CurveParameters::new(named::secp256r1_definition()).unwrap();
        let g = params.generator();
        let d = secret_scalar(
            &params,
            &hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721"),
        )
        .unwrap();

        let signature = sign::<Sha256>(&g, &d, b"sample").unwrap();
        assert_eq!(
            signature.r_bytes(),
            hex!("efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716")
        );
        assert_eq!(
            signature.s_bytes(),
            hex!("f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8")
        );

        let q = g.multiply_secret(&d);
        assert!(verify::<Sha256>(&g, &q, b"sample", signature.as_ref()).unwrap());
        assert!(!verify::<Sha256>(&g, &q, b"test", signature.as_ref()).unwrap());
    }

    #[test]
    fn private_key_range() {
        let params = CurveParameters::new(named::secp256k1_definition()).unwrap();
        assert_eq!(secret_scalar(&params, &[0; 32]).unwrap_err(), Error::InvalidPrivateKey);
        assert_eq!(secret_scalar(&params, &[0xff; 32]).unwrap_err(), Error::InvalidPrivateKey);
        assert_eq!(secret_scalar(&params, &[1; 31]).unwrap_err(), Error::InvalidPrivateKeyLength);

        let mut one = [0; 32];
        one[31] = 1;
        assert_eq!(secret_scalar(&params, &one).unwrap().to_uint(), Uint::ONE);
    }

    #[test]
    fn rejects_out_of_range_halves() {
        let params = CurveParameters::new(named::secp256k1_definition()).unwrap();
        let g = params.generator();

        let zero_r = [[0u8; 32], [1u8; 32]].concat();
        assert_eq!(
            verify::<Sha256>(&g, &g, b"msg", &zero_r).unwrap_err(),
            Error::ScalarOutOfRange
        );

        let mut n_s = [1u8; 64].to_vec();
        let n = hex_uint("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
        dynfield::uint_to_bytes(&n, &mut n_s[32..], dynfield::ByteOrder::BigEndian);
        assert_eq!(
            verify::<Sha256>(&g, &g, b"msg", &n_s).unwrap_err(),
            Error::ScalarOutOfRange
        );

        assert_eq!(
            verify::<Sha256>(&g, &g, b"msg", &[1u8; 63]).unwrap_err(),
            Error::InvalidSignatureFormat
        );
    }
}
