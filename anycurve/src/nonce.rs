//! Deterministic ECDSA nonces (RFC 6979 § 3.2).

use crate::{CurveParameters, HashFunction, Scalar, scalar::bits2int};
use alloc::{vec, vec::Vec};
use dynfield::{
    ByteOrder, Uint,
    subtle::{ConstantTimeEq, ConstantTimeLess},
    uint_to_bytes,
};
use rfc6979::HmacDrbg;
use zeroize::Zeroizing;

/// Stream of candidate nonces `k ∈ [1, n)` for one private key and message digest.
pub(crate) struct Nonces<'a, D: HashFunction> {
    params: &'a CurveParameters,
    drbg: HmacDrbg<D>,
    buf: Zeroizing<Vec<u8>>,
}

impl<'a, D: HashFunction> Nonces<'a, D> {
    /// Seed the HMAC-DRBG with `int2octets(x) || bits2octets(h)`.
    pub(crate) fn new(params: &'a CurveParameters, x: &Scalar, digest: &[u8]) -> Self {
        let qlen = params.order_bits();
        let x = int2octets(&x.to_uint(), qlen);
        let h = int2octets(&params.reduce_scalar(&bits2int(digest, qlen)).to_uint(), qlen);

        Self {
            params,
            drbg: HmacDrbg::new(&x, &h, &[]),
            buf: Zeroizing::new(vec![0; qlen.div_ceil(8)]),
        }
    }

    /// Next candidate which lies in `[1, n)`.
    pub(crate) fn next_nonce(&mut self) -> Scalar {
        let qlen = self.params.order_bits();

        loop {
            self.drbg.fill_bytes(&mut self.buf);
            let k = Zeroizing::new(bits2int(&self.buf, qlen));

            if bool::from(!k.ct_eq(&Uint::ZERO) & k.ct_lt(self.params.order())) {
                return self.params.reduce_scalar(&k);
            }
        }
    }
}

/// Big endian encoding of `x` in `ceil(qlen / 8)` bytes.
fn int2octets(x: &Uint, qlen: usize) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(vec![0; qlen.div_ceil(8)]);
    uint_to_bytes(x, &mut out, ByteOrder::BigEndian);
    out
}
