//! Hash function bound to a curve instance.

use crate::{Error, Result};
use digest::{Digest, FixedOutputReset, Output, core_api::BlockSizeUser};
use hmac::{Mac, SimpleHmac, digest::KeyInit};

/// Hash function usable by a [`Curve`][`crate::Curve`]: a fixed-output digest with a known
/// block size, from which HMAC and the RFC 6979 nonce generator are built.
///
/// Implemented for every such type, e.g. `sha2::Sha256` or `sha3::Sha3_256`.
pub trait HashFunction: Digest + BlockSizeUser + FixedOutputReset {}

impl<D> HashFunction for D where D: Digest + BlockSizeUser + FixedOutputReset {}

/// Digest of the concatenation of `messages`.
pub(crate) fn digest<D: HashFunction>(messages: &[&[u8]]) -> Output<D> {
    messages
        .iter()
        .fold(D::new(), |hasher, msg| hasher.chain_update(msg))
        .finalize()
}

/// HMAC of the concatenation of `messages` under `key`.
pub(crate) fn hmac<D: HashFunction>(key: &[u8], messages: &[&[u8]]) -> Result<Output<D>> {
    let mut mac =
        <SimpleHmac<D> as KeyInit>::new_from_slice(key).map_err(|_| Error::InvalidMacKey)?;

    for msg in messages {
        mac.update(msg);
    }

    Ok(mac.finalize().into_bytes())
}
