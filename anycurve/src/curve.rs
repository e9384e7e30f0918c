//! Curve instances: parameters bound to a hash function.

use crate::{
    CurveDefinition, CurveFamily, CurveParameters, Error, HashFunction, ProjectivePoint, Result,
    Signature, ecdh, ecdsa, eddsa, hash,
};
use alloc::{sync::Arc, vec, vec::Vec};
use core::{fmt, marker::PhantomData};
use digest::Output;
use dynfield::{ByteOrder, uint_from_bytes};
use rand_core::CryptoRngCore;
use tracing::{debug, instrument};
use zeroize::Zeroizing;

/// Create a curve instance from its definition and a hash function.
///
/// Short Weierstrass curves sign with ECDSA and derive nonces with RFC 6979 over `D`; twisted
/// Edwards curves sign with EdDSA, which needs a digest at least twice as wide as a private key.
pub fn create_curve<D: HashFunction>(definition: CurveDefinition) -> Result<Curve<D>> {
    Curve::from_parameters(CurveParameters::new(definition)?)
}

/// A curve bound to a hash function `D`: the public surface for key generation, signatures
/// and key agreement.
///
/// Instances are immutable and cheap to clone. [`Curve::create`] rebinds the same parameters to
/// another hash function; points of both instances interoperate.
pub struct Curve<D> {
    params: Arc<CurveParameters>,
    hash: PhantomData<fn() -> D>,
}

impl<D: HashFunction> Curve<D> {
    /// Bind already validated parameters to `D`.
    pub fn from_parameters(params: Arc<CurveParameters>) -> Result<Self> {
        let digest_len = <D as digest::Digest>::output_size();

        if params.family() == CurveFamily::TwistedEdwards
            && digest_len < 2 * eddsa::seed_len(&params)
        {
            return Err(Error::InvalidCurveParameters(
                "digest output must be at least twice the seed length",
            ));
        }

        debug!(curve = params.name(), digest_len, "curve instance created");

        Ok(Self {
            params,
            hash: PhantomData,
        })
    }

    /// The same curve bound to another hash function.
    pub fn create<D2: HashFunction>(&self) -> Result<Curve<D2>> {
        Curve::from_parameters(self.params.clone())
    }

    /// Curve parameters.
    pub fn params(&self) -> &Arc<CurveParameters> {
        &self.params
    }

    /// Name of the curve.
    pub fn name(&self) -> &'static str {
        self.params.name()
    }

    /// Neutral element.
    pub fn identity(&self) -> ProjectivePoint {
        self.params.identity()
    }

    /// Base point.
    pub fn generator(&self) -> ProjectivePoint {
        self.params.generator()
    }

    /// Width in bytes of a private key.
    pub fn private_key_len(&self) -> usize {
        match self.params.family() {
            CurveFamily::ShortWeierstrass => ecdsa::scalar_len(&self.params),
            CurveFamily::TwistedEdwards => eddsa::seed_len(&self.params),
        }
    }

    /// Width in bytes of an encoded public key.
    pub fn public_key_len(&self, compressed: bool) -> usize {
        match self.params.family() {
            CurveFamily::ShortWeierstrass if compressed => self.params.field().byte_len() + 1,
            CurveFamily::ShortWeierstrass => 2 * self.params.field().byte_len() + 1,
            CurveFamily::TwistedEdwards => eddsa::point_len(&self.params),
        }
    }

    /// Width in bytes of a signature.
    pub fn signature_len(&self) -> usize {
        match self.params.family() {
            CurveFamily::ShortWeierstrass => 2 * ecdsa::scalar_len(&self.params),
            CurveFamily::TwistedEdwards => 2 * eddsa::point_len(&self.params),
        }
    }

    /// Public key for a private key.
    ///
    /// `compressed` selects the SEC1 form on short Weierstrass curves and is ignored on twisted
    /// Edwards curves, whose encoding is always compressed.
    #[instrument(level = "debug", skip_all, fields(curve = self.name()))]
    pub fn get_public_key(&self, private_key: &[u8], compressed: bool) -> Result<Vec<u8>> {
        let g = self.generator();

        let public_key = match self.params.family() {
            CurveFamily::ShortWeierstrass => {
                g.multiply_secret(&ecdsa::secret_scalar(&self.params, private_key)?)
            }
            CurveFamily::TwistedEdwards => {
                let secret = eddsa::ExpandedSecret::new::<D>(&self.params, private_key)?;
                g.multiply_secret(secret.scalar())
            }
        };

        Ok(public_key.to_bytes(compressed))
    }

    /// Sign `msg`: deterministic ECDSA on short Weierstrass curves, EdDSA on twisted Edwards
    /// curves.
    #[instrument(level = "debug", skip_all, fields(curve = self.name(), msg_len = msg.len()))]
    pub fn sign(&self, msg: &[u8], private_key: &[u8]) -> Result<Signature> {
        if msg.is_empty() {
            return Err(Error::EmptyMessage);
        }

        let g = self.generator();

        match self.params.family() {
            CurveFamily::ShortWeierstrass => {
                let d = ecdsa::secret_scalar(&self.params, private_key)?;
                ecdsa::sign::<D>(&g, &d, msg)
            }
            CurveFamily::TwistedEdwards => {
                let secret = eddsa::ExpandedSecret::new::<D>(&self.params, private_key)?;
                Ok(eddsa::sign::<D>(&g, &secret, msg))
            }
        }
    }

    /// Verify a signature.
    ///
    /// Returns `Ok(false)` for a well-formed signature which does not match, and an error for
    /// malformed input: a signature of the wrong length, a scalar out of range, an undecodable
    /// or small order public key, or an empty message.
    #[instrument(
        level = "debug",
        skip_all,
        fields(curve = self.name(), msg_len = msg.len(), sig_len = signature.len())
    )]
    pub fn verify(&self, signature: &[u8], msg: &[u8], public_key: &[u8]) -> Result<bool> {
        if msg.is_empty() {
            return Err(Error::EmptyMessage);
        }

        let g = self.generator();
        let public_key = self.public_key(public_key)?;

        let valid = match self.params.family() {
            CurveFamily::ShortWeierstrass => ecdsa::verify::<D>(&g, &public_key, msg, signature)?,
            CurveFamily::TwistedEdwards => eddsa::verify::<D>(&g, &public_key, msg, signature)?,
        };

        debug!(valid, "signature checked");
        Ok(valid)
    }

    /// Shared secret between a private key and a peer's public key: the big endian
    /// x-coordinate on short Weierstrass curves, the encoded point on twisted Edwards curves.
    #[instrument(level = "debug", skip_all, fields(curve = self.name()))]
    pub fn get_shared_secret(&self, private_key: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
        let public_key = self.public_key(public_key)?;

        match self.params.family() {
            CurveFamily::ShortWeierstrass => {
                let d = ecdsa::secret_scalar(&self.params, private_key)?;
                ecdh::weierstrass(&d, &public_key)
            }
            CurveFamily::TwistedEdwards => {
                let secret = eddsa::ExpandedSecret::new::<D>(&self.params, private_key)?;
                ecdh::edwards(&secret, &public_key)
            }
        }
    }

    /// Decode a public key, rejecting the identity and every other point of small order.
    fn public_key(&self, bytes: &[u8]) -> Result<ProjectivePoint> {
        let public_key = ProjectivePoint::from_bytes(&self.params, bytes)?;

        if bool::from(public_key.clear_cofactor().is_identity()) {
            return Err(Error::IdentityElement);
        }

        Ok(public_key)
    }

    /// Generate a random private key. The returned bytes are wiped on drop.
    pub fn random_private_key(&self, rng: &mut impl CryptoRngCore) -> Zeroizing<Vec<u8>> {
        let len = self.private_key_len();
        let mut bytes = Zeroizing::new(vec![0u8; len]);

        if self.params.family() == CurveFamily::TwistedEdwards {
            rng.fill_bytes(&mut bytes);
            return bytes;
        }

        // Rejection sampling of `[1, n)` with the top byte masked to the width of `n`.
        let excess_bits = 8 * len - self.params.order_bits();

        loop {
            rng.fill_bytes(&mut bytes);
            bytes[0] &= 0xff >> excess_bits;

            let in_range = uint_from_bytes(&bytes, ByteOrder::BigEndian)
                .map(Zeroizing::new)
                .map(|k| self.params.scalar(&k).is_ok_and(|k| !bool::from(k.is_zero())))
                .unwrap_or(false);

            if in_range {
                return bytes;
            }
        }
    }

    /// Generate a random private key from the operating system's random number generator.
    #[cfg(feature = "getrandom")]
    pub fn random_private_key_os(&self) -> Zeroizing<Vec<u8>> {
        self.random_private_key(&mut rand_core::OsRng)
    }

    /// Digest of `msg` under the bound hash function.
    pub fn hash(&self, msg: &[u8]) -> Output<D> {
        hash::digest::<D>(&[msg])
    }

    /// HMAC of the concatenation of `messages` under `key` with the bound hash function.
    pub fn hmac(&self, key: &[u8], messages: &[&[u8]]) -> Result<Output<D>> {
        hash::hmac::<D>(key, messages)
    }
}

impl<D> Clone for Curve<D> {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
            hash: PhantomData,
        }
    }
}

impl<D> fmt::Debug for Curve<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.params.name())
            .field("family", &self.params.family())
            .finish_non_exhaustive()
    }
}
