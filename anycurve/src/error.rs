//! Error types.

use core::fmt;

/// Result type with the `anycurve` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by curve construction, point decoding, and the signature and key agreement
/// protocols.
///
/// A well-formed signature which does not match is not an error: verification reports it as
/// `Ok(false)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Scalar outside the range accepted by the operation.
    ScalarOutOfRange,

    /// Decoded coordinates do not satisfy the curve equation.
    PointNotOnCurve,

    /// Operands belong to different curves.
    TypeMismatch,

    /// Byte length of an encoded point is wrong for the curve.
    InvalidEncodingLength,

    /// Encoded point has an unknown tag or a non-canonical coordinate.
    InvalidEncoding,

    /// Private key has the wrong length.
    InvalidPrivateKeyLength,

    /// Private key is zero or not less than the group order.
    InvalidPrivateKey,

    /// Signature has the wrong length.
    InvalidSignatureFormat,

    /// Messages to be signed must not be empty.
    EmptyMessage,

    /// Modular inverse of zero.
    NotInvertible,

    /// Public key of small order, or key agreement produced the identity element.
    IdentityElement,

    /// Key rejected by the HMAC construction.
    InvalidMacKey,

    /// Curve parameter record was rejected.
    InvalidCurveParameters(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ScalarOutOfRange => write!(f, "scalar out of range"),
            Error::PointNotOnCurve => write!(f, "point is not on the curve"),
            Error::TypeMismatch => write!(f, "operands belong to different curves"),
            Error::InvalidEncodingLength => write!(f, "invalid point encoding length"),
            Error::InvalidEncoding => write!(f, "invalid point encoding"),
            Error::InvalidPrivateKeyLength => write!(f, "invalid private key length"),
            Error::InvalidPrivateKey => write!(f, "invalid private key"),
            Error::InvalidSignatureFormat => write!(f, "invalid signature format"),
            Error::EmptyMessage => write!(f, "message must not be empty"),
            Error::NotInvertible => write!(f, "value is not invertible"),
            Error::IdentityElement => write!(f, "point of small order"),
            Error::InvalidMacKey => write!(f, "invalid MAC key"),
            Error::InvalidCurveParameters(reason) => {
                write!(f, "invalid curve parameters: {reason}")
            }
        }
    }
}

impl core::error::Error for Error {}

impl From<dynfield::Error> for Error {
    fn from(_: dynfield::Error) -> Error {
        Error::InvalidCurveParameters("modulus cannot define a prime field")
    }
}
