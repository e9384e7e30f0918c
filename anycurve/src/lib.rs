#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Type discipline
//!
//! Group operations only accept points. Integers, booleans and bytestrings are rejected at
//! compile time:
//!
//! ```compile_fail
//! let g = anycurve::named::secp256k1().unwrap().generator();
//! g.add(&0u64);
//! ```
//!
//! ```compile_fail
//! let g = anycurve::named::secp256k1().unwrap().generator();
//! g.subtract(&true);
//! ```
//!
//! ```compile_fail
//! let g = anycurve::named::secp256k1().unwrap().generator();
//! g.equals(&[1u8; 4096][..]);
//! ```
//!
//! ```compile_fail
//! let g = anycurve::named::secp256k1().unwrap().generator();
//! g.multiply(&g);
//! ```
//!
//! Points of two different curves have the same type and are rejected at runtime with
//! [`Error::TypeMismatch`]:
//!
//! ```
//! use anycurve::{Error, named};
//!
//! let k1 = named::secp256k1()?.generator();
//! let p256 = named::secp256r1()?.generator();
//! assert_eq!(k1.add(&p256), Err(Error::TypeMismatch));
//! assert_eq!(k1.equals(&p256), Err(Error::TypeMismatch));
//! # Ok::<(), Error>(())
//! ```

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod named;

mod curve;
mod ecdh;
mod ecdsa;
mod eddsa;
mod edwards;
mod error;
mod hash;
mod nonce;
mod params;
mod point;
mod scalar;
mod scalar_mul;
mod signature;
mod weierstrass;

pub use crate::{
    curve::{Curve, create_curve},
    error::{Error, Result},
    hash::HashFunction,
    params::{CurveDefinition, CurveFamily, CurveParameters, CurveShape, minus},
    point::{AffinePoint, ProjectivePoint},
    scalar::Scalar,
    signature::Signature,
};
pub use digest;
pub use dynfield::{self, ByteOrder, Uint, hex_uint};
pub use rand_core;
