//! ES256 provider authentication tokens for push-notification gateways.
//!
//! A [`TokenBuilder`] renders `{"alg":"ES256","kid":..}` and
//! `{"iss":..,"iat":..}` as base64url, hashes the joined digest with SHA-256
//! and hands the hash to a [`Signer`], which returns a DER-encoded ECDSA
//! P-256 signature.

pub mod config;
pub mod console;
pub mod error;
pub mod signer;
pub mod token;

pub use error::{Error, Result};
pub use signer::{EllipticCurveKeySigner, KeyHandle, PublicKeyVerifier, Signer, SigningMode, Verifier};
pub use token::{verify_token, TokenBuilder};
