//! ECDSA P-256 signers over pre-hashed digests.
//! Used by: token::builder, token::verify, main.
//!
//! A [`Signer`] never hashes: callers hand it the 32-byte SHA-256 of the
//! token digest string and get back a DER-encoded `(r, s)` pair.

pub mod ec;
pub mod key;

use std::path::Path;

use crate::error::Result;

pub use ec::{EllipticCurveKeySigner, PublicKeyVerifier};
pub use key::KeyHandle;

/// Checks DER signatures over a pre-hashed digest.
pub trait Verifier: Send + Sync {
    /// Malformed DER is an ordinary `false`, never an error.
    fn verify(&self, digest: &[u8], signature: &[u8]) -> bool;
}

/// Produces DER signatures over a pre-hashed digest.
pub trait Signer: Verifier {
    fn sign(&self, digest: &[u8]) -> Result<Vec<u8>>;
}

/// Where the signing key for a token comes from.
pub enum SigningMode<'a> {
    /// PEM private key read from a file.
    File(&'a Path),
    /// PEM private key already in memory.
    Data(&'a [u8]),
    /// Caller-supplied signer, e.g. backed by an HSM.
    Custom(&'a dyn Signer),
}

impl SigningMode<'_> {
    /// Resolves the key material and signs `digest` with it. Key loading
    /// failures surface as key errors before any signing is attempted.
    pub fn sign(&self, digest: &[u8]) -> Result<Vec<u8>> {
        match self {
            SigningMode::File(path) => EllipticCurveKeySigner::from_path(path)?.sign(digest),
            SigningMode::Data(pem) => EllipticCurveKeySigner::from_pem(pem)?.sign(digest),
            SigningMode::Custom(signer) => signer.sign(digest),
        }
    }
}
