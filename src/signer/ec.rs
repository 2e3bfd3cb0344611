//! ECDSA P-256 signing and verification with DER signatures.
//! Used by: signer::SigningMode, token::builder, main.

use std::path::Path;

use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use p256::ecdsa::{Signature, VerifyingKey};
use p256::elliptic_curve::zeroize::Zeroizing;
use p256::pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding};

use crate::error::{Error, Result};
use crate::signer::{KeyHandle, Signer, Verifier};

/// Length of the SHA-256 hash a signer accepts.
pub const DIGEST_LEN: usize = 32;

/// Signs pre-hashed digests with an owned P-256 private key.
#[derive(Debug)]
pub struct EllipticCurveKeySigner {
    key: KeyHandle,
}

impl EllipticCurveKeySigner {
    pub fn new(key: KeyHandle) -> Self {
        Self { key }
    }

    pub fn from_pem(pem: &[u8]) -> Result<Self> {
        KeyHandle::from_pem(pem).map(Self::new)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let pem = std::fs::read(path)
            .map(Zeroizing::new)
            .map_err(|source| Error::KeyFile { path: path.to_path_buf(), source })?;
        Self::from_pem(&pem)
    }

    /// SPKI PEM of the public half, the form a gateway registers.
    pub fn public_key_pem(&self) -> Result<String> {
        self.key
            .verifying_key()
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| Error::InvalidKey(e.to_string()))
    }

    pub fn public_verifier(&self) -> PublicKeyVerifier {
        PublicKeyVerifier { key: self.key.verifying_key().clone() }
    }
}

impl Verifier for EllipticCurveKeySigner {
    fn verify(&self, digest: &[u8], signature: &[u8]) -> bool {
        verify_der(self.key.verifying_key(), digest, signature)
    }
}

impl Signer for EllipticCurveKeySigner {
    fn sign(&self, digest: &[u8]) -> Result<Vec<u8>> {
        if digest.len() != DIGEST_LEN {
            return Err(Error::SignatureEncoding(format!(
                "expected a {DIGEST_LEN}-byte SHA-256 hash, got {} bytes",
                digest.len()
            )));
        }
        let signature: Signature = self
            .key
            .signing_key()
            .sign_prehash(digest)
            .map_err(|e| Error::SignatureEncoding(e.to_string()))?;
        let der = signature.to_der();
        if der.as_bytes().is_empty() {
            return Err(Error::SignatureEncoding("empty DER signature".into()));
        }
        Ok(der.as_bytes().to_vec())
    }
}

/// Verify-only counterpart built from a public key.
#[derive(Debug, Clone)]
pub struct PublicKeyVerifier {
    key: VerifyingKey,
}

impl PublicKeyVerifier {
    pub fn from_public_key_pem(pem: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(pem)
            .map_err(|_| Error::InvalidKey("public key is not UTF-8 PEM text".into()))?;
        let framed = format!("{}\n", text.trim());
        let key = VerifyingKey::from_public_key_pem(&framed)
            .map_err(|e| Error::InvalidKey(format!("public key: {e}")))?;
        Ok(Self { key })
    }
}

impl Verifier for PublicKeyVerifier {
    fn verify(&self, digest: &[u8], signature: &[u8]) -> bool {
        verify_der(&self.key, digest, signature)
    }
}

fn verify_der(key: &VerifyingKey, digest: &[u8], signature: &[u8]) -> bool {
    let Ok(signature) = Signature::from_der(signature) else {
        return false;
    };
    key.verify_prehash(digest, &signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::fixtures::*;

    fn signer() -> Result<EllipticCurveKeySigner> {
        EllipticCurveKeySigner::from_pem(SEC1_PEM)
    }

    #[test]
    fn sign_then_verify() -> Result<()> {
        let signer = signer()?;
        let messages: [&[u8]; 4] = [b"", b"a", b"eyJhbGciOiJFUzI1NiJ9.e30", &[0u8; 1024]];
        for message in messages {
            let digest = sha256(message);
            let signature = signer.sign(&digest)?;
            assert!(signer.verify(&digest, &signature));
        }
        Ok(())
    }

    #[test]
    fn signature_is_der_sequence() -> Result<()> {
        let signature = signer()?.sign(&sha256(b"payload"))?;
        assert!((8..=72).contains(&signature.len()));
        assert_eq!(signature[0], 0x30);
        assert_eq!(signature[1] as usize, signature.len() - 2);
        assert!(Signature::from_der(&signature).is_ok());
        Ok(())
    }

    #[test]
    fn flipped_bit_fails_verification() -> Result<()> {
        let signer = signer()?;
        let digest = sha256(b"payload");
        let mut signature = signer.sign(&digest)?;
        let last = signature.len() - 1;
        signature[last] ^= 0x01;
        assert!(!signer.verify(&digest, &signature));
        Ok(())
    }

    #[test]
    fn different_digest_fails_verification() -> Result<()> {
        let signer = signer()?;
        let signature = signer.sign(&sha256(b"payload"))?;
        assert!(!signer.verify(&sha256(b"other"), &signature));
        Ok(())
    }

    #[test]
    fn non_hash_length_digest_is_rejected() -> Result<()> {
        let signer = signer()?;
        let hash = sha256(b"payload");
        let digests: [&[u8]; 3] = [&hash[..16], &hash[..31], b"eyJhbGciOiJFUzI1NiJ9.e30eyJhbGciOiJFUzI1NiJ9"];
        for digest in digests {
            let result = signer.sign(digest);
            assert!(matches!(result, Err(Error::SignatureEncoding(_))), "{} bytes", digest.len());
        }
        Ok(())
    }

    #[test]
    fn truncated_der_returns_false() -> Result<()> {
        let signer = signer()?;
        let digest = sha256(b"payload");
        let signature = signer.sign(&digest)?;
        assert!(!signer.verify(&digest, &signature[..3]));
        assert!(!signer.verify(&digest, &[]));
        Ok(())
    }

    #[test]
    fn fixed_corrupted_fixture_returns_false() -> Result<()> {
        // SEQUENCE { INTEGER 1, INTEGER 1 }
        let bogus = [0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01];
        assert!(!signer()?.verify(&sha256(b"payload"), &bogus));
        Ok(())
    }

    #[test]
    fn public_verifier_accepts_signer_output() -> Result<()> {
        let signer = signer()?;
        let verifier = PublicKeyVerifier::from_public_key_pem(PUBLIC_PEM)?;
        let digest = sha256(b"payload");
        assert!(verifier.verify(&digest, &signer.sign(&digest)?));
        Ok(())
    }

    #[test]
    fn exported_public_key_matches_fixture() -> Result<()> {
        let exported = signer()?.public_key_pem()?;
        let fixture = std::str::from_utf8(PUBLIC_PEM).map_err(|e| Error::InvalidKey(e.to_string()))?;
        assert_eq!(exported.trim(), fixture.trim());
        Ok(())
    }

    #[test]
    fn other_key_rejects_signature() -> Result<()> {
        let other = EllipticCurveKeySigner::new(random_key()?);
        let digest = sha256(b"payload");
        let signature = signer()?.sign(&digest)?;
        assert!(!other.verify(&digest, &signature));
        assert!(!other.public_verifier().verify(&digest, &signature));
        Ok(())
    }

    #[test]
    fn missing_file_reports_path() {
        let err = EllipticCurveKeySigner::from_path("/no/such/AuthKey.p8").unwrap_err();
        assert!(matches!(err, Error::KeyFile { ref path, .. } if path.ends_with("AuthKey.p8")));
    }

    fn random_key() -> Result<KeyHandle> {
        use p256::ecdsa::SigningKey;
        use p256::pkcs8::EncodePrivateKey;
        let key = SigningKey::random(&mut rand::rngs::OsRng);
        let pem = key
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| Error::InvalidKey(e.to_string()))?;
        KeyHandle::from_pem(pem.as_bytes())
    }
}
