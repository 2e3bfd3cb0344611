//! Provider token assembly: digest construction, hashing and signing.
//! Used by: main.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::signer::SigningMode;
use crate::token::claims::{Header, Payload};

/// Builds `base64url(header).base64url(payload).base64url(signature)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBuilder {
    header: Header,
    payload: Payload,
}

impl TokenBuilder {
    pub fn new(
        key_id: impl Into<String>,
        issuer: impl Into<String>,
        issue_date: DateTime<Utc>,
    ) -> Self {
        Self { header: Header::new(key_id), payload: Payload::new(issuer, issue_date) }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The signing input, `base64url(header).base64url(payload)`.
    pub fn digest(&self) -> Result<String> {
        let header = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&self.header)?);
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&self.payload)?);
        Ok(format!("{}.{}", header, payload))
    }

    /// Hashes the digest with SHA-256, signs the hash and appends the
    /// signature as the third segment.
    pub fn sign(&self, mode: &SigningMode<'_>) -> Result<String> {
        let digest = self.digest()?;
        let hash = Sha256::digest(digest.as_bytes());
        let signature = mode.sign(&hash)?;
        tracing::debug!(
            kid = %self.header.kid,
            iss = %self.payload.iss,
            iat = self.payload.iat,
            "provider token signed"
        );
        Ok(format!("{}.{}", digest, URL_SAFE_NO_PAD.encode(signature)))
    }
}
