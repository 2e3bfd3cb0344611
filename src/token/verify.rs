//! Provider token verification against a known key.
//! Used by: main, tests.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::signer::Verifier;
use crate::token::claims::{Header, Payload, ALGORITHM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    pub header: Header,
    pub payload: Payload,
}

pub fn verify_token(token: &str, verifier: &dyn Verifier) -> Result<VerifiedToken> {
    let mut segments = token.split('.');
    let (Some(header_b64), Some(payload_b64), Some(sig_b64), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(Error::InvalidToken("expected three segments".into()));
    };

    let signature = URL_SAFE_NO_PAD.decode(sig_b64)?;
    let signing_input = &token[..header_b64.len() + 1 + payload_b64.len()];
    let hash = Sha256::digest(signing_input.as_bytes());
    if !verifier.verify(&hash, &signature) {
        return Err(Error::InvalidSignature);
    }

    let header: Header = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(header_b64)?)?;
    if header.alg != ALGORITHM {
        return Err(Error::InvalidToken(format!("unsupported algorithm {}", header.alg)));
    }
    let payload: Payload = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload_b64)?)?;

    Ok(VerifiedToken { header, payload })
}
