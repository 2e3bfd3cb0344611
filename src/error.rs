//! Unified error types for token signing and verification.
//! Used by: signer, token, config, main.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid key material: {0}")]
    InvalidKey(String),

    #[error("cannot read key file {}: {source}", path.display())]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("signature encoding failed: {0}")]
    SignatureEncoding(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid token format: {0}")]
    InvalidToken(String),

    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid signature")]
    InvalidSignature,

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True when the failure means no usable key could be produced, as
    /// opposed to the signing primitive itself failing.
    pub fn is_key_unavailable(&self) -> bool {
        matches!(self, Error::InvalidKey(_) | Error::KeyFile { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
