//! Header and payload claims of a provider token.
//! Used by: token::builder, token::verify.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The only algorithm these tokens are signed with.
pub const ALGORITHM: &str = "ES256";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    pub alg: String,
    pub kid: String,
}

impl Header {
    pub fn new(key_id: impl Into<String>) -> Self {
        Self { alg: ALGORITHM.to_owned(), kid: key_id.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payload {
    pub iss: String,
    pub iat: i64,
}

impl Payload {
    pub fn new(issuer: impl Into<String>, issue_date: DateTime<Utc>) -> Self {
        Self { iss: issuer.into(), iat: rounded_epoch_seconds(issue_date) }
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }
}

/// Epoch seconds rounded to the nearest second, halves away from zero.
fn rounded_epoch_seconds(at: DateTime<Utc>) -> i64 {
    let secs = at.timestamp();
    let nanos = at.timestamp_subsec_nanos();
    // timestamp() floors, so a negative instant with a fractional part
    // sits between secs and secs + 1.
    let round_up = if secs >= 0 { nanos >= 500_000_000 } else { nanos > 500_000_000 };
    if round_up { secs + 1 } else { secs }
}
