//! Environment configuration for the token binary.
//! Used by: main.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

pub const KEY_ID_VAR: &str = "APNS_KEY_ID";
pub const TEAM_ID_VAR: &str = "APNS_TEAM_ID";
pub const KEY_PATH_VAR: &str = "APNS_KEY_PATH";
pub const ISSUED_AT_VAR: &str = "APNS_ISSUED_AT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConfig {
    pub key_id: String,
    pub team_id: String,
    pub key_path: PathBuf,
    /// Defaults to the current time when unset.
    pub issued_at: Option<DateTime<Utc>>,
}

impl TokenConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(format!("{name} must be set")))
        };

        let issued_at = match lookup(ISSUED_AT_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(
                DateTime::parse_from_rfc3339(raw.trim())
                    .map_err(|e| Error::Config(format!("{ISSUED_AT_VAR}: {e}")))?
                    .with_timezone(&Utc),
            ),
            None => None,
        };

        Ok(Self {
            key_id: required(KEY_ID_VAR)?,
            team_id: required(TEAM_ID_VAR)?,
            key_path: PathBuf::from(required(KEY_PATH_VAR)?),
            issued_at,
        })
    }

    pub fn issue_date(&self) -> DateTime<Utc> {
        self.issued_at.unwrap_or_else(Utc::now)
    }
}
