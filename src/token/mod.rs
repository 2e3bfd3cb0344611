//! Provider token creation, signing, and verification.
//! Used by: main.

pub mod builder;
pub mod claims;
pub mod verify;

pub use builder::TokenBuilder;
pub use claims::{Header, Payload, ALGORITHM};
pub use verify::{verify_token, VerifiedToken};
