//! apns-token: mint one provider token from environment configuration.
//! Used by: binary entrypoint.

use std::process::ExitCode;

use apns_token::config::TokenConfig;
use apns_token::{console, verify_token, EllipticCurveKeySigner, SigningMode, TokenBuilder};

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    console::print_banner();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console::print_failure(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run() -> apns_token::Result<()> {
    let config = TokenConfig::from_env()?;
    let signer = EllipticCurveKeySigner::from_path(&config.key_path)?;
    tracing::info!(kid = %config.key_id, path = %config.key_path.display(), "signing key loaded");

    let builder = TokenBuilder::new(&config.key_id, &config.team_id, config.issue_date());
    let token = builder.sign(&SigningMode::Custom(&signer))?;
    verify_token(&token, &signer.public_verifier())?;

    console::print_minted(&config, builder.payload());
    println!("{}", token);
    Ok(())
}
