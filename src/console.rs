//! Coloured terminal output for the token binary.
//! Used by: main.

use colored::Colorize;

use crate::config::TokenConfig;
use crate::token::Payload;

pub fn banner() -> String {
    format!(
        "{} {}",
        concat!("apns-token v", env!("CARGO_PKG_VERSION")).bold().white(),
        "ES256 provider tokens".dimmed()
    )
}

pub fn print_banner() {
    eprintln!("{}", banner());
}

fn badge(text: &str, fg: colored::Color, bg: colored::Color) -> colored::ColoredString {
    format!(" {} ", text).color(fg).on_color(bg).bold()
}

pub fn print_minted(config: &TokenConfig, payload: &Payload) {
    eprintln!(
        "{} {} {} {} {} {}",
        badge("ES256", colored::Color::Black, colored::Color::Green),
        "kid:".dimmed(),
        config.key_id.white(),
        "iss:".dimmed(),
        config.team_id.cyan(),
        format!("iat:{}", payload.iat).dimmed()
    );
}

pub fn print_failure(reason: &str) {
    eprintln!("{} {}", badge("FAIL", colored::Color::White, colored::Color::Red), reason.red());
}
