use std::env;

use anyhow::{Context, Result};

/// Central configuration loaded from environment variables.
///
/// Everything has a default; the .env file is loaded automatically at
/// startup via dotenvy. CLI flags override these where a flag exists.
pub struct Config {
    /// Bind address for the web server (CARBON_BIND, default 0.0.0.0)
    pub bind: String,
    /// Port for the web server (CARBON_PORT, default 5000)
    pub port: u16,
    /// Maximum accepted document length in characters (CARBON_MAX_TEXT_LEN,
    /// default 50000). Sentence matching is quadratic in sentence count, so
    /// the transport layers reject oversize inputs before invoking the core.
    pub max_text_len: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let port = match env::var("CARBON_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("CARBON_PORT is not a valid port: {raw}"))?,
            Err(_) => 5000,
        };

        let max_text_len = match env::var("CARBON_MAX_TEXT_LEN") {
            Ok(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("CARBON_MAX_TEXT_LEN is not a valid length: {raw}"))?,
            Err(_) => 50_000,
        };

        Ok(Self {
            bind: env::var("CARBON_BIND").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            max_text_len,
        })
    }
}
