use std::env;

use crate::common::constants::{DEFAULT_PORT, DEFAULT_RATE_LIMIT_RPM, SCRYFALL_API_BASE};

/// Runtime configuration, read from the environment (a `.env` file is
/// honored when present). Every setting has a working default.
#[derive(Debug, Clone)]
pub struct GrapherConfig {
    /// Base URL of the Scryfall API.
    pub api_base: String,
    /// Requests-per-minute budget for the fetch client.
    pub rate_limit_rpm: u64,
    /// Port the web boundary binds to.
    pub port: u16,
}

impl GrapherConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let api_base = env::var("SG_API_BASE").unwrap_or_else(|_| SCRYFALL_API_BASE.to_string());
        let rate_limit_rpm = env::var("SG_RATE_LIMIT_RPM")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_RATE_LIMIT_RPM);
        let port = env::var("SG_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            api_base,
            rate_limit_rpm,
            port,
        }
    }
}

impl Default for GrapherConfig {
    fn default() -> Self {
        Self {
            api_base: SCRYFALL_API_BASE.to_string(),
            rate_limit_rpm: DEFAULT_RATE_LIMIT_RPM,
            port: DEFAULT_PORT,
        }
    }
}
