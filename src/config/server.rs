//! HTTP server configuration.
//!
//! Bind address and port come from the environment (`HOST`, `PORT`), falling
//! back to the defaults below when unset or unparsable.

use std::env;

use log::warn;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Interface used when `HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Maximum accepted arena update body, in bytes.
pub const MAX_PAYLOAD_BYTES: usize = 256 * 1024;

/// Body returned to liveness probes.
pub const GREETING: &str = "Let the battle begin!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let host = host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match port {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    warn!("Invalid PORT value {:?}, falling back to {}", raw, DEFAULT_PORT);
                    DEFAULT_PORT
                }
            },
            None => DEFAULT_PORT,
        };

        Self { host, port }
    }
}
