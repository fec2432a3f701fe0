use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: SocketAddr,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// `DATABASE_URL` & `VALKEY_URL` are required, `BIND_ADDRESS` falls back to
    /// [`DEFAULT_BIND_ADDRESS`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            bind_address: parse_bind_address(&bind_address)?,
        })
    }
}

fn required_var(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingVar { var })
}

fn parse_bind_address(value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidVar {
            var: "BIND_ADDRESS",
            reason: e.to_string(),
        })
}
