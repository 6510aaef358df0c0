//! Host configuration parsed from environment variables.

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_vars(std::env::var("BIND_ADDR").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    fn from_vars(bind_addr: Option<&str>, port: Option<&str>) -> Result<Self, ServerError> {
        let bind_addr = bind_addr.map(str::trim).filter(|a| !a.is_empty()).unwrap_or(DEFAULT_BIND_ADDR).to_owned();
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse().map_err(|_| ServerError::InvalidEnv { var: "PORT", value: raw.to_owned() })?,
        };
        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
