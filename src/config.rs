//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `HOST` (default `0.0.0.0`)
//! - `PORT` (default `3000`)
//! - `DEFAULT_MODULE`: module slug `/` redirects to (default `academic`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use session::ModuleProfile;

use crate::error::ServerError;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub default_module: ModuleProfile,
}

impl ServerConfig {
    /// Build config from process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidConfig`] for a value that does not parse.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from `lookup`, treating blank values as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidConfig`] for a value that does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let host = match get("HOST") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ServerError::InvalidConfig { key: "HOST", value: raw })?,
            None => DEFAULT_HOST,
        };
        let port = match get("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ServerError::InvalidConfig { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let default_module = match get("DEFAULT_MODULE") {
            Some(raw) => raw.parse().map_err(|_| ServerError::InvalidConfig {
                key: "DEFAULT_MODULE",
                value: raw,
            })?,
            None => ModuleProfile::Academic,
        };

        Ok(Self {
            host,
            port,
            default_module,
        })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
