//! Server settings loaded via OrthoConfig.
//!
//! Values layer command-line flags over `TICKETS_*` environment variables
//! over configuration files.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3333;

/// Raised when the configured host is not an IP address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid host address: {host}")]
pub struct InvalidHostError {
    host: String,
}

/// Configuration for the tickets server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TICKETS")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// Load the office-setup tickets at startup.
    #[ortho_config(default = true)]
    pub seed_tickets: bool,
}

impl ServerSettings {
    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Socket address the server binds to.
    ///
    /// # Errors
    /// Returns [`InvalidHostError`] when `host` does not parse as an IP.
    pub fn bind_addr(&self) -> Result<SocketAddr, InvalidHostError> {
        let ip = match self.host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(host) => host.parse().map_err(|_| InvalidHostError {
                host: host.to_owned(),
            })?,
        };
        Ok(SocketAddr::new(ip, self.port()))
    }
}
