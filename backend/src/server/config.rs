//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use tickets_backend::settings::{InvalidHostError, ServerSettings};

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) seed_tickets: bool,
}

impl ServerConfig {
    /// Configuration binding `bind_addr` with seed tickets loaded.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            seed_tickets: true,
        }
    }

    /// Start with an empty ticket store instead of the seed tickets.
    #[must_use]
    pub fn with_seed_tickets(mut self, seed_tickets: bool) -> Self {
        self.seed_tickets = seed_tickets;
        self
    }

    /// Derive the configuration from loaded settings.
    ///
    /// # Errors
    /// Returns [`InvalidHostError`] when the configured host is not an IP.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, InvalidHostError> {
        Ok(Self::new(settings.bind_addr()?).with_seed_tickets(settings.seed_tickets))
    }
}
