//! Listener configuration.
//!
//! The service binds all interfaces on [`DEFAULT_PORT`]. `SERVICE_PORT` may
//! override the port; an absent or unparsable value falls back to the default.

use std::net::SocketAddr;

/// Port the service listens on unless overridden.
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration for the HTTP listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    ///
    /// - `SERVICE_PORT`: HTTP port (default: 8080)
    pub fn from_env() -> Self {
        Self::from_port_var(std::env::var("SERVICE_PORT").ok().as_deref())
    }

    fn from_port_var(value: Option<&str>) -> Self {
        let port = value
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { port }
    }

    /// Address to bind: all interfaces on the configured port.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
