//! Server configuration from environment variables.
//!
//! Two knobs exist: the bind address and the browser client's origin for
//! CORS. Both have development defaults so `catalog-server` runs with no
//! environment at all.

use anyhow::Context;
use std::net::SocketAddr;

/// Environment variable naming the socket address to bind.
pub const ADDR_VAR: &str = "CATALOG_ADDR";

/// Environment variable naming the allowed CORS origin.
pub const CLIENT_ORIGIN_VAR: &str = "CATALOG_CLIENT_ORIGIN";

const DEFAULT_ADDR: &str = "0.0.0.0:4000";
const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:3000";

/// Runtime configuration for the HTTP server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the server binds.
    pub addr: SocketAddr,
    /// Origin the browser client is served from.
    pub client_origin: String,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails if `CATALOG_ADDR` is set but not a valid socket address.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary lookup function.
    ///
    /// # Errors
    ///
    /// Fails if the looked-up address does not parse as a socket address.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("{ADDR_VAR} is not a valid socket address: {addr}"))?;

        let client_origin =
            lookup(CLIENT_ORIGIN_VAR).unwrap_or_else(|| DEFAULT_CLIENT_ORIGIN.to_string());

        Ok(Self {
            addr,
            client_origin,
        })
    }
}
