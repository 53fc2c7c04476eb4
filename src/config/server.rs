//! HTTP server settings read from environment variables.

use crate::errors::{Error, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port the catalog listens on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3008;

/// Directory static assets are served from when `STATIC_DIR` is not set.
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Builds the bind address from optional host and port strings.
///
/// # Errors
/// Returns [`Error::Config`] if either value does not parse.
pub fn parse_bind_address(host: Option<&str>, port: Option<&str>) -> Result<SocketAddr> {
    let ip = match host {
        Some(h) => h.parse::<IpAddr>().map_err(|e| Error::Config {
            message: format!("Invalid HOST '{h}': {e}"),
        })?,
        None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
    };
    let port = match port {
        Some(p) => p.parse::<u16>().map_err(|e| Error::Config {
            message: format!("Invalid PORT '{p}': {e}"),
        })?,
        None => DEFAULT_PORT,
    };
    Ok(SocketAddr::new(ip, port))
}

/// Reads `HOST` and `PORT` from the environment.
///
/// # Errors
/// Returns [`Error::Config`] if either variable is set to an invalid value.
pub fn get_bind_address() -> Result<SocketAddr> {
    let host = std::env::var("HOST").ok();
    let port = std::env::var("PORT").ok();
    parse_bind_address(host.as_deref(), port.as_deref())
}

/// Reads `STATIC_DIR` from the environment.
#[must_use]
pub fn get_static_dir() -> PathBuf {
    std::env::var("STATIC_DIR").map_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from)
}
