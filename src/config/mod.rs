use crate::errors::Result;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Database configuration and connection management
pub mod database;

/// Genre seed configuration loading from config.toml
pub mod genres;

/// HTTP bind address and static directory settings
pub mod server;

/// Path of the seed config file when `SEED_CONFIG` is not set.
pub const DEFAULT_SEED_CONFIG: &str = "config.toml";

/// Settings needed to start the catalog, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database connection URL
    pub database_url: String,
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// Directory served for static assets
    pub static_dir: PathBuf,
    /// Path of the genre seed file
    pub seed_config_path: PathBuf,
}

/// Loads the application configuration from environment variables.
///
/// Call after `.env` has been loaded so its values are visible here.
///
/// # Errors
/// Returns an error if `HOST` or `PORT` hold invalid values.
pub fn load_app_configuration() -> Result<AppConfig> {
    let config = AppConfig {
        database_url: database::get_database_url(),
        bind_addr: server::get_bind_address()?,
        static_dir: server::get_static_dir(),
        seed_config_path: std::env::var("SEED_CONFIG")
            .map_or_else(|_| PathBuf::from(DEFAULT_SEED_CONFIG), PathBuf::from),
    };
    tracing::debug!(?config, "Application configuration resolved");
    Ok(config)
}
