//! Unified error type for the catalog.
//!
//! Core functions return [`Result`]; the web layer maps these errors onto HTTP
//! responses in [`crate::web::error`].

use thiserror::Error;

/// Errors produced by configuration, data access and form coercion.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// No game row with the given id
    #[error("Game not found: {id}")]
    GameNotFound {
        /// Requested game id
        id: i64,
    },

    /// No publisher with the given id or name
    #[error("Publisher not found: {name}")]
    PublisherNotFound {
        /// Requested publisher id or name
        name: String,
    },

    /// No genre with the given name
    #[error("Genre not found: {name}")]
    GenreNotFound {
        /// Requested genre name
        name: String,
    },

    /// A submitted release date could not be parsed
    #[error("Invalid date: '{value}'")]
    InvalidDate {
        /// The raw submitted value
        value: String,
    },

    /// Database failure reported by SeaORM
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (binding the listener, reading config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
