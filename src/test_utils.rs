//! Shared test utilities for the catalog.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{game, publisher},
    entities,
    errors::Result,
};
use chrono::{TimeZone, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Inserts a genre with the given name.
pub async fn create_test_genre(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::genre::Model> {
    let genre = entities::genre::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };
    Ok(genre.insert(db).await?)
}

/// Creates a test publisher with sensible defaults.
///
/// # Defaults
/// * `country`: "Japon"
pub async fn create_test_publisher(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::publisher::Model> {
    publisher::create_publisher(db, name.to_string(), "Japon".to_string()).await
}

/// Builds a game input with sensible defaults.
///
/// # Defaults
/// * `description`: "Test description"
/// * `release_date`: 2020-01-01 00:00 UTC
/// * `featured`: false
/// * `image`: "test.png"
pub fn test_game_input(title: &str, genre: &str, publisher: &str) -> game::GameInput {
    game::GameInput {
        title: title.to_string(),
        description: "Test description".to_string(),
        release_date: Utc
            .with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_default(),
        genre: genre.to_string(),
        publisher: publisher.to_string(),
        featured: false,
        image: "test.png".to_string(),
    }
}

/// Creates a test game filed under existing genre and publisher names.
pub async fn create_test_game(
    db: &DatabaseConnection,
    title: &str,
    genre: &str,
    publisher: &str,
) -> Result<entities::game::Model> {
    game::create_game(db, test_game_input(title, genre, publisher)).await
}

/// Sets up a test environment with one genre and one publisher.
/// Returns (db, genre "Test Genre", publisher "Test Publisher").
pub async fn setup_with_catalog() -> Result<(
    DatabaseConnection,
    entities::genre::Model,
    entities::publisher::Model,
)> {
    let db = setup_test_db().await?;
    let genre = create_test_genre(&db, "Test Genre").await?;
    let publisher = create_test_publisher(&db, "Test Publisher").await?;
    Ok((db, genre, publisher))
}
