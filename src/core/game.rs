//! Game business logic - Handles all game-related operations.
//!
//! Games are listed as [`GameDetails`], which pairs each row with the names of its
//! genre and publisher. Writes take a [`GameInput`] naming the genre and publisher,
//! and resolve those names to rows before touching the games table.

use crate::{
    core::{genre::get_genre_by_name, publisher::get_publisher_by_name},
    entities::{Game, Genre, Publisher, game, publisher},
    errors::{Error, Result},
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sea_orm::{QueryOrder, Select, Set, prelude::*};
use std::collections::HashMap;
use tracing::debug;

/// A game together with the names of its genre and publisher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameDetails {
    /// The stored game row
    pub game: game::Model,
    /// Name of the game's genre
    pub genre: String,
    /// Name of the game's publisher
    pub publisher: String,
}

/// Field values for creating or updating a game, already coerced from form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameInput {
    /// Display title
    pub title: String,
    /// Description text
    pub description: String,
    /// Release timestamp
    pub release_date: DateTime<Utc>,
    /// Name of an existing genre
    pub genre: String,
    /// Name of an existing publisher
    pub publisher: String,
    /// Home page flag
    pub featured: bool,
    /// Image reference
    pub image: String,
}

/// Coerces the submitted featured flag: only the exact string `"true"` counts.
#[must_use]
pub fn parse_featured(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Parses a submitted release date into a UTC timestamp.
///
/// Accepts RFC 3339, the `datetime-local` shapes `YYYY-MM-DDTHH:MM` and
/// `YYYY-MM-DDTHH:MM:SS`, and plain `YYYY-MM-DD` (midnight). Values without an
/// offset are taken as UTC.
///
/// # Errors
/// Returns [`Error::InvalidDate`] for anything else.
pub fn parse_release_date(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::InvalidDate {
            value: value.to_string(),
        })
}

/// Runs a game query and attaches genre and publisher names to every row.
///
/// The genre is joined through the game's relation; publishers are then read in one
/// query restricted to the ids the games reference.
async fn load_details(db: &DatabaseConnection, query: Select<Game>) -> Result<Vec<GameDetails>> {
    let rows = query
        .find_also_related(Genre)
        .order_by_asc(game::Column::Id)
        .all(db)
        .await?;
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let mut publisher_ids: Vec<i64> = rows.iter().map(|(g, _)| g.publisher_id).collect();
    publisher_ids.sort_unstable();
    publisher_ids.dedup();
    let publishers: HashMap<i64, String> = Publisher::find()
        .filter(publisher::Column::Id.is_in(publisher_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();

    Ok(rows
        .into_iter()
        .map(|(game, genre)| GameDetails {
            genre: genre.map(|g| g.name).unwrap_or_default(),
            publisher: publishers
                .get(&game.publisher_id)
                .cloned()
                .unwrap_or_default(),
            game,
        })
        .collect())
}

/// Retrieves every game.
pub async fn list_games(db: &DatabaseConnection) -> Result<Vec<GameDetails>> {
    load_details(db, Game::find()).await
}

/// Retrieves the games flagged for the home page.
pub async fn list_featured_games(db: &DatabaseConnection) -> Result<Vec<GameDetails>> {
    load_details(db, Game::find().filter(game::Column::Featured.eq(true))).await
}

/// Retrieves the games of the genre named exactly `genre_name`.
///
/// An unknown genre yields an empty list.
pub async fn list_games_by_genre(
    db: &DatabaseConnection,
    genre_name: &str,
) -> Result<Vec<GameDetails>> {
    match get_genre_by_name(db, genre_name).await? {
        Some(genre) => {
            load_details(db, Game::find().filter(game::Column::GenreId.eq(genre.id))).await
        }
        None => Ok(Vec::new()),
    }
}

/// Retrieves the games of the publisher named exactly `publisher_name`.
///
/// An unknown publisher yields an empty list.
pub async fn list_games_by_publisher(
    db: &DatabaseConnection,
    publisher_name: &str,
) -> Result<Vec<GameDetails>> {
    match get_publisher_by_name(db, publisher_name).await? {
        Some(publisher) => {
            let query = Game::find().filter(game::Column::PublisherId.eq(publisher.id));
            load_details(db, query).await
        }
        None => Ok(Vec::new()),
    }
}

/// Retrieves one game with its genre and publisher names.
///
/// # Errors
/// Returns [`Error::GameNotFound`] if the game does not exist.
pub async fn get_game(db: &DatabaseConnection, game_id: i64) -> Result<GameDetails> {
    load_details(db, Game::find_by_id(game_id))
        .await?
        .into_iter()
        .next()
        .ok_or(Error::GameNotFound { id: game_id })
}

/// Resolves the genre and publisher names of an input to their ids.
async fn resolve_references(db: &DatabaseConnection, input: &GameInput) -> Result<(i64, i64)> {
    let genre = get_genre_by_name(db, &input.genre)
        .await?
        .ok_or_else(|| Error::GenreNotFound {
            name: input.genre.clone(),
        })?;
    let publisher = get_publisher_by_name(db, &input.publisher)
        .await?
        .ok_or_else(|| Error::PublisherNotFound {
            name: input.publisher.clone(),
        })?;
    Ok((genre.id, publisher.id))
}

/// Creates a new game.
///
/// # Errors
/// Returns [`Error::GenreNotFound`] or [`Error::PublisherNotFound`] if the input
/// names an unknown genre or publisher.
pub async fn create_game(db: &DatabaseConnection, input: GameInput) -> Result<game::Model> {
    let (genre_id, publisher_id) = resolve_references(db, &input).await?;

    let game = game::ActiveModel {
        title: Set(input.title),
        description: Set(input.description),
        release_date: Set(input.release_date),
        genre_id: Set(genre_id),
        publisher_id: Set(publisher_id),
        featured: Set(input.featured),
        image: Set(input.image),
        ..Default::default()
    };

    let result = game.insert(db).await?;
    debug!("Created game {} ({})", result.id, result.title);
    Ok(result)
}

/// Replaces every field of an existing game.
///
/// # Errors
/// Returns [`Error::GameNotFound`] if the game does not exist, or a not-found error
/// for an unknown genre or publisher.
pub async fn update_game(
    db: &DatabaseConnection,
    game_id: i64,
    input: GameInput,
) -> Result<game::Model> {
    let existing = Game::find_by_id(game_id)
        .one(db)
        .await?
        .ok_or(Error::GameNotFound { id: game_id })?;
    let (genre_id, publisher_id) = resolve_references(db, &input).await?;

    let mut active_model: game::ActiveModel = existing.into();
    active_model.title = Set(input.title);
    active_model.description = Set(input.description);
    active_model.release_date = Set(input.release_date);
    active_model.genre_id = Set(genre_id);
    active_model.publisher_id = Set(publisher_id);
    active_model.featured = Set(input.featured);
    active_model.image = Set(input.image);

    active_model.update(db).await.map_err(Into::into)
}

/// Deletes a game by id.
///
/// # Errors
/// Returns [`Error::GameNotFound`] if nothing was deleted.
pub async fn delete_game(db: &DatabaseConnection, game_id: i64) -> Result<()> {
    let result = Game::delete_by_id(game_id).exec(db).await?;

    if result.rows_affected == 0 {
        return Err(Error::GameNotFound { id: game_id });
    }
    debug!("Deleted game {}", game_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_featured() {
        assert!(parse_featured(Some("true")));
        assert!(!parse_featured(Some("false")));
        assert!(!parse_featured(Some("on")));
        assert!(!parse_featured(Some("TRUE")));
        assert!(!parse_featured(Some("")));
        assert!(!parse_featured(None));
    }

    #[test]
    fn test_parse_release_date_formats() {
        let expected = Utc.with_ymd_and_hms(2017, 3, 3, 14, 30, 0).unwrap();

        assert_eq!(parse_release_date("2017-03-03T14:30").unwrap(), expected);
        assert_eq!(parse_release_date("2017-03-03T14:30:00").unwrap(), expected);
        assert_eq!(parse_release_date("2017-03-03T14:30:00Z").unwrap(), expected);
        assert_eq!(
            parse_release_date("2017-03-03T16:30:00+02:00").unwrap(),
            expected
        );
        assert_eq!(
            parse_release_date("2017-03-03").unwrap(),
            Utc.with_ymd_and_hms(2017, 3, 3, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_release_date_rejects_garbage() {
        for value in ["", "demain", "2017-02-30", "03/03/2017"] {
            let result = parse_release_date(value);
            assert!(
                matches!(result, Err(Error::InvalidDate { .. })),
                "{value:?} should not parse"
            );
        }
    }

    #[tokio::test]
    async fn test_create_game_persists_featured_flag() -> Result<()> {
        let (db, genre, publisher) = setup_with_catalog().await?;

        let mut input = test_game_input("Zelda", &genre.name, &publisher.name);
        input.featured = parse_featured(Some("true"));
        let featured = create_game(&db, input).await?;

        let mut input = test_game_input("Metroid", &genre.name, &publisher.name);
        input.featured = parse_featured(Some("yes"));
        let plain = create_game(&db, input).await?;

        assert!(get_game(&db, featured.id).await?.game.featured);
        assert!(!get_game(&db, plain.id).await?.game.featured);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_game_attaches_names() -> Result<()> {
        let (db, genre, publisher) = setup_with_catalog().await?;
        let game = create_test_game(&db, "Zelda", &genre.name, &publisher.name).await?;

        let details = get_game(&db, game.id).await?;
        assert_eq!(details.game.title, "Zelda");
        assert_eq!(details.genre, "Test Genre");
        assert_eq!(details.publisher, "Test Publisher");
        Ok(())
    }

    #[tokio::test]
    async fn test_list_games_attaches_names_per_row() -> Result<()> {
        let (db, action, nintendo) = setup_with_catalog().await?;
        let rpg = create_test_genre(&db, "RPG").await?;
        let square = create_test_publisher(&db, "Square").await?;
        create_test_publisher(&db, "Unused").await?;

        create_test_game(&db, "Zelda", &action.name, &nintendo.name).await?;
        create_test_game(&db, "Final Fantasy", &rpg.name, &square.name).await?;
        create_test_game(&db, "Mario RPG", &rpg.name, &nintendo.name).await?;

        let games = list_games(&db).await?;
        let rows: Vec<(&str, &str, &str)> = games
            .iter()
            .map(|d| (d.game.title.as_str(), d.genre.as_str(), d.publisher.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Zelda", "Test Genre", "Test Publisher"),
                ("Final Fantasy", "RPG", "Square"),
                ("Mario RPG", "RPG", "Test Publisher"),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_game() -> Result<()> {
        let db = setup_test_db().await?;

        let result = get_game(&db, 404).await;
        assert!(matches!(result, Err(Error::GameNotFound { id: 404 })));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_game_with_unknown_genre() -> Result<()> {
        let (db, _genre, publisher) = setup_with_catalog().await?;

        let input = test_game_input("Zelda", "Inconnu", &publisher.name);
        let result = create_game(&db, input).await;
        assert!(matches!(result, Err(Error::GenreNotFound { name: _ })));
        assert!(list_games(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_game_with_unknown_publisher() -> Result<()> {
        let (db, genre, _publisher) = setup_with_catalog().await?;

        let input = test_game_input("Zelda", &genre.name, "Inconnu");
        let result = create_game(&db, input).await;
        assert!(matches!(result, Err(Error::PublisherNotFound { name: _ })));
        Ok(())
    }

    #[tokio::test]
    async fn test_list_games_by_genre_is_exact() -> Result<()> {
        let (db, action, publisher) = setup_with_catalog().await?;
        let rpg = create_test_genre(&db, "RPG").await?;
        create_test_genre(&db, "rpg").await?;

        let first = create_test_game(&db, "Persona", &rpg.name, &publisher.name).await?;
        let second = create_test_game(&db, "Chrono Trigger", &rpg.name, &publisher.name).await?;
        create_test_game(&db, "Doom", &action.name, &publisher.name).await?;

        let ids: Vec<i64> = list_games_by_genre(&db, "RPG")
            .await?
            .into_iter()
            .map(|g| g.game.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id]);

        assert!(list_games_by_genre(&db, "rpg").await?.is_empty());
        assert!(list_games_by_genre(&db, "Puzzle").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_list_featured_games() -> Result<()> {
        let (db, genre, publisher) = setup_with_catalog().await?;

        let mut input = test_game_input("Zelda", &genre.name, &publisher.name);
        input.featured = true;
        let featured = create_game(&db, input).await?;
        create_test_game(&db, "Metroid", &genre.name, &publisher.name).await?;

        let listed = list_featured_games(&db).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].game.id, featured.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_game_replaces_fields() -> Result<()> {
        let (db, genre, publisher) = setup_with_catalog().await?;
        let sport = create_test_genre(&db, "Sport").await?;
        let ea = create_test_publisher(&db, "EA").await?;
        let game = create_test_game(&db, "Fifa", &genre.name, &publisher.name).await?;

        let mut input = test_game_input("Fifa 24", &sport.name, &ea.name);
        input.featured = true;
        input.release_date = parse_release_date("2023-09-29").unwrap();
        update_game(&db, game.id, input).await?;

        let details = get_game(&db, game.id).await?;
        assert_eq!(details.game.title, "Fifa 24");
        assert_eq!(details.genre, "Sport");
        assert_eq!(details.publisher, "EA");
        assert!(details.game.featured);
        assert_eq!(
            details.game.release_date,
            Utc.with_ymd_and_hms(2023, 9, 29, 0, 0, 0).unwrap()
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_game() -> Result<()> {
        let (db, genre, publisher) = setup_with_catalog().await?;

        let input = test_game_input("Ghost", &genre.name, &publisher.name);
        let result = update_game(&db, 77, input).await;
        assert!(matches!(result, Err(Error::GameNotFound { id: 77 })));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_game() -> Result<()> {
        let (db, genre, publisher) = setup_with_catalog().await?;
        let game = create_test_game(&db, "Zelda", &genre.name, &publisher.name).await?;

        delete_game(&db, game.id).await?;
        assert!(list_games(&db).await?.is_empty());

        let again = delete_game(&db, game.id).await;
        assert!(matches!(again, Err(Error::GameNotFound { id: _ })));
        Ok(())
    }
}
