//! Genre business logic - listing, lookup and the startup seed.

use crate::{
    entities::{Genre, genre},
    errors::Result,
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::{debug, info, instrument};

/// Retrieves all genres in insertion order.
pub async fn list_genres(db: &DatabaseConnection) -> Result<Vec<genre::Model>> {
    Genre::find()
        .order_by_asc(genre::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a genre by its exact (case-sensitive) name.
pub async fn get_genre_by_name<C>(db: &C, name: &str) -> Result<Option<genre::Model>>
where
    C: ConnectionTrait,
{
    Genre::find()
        .filter(genre::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Counts the genres currently stored.
pub async fn count_genres(db: &DatabaseConnection) -> Result<u64> {
    Genre::find().count(db).await.map_err(Into::into)
}

/// Inserts the given genres if, and only if, the genre table is empty.
///
/// Names are trimmed and deduplicated before insertion so a repeated entry in the
/// seed list cannot trip the unique constraint. Returns how many rows were inserted.
#[instrument(skip(db, names))]
pub async fn seed_genres<S>(db: &DatabaseConnection, names: &[S]) -> Result<usize>
where
    S: AsRef<str>,
{
    let existing = count_genres(db).await?;
    if existing > 0 {
        debug!("Genre table already holds {} rows, skipping seed", existing);
        return Ok(0);
    }

    let mut unique: Vec<&str> = Vec::with_capacity(names.len());
    for name in names.iter().map(|n| n.as_ref().trim()) {
        if !name.is_empty() && !unique.contains(&name) {
            unique.push(name);
        }
    }

    if unique.is_empty() {
        return Ok(0);
    }

    let rows = unique.iter().map(|name| genre::ActiveModel {
        name: Set((*name).to_string()),
        ..Default::default()
    });
    Genre::insert_many(rows).exec(db).await?;

    info!("Seeded {} genres", unique.len());
    Ok(unique.len())
}
