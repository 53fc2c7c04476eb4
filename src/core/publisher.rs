//! Publisher business logic - Handles all publisher-related operations.
//!
//! Games reference their publisher by id, so a rename is a single row update that
//! every game sees immediately. Renames and deletes still run inside a database
//! transaction: the lookup of the current row and the writes that follow either
//! all apply or none do.

use crate::{
    entities::{Game, Publisher, game, publisher},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{debug, info, instrument};

/// Retrieves all publishers in insertion order.
pub async fn list_publishers(db: &DatabaseConnection) -> Result<Vec<publisher::Model>> {
    Publisher::find()
        .order_by_asc(publisher::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a publisher by id.
///
/// # Errors
/// Returns [`Error::PublisherNotFound`] if no such publisher exists.
pub async fn get_publisher<C>(db: &C, publisher_id: i64) -> Result<publisher::Model>
where
    C: ConnectionTrait,
{
    Publisher::find_by_id(publisher_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::PublisherNotFound {
            name: publisher_id.to_string(),
        })
}

/// Finds a publisher by its exact (case-sensitive) name.
pub async fn get_publisher_by_name<C>(db: &C, name: &str) -> Result<Option<publisher::Model>>
where
    C: ConnectionTrait,
{
    Publisher::find()
        .filter(publisher::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new publisher.
///
/// # Errors
/// Returns a database error if the name is already taken.
pub async fn create_publisher(
    db: &DatabaseConnection,
    name: String,
    country: String,
) -> Result<publisher::Model> {
    let publisher = publisher::ActiveModel {
        name: Set(name),
        country: Set(country),
        ..Default::default()
    };

    let result = publisher.insert(db).await?;
    debug!("Created publisher {} ({})", result.id, result.name);
    Ok(result)
}

/// Renames a publisher and updates its country.
///
/// The current row is read before it is written, inside one transaction. Every game
/// previously listed under the old name is listed under `new_name` afterwards.
///
/// # Errors
/// Returns [`Error::PublisherNotFound`] if the publisher does not exist, or a
/// database error if `new_name` is already used by another publisher.
#[instrument(skip(db))]
pub async fn update_publisher(
    db: &DatabaseConnection,
    publisher_id: i64,
    new_name: String,
    country: String,
) -> Result<publisher::Model> {
    let txn = db.begin().await?;

    let current = get_publisher(&txn, publisher_id).await?;
    let old_name = current.name.clone();

    let mut active_model: publisher::ActiveModel = current.into();
    active_model.name = Set(new_name);
    active_model.country = Set(country);
    let updated = active_model.update(&txn).await?;

    txn.commit().await?;

    if old_name != updated.name {
        info!("Renamed publisher '{}' to '{}'", old_name, updated.name);
    }
    Ok(updated)
}

/// Deletes a publisher together with all of its games.
///
/// Games are removed first, then the publisher row, inside one transaction so a
/// failure leaves the catalog untouched. Returns the number of games deleted.
///
/// # Errors
/// Returns [`Error::PublisherNotFound`] if the publisher does not exist.
#[instrument(skip(db))]
pub async fn delete_publisher(db: &DatabaseConnection, publisher_id: i64) -> Result<u64> {
    let txn = db.begin().await?;

    let publisher = get_publisher(&txn, publisher_id).await?;

    let games_deleted = Game::delete_many()
        .filter(game::Column::PublisherId.eq(publisher.id))
        .exec(&txn)
        .await?
        .rows_affected;

    publisher.delete(&txn).await?;

    txn.commit().await?;

    info!(
        "Deleted publisher {} and {} of its games",
        publisher_id, games_deleted
    );
    Ok(games_deleted)
}
