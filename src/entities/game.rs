//! Game entity - A catalog entry for a video game.
//!
//! Each game belongs to exactly one genre and one publisher, referenced by id.
//! Deleting a publisher cascades to its games; genres cannot be deleted while
//! games still reference them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Game database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    /// Unique identifier for the game
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display title
    pub title: String,
    /// Free-form description shown on the detail page
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Release timestamp (stored in UTC)
    pub release_date: DateTimeUtc,
    /// ID of the genre this game is filed under
    pub genre_id: i64,
    /// ID of the publisher of this game
    pub publisher_id: i64,
    /// Whether the game is shown on the home page
    pub featured: bool,
    /// Image reference (URL or path under the static directory)
    pub image: String,
}

/// Defines relationships between Game and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each game belongs to one genre
    #[sea_orm(
        belongs_to = "super::genre::Entity",
        from = "Column::GenreId",
        to = "super::genre::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Genre,
    /// Each game belongs to one publisher
    #[sea_orm(
        belongs_to = "super::publisher::Entity",
        from = "Column::PublisherId",
        to = "super::publisher::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Publisher,
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Genre.def()
    }
}

impl Related<super::publisher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publisher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
