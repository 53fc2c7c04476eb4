//! Publisher entity - A company publishing games.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Publisher database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "publishers")]
pub struct Model {
    /// Unique identifier for the publisher
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Publisher name, unique across the catalog
    #[sea_orm(unique)]
    pub name: String,
    /// Country the publisher is based in
    pub country: String,
}

/// Defines relationships between Publisher and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One publisher has many games
    #[sea_orm(has_many = "super::game::Entity")]
    Games,
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Games.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
