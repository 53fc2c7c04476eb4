//! Genre entity - Category label for games. Seeded once at startup.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Genre database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "genres")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Genre name (e.g. `"Action"`), unique
    #[sea_orm(unique)]
    pub name: String,
}

/// Defines relationships between Genre and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One genre has many games
    #[sea_orm(has_many = "super::game::Entity")]
    Games,
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Games.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
