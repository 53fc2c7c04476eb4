//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod game;
pub mod genre;
pub mod publisher;

// Re-export specific types to avoid conflicts
pub use game::{Column as GameColumn, Entity as Game, Model as GameModel};
pub use genre::{Column as GenreColumn, Entity as Genre, Model as GenreModel};
pub use publisher::{Column as PublisherColumn, Entity as Publisher, Model as PublisherModel};
