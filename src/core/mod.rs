//! Core business logic - framework-agnostic operations over the catalog tables.
//!
//! Every function takes a SeaORM connection and returns [`crate::errors::Result`];
//! nothing in here knows about HTTP.

/// Game listing, lookup, creation, update and deletion
pub mod game;
/// Genre listing and the startup seed
pub mod genre;
/// Publisher CRUD, including rename and cascading delete
pub mod publisher;
