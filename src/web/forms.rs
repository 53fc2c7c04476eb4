//! URL-encoded form bodies and their coercion into core inputs.
//!
//! Field names follow the HTML forms (`titre`, `editeur`, `misenavant`, `nom`, `pays`).
//! Missing fields deserialize as empty strings.

use crate::core::game::{GameInput, parse_featured, parse_release_date};
use crate::errors::Result;
use serde::Deserialize;

/// Body of the add and edit game forms
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GameForm {
    /// Title
    #[serde(rename = "titre")]
    pub title: String,
    /// Description
    pub description: String,
    /// Release date as typed in the form
    pub date: String,
    /// Genre name
    pub genre: String,
    /// Publisher name
    #[serde(rename = "editeur")]
    pub publisher: String,
    /// Featured flag; only `"true"` counts
    #[serde(rename = "misenavant")]
    pub featured: Option<String>,
    /// Image reference
    pub image: String,
}

impl GameForm {
    /// Coerces the form into a [`GameInput`].
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::InvalidDate`] if the date does not parse.
    pub fn into_input(self) -> Result<GameInput> {
        Ok(GameInput {
            release_date: parse_release_date(&self.date)?,
            featured: parse_featured(self.featured.as_deref()),
            title: self.title,
            description: self.description,
            genre: self.genre,
            publisher: self.publisher,
            image: self.image,
        })
    }
}

/// Body of the add and edit publisher forms
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PublisherForm {
    /// Publisher name
    #[serde(rename = "nom")]
    pub name: String,
    /// Country
    #[serde(rename = "pays")]
    pub country: String,
}
