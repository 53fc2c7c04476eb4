//! Genre seed configuration loading from config.toml
//!
//! The genres listed in config.toml seed the database on first run. When no
//! config file exists the built-in [`DEFAULT_GENRES`] are used instead.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Genres seeded when no config file provides a list.
pub const DEFAULT_GENRES: [&str; 5] = ["Action", "Aventure", "RPG", "Simulation", "Sport"];

/// Configuration structure representing the seed section of config.toml
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// List of genres to seed
    #[serde(default)]
    pub genres: Vec<GenreConfig>,
}

/// Configuration for a single genre
#[derive(Debug, Deserialize, Clone)]
pub struct GenreConfig {
    /// Name of the genre
    pub name: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            genres: DEFAULT_GENRES
                .iter()
                .map(|name| GenreConfig {
                    name: (*name).to_string(),
                })
                .collect(),
        }
    }
}

impl SeedConfig {
    /// Genre names in file order, with blanks and repeated names removed.
    #[must_use]
    pub fn genre_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.genres.len());
        for genre in &self.genres {
            let name = genre.name.trim();
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }
}

/// Loads the seed configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_seed_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the seed configuration from `path` if it exists, falling back to the defaults.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_seed_config_or_default<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path = path.as_ref();
    if path.exists() {
        tracing::debug!("Loading genre seed list from {:?}", path);
        load_seed_config(path)
    } else {
        tracing::debug!("No seed config at {:?}, using default genres", path);
        Ok(SeedConfig::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_seed_config() {
        let toml_str = r#"
            [[genres]]
            name = "Plateforme"

            [[genres]]
            name = "Course"
        "#;

        let config: SeedConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.genres.len(), 2);
        assert_eq!(config.genres[0].name, "Plateforme");
        assert_eq!(config.genre_names(), vec!["Plateforme", "Course"]);
    }

    #[test]
    fn test_default_genres() {
        let names = SeedConfig::default().genre_names();
        assert_eq!(names, vec!["Action", "Aventure", "RPG", "Simulation", "Sport"]);
    }

    #[test]
    fn test_genre_names_drop_duplicates_and_blanks() {
        let toml_str = r#"
            [[genres]]
            name = "Action"

            [[genres]]
            name = "Aventure"

            [[genres]]
            name = " Aventure "

            [[genres]]
            name = ""
        "#;

        let config: SeedConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.genre_names(), vec!["Action", "Aventure"]);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_seed_config_or_default("does/not/exist/config.toml").unwrap();
        assert_eq!(config.genres.len(), DEFAULT_GENRES.len());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = load_seed_config("does/not/exist/config.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
