//! Runtime configuration shared by every command

use crate::catalog::loader::{default_playlist, embedded_catalog, load_from_file, shuffle_playlist};
use crate::catalog::{Catalog, CatalogError};
use crate::core::DishRecord;
use crate::favorites::{FavoritesStore, JsonFileStore, StoreError};
use std::path::PathBuf;
use tracing::{debug, warn};

const APP_DIR: &str = "quick_cook";
const FAVORITES_FILE: &str = "favorites.json";

/// Where data comes from and how the game playlist is ordered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog file overriding the embedded one
    pub catalog_path: Option<PathBuf>,
    pub favorites_path: PathBuf,
    /// Shuffle the game playlist instead of using level order
    pub shuffle: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            favorites_path: default_favorites_path(),
            shuffle: false,
        }
    }
}

impl AppConfig {
    /// Load the configured catalog, falling back to the embedded asset
    ///
    /// # Errors
    /// Returns `CatalogError` if the catalog cannot be read or parsed.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => load_from_file(path),
            None => embedded_catalog(),
        }
    }

    /// The game playlist, shuffled when configured
    #[must_use]
    pub fn playlist(&self) -> Vec<DishRecord> {
        let mut playlist = default_playlist();
        if self.shuffle {
            shuffle_playlist(&mut playlist, &mut rand::rng());
            debug!(levels = playlist.len(), "shuffled playlist");
        }
        playlist
    }

    /// Open the favorites file
    ///
    /// # Errors
    /// Returns `StoreError` if the file exists but is unreadable or corrupt.
    pub fn open_favorites(&self) -> Result<FavoritesStore<JsonFileStore>, StoreError> {
        JsonFileStore::open(&self.favorites_path).map(FavoritesStore::load)
    }
}

/// `<data dir>/quick_cook/favorites.json`, or the working directory if the
/// platform has no data directory
#[must_use]
pub fn default_favorites_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR).join(FAVORITES_FILE),
        None => {
            warn!("no platform data directory, storing favorites in the working directory");
            PathBuf::from(FAVORITES_FILE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_embedded_catalog() {
        let config = AppConfig::default();
        assert!(config.catalog_path.is_none());
        assert!(!config.load_catalog().unwrap().cuisines().is_empty());
    }

    #[test]
    fn default_favorites_file_name() {
        assert!(default_favorites_path().ends_with(FAVORITES_FILE));
    }

    #[test]
    fn unshuffled_playlist_keeps_level_order() {
        let config = AppConfig::default();
        let playlist = config.playlist();
        assert_eq!(playlist[0].id.text(), "JOLLOFRICE");
    }

    #[test]
    fn shuffled_playlist_keeps_every_dish() {
        let config = AppConfig {
            shuffle: true,
            ..AppConfig::default()
        };
        let mut shuffled: Vec<String> = config
            .playlist()
            .iter()
            .map(|record| record.id.text().to_string())
            .collect();
        let mut ordered: Vec<String> = default_playlist()
            .iter()
            .map(|record| record.id.text().to_string())
            .collect();
        shuffled.sort();
        ordered.sort();
        assert_eq!(shuffled, ordered);
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let config = AppConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.json")),
            ..AppConfig::default()
        };
        assert!(matches!(config.load_catalog(), Err(CatalogError::Io { .. })));
    }
}
