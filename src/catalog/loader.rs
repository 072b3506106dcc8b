//! Catalog and playlist loading utilities
//!
//! Provides functions to load catalogs from files or use the embedded assets.

use super::embedded::{CATALOG_JSON, GAME_DISHES};
use super::{Catalog, CatalogError};
use crate::core::DishRecord;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load a catalog from a JSON file
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read and
/// `CatalogError::Parse` if it is not a valid catalog.
///
/// # Examples
/// ```no_run
/// use quick_cook::catalog::loader::load_from_file;
///
/// let catalog = load_from_file("data/catalog.json").unwrap();
/// println!("Loaded {} cuisines", catalog.cuisines().len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "loading catalog file");
    Catalog::from_json(&content)
}

/// Parse the catalog compiled into the binary
///
/// # Errors
///
/// Only fails if the embedded asset is malformed.
pub fn embedded_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(CATALOG_JSON)
}

/// Convert a `(name, image, fact)` table into game records
///
/// Rows whose names are not playable are skipped with a warning.
///
/// # Examples
/// ```
/// use quick_cook::catalog::loader::records_from_table;
///
/// let records = records_from_table(&[("EGUSI", "Egusi-Soup", "Melon seeds")]);
/// assert_eq!(records[0].id.text(), "EGUSI");
/// ```
#[must_use]
pub fn records_from_table(table: &[(&str, &str, &str)]) -> Vec<DishRecord> {
    table
        .iter()
        .filter_map(|&(name, image, fact)| match DishRecord::new(name, image, fact) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(name, "skipping unplayable dish: {err}");
                None
            }
        })
        .collect()
}

/// The game playlist shipped with the binary, in level order
#[must_use]
pub fn default_playlist() -> Vec<DishRecord> {
    records_from_table(GAME_DISHES)
}

/// Shuffle a playlist in place
pub fn shuffle_playlist<R: Rng + ?Sized>(playlist: &mut [DishRecord], rng: &mut R) {
    playlist.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::embedded::GAME_DISHES_COUNT;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = embedded_catalog().unwrap();
        assert_eq!(catalog.cuisines().len(), 16);
        assert!(!catalog.all_meals().is_empty());
    }

    #[test]
    fn default_playlist_matches_table() {
        let playlist = default_playlist();
        assert_eq!(playlist.len(), GAME_DISHES_COUNT);
        assert_eq!(playlist[0].id.text(), "JOLLOFRICE");
        assert_eq!(playlist[1].id.text(), "EGUSI");
        assert_eq!(playlist.last().unwrap().id.text(), "ACKEEANDSALTFISH");
    }

    #[test]
    fn records_from_table_skips_invalid() {
        let records = records_from_table(&[
            ("FUFU", "Fufu", "Cassava"),
            ("Ndolé", "Ndole", "Bitter leaves"),
            ("", "none", "none"),
            ("Moi Moi", "Moi-Moi", "Bean pudding"),
        ]);
        let names: Vec<_> = records.iter().map(|r| r.id.text()).collect();
        assert_eq!(names, ["FUFU", "MOIMOI"]);
    }

    #[test]
    fn shuffle_keeps_dishes() {
        let mut playlist = default_playlist();
        let mut rng = StdRng::seed_from_u64(7);
        shuffle_playlist(&mut playlist, &mut rng);

        let mut shuffled: Vec<_> = playlist.iter().map(|r| r.id.text().to_string()).collect();
        let mut original: Vec<_> = default_playlist()
            .iter()
            .map(|r| r.id.text().to_string())
            .collect();
        shuffled.sort();
        original.sort();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here.json");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
