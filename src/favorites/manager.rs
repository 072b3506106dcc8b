//! Favorite meals, persisted through a key-value store

use super::{KeyValueStore, StoreError};
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

/// Storage key holding the JSON array of favorited meal names
pub const FAVORITES_KEY: &str = "favoriteMeals";

/// A set of favorited meal names that saves itself on every change
#[derive(Debug)]
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
    names: FxHashSet<String>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load favorites from `store`
    ///
    /// A missing or unreadable value starts an empty set.
    pub fn load(store: S) -> Self {
        let names = match store.get(FAVORITES_KEY) {
            Some(json) => serde_json::from_str::<Vec<String>>(&json).unwrap_or_else(|err| {
                warn!("ignoring corrupt favorites value: {err}");
                Vec::new()
            }),
            None => Vec::new(),
        };

        Self {
            store,
            names: names.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn is_favorite(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Flip a meal's favorite flag and persist; returns the new flag
    ///
    /// # Errors
    /// Returns `StoreError` if saving fails; the flag is then left as it was.
    pub fn toggle(&mut self, name: &str) -> Result<bool, StoreError> {
        let now_favorite = if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        };

        if let Err(err) = self.save() {
            if now_favorite {
                self.names.remove(name);
            } else {
                self.names.insert(name.to_string());
            }
            warn!(name, "favorite not saved: {err}");
            return Err(err);
        }

        debug!(name, now_favorite, "toggled favorite");
        Ok(now_favorite)
    }

    /// Favorited names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn save(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.names())?;
        self.store.set(FAVORITES_KEY, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::MemoryStore;
    use std::io;
    use std::path::PathBuf;

    /// Holds values but refuses every write
    struct ReadOnlyStore {
        inner: MemoryStore,
    }

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, _key: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: PathBuf::from("favorites.json"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[test]
    fn failed_save_leaves_flag_unchanged() {
        let mut inner = MemoryStore::default();
        inner.set(FAVORITES_KEY, r#"["Fufu"]"#.to_string()).unwrap();
        let mut favorites = FavoritesStore::load(ReadOnlyStore { inner });

        assert!(favorites.toggle("Jollof Rice").is_err());
        assert!(!favorites.is_favorite("Jollof Rice"));

        assert!(favorites.toggle("Fufu").is_err());
        assert!(favorites.is_favorite("Fufu"));
        assert_eq!(favorites.names(), ["Fufu"]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut favorites = FavoritesStore::load(MemoryStore::default());
        assert!(!favorites.is_favorite("Fufu"));

        assert!(favorites.toggle("Fufu").unwrap());
        assert!(favorites.is_favorite("Fufu"));

        assert!(!favorites.toggle("Fufu").unwrap());
        assert!(!favorites.is_favorite("Fufu"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn toggle_persists_sorted_json() {
        let mut favorites = FavoritesStore::load(MemoryStore::default());
        favorites.toggle("Jollof Rice").unwrap();
        favorites.toggle("Egusi Soup").unwrap();

        assert_eq!(
            favorites.store().get(FAVORITES_KEY).as_deref(),
            Some(r#"["Egusi Soup","Jollof Rice"]"#)
        );
    }

    #[test]
    fn load_reads_existing_value() {
        let mut store = MemoryStore::default();
        store
            .set(FAVORITES_KEY, r#"["Fufu","Curry Goat"]"#.to_string())
            .unwrap();

        let favorites = FavoritesStore::load(store);
        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites.names(), ["Curry Goat", "Fufu"]);
    }

    #[test]
    fn corrupt_value_starts_empty() {
        let mut store = MemoryStore::default();
        store.set(FAVORITES_KEY, "{not json".to_string()).unwrap();
        let favorites = FavoritesStore::load(store);
        assert!(favorites.is_empty());
    }

    #[test]
    fn names_are_exact_match() {
        let mut favorites = FavoritesStore::load(MemoryStore::default());
        favorites.toggle("Fufu").unwrap();
        assert!(!favorites.is_favorite("fufu"));
    }
}
