//! Favorites and persisted flags
//!
//! Storage is injected through `KeyValueStore` so nothing here depends on a
//! particular backend.

mod manager;
mod store;

pub use manager::{FAVORITES_KEY, FavoritesStore};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
