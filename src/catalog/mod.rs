//! Recipe catalog
//!
//! An immutable mapping from cuisine to an ordered list of meals, loaded from
//! a JSON data asset. The guessing game draws its playlist from here.

mod embedded;
pub mod loader;
mod meal;

pub use embedded::{CATALOG_JSON, GAME_DISHES, GAME_DISHES_COUNT};
pub use meal::{Cuisine, IngredientSection, Meal, Nutrition, Region};

use crate::favorites::{FavoritesStore, KeyValueStore};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Meal-type filter value that keeps everything
pub const ALL_MEAL_TYPES: &str = "All";

/// Meal types offered by the browse filter
pub const MEAL_TYPES: [&str; 6] = [
    ALL_MEAL_TYPES,
    "Breakfast",
    "Lunch",
    "Dinner",
    "Snack",
    "Dessert",
];

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog has no cuisines")]
    Empty,
}

#[derive(Deserialize)]
struct CatalogFile {
    cuisines: Vec<Cuisine>,
}

/// All cuisines with their meals, in declaration order
#[derive(Debug, Clone)]
pub struct Catalog {
    cuisines: Vec<Cuisine>,
    // Lowercased label and plain name -> index into `cuisines`
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from cuisines
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` if `cuisines` is empty.
    pub fn new(cuisines: Vec<Cuisine>) -> Result<Self, CatalogError> {
        if cuisines.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = FxHashMap::default();
        for (i, cuisine) in cuisines.iter().enumerate() {
            index.entry(cuisine.label.to_lowercase()).or_insert(i);
            index.entry(cuisine.name.to_lowercase()).or_insert(i);
        }

        Ok(Self { cuisines, index })
    }

    /// Parse a catalog from its JSON representation
    ///
    /// # Errors
    /// Returns `CatalogError::Parse` on malformed JSON and
    /// `CatalogError::Empty` if no cuisines are listed.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.cuisines)
    }

    #[must_use]
    pub fn cuisines(&self) -> &[Cuisine] {
        &self.cuisines
    }

    /// Look up a cuisine by label ("🇳🇬 Nigerian") or name ("nigerian")
    #[must_use]
    pub fn find_cuisine(&self, name: &str) -> Option<&Cuisine> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.cuisines[i])
    }

    /// Meals of one cuisine; empty for an unknown cuisine
    #[must_use]
    pub fn cuisine(&self, name: &str) -> &[Meal] {
        self.find_cuisine(name)
            .map_or(&[], |cuisine| cuisine.meals.as_slice())
    }

    /// Every meal, cuisine by cuisine
    #[must_use]
    pub fn all_meals(&self) -> Vec<&Meal> {
        self.cuisines
            .iter()
            .flat_map(|cuisine| cuisine.meals.iter())
            .collect()
    }

    /// Meals of a cuisine with the given meal type; `"All"` keeps everything
    #[must_use]
    pub fn filter_by_meal_type(&self, cuisine: &str, meal_type: &str) -> Vec<&Meal> {
        self.cuisine(cuisine)
            .iter()
            .filter(|meal| meal_type == ALL_MEAL_TYPES || meal.meal_type == meal_type)
            .collect()
    }

    /// Meals whose name or description contains `query`, ignoring case
    ///
    /// An empty query returns nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Meal> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.cuisines
            .iter()
            .flat_map(|cuisine| cuisine.meals.iter())
            .filter(|meal| meal.matches_query(&query))
            .collect()
    }

    /// First meal with this name, ignoring case
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Meal> {
        let name = name.trim().to_lowercase();
        self.cuisines
            .iter()
            .flat_map(|cuisine| cuisine.meals.iter())
            .find(|meal| meal.name.to_lowercase() == name)
    }

    /// Favorited meals in catalog order
    #[must_use]
    pub fn favorites<S: KeyValueStore>(&self, store: &FavoritesStore<S>) -> Vec<&Meal> {
        self.cuisines
            .iter()
            .flat_map(|cuisine| cuisine.meals.iter())
            .filter(|meal| store.is_favorite(&meal.name))
            .collect()
    }
}
