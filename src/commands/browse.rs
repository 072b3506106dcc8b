//! Catalog browsing commands
//!
//! These return data; printing lives in `output::display`.

use crate::catalog::{ALL_MEAL_TYPES, Catalog, MEAL_TYPES, Meal};
use crate::favorites::{FavoritesStore, KeyValueStore};
use anyhow::{Result, bail};
use tracing::info;

/// Meals of one cuisine (or every cuisine), optionally narrowed by meal type
///
/// # Errors
///
/// Fails on an unknown cuisine or meal type.
pub fn list_meals<'a>(
    catalog: &'a Catalog,
    cuisine: Option<&str>,
    meal_type: Option<&str>,
) -> Result<Vec<&'a Meal>> {
    let meal_type = meal_type.unwrap_or(ALL_MEAL_TYPES);
    let Some(canonical_type) = MEAL_TYPES
        .iter()
        .find(|known| known.eq_ignore_ascii_case(meal_type))
    else {
        bail!(
            "Unknown meal type '{meal_type}'. Choose one of: {}",
            MEAL_TYPES.join(", ")
        );
    };

    match cuisine {
        Some(name) => {
            let Some(found) = catalog.find_cuisine(name) else {
                bail!("Unknown cuisine '{name}'. Run `quick_cook cuisines` to see them all");
            };
            Ok(catalog.filter_by_meal_type(&found.name, canonical_type))
        }
        None => Ok(catalog
            .all_meals()
            .into_iter()
            .filter(|meal| {
                *canonical_type == ALL_MEAL_TYPES || meal.meal_type == *canonical_type
            })
            .collect()),
    }
}

/// Meals matching a free-text query
///
/// # Errors
///
/// Fails on a blank query.
pub fn search_meals<'a>(catalog: &'a Catalog, query: &str) -> Result<Vec<&'a Meal>> {
    if query.trim().is_empty() {
        bail!("Search query must not be empty");
    }
    Ok(catalog.search(query.trim()))
}

/// Look up one meal by name
///
/// # Errors
///
/// Fails if no meal has that name.
pub fn show_meal<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Meal> {
    match catalog.find(name) {
        Some(meal) => Ok(meal),
        None => bail!("No meal named '{name}'. Try `quick_cook search {name}`"),
    }
}

/// Toggle a meal's favorite flag by name
///
/// The catalog's spelling of the name is what gets stored. Returns the meal
/// and whether it is now a favorite.
///
/// # Errors
///
/// Fails if no meal has that name or the favorites cannot be saved.
pub fn toggle_favorite<'a, S: KeyValueStore>(
    catalog: &'a Catalog,
    favorites: &mut FavoritesStore<S>,
    name: &str,
) -> Result<(&'a Meal, bool)> {
    let meal = show_meal(catalog, name)?;
    let now_favorite = favorites.toggle(&meal.name)?;
    info!(meal = %meal.name, now_favorite, "favorite toggled");
    Ok((meal, now_favorite))
}
