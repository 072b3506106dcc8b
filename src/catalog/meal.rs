//! Recipe records as stored in the catalog data file

use serde::{Deserialize, Serialize};
use std::fmt;

/// A full recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub image: String,
    pub food_fact: String,
    #[serde(default)]
    pub description: String,

    // Minutes
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default)]
    pub total_time: u32,

    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub meal_type: String,

    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub servings: String,
    #[serde(default)]
    pub calories: String,
    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub ingredient_sections: Vec<IngredientSection>,
    #[serde(default)]
    pub nutrition: Nutrition,
}

/// Ingredients grouped under a heading such as "For the sauce"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSection {
    pub title: String,
    pub ingredients: Vec<String>,
}

/// Per-serving nutrition facts, kept as display strings ("8.2g")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    pub calories: String,
    pub carbohydrates: String,
    pub protein: String,
    pub fat: String,
    pub saturated_fat: String,
    pub polyunsaturated_fat: String,
    pub monounsaturated_fat: String,
    pub trans_fat: String,
    pub cholesterol: String,
    pub sodium: String,
    pub potassium: String,
    pub fiber: String,
    pub sugar: String,
    pub vitamin_a: String,
    pub vitamin_c: String,
    pub calcium: String,
    pub iron: String,
}

impl Nutrition {
    /// Labelled values in display order, skipping blanks
    #[must_use]
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        [
            ("Calories", &self.calories),
            ("Carbohydrates", &self.carbohydrates),
            ("Protein", &self.protein),
            ("Fat", &self.fat),
            ("Saturated Fat", &self.saturated_fat),
            ("Polyunsaturated Fat", &self.polyunsaturated_fat),
            ("Monounsaturated Fat", &self.monounsaturated_fat),
            ("Trans Fat", &self.trans_fat),
            ("Cholesterol", &self.cholesterol),
            ("Sodium", &self.sodium),
            ("Potassium", &self.potassium),
            ("Fiber", &self.fiber),
            ("Sugar", &self.sugar),
            ("Vitamin A", &self.vitamin_a),
            ("Vitamin C", &self.vitamin_c),
            ("Calcium", &self.calcium),
            ("Iron", &self.iron),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| (label, value.as_str()))
        .collect()
    }
}

impl Meal {
    #[must_use]
    pub fn formatted_time(&self) -> String {
        format!("{} mins", self.total_time)
    }

    /// Case-insensitive match on name or description
    #[must_use]
    pub fn matches_query(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
    }
}

/// Broad area a cuisine belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Caribbean,
    #[serde(rename = "West Africa")]
    WestAfrica,
    #[serde(rename = "East Africa")]
    EastAfrica,
    #[serde(rename = "Southern Africa")]
    SouthernAfrica,
    #[serde(rename = "Central Africa")]
    CentralAfrica,
    Africa,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Caribbean => "Caribbean",
            Self::WestAfrica => "West Africa",
            Self::EastAfrica => "East Africa",
            Self::SouthernAfrica => "Southern Africa",
            Self::CentralAfrica => "Central Africa",
            Self::Africa => "Africa",
        };
        f.write_str(text)
    }
}

/// One cuisine and its meals, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cuisine {
    /// Flag and adjective, e.g. "🇳🇬 Nigerian"
    pub label: String,
    pub name: String,
    /// Map image shown next to the cuisine
    pub map: String,
    #[serde(default = "default_region")]
    pub region: Region,
    #[serde(default)]
    pub meals: Vec<Meal>,
}

const fn default_region() -> Region {
    Region::Africa
}
