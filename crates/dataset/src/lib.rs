//! Reference data for the allergy checker.
//!
//! A [`Dataset`] bundles the restaurant/menu records, the ingredient alias
//! table, the allergen table and the rule book. It is parsed in one go and is
//! immutable afterwards; callers reload to pick up changes.

mod error;
mod restaurant;
mod rules;
mod table;

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

pub use error::*;
pub use restaurant::*;
pub use rules::*;
pub use table::{CsvTable, Row};

pub const RESTAURANTS_FILE: &str = "restaurants.json";
pub const RULES_FILE: &str = "rules.json";
pub const ALIASES_FILE: &str = "ingredient_aliases.csv";
pub const ALLERGENS_FILE: &str = "allergens.csv";

/// Raw text of the four reference tables.
#[derive(Clone, Copy, Debug)]
pub struct DatasetSources<'a> {
    pub restaurants: &'a str,
    pub rules: &'a str,
    pub aliases: &'a str,
    pub allergens: &'a str,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Dataset {
    pub restaurants: Vec<Restaurant>,
    pub rules: Rules,
    pub aliases: Vec<IngredientAlias>,
    pub allergens: Vec<Row>,
    pub skipped_rows: Vec<RowShapeError>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DatasetCounts {
    pub restaurants: usize,
    pub aliases: usize,
    pub allergens: usize,
    pub skipped_rows: usize,
}

impl Dataset {
    /// Load every reference table from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> DatasetResult<Self> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| DatasetError::Io { path, source })
        };

        let restaurants = read(RESTAURANTS_FILE)?;
        let rules = read(RULES_FILE)?;
        let aliases = read(ALIASES_FILE)?;
        let allergens = read(ALLERGENS_FILE)?;

        let dataset = Self::from_sources(DatasetSources {
            restaurants: &restaurants,
            rules: &rules,
            aliases: &aliases,
            allergens: &allergens,
        })?;

        tracing::info!(
            dir = %dir.display(),
            restaurants = dataset.restaurants.len(),
            aliases = dataset.aliases.len(),
            allergens = dataset.allergens.len(),
            skipped_rows = dataset.skipped_rows.len(),
            "Dataset loaded"
        );

        Ok(dataset)
    }

    pub fn from_sources(sources: DatasetSources<'_>) -> DatasetResult<Self> {
        let restaurants: Vec<Restaurant> = serde_json::from_str(sources.restaurants)
            .map_err(|source| DatasetError::Json {
                table: RESTAURANTS_FILE,
                source,
            })?;

        let rules: Rules = serde_json::from_str(sources.rules).map_err(|source| {
            DatasetError::Json {
                table: RULES_FILE,
                source,
            }
        })?;

        let alias_table = CsvTable::parse(ALIASES_FILE, sources.aliases)?;
        alias_table.require_column("keyword", ALIASES_FILE)?;
        alias_table.require_column("maps_to", ALIASES_FILE)?;

        let allergen_table = CsvTable::parse(ALLERGENS_FILE, sources.allergens)?;

        let aliases = alias_table
            .rows
            .iter()
            .filter_map(|row| {
                let alias = IngredientAlias::new(row["keyword"].as_str(), row["maps_to"].as_str());
                if alias.keyword.is_empty() {
                    tracing::warn!(maps_to = %alias.maps_to, "Skipping alias with empty keyword");
                    return None;
                }
                Some(alias)
            })
            .collect();

        let skipped_rows = alias_table
            .skipped
            .into_iter()
            .chain(allergen_table.skipped)
            .collect();

        Ok(Self {
            restaurants,
            rules,
            aliases,
            allergens: allergen_table.rows,
            skipped_rows,
        })
    }

    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    pub fn restaurants_in(&self, filter: &RestaurantFilter) -> Vec<&Restaurant> {
        self.restaurants
            .iter()
            .filter(|r| filter.matches(r))
            .collect()
    }

    /// Restaurants as raw records for the search engine.
    pub fn candidates(&self) -> Vec<Value> {
        self.restaurants
            .iter()
            .map(Restaurant::to_candidate)
            .collect()
    }

    pub fn counts(&self) -> DatasetCounts {
        DatasetCounts {
            restaurants: self.restaurants.len(),
            aliases: self.aliases.len(),
            allergens: self.allergens.len(),
            skipped_rows: self.skipped_rows.len(),
        }
    }
}
