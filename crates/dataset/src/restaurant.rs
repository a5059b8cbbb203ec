use std::str::FromStr;

use safeplate_shared::Dish;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::error::BoundingBoxError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MenuItem {
    pub fn dish(&self) -> Dish {
        Dish {
            ingredients: self.ingredients.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// A restaurant record from `restaurants.json`.
///
/// `coords` follows the data file convention of `[lat, lng]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<[f64; 2]>,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Restaurant {
    pub fn menu_item(&self, sku: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.sku == sku)
    }

    pub fn lat_lng(&self) -> Option<(f64, f64)> {
        self.coords.map(|[lat, lng]| (lat, lng))
    }

    /// Record for the search engine, with explicit `lat`/`lng` fields so the
    /// shape resolver never has to guess the order of `coords`.
    pub fn to_candidate(&self) -> Value {
        let mut record = self.extra.clone();
        record.insert("id".into(), json!(self.id));
        record.insert("name".into(), json!(self.name));
        if !self.city.is_empty() {
            record.insert("city".into(), json!(self.city));
        }
        if let Some((lat, lng)) = self.lat_lng() {
            record.insert("lat".into(), json!(lat));
            record.insert("lng".into(), json!(lng));
        }
        Value::Object(record)
    }
}

/// `west,south,east,north` in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lng >= self.west && lng <= self.east && lat >= self.south && lat <= self.north
    }
}

impl FromStr for BoundingBox {
    type Err = BoundingBoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| BoundingBoxError::NotANumber(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            &[west, south, east, north] => Ok(Self {
                west,
                south,
                east,
                north,
            }),
            _ => Err(BoundingBoxError::WrongArity(values.len())),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RestaurantFilter {
    pub city: Option<String>,
    pub bbox: Option<BoundingBox>,
}

impl RestaurantFilter {
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if let Some(city) = self.city.as_deref() {
            if !restaurant.city.eq_ignore_ascii_case(city.trim()) {
                return false;
            }
        }

        match (self.bbox, restaurant.lat_lng()) {
            (None, _) => true,
            (Some(bbox), Some((lat, lng))) => bbox.contains(lat, lng),
            (Some(_), None) => false,
        }
    }
}
