//! Best-effort shape resolution for candidate records.
//!
//! Candidate lists come from the bundled dataset, from places lookups and
//! from older client payloads, and each names its fields differently. Every
//! field is resolved by an ordered list of small strategies; the first one
//! that produces a value wins.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};

type Record = Map<String, Value>;

/// A coordinate strategy reads one record shape or gives up.
pub type CoordinateStrategy = fn(&Record) -> Option<Coordinates>;

const NAME_KEYS: &[&str] = &["name", "title", "text"];
const ID_KEYS: &[&str] = &["id", "_id", "place_id", "sku"];
const TAG_KEYS: &[&str] = &["tags", "categories", "category", "cuisine", "type"];
const ADDRESS_KEYS: &[&str] = &["address", "location_text", "place_name", "city"];
const DESCRIPTION_KEYS: &[&str] = &["description", "desc"];
const PAIR_KEYS: &[&str] = &["center", "coordinates", "coords", "position"];
const NESTED_KEYS: &[&str] = &["location", "position", "geometry", "geo"];
const TAG_SEPARATORS: &[char] = &['|', ',', ';', '/'];

/// Strategies applied directly to a record, in priority order.
pub const COORDINATE_STRATEGIES: &[CoordinateStrategy] = &[
    lng_lat_fields,
    longitude_latitude_fields,
    numeric_pair,
    nested_location,
];

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinates {
    pub lng: f64,
    pub lat: f64,
}

/// Canonical view of a heterogeneous candidate record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchCandidate {
    pub id: String,
    pub name: String,
    pub tags: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl SearchCandidate {
    /// Resolve a raw record. `None` when the record is not an object or has
    /// no usable name.
    pub fn resolve(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        let name = resolve_name(record)?;

        Some(Self {
            id: resolve_id(record).unwrap_or_else(|| name.clone()),
            tags: resolve_tags(record),
            address: first_text(record, ADDRESS_KEYS),
            description: first_text(record, DESCRIPTION_KEYS),
            coordinates: resolve_coordinates(record),
            name,
        })
    }

    /// Lowercased name, tags, address and description, space separated.
    pub fn blob(&self) -> String {
        let mut parts = vec![self.name.as_str()];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.extend(self.address.as_deref());
        parts.extend(self.description.as_deref());
        parts.join(" ").to_lowercase()
    }
}

fn first_text(record: &Record, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(*key)?.as_str())
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

pub fn resolve_name(record: &Record) -> Option<String> {
    first_text(record, NAME_KEYS)
}

pub fn resolve_id(record: &Record) -> Option<String> {
    ID_KEYS.iter().find_map(|key| match record.get(*key)? {
        Value::String(id) if !id.trim().is_empty() => Some(id.trim().to_string()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    })
}

/// Tags from every tag-like field, including those under `properties`.
pub fn resolve_tags(record: &Record) -> BTreeSet<String> {
    let properties = record.get("properties").and_then(Value::as_object);

    [Some(record), properties]
        .into_iter()
        .flatten()
        .flat_map(|source| TAG_KEYS.iter().filter_map(move |key| source.get(*key)))
        .flat_map(tag_values)
        .collect()
}

fn tag_values(value: &Value) -> Vec<String> {
    let raw: Vec<&str> = match value {
        Value::String(text) => text.split(TAG_SEPARATORS).collect(),
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => vec![],
    };

    raw.into_iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

pub fn resolve_coordinates(record: &Record) -> Option<Coordinates> {
    COORDINATE_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(record))
}

fn number(record: &Record, key: &str) -> Option<f64> {
    record.get(key)?.as_f64().filter(|n| n.is_finite())
}

/// Numeric `lng`/`lat` fields (`lon` is accepted for `lng`).
pub fn lng_lat_fields(record: &Record) -> Option<Coordinates> {
    let lng = number(record, "lng").or_else(|| number(record, "lon"))?;
    let lat = number(record, "lat")?;
    Some(Coordinates { lng, lat })
}

pub fn longitude_latitude_fields(record: &Record) -> Option<Coordinates> {
    Some(Coordinates {
        lng: number(record, "longitude")?,
        lat: number(record, "latitude")?,
    })
}

/// A two-element numeric array read as `(lng, lat)`.
pub fn numeric_pair(record: &Record) -> Option<Coordinates> {
    PAIR_KEYS.iter().find_map(|key| {
        let Some(Value::Array(pair)) = record.get(*key) else {
            return None;
        };
        match pair.as_slice() {
            [lng, lat] => Some(Coordinates {
                lng: lng.as_f64().filter(|n| n.is_finite())?,
                lat: lat.as_f64().filter(|n| n.is_finite())?,
            }),
            _ => None,
        }
    })
}

/// A nested object (for example a GeoJSON `geometry`) holding one of the
/// flat shapes.
pub fn nested_location(record: &Record) -> Option<Coordinates> {
    NESTED_KEYS.iter().find_map(|key| {
        let nested = record.get(*key)?.as_object()?;
        lng_lat_fields(nested)
            .or_else(|| longitude_latitude_fields(nested))
            .or_else(|| numeric_pair(nested))
    })
}
