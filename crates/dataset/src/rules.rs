use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Alias keyword that implies an allergen when found in dish text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientAlias {
    pub keyword: String,
    pub maps_to: String,
}

impl IngredientAlias {
    pub fn new(keyword: impl Into<String>, maps_to: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into().trim().to_lowercase(),
            maps_to: maps_to.into().trim().to_string(),
        }
    }
}

/// Opaque override rule applied to vegan profiles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VeganOverride(pub Value);

/// Contents of `rules.json`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default, deserialize_with = "lowercase_keys")]
    pub shared_risk_tags: BTreeMap<String, Value>,
    #[serde(default)]
    pub vegan_overrides: Vec<VeganOverride>,
}

impl Rules {
    /// Risk label for a tag flagged as a cross-contamination risk.
    ///
    /// Entries whose label is `false`, `null`, `0` or an empty string are
    /// treated as not flagged.
    pub fn shared_risk_label(&self, tag: &str) -> Option<&Value> {
        self.shared_risk_tags
            .get(&tag.to_lowercase())
            .filter(|label| is_truthy(label))
    }

    pub fn is_shared_risk(&self, tag: &str) -> bool {
        self.shared_risk_label(tag).is_some()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn lowercase_keys<'de, D>(deserializer: D) -> Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = BTreeMap::<String, Value>::deserialize(deserializer)?;
    Ok(map
        .into_iter()
        .map(|(tag, label)| (tag.trim().to_lowercase(), label))
        .collect())
}
