use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Canonical allergen families a profile can declare.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum AllergenId {
    Peanut,
    Sesame,
    TreeNut,
    Gluten,
    Lactose,
    MilkProtein,
    Egg,
    Soy,
    Fish,
    Shellfish,
}

impl AllergenId {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

/// A normalized survey token.
///
/// Words that no rule recognizes are kept as `Unknown` so they can still be
/// matched against alias targets that are not one of the canonical ids.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AllergenToken {
    Known(AllergenId),
    Unknown(String),
}

impl AllergenToken {
    pub fn as_str(&self) -> &str {
        match self {
            AllergenToken::Known(id) => id.as_str(),
            AllergenToken::Unknown(word) => word,
        }
    }
}

impl From<AllergenId> for AllergenToken {
    fn from(value: AllergenId) -> Self {
        AllergenToken::Known(value)
    }
}

impl fmt::Display for AllergenToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of allergens a profile wants flagged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllergySet(BTreeSet<AllergenToken>);

impl AllergySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: impl Into<AllergenToken>) -> bool {
        self.0.insert(token.into())
    }

    /// Lookup by identifier text, as found in the `maps_to` column of the
    /// alias table.
    pub fn contains(&self, id: &str) -> bool {
        let id = id.trim();
        self.0
            .iter()
            .any(|token| token.as_str().eq_ignore_ascii_case(id))
    }

    pub fn contains_allergen(&self, id: AllergenId) -> bool {
        self.0.contains(&AllergenToken::Known(id))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AllergenToken> {
        self.0.iter()
    }
}

impl FromIterator<AllergenToken> for AllergySet {
    fn from_iter<T: IntoIterator<Item = AllergenToken>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<AllergenId> for AllergySet {
    fn from_iter<T: IntoIterator<Item = AllergenId>>(iter: T) -> Self {
        Self(iter.into_iter().map(AllergenToken::Known).collect())
    }
}

impl<'a> IntoIterator for &'a AllergySet {
    type Item = &'a AllergenToken;
    type IntoIter = std::collections::btree_set::Iter<'a, AllergenToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
