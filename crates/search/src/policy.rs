use serde::{Deserialize, Serialize};

/// Largest magnitude accepted for any single weight.
pub const MAX_WEIGHT: i32 = 1000;

/// Tags that mark a candidate as a place serving food.
pub const FOOD_VENUE_TAGS: &[&str] = &["restaurant", "food", "diner", "eatery", "cafe"];

/// Scoring weights for the ranking engine.
///
/// Defaults reproduce the production ranking; the service reads overrides
/// from the `search` configuration section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingPolicy {
    /// Keyword found in the candidate name.
    pub name_match: i32,
    /// Keyword found anywhere in the candidate text.
    pub blob_match: i32,
    /// Added once per chain fragment found in the candidate text.
    pub chain_hint: i32,
    pub filter_match: i32,
    /// Applied when a filter is given but not found. Negative.
    pub filter_miss: i32,
    /// Score of every candidate when neither keyword nor filter is given.
    pub baseline: i32,
    /// Drop candidates whose tags do not look like a food venue.
    pub restaurants_only: bool,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            name_match: 4,
            blob_match: 2,
            chain_hint: 5,
            filter_match: 2,
            filter_miss: -2,
            baseline: 1,
            restaurants_only: false,
        }
    }
}

impl RankingPolicy {
    pub fn validate(&self) -> Result<(), String> {
        for (name, weight) in [
            ("name_match", self.name_match),
            ("blob_match", self.blob_match),
            ("chain_hint", self.chain_hint),
            ("filter_match", self.filter_match),
            ("baseline", self.baseline),
        ] {
            if !(1..=MAX_WEIGHT).contains(&weight) {
                return Err(format!(
                    "search.{name} must be between 1 and {MAX_WEIGHT}, got {weight}"
                ));
            }
        }

        if !(-MAX_WEIGHT..=-1).contains(&self.filter_miss) {
            return Err(format!(
                "search.filter_miss must be between -{MAX_WEIGHT} and -1, got {}",
                self.filter_miss
            ));
        }

        Ok(())
    }
}
