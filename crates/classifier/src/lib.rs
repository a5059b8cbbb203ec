//! Dish risk classification
//!
//! Checks a dish's ingredients and tags against the alias table, the rule book
//! and the user's normalized allergy profile, and produces a traffic-light
//! [`Verdict`] with one human-readable reason per finding.
//!
//! The verdict is advisory. Matching is plain case-insensitive substring
//! search, so it can both over- and under-report.

use safeplate_dataset::Dataset;
use safeplate_profile::normalize_allergens;
use safeplate_shared::{AllergenId, Color, Dish, Profile, Verdict};
use serde::Deserialize;

const CONTAINS_PREFIX: &str = "Contains or may contain";
const SESAME_TAG_REASON: &str = "Tag indicates sesame.";
const VEGAN_DAIRY_REASON: &str = "Dairy present (vegan override).";
const DAIRY_KEYWORDS: &[&str] = &["paneer", "cheese"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ClassifyOptions {
    /// Emit the vegan dairy reason once instead of once per override rule.
    #[serde(default)]
    pub dedupe_vegan_reasons: bool,
}

/// Classify with default options.
pub fn classify(dish: &Dish, profile: &Profile, dataset: &Dataset) -> Verdict {
    classify_with(dish, profile, dataset, &ClassifyOptions::default())
}

pub fn classify_with(
    dish: &Dish,
    profile: &Profile,
    dataset: &Dataset,
    options: &ClassifyOptions,
) -> Verdict {
    let wanted = normalize_allergens(profile.survey.as_ref());
    let text = dish.searchable_text();
    let tags = dish.lowercase_tags();
    let mut reasons = Vec::new();

    for alias in &dataset.aliases {
        if text.contains(&alias.keyword) && wanted.contains(&alias.maps_to) {
            reasons.push(format!(
                "{CONTAINS_PREFIX} **{}** (matched: {}).",
                alias.maps_to, alias.keyword
            ));
        }
    }

    if tags.iter().any(|tag| tag.contains("sesame"))
        && wanted.contains_allergen(AllergenId::Sesame)
    {
        reasons.push(SESAME_TAG_REASON.to_string());
    }

    // Shared-risk tags are flagged for everyone, whatever the profile says.
    for tag in &tags {
        if dataset.rules.is_shared_risk(tag) {
            reasons.push(format!("Shared-risk: {tag}."));
        }
    }

    if profile.is_vegan() {
        let has_dairy = DAIRY_KEYWORDS.iter().any(|k| text.contains(k));
        let repeats = if options.dedupe_vegan_reasons {
            dataset.rules.vegan_overrides.len().min(1)
        } else {
            dataset.rules.vegan_overrides.len()
        };

        if has_dairy {
            reasons.extend(std::iter::repeat_n(VEGAN_DAIRY_REASON.to_string(), repeats));
        }
    }

    let verdict = Verdict {
        color: color_for(&reasons),
        reasons,
    };

    tracing::debug!(
        color = %verdict.color,
        reasons = verdict.reasons.len(),
        wanted = wanted.len(),
        "Dish classified"
    );

    verdict
}

/// Red when any allergen match was found, yellow for any other finding.
pub fn color_for(reasons: &[String]) -> Color {
    if reasons.iter().any(|r| is_allergen_reason(r)) {
        Color::Red
    } else if !reasons.is_empty() {
        Color::Yellow
    } else {
        Color::Green
    }
}

pub fn is_allergen_reason(reason: &str) -> bool {
    reason.contains(CONTAINS_PREFIX)
}
