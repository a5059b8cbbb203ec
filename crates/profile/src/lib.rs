//! Turns free-text allergy survey answers into a normalized allergen set.

use std::sync::LazyLock;

use regex::Regex;
use safeplate_shared::{AllergenId, AllergenToken, AllergySet, Survey};

/// Splits on `,` `;` `/` and on the standalone word "and".
static DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;/]|\band\b").expect("delimiter pattern is valid"));

/// Substring rules, first match wins.
const KEYWORD_RULES: &[(&[&str], AllergenId)] = &[
    (&["peanut"], AllergenId::Peanut),
    (&["sesame"], AllergenId::Sesame),
    (
        &["almond", "pistachio", "walnut", "tree nut"],
        AllergenId::TreeNut,
    ),
    (&["gluten", "wheat", "barley", "rye"], AllergenId::Gluten),
    (&["lactose"], AllergenId::Lactose),
    (&["milk", "cheese", "casein"], AllergenId::MilkProtein),
    (&["egg"], AllergenId::Egg),
    (&["soy"], AllergenId::Soy),
    (&["fish"], AllergenId::Fish),
    (
        &["shrimp", "prawn", "crab", "shellfish"],
        AllergenId::Shellfish,
    ),
];

/// Map one lowercased token to its allergen, or keep it as an unknown word.
pub fn normalize_token(token: &str) -> AllergenToken {
    let token = token.trim().to_lowercase();

    KEYWORD_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| token.contains(k)))
        .map(|(_, id)| AllergenToken::Known(*id))
        .unwrap_or(AllergenToken::Unknown(token))
}

/// Lowercase, split and trim free text into non-empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let text = text.to_lowercase();

    DELIMITERS
        .split(&text)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokens of every answered survey field, in field order.
pub fn survey_tokens(survey: &Survey) -> Vec<String> {
    tokenize(&survey.fields().collect::<Vec<_>>().join(","))
}

/// Normalized allergen set of a survey. An absent survey yields an empty set.
pub fn normalize_allergens(survey: Option<&Survey>) -> AllergySet {
    match survey {
        Some(survey) => survey_tokens(survey)
            .iter()
            .map(|token| normalize_token(token))
            .collect(),
        None => AllergySet::new(),
    }
}
