use std::path::Path;

use safeplate_dataset::Dataset;
use safeplate_search::{Coordinates, RankingPolicy, SearchQuery, rank, rank_with};
use serde_json::{Value, json};

fn sample_candidates() -> anyhow::Result<Vec<Value>> {
    let dataset = Dataset::load(Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data"))?;
    Ok(dataset.candidates())
}

fn names(results: &[safeplate_search::RankedResult]) -> Vec<&str> {
    results.iter().map(|r| r.candidate.name.as_str()).collect()
}

#[test]
fn test_chain_hint_beats_plain_diner() {
    let candidates = vec![
        json!({"name": "Generic Diner", "tags": ["diner"], "lat": 25.1, "lng": 55.1}),
        json!({"name": "McDonald's", "tags": ["fast food"], "lat": 25.2, "lng": 55.2}),
    ];

    let results = rank(&candidates, "burger", "");

    assert_eq!(names(&results)[0], "McDonald's");
    let diner = results.iter().position(|r| r.candidate.name == "Generic Diner");
    assert!(diner.is_none_or(|index| index > 0));
}

#[test]
fn test_sample_burger_search() -> anyhow::Result<()> {
    let candidates = sample_candidates()?;

    let results = rank(&candidates, "Burgers", "");

    assert_eq!(names(&results), vec!["McDonald's Jumeirah"]);
    assert_eq!(results[0].score, 2 + 5);
    assert_eq!(
        results[0].candidate.coordinates,
        Some(Coordinates {
            lng: 55.2708,
            lat: 25.2048
        })
    );

    Ok(())
}

#[test]
fn test_empty_query_lists_everything_by_name() -> anyhow::Result<()> {
    let candidates = sample_candidates()?;

    let results = rank(&candidates, "  ", "");

    assert!(results.iter().all(|r| r.score == 1));
    assert_eq!(
        names(&results),
        vec![
            "Generic Diner",
            "Green Leaf Cafe",
            "McDonald's Jumeirah",
            "Sakura Sushi Bar",
            "Spice Route",
        ]
    );

    Ok(())
}

#[test]
fn test_filter_rewards_and_penalizes() -> anyhow::Result<()> {
    let candidates = sample_candidates()?;

    let vegan_only = rank(&candidates, "", "Vegan");
    assert_eq!(names(&vegan_only), vec!["Green Leaf Cafe"]);
    assert_eq!(vegan_only[0].score, 2);

    // Strong keyword match survives a missed filter.
    let burger_vegan = rank(&candidates, "burger", "vegan");
    assert_eq!(
        names(&burger_vegan),
        vec!["McDonald's Jumeirah", "Green Leaf Cafe"]
    );
    assert_eq!(burger_vegan[0].score, 7 - 2);
    assert_eq!(burger_vegan[1].score, 2);

    Ok(())
}

#[test]
fn test_ranking_is_idempotent() -> anyhow::Result<()> {
    let candidates = sample_candidates()?;

    for (keyword, filter) in [("sushi", ""), ("", ""), ("route", "indian")] {
        assert_eq!(
            rank(&candidates, keyword, filter),
            rank(&candidates, keyword, filter)
        );
    }

    Ok(())
}

#[test]
fn test_nameless_candidates_are_never_ranked() {
    let candidates = vec![
        json!({"id": 7, "tags": ["burger"]}),
        json!({"title": "   ", "cuisine": "burger"}),
        json!(42),
        json!(["Burger Barn"]),
        json!({"title": "Burger Barn"}),
    ];

    assert_eq!(names(&rank(&candidates, "burger", "")), vec!["Burger Barn"]);
    assert_eq!(names(&rank(&candidates, "", "")), vec!["Burger Barn"]);
}

#[test]
fn test_places_features_resolve() {
    let candidates = vec![json!({
        "id": "poi.123",
        "text": "Starbucks",
        "place_name": "Starbucks, Dubai Mall, Dubai",
        "center": [55.2796, 25.1972],
        "properties": {"category": "coffee, cafe"}
    })];

    let results = rank(&candidates, "coffee", "");

    assert_eq!(results.len(), 1);
    let candidate = &results[0].candidate;
    assert_eq!(candidate.id, "poi.123");
    assert_eq!(candidate.address.as_deref(), Some("Starbucks, Dubai Mall, Dubai"));
    assert_eq!(
        candidate.coordinates,
        Some(Coordinates {
            lng: 55.2796,
            lat: 25.1972
        })
    );
    // blob match on the category plus the "starbucks" fragment
    assert_eq!(results[0].score, 2 + 5);
}

#[test]
fn test_policy_overrides() {
    let candidates = vec![
        json!({"name": "Pizza Hut", "type": "restaurant"}),
        json!({"name": "Pizza Oven Supplies", "type": "hardware"}),
        json!({"name": "Domino's", "type": "restaurant"}),
    ];

    let default = rank(&candidates, "pizza", "");
    assert_eq!(
        names(&default),
        vec!["Pizza Hut", "Pizza Oven Supplies", "Domino's"]
    );

    let policy = RankingPolicy {
        chain_hint: 20,
        restaurants_only: true,
        ..Default::default()
    };
    let tuned = rank_with(&candidates, &SearchQuery::new("pizza", "").with_limit(1), &policy);
    assert_eq!(names(&tuned), vec!["Pizza Hut"]);
    assert_eq!(tuned[0].score, 4 + 2 + 20);

    let tuned = rank_with(&candidates, &SearchQuery::new("pizza", ""), &policy);
    assert_eq!(names(&tuned), vec!["Pizza Hut", "Domino's"]);
}

#[test]
fn test_ties_break_by_name_ignoring_case() {
    let candidates = vec![
        json!({"name": "Banana Hut", "cuisine": "thai"}),
        json!({"name": "apple bistro", "cuisine": "thai"}),
        json!({"name": "Cherry Grill", "cuisine": "thai"}),
    ];

    let listed = rank(&candidates, "", "");
    assert_eq!(names(&listed), vec!["apple bistro", "Banana Hut", "Cherry Grill"]);

    let filtered = rank(&candidates, "", "thai");
    assert!(filtered.iter().all(|r| r.score == 2));
    assert_eq!(names(&filtered), vec!["apple bistro", "Banana Hut", "Cherry Grill"]);
}
