/// Brand and chain name fragments that imply a kind of food.
///
/// A search for "burger" should surface a McDonald's even when its record
/// never says burger.
const CHAIN_HINTS: &[(&str, &[&str])] = &[
    (
        "burger",
        &[
            "mcdonald",
            "mc donald",
            "burger king",
            "five guys",
            "wendy",
            "hardee",
            "carls jr",
            "shake shack",
            "in-n-out",
            "jack in the box",
            "whataburger",
            "fatburger",
            "johnny rockets",
            "smashburger",
        ],
    ),
    (
        "pizza",
        &["pizza hut", "domino", "papa john", "little caesars", "sbarro"],
    ),
    (
        "coffee",
        &[
            "starbucks",
            "costa",
            "tim hortons",
            "dunkin",
            "gloria jean",
            "arabica",
            "caribou coffee",
        ],
    ),
    ("vegan", &["by chloe", "vegan", "plant", "greens"]),
    ("chicken", &["kfc", "popeyes", "jollibee", "wingstop"]),
    ("sushi", &["sushi", "wagamama", "itsu"]),
    (
        "sandwich",
        &["subway", "jimmy john", "firehouse subs", "potbelly"],
    ),
    (
        "hot dog",
        &["nathan's", "wienerschnitzel", "portillo", "dog haus"],
    ),
];

/// Fragments for a canonical keyword, empty when it has no entry.
pub fn chain_hints(keyword: &str) -> &'static [&'static str] {
    CHAIN_HINTS
        .iter()
        .find(|(key, _)| *key == keyword)
        .map(|(_, hints)| *hints)
        .unwrap_or_default()
}
