use std::path::{Path, PathBuf};

use safeplate_dataset::{
    ALIASES_FILE, ALLERGENS_FILE, Dataset, DatasetError, RESTAURANTS_FILE, RULES_FILE,
    RestaurantFilter,
};
use temp_dir::TempDir;

const RESTAURANTS: &str = r#"[
  {"id": "r1", "name": "Tahini House", "city": "Dubai", "coords": [25.2, 55.27],
   "menu": [{"sku": "hummus", "ingredients": ["chickpeas", "tahini"], "tags": ["mezze"]}]}
]"#;
const RULES: &str = r#"{"shared_risk_tags": {"fried": "shared fryer"}, "vegan_overrides": []}"#;
const ALIASES: &str = "keyword,maps_to\ntahini,sesame\n";
const ALLERGENS: &str = "id,name\nsesame,Sesame\n";

fn write_dataset(dir: &TempDir, aliases: &str) -> anyhow::Result<()> {
    std::fs::write(dir.child(RESTAURANTS_FILE), RESTAURANTS)?;
    std::fs::write(dir.child(RULES_FILE), RULES)?;
    std::fs::write(dir.child(ALIASES_FILE), aliases)?;
    std::fs::write(dir.child(ALLERGENS_FILE), ALLERGENS)?;
    Ok(())
}

fn sample_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

#[test]
fn test_load_from_directory() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_dataset(&dir, ALIASES)?;

    let dataset = Dataset::load(dir.path())?;

    assert_eq!(dataset.restaurants.len(), 1);
    assert_eq!(dataset.aliases.len(), 1);
    assert_eq!(dataset.aliases[0].keyword, "tahini");
    assert_eq!(dataset.allergens.len(), 1);
    assert!(dataset.rules.is_shared_risk("fried"));

    let restaurant = dataset.restaurant("r1").expect("restaurant r1");
    let item = restaurant.menu_item("hummus").expect("menu item hummus");
    assert_eq!(item.dish().ingredients, vec!["chickpeas", "tahini"]);
    assert!(restaurant.menu_item("falafel").is_none());
    assert!(dataset.restaurant("r2").is_none());

    Ok(())
}

#[test]
fn test_missing_table_fails_whole_load() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_dataset(&dir, ALIASES)?;
    std::fs::remove_file(dir.child(RULES_FILE))?;

    let err = Dataset::load(dir.path()).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
    assert!(err.to_string().contains(RULES_FILE));

    Ok(())
}

#[test]
fn test_malformed_json_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_dataset(&dir, ALIASES)?;
    std::fs::write(dir.child(RESTAURANTS_FILE), "[{\"id\": ")?;

    let err = Dataset::load(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::Json {
            table: RESTAURANTS_FILE,
            ..
        }
    ));

    Ok(())
}

#[test]
fn test_alias_table_without_header_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_dataset(&dir, "")?;

    let err = Dataset::load(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::MissingHeader {
            table: ALIASES_FILE
        }
    ));

    Ok(())
}

#[test]
fn test_alias_table_needs_maps_to_column() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_dataset(&dir, "keyword,allergen\ntahini,sesame\n")?;

    let err = Dataset::load(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::MissingColumn {
            column: "maps_to",
            ..
        }
    ));

    Ok(())
}

#[test]
fn test_malformed_rows_are_skipped_not_fatal() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    write_dataset(
        &dir,
        "keyword,maps_to\ntahini,sesame\nwalnut\nshrimp,shellfish\n,egg\n",
    )?;

    let dataset = Dataset::load(dir.path())?;

    let keywords: Vec<_> = dataset.aliases.iter().map(|a| a.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["tahini", "shrimp"]);
    assert_eq!(dataset.skipped_rows.len(), 1);
    assert_eq!(dataset.skipped_rows[0].table, ALIASES_FILE);
    assert_eq!(dataset.counts().skipped_rows, 1);

    Ok(())
}

#[test]
fn test_sample_dataset_loads() -> anyhow::Result<()> {
    let dataset = Dataset::load(sample_data_dir())?;
    let counts = dataset.counts();

    assert_eq!(counts.restaurants, 5);
    assert!(counts.aliases > 20);
    assert_eq!(counts.allergens, 10);
    assert_eq!(counts.skipped_rows, 0);
    assert_eq!(dataset.candidates().len(), 5);

    let dubai = dataset.restaurants_in(&RestaurantFilter {
        city: Some("dubai".into()),
        bbox: None,
    });
    assert_eq!(dubai.len(), 4);

    let marina = dataset.restaurants_in(&RestaurantFilter {
        city: None,
        bbox: Some("55.0,25.0,55.2,25.1".parse()?),
    });
    assert_eq!(marina.len(), 1);
    assert_eq!(marina[0].id, "r-sakura");

    Ok(())
}
