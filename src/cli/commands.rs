use anyhow::{Context, Result};
use clap::Args;
use safeplate_classifier::classify_with;
use safeplate_dataset::Dataset;
use safeplate_search::{SearchQuery, rank_with};
use safeplate_shared::{Profile, Survey};
use serde::Serialize;
use serde_json::json;

use crate::config::Config;

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Restaurant id from restaurants.json
    #[arg(long)]
    pub restaurant: String,

    /// Menu item sku
    #[arg(long)]
    pub sku: String,

    #[arg(long)]
    pub allergies: Option<String>,

    #[arg(long)]
    pub intolerances: Option<String>,

    #[arg(long)]
    pub avoid: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    /// Diet, e.g. "vegan"
    #[arg(long)]
    pub diet: Option<String>,
}

impl CheckArgs {
    pub fn profile(&self) -> Profile {
        let survey = Survey {
            allergies: self.allergies.clone(),
            intolerances: self.intolerances.clone(),
            avoid: self.avoid.clone(),
            notes: self.notes.clone(),
        };

        Profile {
            survey: (survey != Survey::default()).then_some(survey),
            diet: self.diet.clone(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Keyword, e.g. "burgers"
    #[arg(long, default_value = "")]
    pub q: String,

    /// Diet or cuisine filter
    #[arg(long, default_value = "")]
    pub cuisine: String,

    #[arg(long)]
    pub limit: Option<usize>,
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_dataset(config: &Config) -> Result<Dataset> {
    Dataset::load(&config.dataset.dir)
        .with_context(|| format!("loading dataset from {}", config.dataset.dir.display()))
}

/// Classify one menu item and print the verdict.
#[tracing::instrument(skip(config))]
pub fn check(config: &Config, args: &CheckArgs) -> Result<()> {
    let dataset = load_dataset(config)?;

    let restaurant = dataset
        .restaurant(&args.restaurant)
        .with_context(|| format!("restaurant `{}` not found", args.restaurant))?;
    let item = restaurant
        .menu_item(&args.sku)
        .with_context(|| format!("menu item `{}` not found", args.sku))?;

    let result = classify_with(&item.dish(), &args.profile(), &dataset, &config.classifier);

    print_json(&json!({
        "restaurant": restaurant.name,
        "item": item,
        "result": result,
    }))
}

#[tracing::instrument(skip(config))]
pub fn search(config: &Config, args: &SearchArgs) -> Result<()> {
    let dataset = load_dataset(config)?;

    let query = SearchQuery {
        keyword: args.q.clone(),
        filter: args.cuisine.clone(),
        limit: args.limit,
    };
    let results = rank_with(&dataset.candidates(), &query, &config.search);

    print_json(&json!({ "results": results }))
}

/// Load the dataset and print table counts and skipped rows.
#[tracing::instrument(skip(config))]
pub fn dataset(config: &Config) -> Result<()> {
    let dataset = load_dataset(config)?;

    print_json(&json!({
        "ok": true,
        "counts": dataset.counts(),
        "skipped_rows": dataset.skipped_rows,
    }))
}
