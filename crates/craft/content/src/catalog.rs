//! Embedded consumable catalogs and their loaders.

use std::sync::LazyLock;

use anyhow::Context;
use craft_core::ConsumableVariant;
use serde::{Deserialize, Serialize};

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Catalog structure for RON data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumableCatalog {
    pub variants: Vec<ConsumableVariant>,
}

const FOOD_RON: &str = include_str!("../data/food.ron");
const POTIONS_RON: &str = include_str!("../data/potions.ron");

/// Parses a consumable catalog from RON text.
pub fn parse_catalog(source: &str) -> LoadResult<Vec<ConsumableVariant>> {
    let catalog: ConsumableCatalog =
        ron::from_str(source).context("failed to parse consumable catalog RON")?;
    Ok(catalog.variants)
}

/// Parses the embedded food catalog.
pub fn load_food_catalog() -> LoadResult<Vec<ConsumableVariant>> {
    parse_catalog(FOOD_RON)
}

/// Parses the embedded potion catalog.
pub fn load_potion_catalog() -> LoadResult<Vec<ConsumableVariant>> {
    parse_catalog(POTIONS_RON)
}

static FOOD: LazyLock<Vec<ConsumableVariant>> =
    LazyLock::new(|| load_food_catalog().expect("embedded food catalog must parse"));

static POTIONS: LazyLock<Vec<ConsumableVariant>> =
    LazyLock::new(|| load_potion_catalog().expect("embedded potion catalog must parse"));

/// Food catalog in declaration order. Parsed once at first access.
pub fn food_catalog() -> &'static [ConsumableVariant] {
    &FOOD
}

/// Potion catalog in declaration order. Parsed once at first access.
pub fn potion_catalog() -> &'static [ConsumableVariant] {
    &POTIONS
}
