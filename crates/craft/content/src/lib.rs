//! Static consumable content for the configuration engine.
//!
//! Houses the immutable food and potion catalogs as embedded RON data,
//! parsed once at first access. Catalog order in the data files is the
//! declaration order the search engine preserves for empty queries.
//!
//! Content is consumed by the frontend selectors and never appears in
//! core state; profiles hold owned copies of the variants they select.

pub mod catalog;

pub use catalog::{
    ConsumableCatalog, LoadResult, food_catalog, load_food_catalog, load_potion_catalog,
    parse_catalog, potion_catalog,
};
