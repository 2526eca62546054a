//! Static brochure-site generator for the Sapori product catalog.
//!
//! Loads a JSON data file of categories, products and recipes, derives a
//! flattened recipe index, and renders the catalog, the per-product detail
//! pages (with printable variants) and a filterable recipe list as static
//! HTML. A small preview server drives the filter controls interactively.

pub mod config;
pub mod error;
pub mod filter;
pub mod index;
pub mod loader;
pub mod model;
pub mod placeholder;
pub mod render;
pub mod serve;
pub mod session;
pub mod site;

pub use crate::config::SiteConfig;
pub use crate::error::SiteError;
pub use crate::filter::{
    apply_filters, difficulty_options, product_options, FilterSelection, ProductOption, ALL,
};
pub use crate::index::{build_recipe_index, find_product};
pub use crate::loader::DataSource;
pub use crate::model::{Category, Dataset, Pairings, Product, Recipe, RecipeIndexEntry};
pub use crate::placeholder::{adjust_color, render_placeholder, Variant, DEFAULT_ACCENT};
pub use crate::serve::serve;
pub use crate::session::SiteSession;
pub use crate::site::{generate_site, SiteReport};

/// Loads and parses the data file from `source` (a path or an http(s) URL).
pub fn load_dataset(source: &str) -> Result<Dataset, SiteError> {
    DataSource::detect(source).load()
}
