//! Page-view-scoped context owning the loaded dataset, the derived recipe
//! index and the filter selection.
//!
//! One explicit object instead of shared globals: constructing it is the
//! page load (the single fetch), dropping it is the navigation away. Every
//! renderer reads the same snapshot; there is no re-fetch and no
//! invalidation.

use log::debug;

use crate::error::SiteError;
use crate::filter::FilterSelection;
use crate::index::build_recipe_index;
use crate::loader::DataSource;
use crate::model::{Dataset, RecipeIndexEntry};

pub struct SiteSession {
    dataset: Dataset,
    index: Vec<RecipeIndexEntry>,
    selection: FilterSelection,
}

impl SiteSession {
    /// Opens a session by loading the data source exactly once and deriving
    /// the recipe index from it.
    pub fn open(source: &DataSource) -> Result<Self, SiteError> {
        let dataset = source.load()?;
        let index = build_recipe_index(&dataset);
        debug!(
            "session opened: {} categories, {} recipes",
            dataset.categories.len(),
            index.len()
        );
        Ok(Self {
            dataset,
            index,
            selection: FilterSelection::default(),
        })
    }

    /// The cached dataset snapshot.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The flattened recipe index, rebuilt whenever the dataset is loaded.
    pub fn index(&self) -> &[RecipeIndexEntry] {
        &self.index
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// See [`FilterSelection::set_category`] for the product reset rule.
    pub fn set_category(&mut self, value: impl Into<String>) {
        self.selection.set_category(&self.dataset, value);
    }

    pub fn set_product(&mut self, value: impl Into<String>) {
        self.selection.set_product(value);
    }

    pub fn set_difficulty(&mut self, value: impl Into<String>) {
        self.selection.set_difficulty(value);
    }
}
