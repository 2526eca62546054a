//! The recipe filter engine: three independent selections narrowed against
//! the flattened index, with the product option set kept consistent with
//! the selected category.

use crate::model::{Dataset, RecipeIndexEntry};

/// Wildcard sentinel accepted by every filter dimension.
pub const ALL: &str = "all";

/// The three filter selections. Lives on the session, starts all-wildcard,
/// and is only ever changed through the setters below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub category: String,
    pub product: String,
    pub difficulty: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            category: ALL.to_string(),
            product: ALL.to_string(),
            difficulty: ALL.to_string(),
        }
    }
}

impl FilterSelection {
    /// Changes the category dimension. When the currently selected product
    /// does not belong to the newly selected category it is reset to the
    /// wildcard instead of being left dangling.
    pub fn set_category(&mut self, dataset: &Dataset, value: impl Into<String>) {
        self.category = value.into();
        if self.product != ALL {
            let still_valid = product_options(dataset, &self.category)
                .iter()
                .any(|option| option.slug == self.product);
            if !still_valid {
                self.product = ALL.to_string();
            }
        }
    }

    /// Changes the product dimension only.
    pub fn set_product(&mut self, value: impl Into<String>) {
        self.product = value.into();
    }

    /// Changes the difficulty dimension only.
    pub fn set_difficulty(&mut self, value: impl Into<String>) {
        self.difficulty = value.into();
    }
}

/// A selectable product filter option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductOption {
    pub slug: String,
    /// Bare product name under a pinned category, "name · category" under
    /// the wildcard
    pub label: String,
}

/// The product options valid under `category`, in document order. Under the
/// wildcard every product qualifies and the label carries the owning
/// category for disambiguation.
pub fn product_options(dataset: &Dataset, category: &str) -> Vec<ProductOption> {
    let mut options = Vec::new();
    for cat in &dataset.categories {
        if category != ALL && cat.name != category {
            continue;
        }
        for product in &cat.items {
            let label = if category == ALL {
                format!("{} · {}", product.name, cat.name)
            } else {
                product.name.clone()
            };
            options.push(ProductOption {
                slug: product.slug.clone(),
                label,
            });
        }
    }
    options
}

/// Distinct difficulty labels in first-seen index order.
pub fn difficulty_options(index: &[RecipeIndexEntry]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for entry in index {
        if !labels.contains(&entry.difficulty) {
            labels.push(entry.difficulty.clone());
        }
    }
    labels
}

/// Pure predicate filter over the index, preserving its order: an entry
/// passes when each dimension is either the wildcard or an exact
/// (case-sensitive) match. Unknown selection values simply match nothing.
pub fn apply_filters<'a>(
    index: &'a [RecipeIndexEntry],
    selection: &FilterSelection,
) -> Vec<&'a RecipeIndexEntry> {
    index
        .iter()
        .filter(|entry| {
            matches_dimension(&selection.category, &entry.category)
                && matches_dimension(&selection.product, &entry.product_slug)
                && matches_dimension(&selection.difficulty, &entry.difficulty)
        })
        .collect()
}

fn matches_dimension(selected: &str, value: &str) -> bool {
    selected == ALL || selected == value
}
