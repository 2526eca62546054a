use serde::Deserialize;

/// Parsed data file: a flat list of categories, each owning its products.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub categories: Vec<Category>,
}

/// A product grouping. The name is the grouping key; uniqueness is assumed,
/// not enforced.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<Product>,
}

/// A catalog product. The slug is the stable identity used for detail-page
/// lookup and deep links and must be unique across the dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    /// Hex color driving the placeholder gradients; brand default when absent
    pub accent_color: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub pairings: Pairings,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

/// Suggested accompaniments shown on the detail page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pairings {
    #[serde(default)]
    pub protein: String,
    #[serde(default)]
    pub vegetable: String,
    #[serde(default)]
    pub carb: String,
}

/// A recipe as authored in the data file. The id doubles as the DOM anchor
/// and URL fragment of the rendered card.
#[derive(Debug, Clone, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    /// Free-form label ("Facile", "Media", ...) used as a filter dimension
    #[serde(default)]
    pub difficulty: String,
}

/// One row of the flattened recipe index: every [`Recipe`] field copied out,
/// with the owning product and category context attached. Rebuilt in full
/// whenever the dataset is loaded, never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIndexEntry {
    pub id: String,
    pub title: String,
    pub intro: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub difficulty: String,
    pub category: String,
    pub product_name: String,
    pub product_summary: String,
    pub product_slug: String,
    /// Resolved accent color (brand default already applied)
    pub accent_color: String,
    /// Rendered recipe-card placeholder, as a data URI
    pub image: String,
}
