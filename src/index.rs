//! Flattens the nested category → product → recipe structure into the
//! recipe index consumed by the filter engine and the recipe list page.

use std::collections::HashSet;

use log::warn;

use crate::model::{Category, Dataset, Product, RecipeIndexEntry};
use crate::placeholder::{render_placeholder, Variant, DEFAULT_ACCENT};

/// Builds the recipe index in document order: categories as given, products
/// within a category as given, recipes within a product as given. Produces
/// one entry per recipe with the product and category context denormalized
/// onto it, plus a rendered recipe-card placeholder. No sorting is applied.
///
/// Idempotent: the same dataset always yields structurally equal output.
/// Duplicate recipe ids are assumed not to happen; when they do the index is
/// still built and the collision is logged, since the id is also the DOM
/// anchor of the rendered card.
pub fn build_recipe_index(dataset: &Dataset) -> Vec<RecipeIndexEntry> {
    let mut index = Vec::new();
    let mut seen_ids = HashSet::new();

    for category in &dataset.categories {
        for product in &category.items {
            let accent = product.accent_color.as_deref().unwrap_or(DEFAULT_ACCENT);
            for recipe in &product.recipes {
                if !seen_ids.insert(recipe.id.clone()) {
                    warn!("duplicate recipe id {:?}: anchors will collide", recipe.id);
                }
                index.push(RecipeIndexEntry {
                    id: recipe.id.clone(),
                    title: recipe.title.clone(),
                    intro: recipe.intro.clone(),
                    ingredients: recipe.ingredients.clone(),
                    steps: recipe.steps.clone(),
                    difficulty: recipe.difficulty.clone(),
                    category: category.name.clone(),
                    product_name: product.name.clone(),
                    product_summary: product.summary.clone(),
                    product_slug: product.slug.clone(),
                    accent_color: accent.to_string(),
                    image: render_placeholder(
                        &recipe.title,
                        Variant::Recipe,
                        Some(accent),
                        Some(&recipe.difficulty),
                    ),
                });
            }
        }
    }

    index
}

/// Looks up a product by slug, returning the owning category as well.
pub fn find_product<'a>(dataset: &'a Dataset, slug: &str) -> Option<(&'a Category, &'a Product)> {
    dataset.categories.iter().find_map(|category| {
        category
            .items
            .iter()
            .find(|product| product.slug == slug)
            .map(|product| (category, product))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Pairings, Recipe};

    fn recipe(id: &str, title: &str, difficulty: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            intro: String::new(),
            ingredients: vec!["farina".to_string()],
            steps: vec!["impastare".to_string(), "cuocere".to_string()],
            difficulty: difficulty.to_string(),
        }
    }

    fn product(slug: &str, name: &str, recipes: Vec<Recipe>) -> Product {
        Product {
            slug: slug.to_string(),
            name: name.to_string(),
            summary: format!("{name} della casa"),
            accent_color: None,
            ingredients: Vec::new(),
            pairings: Pairings::default(),
            recipes,
        }
    }

    fn dataset() -> Dataset {
        Dataset {
            categories: vec![
                Category {
                    name: "Salse".to_string(),
                    description: String::new(),
                    items: vec![
                        product("pesto", "Pesto", vec![recipe("r1", "Trofie al pesto", "Facile")]),
                        product("ragu", "Ragù", vec![
                            recipe("r2", "Tagliatelle al ragù", "Media"),
                            recipe("r3", "Lasagne", "Difficile"),
                        ]),
                    ],
                },
                Category {
                    name: "Dolci".to_string(),
                    description: String::new(),
                    items: vec![product("torrone", "Torrone", Vec::new())],
                },
            ],
        }
    }

    #[test]
    fn test_index_counts_every_recipe() {
        let index = build_recipe_index(&dataset());
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_index_preserves_document_order() {
        let index = build_recipe_index(&dataset());
        let ids: Vec<&str> = index.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn test_index_denormalizes_context() {
        let index = build_recipe_index(&dataset());
        let lasagne = &index[2];
        assert_eq!(lasagne.category, "Salse");
        assert_eq!(lasagne.product_name, "Ragù");
        assert_eq!(lasagne.product_slug, "ragu");
        assert_eq!(lasagne.product_summary, "Ragù della casa");
        assert_eq!(lasagne.accent_color, DEFAULT_ACCENT);
        assert!(lasagne.image.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_index_is_idempotent() {
        let data = dataset();
        assert_eq!(build_recipe_index(&data), build_recipe_index(&data));
    }

    #[test]
    fn test_duplicate_ids_still_build() {
        let mut data = dataset();
        data.categories[0].items[0]
            .recipes
            .push(recipe("r1", "Doppione", "Facile"));
        assert_eq!(build_recipe_index(&data).len(), 4);
    }

    #[test]
    fn test_find_product_returns_owning_category() {
        let data = dataset();
        let (category, product) = find_product(&data, "ragu").unwrap();
        assert_eq!(category.name, "Salse");
        assert_eq!(product.name, "Ragù");
    }

    #[test]
    fn test_find_product_unknown_slug() {
        assert!(find_product(&dataset(), "gianduia").is_none());
    }
}
