//! The filterable recipe index page: the three filter controls and the
//! matching recipe cards, or the no-results message.

use crate::config::SiteConfig;
use crate::filter::{apply_filters, difficulty_options, product_options, FilterSelection, ALL};
use crate::model::{Dataset, RecipeIndexEntry};

use super::html::{el, Element, Node};

pub fn recipes_page(
    config: &SiteConfig,
    dataset: &Dataset,
    index: &[RecipeIndexEntry],
    selection: &FilterSelection,
) -> Element {
    let filtered = apply_filters(index, selection);
    let body = if filtered.is_empty() {
        el(
            "p",
            &[("class", "no-results")],
            vec!["Nessuna ricetta corrisponde ai filtri selezionati.".into()],
        )
    } else {
        el(
            "div",
            &[("class", "cards")],
            filtered.iter().map(|entry| recipe_card(config, entry)).collect(),
        )
    };

    el(
        "section",
        &[("id", "recipes-list")],
        vec![
            filter_controls(config, dataset, index, selection).into(),
            body.into(),
        ],
    )
}

fn filter_controls(
    config: &SiteConfig,
    dataset: &Dataset,
    index: &[RecipeIndexEntry],
    selection: &FilterSelection,
) -> Element {
    let action = config.url("recipes/");

    let mut categories = vec![(ALL.to_string(), "Tutte le categorie".to_string())];
    categories.extend(
        dataset
            .categories
            .iter()
            .map(|category| (category.name.clone(), category.name.clone())),
    );

    let mut products = vec![(ALL.to_string(), "Tutti i prodotti".to_string())];
    products.extend(
        product_options(dataset, &selection.category)
            .into_iter()
            .map(|option| (option.slug, option.label)),
    );

    let mut difficulties = vec![(ALL.to_string(), "Tutte le difficoltà".to_string())];
    difficulties.extend(
        difficulty_options(index)
            .into_iter()
            .map(|label| (label.clone(), label)),
    );

    el(
        "form",
        &[
            ("id", "recipe-filters"),
            ("method", "get"),
            ("action", action.as_str()),
        ],
        vec![
            select_control("filter-category", "category", &selection.category, &categories).into(),
            select_control("filter-product", "product", &selection.product, &products).into(),
            select_control(
                "filter-difficulty",
                "difficulty",
                &selection.difficulty,
                &difficulties,
            )
            .into(),
            el("button", &[("type", "submit")], vec!["Filtra".into()]).into(),
        ],
    )
}

fn select_control(id: &str, name: &str, selected: &str, options: &[(String, String)]) -> Element {
    el(
        "select",
        &[("id", id), ("name", name)],
        options
            .iter()
            .map(|(value, label)| {
                let mut attrs = vec![("value", value.as_str())];
                if value == selected {
                    attrs.push(("selected", ""));
                }
                el("option", &attrs, vec![label.as_str().into()]).into()
            })
            .collect(),
    )
}

fn recipe_card(config: &SiteConfig, entry: &RecipeIndexEntry) -> Node {
    let heading = format!("{} — {}", entry.product_name, entry.title);
    // deep link to the same card anchored on the product page
    let product_href = format!(
        "{}#{}",
        config.url(&format!("products/{}/", entry.product_slug)),
        entry.id
    );
    el(
        "article",
        &[("id", entry.id.as_str()), ("class", "recipe-card")],
        vec![
            el(
                "img",
                &[("src", entry.image.as_str()), ("alt", entry.title.as_str())],
                vec![],
            )
            .into(),
            el("h3", &[], vec![heading.into()]).into(),
            el(
                "p",
                &[("class", "recipe-context")],
                vec![
                    el("span", &[("class", "category-tag")], vec![entry.category.as_str().into()]).into(),
                    " · ".into(),
                    el("span", &[("class", "difficulty")], vec![entry.difficulty.as_str().into()]).into(),
                ],
            )
            .into(),
            Node::when(
                !entry.intro.is_empty(),
                el("p", &[], vec![entry.intro.as_str().into()]).into(),
            ),
            el(
                "p",
                &[],
                vec![
                    el("strong", &[], vec!["Ingredienti: ".into()]).into(),
                    entry.ingredients.join(", ").into(),
                ],
            )
            .into(),
            el(
                "ol",
                &[("class", "steps")],
                entry
                    .steps
                    .iter()
                    .map(|step| el("li", &[], vec![step.as_str().into()]).into())
                    .collect(),
            )
            .into(),
            el(
                "a",
                &[("class", "product-link"), ("href", product_href.as_str())],
                vec![entry.product_name.as_str().into()],
            )
            .into(),
        ],
    )
    .into()
}
