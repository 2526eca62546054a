//! Product detail page: summary, ingredients, pairings, the product's
//! recipes, share links and the printable variant. Includes the not-found
//! branch for slugs absent from the dataset.

use crate::config::SiteConfig;
use crate::index::find_product;
use crate::model::{Category, Dataset, Product};
use crate::placeholder::{render_placeholder, Variant};

use super::html::{el, Element, Node};
use super::share::share_links;

/// Renders the detail region for `slug`. A slug absent from the dataset
/// renders the not-found message with a link back to the catalog and builds
/// nothing else.
pub fn product_detail(config: &SiteConfig, dataset: &Dataset, slug: &str) -> Element {
    match find_product(dataset, slug) {
        Some((category, product)) => found(config, category, product),
        None => not_found(config, slug),
    }
}

fn not_found(config: &SiteConfig, slug: &str) -> Element {
    let home = config.url("");
    el(
        "section",
        &[("id", "product-detail"), ("class", "not-found")],
        vec![
            el("h2", &[], vec!["Prodotto non trovato".into()]).into(),
            el(
                "p",
                &[],
                vec![format!("Nessun prodotto corrisponde a \"{slug}\".").into()],
            )
            .into(),
            el("a", &[("href", home.as_str())], vec!["Torna al catalogo".into()]).into(),
        ],
    )
}

fn found(config: &SiteConfig, category: &Category, product: &Product) -> Element {
    let image = render_placeholder(
        &product.name,
        Variant::Prepared,
        product.accent_color.as_deref(),
        None,
    );
    let page_url = config.url(&format!("products/{}/", product.slug));
    let print_href = config.url(&format!("products/{}/print.html", product.slug));

    el(
        "section",
        &[("id", "product-detail")],
        vec![
            el(
                "header",
                &[],
                vec![
                    el(
                        "img",
                        &[("src", image.as_str()), ("alt", product.name.as_str())],
                        vec![],
                    )
                    .into(),
                    el("h2", &[], vec![product.name.as_str().into()]).into(),
                    el(
                        "p",
                        &[("class", "category-tag")],
                        vec![category.name.as_str().into()],
                    )
                    .into(),
                    el("p", &[], vec![product.summary.as_str().into()]).into(),
                ],
            )
            .into(),
            ingredients_list(&product.ingredients),
            pairings(product),
            recipes(product),
            actions(product, &page_url, &print_href).into(),
        ],
    )
}

fn ingredients_list(ingredients: &[String]) -> Node {
    Node::when(
        !ingredients.is_empty(),
        el(
            "div",
            &[("class", "ingredients")],
            vec![
                el("h3", &[], vec!["Ingredienti".into()]).into(),
                el(
                    "ul",
                    &[],
                    ingredients
                        .iter()
                        .map(|item| el("li", &[], vec![item.as_str().into()]).into())
                        .collect(),
                )
                .into(),
            ],
        )
        .into(),
    )
}

fn pairings(product: &Product) -> Node {
    let pairings = &product.pairings;
    let rows = [
        ("Proteina", pairings.protein.as_str()),
        ("Verdura", pairings.vegetable.as_str()),
        ("Carboidrato", pairings.carb.as_str()),
    ];
    Node::when(
        rows.iter().any(|(_, value)| !value.is_empty()),
        el(
            "div",
            &[("class", "pairings")],
            vec![
                el("h3", &[], vec!["Si abbina con".into()]).into(),
                el(
                    "dl",
                    &[],
                    rows.iter()
                        .flat_map(|(label, value)| {
                            [
                                Node::when(!value.is_empty(), el("dt", &[], vec![(*label).into()]).into()),
                                Node::when(!value.is_empty(), el("dd", &[], vec![(*value).into()]).into()),
                            ]
                        })
                        .collect(),
                )
                .into(),
            ],
        )
        .into(),
    )
}

fn recipes(product: &Product) -> Node {
    Node::when(
        !product.recipes.is_empty(),
        el(
            "div",
            &[("class", "product-recipes")],
            std::iter::once(el("h3", &[], vec!["Le nostre ricette".into()]).into())
                .chain(product.recipes.iter().map(|recipe| {
                    el(
                        "article",
                        &[("id", recipe.id.as_str()), ("class", "recipe-card")],
                        vec![
                            el(
                                "h4",
                                &[],
                                vec![recipe.title.as_str().into()],
                            )
                            .into(),
                            el(
                                "span",
                                &[("class", "difficulty")],
                                vec![recipe.difficulty.as_str().into()],
                            )
                            .into(),
                            Node::when(
                                !recipe.intro.is_empty(),
                                el("p", &[], vec![recipe.intro.as_str().into()]).into(),
                            ),
                            el(
                                "p",
                                &[],
                                vec![
                                    el("strong", &[], vec!["Ingredienti: ".into()]).into(),
                                    recipe.ingredients.join(", ").into(),
                                ],
                            )
                            .into(),
                            el(
                                "ol",
                                &[("class", "steps")],
                                recipe
                                    .steps
                                    .iter()
                                    .map(|step| el("li", &[], vec![step.as_str().into()]).into())
                                    .collect(),
                            )
                            .into(),
                        ],
                    )
                    .into()
                }))
                .collect(),
        )
        .into(),
    )
}

fn actions(product: &Product, page_url: &str, print_href: &str) -> Element {
    el(
        "div",
        &[("class", "actions")],
        vec![
            el(
                "ul",
                &[("class", "share")],
                share_links(&product.name, &product.summary, page_url)
                    .into_iter()
                    .map(|link| {
                        el(
                            "li",
                            &[],
                            vec![el("a", &[("href", link.href.as_str())], vec![link.label.into()]).into()],
                        )
                        .into()
                    })
                    .collect(),
            )
            .into(),
            el(
                "a",
                &[("class", "print"), ("href", print_href), ("target", "_blank")],
                vec!["Stampa".into()],
            )
            .into(),
        ],
    )
}
