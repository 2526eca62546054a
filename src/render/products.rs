//! The catalog grid: one section per category, one card per product.

use crate::config::SiteConfig;
use crate::model::Dataset;
use crate::placeholder::{render_placeholder, Variant};

use super::html::{el, Element, Node};

pub fn products_grid(config: &SiteConfig, dataset: &Dataset) -> Element {
    el(
        "section",
        &[("id", "products-grid")],
        dataset
            .categories
            .iter()
            .map(|category| {
                el(
                    "div",
                    &[("class", "category")],
                    vec![
                        el("h2", &[], vec![category.name.as_str().into()]).into(),
                        Node::when(
                            !category.description.is_empty(),
                            el(
                                "p",
                                &[("class", "category-description")],
                                vec![category.description.as_str().into()],
                            )
                            .into(),
                        ),
                        el(
                            "div",
                            &[("class", "cards")],
                            category
                                .items
                                .iter()
                                .map(|product| {
                                    let image = render_placeholder(
                                        &product.name,
                                        Variant::Packaging,
                                        product.accent_color.as_deref(),
                                        None,
                                    );
                                    let href = config.url(&format!("products/{}/", product.slug));
                                    el(
                                        "article",
                                        &[("class", "card")],
                                        vec![
                                            el(
                                                "img",
                                                &[("src", image.as_str()), ("alt", product.name.as_str())],
                                                vec![],
                                            )
                                            .into(),
                                            el("h3", &[], vec![product.name.as_str().into()]).into(),
                                            el("p", &[], vec![product.summary.as_str().into()]).into(),
                                            el(
                                                "a",
                                                &[("class", "button"), ("href", href.as_str())],
                                                vec!["Scopri".into()],
                                            )
                                            .into(),
                                        ],
                                    )
                                    .into()
                                })
                                .collect(),
                        )
                        .into(),
                    ],
                )
                .into()
            })
            .collect(),
    )
}
