//! Page renderers. These are glue over the data model, the recipe index and
//! the filter engine; every function builds a full element tree from
//! scratch through [`html::el`].

pub mod detail;
pub mod html;
pub mod products;
pub mod recipes;
pub mod share;

use crate::config::SiteConfig;

use self::html::{el, Element, Node};

/// Wraps a rendered region in the shared page shell and serializes the
/// whole document.
pub fn page(config: &SiteConfig, title: &str, region: Element) -> String {
    let page_title = format!("{} · {}", title, config.title);
    let home = config.url("");
    let recipes = config.url("recipes/");

    let document = el(
        "html",
        &[("lang", "it")],
        vec![
            head(config, &page_title).into(),
            el(
                "body",
                &[],
                vec![
                    el(
                        "header",
                        &[("class", "site-header")],
                        vec![
                            el(
                                "h1",
                                &[],
                                vec![el("a", &[("href", home.as_str())], vec![config.title.as_str().into()]).into()],
                            )
                            .into(),
                            el("p", &[("class", "tagline")], vec![config.tagline.as_str().into()]).into(),
                            el(
                                "nav",
                                &[],
                                vec![
                                    el("a", &[("href", home.as_str())], vec!["Prodotti".into()]).into(),
                                    el("a", &[("href", recipes.as_str())], vec!["Ricette".into()]).into(),
                                ],
                            )
                            .into(),
                        ],
                    )
                    .into(),
                    el("main", &[], vec![region.into()]).into(),
                    el(
                        "footer",
                        &[],
                        vec![el("p", &[], vec![format!("{} · {}", config.title, config.tagline).into()]).into()],
                    )
                    .into(),
                ],
            )
            .into(),
        ],
    );

    format!("<!DOCTYPE html>\n{}", document.to_html())
}

/// Renders a standalone printable document: the configured stylesheet links
/// duplicated into a fresh page, the target region's markup, and the print
/// dialog triggered on load.
pub fn printable_page(config: &SiteConfig, title: &str, region: Element) -> String {
    let page_title = format!("{} · {}", title, config.title);
    let document = el(
        "html",
        &[("lang", "it")],
        vec![
            head(config, &page_title).into(),
            el("body", &[("onload", "window.print()")], vec![region.into()]).into(),
        ],
    );
    format!("<!DOCTYPE html>\n{}", document.to_html())
}

fn head(config: &SiteConfig, page_title: &str) -> Element {
    let mut children: Vec<Node> = vec![
        el("meta", &[("charset", "utf-8")], vec![]).into(),
        el(
            "meta",
            &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")],
            vec![],
        )
        .into(),
        el("title", &[], vec![page_title.into()]).into(),
    ];
    for stylesheet in &config.stylesheets {
        let href = config.url(stylesheet);
        children.push(el("link", &[("rel", "stylesheet"), ("href", href.as_str())], vec![]).into());
    }
    el("head", &[], children)
}
