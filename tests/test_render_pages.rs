use scraper::{Html, Selector};

use sapori_site::render::detail::product_detail;
use sapori_site::render::products::products_grid;
use sapori_site::render::recipes::recipes_page;
use sapori_site::{build_recipe_index, load_dataset, render, Dataset, FilterSelection, SiteConfig};

fn dataset() -> Dataset {
    let json = r##"{
        "categories": [
            {
                "name": "Dolci",
                "description": "Per il fine pasto",
                "items": [
                    {
                        "slug": "tiramisu",
                        "name": "Tiramisù",
                        "summary": "Crema al mascarpone e savoiardi",
                        "accentColor": "#8b1e3f",
                        "ingredients": ["mascarpone", "savoiardi", "caffè"],
                        "pairings": {"protein": "", "vegetable": "", "carb": "savoiardi"},
                        "recipes": [
                            {
                                "id": "tiramisu-classico",
                                "title": "Tiramisù classico",
                                "intro": "La ricetta di famiglia.",
                                "ingredients": ["mascarpone", "uova", "caffè"],
                                "steps": ["Montare la crema.", "Comporre gli strati."],
                                "difficulty": "Facile"
                            },
                            {
                                "id": "tiramisu-scomposto",
                                "title": "Tiramisù scomposto",
                                "intro": "Versione al bicchiere.",
                                "ingredients": ["mascarpone", "cacao"],
                                "steps": ["Preparare le coppe."],
                                "difficulty": "Difficile"
                            }
                        ]
                    }
                ]
            }
        ]
    }"##;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    use std::io::Write as _;
    file.write_all(json.as_bytes()).unwrap();
    load_dataset(file.path().to_str().unwrap()).unwrap()
}

fn select(s: &str) -> Selector {
    Selector::parse(s).unwrap()
}

#[test]
fn test_products_grid_structure() {
    let config = SiteConfig::default();
    let data = dataset();
    let html = products_grid(&config, &data).to_html();
    let doc = Html::parse_fragment(&html);

    assert_eq!(doc.select(&select("section#products-grid")).count(), 1);
    assert_eq!(doc.select(&select(".category h2")).count(), 1);
    let card = doc.select(&select("article.card")).next().unwrap();
    let img = card.select(&select("img")).next().unwrap();
    assert!(img
        .value()
        .attr("src")
        .unwrap()
        .starts_with("data:image/svg+xml;base64,"));
    let link = card.select(&select("a.button")).next().unwrap();
    assert_eq!(link.value().attr("href"), Some("/products/tiramisu/"));
}

#[test]
fn test_detail_renders_recipe_anchors() {
    let config = SiteConfig::default();
    let data = dataset();
    let html = product_detail(&config, &data, "tiramisu").to_html();
    let doc = Html::parse_fragment(&html);

    assert_eq!(doc.select(&select("section#product-detail")).count(), 1);
    assert_eq!(doc.select(&select("article#tiramisu-classico")).count(), 1);
    assert_eq!(doc.select(&select("article#tiramisu-scomposto")).count(), 1);
    // four share targets plus the print link
    assert_eq!(doc.select(&select("ul.share li a")).count(), 4);
    let print = doc.select(&select("a.print")).next().unwrap();
    assert_eq!(print.value().attr("target"), Some("_blank"));
}

#[test]
fn test_detail_not_found_builds_no_recipes() {
    let config = SiteConfig::default();
    let data = dataset();
    let html = product_detail(&config, &data, "gianduia").to_html();
    let doc = Html::parse_fragment(&html);

    assert_eq!(doc.select(&select("section.not-found")).count(), 1);
    assert!(html.contains("Prodotto non trovato"));
    // a link back to the catalog and nothing recipe-shaped
    assert_eq!(doc.select(&select("a")).count(), 1);
    assert_eq!(doc.select(&select("article.recipe-card")).count(), 0);
}

#[test]
fn test_recipes_page_difficulty_filter_end_to_end() {
    let config = SiteConfig::default();
    let data = dataset();
    let index = build_recipe_index(&data);
    let selection = FilterSelection {
        difficulty: "Facile".to_string(),
        ..FilterSelection::default()
    };
    let html = recipes_page(&config, &data, &index, &selection).to_html();
    let doc = Html::parse_fragment(&html);

    let cards: Vec<_> = doc.select(&select("article.recipe-card")).collect();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].value().attr("id"), Some("tiramisu-classico"));

    // the card deep-links to its anchor on the product page
    let link = cards[0].select(&select("a.product-link")).next().unwrap();
    assert_eq!(
        link.value().attr("href"),
        Some("/products/tiramisu/#tiramisu-classico")
    );
}

#[test]
fn test_recipes_page_filter_controls() {
    let config = SiteConfig::default();
    let data = dataset();
    let index = build_recipe_index(&data);
    let selection = FilterSelection {
        category: "Dolci".to_string(),
        ..FilterSelection::default()
    };
    let html = recipes_page(&config, &data, &index, &selection).to_html();
    let doc = Html::parse_fragment(&html);

    for id in ["filter-category", "filter-product", "filter-difficulty"] {
        assert_eq!(doc.select(&select(&format!("select#{id}"))).count(), 1, "{id}");
    }

    // pinned category: option label is the bare product name, selected
    // option carries the bare attribute
    let category_select = doc.select(&select("select#filter-category")).next().unwrap();
    let selected: Vec<_> = category_select
        .select(&select("option[selected]"))
        .collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].value().attr("value"), Some("Dolci"));

    let product_select = doc.select(&select("select#filter-product")).next().unwrap();
    let labels: Vec<String> = product_select
        .select(&select("option"))
        .map(|option| option.text().collect())
        .collect();
    assert_eq!(labels, vec!["Tutti i prodotti", "Tiramisù"]);
}

#[test]
fn test_recipes_page_no_results_message() {
    let config = SiteConfig::default();
    let data = dataset();
    let index = build_recipe_index(&data);
    let selection = FilterSelection {
        difficulty: "Impossibile".to_string(),
        ..FilterSelection::default()
    };
    let html = recipes_page(&config, &data, &index, &selection).to_html();
    let doc = Html::parse_fragment(&html);

    assert_eq!(doc.select(&select("article.recipe-card")).count(), 0);
    assert_eq!(doc.select(&select("p.no-results")).count(), 1);
}

#[test]
fn test_page_shell_wraps_region() {
    let config = SiteConfig::default();
    let data = dataset();
    let html = render::page(&config, "Prodotti", products_grid(&config, &data));
    let doc = Html::parse_document(&html);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(doc.select(&select("html[lang=it]")).count(), 1);
    assert_eq!(doc.select(&select("title")).count(), 1);
    assert_eq!(
        doc.select(&select("link[rel=stylesheet]")).next().unwrap()
            .value()
            .attr("href"),
        Some("/assets/site.css")
    );
    assert_eq!(doc.select(&select("main section#products-grid")).count(), 1);
}

#[test]
fn test_printable_page_duplicates_stylesheets_and_prints() {
    let config = SiteConfig::default();
    let data = dataset();
    let region = product_detail(&config, &data, "tiramisu");
    let html = render::printable_page(&config, "Tiramisù", region);
    let doc = Html::parse_document(&html);

    assert_eq!(doc.select(&select("link[rel=stylesheet]")).count(), 1);
    assert_eq!(doc.select(&select("section#product-detail")).count(), 1);
    let body = doc.select(&select("body")).next().unwrap();
    assert_eq!(body.value().attr("onload"), Some("window.print()"));
    // no site chrome on the printable variant
    assert_eq!(doc.select(&select("header.site-header")).count(), 0);
}
