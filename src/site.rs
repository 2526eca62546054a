//! Static build pipeline
//!
//! This pipeline:
//! 1. Opens a session (single data-file load, index derived once)
//! 2. Renders the catalog page
//! 3. Renders a detail page and a printable page per product
//! 4. Renders the recipe index page with the default (unfiltered) selection
//! 5. Writes the shared stylesheet
//!
//! Every page is written under the configured output directory and logged.

use std::fs;
use std::path::Path;

use log::info;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::loader::DataSource;
use crate::render;
use crate::render::detail::product_detail;
use crate::render::products::products_grid;
use crate::render::recipes::recipes_page;
use crate::session::SiteSession;

/// Shared stylesheet written once per build; print pages duplicate the link.
const STYLESHEET: &str = "\
body { margin: 0; font-family: Georgia, serif; color: #3d2c1e; background: #fbf8f1; }
.site-header { padding: 1.5rem 2rem; border-bottom: 2px solid #ece2cf; }
.site-header h1 a { color: inherit; text-decoration: none; }
.tagline { color: #8a7257; margin: 0.25rem 0 0.75rem; }
nav a { margin-right: 1rem; }
main { max-width: 64rem; margin: 0 auto; padding: 1.5rem 2rem; }
.cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1.25rem; }
.card, .recipe-card { background: #fff; border: 1px solid #ece2cf; border-radius: 8px; padding: 1rem; }
.card img, .recipe-card img { width: 100%; border-radius: 6px; }
.category-tag { color: #8a7257; }
.difficulty { font-variant: small-caps; }
.no-results { font-style: italic; }
#recipe-filters { display: flex; gap: 0.75rem; margin-bottom: 1.25rem; }
footer { padding: 1.5rem 2rem; border-top: 2px solid #ece2cf; color: #8a7257; }
@media print { nav, #recipe-filters, .actions { display: none; } }
";

/// Outcome of a static build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteReport {
    pub pages_written: usize,
}

/// Renders every page of the site into `config.output_dir`.
pub fn generate_site(config: &SiteConfig) -> Result<SiteReport, SiteError> {
    let source = DataSource::detect(&config.data_source);
    let session = SiteSession::open(&source)?;
    let out = Path::new(&config.output_dir);
    let mut pages_written = 0;

    write_page(
        &out.join("index.html"),
        render::page(config, "Prodotti", products_grid(config, session.dataset())),
        &mut pages_written,
    )?;

    for category in &session.dataset().categories {
        for product in &category.items {
            let dir = out.join("products").join(&product.slug);
            let region = product_detail(config, session.dataset(), &product.slug);
            write_page(
                &dir.join("index.html"),
                render::page(config, &product.name, region.clone()),
                &mut pages_written,
            )?;
            write_page(
                &dir.join("print.html"),
                render::printable_page(config, &product.name, region),
                &mut pages_written,
            )?;
        }
    }

    write_page(
        &out.join("recipes").join("index.html"),
        render::page(
            config,
            "Ricette",
            recipes_page(
                config,
                session.dataset(),
                session.index(),
                session.selection(),
            ),
        ),
        &mut pages_written,
    )?;

    let css = out.join("assets").join("site.css");
    if let Some(parent) = css.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&css, STYLESHEET)?;
    info!("wrote {}", css.display());

    info!("site written to {} ({pages_written} pages)", out.display());
    Ok(SiteReport { pages_written })
}

pub(crate) fn stylesheet() -> &'static str {
    STYLESHEET
}

fn write_page(path: &Path, contents: String, pages_written: &mut usize) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    info!("wrote {}", path.display());
    *pages_written += 1;
    Ok(())
}
