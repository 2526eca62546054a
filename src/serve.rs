//! Local preview server.
//!
//! Renders the same pages as the static build, on demand, and drives the
//! filter engine from the query string of `/recipes`. Requests are handled
//! one at a time on the accept loop; a failed response is terminal for that
//! request only.

use std::borrow::Cow;

use log::{error, info};
use percent_encoding::percent_decode_str;
use tiny_http::{Header, Request, Response, Server, StatusCode};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::filter::FilterSelection;
use crate::index::find_product;
use crate::loader::DataSource;
use crate::model::Dataset;
use crate::render;
use crate::render::detail::product_detail;
use crate::render::products::products_grid;
use crate::render::recipes::recipes_page;
use crate::session::SiteSession;
use crate::site;

/// Runs the preview server until the process is stopped.
pub fn serve(config: &SiteConfig) -> Result<(), SiteError> {
    let source = DataSource::detect(&config.data_source);
    let session = SiteSession::open(&source)?;
    let server =
        Server::http(&config.serve_addr).map_err(|err| SiteError::Serve(err.to_string()))?;
    info!("preview listening on http://{}", config.serve_addr);

    for request in server.incoming_requests() {
        handle(config, &session, request);
    }
    Ok(())
}

fn handle(config: &SiteConfig, session: &SiteSession, request: Request) {
    let url = request.url().to_string();
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url.as_str(), ""),
    };
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => respond(
            request,
            200,
            "text/html; charset=utf-8",
            render::page(config, "Prodotti", products_grid(config, session.dataset())),
        ),
        ["recipes"] => {
            let selection = selection_from_query(session.dataset(), query);
            respond(
                request,
                200,
                "text/html; charset=utf-8",
                render::page(
                    config,
                    "Ricette",
                    recipes_page(config, session.dataset(), session.index(), &selection),
                ),
            );
        }
        ["products", slug] => {
            let found = find_product(session.dataset(), slug);
            let status = if found.is_some() { 200 } else { 404 };
            let title = found
                .map(|(_, product)| product.name.clone())
                .unwrap_or_else(|| slug.to_string());
            let region = product_detail(config, session.dataset(), slug);
            respond(
                request,
                status,
                "text/html; charset=utf-8",
                render::page(config, &title, region),
            );
        }
        ["products", slug, "print.html"] | ["products", slug, "print"] => {
            let title = find_product(session.dataset(), slug)
                .map(|(_, product)| product.name.clone())
                .unwrap_or_else(|| slug.to_string());
            let region = product_detail(config, session.dataset(), slug);
            respond(
                request,
                200,
                "text/html; charset=utf-8",
                render::printable_page(config, &title, region),
            );
        }
        ["assets", "site.css"] => respond(request, 200, "text/css", site::stylesheet().to_string()),
        _ => respond(request, 404, "text/plain", "404 - pagina non trovata".to_string()),
    }
}

/// Rebuilds a filter selection from the submitted query string. The category
/// is applied last so a product that no longer belongs to it resets to the
/// wildcard instead of dangling.
fn selection_from_query(dataset: &Dataset, query: &str) -> FilterSelection {
    let mut category = None;
    let mut selection = FilterSelection::default();
    for (key, value) in parse_query(query) {
        match key.as_ref() {
            "category" => category = Some(value.into_owned()),
            "product" => selection.set_product(value),
            "difficulty" => selection.set_difficulty(value),
            _ => {}
        }
    }
    if let Some(category) = category {
        selection.set_category(dataset, category);
    }
    selection
}

fn parse_query(query: &str) -> Vec<(Cow<'_, str>, Cow<'_, str>)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode(key), decode(value)),
            None => (decode(pair), Cow::Borrowed("")),
        })
        .collect()
}

fn decode(raw: &str) -> Cow<'_, str> {
    // form encoding sends spaces as '+'
    if raw.contains('+') {
        let replaced = raw.replace('+', " ");
        Cow::Owned(percent_decode_str(&replaced).decode_utf8_lossy().into_owned())
    } else {
        percent_decode_str(raw).decode_utf8_lossy()
    }
}

fn respond(request: Request, status: u16, content_type: &str, body: String) {
    let mut response = Response::from_string(body).with_status_code(StatusCode(status));
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes()) {
        response.add_header(header);
    }
    if let Err(err) = request.respond(response) {
        error!("failed to answer request: {err}");
    }
}
