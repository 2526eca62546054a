//! Outbound share links for a rendered page. These are plain hrefs the
//! visitor may follow; the site itself never calls the target services.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// A labelled share target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub label: &'static str,
    pub href: String,
}

/// The four share targets, parameterized with the page title, summary and
/// URL.
pub fn share_links(title: &str, summary: &str, url: &str) -> Vec<ShareLink> {
    let title_q = encode(title);
    let summary_q = encode(summary);
    let url_q = encode(url);
    vec![
        ShareLink {
            label: "Email",
            href: format!("mailto:?subject={title_q}&body={summary_q}%0A{url_q}"),
        },
        ShareLink {
            label: "WhatsApp",
            href: format!("https://wa.me/?text={title_q}%20{url_q}"),
        },
        ShareLink {
            label: "Facebook",
            href: format!("https://www.facebook.com/sharer/sharer.php?u={url_q}"),
        },
        ShareLink {
            label: "X",
            href: format!("https://twitter.com/intent/tweet?text={title_q}&url={url_q}"),
        },
    ]
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}
