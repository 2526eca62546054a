//! Deterministic inline SVG placeholders for products and recipes.
//!
//! The site ships no photography; every image is generated from the item
//! title, a variant tag and the product accent color, and embedded as a
//! `data:` URI. Identical inputs always produce byte-identical output.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use html_escape::encode_safe;

/// Brand fallback accent used when a product defines none.
pub const DEFAULT_ACCENT: &str = "#a0522d";

const DEFAULT_RGB: (u8, u8, u8) = (0xa0, 0x52, 0x2d);

/// Which fixed layout the placeholder uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Product packaging tile on the catalog grid
    Packaging,
    /// Prepared dish on the detail page
    Prepared,
    /// Recipe card on the recipe index
    Recipe,
}

impl Variant {
    /// Signed shift applied to every RGB channel of the accent to derive the
    /// second gradient stop.
    fn channel_delta(self) -> i16 {
        match self {
            Variant::Packaging => -35,
            Variant::Prepared => 25,
            Variant::Recipe => 35,
        }
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

/// Shifts every RGB channel of a `#rrggbb` color by `delta`, clamping each
/// channel to `[0, 255]`. Malformed input falls back to the brand default.
pub fn adjust_color(color: &str, delta: i16) -> String {
    let (r, g, b) = parse_hex(color).unwrap_or(DEFAULT_RGB);
    let shift = |c: u8| (i16::from(c) + delta).clamp(0, 255) as u8;
    format!("#{:02x}{:02x}{:02x}", shift(r), shift(g), shift(b))
}

/// Renders the placeholder for `title` and returns it as a self-contained
/// `data:image/svg+xml;base64,...` URI. The difficulty label is only drawn
/// for [`Variant::Recipe`]. All embedded text is escaped against the five
/// XML special characters.
pub fn render_placeholder(
    title: &str,
    variant: Variant,
    accent_color: Option<&str>,
    difficulty: Option<&str>,
) -> String {
    let base = accent_color
        .filter(|color| parse_hex(color).is_some())
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| DEFAULT_ACCENT.to_string());
    let secondary = adjust_color(&base, variant.channel_delta());
    let title = encode_safe(title);

    let svg = match variant {
        Variant::Packaging => format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="320" height="200" viewBox="0 0 320 200">"#,
                r#"<defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="1">"#,
                r#"<stop offset="0" stop-color="{base}"/><stop offset="1" stop-color="{secondary}"/>"#,
                r#"</linearGradient></defs>"#,
                r##"<rect width="320" height="200" fill="#f6f1e7"/>"##,
                r#"<rect x="95" y="28" width="130" height="144" rx="10" fill="url(#g)"/>"#,
                r#"<rect x="95" y="28" width="130" height="32" rx="10" fill="{secondary}"/>"#,
                r##"<text x="160" y="190" text-anchor="middle" font-family="Georgia, serif" font-size="15" fill="#3d2c1e">{title}</text>"##,
                r#"</svg>"#,
            ),
            base = base,
            secondary = secondary,
            title = title,
        ),
        Variant::Prepared => format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="320" height="200" viewBox="0 0 320 200">"#,
                r#"<defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="1">"#,
                r#"<stop offset="0" stop-color="{base}"/><stop offset="1" stop-color="{secondary}"/>"#,
                r#"</linearGradient></defs>"#,
                r##"<rect width="320" height="200" fill="#fbf8f1"/>"##,
                r##"<circle cx="160" cy="96" r="72" fill="#ece2cf"/>"##,
                r#"<circle cx="160" cy="96" r="54" fill="url(#g)"/>"#,
                r##"<text x="160" y="190" text-anchor="middle" font-family="Georgia, serif" font-size="15" fill="#3d2c1e">{title}</text>"##,
                r#"</svg>"#,
            ),
            base = base,
            secondary = secondary,
            title = title,
        ),
        Variant::Recipe => {
            let difficulty = encode_safe(difficulty.unwrap_or(""));
            format!(
                concat!(
                    r#"<svg xmlns="http://www.w3.org/2000/svg" width="320" height="200" viewBox="0 0 320 200">"#,
                    r#"<defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="1">"#,
                    r#"<stop offset="0" stop-color="{base}"/><stop offset="1" stop-color="{secondary}"/>"#,
                    r#"</linearGradient></defs>"#,
                    r#"<rect width="320" height="200" rx="8" fill="url(#g)"/>"#,
                    r##"<rect x="18" y="18" width="284" height="122" rx="6" fill="#fbf8f1"/>"##,
                    r##"<text x="160" y="86" text-anchor="middle" font-family="Georgia, serif" font-size="16" fill="#3d2c1e">{title}</text>"##,
                    r##"<text x="160" y="176" text-anchor="middle" font-family="Georgia, serif" font-size="13" fill="#fbf8f1">{difficulty}</text>"##,
                    r#"</svg>"#,
                ),
                base = base,
                secondary = secondary,
                title = title,
                difficulty = difficulty,
            )
        }
    };

    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}
