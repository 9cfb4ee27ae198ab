// src/sitemap.rs

use crate::anchor::Anchor;

const URLSET_OPEN: &str =
    r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#;
const URLSET_CLOSE: &str = "</urlset>";

/// Renders the anchors as a sitemaps.org urlset, one `<url><loc>` entry
/// per anchor in the order given, with no whitespace between elements.
/// Hrefs are written verbatim; anything needing XML escaping must have
/// been kept out upstream.
pub fn render(anchors: &[Anchor]) -> String {
    let mut xml = String::from(URLSET_OPEN);

    for anchor in anchors {
        xml.push_str("<url><loc>");
        xml.push_str(&anchor.href);
        xml.push_str("</loc></url>");
    }

    xml.push_str(URLSET_CLOSE);
    xml
}
