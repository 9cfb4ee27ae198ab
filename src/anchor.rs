// src/anchor.rs
// =============================================================================
// The anchor value type and the HTML side of the crawl: turning a page body
// into the list of <a href> links it contains, in document order.
// =============================================================================

use scraper::{Html, Selector};
use thiserror::Error;

/// A hyperlink lifted out of a page: the raw `href` plus its display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    pub text: String,
}

impl Anchor {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }
}

/// Errors raised while reading anchors out of a page body.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Body was not valid UTF-8 text
    #[error("body is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Collects every `<a>` element carrying an `href` attribute, in the order
/// the document declares them. Hrefs come back untouched; resolving them
/// against the domain is the crawler's job.
pub fn extract_anchors(body: &[u8]) -> Result<Vec<Anchor>, ParseError> {
    let html = std::str::from_utf8(body)?;

    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();

    let mut anchors = Vec::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            let text = element.text().collect::<String>();
            anchors.push(Anchor::new(href, text.trim()));
        }
    }

    Ok(anchors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_anchors_in_document_order() {
        let body = br#"<html><body>
            <a href="/first">First</a>
            <p><a href="/second">Second</a></p>
            <a href="https://example.com/third">Third</a>
        </body></html>"#;

        let anchors = extract_anchors(body).unwrap();

        assert_eq!(
            anchors,
            vec![
                Anchor::new("/first", "First"),
                Anchor::new("/second", "Second"),
                Anchor::new("https://example.com/third", "Third"),
            ]
        );
    }

    #[test]
    fn test_skips_anchors_without_href() {
        let body = b"<a name=\"top\">no href</a><a href=\"/kept\">kept</a>";

        let anchors = extract_anchors(body).unwrap();

        assert_eq!(anchors, vec![Anchor::new("/kept", "kept")]);
    }

    #[test]
    fn test_collects_nested_text_trimmed() {
        let body = b"<a href=\"/docs\">  Read the <strong>docs</strong> </a>";

        let anchors = extract_anchors(body).unwrap();

        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].text, "Read the docs");
    }

    #[test]
    fn test_keeps_empty_hrefs() {
        let body = b"<a href=\"\">blank</a>";

        let anchors = extract_anchors(body).unwrap();

        assert_eq!(anchors, vec![Anchor::new("", "blank")]);
    }

    #[test]
    fn test_empty_body_yields_no_anchors() {
        let anchors = extract_anchors(b"").unwrap();

        assert!(anchors.is_empty());
    }

    #[test]
    fn test_survives_malformed_html() {
        let body = b"<html><body><a href=\"/open\">never closed";

        let anchors = extract_anchors(body).unwrap();

        assert_eq!(anchors, vec![Anchor::new("/open", "never closed")]);
    }

    #[test]
    fn test_rejects_non_utf8_bodies() {
        let err = extract_anchors(b"\xff\xfe\xfd").unwrap_err();

        assert!(matches!(err, ParseError::Encoding(_)));
    }
}
