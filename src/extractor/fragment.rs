//! Fragment decoding.
//!
//! Payload attributes hold escaped markup such as
//! `&lt;a href=&quot;f.pdf&quot;&gt;f&lt;/a&gt;`. This module unescapes the
//! payload and parses it as its own throwaway document to recover the links.
//! The page document is never touched.

use dom_query::Document;

use crate::dom;

/// Selector for link-bearing elements inside a decoded fragment.
const HREF_SELECTOR: &str = "[href]";

/// Attribute used to smuggle the raw payload through the entity decoder.
const CARRIER_ATTRIBUTE: &str = "data-payload";

/// One link recovered from a payload fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchor {
    /// Raw `href` attribute value.
    pub href: Option<String>,
    /// Raw `title` attribute value.
    pub title: Option<String>,
    /// Trimmed text content.
    pub text: String,
}

impl Anchor {
    /// `title` when non-empty, else the trimmed text; `None` if both are empty.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(Some(self.text.as_str()))
            .filter(|t| !t.is_empty())
    }
}

/// Decode HTML character references in `raw`.
///
/// The payload is placed in a double-quoted attribute of a scratch document
/// and read back, so the HTML parser resolves every named and numeric
/// reference. Literal quotes are escaped first so they cannot end the
/// attribute early.
#[must_use]
pub fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let carrier = format!(
        "<p {CARRIER_ATTRIBUTE}=\"{}\"></p>",
        raw.replace('"', "&quot;")
    );
    let scratch = dom::parse(&carrier);
    let decoded = dom::get_attribute(&scratch.select("p"), CARRIER_ATTRIBUTE);

    decoded.unwrap_or_else(|| raw.to_string())
}

/// Parse decoded markup and collect every element carrying an `href`.
#[must_use]
pub fn parse_anchors(markup: &str) -> Vec<Anchor> {
    if markup.trim().is_empty() {
        return Vec::new();
    }

    let fragment = Document::from(markup);
    fragment
        .select(HREF_SELECTOR)
        .iter()
        .map(|el| Anchor {
            href: dom::get_attribute(&el, "href"),
            title: dom::get_attribute(&el, "title"),
            text: dom::trimmed_text(&el),
        })
        .collect()
}

/// Decode a raw payload attribute into its anchors.
///
/// A missing, empty or unparseable payload yields no anchors.
#[must_use]
pub fn decode_payload(raw: Option<&str>) -> Vec<Anchor> {
    match raw {
        Some(raw) if !raw.is_empty() => parse_anchors(&decode_entities(raw)),
        _ => Vec::new(),
    }
}
