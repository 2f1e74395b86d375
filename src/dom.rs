//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate: document parsing, selector
//! compilation, scoped queries and the attribute/text accessors the
//! extractor needs. Queries return results in document order.

// Re-export core types for external use
pub use dom_query::{Document, Matcher, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::error::{Error, Result};

// === Parsing ===

/// Parse an HTML string into a standalone document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Selectors ===

/// Compile a CSS selector.
///
/// # Errors
///
/// Returns [`Error::InvalidSelector`] when the selector does not parse.
pub fn compile_selector(selector: &str) -> Result<Matcher> {
    Matcher::new(selector).map_err(|err| Error::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{err:?}"),
    })
}

/// Compile a selector, logging and returning `None` on failure.
///
/// Used inside a scan, where a bad selector must simply match nothing.
#[must_use]
pub fn compile_lenient(selector: &str) -> Option<Matcher> {
    match compile_selector(selector) {
        Ok(matcher) => Some(matcher),
        Err(err) => {
            tracing::warn!(%err, "selector matches nothing");
            None
        }
    }
}

// === Querying ===

/// All elements in the document matching `matcher`.
#[must_use]
pub fn query_document<'a>(doc: &'a Document, matcher: &Matcher) -> Vec<Selection<'a>> {
    doc.select_matcher(matcher).iter().collect()
}

/// All descendants of `scope` matching `matcher`.
#[must_use]
pub fn query_all<'a>(scope: &Selection<'a>, matcher: &Matcher) -> Vec<Selection<'a>> {
    scope.select_matcher(matcher).iter().collect()
}

/// First descendant of `scope` matching `matcher`.
#[must_use]
pub fn query_first<'a>(scope: &Selection<'a>, matcher: &Matcher) -> Option<Selection<'a>> {
    scope.select_matcher(matcher).iter().next()
}

// === Attributes and Text ===

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all text content of node and descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with surrounding whitespace removed.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    text_content(sel).trim().to_string()
}
