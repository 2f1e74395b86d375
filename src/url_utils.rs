//! URL Utility Functions
//!
//! Filename derivation from attachment hrefs.

use percent_encoding::percent_decode_str;
use url::Url;

/// Parse a URL string, resolving it against `base` when it is relative.
///
/// # Returns
/// * The parsed URL, or `None` if it is relative with no usable base
#[must_use]
pub fn resolve_url(href: &str, base: Option<&Url>) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    match Url::parse(href) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => base.and_then(|b| b.join(href).ok()),
        Err(_) => None,
    }
}

/// Extract a filename from the last path segment of an href.
///
/// The segment is percent-decoded. Query strings and fragments are ignored.
///
/// # Returns
/// * `None` if the href cannot be resolved, the last segment is empty
///   (e.g. a trailing slash), it holds a malformed `%` escape, or the
///   decoded bytes are not valid UTF-8
///
/// # Examples
///
/// ```
/// use link_fetcher::url_utils::filename_from_href;
///
/// let name = filename_from_href("https://x/files/Q3%20report.pdf?dl=1", None);
/// assert_eq!(name.as_deref(), Some("Q3 report.pdf"));
/// ```
#[must_use]
pub fn filename_from_href(href: &str, base: Option<&Url>) -> Option<String> {
    let url = resolve_url(href, base)?;
    let segment = url.path().rsplit('/').next()?;

    if segment.is_empty() {
        return None;
    }

    if !has_valid_escapes(segment) {
        return None;
    }

    let decoded = percent_decode_str(segment).decode_utf8().ok()?;
    if decoded.is_empty() {
        None
    } else {
        Some(decoded.into_owned())
    }
}

/// Every `%` must start a two-hex-digit escape.
fn has_valid_escapes(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}
