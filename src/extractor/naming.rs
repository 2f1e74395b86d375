//! Candidate filtering and filename derivation.
//!
//! Decides which recovered anchors are attachments and names them. The
//! `seen` set belongs to one scan and is threaded through every call so an
//! href accepted for one row is silently skipped everywhere after.

use std::collections::HashSet;

use url::Url;

use super::fragment::Anchor;
use crate::result::DiscoveredFile;
use crate::url_utils;

/// Whether `href` or `title` contains `.ext` for any configured extension.
///
/// Substring match, case-insensitive, so a filename buried in a query
/// string (redirects, proxies) still counts. An empty extension list
/// matches nothing.
#[must_use]
pub fn matches_extension<S: AsRef<str>>(href: &str, title: Option<&str>, extensions: &[S]) -> bool {
    let href = href.to_lowercase();
    let title = title.unwrap_or_default().to_lowercase();

    extensions.iter().any(|ext| {
        let needle = format!(".{}", ext.as_ref().to_lowercase());
        href.contains(&needle) || title.contains(&needle)
    })
}

/// Title if non-empty, else the decoded last path segment of `href`.
#[must_use]
pub fn base_name(title: Option<&str>, href: &str, base: Option<&Url>) -> Option<String> {
    match title.filter(|t| !t.is_empty()) {
        Some(title) => Some(title.to_string()),
        None => url_utils::filename_from_href(href, base),
    }
}

/// Prefix `base_name` with the tracking identifier, if any.
///
/// Without a base name the file stays unnamed, prefix or not.
#[must_use]
pub fn derive_filename(tracking_number: Option<&str>, base_name: Option<&str>) -> Option<String> {
    let base_name = base_name?;
    Some(match tracking_number {
        Some(tracking) => format!("{tracking}_{base_name}"),
        None => base_name.to_string(),
    })
}

/// Filter one payload's anchors and turn the accepted ones into files.
///
/// Anchors are visited in document order. Empty or already-seen hrefs are
/// skipped; accepted hrefs are added to `seen`.
pub fn accept_anchors<S: AsRef<str>>(
    anchors: &[Anchor],
    tracking_number: Option<&str>,
    extensions: &[S],
    base: Option<&Url>,
    seen: &mut HashSet<String>,
) -> Vec<DiscoveredFile> {
    let mut files = Vec::new();

    for anchor in anchors {
        let Some(href) = anchor.href.as_deref().filter(|h| !h.is_empty()) else {
            continue;
        };
        if seen.contains(href) {
            tracing::trace!(href, "duplicate href skipped");
            continue;
        }

        let title = anchor.label();
        if !matches_extension(href, title, extensions) {
            tracing::trace!(href, "no configured extension");
            continue;
        }

        seen.insert(href.to_string());

        let base_name = base_name(title, href, base);
        files.push(DiscoveredFile {
            href: href.to_string(),
            title: title.map(str::to_string),
            filename: derive_filename(tracking_number, base_name.as_deref()),
            tracking_number: tracking_number.map(str::to_string),
        });
    }

    files
}
