//! Wildcard patterns.
//!
//! Both URL gating and the filename exclusion filter use the same small
//! wildcard syntax: `*` matches any run of characters, `?` matches exactly
//! one, everything else is literal. Matching is case-insensitive.
//! URL patterns must match the whole URL; exclusion patterns may match
//! anywhere in the filename.

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::result::DiscoveredFile;

/// Translate a wildcard pattern into regex source (without anchors).
#[must_use]
pub fn wildcard_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut buf = [0u8; 4];

    for c in pattern.chars() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }

    out
}

fn build(source: &str) -> Result<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .map_err(|err| Error::InvalidPattern(err.to_string()))
}

/// A page URL pattern such as `https://www.example.com/wo/list*`.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    source: String,
    regex: Regex,
}

impl UrlPattern {
    /// Compile an anchored pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the translated regex is rejected
    /// (e.g. it exceeds the regex size limit).
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            source: pattern.to_string(),
            regex: build(&format!("^{}$", wildcard_to_regex(pattern)))?,
        })
    }

    /// The pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the whole `url` matches.
    #[must_use]
    pub fn matches(&self, url: &str) -> bool {
        self.regex.is_match(url)
    }
}

/// Whether `url` matches any of `patterns`.
///
/// Patterns that fail to compile are skipped.
#[must_use]
pub fn url_matches_patterns<S: AsRef<str>>(url: &str, patterns: &[S]) -> bool {
    patterns.iter().any(|p| match UrlPattern::new(p.as_ref()) {
        Ok(pattern) => pattern.matches(url),
        Err(err) => {
            tracing::warn!(%err, pattern = p.as_ref(), "skipping URL pattern");
            false
        }
    })
}

/// Filename exclusion filter, e.g. `*photo*` or `WO-12?_*`.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    /// `None` for a blank pattern, which excludes nothing.
    regex: Option<Regex>,
}

impl ExclusionFilter {
    /// Compile an unanchored pattern. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the translated regex is rejected.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = pattern.trim();
        let regex = if pattern.is_empty() {
            None
        } else {
            Some(build(&wildcard_to_regex(pattern))?)
        };
        Ok(Self { regex })
    }

    /// Whether the pattern was blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.regex.is_none()
    }

    /// Whether `filename` contains a match.
    #[must_use]
    pub fn matches(&self, filename: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(filename))
    }

    /// Whether a file should be excluded. Unnamed files test as `""`.
    #[must_use]
    pub fn excludes(&self, file: &DiscoveredFile) -> bool {
        self.matches(file.filename.as_deref().unwrap_or_default())
    }
}
