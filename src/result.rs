//! Result types for a scan.
//!
//! A scan produces a flat list of [`DiscoveredFile`]s. [`ScanReport`] adds
//! which locator mode produced them.

use serde::{Deserialize, Serialize};

/// Name shown for a file whose filename could not be derived.
pub const UNNAMED: &str = "unnamed";

/// One downloadable attachment found on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredFile {
    /// URL exactly as it appeared in the anchor's `href`. Unique within a scan.
    pub href: String,

    /// Anchor `title` attribute, or its trimmed text when the title is missing.
    pub title: Option<String>,

    /// Display and save name.
    ///
    /// `None` when neither a title nor a decodable URL path segment exists.
    /// Consumers should treat this as "unnamed" rather than an empty name.
    pub filename: Option<String>,

    /// Tracking identifier of the owning row; `None` in fallback mode.
    pub tracking_number: Option<String>,
}

impl DiscoveredFile {
    /// Filename for display, or [`UNNAMED`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.filename.as_deref().unwrap_or(UNNAMED)
    }

    /// Lower-cased text after the last `.` of the filename.
    ///
    /// Returns `None` for unnamed files and names without a dot.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let name = self.filename.as_deref()?;
        let (_, ext) = name.rsplit_once('.')?;
        Some(ext.to_lowercase())
    }
}

/// Which locator strategy produced a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Row-aware mode; files carry their row's tracking identifier.
    Grouped,
    /// Document-wide fallback; no tracking identifiers.
    Flat,
}

/// Files from one scan plus the mode that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Locator mode that produced `files`.
    pub mode: ScanMode,
    /// Deduplicated files in document order.
    pub files: Vec<DiscoveredFile>,
}
