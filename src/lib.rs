//! # link-fetcher
//!
//! Finds downloadable attachments hidden in encoded link fragments on a
//! web page.
//!
//! Pages such as work-order lists carry, per record, an element whose
//! attribute holds escaped markup (`&lt;a href=...&gt;`). This library
//! decodes those fragments, keeps the links whose href or title names a
//! configured file type, deduplicates them by href and derives a filename,
//! prefixed with the record's tracking identifier when one is found.
//!
//! ## Quick Start
//!
//! ```rust
//! use link_fetcher::{extract_files, ScanConfiguration};
//!
//! let html = r#"<div class="WoRow">
//!   <a class="WoRow_link--primary">WO-123</a>
//!   <button class="wo-attachments"
//!     data-content="&lt;a href=&quot;https://x/invoice.pdf&quot;&gt;invoice.pdf&lt;/a&gt;">
//!   </button>
//! </div>"#;
//!
//! let files = extract_files(html, &ScanConfiguration::default());
//! assert_eq!(files[0].filename.as_deref(), Some("WO-123_invoice.pdf"));
//! ```
//!
//! ## Features
//!
//! - **Row-aware scanning** with a document-wide fallback
//! - **Scan-scoped deduplication** by href
//! - **Settings** parsing and validation (TOML/JSON)
//! - **Consumer helpers**: URL gating, exclusion filter, checklist, download batch
//!
//! Extraction never fails: malformed pages only produce fewer files.

mod error;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Attachment extraction (locator, fragment decoder, filter & namer).
pub mod extractor;

/// URL utilities for filename derivation.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Wildcard URL patterns and exclusion filters.
pub mod patterns;

/// Persisted settings, form parsing and validation.
pub mod settings;

/// Checklist selection state over a result set.
pub mod selection;

/// Download requests and per-file batch outcomes.
pub mod download;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::ScanConfiguration;
pub use result::{DiscoveredFile, ScanMode, ScanReport, UNNAMED};
pub use settings::Settings;

use dom_query::Document;

/// Extracts attachment files from an HTML page.
///
/// # Example
///
/// ```rust
/// use link_fetcher::{extract_files, ScanConfiguration};
///
/// let html = r#"<button class="wo-attachments"
///     data-content="&lt;a href=&quot;f.csv&quot; title=&quot;Data&quot;&gt;&lt;/a&gt;"></button>"#;
/// let config = ScanConfiguration {
///     file_extensions: vec!["csv".to_string()],
///     ..ScanConfiguration::default()
/// };
///
/// let files = extract_files(html, &config);
/// assert_eq!(files.len(), 1);
/// assert_eq!(files[0].filename.as_deref(), Some("Data"));
/// assert_eq!(files[0].tracking_number, None);
/// ```
#[must_use]
pub fn extract_files(html: &str, config: &ScanConfiguration) -> Vec<DiscoveredFile> {
    extract_files_from_document(&dom::parse(html), config)
}

/// Extracts attachment files from an already parsed document.
#[must_use]
pub fn extract_files_from_document(doc: &Document, config: &ScanConfiguration) -> Vec<DiscoveredFile> {
    scan(doc, config).files
}

/// Extracts attachment files from HTML bytes with charset detection.
///
/// The charset is taken from the page's `<meta>` declaration, defaulting to
/// UTF-8; invalid sequences are replaced rather than rejected.
#[must_use]
pub fn extract_files_bytes(html: &[u8], config: &ScanConfiguration) -> Vec<DiscoveredFile> {
    extract_files(&encoding::transcode_to_utf8(html), config)
}

/// Runs a scan and reports which mode produced the files.
#[must_use]
pub fn scan(doc: &Document, config: &ScanConfiguration) -> ScanReport {
    extractor::scan(doc, config)
}
