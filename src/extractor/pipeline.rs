//! Scan pipeline: locate → decode → filter & name.
//!
//! Row-aware mode runs first when configured. If it accepts no file at all
//! the whole document is scanned again without row attribution. Results of
//! the two modes are never mixed.

use std::collections::HashSet;

use dom_query::Document;
use url::Url;

use super::fragment;
use super::locator::{self, Located};
use super::naming;
use crate::options::ScanConfiguration;
use crate::result::{DiscoveredFile, ScanMode, ScanReport};

/// Run one scan over `doc`.
#[must_use]
pub fn scan(doc: &Document, config: &ScanConfiguration) -> ScanReport {
    let base = config
        .base_url
        .as_deref()
        .and_then(|u| Url::parse(u).ok());

    if let Some(grouped) = locator::locate_grouped(doc, config) {
        let files = collect_files(grouped, config, base.as_ref());
        if !files.is_empty() {
            tracing::debug!(files = files.len(), "row-aware scan complete");
            return ScanReport {
                mode: ScanMode::Grouped,
                files,
            };
        }
        tracing::debug!("row-aware scan found no files, scanning whole document");
    }

    let files = collect_files(locator::locate_flat(doc, config), config, base.as_ref());
    tracing::debug!(files = files.len(), "document-wide scan complete");
    ScanReport {
        mode: ScanMode::Flat,
        files,
    }
}

/// Decode, filter and name every payload of one locator result.
///
/// Owns the `seen` set for the duration of the call.
fn collect_files(located: Located, config: &ScanConfiguration, base: Option<&Url>) -> Vec<DiscoveredFile> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for payload in located.into_payloads() {
        let anchors = fragment::decode_payload(payload.raw.as_deref());
        files.extend(naming::accept_anchors(
            &anchors,
            payload.tracking_number.as_deref(),
            &config.file_extensions,
            base,
            &mut seen,
        ));
    }

    files
}
