//! Download batch.
//!
//! The actual transfer belongs to an external download trigger (a browser
//! downloads API, a download manager, ...). This module turns selected
//! files into requests, hands them to a [`Downloader`] one at a time and
//! records a per-file outcome. A failed file never stops the batch.

use serde::{Deserialize, Serialize};

use crate::result::DiscoveredFile;

/// Identifier the download trigger assigns to a started download.
pub type DownloadId = u64;

/// A single download to start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// Source URL, exactly as discovered.
    pub url: String,
    /// Name to save under; `None` lets the downloader choose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl From<&DiscoveredFile> for DownloadRequest {
    fn from(file: &DiscoveredFile) -> Self {
        Self {
            url: file.href.clone(),
            filename: file.filename.clone().filter(|name| !name.is_empty()),
        }
    }
}

/// Failure reported by the download trigger for one file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct DownloadError(pub String);

/// The download trigger.
pub trait Downloader {
    /// Start one download.
    ///
    /// # Errors
    ///
    /// Returns a [`DownloadError`] if the download could not be started.
    fn download(&mut self, request: &DownloadRequest) -> Result<DownloadId, DownloadError>;
}

/// Result of one request in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    /// URL of the file.
    pub href: String,
    /// Download id, or why it failed.
    pub result: Result<DownloadId, DownloadError>,
}

impl DownloadOutcome {
    /// Whether the download was started.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Request every file in order and collect the outcomes.
pub fn download_all<'a, D, I>(files: I, downloader: &mut D) -> Vec<DownloadOutcome>
where
    D: Downloader + ?Sized,
    I: IntoIterator<Item = &'a DiscoveredFile>,
{
    files
        .into_iter()
        .map(|file| {
            let request = DownloadRequest::from(file);
            let result = downloader.download(&request);
            match &result {
                Ok(id) => tracing::debug!(href = %file.href, id, "download started"),
                Err(err) => tracing::warn!(href = %file.href, %err, "download failed"),
            }
            DownloadOutcome {
                href: file.href.clone(),
                result,
            }
        })
        .collect()
}

/// Status line after a batch, e.g. `"Started downloading 2 files."`.
#[must_use]
pub fn batch_message(outcomes: &[DownloadOutcome]) -> String {
    let started = outcomes.iter().filter(|o| o.is_success()).count();
    let failed = outcomes.len() - started;
    let noun = if started == 1 { "file" } else { "files" };

    if failed == 0 {
        format!("Started downloading {started} {noun}.")
    } else {
        format!("Started downloading {started} {noun}; {failed} failed.")
    }
}
