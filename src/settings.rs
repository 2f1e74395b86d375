//! Settings store.
//!
//! The persisted shape of the user's configuration: which pages to scan
//! and the [`ScanConfiguration`] used there. Settings come from a file
//! (TOML or JSON) or from the free-text settings form and are validated
//! here, once, before any scan runs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dom;
use crate::error::{Error, Result};
use crate::options::ScanConfiguration;
use crate::patterns::UrlPattern;

/// Default page URL pattern.
pub const DEFAULT_URL_PATTERN: &str = "https://www.servicechannel.com/sc/wo/Workorders/list*";

/// Complete user settings.
///
/// Missing keys in a settings file take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Wildcard patterns of pages the scanner is enabled on.
    pub url_patterns: Vec<String>,

    /// Scan configuration, flattened into the same table.
    #[serde(flatten)]
    pub scan: ScanConfiguration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url_patterns: vec![DEFAULT_URL_PATTERN.to_string()],
            scan: ScanConfiguration::default(),
        }
    }
}

/// Raw text of the settings form, one string per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    /// One URL pattern per line.
    pub url_patterns: String,
    /// Row selector; blank disables row mode.
    pub row_selector: String,
    /// Tracking number selector; blank disables row mode.
    pub tracking_number_selector: String,
    /// Payload element selector.
    pub element_selector: String,
    /// Comma-separated extensions, e.g. `".PDF, png"`.
    pub file_extensions: String,
}

impl From<&Settings> for SettingsForm {
    fn from(settings: &Settings) -> Self {
        Self {
            url_patterns: settings.url_patterns.join("\n"),
            row_selector: settings.scan.row_selector.clone().unwrap_or_default(),
            tracking_number_selector: settings
                .scan
                .tracking_number_selector
                .clone()
                .unwrap_or_default(),
            element_selector: settings.scan.element_selector.clone(),
            file_extensions: settings.scan.file_extensions.join(", "),
        }
    }
}

/// Split the URL pattern box: one per line, trimmed, blanks dropped.
#[must_use]
pub fn parse_url_patterns(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split the extension box: comma-separated, trimmed, lower-cased, one
/// leading `.` stripped, blanks dropped.
#[must_use]
pub fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|ext| {
            let ext = ext.trim().to_lowercase();
            ext.strip_prefix('.').map(str::to_string).unwrap_or(ext)
        })
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn optional(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

impl Settings {
    /// Build settings from the form, normalizing every field.
    ///
    /// Fields the form does not edit (`payload_attribute`, `base_url`)
    /// take their defaults. The result is not validated.
    #[must_use]
    pub fn from_form(form: &SettingsForm) -> Self {
        Self {
            url_patterns: parse_url_patterns(&form.url_patterns),
            scan: ScanConfiguration {
                row_selector: optional(&form.row_selector),
                tracking_number_selector: optional(&form.tracking_number_selector),
                element_selector: form.element_selector.trim().to_string(),
                file_extensions: parse_extensions(&form.file_extensions),
                ..ScanConfiguration::default()
            },
        }
    }

    /// Check the settings before they are saved or used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSettings`] for the first failed rule, or
    /// [`Error::InvalidSelector`]/[`Error::InvalidPattern`] when a selector
    /// or URL pattern does not compile.
    pub fn validate(&self) -> Result<()> {
        let scan = &self.scan;
        let row = scan.row_selector.as_deref().map_or("", str::trim);
        let tracking = scan.tracking_number_selector.as_deref().map_or("", str::trim);

        if self.url_patterns.iter().all(|p| p.trim().is_empty()) {
            return invalid("At least one URL pattern is required.");
        }
        if scan.element_selector.trim().is_empty() {
            return invalid("Element selector cannot be empty.");
        }
        if row.is_empty() != tracking.is_empty() {
            return invalid(
                "Both Row Selector and Tracking Number Selector must be set together, or both left empty.",
            );
        }
        if scan.file_extensions.iter().all(|e| e.trim().is_empty()) {
            return invalid("At least one file extension is required.");
        }
        if scan.payload_attribute.trim().is_empty() {
            return invalid("Payload attribute cannot be empty.");
        }

        for selector in [row, tracking, scan.element_selector.trim()] {
            if !selector.is_empty() {
                dom::compile_selector(selector)?;
            }
        }
        for pattern in &self.url_patterns {
            UrlPattern::new(pattern)?;
        }

        Ok(())
    }

    /// Parse settings from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] on malformed input.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|err| Error::ConfigParse(err.to_string()))
    }

    /// Parse settings from JSON, the shape the settings store persists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] on malformed input.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|err| Error::ConfigParse(err.to_string()))
    }

    /// Load settings from a `.json` file, or TOML for any other extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::ConfigParse`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    /// Serialize to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|err| Error::ConfigParse(err.to_string()))
    }
}

fn invalid(message: &str) -> Result<()> {
    Err(Error::InvalidSettings(message.to_string()))
}
