//! Scan configuration.
//!
//! `ScanConfiguration` tells the extractor where the attachment payloads
//! live in a page and which file types count as attachments. It is plain
//! data: shape checks happen in [`crate::settings`], never during a scan.

use serde::{Deserialize, Serialize, Serializer};

/// Default selector for the repeated row container.
pub const DEFAULT_ROW_SELECTOR: &str = "div.WoRow";

/// Default selector for the tracking identifier inside a row.
pub const DEFAULT_TRACKING_NUMBER_SELECTOR: &str = "a.WoRow_link--primary";

/// Default selector for payload-carrying elements.
pub const DEFAULT_ELEMENT_SELECTOR: &str = "button.wo-attachments[data-content]";

/// Default attribute holding the encoded link fragment.
pub const DEFAULT_PAYLOAD_ATTRIBUTE: &str = "data-content";

/// Default accepted file extensions.
pub const DEFAULT_FILE_EXTENSIONS: &[&str] =
    &["pdf", "png", "jpg", "jpeg", "xlsx", "docx", "zip", "csv"];

/// Configuration for a single scan.
///
/// All fields are public. Use `Default::default()` for the stock work-order
/// page layout and struct-update syntax for overrides.
///
/// # Example
///
/// ```rust
/// use link_fetcher::ScanConfiguration;
///
/// // Flat page: no rows, just payload buttons.
/// let config = ScanConfiguration {
///     row_selector: None,
///     tracking_number_selector: None,
///     element_selector: "button[data-content]".to_string(),
///     ..ScanConfiguration::default()
/// };
/// assert!(!config.row_mode_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanConfiguration {
    /// Selector for the repeated "row" unit.
    ///
    /// `None` or a blank string disables row-aware mode.
    ///
    /// Default: `Some("div.WoRow")`
    #[serde(serialize_with = "blank_if_none")]
    pub row_selector: Option<String>,

    /// Selector, evaluated inside a row, for the row's tracking identifier.
    ///
    /// Row-aware mode needs both this and `row_selector`.
    ///
    /// Default: `Some("a.WoRow_link--primary")`
    #[serde(serialize_with = "blank_if_none")]
    pub tracking_number_selector: Option<String>,

    /// Selector for elements carrying the encoded attachment payload.
    ///
    /// Default: `"button.wo-attachments[data-content]"`
    pub element_selector: String,

    /// Attribute on payload elements that holds the encoded fragment.
    ///
    /// Default: `"data-content"`
    pub payload_attribute: String,

    /// Lower-cased, dot-stripped extensions, e.g. `"pdf"`.
    ///
    /// An empty list rejects every link.
    ///
    /// Default: `pdf, png, jpg, jpeg, xlsx, docx, zip, csv`
    pub file_extensions: Vec<String>,

    /// URL of the scanned page.
    ///
    /// Only used to resolve relative hrefs when a filename has to come from
    /// the URL path. Emitted hrefs are never rewritten.
    ///
    /// Default: `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ScanConfiguration {
    /// Returns the row and tracking selectors when both are set and non-blank.
    #[must_use]
    pub fn row_selectors(&self) -> Option<(&str, &str)> {
        let row = non_blank(self.row_selector.as_deref())?;
        let tracking = non_blank(self.tracking_number_selector.as_deref())?;
        Some((row, tracking))
    }

    /// Whether a scan will try row-aware mode first.
    #[must_use]
    pub fn row_mode_enabled(&self) -> bool {
        self.row_selectors().is_some()
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

// Stored settings spell a disabled selector as "".
#[allow(clippy::ref_option)]
fn blank_if_none<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or_default())
}

impl Default for ScanConfiguration {
    fn default() -> Self {
        Self {
            row_selector: Some(DEFAULT_ROW_SELECTOR.to_string()),
            tracking_number_selector: Some(DEFAULT_TRACKING_NUMBER_SELECTOR.to_string()),
            element_selector: DEFAULT_ELEMENT_SELECTOR.to_string(),
            payload_attribute: DEFAULT_PAYLOAD_ATTRIBUTE.to_string(),
            file_extensions: DEFAULT_FILE_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            base_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = ScanConfiguration::default();

        assert_eq!(config.row_selector.as_deref(), Some("div.WoRow"));
        assert_eq!(
            config.tracking_number_selector.as_deref(),
            Some("a.WoRow_link--primary")
        );
        assert_eq!(config.element_selector, "button.wo-attachments[data-content]");
        assert_eq!(config.payload_attribute, "data-content");
        assert_eq!(
            config.file_extensions,
            vec!["pdf", "png", "jpg", "jpeg", "xlsx", "docx", "zip", "csv"]
        );
        assert!(config.base_url.is_none());
        assert!(config.row_mode_enabled());
    }

    #[test]
    fn test_row_mode_needs_both_selectors() {
        let only_row = ScanConfiguration {
            tracking_number_selector: None,
            ..ScanConfiguration::default()
        };
        assert!(!only_row.row_mode_enabled());

        let only_tracking = ScanConfiguration {
            row_selector: None,
            ..ScanConfiguration::default()
        };
        assert!(!only_tracking.row_mode_enabled());
    }

    #[test]
    fn test_blank_selectors_disable_row_mode() {
        let config = ScanConfiguration {
            row_selector: Some("   ".to_string()),
            ..ScanConfiguration::default()
        };
        assert!(config.row_selectors().is_none());
    }

    #[test]
    fn test_row_selectors_are_trimmed() {
        let config = ScanConfiguration {
            row_selector: Some(" tr.order ".to_string()),
            tracking_number_selector: Some("td.id\n".to_string()),
            ..ScanConfiguration::default()
        };
        assert_eq!(config.row_selectors(), Some(("tr.order", "td.id")));
    }
}
