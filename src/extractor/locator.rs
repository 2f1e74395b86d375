//! Row and payload element location.
//!
//! Two strategies: row-aware (`Grouped`), where each payload element is
//! attributed to the tracking identifier of its row, and document-wide
//! (`Flat`), where no identifier is attached.

use dom_query::{Document, Matcher, Selection};

use crate::dom;
use crate::options::ScanConfiguration;
use crate::result::ScanMode;

/// Raw payload of one element plus the tracking identifier it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// Encoded payload attribute value; `None` if the attribute is missing.
    pub raw: Option<String>,
    /// Identifier of the owning row.
    pub tracking_number: Option<String>,
}

/// One row and the payloads found inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Trimmed text of the row's tracking element, if present and non-empty.
    pub tracking_number: Option<String>,
    /// Payload attribute values of the row's payload elements, in order.
    pub payloads: Vec<Option<String>>,
}

/// Output of the locator stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    /// Payloads grouped by row.
    Grouped(Vec<Row>),
    /// Payloads from the whole document, unattributed.
    Flat(Vec<Payload>),
}

impl Located {
    /// Mode this result was produced by.
    #[must_use]
    pub fn mode(&self) -> ScanMode {
        match self {
            Self::Grouped(_) => ScanMode::Grouped,
            Self::Flat(_) => ScanMode::Flat,
        }
    }

    /// Flatten into payloads in document order.
    #[must_use]
    pub fn into_payloads(self) -> Vec<Payload> {
        match self {
            Self::Grouped(rows) => rows
                .into_iter()
                .flat_map(|row| {
                    let tracking_number = row.tracking_number;
                    row.payloads.into_iter().map(move |raw| Payload {
                        raw,
                        tracking_number: tracking_number.clone(),
                    })
                })
                .collect(),
            Self::Flat(payloads) => payloads,
        }
    }
}

/// Locate payloads row by row.
///
/// Returns `None` when row-aware mode is not configured or one of its
/// selectors does not compile.
#[must_use]
pub fn locate_grouped(doc: &Document, config: &ScanConfiguration) -> Option<Located> {
    let (row_selector, tracking_selector) = config.row_selectors()?;
    let rows = dom::compile_lenient(row_selector)?;
    let tracking = dom::compile_lenient(tracking_selector)?;
    let elements = dom::compile_lenient(&config.element_selector)?;

    let rows = dom::query_document(doc, &rows)
        .iter()
        .map(|row| Row {
            tracking_number: dom::query_first(row, &tracking)
                .map(|el| dom::trimmed_text(&el))
                .filter(|t| !t.is_empty()),
            payloads: payloads_in(row, &elements, &config.payload_attribute),
        })
        .collect::<Vec<_>>();

    tracing::debug!(rows = rows.len(), "located rows");
    Some(Located::Grouped(rows))
}

/// Locate every payload element in the document.
#[must_use]
pub fn locate_flat(doc: &Document, config: &ScanConfiguration) -> Located {
    let Some(elements) = dom::compile_lenient(&config.element_selector) else {
        return Located::Flat(Vec::new());
    };

    let payloads = dom::query_document(doc, &elements)
        .iter()
        .map(|el| Payload {
            raw: dom::get_attribute(el, &config.payload_attribute),
            tracking_number: None,
        })
        .collect::<Vec<_>>();

    tracing::debug!(elements = payloads.len(), "located payload elements");
    Located::Flat(payloads)
}

fn payloads_in(row: &Selection, elements: &Matcher, attribute: &str) -> Vec<Option<String>> {
    dom::query_all(row, elements)
        .iter()
        .map(|el| dom::get_attribute(el, attribute))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <div class="WoRow">
            <a class="WoRow_link--primary"> WO-1 </a>
            <button class="wo-attachments" data-content="one"></button>
            <button class="wo-attachments" data-content="two"></button>
        </div>
        <div class="WoRow">
            <button class="wo-attachments" data-content="three"></button>
        </div>
        <div class="WoRow"><a class="WoRow_link--primary">WO-3</a></div>
        <button class="wo-attachments" data-content="loose"></button>
    </body></html>"#;

    #[test]
    fn test_grouped_rows_with_tracking() {
        let doc = dom::parse(PAGE);
        let Some(Located::Grouped(rows)) = locate_grouped(&doc, &ScanConfiguration::default())
        else {
            panic!("expected grouped result");
        };

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].tracking_number.as_deref(), Some("WO-1"));
        assert_eq!(
            rows[0].payloads,
            vec![Some("one".to_string()), Some("two".to_string())]
        );
        assert_eq!(rows[1].tracking_number, None);
        assert_eq!(rows[1].payloads, vec![Some("three".to_string())]);
        assert!(rows[2].payloads.is_empty());
    }

    #[test]
    fn test_flat_ignores_rows() {
        let doc = dom::parse(PAGE);
        let located = locate_flat(&doc, &ScanConfiguration::default());
        assert_eq!(located.mode(), ScanMode::Flat);

        let raws: Vec<_> = located
            .into_payloads()
            .into_iter()
            .map(|p| (p.raw, p.tracking_number))
            .collect();
        assert_eq!(raws.len(), 4);
        assert!(raws.iter().all(|(_, t)| t.is_none()));
        assert_eq!(raws[3].0.as_deref(), Some("loose"));
    }

    #[test]
    fn test_into_payloads_carries_tracking() {
        let doc = dom::parse(PAGE);
        let payloads = locate_grouped(&doc, &ScanConfiguration::default())
            .map(Located::into_payloads)
            .unwrap_or_default();

        let tracking: Vec<_> = payloads.iter().map(|p| p.tracking_number.as_deref()).collect();
        assert_eq!(tracking, vec![Some("WO-1"), Some("WO-1"), None]);
    }

    #[test]
    fn test_half_configured_rows_disable_grouping() {
        let doc = dom::parse(PAGE);
        let config = ScanConfiguration {
            tracking_number_selector: None,
            ..ScanConfiguration::default()
        };
        assert!(locate_grouped(&doc, &config).is_none());
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let doc = dom::parse(PAGE);
        let config = ScanConfiguration {
            element_selector: "button[".to_string(),
            ..ScanConfiguration::default()
        };
        assert!(locate_grouped(&doc, &config).is_none());
        assert_eq!(locate_flat(&doc, &config), Located::Flat(Vec::new()));
    }

    #[test]
    fn test_blank_tracking_text_is_absent() {
        let doc = dom::parse(
            r#"<div class="WoRow"><a class="WoRow_link--primary">  </a>
               <button class="wo-attachments" data-content="x"></button></div>"#,
        );
        let Some(Located::Grouped(rows)) = locate_grouped(&doc, &ScanConfiguration::default())
        else {
            panic!("expected grouped result");
        };
        assert_eq!(rows[0].tracking_number, None);
    }
}
