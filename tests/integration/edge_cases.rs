//! Edge case integration tests
//!
//! Degenerate pages and payloads must shrink the result, never fail.

#![allow(clippy::expect_used)]

use link_fetcher::{extract_files, ScanConfiguration};

fn flat() -> ScanConfiguration {
    ScanConfiguration {
        row_selector: None,
        tracking_number_selector: None,
        element_selector: "[data-content]".to_string(),
        ..ScanConfiguration::default()
    }
}

#[test]
fn test_empty_document() {
    assert!(extract_files("", &ScanConfiguration::default()).is_empty());
    assert!(extract_files("<html><body></body></html>", &flat()).is_empty());
}

#[test]
fn test_missing_and_empty_payloads() {
    let html = r#"<button class="wo-attachments" data-content=""></button>
                  <button class="wo-attachments"></button>"#;
    let config = ScanConfiguration {
        element_selector: "button.wo-attachments".to_string(),
        ..flat()
    };
    assert!(extract_files(html, &config).is_empty());
}

#[test]
fn test_garbage_payload() {
    let html = r#"<i data-content="&lt;&lt;&lt;a hre=&quot;&gt;&gt;&amp;&amp;&#xZZ;"></i>
                  <i data-content="&lt;a href=&quot;https://x/ok.pdf&quot;&gt;ok&lt;/a&gt;"></i>"#;
    let files = extract_files(html, &flat());
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].href, "https://x/ok.pdf");
}

#[test]
fn test_payload_script_is_inert() {
    let html = r#"<i data-content="&lt;script&gt;document.body.innerHTML=''&lt;/script&gt;&lt;a href=&quot;https://x/a.pdf&quot;&gt;a&lt;/a&gt;"></i>"#;
    let files = extract_files(html, &flat());
    assert_eq!(files.len(), 1);
}

#[test]
fn test_invalid_selectors_yield_nothing() {
    let config = ScanConfiguration {
        row_selector: Some("div[".to_string()),
        element_selector: "::bogus(".to_string(),
        ..ScanConfiguration::default()
    };
    let html = r#"<div class="WoRow"><button data-content="&lt;a href='a.pdf'&gt;a&lt;/a&gt;"></button></div>"#;
    assert!(extract_files(html, &config).is_empty());
}

#[test]
fn test_unnamed_file_is_reported_not_dropped() {
    let html = r#"<i data-content="&lt;a href=&quot;https://x/get/?name=a.pdf&quot;&gt;&lt;/a&gt;"></i>"#;
    let files = extract_files(html, &flat());
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].filename, None);
    assert_eq!(files[0].display_name(), "unnamed");
}

#[test]
fn test_non_anchor_href_elements_are_collected() {
    let html = r#"<i data-content="&lt;map&gt;&lt;area href=&quot;https://x/plan.png&quot; title=&quot;Floor plan.png&quot;&gt;&lt;/map&gt;"></i>"#;
    let files = extract_files(html, &flat());
    assert_eq!(files[0].filename.as_deref(), Some("Floor plan.png"));
}

#[test]
fn test_whitespace_in_title_text() {
    let html = r#"<i data-content="&lt;a href=&quot;https://x/1&quot;&gt;
        Quote (final).pdf
    &lt;/a&gt;"></i>"#;
    let files = extract_files(html, &flat());
    assert_eq!(files[0].title.as_deref(), Some("Quote (final).pdf"));
}
