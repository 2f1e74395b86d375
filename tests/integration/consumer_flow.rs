//! Scan → checklist → exclusion → download, as the popup drives it.

#![allow(clippy::expect_used)]

use link_fetcher::download::{batch_message, download_all, DownloadError, DownloadId, DownloadRequest, Downloader};
use link_fetcher::patterns::{url_matches_patterns, ExclusionFilter};
use link_fetcher::selection::{exclusion_message, found_message, Checklist};
use link_fetcher::{dom, scan, ScanMode, Settings};

const WORK_ORDERS: &str = r#"<!DOCTYPE html>
<html><body>
  <div class="WoRow">
    <a class="WoRow_link--primary" href="/wo/1">WO-1001</a>
    <button class="wo-attachments" data-content="&lt;ul&gt;&lt;li&gt;&lt;a href=&quot;https://files.test/1001/invoice.pdf&quot; title=&quot;invoice.pdf&quot;&gt;Invoice&lt;/a&gt;&lt;/li&gt;&lt;li&gt;&lt;a href=&quot;https://files.test/1001/IMG_01.JPG&quot;&gt;&lt;/a&gt;&lt;/li&gt;&lt;/ul&gt;">3</button>
  </div>
  <div class="WoRow">
    <a class="WoRow_link--primary" href="/wo/2">WO-1002</a>
    <button class="wo-attachments" data-content="&lt;a href=&quot;https://files.test/1001/invoice.pdf&quot;&gt;invoice.pdf&lt;/a&gt;&lt;a href=&quot;https://files.test/1002/site%20photo.jpg&quot;&gt;&lt;/a&gt;">2</button>
  </div>
</body></html>"#;

#[derive(Default)]
struct FakeDownloads {
    started: Vec<DownloadRequest>,
}

impl Downloader for FakeDownloads {
    fn download(&mut self, request: &DownloadRequest) -> Result<DownloadId, DownloadError> {
        if request.filename.as_deref().is_some_and(|n| n.contains("invoice")) {
            return Err(DownloadError("Download blocked".to_string()));
        }
        self.started.push(request.clone());
        Ok(100 + self.started.len() as DownloadId)
    }
}

#[test]
fn popup_flow_end_to_end() {
    let settings = Settings::default();
    let page_url = "https://www.servicechannel.com/sc/wo/Workorders/list?status=open";
    assert!(url_matches_patterns(page_url, &settings.url_patterns));

    let report = scan(&dom::parse(WORK_ORDERS), &settings.scan);
    assert_eq!(report.mode, ScanMode::Grouped);
    assert_eq!(found_message(report.files.len()), "Found 3 files.");

    let names: Vec<_> = report.files.iter().map(|f| f.display_name()).collect();
    assert_eq!(
        names,
        vec!["WO-1001_invoice.pdf", "WO-1001_IMG_01.JPG", "WO-1002_site photo.jpg"]
    );

    let mut checklist = Checklist::new(report.files);
    let excluded = checklist.apply_exclusion(&ExclusionFilter::new("*.jpg").expect("valid"));
    assert_eq!(exclusion_message(excluded), "2 files excluded by filter.");
    assert_eq!(checklist.summary(), "1 of 3 files selected");

    checklist.clear_exclusion();
    checklist.toggle(1);

    let mut downloads = FakeDownloads::default();
    let outcomes = download_all(checklist.selected(), &mut downloads);

    assert_eq!(outcomes.len(), 2);
    assert!(!outcomes[0].is_success());
    assert!(outcomes[1].is_success());
    assert_eq!(downloads.started.len(), 1);
    assert_eq!(
        downloads.started[0],
        DownloadRequest {
            url: "https://files.test/1002/site%20photo.jpg".to_string(),
            filename: Some("WO-1002_site photo.jpg".to_string()),
        }
    );
    assert_eq!(batch_message(&outcomes), "Started downloading 1 file; 1 failed.");
}

#[test]
fn unconfigured_page_is_not_scanned() {
    let settings = Settings::default();
    assert!(!url_matches_patterns("https://www.servicechannel.com/sc/invoices", &settings.url_patterns));
}
