//! Attachment extraction.
//!
//! # Module Structure
//!
//! - `locator`: Finds payload elements, grouped by row or document-wide
//! - `fragment`: Unescapes payloads and recovers their links
//! - `naming`: Extension filtering, href deduplication and filenames
//! - `pipeline`: Runs the stages and chooses between row and fallback mode
//!
//! # Usage
//!
//! ```rust
//! use std::collections::HashSet;
//! use link_fetcher::extractor::{fragment, naming};
//!
//! let anchors = fragment::decode_payload(Some(
//!     "&lt;a href=&quot;https://x/q.pdf&quot;&gt;Quote&lt;/a&gt;",
//! ));
//! let mut seen = HashSet::new();
//! let files = naming::accept_anchors(&anchors, Some("WO-7"), &["pdf"], None, &mut seen);
//! assert_eq!(files[0].filename.as_deref(), Some("WO-7_Quote"));
//! ```

pub mod fragment;
pub mod locator;
pub mod naming;
pub mod pipeline;

pub use fragment::{decode_payload, Anchor};
pub use locator::{locate_flat, locate_grouped, Located, Payload, Row};
pub use naming::{accept_anchors, derive_filename, matches_extension};
pub use pipeline::scan;
