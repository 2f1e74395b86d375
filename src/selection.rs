//! Checklist over the most recent scan.
//!
//! Every discovered file gets a checkbox, checked by default. The user can
//! toggle individual entries, select or deselect everything, and apply an
//! exclusion pattern that unchecks and marks matching files.

use crate::patterns::ExclusionFilter;
use crate::result::DiscoveredFile;

#[derive(Debug, Clone)]
struct Entry {
    file: DiscoveredFile,
    checked: bool,
    excluded: bool,
}

/// Selection state for one result set.
#[derive(Debug, Clone, Default)]
pub struct Checklist {
    entries: Vec<Entry>,
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Status line after a scan.
#[must_use]
pub fn found_message(count: usize) -> String {
    if count == 0 {
        "No downloadable files found on this page.".to_string()
    } else {
        format!("Found {count} file{}.", plural(count))
    }
}

/// Status line after applying an exclusion pattern.
#[must_use]
pub fn exclusion_message(excluded: usize) -> String {
    if excluded == 0 {
        "No files matched the exclusion pattern.".to_string()
    } else {
        format!("{excluded} file{} excluded by filter.", plural(excluded))
    }
}

impl Checklist {
    /// Start a checklist with every file checked.
    #[must_use]
    pub fn new(files: Vec<DiscoveredFile>) -> Self {
        Self {
            entries: files
                .into_iter()
                .map(|file| Entry {
                    file,
                    checked: true,
                    excluded: false,
                })
                .collect(),
        }
    }

    /// Number of files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scan found nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of checked files.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|e| e.checked).count()
    }

    /// Whether the file at `index` is checked.
    #[must_use]
    pub fn is_checked(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|e| e.checked)
    }

    /// Whether the file at `index` was unchecked by the exclusion filter.
    #[must_use]
    pub fn is_excluded(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|e| e.excluded)
    }

    /// Flip one checkbox. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.checked = !entry.checked;
        }
    }

    /// Check every file. Exclusion marks stay.
    pub fn select_all(&mut self) {
        self.set_all(true);
    }

    /// Uncheck every file.
    pub fn deselect_all(&mut self) {
        self.set_all(false);
    }

    fn set_all(&mut self, checked: bool) {
        for entry in &mut self.entries {
            entry.checked = checked;
        }
    }

    /// Uncheck and mark every file the filter excludes.
    ///
    /// Returns the number of files matched. Files that do not match keep
    /// their current state.
    pub fn apply_exclusion(&mut self, filter: &ExclusionFilter) -> usize {
        let mut excluded = 0;
        for entry in &mut self.entries {
            if filter.excludes(&entry.file) {
                entry.checked = false;
                entry.excluded = true;
                excluded += 1;
            }
        }
        excluded
    }

    /// Drop all exclusion marks and check every file again.
    pub fn clear_exclusion(&mut self) {
        for entry in &mut self.entries {
            entry.checked = true;
            entry.excluded = false;
        }
    }

    /// All files, in scan order.
    pub fn files(&self) -> impl Iterator<Item = &DiscoveredFile> {
        self.entries.iter().map(|e| &e.file)
    }

    /// Checked files, in scan order.
    #[must_use]
    pub fn selected(&self) -> Vec<&DiscoveredFile> {
        self.entries
            .iter()
            .filter(|e| e.checked)
            .map(|e| &e.file)
            .collect()
    }

    /// e.g. `"2 of 3 files selected"`.
    #[must_use]
    pub fn summary(&self) -> String {
        let total = self.len();
        format!(
            "{} of {total} file{} selected",
            self.selected_count(),
            plural(total)
        )
    }
}
