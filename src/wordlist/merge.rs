//! Merging new words into a word list.

use std::collections::HashSet;
use std::path::Path;

use crate::wordlist::diff::UnifiedDiff;

/// Result of merging additions into a word list.
///
/// Holds both sides so the review diff can be rendered on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Lines as they were before the merge.
    pub original: Vec<String>,
    /// Deduplicated lines in case-insensitive order.
    pub merged: Vec<String>,
}

impl MergeOutcome {
    /// Check if the merge changed the list.
    pub fn is_changed(&self) -> bool {
        self.original != self.merged
    }

    /// Build the review diff for the list stored at `path`.
    ///
    /// Headers are labeled `current/<path>` and `sorted/<path>`; the labels are
    /// for display only.
    pub fn diff(&self, path: &Path) -> UnifiedDiff<'_> {
        UnifiedDiff::new(
            &self.original,
            &self.merged,
            Path::new("current").join(path).display().to_string(),
            Path::new("sorted").join(path).display().to_string(),
        )
    }
}

/// Merge `additions` into `existing`.
///
/// Additions are taken first, in the order given, then each existing line.
/// An entry is skipped when a byte-identical one was already taken. The
/// result is stable-sorted by its lowercase form, so entries that differ
/// only in case keep the order in which they were first seen.
pub fn merge(existing: &[String], additions: &[String]) -> MergeOutcome {
    let mut seen: HashSet<&str> = HashSet::with_capacity(existing.len() + additions.len());
    let mut merged: Vec<String> = Vec::with_capacity(existing.len() + additions.len());

    for line in additions.iter().chain(existing) {
        if seen.insert(line.as_str()) {
            merged.push(line.clone());
        }
    }

    merged.sort_by_cached_key(|line| line.to_lowercase());

    MergeOutcome {
        original: existing.to_vec(),
        merged,
    }
}

/// Normalize a word given on the command line into file-line form.
pub fn newline_terminated(word: &str) -> String {
    format!("{word}\n")
}
