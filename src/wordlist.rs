//! Word-list maintenance.
//!
//! A word list is a plain UTF-8 file with one word per line. Entries are kept
//! unique and ordered case-insensitively so the file stays reviewable and
//! conflicts between contributors stay small. This module reads and writes
//! those files, merges new words into them, and renders the change as a
//! unified diff for review.

pub mod diff;
pub mod list;
pub mod merge;

pub use diff::{DiffOp, UnifiedDiff};
pub use list::WordList;
pub use merge::{MergeOutcome, merge, newline_terminated};
