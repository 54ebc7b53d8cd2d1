//! # docspell
//!
//! Word-list maintenance and spell-check filtering for project documentation.
//!
//! ## Features
//!
//! - Case-insensitive sorting and de-duplication of word lists
//! - Unified diffs of every change, with optional write-back
//! - Classifiers that suppress acronyms, options, package names, paths,
//!   crypto addresses and the current release version
//! - Release version lookup from a version file or `git describe`
//! - A spell checker that combines all of the above

pub mod analysis;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod release;
pub mod spelling;
pub mod wordlist;

pub mod prelude {
    pub use crate::classify::{Classifier, ClassifierBank};
    pub use crate::error::{DocspellError, Result};
    pub use crate::release::{ReleaseResolver, ReleaseVersion};
    pub use crate::spelling::{SpellChecker, SpellingError};
    pub use crate::wordlist::{MergeOutcome, WordList, merge};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
