//! Classifiers for tokens a spell checker should never flag.
//!
//! Documentation is full of words no dictionary knows: acronyms, command-line
//! options, distro package names, file paths, donation addresses and the
//! project's own release string. Each [`Classifier`] recognizes one such
//! category. Classifiers are independent of each other; a token is suppressed
//! as soon as any registered classifier accepts it, so the order in which they
//! are registered never changes the outcome.
//!
//! # Examples
//!
//! ```
//! use docspell::classify::{Classifier, ClassifierBank, acronym::AcronymClassifier};
//! use docspell::release::ReleaseVersion;
//!
//! assert!(AcronymClassifier::new().accepts("APIs"));
//!
//! let bank = ClassifierBank::standard(&ReleaseVersion::unknown());
//! assert!(bank.is_suppressed("libfoo-dev"));
//! assert!(!bank.is_suppressed("libfoo"));
//! ```

use regex::Regex;

use crate::error::{DocspellError, Result};

/// A named predicate over a single token.
pub trait Classifier: Send + Sync {
    /// Check whether the token belongs to this classifier's category.
    fn accepts(&self, token: &str) -> bool;

    /// Get the name of this classifier (for registry lookup and reports).
    fn name(&self) -> &'static str;
}

pub mod acronym;
pub mod bank;
pub mod crypto;
pub mod option;
pub mod package;
pub mod path;
pub mod version;

pub use acronym::AcronymClassifier;
pub use bank::{CLASSIFIER_NAMES, ClassifierBank};
pub use crypto::CryptoAddressClassifier;
pub use option::OptionClassifier;
pub use package::PackageClassifier;
pub use path::PathClassifier;
pub use version::VersionClassifier;

/// Compile a classifier pattern.
pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| DocspellError::pattern(format!("Invalid pattern {pattern:?}: {e}")))
}
