//! Option classifier.
//!
//! Accepts tokens shaped like configuration options or identifiers rather
//! than prose: namespaced options such as `win:fullScreen` and camelCase
//! identifiers such as `fullScreen`, `SpiceAudio` or `Api`.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::classify::{Classifier, compile};
use crate::error::Result;

/// A lowercase namespace, a colon and an identifier.
pub const NAMESPACED_OPTION_PATTERN: &str = r"^[a-z]+:\w+$";

/// Mixed-case identifiers: the first letter may be either case, but the
/// token must switch case at least once after it. All-caps tokens never
/// match; those are acronyms.
pub const CAMEL_CASE_PATTERN: &str = r"^(?:[a-z]\w*[A-Z]|[A-Z]\w*[a-z])\w*$";

static OPTION_REGEX: LazyLock<Arc<Regex>> = LazyLock::new(|| {
    let pattern = format!("{NAMESPACED_OPTION_PATTERN}|{CAMEL_CASE_PATTERN}");
    Arc::new(compile(&pattern).expect("option pattern is valid"))
});

/// Accepts namespaced options and camelCase identifiers.
#[derive(Clone, Debug)]
pub struct OptionClassifier {
    pattern: Arc<Regex>,
}

impl OptionClassifier {
    /// Create an option classifier with the default pattern.
    pub fn new() -> Self {
        OptionClassifier {
            pattern: Arc::clone(&OPTION_REGEX),
        }
    }

    /// Create an option classifier with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(OptionClassifier {
            pattern: Arc::new(compile(pattern)?),
        })
    }

    /// Get the regex pattern used by this classifier.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for OptionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for OptionClassifier {
    fn accepts(&self, token: &str) -> bool {
        self.pattern.is_match(token)
    }

    fn name(&self) -> &'static str {
        "option"
    }
}
