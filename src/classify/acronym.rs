//! Acronym classifier.
//!
//! Accepts tokens made only of uppercase letters, with an optional plural
//! `s`: `API`, `APIs`, `DMABUF`.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::classify::{Classifier, compile};
use crate::error::Result;

/// Uppercase letters, optionally followed by one lowercase `s`.
pub const ACRONYM_PATTERN: &str = r"^[A-Z]+s?$";

static ACRONYM_REGEX: LazyLock<Arc<Regex>> =
    LazyLock::new(|| Arc::new(compile(ACRONYM_PATTERN).expect("acronym pattern is valid")));

/// Accepts all-caps acronyms and their plurals.
#[derive(Clone, Debug)]
pub struct AcronymClassifier {
    pattern: Arc<Regex>,
}

impl AcronymClassifier {
    /// Create an acronym classifier with the default pattern.
    pub fn new() -> Self {
        AcronymClassifier {
            pattern: Arc::clone(&ACRONYM_REGEX),
        }
    }

    /// Create an acronym classifier with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(AcronymClassifier {
            pattern: Arc::new(compile(pattern)?),
        })
    }

    /// Get the regex pattern used by this classifier.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for AcronymClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for AcronymClassifier {
    fn accepts(&self, token: &str) -> bool {
        self.pattern.is_match(token)
    }

    fn name(&self) -> &'static str {
        "acronym"
    }
}
