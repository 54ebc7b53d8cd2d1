//! Path classifier.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::classify::{Classifier, compile};
use crate::error::Result;

/// Device paths, or anything ending in a dotted extension.
pub const PATH_PATTERN: &str = r"^/dev/|\.\w+$";

static PATH_REGEX: LazyLock<Arc<Regex>> =
    LazyLock::new(|| Arc::new(compile(PATH_PATTERN).expect("path pattern is valid")));

/// Accepts `/dev/...` paths and file names with an extension.
#[derive(Clone, Debug)]
pub struct PathClassifier {
    pattern: Arc<Regex>,
}

impl PathClassifier {
    /// Create a path classifier with the default pattern.
    pub fn new() -> Self {
        PathClassifier {
            pattern: Arc::clone(&PATH_REGEX),
        }
    }

    /// Create a path classifier with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(PathClassifier {
            pattern: Arc::new(compile(pattern)?),
        })
    }

    /// Get the regex pattern used by this classifier.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for PathClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for PathClassifier {
    fn accepts(&self, token: &str) -> bool {
        self.pattern.is_match(token)
    }

    fn name(&self) -> &'static str {
        "path"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_paths() {
        let classifier = PathClassifier::new();

        assert!(classifier.accepts("/dev/shm"));
        assert!(classifier.accepts("/dev/kvmfr0"));
        assert!(!classifier.accepts("/devices"));
        assert!(!classifier.accepts("dev/shm"));
    }

    #[test]
    fn test_extensions() {
        let classifier = PathClassifier::new();

        assert!(classifier.accepts("looking-glass-client.ini"));
        assert!(classifier.accepts("/etc/tmpfiles.d/10-looking-glass.conf"));
        assert!(classifier.accepts("kvmfr.ko"));
        assert!(!classifier.accepts("client"));
        assert!(!classifier.accepts("trailing."));
    }
}
