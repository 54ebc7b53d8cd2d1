//! Package classifier.
//!
//! Accepts distro package names: `-dev` and `-bin` packages, `fonts-*-ttf`
//! font packages, and `virt-manager`.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::classify::{Classifier, compile};
use crate::error::Result;

/// Package naming conventions.
pub const PACKAGE_PATTERN: &str = r"^[\w-]+-(?:dev|bin)$|^fonts-[\w-]+-ttf$|^virt-manager$";

static PACKAGE_REGEX: LazyLock<Arc<Regex>> =
    LazyLock::new(|| Arc::new(compile(PACKAGE_PATTERN).expect("package pattern is valid")));

/// Accepts distro package names.
#[derive(Clone, Debug)]
pub struct PackageClassifier {
    pattern: Arc<Regex>,
}

impl PackageClassifier {
    /// Create a package classifier with the default pattern.
    pub fn new() -> Self {
        PackageClassifier {
            pattern: Arc::clone(&PACKAGE_REGEX),
        }
    }

    /// Create a package classifier with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(PackageClassifier {
            pattern: Arc::new(compile(pattern)?),
        })
    }

    /// Get the regex pattern used by this classifier.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for PackageClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for PackageClassifier {
    fn accepts(&self, token: &str) -> bool {
        self.pattern.is_match(token)
    }

    fn name(&self) -> &'static str {
        "package"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_names() {
        let classifier = PackageClassifier::new();

        assert!(classifier.accepts("libfoo-dev"));
        assert!(classifier.accepts("libspice-protocol-dev"));
        assert!(classifier.accepts("binutils-dev"));
        assert!(classifier.accepts("nettle-bin"));
        assert!(classifier.accepts("fonts-dejavu-core-ttf"));
        assert!(classifier.accepts("virt-manager"));
    }

    #[test]
    fn test_not_packages() {
        let classifier = PackageClassifier::new();

        assert!(!classifier.accepts("libfoo"));
        assert!(!classifier.accepts("-dev"));
        assert!(!classifier.accepts("libfoo-devel"));
        assert!(!classifier.accepts("fonts-ttf"));
        assert!(!classifier.accepts("virt-manager2"));
    }
}
