//! Registry of classifiers.

use log::debug;

use crate::classify::{
    AcronymClassifier, Classifier, CryptoAddressClassifier, OptionClassifier, PackageClassifier,
    PathClassifier, VersionClassifier,
};
use crate::error::{DocspellError, Result};
use crate::release::ReleaseVersion;

/// Names of the built-in classifiers, in registration order.
pub const CLASSIFIER_NAMES: &[&str] = &[
    "acronym",
    "option",
    "package",
    "path",
    "crypto-address",
    "version",
];

/// A set of classifiers keyed by name.
///
/// A token is suppressed when any classifier in the bank accepts it. Names
/// are unique within a bank; registering a classifier under a name that is
/// already present replaces the old one.
#[derive(Default)]
pub struct ClassifierBank {
    classifiers: Vec<Box<dyn Classifier>>,
}

impl ClassifierBank {
    /// Create an empty bank. It suppresses nothing.
    pub fn new() -> Self {
        ClassifierBank {
            classifiers: Vec::new(),
        }
    }

    /// Create a bank holding every built-in classifier.
    pub fn standard(release: &ReleaseVersion) -> Self {
        let mut bank = ClassifierBank::new();
        for &name in CLASSIFIER_NAMES {
            if let Some(classifier) = builtin(name, release) {
                bank.register(classifier);
            }
        }
        bank
    }

    /// Create a bank holding only the named built-in classifiers.
    pub fn with_only<S: AsRef<str>>(names: &[S], release: &ReleaseVersion) -> Result<Self> {
        let mut bank = ClassifierBank::new();
        for name in names {
            let name = name.as_ref();
            let classifier = builtin(name, release).ok_or_else(|| {
                DocspellError::config(format!(
                    "Unknown classifier '{name}' (expected one of: {})",
                    CLASSIFIER_NAMES.join(", ")
                ))
            })?;
            bank.register(classifier);
        }
        Ok(bank)
    }

    /// Add a classifier, returning the one it replaced if the name was taken.
    pub fn register(&mut self, classifier: Box<dyn Classifier>) -> Option<Box<dyn Classifier>> {
        let replaced = self.remove(classifier.name());
        self.classifiers.push(classifier);
        replaced
    }

    /// Remove the classifier with the given name.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Classifier>> {
        let index = self.classifiers.iter().position(|c| c.name() == name)?;
        Some(self.classifiers.remove(index))
    }

    /// Get the classifier with the given name.
    pub fn get(&self, name: &str) -> Option<&dyn Classifier> {
        self.classifiers
            .iter()
            .find(|c| c.name() == name)
            .map(|c| &**c)
    }

    /// Names of the registered classifiers.
    pub fn names(&self) -> Vec<&'static str> {
        self.classifiers.iter().map(|c| c.name()).collect()
    }

    /// Names of every classifier accepting the token.
    pub fn matching(&self, token: &str) -> Vec<&'static str> {
        self.classifiers
            .iter()
            .filter(|c| c.accepts(token))
            .map(|c| c.name())
            .collect()
    }

    /// Check whether any classifier accepts the token.
    pub fn is_suppressed(&self, token: &str) -> bool {
        match self.classifiers.iter().find(|c| c.accepts(token)) {
            Some(classifier) => {
                debug!("'{token}' suppressed by {}", classifier.name());
                true
            }
            None => false,
        }
    }

    /// Number of registered classifiers.
    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    /// Check if the bank has no classifiers.
    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }
}

impl std::fmt::Debug for ClassifierBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierBank")
            .field("classifiers", &self.names())
            .finish()
    }
}

fn builtin(name: &str, release: &ReleaseVersion) -> Option<Box<dyn Classifier>> {
    let classifier: Box<dyn Classifier> = match name {
        "acronym" => Box::new(AcronymClassifier::new()),
        "option" => Box::new(OptionClassifier::new()),
        "package" => Box::new(PackageClassifier::new()),
        "path" => Box::new(PathClassifier::new()),
        "crypto-address" => Box::new(CryptoAddressClassifier::new()),
        "version" => Box::new(VersionClassifier::new(release)),
        _ => return None,
    };
    Some(classifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::VersionSource;

    struct Literal(&'static str);

    impl Classifier for Literal {
        fn accepts(&self, token: &str) -> bool {
            token == self.0
        }

        fn name(&self) -> &'static str {
            "literal"
        }
    }

    #[test]
    fn test_standard_bank() {
        let bank = ClassifierBank::standard(&ReleaseVersion::unknown());
        assert_eq!(bank.names(), CLASSIFIER_NAMES);
        assert_eq!(bank.len(), 6);
    }

    #[test]
    fn test_empty_bank_suppresses_nothing() {
        let bank = ClassifierBank::new();
        assert!(bank.is_empty());
        assert!(!bank.is_suppressed("API"));
    }

    #[test]
    fn test_matching_reports_every_classifier() {
        let release = ReleaseVersion::new("RC", VersionSource::File);
        let bank = ClassifierBank::standard(&release);

        assert_eq!(bank.matching("RC"), vec!["acronym", "version"]);
        assert_eq!(bank.matching("APIs"), vec!["acronym", "option"]);
        assert!(bank.matching("libfoo").is_empty());
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut bank = ClassifierBank::new();
        assert!(bank.register(Box::new(Literal("a"))).is_none());
        assert!(bank.register(Box::new(Literal("b"))).is_some());

        assert_eq!(bank.len(), 1);
        assert!(bank.is_suppressed("b"));
        assert!(!bank.is_suppressed("a"));
    }

    #[test]
    fn test_remove() {
        let mut bank = ClassifierBank::standard(&ReleaseVersion::unknown());
        assert!(bank.is_suppressed("libfoo-dev"));

        let removed = bank.remove("package").unwrap();
        assert_eq!(removed.name(), "package");
        assert!(!bank.is_suppressed("libfoo-dev"));
        assert!(bank.remove("package").is_none());
        assert!(bank.get("package").is_none());
    }

    #[test]
    fn test_with_only() {
        let bank = ClassifierBank::with_only(&["path", "acronym"], &ReleaseVersion::unknown())
            .unwrap();
        assert_eq!(bank.names(), vec!["path", "acronym"]);
        assert!(!bank.is_suppressed("libfoo-dev"));

        let err = ClassifierBank::with_only(&["spelling"], &ReleaseVersion::unknown()).unwrap_err();
        assert!(err.to_string().contains("Unknown classifier 'spelling'"));
    }
}
