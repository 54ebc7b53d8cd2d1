//! Release version classifier.

use crate::classify::Classifier;
use crate::release::ReleaseVersion;

/// Accepts the project's own release string, e.g. `B7-rc1` or
/// `B6-360-g1a2b3c4d5e`.
#[derive(Clone, Debug)]
pub struct VersionClassifier {
    release: String,
}

impl VersionClassifier {
    /// Create a classifier accepting exactly the given release.
    pub fn new(release: &ReleaseVersion) -> Self {
        VersionClassifier {
            release: release.as_str().to_string(),
        }
    }

    /// The release string this classifier accepts.
    pub fn release(&self) -> &str {
        &self.release
    }
}

impl Classifier for VersionClassifier {
    fn accepts(&self, token: &str) -> bool {
        token == self.release
    }

    fn name(&self) -> &'static str {
        "version"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::VersionSource;

    #[test]
    fn test_exact_match_only() {
        let release = ReleaseVersion::new("1.2.3", VersionSource::File);
        let classifier = VersionClassifier::new(&release);

        assert!(classifier.accepts("1.2.3"));
        assert!(!classifier.accepts("1.2.4"));
        assert!(!classifier.accepts("1.2.3-rc1"));
        assert!(!classifier.accepts(" 1.2.3"));
    }

    #[test]
    fn test_unknown_release() {
        let classifier = VersionClassifier::new(&ReleaseVersion::unknown());

        assert_eq!(classifier.release(), "(unknown version)");
        assert!(!classifier.accepts("unknown"));
    }
}
