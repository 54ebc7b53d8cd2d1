//! Release version resolution.
//!
//! The release string is looked up once at startup and handed to whatever
//! needs it. Resolution tries, in order:
//!
//! 1. the trimmed contents of a version file under the project root,
//! 2. the trimmed output of `git describe --always --abbrev=10 --dirty=+ --tags`,
//! 3. the sentinel [`UNKNOWN_VERSION`].
//!
//! The first step that succeeds wins. Failures are never reported to the
//! caller; they only move resolution on to the next step.

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Release string used when neither the version file nor git can supply one.
pub const UNKNOWN_VERSION: &str = "(unknown version)";

/// Default name of the version file, relative to the project root.
pub const DEFAULT_VERSION_FILE: &str = "VERSION";

/// Which resolution step produced a [`ReleaseVersion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionSource {
    /// Read from the version file.
    File,
    /// Produced by `git describe`.
    Vcs,
    /// Given explicitly on the command line.
    Override,
    /// Neither source was available.
    Unknown,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionSource::File => "version file",
            VersionSource::Vcs => "git describe",
            VersionSource::Override => "command line",
            VersionSource::Unknown => "fallback",
        };
        f.write_str(name)
    }
}

/// A resolved release string. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseVersion {
    version: String,
    source: VersionSource,
}

impl ReleaseVersion {
    /// Create a release version from a known string.
    pub fn new<S: Into<String>>(version: S, source: VersionSource) -> Self {
        ReleaseVersion {
            version: version.into(),
            source,
        }
    }

    /// The `(unknown version)` sentinel.
    pub fn unknown() -> Self {
        ReleaseVersion::new(UNKNOWN_VERSION, VersionSource::Unknown)
    }

    /// Resolve the release for the project rooted at `root` with the default
    /// version file and `git`.
    pub fn resolve<P: AsRef<Path>>(root: P) -> Self {
        ReleaseResolver::new(root.as_ref()).resolve()
    }

    /// The release string.
    pub fn as_str(&self) -> &str {
        &self.version
    }

    /// Where the release string came from.
    pub fn source(&self) -> VersionSource {
        self.source
    }

    /// Check if this is the unknown sentinel.
    pub fn is_unknown(&self) -> bool {
        self.source == VersionSource::Unknown
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version)
    }
}

/// Resolves a [`ReleaseVersion`] for one project root.
#[derive(Debug, Clone)]
pub struct ReleaseResolver {
    root: PathBuf,
    version_file: PathBuf,
    vcs_program: OsString,
}

impl ReleaseResolver {
    /// Create a resolver for the project rooted at `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        ReleaseResolver {
            root: root.into(),
            version_file: PathBuf::from(DEFAULT_VERSION_FILE),
            vcs_program: OsString::from("git"),
        }
    }

    /// Use a different version file. Relative paths are taken from the root.
    pub fn with_version_file<P: Into<PathBuf>>(mut self, version_file: P) -> Self {
        self.version_file = version_file.into();
        self
    }

    /// Use a different git executable.
    pub fn with_vcs_program<S: Into<OsString>>(mut self, program: S) -> Self {
        self.vcs_program = program.into();
        self
    }

    /// Full path of the version file.
    pub fn version_file_path(&self) -> PathBuf {
        self.root.join(&self.version_file)
    }

    /// Run the resolution steps in order; the first that succeeds wins.
    pub fn resolve(&self) -> ReleaseVersion {
        let release = self
            .read_version_file()
            .or_else(|| self.describe())
            .unwrap_or_else(ReleaseVersion::unknown);
        info!("Release version: {release} (from {})", release.source());
        release
    }

    fn read_version_file(&self) -> Option<ReleaseVersion> {
        let path = self.version_file_path();
        match fs::read_to_string(&path) {
            Ok(content) => non_empty(&content, VersionSource::File),
            Err(e) => {
                debug!("Cannot read {}: {e}", path.display());
                None
            }
        }
    }

    fn describe(&self) -> Option<ReleaseVersion> {
        let output = Command::new(&self.vcs_program)
            .args(["describe", "--always", "--abbrev=10", "--dirty=+", "--tags"])
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match output {
            Ok(output) if output.status.success() => {
                non_empty(&String::from_utf8_lossy(&output.stdout), VersionSource::Vcs)
            }
            Ok(output) => {
                debug!("git describe exited with {}", output.status);
                None
            }
            Err(e) => {
                debug!("Cannot run {:?}: {e}", self.vcs_program);
                None
            }
        }
    }
}

fn non_empty(raw: &str, source: VersionSource) -> Option<ReleaseVersion> {
    let version = raw.trim();
    if version.is_empty() {
        None
    } else {
        Some(ReleaseVersion::new(version, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_version_file_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("VERSION"), "B7-rc1\n").unwrap();

        let release = ReleaseResolver::new(dir.path()).resolve();
        assert_eq!(release.as_str(), "B7-rc1");
        assert_eq!(release.source(), VersionSource::File);
    }

    #[test]
    fn test_custom_version_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("release.txt"), "  1.2.3  ").unwrap();

        let release = ReleaseResolver::new(dir.path())
            .with_version_file("release.txt")
            .resolve();
        assert_eq!(release.as_str(), "1.2.3");
    }

    #[test]
    fn test_falls_back_to_unknown() {
        let dir = TempDir::new().unwrap();

        let release = ReleaseResolver::new(dir.path())
            .with_vcs_program("docspell-no-such-vcs")
            .resolve();
        assert!(release.is_unknown());
        assert_eq!(release.to_string(), UNKNOWN_VERSION);
    }

    #[test]
    fn test_empty_version_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("VERSION"), "\n").unwrap();

        let release = ReleaseResolver::new(dir.path())
            .with_vcs_program("docspell-no-such-vcs")
            .resolve();
        assert!(release.is_unknown());
    }

    #[test]
    fn test_source_display() {
        assert_eq!(VersionSource::File.to_string(), "version file");
        assert_eq!(VersionSource::Vcs.to_string(), "git describe");
        assert_eq!(VersionSource::Override.to_string(), "command line");
        assert_eq!(VersionSource::Unknown.to_string(), "fallback");
    }
}
