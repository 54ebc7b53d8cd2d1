//! Configuration for the spell-check pass.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classify::CLASSIFIER_NAMES;
use crate::error::{DocspellError, Result};
use crate::release::DEFAULT_VERSION_FILE;

/// Default word list, relative to the working directory.
pub const DEFAULT_WORD_LIST: &str = "words.txt";

/// System dictionary used when none is configured.
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Settings for `docspell check`.
///
/// Every field has a default, so a configuration file only needs to list the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellConfig {
    /// Project word lists; their entries are never reported.
    pub word_lists: Vec<PathBuf>,
    /// Dictionary files, one word per line.
    pub dictionaries: Vec<PathBuf>,
    /// Project root, used to find the version file and run git.
    pub root: PathBuf,
    /// Version file, relative to `root`.
    pub version_file: PathBuf,
    /// Characters of context shown on each side of an error.
    pub context_width: usize,
    /// Suggestions shown per error (0 disables suggestions).
    pub max_suggestions: usize,
    /// Largest edit distance a suggestion may have.
    pub max_distance: usize,
    /// Classifiers to enable. `None` enables all of them.
    pub classifiers: Option<Vec<String>>,
}

impl Default for SpellConfig {
    fn default() -> Self {
        SpellConfig {
            word_lists: vec![PathBuf::from(DEFAULT_WORD_LIST)],
            dictionaries: vec![PathBuf::from(DEFAULT_DICTIONARY)],
            root: PathBuf::from("."),
            version_file: PathBuf::from(DEFAULT_VERSION_FILE),
            context_width: 30,
            max_suggestions: 0,
            max_distance: 2,
            classifiers: None,
        }
    }
}

impl SpellConfig {
    /// Load a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DocspellError::file(path, e))?;
        let config: SpellConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured classifier names exist.
    pub fn validate(&self) -> Result<()> {
        if let Some(names) = &self.classifiers {
            for name in names {
                if !CLASSIFIER_NAMES.contains(&name.as_str()) {
                    return Err(DocspellError::config(format!(
                        "Unknown classifier '{name}' (expected one of: {})",
                        CLASSIFIER_NAMES.join(", ")
                    )));
                }
            }
        }
        Ok(())
    }
}
