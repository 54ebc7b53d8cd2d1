//! Dictionary management for spell checking.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{DocspellError, Result};

/// A set of known words.
///
/// Words are normalized to lowercase, so lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct SpellingDictionary {
    words: HashSet<String>,
}

impl SpellingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        SpellingDictionary {
            words: HashSet::new(),
        }
    }

    /// Add a word. Returns `false` if it was already known.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    /// Add every word of an iterator.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Iterate over all words, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Load words from a text file with one word per line.
    ///
    /// Blank lines are skipped and surrounding whitespace is trimmed. Returns
    /// the number of non-blank lines read.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DocspellError::file(path, e))?;
        let reader = BufReader::new(file);

        let mut loaded = 0;
        for line in reader.lines() {
            let line = line.map_err(|e| DocspellError::file(path, e))?;
            let word = line.trim();
            if !word.is_empty() {
                self.insert(word);
                loaded += 1;
            }
        }

        Ok(loaded)
    }
}

/// A small built-in word list for documentation prose.
///
/// Only meant as a last resort when no system dictionary is installed.
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    /// Create a dictionary from the built-in word list.
    pub fn english() -> SpellingDictionary {
        let mut dict = SpellingDictionary::new();
        dict.extend(DOCUMENTATION_WORDS);
        dict
    }
}

const DOCUMENTATION_WORDS: &[&str] = &[
    "a", "able", "about", "above", "access", "add", "added", "after", "again", "all",
    "allow", "allows", "already", "also", "an", "and", "any", "application", "are",
    "argument", "as", "at", "available", "be", "because", "been", "before", "below",
    "between", "both", "build", "but", "by", "can", "cannot", "case", "change",
    "check", "client", "command", "compile", "configuration", "configure", "contains",
    "copy", "create", "current", "data", "default", "described", "description",
    "device", "directory", "disable", "display", "do", "documentation", "does",
    "download", "each", "either", "enable", "enabled", "ensure", "entry", "error",
    "example", "except", "file", "files", "first", "following", "for", "found",
    "from", "full", "given", "guest", "guide", "has", "have", "here", "host", "how",
    "if", "in", "information", "input", "install", "installed", "instead", "into",
    "is", "it", "its", "kernel", "later", "line", "list", "load", "machine",
    "may", "memory", "mode", "module", "more", "most", "must", "name", "need",
    "needs", "new", "next", "no", "not", "note", "now", "of", "on", "once", "only",
    "open", "option", "options", "or", "other", "output", "package", "packages",
    "page", "path", "please", "provide", "provided", "read", "recommended",
    "release", "required", "requires", "run", "running", "screen", "section",
    "see", "server", "set", "setting", "settings", "shared", "should", "so",
    "some", "source", "specify", "start", "step", "such", "support", "supported",
    "supports", "system", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "those", "through", "to", "under", "until", "up",
    "update", "usage", "use", "used", "user", "using", "value", "version", "via",
    "was", "we", "when", "where", "whether", "which", "while", "will", "window",
    "with", "within", "without", "would", "write", "you", "your",
];
