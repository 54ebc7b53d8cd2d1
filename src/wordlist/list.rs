//! On-disk word-list files.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{DocspellError, Result};

/// The raw lines of a word-list file.
///
/// Lines keep their `\n` terminator exactly as read, so that writing the list
/// back reproduces the file byte for byte. A final line without a terminator
/// is preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordList {
    path: PathBuf,
    lines: Vec<String>,
}

impl WordList {
    /// Create an in-memory word list associated with `path`.
    pub fn new<P: Into<PathBuf>>(path: P, lines: Vec<String>) -> Self {
        WordList {
            path: path.into(),
            lines,
        }
    }

    /// Load a word list from a file, one entry per line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| DocspellError::file(path, e))?;
        let lines = split_lines(&content);
        debug!("Read {} lines from {}", lines.len(), path.display());

        Ok(WordList::new(path, lines))
    }

    /// Write `lines` to the list's file, replacing its previous content.
    ///
    /// The file is truncated first; a merged list may be shorter than the
    /// original once duplicates are dropped.
    pub fn save(&self) -> Result<()> {
        let wrap = |e| DocspellError::file(&self.path, e);
        let mut file = File::create(&self.path).map_err(wrap)?;
        for line in &self.lines {
            file.write_all(line.as_bytes()).map_err(wrap)?;
        }
        file.flush().map_err(wrap)?;
        debug!("Wrote {} lines to {}", self.lines.len(), self.path.display());

        Ok(())
    }

    /// Read just the words from a file: trimmed, with blank lines skipped.
    ///
    /// This is the view a spell checker wants; it does not preserve the file
    /// layout.
    pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DocspellError::file(path, e))?;
        let reader = BufReader::new(file);

        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| DocspellError::file(path, e))?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }

        Ok(words)
    }

    /// The file this list was read from or will be written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The lines of the list, terminators included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replace the lines of the list.
    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    /// Consume the list and return its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Number of lines in the list.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the list has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check that no two lines are byte-identical.
    pub fn is_unique(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.lines.len());
        self.lines.iter().all(|line| seen.insert(line.as_str()))
    }

    /// Check that the lines are in case-insensitive order.
    pub fn is_sorted(&self) -> bool {
        self.lines
            .windows(2)
            .all(|pair| pair[0].to_lowercase() <= pair[1].to_lowercase())
    }
}

/// Split file content into lines, keeping each `\n` terminator.
fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_split_lines_keeps_terminators() {
        assert_eq!(split_lines("a\nb\n"), vec!["a\n", "b\n"]);
        assert_eq!(split_lines("a\nb"), vec!["a\n", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_load_and_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "zebra\nApple\n").unwrap();

        let mut list = WordList::load(&path).unwrap();
        assert_eq!(list.lines(), &["zebra\n", "Apple\n"]);
        assert!(!list.is_sorted());

        list.set_lines(vec!["Apple\n".to_string()]);
        list.save().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Apple\n");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = WordList::load(&path).unwrap_err();
        match err {
            DocspellError::File { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected File error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_words_trims_and_skips_blank() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "foo\n\n  bar \nbaz").unwrap();

        let words = WordList::read_words(&path).unwrap();
        assert_eq!(words, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_uniqueness_is_exact() {
        let list = WordList::new("w", vec!["a\n".into(), "A\n".into(), "a \n".into()]);
        assert!(list.is_unique());

        let list = WordList::new("w", vec!["a\n".into(), "a\n".into()]);
        assert!(!list.is_unique());
    }
}
