//! Spell checker that consults dictionaries, project word lists and the
//! classifier bank.

use std::collections::HashSet;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::classify::ClassifierBank;
use crate::config::{DEFAULT_DICTIONARY, DEFAULT_WORD_LIST, SpellConfig};
use crate::error::Result;
use crate::release::ReleaseVersion;
use crate::spelling::dictionary::{BuiltinDictionary, SpellingDictionary};
use crate::spelling::suggest::{Suggestion, SuggestionEngine};
use crate::wordlist::WordList;

/// A word that is neither known nor suppressed by a classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingError {
    /// The offending word.
    pub word: String,
    /// Byte offset of the word in the checked text.
    pub offset: usize,
    /// Text before the word, newlines replaced by spaces.
    pub leading_context: String,
    /// Text after the word, newlines replaced by spaces.
    pub trailing_context: String,
    /// Closest dictionary words, best first.
    pub suggestions: Vec<Suggestion>,
}

impl SpellingError {
    /// The word together with its surrounding context.
    pub fn context(&self) -> String {
        format!(
            "{}{}{}",
            self.leading_context, self.word, self.trailing_context
        )
    }
}

/// Checks text against a dictionary, filtering unknown words through the
/// project word list and a [`ClassifierBank`].
pub struct SpellChecker {
    dictionary: SpellingDictionary,
    personal: HashSet<String>,
    bank: ClassifierBank,
    tokenizer: Box<dyn Tokenizer>,
    context_width: usize,
    max_suggestions: usize,
    max_distance: usize,
}

impl SpellChecker {
    /// Create a checker with the default tokenizer and 30 characters of
    /// context.
    pub fn new(dictionary: SpellingDictionary, bank: ClassifierBank) -> Self {
        SpellChecker {
            dictionary,
            personal: HashSet::new(),
            bank,
            tokenizer: Box::new(RegexTokenizer::default()),
            context_width: 30,
            max_suggestions: 0,
            max_distance: 2,
        }
    }

    /// Build a checker from a configuration and an already resolved release.
    ///
    /// A missing system dictionary at the default location is not an error;
    /// the checker falls back to a small built-in word list and logs a
    /// warning. The same holds for the default project word list. Explicitly
    /// configured dictionaries and word lists must exist.
    pub fn from_config(config: &SpellConfig, release: &ReleaseVersion) -> Result<Self> {
        let bank = match &config.classifiers {
            Some(names) => ClassifierBank::with_only(names.as_slice(), release)?,
            None => ClassifierBank::standard(release),
        };

        let mut dictionary = SpellingDictionary::new();
        for path in &config.dictionaries {
            match dictionary.load_from_file(path) {
                Ok(count) => info!("Loaded {count} words from {}", path.display()),
                Err(e) if path == Path::new(DEFAULT_DICTIONARY) => {
                    warn!("System dictionary unavailable: {e}");
                }
                Err(e) => return Err(e),
            }
        }
        if dictionary.is_empty() {
            warn!("No dictionary words loaded; using the built-in English list");
            dictionary = BuiltinDictionary::english();
        }

        let mut checker = SpellChecker::new(dictionary, bank)
            .with_context_width(config.context_width)
            .with_suggestions(config.max_suggestions, config.max_distance);

        for path in &config.word_lists {
            match WordList::read_words(path) {
                Ok(words) => {
                    info!("Loaded {} project words from {}", words.len(), path.display());
                    checker.add_words(words);
                }
                Err(e) if path == Path::new(DEFAULT_WORD_LIST) => {
                    warn!("Project word list unavailable: {e}");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(checker)
    }

    /// Set how many characters of context are reported on each side.
    pub fn with_context_width(mut self, width: usize) -> Self {
        self.context_width = width;
        self
    }

    /// Enable suggestions for reported errors.
    pub fn with_suggestions(mut self, max_suggestions: usize, max_distance: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self.max_distance = max_distance;
        self
    }

    /// Use a different tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Accept a project word.
    ///
    /// Project words match exactly; an all-lowercase project word also
    /// matches its capitalized forms.
    pub fn add_word(&mut self, word: &str) {
        self.personal.insert(word.to_string());
    }

    /// Accept every word of an iterator.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref());
        }
    }

    /// The classifiers consulted for unknown words.
    pub fn classifiers(&self) -> &ClassifierBank {
        &self.bank
    }

    /// Check if a word is in the dictionary or the project word list.
    pub fn is_known(&self, word: &str) -> bool {
        self.personal.contains(word)
            || self.personal.contains(&word.to_lowercase())
            || self.dictionary.contains(word)
    }

    /// Check if a word should not be reported.
    ///
    /// Words without letters (numbers, version strings) are never reported.
    pub fn is_acceptable(&self, word: &str) -> bool {
        !word.chars().any(char::is_alphabetic)
            || self.is_known(word)
            || self.bank.is_suppressed(word)
    }

    /// Check a text and return every unacceptable word, in order.
    pub fn check(&self, text: &str) -> Result<Vec<SpellingError>> {
        let suggestions = SuggestionEngine::new(
            &self.dictionary,
            self.max_distance,
            self.max_suggestions,
        );

        let mut errors = Vec::new();
        for token in self.tokenizer.tokenize(text)? {
            if self.is_acceptable(&token.text) {
                continue;
            }
            debug!("Unknown word '{}' at {}", token.text, token.start_offset);

            errors.push(SpellingError {
                leading_context: leading_context(text, token.start_offset, self.context_width),
                trailing_context: trailing_context(text, token.end_offset, self.context_width),
                suggestions: suggestions.suggest(&token.text),
                offset: token.start_offset,
                word: token.text,
            });
        }

        Ok(errors)
    }
}

fn leading_context(text: &str, start: usize, width: usize) -> String {
    let mut context: Vec<char> = text[..start].chars().rev().take(width).collect();
    context.reverse();
    context.into_iter().map(flatten_newline).collect()
}

fn trailing_context(text: &str, end: usize, width: usize) -> String {
    text[end..].chars().take(width).map(flatten_newline).collect()
}

fn flatten_newline(c: char) -> char {
    if c == '\n' || c == '\r' { ' ' } else { c }
}
