//! "Did you mean" suggestions for reported errors.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::SpellingDictionary;
use crate::spelling::levenshtein::LevenshteinMatcher;

/// A spelling suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the original word.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, distance: usize) -> Self {
        Suggestion { word, distance }
    }
}

impl Ord for Suggestion {
    // Closest first, then alphabetical
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds dictionary words close to a misspelled word.
pub struct SuggestionEngine<'a> {
    dictionary: &'a SpellingDictionary,
    max_distance: usize,
    max_suggestions: usize,
}

impl<'a> SuggestionEngine<'a> {
    /// Create a suggestion engine over the given dictionary.
    pub fn new(dictionary: &'a SpellingDictionary, max_distance: usize, max_suggestions: usize) -> Self {
        SuggestionEngine {
            dictionary,
            max_distance,
            max_suggestions,
        }
    }

    /// Get up to `max_suggestions` words within `max_distance` edits.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        if self.max_suggestions == 0 {
            return Vec::new();
        }

        let matcher = LevenshteinMatcher::new(&word.to_lowercase());
        let mut suggestions: Vec<Suggestion> = self
            .dictionary
            .iter()
            .filter_map(|candidate| {
                let distance = matcher.distance_threshold(candidate, self.max_distance)?;
                (distance > 0).then(|| Suggestion::new(candidate.to_string(), distance))
            })
            .collect();

        suggestions.sort();
        suggestions.truncate(self.max_suggestions);
        suggestions
    }
}
