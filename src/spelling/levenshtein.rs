//! Levenshtein distance for spelling suggestions.

use std::cmp::min;

/// Edit distance between `s1` and `s2` if it is at most `threshold`.
///
/// Counts single-character insertions, deletions and substitutions. Stops
/// early once every cell of a row exceeds the threshold.
fn distance_within(s1: &[char], s2: &[char], threshold: usize) -> Option<usize> {
    let len1 = s1.len();
    let len2 = s2.len();

    // Early termination if length difference exceeds threshold
    if len1.abs_diff(len2) > threshold {
        return None;
    }
    if len1 == 0 {
        return Some(len2);
    }
    if len2 == 0 {
        return Some(len1);
    }

    // Use only two rows for space optimization
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = usize::from(s1[i - 1] != s2[j - 1]);

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        // Every later row is at least this row's minimum
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= threshold).then_some(distance)
}

/// Measures many candidates against one misspelled word.
pub struct LevenshteinMatcher {
    query_chars: Vec<char>,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: &str) -> Self {
        LevenshteinMatcher {
            query_chars: query.chars().collect(),
        }
    }

    /// Calculate distance with threshold for early termination.
    pub fn distance_threshold(&self, candidate: &str, threshold: usize) -> Option<usize> {
        let candidate_len = candidate.chars().count();
        if self.query_chars.len().abs_diff(candidate_len) > threshold {
            return None;
        }

        let candidate_chars: Vec<char> = candidate.chars().collect();
        distance_within(&self.query_chars, &candidate_chars, threshold)
    }
}
