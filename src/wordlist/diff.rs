//! Line diffs between two versions of a word list.
//!
//! The edit script keeps a longest common subsequence of lines. After the
//! common prefix and suffix are stripped, the subsequence is found as the
//! longest increasing sequence of matching positions, so time and memory stay
//! close to linear for lists of distinct lines. Output follows the unified
//! diff format with three lines of context.

use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::io::Write;
use std::ops::Range;

use crate::error::Result;

/// Number of unchanged lines shown around each change.
pub const DEFAULT_CONTEXT: usize = 3;

/// Kind of a [`DiffOp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTag {
    Equal,
    Delete,
    Insert,
    Replace,
}

/// A contiguous edit: `old` lines become `new` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOp {
    pub tag: DiffTag,
    pub old: Range<usize>,
    pub new: Range<usize>,
}

impl DiffOp {
    fn new(tag: DiffTag, old: Range<usize>, new: Range<usize>) -> Self {
        DiffOp { tag, old, new }
    }
}

/// Compute the edit script turning `old` into `new`.
///
/// Adjacent operations never share a tag, and every line of both inputs is
/// covered by exactly one operation.
pub fn diff_lines<T: Eq + Hash>(old: &[T], new: &[T]) -> Vec<DiffOp> {
    let prefix = old.iter().zip(new).take_while(|(a, b)| a == b).count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let a = &old[prefix..old.len() - suffix];
    let b = &new[prefix..new.len() - suffix];

    let mut builder = OpBuilder::default();
    builder.push(DiffTag::Equal, prefix, prefix);

    let (mut i, mut j) = (0, 0);
    for (old_index, new_index) in common_subsequence(a, b) {
        builder.push(DiffTag::Delete, old_index - i, 0);
        builder.push(DiffTag::Insert, 0, new_index - j);
        builder.push(DiffTag::Equal, 1, 1);
        i = old_index + 1;
        j = new_index + 1;
    }
    builder.push(DiffTag::Delete, a.len() - i, 0);
    builder.push(DiffTag::Insert, 0, b.len() - j);
    builder.push(DiffTag::Equal, suffix, suffix);

    builder.finish()
}

/// Longest common subsequence of `a` and `b` as `(a, b)` index pairs.
///
/// Every matching pair is visited with `b` positions descending per line of
/// `a`; the longest chain of strictly increasing `b` positions is the LCS.
/// Memory grows with the number of matching pairs, which for a de-duplicated
/// word list is at most the length of `a`.
fn common_subsequence<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<(usize, usize)> {
    let mut positions: HashMap<&T, Vec<usize>> = HashMap::new();
    for (j, line) in b.iter().enumerate() {
        positions.entry(line).or_default().push(j);
    }

    // (a index, b index, previous link in the chain)
    let mut links: Vec<(usize, usize, Option<usize>)> = Vec::new();
    // tails[k] ends the chain of length k + 1 with the smallest b index
    let mut tails: Vec<usize> = Vec::new();

    for (i, line) in a.iter().enumerate() {
        let Some(matches) = positions.get(line) else {
            continue;
        };
        for &j in matches.iter().rev() {
            let len = tails.partition_point(|&t| links[t].1 < j);
            let previous = len.checked_sub(1).map(|k| tails[k]);
            links.push((i, j, previous));

            let link = links.len() - 1;
            if len == tails.len() {
                tails.push(link);
            } else {
                tails[len] = link;
            }
        }
    }

    let mut chain = Vec::with_capacity(tails.len());
    let mut next = tails.last().copied();
    while let Some(link) = next {
        let (i, j, previous) = links[link];
        chain.push((i, j));
        next = previous;
    }
    chain.reverse();
    chain
}

/// Coalesces single-line steps into ranged operations.
#[derive(Default)]
struct OpBuilder {
    ops: Vec<DiffOp>,
    old_pos: usize,
    new_pos: usize,
}

impl OpBuilder {
    fn push(&mut self, tag: DiffTag, old_len: usize, new_len: usize) {
        if old_len == 0 && new_len == 0 {
            return;
        }
        let old_end = self.old_pos + old_len;
        let new_end = self.new_pos + new_len;

        match self.ops.last_mut() {
            Some(last) if last.tag == tag => {
                last.old.end = old_end;
                last.new.end = new_end;
            }
            Some(last) if tag != DiffTag::Equal && last.tag != DiffTag::Equal => {
                last.tag = DiffTag::Replace;
                last.old.end = old_end;
                last.new.end = new_end;
            }
            _ => self.ops.push(DiffOp::new(
                tag,
                self.old_pos..old_end,
                self.new_pos..new_end,
            )),
        }

        self.old_pos = old_end;
        self.new_pos = new_end;
    }

    fn finish(self) -> Vec<DiffOp> {
        self.ops
    }
}

/// Split an edit script into hunks with `context` unchanged lines around
/// every change. Changes closer than `2 * context` lines share a hunk.
pub fn group_hunks(ops: &[DiffOp], context: usize) -> Vec<Vec<DiffOp>> {
    if ops.iter().all(|op| op.tag == DiffTag::Equal) {
        return Vec::new();
    }

    let mut ops = ops.to_vec();
    if let Some(first) = ops.first_mut()
        && first.tag == DiffTag::Equal
    {
        first.old.start = first.old.start.max(first.old.end.saturating_sub(context));
        first.new.start = first.new.start.max(first.new.end.saturating_sub(context));
    }
    if let Some(last) = ops.last_mut()
        && last.tag == DiffTag::Equal
    {
        last.old.end = last.old.end.min(last.old.start + context);
        last.new.end = last.new.end.min(last.new.start + context);
    }

    let mut hunks = Vec::new();
    let mut hunk = Vec::new();
    for op in ops {
        if op.tag == DiffTag::Equal && op.old.len() > 2 * context {
            hunk.push(DiffOp::new(
                DiffTag::Equal,
                op.old.start..op.old.start + context,
                op.new.start..op.new.start + context,
            ));
            hunks.push(std::mem::take(&mut hunk));
            hunk.push(DiffOp::new(
                DiffTag::Equal,
                op.old.end - context..op.old.end,
                op.new.end - context..op.new.end,
            ));
        } else {
            hunk.push(op);
        }
    }
    if !(hunk.is_empty() || (hunk.len() == 1 && hunk[0].tag == DiffTag::Equal)) {
        hunks.push(hunk);
    }

    hunks
}

/// Format a hunk range: `start,len`, with the short forms `start` for a single
/// line and `start-1,0` for an empty range.
fn format_range(range: &Range<usize>) -> String {
    match range.len() {
        0 => format!("{},0", range.start),
        1 => format!("{}", range.start + 1),
        len => format!("{},{}", range.start + 1, len),
    }
}

/// A unified diff between two sequences of newline-terminated lines.
///
/// The edit script is computed on first use and cached.
pub struct UnifiedDiff<'a> {
    old: &'a [String],
    new: &'a [String],
    old_label: String,
    new_label: String,
    context: usize,
    ops: OnceCell<Vec<DiffOp>>,
}

impl<'a> UnifiedDiff<'a> {
    /// Create a diff between `old` and `new` with the given header labels.
    pub fn new<S: Into<String>>(
        old: &'a [String],
        new: &'a [String],
        old_label: S,
        new_label: S,
    ) -> Self {
        UnifiedDiff {
            old,
            new,
            old_label: old_label.into(),
            new_label: new_label.into(),
            context: DEFAULT_CONTEXT,
            ops: OnceCell::new(),
        }
    }

    /// Set the number of context lines around each change.
    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    /// The edit script between the two sides.
    pub fn ops(&self) -> &[DiffOp] {
        self.ops.get_or_init(|| diff_lines(self.old, self.new))
    }

    /// Check if both sides are identical.
    pub fn is_empty(&self) -> bool {
        self.ops().iter().all(|op| op.tag == DiffTag::Equal)
    }

    /// Number of lines removed from the old side.
    pub fn deletions(&self) -> usize {
        self.ops()
            .iter()
            .filter(|op| op.tag != DiffTag::Equal)
            .map(|op| op.old.len())
            .sum()
    }

    /// Number of lines added on the new side.
    pub fn insertions(&self) -> usize {
        self.ops()
            .iter()
            .filter(|op| op.tag != DiffTag::Equal)
            .map(|op| op.new.len())
            .sum()
    }

    /// Write the diff; nothing is written when the sides are identical.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{self}")?;
        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, marker: char, line: &str) -> fmt::Result {
    write!(f, "{marker}{line}")?;
    if !line.ends_with('\n') {
        write!(f, "\n\\ No newline at end of file\n")?;
    }
    Ok(())
}

impl fmt::Display for UnifiedDiff<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hunks = group_hunks(self.ops(), self.context);
        if hunks.is_empty() {
            return Ok(());
        }

        writeln!(f, "--- {}", self.old_label)?;
        writeln!(f, "+++ {}", self.new_label)?;

        for hunk in &hunks {
            let (Some(first), Some(last)) = (hunk.first(), hunk.last()) else {
                continue;
            };
            writeln!(
                f,
                "@@ -{} +{} @@",
                format_range(&(first.old.start..last.old.end)),
                format_range(&(first.new.start..last.new.end)),
            )?;

            for op in hunk {
                match op.tag {
                    DiffTag::Equal => {
                        for line in &self.old[op.old.clone()] {
                            write_line(f, ' ', line)?;
                        }
                    }
                    DiffTag::Delete | DiffTag::Insert | DiffTag::Replace => {
                        for line in &self.old[op.old.clone()] {
                            write_line(f, '-', line)?;
                        }
                        for line in &self.new[op.new.clone()] {
                            write_line(f, '+', line)?;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| format!("{w}\n")).collect()
    }

    #[test]
    fn test_identical_inputs() {
        let old = lines(&["a", "b", "c"]);
        let ops = diff_lines(&old, &old);
        assert_eq!(ops, vec![DiffOp::new(DiffTag::Equal, 0..3, 0..3)]);

        let diff = UnifiedDiff::new(&old, &old, "current/w", "sorted/w");
        assert!(diff.is_empty());
        assert_eq!(diff.to_string(), "");
    }

    #[test]
    fn test_empty_inputs() {
        let empty: Vec<String> = Vec::new();
        assert!(diff_lines(&empty, &empty).is_empty());

        let new = lines(&["a"]);
        assert_eq!(
            diff_lines(&empty, &new),
            vec![DiffOp::new(DiffTag::Insert, 0..0, 0..1)]
        );
    }

    #[test]
    fn test_ops_cover_both_sides() {
        let old = lines(&["a", "b", "c", "d", "e"]);
        let new = lines(&["a", "c", "x", "d", "e", "f"]);
        let ops = diff_lines(&old, &new);

        let mut old_pos = 0;
        let mut new_pos = 0;
        for op in &ops {
            assert_eq!(op.old.start, old_pos);
            assert_eq!(op.new.start, new_pos);
            old_pos = op.old.end;
            new_pos = op.new.end;
        }
        assert_eq!(old_pos, old.len());
        assert_eq!(new_pos, new.len());

        for pair in ops.windows(2) {
            assert_ne!(pair[0].tag, pair[1].tag);
        }
    }

    #[test]
    fn test_lcs_keeps_common_lines() {
        let old = lines(&["banana", "Apple"]);
        let new = lines(&["Apple", "banana", "cherry"]);
        let diff = UnifiedDiff::new(&old, &new, "current/words.txt", "sorted/words.txt");

        assert_eq!(diff.deletions(), 1);
        assert_eq!(diff.insertions(), 2);
    }

    #[test]
    fn test_unified_format() {
        let old = lines(&["banana", "Apple"]);
        let new = lines(&["Apple", "banana", "cherry"]);
        let diff = UnifiedDiff::new(&old, &new, "current/words.txt", "sorted/words.txt");

        let expected = "\
--- current/words.txt
+++ sorted/words.txt
@@ -1,2 +1,3 @@
-banana
 Apple
+banana
+cherry
";
        assert_eq!(diff.to_string(), expected);
    }

    #[test]
    fn test_hunks_are_split_by_long_equal_runs() {
        let old: Vec<String> = (0..20).map(|i| format!("w{i:02}\n")).collect();
        let mut new = old.clone();
        new[1] = "x\n".to_string();
        new[18] = "y\n".to_string();

        let hunks = group_hunks(&diff_lines(&old, &new), DEFAULT_CONTEXT);
        assert_eq!(hunks.len(), 2);

        let text = UnifiedDiff::new(&old, &new, "a", "b").to_string();
        assert!(text.contains("@@ -1,5 +1,5 @@\n"));
        assert!(text.contains("@@ -16,5 +16,5 @@\n"));
    }

    #[test]
    fn test_common_subsequence_with_repeated_lines() {
        let a = ["x", "a", "b", "a", "c"];
        let b = ["a", "b", "c", "a"];

        assert_eq!(common_subsequence(&a, &b), vec![(1, 0), (2, 1), (4, 2)]);
    }

    #[test]
    fn test_large_reversed_input() {
        let n = 50_000;
        let old: Vec<String> = (0..n).rev().map(|i| format!("w{i:06}\n")).collect();
        let new: Vec<String> = (0..n).map(|i| format!("w{i:06}\n")).collect();

        let ops = diff_lines(&old, &new);
        assert_eq!(
            ops,
            vec![
                DiffOp::new(DiffTag::Delete, 0..n - 1, 0..0),
                DiffOp::new(DiffTag::Equal, n - 1..n, 0..1),
                DiffOp::new(DiffTag::Insert, n..n, 1..n),
            ]
        );
    }

    #[test]
    fn test_format_range_short_forms() {
        assert_eq!(format_range(&(0..0)), "0,0");
        assert_eq!(format_range(&(4..4)), "4,0");
        assert_eq!(format_range(&(4..5)), "5");
        assert_eq!(format_range(&(4..7)), "5,3");
    }

    #[test]
    fn test_missing_final_newline_marker() {
        let old = vec!["a\n".to_string(), "b".to_string()];
        let new = vec!["a\n".to_string(), "b\n".to_string()];
        let text = UnifiedDiff::new(&old, &new, "a", "b").to_string();

        assert!(text.contains("-b\n\\ No newline at end of file\n+b\n"));
    }
}
