//! Output formatting for CLI commands.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::args::{DocspellArgs, OutputFormat};
use crate::error::Result;
use crate::release::{ReleaseVersion, VersionSource};
use crate::spelling::SpellingError;
use crate::wordlist::MergeOutcome;

/// Rendering of a result for people rather than programs.
pub trait HumanOutput {
    /// Write the human-readable form of `self`.
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()>;
}

/// Result structure for sorting one word list.
#[derive(Debug, Serialize, Deserialize)]
pub struct SortResult {
    pub path: PathBuf,
    pub changed: bool,
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl SortResult {
    /// Summarize a merge of the list at `path`.
    ///
    /// The diff is only computed when `show_diff` is set.
    pub fn new(path: &Path, outcome: &MergeOutcome, show_diff: bool, saved: bool) -> Result<Self> {
        let diff = if show_diff && outcome.is_changed() {
            let mut buf = Vec::new();
            outcome.diff(path).write_to(&mut buf)?;
            Some(String::from_utf8_lossy(&buf).into_owned())
        } else {
            None
        };

        Ok(SortResult {
            path: path.to_path_buf(),
            changed: outcome.is_changed(),
            saved,
            diff,
        })
    }
}

impl HumanOutput for SortResult {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Some(diff) = &self.diff {
            out.write_all(diff.as_bytes())?;
        }
        Ok(())
    }
}

/// Result structure for a spell-check run.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    pub release: String,
    pub error_count: usize,
    pub errors: Vec<SpellingError>,
}

impl CheckReport {
    pub fn new(release: &ReleaseVersion, errors: Vec<SpellingError>) -> Self {
        CheckReport {
            release: release.as_str().to_string(),
            error_count: errors.len(),
            errors,
        }
    }

    /// Check if the text had no errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl HumanOutput for CheckReport {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        for error in &self.errors {
            writeln!(out, "Spelling error: {}", error.word)?;
            writeln!(out, "Context: {}", error.context())?;
            if !error.suggestions.is_empty() {
                let words: Vec<&str> = error.suggestions.iter().map(|s| s.word.as_str()).collect();
                writeln!(out, "Did you mean: {}", words.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Classification of a single token.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub token: String,
    pub classifiers: Vec<String>,
    pub suppressed: bool,
}

/// Result structure for classifying a batch of tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyReport {
    pub release: String,
    pub source: VersionSource,
    pub tokens: Vec<ClassifyResult>,
}

impl HumanOutput for ClassifyReport {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        for result in &self.tokens {
            if result.suppressed {
                writeln!(out, "{}: {}", result.token, result.classifiers.join(", "))?;
            } else {
                writeln!(out, "{}: not suppressed", result.token)?;
            }
        }
        Ok(())
    }
}

/// Result structure for the release command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReleaseInfo {
    pub version: String,
    pub source: VersionSource,
}

impl From<&ReleaseVersion> for ReleaseInfo {
    fn from(release: &ReleaseVersion) -> Self {
        ReleaseInfo {
            version: release.as_str().to_string(),
            source: release.source(),
        }
    }
}

impl HumanOutput for ReleaseInfo {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{} (from {})", self.version, self.source)?;
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<W, T>(out: &mut W, result: &T, args: &DocspellArgs) -> Result<()>
where
    W: Write,
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out),
        OutputFormat::Json => output_json(out, result, args),
    }
}

/// Output in JSON format.
fn output_json<W: Write, T: Serialize>(out: &mut W, result: &T, args: &DocspellArgs) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, result)?;
    } else {
        serde_json::to_writer(&mut *out, result)?;
    }
    writeln!(out)?;
    Ok(())
}
