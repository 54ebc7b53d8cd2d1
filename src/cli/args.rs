//! Command line argument parsing for the docspell CLI using clap.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::classify::CLASSIFIER_NAMES;
use crate::config::DEFAULT_WORD_LIST;

/// docspell - word-list maintenance and spell-check filtering for documentation
#[derive(Parser, Debug, Clone)]
#[command(name = "docspell")]
#[command(about = "Keeps documentation word lists sorted and filters spell-check false positives")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DocspellArgs {
    /// Log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DocspellArgs {
    /// Get the effective verbosity level (0 = warnings only)
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Sort word lists and output a patch, optionally adding words
    Sort(SortArgs),

    /// Spell-check text read from standard input
    Check(CheckArgs),

    /// Show which classifiers accept each token
    Classify(ClassifyArgs),

    /// Show the resolved release version
    Release(ReleaseArgs),
}

/// Arguments for sorting word lists
#[derive(Parser, Debug, Clone)]
pub struct SortArgs {
    /// Word lists to sort
    #[arg(value_name = "WORDLIST", default_value = DEFAULT_WORD_LIST)]
    pub word_lists: Vec<PathBuf>,

    /// Add this word to the sorted file(s), can be specified multiple times
    #[arg(short = 'a', long = "add-word", value_name = "WORD")]
    pub add_words: Vec<String>,

    /// Save changes to the file(s) instead of just outputting a patch
    #[arg(short, long, overrides_with = "no_save")]
    pub save: bool,

    /// Only output a patch (default)
    #[arg(long, overrides_with = "save")]
    pub no_save: bool,

    /// Don't output a diff
    #[arg(short, long, overrides_with = "no_quiet")]
    pub quiet: bool,

    /// Output a diff (default)
    #[arg(long, overrides_with = "quiet")]
    pub no_quiet: bool,
}

impl SortArgs {
    /// Check if changed lists should be written back
    pub fn should_save(&self) -> bool {
        self.save && !self.no_save
    }

    /// Check if the diff should be written
    pub fn should_show_diff(&self) -> bool {
        !self.quiet || self.no_quiet
    }
}

/// Arguments for spell-checking
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Project word list, can be specified multiple times
    #[arg(short = 'w', long = "word-list", value_name = "WORDLIST")]
    pub word_lists: Vec<PathBuf>,

    /// Dictionary file, can be specified multiple times
    #[arg(short = 'd', long = "dictionary", value_name = "DICTIONARY")]
    pub dictionaries: Vec<PathBuf>,

    /// Project root used to resolve the release version
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Version file, relative to the project root
    #[arg(long, value_name = "FILE")]
    pub version_file: Option<PathBuf>,

    /// Characters of context shown around each error
    #[arg(long = "context", value_name = "CHARS")]
    pub context_width: Option<usize>,

    /// Number of suggestions shown per error
    #[arg(long = "suggest", value_name = "COUNT")]
    pub max_suggestions: Option<usize>,

    /// Largest edit distance for suggestions
    #[arg(long, value_name = "EDITS")]
    pub max_distance: Option<usize>,

    /// Enable only this classifier, can be specified multiple times
    #[arg(long = "classifier", value_name = "NAME",
          value_parser = PossibleValuesParser::new(CLASSIFIER_NAMES))]
    pub classifiers: Vec<String>,
}

/// Arguments for classifying tokens
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Tokens to classify
    #[arg(value_name = "TOKEN", required = true)]
    pub tokens: Vec<String>,

    /// Use this release string instead of resolving one
    #[arg(long, value_name = "VERSION")]
    pub release: Option<String>,

    /// Project root used to resolve the release version
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
}

/// Arguments for showing the release version
#[derive(Parser, Debug, Clone)]
pub struct ReleaseArgs {
    /// Project root
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Version file, relative to the project root
    #[arg(long, value_name = "FILE")]
    pub version_file: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
