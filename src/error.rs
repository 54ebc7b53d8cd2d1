//! Error types for the docspell library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`DocspellError`].
//!
//! # Examples
//!
//! ```
//! use docspell::error::{DocspellError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DocspellError::config("context_width must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for docspell operations.
#[derive(Error, Debug)]
pub enum DocspellError {
    /// I/O errors not tied to a named file (stdin, stdout)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A named file (word list, dictionary, configuration) could not be read or written
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid classifier pattern
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with DocspellError.
pub type Result<T> = std::result::Result<T, DocspellError>;

impl DocspellError {
    /// Wrap an I/O error with the path of the file it happened on.
    pub fn file<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        DocspellError::File {
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DocspellError::Config(msg.into())
    }

    /// Create a new pattern error.
    pub fn pattern<S: Into<String>>(msg: S) -> Self {
        DocspellError::Pattern(msg.into())
    }
}
