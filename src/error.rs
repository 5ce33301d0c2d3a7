//! Error types for the Verbena library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`VerbenaError`] enum. Training and classification are deterministic batch
//! computations, so errors are never retried: the only sound response is to
//! report the error and stop that unit of work.
//!
//! # Examples
//!
//! ```
//! use verbena::error::{Result, VerbenaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(VerbenaError::training("empty corpus"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Verbena operations.
#[derive(Error, Debug)]
pub enum VerbenaError {
    /// I/O errors (reading datasets, writing label files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus-related errors (statistics, pruning, transform preconditions)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Training-related errors (degenerate estimation, empty inputs)
    #[error("Training error: {0}")]
    Training(String),

    /// Classification-related errors
    #[error("Classification error: {0}")]
    Classification(String),

    /// A dataset record that does not split into exactly `label<TAB>text`
    #[error("Malformed record at line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    /// Ensemble vote errors (missing or misaligned label files)
    #[error("Ensemble error: {0}")]
    Ensemble(String),
}

/// Result type alias for operations that may fail with [`VerbenaError`].
pub type Result<T> = std::result::Result<T, VerbenaError>;

impl VerbenaError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        VerbenaError::Corpus(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        VerbenaError::Training(msg.into())
    }

    /// Create a new classification error.
    pub fn classification<S: Into<String>>(msg: S) -> Self {
        VerbenaError::Classification(msg.into())
    }

    /// Create a new malformed-input error carrying a 1-based line number.
    pub fn malformed_input<S: Into<String>>(line: usize, msg: S) -> Self {
        VerbenaError::MalformedInput {
            line,
            message: msg.into(),
        }
    }

    /// Create a new ensemble error.
    pub fn ensemble<S: Into<String>>(msg: S) -> Self {
        VerbenaError::Ensemble(msg.into())
    }
}
