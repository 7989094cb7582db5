//! Error types for the Catbayes library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`CatbayesError`] enum. Lookups of unseen tokens are never errors; they are
//! absorbed by Laplace smoothing.
//!
//! # Examples
//!
//! ```
//! use catbayes::error::{CatbayesError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CatbayesError::invalid_model("no categories"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::Path;

use thiserror::Error;

/// The main error type for Catbayes operations.
#[derive(Error, Debug)]
pub enum CatbayesError {
    /// I/O errors outside of text extraction (directory walking, config files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A document could not be converted to plain text.
    #[error("Extraction error for {path}: {message}")]
    Extraction { path: String, message: String },

    /// The model cannot be used for scoring (e.g. it has no categories).
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Analysis-related errors (tokenization, filtering).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus layout errors (missing root, unreadable directory tree).
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with CatbayesError.
pub type Result<T> = std::result::Result<T, CatbayesError>;

impl CatbayesError {
    /// Create a new extraction error for the document at `path`.
    pub fn extraction<P: AsRef<Path>, S: Into<String>>(path: P, msg: S) -> Self {
        CatbayesError::Extraction {
            path: path.as_ref().display().to_string(),
            message: msg.into(),
        }
    }

    /// Create a new invalid model error.
    pub fn invalid_model<S: Into<String>>(msg: S) -> Self {
        CatbayesError::InvalidModel(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        CatbayesError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        CatbayesError::Corpus(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        CatbayesError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CatbayesError::Other(msg.into())
    }
}
