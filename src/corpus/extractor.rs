//! Text extraction from documents.
//!
//! The classifier only needs plain text; how a document format is decoded is
//! the business of a [`TextExtractor`]. Failures surface as
//! [`CatbayesError::Extraction`] and abort the training or classification
//! call that triggered them.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::corpus::document::DocumentRef;
use crate::error::{CatbayesError, Result};

/// Converts a document into plain text.
pub trait TextExtractor: Send + Sync {
    /// Extract the text of `document`.
    fn extract_text(&self, document: &DocumentRef) -> Result<String>;

    /// Get the name of this extractor (for debugging and logging).
    fn name(&self) -> &'static str;
}

/// Reads documents from disk as text. Invalid UTF-8 is replaced rather than
/// rejected.
#[derive(Clone, Debug, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Create a new plain text extractor.
    pub fn new() -> Self {
        PlainTextExtractor
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, document: &DocumentRef) -> Result<String> {
        let bytes = std::fs::read(document.path())
            .map_err(|e| CatbayesError::extraction(document.path(), e.to_string()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn name(&self) -> &'static str {
        "plain_text"
    }
}

/// Serves document text from memory, keyed by document path.
#[derive(Clone, Debug, Default)]
pub struct InMemoryExtractor {
    texts: HashMap<PathBuf, String>,
}

impl InMemoryExtractor {
    /// Create an empty extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the text for `path`.
    pub fn insert<P: Into<PathBuf>, S: Into<String>>(&mut self, path: P, text: S) {
        self.texts.insert(path.into(), text.into());
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_text<P: Into<PathBuf>, S: Into<String>>(mut self, path: P, text: S) -> Self {
        self.insert(path, text);
        self
    }

    /// Number of registered documents.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether no document has been registered.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl TextExtractor for InMemoryExtractor {
    fn extract_text(&self, document: &DocumentRef) -> Result<String> {
        self.texts
            .get(document.path())
            .cloned()
            .ok_or_else(|| CatbayesError::extraction(document.path(), "no text registered"))
    }

    fn name(&self) -> &'static str {
        "in_memory"
    }
}
