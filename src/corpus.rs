//! Corpus collaborators: document handles, text extraction, and discovery of
//! category directories.
//!
//! A corpus is a directory tree. Every directory that directly holds at least
//! one eligible document is a category, named by its path relative to the
//! root:
//!
//! ```text
//! corpus/
//! ├── cats/            → "cats"
//! │   ├── a.txt
//! │   └── b.txt
//! └── pets/dogs/       → "pets/dogs"
//!     └── c.txt
//! ```

pub mod discovery;
pub mod document;
pub mod extractor;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use discovery::{list_categories, list_documents};
pub use document::DocumentRef;
pub use extractor::{InMemoryExtractor, PlainTextExtractor, TextExtractor};

use crate::error::Result;

/// A category name together with every document found for it, before the
/// train/test split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDocuments {
    /// Category name (directory path relative to the corpus root).
    pub name: String,
    /// All eligible documents of the category.
    pub documents: Vec<DocumentRef>,
}

impl CategoryDocuments {
    /// Create a category listing.
    pub fn new<S: Into<String>>(name: S, documents: Vec<DocumentRef>) -> Self {
        Self {
            name: name.into(),
            documents,
        }
    }
}

/// Discovers categories and their documents under a root directory.
#[derive(Debug, Clone)]
pub struct Corpus {
    categories: Vec<CategoryDocuments>,
}

impl Corpus {
    /// Walk `root` and collect every category with its documents.
    pub fn discover<P: AsRef<Path>>(root: P, extensions: &[String]) -> Result<Self> {
        let mut categories = Vec::new();
        for (name, directory) in list_categories(root.as_ref(), extensions)? {
            let documents = list_documents(&directory, &name, extensions)?;
            log::debug!("category {name}: {} documents", documents.len());
            categories.push(CategoryDocuments::new(name, documents));
        }
        Ok(Self { categories })
    }

    /// Build a corpus from listings resolved elsewhere.
    pub fn from_categories(categories: Vec<CategoryDocuments>) -> Self {
        Self { categories }
    }

    /// The discovered categories, sorted by name.
    pub fn categories(&self) -> &[CategoryDocuments] {
        &self.categories
    }

    /// Total number of documents across all categories.
    pub fn document_count(&self) -> usize {
        self.categories.iter().map(|c| c.documents.len()).sum()
    }

    /// Consume the corpus, yielding its category listings.
    pub fn into_categories(self) -> Vec<CategoryDocuments> {
        self.categories
    }
}
