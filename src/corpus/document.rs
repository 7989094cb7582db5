//! Document handles.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A handle to one document: where it lives and which category it belongs to.
///
/// The category is recorded when the document is discovered and is the
/// ground truth used by evaluation; it is never re-derived from the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Location of the document.
    pub path: PathBuf,
    /// Name of the category the document was filed under.
    pub category: String,
}

impl DocumentRef {
    /// Create a new document handle.
    pub fn new<P: Into<PathBuf>, S: Into<String>>(path: P, category: S) -> Self {
        Self {
            path: path.into(),
            category: category.into(),
        }
    }

    /// Location of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The category this document truly belongs to.
    pub fn true_category(&self) -> &str {
        &self.category
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.path.display(), self.category)
    }
}
