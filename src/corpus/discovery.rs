//! Discovery of category directories and their documents.

use std::fs;
use std::path::{Path, PathBuf};

use crate::corpus::document::DocumentRef;
use crate::error::{CatbayesError, Result};

/// Find every directory under `root` (at any depth, `root` included) that
/// directly contains at least one eligible document.
///
/// Each category is named by its path relative to `root`, joined with `/`;
/// documents placed directly in `root` form the category `"."`. Entries whose
/// name starts with a dot are skipped and symbolic links are not followed.
/// The result is sorted by name.
pub fn list_categories(root: &Path, extensions: &[String]) -> Result<Vec<(String, PathBuf)>> {
    if !root.is_dir() {
        return Err(CatbayesError::corpus(format!(
            "corpus root is not a directory: {}",
            root.display()
        )));
    }

    let mut categories = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(directory) = pending.pop() {
        let mut has_documents = false;

        for entry in fs::read_dir(&directory)? {
            let entry = entry?;
            let path = entry.path();
            if is_hidden(&path) {
                continue;
            }

            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file() && is_eligible(&path, extensions) {
                has_documents = true;
            }
        }

        if has_documents {
            let name = category_name(root, &directory);
            categories.push((name, directory));
        }
    }

    categories.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(categories)
}

/// List the eligible documents directly inside `directory` (not recursive),
/// tagging each with `category`. The result is sorted by path.
pub fn list_documents(
    directory: &Path,
    category: &str,
    extensions: &[String],
) -> Result<Vec<DocumentRef>> {
    let mut documents = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_file() && !is_hidden(&path) && is_eligible(&path, extensions) {
            documents.push(DocumentRef::new(path, category));
        }
    }

    documents.sort();
    Ok(documents)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

fn is_eligible(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

fn category_name(root: &Path, directory: &Path) -> String {
    let relative = directory.strip_prefix(root).unwrap_or(directory);
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
