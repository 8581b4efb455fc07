//! File entries discovered during traversal.

use crate::ident::IdentifierRules;
use crate::paths::ResolvedInput;
use std::path::{Path, PathBuf};

/// A file beneath the root, with the names the emitters need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// Full file name, extension included.
    pub file_name: String,
    /// Name without the final extension.
    pub stem: String,
    /// Final extension without the dot, if any.
    pub extension: Option<String>,
}

impl FileEntry {
    pub fn new(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .filter(|e| !e.is_empty());
        Self {
            path: path.to_path_buf(),
            file_name,
            stem,
            extension,
        }
    }

    /// Member name used by nested containers: the whole file name as one unit.
    pub fn member_name(&self, rules: &IdentifierRules) -> String {
        rules.sanitize(&self.file_name)
    }

    /// Member name used by the flat layout: sanitized stem and extension
    /// joined with `_`.
    pub fn split_member_name(&self, rules: &IdentifierRules) -> String {
        let stem = rules.sanitize(&self.stem);
        match &self.extension {
            Some(ext) => format!("{}_{}", stem, rules.sanitize(ext)),
            None => stem,
        }
    }

    pub fn url(&self, input: &ResolvedInput) -> String {
        input.url_for(&self.path)
    }
}
