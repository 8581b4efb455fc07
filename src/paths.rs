//! Root and base URL normalization, and relative path math for URLs.

use crate::error::ApiError;
use std::path::{Component, Path, PathBuf};

/// Validated inputs for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    /// Absolute root directory, no trailing separator.
    pub root: PathBuf,
    /// Base URL with trailing slashes removed.
    pub base_url: String,
}

impl ResolvedInput {
    /// Build from already-normalized values without touching the filesystem.
    pub fn new(root: impl Into<PathBuf>, base_url: &str) -> Self {
        Self {
            root: root.into(),
            base_url: trim_base_url(base_url).to_string(),
        }
    }

    /// Final component of the root directory, empty for a filesystem root.
    pub fn root_name(&self) -> String {
        entry_name(&self.root)
    }

    /// URL for an entry beneath the root.
    pub fn url_for(&self, path: &Path) -> String {
        format!("{}/{}", self.base_url, relative_url_path(&self.root, path))
    }
}

/// Validate and normalize the root path and base URL.
pub fn resolve(root: &Path, base_url: &str) -> Result<ResolvedInput, ApiError> {
    if root.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(ApiError::InvalidArgument(
            "Root path cannot be empty".to_string(),
        ));
    }
    if base_url.trim().is_empty() {
        return Err(ApiError::InvalidArgument(
            "Base URL cannot be empty".to_string(),
        ));
    }
    if !root.is_dir() {
        return Err(ApiError::NotFound(root.to_path_buf()));
    }

    let canonical =
        dunce::canonicalize(root).map_err(|_| ApiError::NotFound(root.to_path_buf()))?;

    Ok(ResolvedInput::new(canonical, base_url))
}

/// Final component of `path` as a string, empty when there is none.
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn trim_base_url(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// Path of `path` relative to `root`, joined with `/` regardless of platform.
///
/// Paths outside the root fall back to the full path with separators
/// normalized and leading slashes dropped.
pub fn relative_url_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path
            .to_string_lossy()
            .replace('\\', "/")
            .trim_start_matches('/')
            .to_string(),
    }
}
