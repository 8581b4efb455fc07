//! Recursive emptiness classification.

use super::TreeSource;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Decides whether a directory has any file anywhere beneath it.
///
/// A directory is empty when it has no direct files and every subdirectory is
/// empty. Results are cached by path for the lifetime of the classifier; the
/// tree is assumed static during one run. A directory that cannot be listed
/// is classified non-empty so the traversal reaches it and records the
/// failure where it happened.
#[derive(Debug, Default)]
pub struct EmptinessClassifier {
    cache: HashMap<PathBuf, bool>,
}

impl EmptinessClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty<S: TreeSource + ?Sized>(&mut self, source: &S, dir: &Path) -> bool {
        if let Some(&cached) = self.cache.get(dir) {
            return cached;
        }

        let mut empty = true;
        let mut pending = vec![dir.to_path_buf()];
        while let Some(next) = pending.pop() {
            if let Some(&cached) = self.cache.get(&next) {
                if !cached {
                    empty = false;
                    break;
                }
                continue;
            }
            match source.list(&next) {
                Ok(listing) => {
                    if !listing.files.is_empty() {
                        empty = false;
                        break;
                    }
                    pending.extend(listing.dirs);
                }
                Err(failure) => {
                    tracing::debug!(
                        path = %failure.path.display(),
                        error = %failure.source,
                        "Unreadable directory treated as non-empty"
                    );
                    empty = false;
                    break;
                }
            }
        }

        self.cache.insert(dir.to_path_buf(), empty);
        empty
    }

    /// Number of directories classified so far.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}
