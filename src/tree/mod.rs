//! Directory listing and emptiness classification
//!
//! The emitters read directories only through a [`TreeSource`]. Listing
//! failures come back as [`ReadFailure`] values.

mod emptiness;
mod node;
mod walker;

pub use emptiness::EmptinessClassifier;
pub use node::FileEntry;
pub use walker::FsTreeSource;

use crate::error::ReadFailure;
use std::path::{Path, PathBuf};

/// Direct contents of one directory, each list sorted by path ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub files: Vec<PathBuf>,
    pub dirs: Vec<PathBuf>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }

    /// Sort both lists so traversal order is stable across runs.
    pub fn sorted(mut self) -> Self {
        self.files.sort();
        self.dirs.sort();
        self
    }
}

/// Read access to a directory tree.
pub trait TreeSource {
    /// List the direct files and subdirectories of `dir`, sorted.
    fn list(&self, dir: &Path) -> Result<Listing, ReadFailure>;
}

impl<T: TreeSource + ?Sized> TreeSource for &T {
    fn list(&self, dir: &Path) -> Result<Listing, ReadFailure> {
        (**self).list(dir)
    }
}
