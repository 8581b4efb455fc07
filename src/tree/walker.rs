//! Filesystem-backed [`TreeSource`].

use super::{Listing, TreeSource};
use crate::error::ReadFailure;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Lists directories on the local filesystem.
///
/// Symbolic links to files count as files. Symbolic links to directories are
/// skipped so a run can never cycle or visit a subtree twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTreeSource;

impl FsTreeSource {
    pub fn new() -> Self {
        FsTreeSource
    }
}

enum EntryKind {
    File,
    Dir,
    Other,
}

fn classify(entry: &DirEntry) -> EntryKind {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_symlink() {
        match std::fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        }
    } else {
        EntryKind::Other
    }
}

impl TreeSource for FsTreeSource {
    fn list(&self, dir: &Path) -> Result<Listing, ReadFailure> {
        let mut listing = Listing::default();
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(ReadFailure::from)?;
            match classify(&entry) {
                EntryKind::File => listing.files.push(entry.into_path()),
                EntryKind::Dir => listing.dirs.push(entry.into_path()),
                EntryKind::Other => {
                    tracing::trace!(path = %entry.path().display(), "Skipping non-file entry");
                }
            }
        }

        Ok(listing.sorted())
    }
}
