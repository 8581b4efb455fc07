//! Flat layout: a single class whose member names carry the path.

use super::scope::MemberScope;
use super::state::GeneratorState;
use crate::error::ApiError;
use crate::paths::entry_name;
use crate::tree::{FileEntry, TreeSource};
use crate::types::ContainerId;
use std::path::PathBuf;

enum Work {
    /// List a directory and schedule its folders, then its files.
    Dir { path: PathBuf, prefix: String },
    /// Declare the URL member for a retained folder, then descend.
    Folder { path: PathBuf, prefix: String },
    Files { files: Vec<PathBuf>, prefix: String },
}

pub(super) fn emit<S: TreeSource + ?Sized>(
    source: &S,
    state: &mut GeneratorState<'_>,
    root: &ContainerId,
    depth: usize,
) -> Result<(), ApiError> {
    let rules = state.rules();
    let mut scope = MemberScope::new(root.as_str(), state.options.collisions);
    let mut work = vec![Work::Dir {
        path: state.input.root.clone(),
        prefix: String::new(),
    }];

    while let Some(item) = work.pop() {
        match item {
            Work::Dir { path, prefix } => {
                let listing = match source.list(&path) {
                    Ok(listing) => listing,
                    Err(failure) => {
                        state.placeholder(depth, &failure);
                        continue;
                    }
                };
                let dirs = state.retain_non_empty(source, listing.dirs);
                work.push(Work::Files {
                    files: listing.files,
                    prefix: prefix.clone(),
                });
                for dir in dirs.into_iter().rev() {
                    work.push(Work::Folder {
                        path: dir,
                        prefix: prefix.clone(),
                    });
                }
            }
            Work::Folder { path, prefix } => {
                let candidate = format!("{}{}", prefix, rules.sanitize(&entry_name(&path)));
                let name = scope.claim(&candidate, &path)?;
                let url = state.input.url_for(&path);
                state.url_member(depth, &name, &url);
                state.stats.folder_members += 1;
                work.push(Work::Dir {
                    path,
                    prefix: format!("{}_", name),
                });
            }
            Work::Files { files, prefix } => {
                for file in files {
                    let entry = FileEntry::new(&file);
                    let candidate = format!("{}{}", prefix, entry.split_member_name(rules));
                    let name = scope.claim(&candidate, &file)?;
                    let url = entry.url(state.input);
                    state.url_member(depth, &name, &url);
                    state.stats.file_members += 1;
                }
            }
        }
    }

    Ok(())
}
