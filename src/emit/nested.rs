//! Nested layout: one generated class per retained subdirectory.
//!
//! Traversal is depth-first with an explicit stack, so tree depth is bounded
//! by heap rather than call stack. Within a directory the order is: nested
//! class blocks for each retained subdirectory, then one member per
//! subdirectory, then one member per file.

use super::scope::MemberScope;
use super::state::GeneratorState;
use crate::error::ApiError;
use crate::paths::entry_name;
use crate::tree::{FileEntry, TreeSource};
use crate::types::ContainerId;
use std::path::{Path, PathBuf};
use std::vec;

/// A directory whose class body is currently being emitted.
struct Frame {
    container: ContainerId,
    depth: usize,
    dirs: vec::IntoIter<PathBuf>,
    files: Vec<PathBuf>,
    /// Nested class names minted in this container.
    minted: Vec<ContainerId>,
    /// Subdirectory whose class is open on top of this frame.
    open: Option<(PathBuf, ContainerId)>,
    /// Subdirectories that produced content, in sorted order.
    retained: Vec<PathBuf>,
}

enum Visit {
    Content(Frame),
    NoContent,
}

fn visit<S: TreeSource + ?Sized>(
    source: &S,
    state: &mut GeneratorState<'_>,
    dir: &Path,
    container: ContainerId,
    depth: usize,
) -> Visit {
    let listing = match source.list(dir) {
        Ok(listing) => listing,
        Err(failure) => {
            state.placeholder(depth, &failure);
            return Visit::NoContent;
        }
    };

    let dirs = state.retain_non_empty(source, listing.dirs);
    if listing.files.is_empty() && dirs.is_empty() {
        return Visit::NoContent;
    }

    Visit::Content(Frame {
        container,
        depth,
        dirs: dirs.into_iter(),
        files: listing.files,
        minted: Vec::new(),
        open: None,
        retained: Vec::new(),
    })
}

/// Emit the body of `root` at `depth`.
pub(super) fn emit<S: TreeSource + ?Sized>(
    source: &S,
    state: &mut GeneratorState<'_>,
    root: &ContainerId,
    depth: usize,
) -> Result<(), ApiError> {
    let root_dir = state.input.root.clone();
    let mut stack = match visit(source, state, &root_dir, root.clone(), depth) {
        Visit::Content(frame) => vec![frame],
        Visit::NoContent => return Ok(()),
    };

    loop {
        let Some(frame) = stack.last_mut() else {
            break;
        };

        if let Some(dir) = frame.dirs.next() {
            let depth = frame.depth;
            let id = state.mint();
            tracing::debug!(path = %dir.display(), container = %id, "Opening container");
            frame.minted.push(id.clone());
            state.open_container(depth, &id);
            match visit(source, state, &dir, id.clone(), depth + 1) {
                Visit::Content(child) => {
                    frame.open = Some((dir, id));
                    stack.push(child);
                }
                Visit::NoContent => state.close_container(depth),
            }
            continue;
        }

        let Some(done) = stack.pop() else {
            break;
        };
        emit_members(state, &done)?;

        if let Some(parent) = stack.last_mut() {
            state.close_container(parent.depth);
            if let Some((dir, id)) = parent.open.take() {
                state.record_folder(&dir, &id);
                parent.retained.push(dir);
            }
        }
    }

    Ok(())
}

fn emit_members(state: &mut GeneratorState<'_>, frame: &Frame) -> Result<(), ApiError> {
    let rules = state.rules();
    let mut scope = MemberScope::new(frame.container.as_str(), state.options.collisions);
    for id in &frame.minted {
        scope.reserve(id.as_str());
    }

    for dir in &frame.retained {
        let Some(id) = state.folder_for(dir).cloned() else {
            continue;
        };
        let name = scope.claim(&rules.sanitize(&entry_name(dir)), dir)?;
        state.line(
            frame.depth,
            format!("public readonly {id} {name} = new {id}();"),
        );
        state.stats.folder_members += 1;
    }

    for file in &frame.files {
        let entry = FileEntry::new(file);
        let name = scope.claim(&entry.member_name(rules), file)?;
        let url = entry.url(state.input);
        tracing::trace!(path = %file.display(), member = %name, "File member");
        state.url_member(frame.depth, &name, &url);
        state.stats.file_members += 1;
    }

    Ok(())
}
