//! Code emission
//!
//! Turns a directory tree into C# source: a root class named after the root
//! directory, holding one string constant per file whose value is the file's
//! URL under the base URL. In the nested layout each retained subdirectory
//! becomes a minted `folder_NNN` class plus a member instance of it.

mod flat;
mod nested;
mod scope;
mod state;

pub use scope::MemberScope;
pub use state::{string_literal, GeneratorState};

use crate::error::ApiError;
use crate::ident::IdentifierRules;
use crate::paths::{self, ResolvedInput};
use crate::tree::{FsTreeSource, TreeSource};
use crate::types::{CollisionPolicy, ContainerId, EmitStrategy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub const DEFAULT_NAMESPACE: &str = "DirectoryStructure";

/// Knobs for one generation run.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    pub strategy: EmitStrategy,
    /// Wrapping namespace; `None` emits the root class at top level.
    pub namespace: Option<String>,
    /// One `using X;` line each, in order.
    pub usings: Vec<String>,
    pub collisions: CollisionPolicy,
    pub rules: IdentifierRules,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            strategy: EmitStrategy::default(),
            namespace: Some(DEFAULT_NAMESPACE.to_string()),
            usings: vec!["System".to_string()],
            collisions: CollisionPolicy::default(),
            rules: IdentifierRules::csharp(),
        }
    }
}

/// Counts collected while emitting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Minted `folder_NNN` classes.
    pub containers: usize,
    pub folder_members: usize,
    pub file_members: usize,
    /// Directories that could not be listed.
    pub failures: usize,
    /// Subdirectories dropped because nothing beneath them is a file.
    pub pruned: usize,
}

/// The generated source for one run.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    pub root_identifier: String,
    pub lines: Vec<String>,
    pub stats: GenerationStats,
    /// Root-relative directory path and the class minted for it.
    pub folders: Vec<(String, String)>,
}

impl GeneratedUnit {
    /// All lines joined with `\n`, newline-terminated.
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Validate inputs and generate from the local filesystem.
pub fn generate(
    root: &Path,
    base_url: &str,
    options: &EmitOptions,
) -> Result<GeneratedUnit, ApiError> {
    let input = paths::resolve(root, base_url)?;
    generate_from_source(&FsTreeSource::new(), &input, options)
}

/// Generate from an arbitrary tree source. `input` is taken as already
/// normalized.
pub fn generate_from_source<S: TreeSource + ?Sized>(
    source: &S,
    input: &ResolvedInput,
    options: &EmitOptions,
) -> Result<GeneratedUnit, ApiError> {
    info!(
        root = %input.root.display(),
        base_url = %input.base_url,
        strategy = ?options.strategy,
        "Generating directory classes"
    );

    let root_id = ContainerId::named(options.rules.sanitize(&input.root_name()));
    let mut state = GeneratorState::new(input, options);
    state.set_root(&root_id);

    for using in &options.usings {
        state.line(0, format!("using {};", using));
    }
    if !options.usings.is_empty() {
        state.line(0, "");
    }

    let mut depth = 0;
    if let Some(namespace) = &options.namespace {
        state.line(0, format!("namespace {}", namespace));
        state.line(0, "{");
        depth = 1;
    }

    state.open_container(depth, &root_id);
    match options.strategy {
        EmitStrategy::Nested => nested::emit(source, &mut state, &root_id, depth + 1)?,
        EmitStrategy::Flat => flat::emit(source, &mut state, &root_id, depth + 1)?,
    }
    state.close_container(depth);

    if options.namespace.is_some() {
        state.line(0, "}");
    }

    let stats = state.stats.clone();
    let folders = state.folder_map();
    info!(
        containers = stats.containers,
        folder_members = stats.folder_members,
        file_members = stats.file_members,
        failures = stats.failures,
        pruned = stats.pruned,
        "Generation complete"
    );

    Ok(GeneratedUnit {
        root_identifier: root_id.to_string(),
        lines: state.into_lines(),
        stats,
        folders,
    })
}
