//! Mutable context threaded through one generation run.

use super::{EmitOptions, GenerationStats};
use crate::error::ReadFailure;
use crate::ident::IdentifierRules;
use crate::paths::{relative_url_path, ResolvedInput};
use crate::tree::{EmptinessClassifier, TreeSource};
use crate::types::ContainerId;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const INDENT: &str = "    ";

/// Output buffer, folder counter, and folder map for one run.
///
/// The counter only increases, so every minted container identifier is
/// unique within the run.
pub struct GeneratorState<'a> {
    pub(crate) input: &'a ResolvedInput,
    pub(crate) options: &'a EmitOptions,
    lines: Vec<String>,
    counter: u32,
    /// Enclosing root class; never handed out by `mint`.
    root: Option<ContainerId>,
    folder_names: HashMap<PathBuf, ContainerId>,
    classifier: EmptinessClassifier,
    pub(crate) stats: GenerationStats,
}

impl<'a> GeneratorState<'a> {
    pub fn new(input: &'a ResolvedInput, options: &'a EmitOptions) -> Self {
        Self {
            input,
            options,
            lines: Vec::new(),
            counter: 1,
            root: None,
            folder_names: HashMap::new(),
            classifier: EmptinessClassifier::new(),
            stats: GenerationStats::default(),
        }
    }

    pub fn rules(&self) -> &'a IdentifierRules {
        &self.options.rules
    }

    /// Append one line at the given nesting depth.
    pub fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", INDENT.repeat(depth), text));
        }
    }

    pub fn open_container(&mut self, depth: usize, id: &ContainerId) {
        self.line(depth, format!("public class {}", id));
        self.line(depth, "{");
    }

    pub fn close_container(&mut self, depth: usize) {
        self.line(depth, "}");
    }

    /// Record the root class name so no nested class can reuse it.
    pub fn set_root(&mut self, id: &ContainerId) {
        self.root = Some(id.clone());
    }

    /// Mint the next `folder_NNN` identifier, skipping the root's name.
    pub fn mint(&mut self) -> ContainerId {
        loop {
            let id = ContainerId::minted(self.counter);
            self.counter += 1;
            if self.root.as_ref() != Some(&id) {
                self.stats.containers += 1;
                return id;
            }
        }
    }

    pub fn record_folder(&mut self, dir: &Path, id: &ContainerId) {
        self.folder_names.insert(dir.to_path_buf(), id.clone());
    }

    pub fn folder_for(&self, dir: &Path) -> Option<&ContainerId> {
        self.folder_names.get(dir)
    }

    /// Drop subdirectories with no file anywhere beneath them.
    pub fn retain_non_empty<S: TreeSource + ?Sized>(
        &mut self,
        source: &S,
        dirs: Vec<PathBuf>,
    ) -> Vec<PathBuf> {
        let before = dirs.len();
        let kept: Vec<PathBuf> = dirs
            .into_iter()
            .filter(|dir| !self.classifier.is_empty(source, dir))
            .collect();
        self.stats.pruned += before - kept.len();
        kept
    }

    /// Record a listing failure as a comment line and keep going.
    pub fn placeholder(&mut self, depth: usize, failure: &ReadFailure) {
        let relative = relative_url_path(&self.input.root, &failure.path);
        let shown = if relative.is_empty() {
            ".".to_string()
        } else {
            single_line(&relative)
        };
        let message = single_line(&failure.source.to_string());
        tracing::warn!(
            path = %failure.path.display(),
            error = %failure.source,
            "Skipping unreadable directory"
        );
        self.line(
            depth,
            format!("// Error processing directory {}: {}", shown, message),
        );
        self.stats.failures += 1;
    }

    /// Emit a string member holding `url`.
    pub fn url_member(&mut self, depth: usize, name: &str, url: &str) {
        self.line(
            depth,
            format!("public readonly string {} = {};", name, string_literal(url)),
        );
    }

    /// Relative-path to container-id pairs for every retained subdirectory.
    pub(crate) fn folder_map(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .folder_names
            .iter()
            .map(|(dir, id)| {
                (
                    relative_url_path(&self.input.root, dir),
                    id.as_str().to_string(),
                )
            })
            .collect();
        pairs.sort();
        pairs
    }

    pub(crate) fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Characters that end a line in C# source.
fn is_line_break(c: char) -> bool {
    c.is_control() || matches!(c, '\u{2028}' | '\u{2029}')
}

/// Replace line-breaking characters with spaces for use in a `//` comment.
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if is_line_break(c) { ' ' } else { c })
        .collect()
}

/// Quote `value` as a C# string literal.
///
/// Control characters and the Unicode line separators are escaped, so the
/// literal always stays on one line.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if is_line_break(c) => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
