//! Format generation summaries and sanitizer results as text or JSON.

use crate::emit::{GeneratedUnit, GenerationStats};
use crate::error::ApiError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

/// What a `generate` run produced and where it went.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSummary {
    pub root: String,
    pub base_url: String,
    pub output: String,
    pub strategy: String,
    pub root_identifier: String,
    pub stats: GenerationStats,
    pub folders: Vec<FolderEntry>,
}

/// A retained directory and the class minted for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderEntry {
    pub path: String,
    pub container: String,
}

impl GenerateSummary {
    pub fn from_unit(
        unit: &GeneratedUnit,
        root: String,
        base_url: String,
        output: String,
        strategy: String,
    ) -> Self {
        Self {
            root,
            base_url,
            output,
            strategy,
            root_identifier: unit.root_identifier.clone(),
            stats: unit.stats.clone(),
            folders: unit
                .folders
                .iter()
                .map(|(path, container)| FolderEntry {
                    path: path.clone(),
                    container: container.clone(),
                })
                .collect(),
        }
    }
}

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format a generation summary as human-readable text.
pub fn format_generate_summary_text(summary: &GenerateSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Generated")));
    out.push_str(&format!("  Root: {}\n", summary.root));
    out.push_str(&format!("  Base URL: {}\n", summary.base_url));
    out.push_str(&format!("  Output: {}\n", summary.output));
    out.push_str(&format!("  Strategy: {}\n", summary.strategy));
    out.push_str(&format!("  Root class: {}\n\n", summary.root_identifier));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Item", "Count"]);
    let stats = &summary.stats;
    for (label, count) in [
        ("Folder classes", stats.containers),
        ("Folder members", stats.folder_members),
        ("File members", stats.file_members),
        ("Pruned empty folders", stats.pruned),
        ("Unreadable folders", stats.failures),
    ] {
        table.add_row(vec![label.to_string(), count.to_string()]);
    }
    out.push_str(&format!("{}\n", table));

    if stats.failures > 0 {
        out.push_str(&format!(
            "\n{} folder(s) could not be read; see the placeholder comments in the output.\n",
            stats.failures
        ));
    }
    out
}

/// Format a generation summary as JSON.
pub fn format_generate_summary_json(summary: &GenerateSummary) -> Result<String, ApiError> {
    serde_json::to_string_pretty(summary)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize summary: {}", e)))
}

/// One `name -> identifier` line per input.
pub fn format_sanitize_text(pairs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (name, ident) in pairs {
        out.push_str(&format!("{} -> {}\n", name, ident));
    }
    out
}
