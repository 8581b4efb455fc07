//! Configuration
//!
//! Layered configuration for generation, identifier rules, and logging.
//! Precedence, lowest first: built-in defaults, the global config file, the
//! project `pathclass.toml`, then `PATHCLASS_*` environment variables.
//! CLI flags are applied on top by the tooling layer.

mod facade;
mod merge;
mod sources;
pub mod xdg;

pub use facade::ConfigLoader;

use crate::emit::{EmitOptions, DEFAULT_NAMESPACE};
use crate::ident::{IdentifierRules, CSHARP_RESERVED_WORDS, DEFAULT_EMPTY_NAME, DEFAULT_INVALID_CHARS};
use crate::logging::LoggingConfig;
use crate::types::{CollisionPolicy, EmitStrategy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "pathclass.toml";

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "PATHCLASS";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathclassConfig {
    pub generator: GeneratorConfig,
    pub identifiers: IdentifierConfig,
    pub logging: LoggingConfig,
}

/// What to generate and where to put it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory to walk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Prefix for every generated URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    pub strategy: EmitStrategy,

    /// Wrapping namespace; empty means none.
    pub namespace: String,

    /// Namespaces imported at the top of the file.
    pub usings: Vec<String>,

    pub collisions: CollisionPolicy,

    /// Output file; stdout when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root: None,
            base_url: None,
            strategy: EmitStrategy::default(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            usings: vec!["System".to_string()],
            collisions: CollisionPolicy::default(),
            output: None,
        }
    }
}

/// Identifier validity rules as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierConfig {
    /// Every character here is replaced with `_`.
    pub invalid_chars: String,
    pub reserved_words: Vec<String>,
    pub empty_name: String,
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            invalid_chars: DEFAULT_INVALID_CHARS.to_string(),
            reserved_words: CSHARP_RESERVED_WORDS.iter().map(|w| w.to_string()).collect(),
            empty_name: DEFAULT_EMPTY_NAME.to_string(),
        }
    }
}

impl IdentifierConfig {
    pub fn rules(&self) -> IdentifierRules {
        IdentifierRules::new(
            &self.invalid_chars,
            self.reserved_words.iter().cloned(),
            &self.empty_name,
        )
    }

    /// Validate identifier configuration.
    pub fn validate(&self) -> Result<(), String> {
        let Some(first) = self.empty_name.chars().next() else {
            return Err("identifiers.empty_name cannot be empty".to_string());
        };
        if first.is_numeric() {
            return Err(format!(
                "identifiers.empty_name '{}' cannot start with a numeric character",
                self.empty_name
            ));
        }
        if let Some(c) = self
            .empty_name
            .chars()
            .find(|c| self.invalid_chars.contains(*c) || c.is_control())
        {
            return Err(format!(
                "identifiers.empty_name '{}' contains invalid character '{}'",
                self.empty_name, c
            ));
        }
        if self.reserved_words.contains(&self.empty_name) {
            return Err(format!(
                "identifiers.empty_name '{}' is a reserved word",
                self.empty_name
            ));
        }
        Ok(())
    }
}

impl PathclassConfig {
    /// Emission options derived from the generator and identifier sections.
    pub fn emit_options(&self) -> EmitOptions {
        let namespace = self.generator.namespace.trim();
        EmitOptions {
            strategy: self.generator.strategy,
            namespace: (!namespace.is_empty()).then(|| namespace.to_string()),
            usings: self.generator.usings.clone(),
            collisions: self.generator.collisions,
            rules: self.identifiers.rules(),
        }
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, crate::error::ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::error::ApiError::ConfigError(format!("Failed to render config: {}", e)))
    }
}
