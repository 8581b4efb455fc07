//! CLI Tooling
//!
//! Command-line interface for generating directory classes. Config files and
//! environment supply defaults; flags given here win.

use crate::config::{ConfigLoader, PathclassConfig};
use crate::emit::generate_from_source;
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::paths;
use crate::tooling::format::{
    format_generate_summary_json, format_generate_summary_text, format_sanitize_text,
    GenerateSummary,
};
use crate::tree::FsTreeSource;
use crate::types::{CollisionPolicy, EmitStrategy};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

/// Pathclass CLI - Directory trees as typed asset URLs
#[derive(Parser)]
#[command(name = "pathclass")]
#[command(about = "Generate C# classes of asset URL constants from a directory tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk a directory and generate the class tree
    Generate {
        /// Directory to walk
        #[arg(long)]
        root: Option<PathBuf>,
        /// Base URL prefixed to every relative path
        #[arg(long)]
        base_url: Option<String>,
        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Layout: nested or flat
        #[arg(long)]
        strategy: Option<EmitStrategy>,
        /// Wrapping namespace (empty for none)
        #[arg(long)]
        namespace: Option<String>,
        /// Sibling name collisions: suffix, error, or allow
        #[arg(long)]
        collisions: Option<CollisionPolicy>,
        /// Summary format when writing to a file (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the identifier each name sanitizes to
    Sanitize {
        /// Names to sanitize
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// CLI context holding the loaded configuration
pub struct CliContext {
    config: PathclassConfig,
    project_dir: PathBuf,
}

impl CliContext {
    /// Load configuration for a run started in `project_dir`.
    pub fn new(project_dir: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(&project_dir.join(path))?,
            None => ConfigLoader::load(&project_dir)?,
        };
        Self::with_config(project_dir, config)
    }

    /// Build a context from an already loaded configuration.
    pub fn with_config(project_dir: PathBuf, config: PathclassConfig) -> Result<Self, ApiError> {
        config
            .identifiers
            .validate()
            .map_err(ApiError::ConfigError)?;
        Ok(Self {
            config,
            project_dir,
        })
    }

    pub fn config(&self) -> &PathclassConfig {
        &self.config
    }

    /// Logging config with CLI flags applied over the loaded section.
    pub fn logging_config(&self, cli: &Cli) -> LoggingConfig {
        let mut logging = self.config.logging.clone();
        if cli.verbose {
            logging.level = "debug".to_string();
        }
        if let Some(level) = &cli.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &cli.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &cli.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &cli.log_file {
            logging.file = Some(file.clone());
        }
        logging
    }

    /// Execute a CLI command, returning what should be printed to stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Generate {
                root,
                base_url,
                output,
                strategy,
                namespace,
                collisions,
                format,
            } => {
                let mut config = self.config.clone();
                let generator = &mut config.generator;
                if root.is_some() {
                    generator.root = root.clone();
                }
                if base_url.is_some() {
                    generator.base_url = base_url.clone();
                }
                if output.is_some() {
                    generator.output = output.clone();
                }
                if let Some(strategy) = strategy {
                    generator.strategy = *strategy;
                }
                if let Some(namespace) = namespace {
                    generator.namespace = namespace.clone();
                }
                if let Some(collisions) = collisions {
                    generator.collisions = *collisions;
                }
                self.handle_generate(&config, format)
            }
            Commands::Sanitize { names } => {
                let rules = self.config.identifiers.rules();
                let pairs: Vec<(String, String)> = names
                    .iter()
                    .map(|name| (name.clone(), rules.sanitize(name)))
                    .collect();
                Ok(format_sanitize_text(&pairs))
            }
            Commands::Config => self.config.to_toml(),
        }
    }

    fn resolve_relative(&self, path: &Path) -> PathBuf {
        if path.to_string_lossy().trim().is_empty() {
            path.to_path_buf()
        } else {
            self.project_dir.join(path)
        }
    }

    fn handle_generate(&self, config: &PathclassConfig, format: &str) -> Result<String, ApiError> {
        if format != "text" && format != "json" {
            return Err(ApiError::InvalidArgument(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                format
            )));
        }

        let generator = &config.generator;
        let root = self.resolve_relative(&generator.root.clone().unwrap_or_default());
        let base_url = generator.base_url.clone().unwrap_or_default();
        let input = paths::resolve(&root, &base_url)?;
        let options = config.emit_options();
        let unit = generate_from_source(&FsTreeSource::new(), &input, &options)?;

        let Some(output) = &generator.output else {
            return Ok(unit.to_text());
        };

        let output = self.resolve_relative(output);
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&output, unit.to_text())?;
        info!(output = %output.display(), "Wrote generated source");

        let strategy = match generator.strategy {
            EmitStrategy::Nested => "nested",
            EmitStrategy::Flat => "flat",
        };
        let summary = GenerateSummary::from_unit(
            &unit,
            input.root.display().to_string(),
            input.base_url.clone(),
            output.display().to_string(),
            strategy.to_string(),
        );
        if format == "json" {
            format_generate_summary_json(&summary)
        } else {
            Ok(format_generate_summary_text(&summary))
        }
    }
}
