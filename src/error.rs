//! Error types for generation, configuration, and output.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error surfaced to callers of the library and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Blank root path or base URL.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Root path does not exist or is not a directory.
    #[error("Directory not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Two siblings sanitize to the same member name and the policy forbids it.
    #[error("Name collision in {container}: member '{name}' already declared (from {})", path.display())]
    NameCollision {
        container: String,
        name: String,
        path: PathBuf,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A directory whose contents could not be listed during traversal.
///
/// Never aborts a run; the emitter turns it into a placeholder line.
#[derive(Debug, Error)]
#[error("Failed to read directory {}: {source}", path.display())]
pub struct ReadFailure {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl ReadFailure {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

impl From<walkdir::Error> for ReadFailure {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_default();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop"));
        Self { path, source }
    }
}
