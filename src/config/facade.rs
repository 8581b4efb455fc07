//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::PathclassConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a run started in `project_dir`.
    pub fn load(project_dir: &Path) -> Result<PathclassConfig, ConfigError> {
        MergeService::load(project_dir)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<PathclassConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
