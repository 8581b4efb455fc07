//! Project config file: <project dir>/pathclass.toml

use crate::config::PROJECT_CONFIG_FILE;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

/// Add the project config file; missing is fine.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    project_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = project_dir.join(PROJECT_CONFIG_FILE);
    Ok(builder.add_source(File::from(path).required(false)))
}
