//! Built-in defaults every load starts from.

use crate::emit::DEFAULT_NAMESPACE;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with the scalar defaults. Remaining fields fall back to the
/// serde defaults on the config structs.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("generator.strategy", "nested")?
        .set_default("generator.collisions", "suffix")?
        .set_default("generator.namespace", DEFAULT_NAMESPACE)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
