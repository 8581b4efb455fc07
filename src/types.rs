//! Core types shared by the emitters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a generated container (class).
///
/// The root container is named after the sanitized root directory; every
/// other container carries a minted `folder_NNN` name unique within one run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(String);

impl ContainerId {
    /// Minted container name for the given counter value: `folder_` plus at
    /// least three zero-padded digits.
    pub fn minted(counter: u32) -> Self {
        ContainerId(format!("folder_{:03}", counter))
    }

    /// Wrap an already sanitized identifier.
    pub fn named(identifier: impl Into<String>) -> Self {
        ContainerId(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the directory tree is laid out in the generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmitStrategy {
    /// One nested class per retained subdirectory.
    #[default]
    Nested,
    /// A single class with path-prefixed members.
    Flat,
}

/// What to do when two siblings sanitize to the same member name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Append `_2`, `_3`, ... until the name is free.
    #[default]
    Suffix,
    /// Abort the run.
    Error,
    /// Emit duplicates unchanged.
    Allow,
}

impl std::str::FromStr for EmitStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nested" => Ok(EmitStrategy::Nested),
            "flat" => Ok(EmitStrategy::Flat),
            other => Err(format!(
                "Invalid strategy: {} (must be 'nested' or 'flat')",
                other
            )),
        }
    }
}

impl std::str::FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "suffix" => Ok(CollisionPolicy::Suffix),
            "error" => Ok(CollisionPolicy::Error),
            "allow" => Ok(CollisionPolicy::Allow),
            other => Err(format!(
                "Invalid collision policy: {} (must be 'suffix', 'error', or 'allow')",
                other
            )),
        }
    }
}
