//! Per-container member name bookkeeping.

use crate::error::ApiError;
use crate::types::CollisionPolicy;
use std::collections::HashSet;
use std::path::Path;

/// Names already declared inside one container.
///
/// Seeded with the container's own identifier, since C# rejects a member
/// named after its enclosing type.
#[derive(Debug)]
pub struct MemberScope {
    container: String,
    used: HashSet<String>,
    policy: CollisionPolicy,
}

impl MemberScope {
    pub fn new(container: &str, policy: CollisionPolicy) -> Self {
        let mut used = HashSet::new();
        used.insert(container.to_string());
        Self {
            container: container.to_string(),
            used,
            policy,
        }
    }

    /// Mark a name as taken without declaring a member (nested class names).
    pub fn reserve(&mut self, name: &str) {
        self.used.insert(name.to_string());
    }

    /// Claim `name` for the entry at `path`, applying the collision policy.
    pub fn claim(&mut self, name: &str, path: &Path) -> Result<String, ApiError> {
        if self.used.insert(name.to_string()) {
            return Ok(name.to_string());
        }

        match self.policy {
            CollisionPolicy::Allow => {
                tracing::debug!(container = %self.container, name, "Duplicate member name emitted");
                Ok(name.to_string())
            }
            CollisionPolicy::Error => Err(ApiError::NameCollision {
                container: self.container.clone(),
                name: name.to_string(),
                path: path.to_path_buf(),
            }),
            CollisionPolicy::Suffix => {
                let mut n = 2;
                loop {
                    let candidate = format!("{}_{}", name, n);
                    if self.used.insert(candidate.clone()) {
                        tracing::debug!(
                            container = %self.container,
                            name,
                            renamed = %candidate,
                            "Renamed colliding member"
                        );
                        return Ok(candidate);
                    }
                    n += 1;
                }
            }
        }
    }
}
