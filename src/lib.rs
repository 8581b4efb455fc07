//! Pathclass: Directory Trees as Typed Asset URLs
//!
//! Walks a local directory tree and emits C# source in which every file is a
//! string constant holding its URL under a base URL, so static assets can be
//! referenced through compile-time-checked names instead of path strings.

pub mod config;
pub mod emit;
pub mod error;
pub mod ident;
pub mod logging;
pub mod paths;
pub mod tooling;
pub mod tree;
pub mod types;

pub use emit::{generate, generate_from_source, EmitOptions, GeneratedUnit, GenerationStats};
pub use error::{ApiError, ReadFailure};
pub use ident::{sanitize, IdentifierRules};
