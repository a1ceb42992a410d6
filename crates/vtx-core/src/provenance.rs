//! Provenance and schema descriptors attached to exported configurations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Where a selected parameter set was defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "path", rename_all = "kebab-case")]
pub enum Origin {
    /// Compiled into the built-in catalog.
    #[default]
    Builtin,
    /// Loaded from a user catalog file at the given path.
    File(String),
}

/// Provenance information attached to every exported configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Short scenario name that was requested.
    pub scenario: String,
    /// Long parameter-set name of the selected entry.
    pub parameter_set: String,
    /// Catalog the entry came from.
    pub origin: Origin,
    /// Version map for the tools that assembled the configuration.
    pub tool_versions: BTreeMap<String, String>,
}
