#![deny(missing_docs)]
#![doc = "Catalog of named vertex smearing parameter sets and the binding that merges one with the common input tag."]

mod builtin;
/// Scenario catalog and lookup.
pub mod catalog;
/// Export documents with provenance and hash.
pub mod export;
/// Canonical hashing helpers.
pub mod hash;
/// Selection binding and selection files.
pub mod select;
/// Serde helpers for JSON and YAML artefacts.
#[path = "serde.rs"]
pub mod serde_io;
/// User catalog files.
pub mod user;

pub use catalog::{Catalog, CatalogEntry, PARAMETER_SET_SUFFIX};
pub use export::{export, ExportDocument, EXPORT_SCHEMA};
pub use hash::{catalog_hash, config_hash, stable_hash_string};
pub use select::{select, SelectionConfig};
pub use serde_io::{from_yaml_str, to_canonical_json_bytes, to_yaml_string};
pub use user::{CatalogFile, CatalogFileEntry, CATALOG_SCHEMA};
