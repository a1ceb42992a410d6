use serde::Serialize;
use sha2::{Digest, Sha256};
use vtx_core::errors::VtxError;
use vtx_core::SmearedConfig;

use crate::catalog::Catalog;
use crate::serde_io::to_canonical_json_bytes;

/// Computes a stable hexadecimal hash for the provided serializable payload.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, VtxError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}

/// Canonical hash of a merged configuration.
pub fn config_hash(config: &SmearedConfig) -> Result<String, VtxError> {
    stable_hash_string(config)
}

/// Canonical hash over every entry of a catalog, in definition order.
pub fn catalog_hash(catalog: &Catalog) -> Result<String, VtxError> {
    let entries: Vec<_> = catalog.entries().collect();
    stable_hash_string(&entries)
}
