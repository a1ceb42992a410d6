use std::path::Path;

use vtx_catalog::Catalog;
use vtx_core::VtxError;

pub mod list;
pub mod select;
pub mod show;
pub mod validate;
pub mod version;

/// Built-in catalog, extended with `extra` when given.
pub fn load_catalog(extra: Option<&Path>) -> Result<Catalog, VtxError> {
    match extra {
        Some(path) => Catalog::builtin().with_file(path),
        None => Ok(Catalog::builtin()),
    }
}
