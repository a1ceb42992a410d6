use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vtx_core::errors::{ErrorInfo, VtxError};
use vtx_core::{CommonBinding, Provenance, SchemaVersion, SmearedConfig};

use crate::catalog::Catalog;
use crate::hash::config_hash;
use crate::select::select;
use crate::serde_io::{from_json_str, from_yaml_str, to_json_string, to_yaml_string};

/// Schema of [`ExportDocument`].
pub const EXPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Merged configuration packaged for the external generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Schema of this document.
    pub schema_version: SchemaVersion,
    /// Where the configuration came from.
    pub provenance: Provenance,
    /// The merged configuration.
    pub config: SmearedConfig,
    /// SHA-256 of the canonical JSON of `config`.
    pub config_hash: String,
}

impl ExportDocument {
    /// Serializes the document as pretty JSON.
    pub fn to_json(&self) -> Result<String, VtxError> {
        to_json_string(self)
    }

    /// Restores a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, VtxError> {
        from_json_str(json)
    }

    /// Serializes the document as YAML.
    pub fn to_yaml(&self) -> Result<String, VtxError> {
        to_yaml_string(self)
    }

    /// Restores a document from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, VtxError> {
        from_yaml_str(yaml)
    }

    /// Validates the configuration and checks the recorded hash.
    pub fn verify(&self) -> Result<(), VtxError> {
        self.config.validate()?;
        let expected = config_hash(&self.config)?;
        if expected != self.config_hash {
            return Err(VtxError::Serde(
                ErrorInfo::new("export-hash-mismatch", "configuration hash does not match")
                    .with_context("recorded", self.config_hash.clone())
                    .with_context("computed", expected),
            ));
        }
        Ok(())
    }
}

/// Selects `scenario` and wraps the result with provenance and hash.
pub fn export(
    catalog: &Catalog,
    scenario: &str,
    common: &CommonBinding,
) -> Result<ExportDocument, VtxError> {
    let config = select(catalog, scenario, common)?;
    let entry = catalog.get(scenario)?;
    let provenance = Provenance {
        scenario: entry.name().to_string(),
        parameter_set: entry.parameter_set_name(),
        origin: entry.origin().clone(),
        tool_versions: tool_versions(),
    };
    let config_hash = config_hash(&config)?;
    Ok(ExportDocument {
        schema_version: EXPORT_SCHEMA,
        provenance,
        config,
        config_hash,
    })
}

fn tool_versions() -> BTreeMap<String, String> {
    [(
        env!("CARGO_PKG_NAME").to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    )]
    .into_iter()
    .collect()
}
