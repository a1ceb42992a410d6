use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use vtx_core::errors::{ErrorInfo, VtxError};
use vtx_core::{Origin, SchemaVersion, SmearingParameters};

use crate::catalog::{Catalog, CatalogEntry};
use crate::serde_io::from_yaml_str;

/// Layout version of [`CatalogFile`]; files with another major version are refused.
pub const CATALOG_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// YAML document adding scenarios to the built-in catalog.
///
/// ```yaml
/// entries:
///   - name: Test13TeV
///     description: hypothetical optics
///     type: BetafuncEvtVtxGenerator
///     Phi: 0.0
///     BetaStar: 80.0
///     Emittance: 2.0e-08
///     Alpha: 0.0
///     SigmaZ: 5.0
///     TimeOffset: 0.0
///     X0: 0.1
///     Y0: 0.1
///     Z0: 0.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Schema of the file layout.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Scenarios defined by the file.
    #[serde(default)]
    pub entries: Vec<CatalogFileEntry>,
}

/// One scenario in a [`CatalogFile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFileEntry {
    /// Short scenario name.
    pub name: String,
    /// Optional free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parameters tagged by generator `type`.
    #[serde(flatten)]
    pub parameters: SmearingParameters,
}

impl CatalogFile {
    /// Parses a catalog file from YAML text.
    pub fn parse(yaml: &str) -> Result<Self, VtxError> {
        let file: Self = from_yaml_str(yaml)?;
        let found = file.schema_version;
        if found.major != CATALOG_SCHEMA.major {
            return Err(VtxError::Serde(
                ErrorInfo::new("unsupported-schema", "catalog file schema is not supported")
                    .with_context(
                        "found",
                        format!("{}.{}.{}", found.major, found.minor, found.patch),
                    )
                    .with_hint(format!("expected major version {}", CATALOG_SCHEMA.major)),
            ));
        }
        Ok(file)
    }

    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> Result<Self, VtxError> {
        let text = fs::read_to_string(path).map_err(|err| {
            VtxError::Io(
                ErrorInfo::new("catalog-read", "failed to read catalog file")
                    .with_context("path", path.display().to_string())
                    .with_hint(err.to_string()),
            )
        })?;
        Self::parse(&text).map_err(|err| match err {
            VtxError::Serde(info) => {
                VtxError::Serde(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Validates every row and converts them into catalog entries.
    pub fn into_entries(self, origin: Origin) -> Result<Vec<CatalogEntry>, VtxError> {
        let mut entries = Vec::with_capacity(self.entries.len());
        for row in self.entries {
            let name = row.name.clone();
            let entry = CatalogEntry::new(row.name, row.description, origin.clone(), row.parameters)
                .map_err(|err| {
                    warn!("rejected catalog entry {name}: {err}");
                    err
                })?;
            if entries.iter().any(|seen: &CatalogEntry| seen.name() == entry.name()) {
                return Err(VtxError::DuplicateScenario(
                    ErrorInfo::new("duplicate-scenario", "scenario defined twice in one file")
                        .with_context("name", name),
                ));
            }
            entries.push(entry);
        }
        Ok(entries)
    }
}

impl Catalog {
    /// Returns this catalog extended with the scenarios of a YAML file.
    pub fn with_file(self, path: &Path) -> Result<Self, VtxError> {
        let file = CatalogFile::load(path)?;
        let origin = Origin::File(path.display().to_string());
        let entries = file.into_entries(origin)?;
        let count = entries.len();
        let catalog = self.with_entries(entries)?;
        info!("loaded {count} scenarios from {}", path.display());
        Ok(catalog)
    }
}
