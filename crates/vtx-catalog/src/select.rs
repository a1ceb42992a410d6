use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use vtx_core::errors::{ErrorInfo, VtxError};
use vtx_core::{CommonBinding, SmearedConfig, DEFAULT_SOURCE_TAG};

use crate::catalog::Catalog;
use crate::serde_io::from_yaml_str;

/// Merges the named parameter set with the common binding.
///
/// Fails with [`VtxError::UnknownScenario`] when the name is not in the
/// catalog, and with [`VtxError::InvalidParameter`] when the binding is
/// unusable (an empty `src`). No partial configuration is ever produced.
pub fn select(
    catalog: &Catalog,
    scenario: &str,
    common: &CommonBinding,
) -> Result<SmearedConfig, VtxError> {
    let entry = catalog.get(scenario)?;
    debug!(
        "selected {} ({}) with src={}",
        entry.name(),
        entry.parameters().generator(),
        common.src
    );
    let config = SmearedConfig::new(*entry.parameters(), common.clone());
    config
        .validate()
        .map_err(|err| scenario_context(err, entry.name()))?;
    Ok(config)
}

fn scenario_context(err: VtxError, scenario: &str) -> VtxError {
    match err {
        VtxError::InvalidParameter(info) => {
            VtxError::InvalidParameter(info.with_context("scenario", scenario))
        }
        other => other,
    }
}

/// YAML selection file: which scenario to bind and against which input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Scenario or parameter-set name.
    pub scenario: String,
    /// Input tag for the common binding.
    #[serde(default = "default_src")]
    pub src: String,
    /// Optional user catalog, relative to the selection file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

fn default_src() -> String {
    DEFAULT_SOURCE_TAG.to_string()
}

impl SelectionConfig {
    /// Selection of `scenario` against the default input tag.
    pub fn new(scenario: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            src: default_src(),
            catalog: None,
        }
    }

    /// Parses a selection from YAML text.
    pub fn parse(yaml: &str) -> Result<Self, VtxError> {
        from_yaml_str(yaml)
    }

    /// Reads a selection file; a relative `catalog` path is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, VtxError> {
        let text = fs::read_to_string(path).map_err(|err| {
            VtxError::Io(
                ErrorInfo::new("selection-read", "failed to read selection file")
                    .with_context("path", path.display().to_string())
                    .with_hint(err.to_string()),
            )
        })?;
        let mut config = Self::parse(&text)?;
        if let (Some(catalog), Some(parent)) = (config.catalog.as_ref(), path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(parent.join(catalog));
            }
        }
        Ok(config)
    }

    /// Common binding described by this selection.
    pub fn common(&self) -> CommonBinding {
        CommonBinding::new(self.src.clone())
    }

    /// Builds the catalog this selection reads from: built-ins plus the optional user file.
    pub fn catalog(&self) -> Result<Catalog, VtxError> {
        match &self.catalog {
            Some(path) => Catalog::builtin().with_file(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Resolves the selection against `catalog`.
    pub fn resolve(&self, catalog: &Catalog) -> Result<SmearedConfig, VtxError> {
        select(catalog, &self.scenario, &self.common())
    }
}
