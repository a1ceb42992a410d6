//! Common binding and the merged configuration handed to the vertex generator.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, VtxError};
use crate::params::{SmearingParameters, SmearingVariant};

/// Module label under which the generator reads its configuration.
pub const MODULE_LABEL: &str = "VtxSmeared";

/// Input tag used when the caller does not name one.
pub const DEFAULT_SOURCE_TAG: &str = "generator";

/// Parameters shared by every smearing model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonBinding {
    /// Input tag of the upstream product the smearing is applied to.
    pub src: String,
}

impl CommonBinding {
    /// Creates a binding for the given input tag.
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }
}

impl Default for CommonBinding {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_TAG)
    }
}

/// One parameter set merged with the common binding.
///
/// Serializes flat: `label`, the generator `type`, every model field and
/// `src` share one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmearedConfig {
    /// Module label; always [`MODULE_LABEL`] for configurations built here.
    pub label: String,
    /// Selected model parameters.
    #[serde(flatten)]
    pub parameters: SmearingParameters,
    /// Shared input binding.
    #[serde(flatten)]
    pub common: CommonBinding,
}

impl SmearedConfig {
    /// Merges a parameter record with a common binding under [`MODULE_LABEL`].
    pub fn new(parameters: SmearingParameters, common: CommonBinding) -> Self {
        Self {
            label: MODULE_LABEL.to_string(),
            parameters,
            common,
        }
    }

    /// Model of the merged parameters.
    pub fn variant(&self) -> SmearingVariant {
        self.parameters.variant()
    }

    /// Generator that consumes this configuration.
    pub fn generator(&self) -> &'static str {
        self.parameters.generator()
    }

    /// Checks the label, the input tag and the parameter ranges.
    pub fn validate(&self) -> Result<(), VtxError> {
        if self.label != MODULE_LABEL {
            return Err(VtxError::InvalidLabel(
                ErrorInfo::new("invalid-label", "configuration label is not accepted")
                    .with_context("label", self.label.clone())
                    .with_hint(format!("the label must be {MODULE_LABEL}")),
            ));
        }
        if self.common.src.trim().is_empty() {
            return Err(VtxError::InvalidParameter(
                ErrorInfo::new("empty-source", "src input tag must not be empty")
                    .with_context("field", "src"),
            ));
        }
        self.parameters.validate()
    }
}
