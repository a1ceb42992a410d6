//! Structured error types shared across the vertex smearing crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`VtxError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (scenario names, field values, paths).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for catalog lookup, selection and configuration I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum VtxError {
    /// The requested scenario is not defined in the catalog.
    #[error("unknown scenario: {0}")]
    UnknownScenario(ErrorInfo),
    /// A scenario name is defined more than once.
    #[error("duplicate scenario: {0}")]
    DuplicateScenario(ErrorInfo),
    /// A parameter value is outside its physical range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(ErrorInfo),
    /// A merged configuration carries a module label the consumer rejects.
    #[error("invalid label: {0}")]
    InvalidLabel(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Filesystem errors while reading or writing configuration files.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl VtxError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            VtxError::UnknownScenario(info)
            | VtxError::DuplicateScenario(info)
            | VtxError::InvalidParameter(info)
            | VtxError::InvalidLabel(info)
            | VtxError::Serde(info)
            | VtxError::Io(info) => info,
        }
    }

    /// Returns `true` when the error reports a missing scenario.
    pub fn is_unknown_scenario(&self) -> bool {
        matches!(self, VtxError::UnknownScenario(_))
    }
}
