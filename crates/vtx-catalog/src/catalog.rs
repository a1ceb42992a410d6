use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use vtx_core::errors::{ErrorInfo, VtxError};
use vtx_core::{Origin, SmearingParameters, SmearingVariant};

use crate::builtin::BUILTIN;

/// Suffix that turns a scenario name into its parameter-set name.
pub const PARAMETER_SET_SUFFIX: &str = "VtxSmearingParameters";

/// A named, immutable parameter set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    origin: Origin,
    #[serde(flatten)]
    parameters: SmearingParameters,
}

impl CatalogEntry {
    /// Builds an entry after checking its name and parameter ranges.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        origin: Origin,
        parameters: SmearingParameters,
    ) -> Result<Self, VtxError> {
        let name = name.into();
        check_name(&name)?;
        parameters.validate().map_err(|err| with_scenario(err, &name))?;
        Ok(Self {
            name,
            description,
            origin,
            parameters,
        })
    }

    /// Short scenario name, e.g. `Early10TeVX322Y100`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Long parameter-set name, e.g. `Early10TeVX322Y100VtxSmearingParameters`.
    pub fn parameter_set_name(&self) -> String {
        format!("{}{}", self.name, PARAMETER_SET_SUFFIX)
    }

    /// Free-form note carried over from the data source.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Where the entry was defined.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// The parameter record.
    pub fn parameters(&self) -> &SmearingParameters {
        &self.parameters
    }

    /// Model of the parameter record.
    pub fn variant(&self) -> SmearingVariant {
        self.parameters.variant()
    }
}

/// Mapping from scenario name to parameter set, in definition order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl Catalog {
    /// Catalog with no entries.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Catalog holding every compiled-in scenario.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|row| {
                let entry = CatalogEntry {
                    name: row.scenario.to_string(),
                    description: row.description.map(str::to_string),
                    origin: Origin::Builtin,
                    parameters: row.parameters,
                };
                (entry.name.clone(), entry)
            })
            .collect();
        Self { entries }
    }

    /// Returns a catalog extended with `entries`, rejecting name collisions.
    pub fn with_entries(
        mut self,
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Result<Self, VtxError> {
        for entry in entries {
            if let Some(existing) = self.entries.get(&entry.name) {
                return Err(VtxError::DuplicateScenario(
                    ErrorInfo::new("duplicate-scenario", "scenario name is already defined")
                        .with_context("name", entry.name.clone())
                        .with_context("existing_origin", origin_label(existing.origin()))
                        .with_context("new_origin", origin_label(entry.origin())),
                ));
            }
            self.entries.insert(entry.name.clone(), entry);
        }
        Ok(self)
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no scenarios.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name` resolves to an entry.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(short_name(name))
    }

    /// Exact-match lookup by scenario or parameter-set name.
    pub fn get(&self, name: &str) -> Result<&CatalogEntry, VtxError> {
        match self.entries.get(short_name(name)) {
            Some(entry) => {
                debug!("resolved scenario {name} to {}", entry.name);
                Ok(entry)
            }
            None => Err(self.unknown(name)),
        }
    }

    /// Scenario names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in definition order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.entries.values()
    }

    /// Entries of a single model.
    pub fn by_variant(
        &self,
        variant: SmearingVariant,
    ) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.entries
            .values()
            .filter(move |entry| entry.variant() == variant)
    }

    fn unknown(&self, name: &str) -> VtxError {
        let wanted = short_name(name).to_ascii_lowercase();
        let hint = match self
            .names()
            .find(|candidate| candidate.to_ascii_lowercase() == wanted)
        {
            Some(candidate) => format!("did you mean {candidate}?"),
            None => "list the available scenarios with `vtx-smear list`".to_string(),
        };
        VtxError::UnknownScenario(
            ErrorInfo::new("unknown-scenario", "scenario is not defined in the catalog")
                .with_context("name", name)
                .with_hint(hint),
        )
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Strips the parameter-set suffix so both name forms resolve alike.
fn short_name(name: &str) -> &str {
    match name.strip_suffix(PARAMETER_SET_SUFFIX) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => name,
    }
}

fn check_name(name: &str) -> Result<(), VtxError> {
    if name.trim().is_empty() {
        return Err(VtxError::InvalidParameter(ErrorInfo::new(
            "empty-name",
            "scenario name must not be empty",
        )));
    }
    if name.trim() != name {
        return Err(VtxError::InvalidParameter(
            ErrorInfo::new(
                "padded-name",
                "scenario name must not have leading or trailing whitespace",
            )
            .with_context("name", name),
        ));
    }
    if name.ends_with(PARAMETER_SET_SUFFIX) {
        return Err(VtxError::InvalidParameter(
            ErrorInfo::new(
                "reserved-suffix",
                "scenario names must not carry the parameter-set suffix",
            )
            .with_context("name", name)
            .with_hint(format!("drop the trailing {PARAMETER_SET_SUFFIX}")),
        ));
    }
    Ok(())
}

fn with_scenario(err: VtxError, name: &str) -> VtxError {
    match err {
        VtxError::InvalidParameter(info) => {
            VtxError::InvalidParameter(info.with_context("scenario", name))
        }
        other => other,
    }
}

fn origin_label(origin: &Origin) -> String {
    match origin {
        Origin::Builtin => "builtin".to_string(),
        Origin::File(path) => path.clone(),
    }
}
