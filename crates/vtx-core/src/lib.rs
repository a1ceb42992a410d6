#![deny(missing_docs)]
#![doc = "Core parameter types, the common binding and structured errors for vertex smearing configuration."]

pub mod binding;
pub mod errors;
pub mod params;
pub mod provenance;

pub use binding::{CommonBinding, SmearedConfig, DEFAULT_SOURCE_TAG, MODULE_LABEL};
pub use errors::{ErrorInfo, VtxError};
pub use params::{
    BetaFunctionParams, FlatParams, GaussianParams, SmearingParameters, SmearingVariant,
};
pub use provenance::{Origin, Provenance, SchemaVersion};
