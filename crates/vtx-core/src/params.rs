//! Parameter records for the Gaussian, flat and beta-function smearing models.
//!
//! Field names serialize in the form the external vertex generators read them
//! (`MeanX`, `BetaStar`, `X0`, ...). Lengths are centimetres, angles radians
//! and time offsets nanoseconds; nothing here converts units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, VtxError};

/// Gaussian smearing around a fixed mean position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GaussianParams {
    /// Mean vertex position along x (cm).
    pub mean_x: f64,
    /// Mean vertex position along y (cm).
    pub mean_y: f64,
    /// Mean vertex position along z (cm).
    pub mean_z: f64,
    /// Spread along x (cm).
    pub sigma_x: f64,
    /// Spread along y (cm).
    pub sigma_y: f64,
    /// Spread along z (cm).
    pub sigma_z: f64,
    /// Time offset applied to the vertex (ns).
    pub time_offset: f64,
}

impl GaussianParams {
    /// Returns the fields in generator order together with their names.
    pub fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("MeanX", self.mean_x),
            ("MeanY", self.mean_y),
            ("MeanZ", self.mean_z),
            ("SigmaX", self.sigma_x),
            ("SigmaY", self.sigma_y),
            ("SigmaZ", self.sigma_z),
            ("TimeOffset", self.time_offset),
        ]
    }

    /// Rejects non-finite values and negative resolutions.
    pub fn validate(&self) -> Result<(), VtxError> {
        check_finite(&self.fields())?;
        for (axis, field, sigma) in [
            ("X", "SigmaX", self.sigma_x),
            ("Y", "SigmaY", self.sigma_y),
            ("Z", "SigmaZ", self.sigma_z),
        ] {
            if sigma < 0.0 {
                return Err(invalid(
                    "negative-sigma",
                    format!("illegal resolution in {axis} ({field} is negative)"),
                    field,
                    sigma,
                ));
            }
        }
        Ok(())
    }
}

/// Uniform smearing inside an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlatParams {
    /// Lower bound along x (cm).
    pub min_x: f64,
    /// Upper bound along x (cm).
    pub max_x: f64,
    /// Lower bound along y (cm).
    pub min_y: f64,
    /// Upper bound along y (cm).
    pub max_y: f64,
    /// Lower bound along z (cm).
    pub min_z: f64,
    /// Upper bound along z (cm).
    pub max_z: f64,
    /// Time offset applied to the vertex (ns).
    pub time_offset: f64,
}

impl FlatParams {
    /// Returns the fields in generator order together with their names.
    pub fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("MinX", self.min_x),
            ("MaxX", self.max_x),
            ("MinY", self.min_y),
            ("MaxY", self.max_y),
            ("MinZ", self.min_z),
            ("MaxZ", self.max_z),
            ("TimeOffset", self.time_offset),
        ]
    }

    /// Rejects non-finite values and inverted ranges.
    pub fn validate(&self) -> Result<(), VtxError> {
        check_finite(&self.fields())?;
        for (axis, min, max) in [
            ("X", self.min_x, self.max_x),
            ("Y", self.min_y, self.max_y),
            ("Z", self.min_z, self.max_z),
        ] {
            if min > max {
                return Err(VtxError::InvalidParameter(
                    ErrorInfo::new(
                        "inverted-range",
                        format!("Min{axis} exceeds Max{axis}"),
                    )
                    .with_context("min", min.to_string())
                    .with_context("max", max.to_string())
                    .with_context("axis", axis),
                ));
            }
        }
        Ok(())
    }
}

/// Smearing derived from accelerator optics at the interaction point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BetaFunctionParams {
    /// Half crossing angle of the beams (rad).
    pub phi: f64,
    /// Beta function at the interaction point (cm).
    pub beta_star: f64,
    /// Unnormalised transverse emittance (cm).
    pub emittance: f64,
    /// Angle of the crossing plane, 0 meaning the XZ plane (rad).
    pub alpha: f64,
    /// Longitudinal bunch spread (cm).
    pub sigma_z: f64,
    /// Time offset applied to the vertex (ns).
    pub time_offset: f64,
    /// Beam spot offset along x (cm).
    pub x0: f64,
    /// Beam spot offset along y (cm).
    pub y0: f64,
    /// Beam spot offset along z (cm).
    pub z0: f64,
}

impl BetaFunctionParams {
    /// Returns the fields in generator order together with their names.
    pub fn fields(&self) -> [(&'static str, f64); 9] {
        [
            ("Phi", self.phi),
            ("BetaStar", self.beta_star),
            ("Emittance", self.emittance),
            ("Alpha", self.alpha),
            ("SigmaZ", self.sigma_z),
            ("TimeOffset", self.time_offset),
            ("X0", self.x0),
            ("Y0", self.y0),
            ("Z0", self.z0),
        ]
    }

    /// Transverse beam size at the interaction point, `sqrt(emittance * beta_star)`, in cm.
    pub fn transverse_beam_size(&self) -> f64 {
        (self.emittance * self.beta_star).sqrt()
    }

    /// Rejects non-finite values, a non-positive beta-star and negative spreads.
    pub fn validate(&self) -> Result<(), VtxError> {
        check_finite(&self.fields())?;
        if self.beta_star <= 0.0 {
            return Err(invalid(
                "non-positive-beta-star",
                "BetaStar must be strictly positive",
                "BetaStar",
                self.beta_star,
            ));
        }
        if self.emittance < 0.0 {
            return Err(invalid(
                "negative-emittance",
                "Emittance must not be negative",
                "Emittance",
                self.emittance,
            ));
        }
        if self.sigma_z < 0.0 {
            return Err(invalid(
                "negative-sigma",
                "illegal resolution in Z (SigmaZ is negative)",
                "SigmaZ",
                self.sigma_z,
            ));
        }
        Ok(())
    }
}

/// The three smearing models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SmearingVariant {
    /// Gaussian spreads around a mean.
    Gaussian,
    /// Uniform box.
    Flat,
    /// Optics-derived beta-function model.
    BetaFunction,
}

impl SmearingVariant {
    /// All variants in catalog order.
    pub const ALL: [SmearingVariant; 3] = [
        SmearingVariant::Gaussian,
        SmearingVariant::Flat,
        SmearingVariant::BetaFunction,
    ];

    /// Short kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SmearingVariant::Gaussian => "gaussian",
            SmearingVariant::Flat => "flat",
            SmearingVariant::BetaFunction => "beta-function",
        }
    }

    /// Name of the external generator that consumes this model.
    pub fn generator(&self) -> &'static str {
        match self {
            SmearingVariant::Gaussian => "GaussEvtVtxGenerator",
            SmearingVariant::Flat => "FlatEvtVtxGenerator",
            SmearingVariant::BetaFunction => "BetafuncEvtVtxGenerator",
        }
    }
}

impl fmt::Display for SmearingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SmearingVariant {
    type Err = VtxError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SmearingVariant::ALL
            .into_iter()
            .find(|variant| value == variant.as_str() || value == variant.generator())
            .ok_or_else(|| {
                VtxError::Serde(
                    ErrorInfo::new("unknown-variant", "unrecognised smearing variant")
                        .with_context("value", value)
                        .with_hint("expected one of gaussian, flat, beta-function"),
                )
            })
    }
}

/// A parameter record for one of the smearing models.
///
/// Serialized internally tagged: the `type` key holds the generator name and
/// the model's fields sit beside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SmearingParameters {
    /// Gaussian model.
    #[serde(rename = "GaussEvtVtxGenerator")]
    Gaussian(GaussianParams),
    /// Flat model.
    #[serde(rename = "FlatEvtVtxGenerator")]
    Flat(FlatParams),
    /// Beta-function model.
    #[serde(rename = "BetafuncEvtVtxGenerator")]
    BetaFunction(BetaFunctionParams),
}

impl SmearingParameters {
    /// Returns the model this record belongs to.
    pub fn variant(&self) -> SmearingVariant {
        match self {
            SmearingParameters::Gaussian(_) => SmearingVariant::Gaussian,
            SmearingParameters::Flat(_) => SmearingVariant::Flat,
            SmearingParameters::BetaFunction(_) => SmearingVariant::BetaFunction,
        }
    }

    /// Name of the generator that consumes this record.
    pub fn generator(&self) -> &'static str {
        self.variant().generator()
    }

    /// Time offset shared by every model (ns).
    pub fn time_offset(&self) -> f64 {
        match self {
            SmearingParameters::Gaussian(params) => params.time_offset,
            SmearingParameters::Flat(params) => params.time_offset,
            SmearingParameters::BetaFunction(params) => params.time_offset,
        }
    }

    /// Named fields in generator order.
    pub fn fields(&self) -> Vec<(&'static str, f64)> {
        match self {
            SmearingParameters::Gaussian(params) => params.fields().to_vec(),
            SmearingParameters::Flat(params) => params.fields().to_vec(),
            SmearingParameters::BetaFunction(params) => params.fields().to_vec(),
        }
    }

    /// Looks up a single field by its generator name.
    pub fn field(&self, name: &str) -> Option<f64> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Returns the beta-function record, if this is one.
    pub fn as_beta_function(&self) -> Option<&BetaFunctionParams> {
        match self {
            SmearingParameters::BetaFunction(params) => Some(params),
            _ => None,
        }
    }

    /// Runs the range checks for the underlying model.
    pub fn validate(&self) -> Result<(), VtxError> {
        match self {
            SmearingParameters::Gaussian(params) => params.validate(),
            SmearingParameters::Flat(params) => params.validate(),
            SmearingParameters::BetaFunction(params) => params.validate(),
        }
    }
}

fn check_finite(fields: &[(&'static str, f64)]) -> Result<(), VtxError> {
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some((field, value)) => Err(invalid(
            "non-finite",
            "parameter value must be finite",
            field,
            *value,
        )),
        None => Ok(()),
    }
}

fn invalid(code: &str, message: impl Into<String>, field: &str, value: f64) -> VtxError {
    VtxError::InvalidParameter(
        ErrorInfo::new(code, message)
            .with_context("field", field)
            .with_context("value", value.to_string()),
    )
}
