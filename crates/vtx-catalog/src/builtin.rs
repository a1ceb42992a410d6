//! Built-in parameter sets.
//!
//! Values are physics calibration constants, reproduced exactly; units are cm,
//! rad and ns. Beta-function emittances are unnormalised (normalised emittance
//! divided by gamma). Optics for the pp entries follow LHC optics V6.5 at IR5.

use vtx_core::{BetaFunctionParams, FlatParams, GaussianParams, SmearingParameters};

/// One compiled-in catalog row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BuiltinEntry {
    pub scenario: &'static str,
    pub description: Option<&'static str>,
    pub parameters: SmearingParameters,
}

pub(crate) const BUILTIN: &[BuiltinEntry] = &[
    BuiltinEntry {
        scenario: "Gauss",
        description: Some("Gaussian smearing"),
        parameters: SmearingParameters::Gaussian(GaussianParams {
            mean_x: 0.0,
            mean_y: 0.0,
            mean_z: 0.0,
            sigma_x: 0.0015,
            sigma_y: 0.0015,
            sigma_z: 5.3,
            time_offset: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "Flat",
        description: Some("Flat Smearing"),
        parameters: SmearingParameters::Flat(FlatParams {
            min_x: -0.0015,
            max_x: 0.0015,
            min_y: -0.0015,
            max_y: 0.0015,
            min_z: -5.3,
            max_z: 5.3,
            time_offset: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "Early900GeVCollision",
        description: Some("900 GeV collisions, transverse beam size = 293 microns"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 1100.0,
            emittance: 7.82e-07,
            alpha: 0.0,
            sigma_z: 7.4,
            time_offset: 0.0,
            x0: 0.0322,
            y0: 0.0,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "Early2p2TeVCollision",
        description: Some("2.2 TeV collisions, transverse beam size 188 microns"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 1100.0,
            emittance: 3.2e-07,
            alpha: 0.0,
            sigma_z: 5.5,
            time_offset: 0.0,
            x0: 0.0322,
            y0: 0.0,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "Early7TeVCollision",
        description: Some("7 TeV collisions, transverse beam size with betastar=  11m is 105 microns,"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 1100.0,
            emittance: 1.0e-07,
            alpha: 0.0,
            sigma_z: 4.2,
            time_offset: 0.0,
            x0: 0.0322,
            y0: 0.0,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "Nominal7TeVCollision",
        description: Some("7 TeV collisions, transverse beam size with betastar=  2m is  45 microns,"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 200.0,
            emittance: 1.0e-07,
            alpha: 0.0,
            sigma_z: 4.2,
            time_offset: 0.0,
            x0: 0.0322,
            y0: 0.0,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "Realistic900GeVCollision",
        description: Some("900 GeV realistic 2010 collisions, transverse beam size is 200 microns"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 1000.0,
            emittance: 4.17e-07,
            alpha: 0.0,
            sigma_z: 6.17,
            time_offset: 0.0,
            x0: 0.2452,
            y0: 0.3993,
            z0: 0.8222,
        }),
    },
    BuiltinEntry {
        scenario: "Realistic7TeVCollision",
        description: Some("7 TeV realistic collisions, transverse beam size is 43 microns"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 350.0,
            emittance: 0.536e-07,
            alpha: 0.0,
            sigma_z: 6.26,
            time_offset: 0.0,
            x0: 0.2440,
            y0: 0.3929,
            z0: 0.4145,
        }),
    },
    BuiltinEntry {
        scenario: "Realistic7TeV2011Collision",
        description: Some("7 TeV realistic collisions, updated for 2011\nnormalized emittance 2.5 microns, transverse beam size is 32 microns"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 150.0,
            emittance: 0.67e-07,
            alpha: 0.0,
            sigma_z: 5.22,
            time_offset: 0.0,
            x0: 0.2440,
            y0: 0.3929,
            z0: 0.4145,
        }),
    },
    BuiltinEntry {
        scenario: "Realistic2p76TeV2011Collision",
        description: Some("2.76 TeV estimated collisions, based on 7 TeV parameters\nnormalized emittance 2.5 microns, transverse beam size is 50 microns"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 150.0,
            emittance: 1.70e-07,
            alpha: 0.0,
            sigma_z: 5.22,
            time_offset: 0.0,
            x0: 0.2440,
            y0: 0.3929,
            z0: 0.4145,
        }),
    },
    BuiltinEntry {
        scenario: "Realistic8TeVCollision",
        description: Some("8 TeV realistic collisions, transverse beam width size is 26 microns"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 150.0,
            emittance: 0.45e-07,
            alpha: 0.0,
            sigma_z: 6.26,
            time_offset: 0.0,
            x0: 0.244,
            y0: 0.393,
            z0: 0.41,
        }),
    },
    BuiltinEntry {
        scenario: "Early10TeVCollision",
        description: Some("10 TeV collisions, transverse beam size = 46 microns"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 300.0,
            emittance: 7.03e-08,
            alpha: 0.0,
            sigma_z: 3.8,
            time_offset: 0.0,
            x0: 0.0322,
            y0: 0.0,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "Early10TeVX322Y100",
        description: Some("Test offset"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 300.0,
            emittance: 7.03e-08,
            alpha: 0.0,
            sigma_z: 3.8,
            time_offset: 0.0,
            x0: 0.0322,
            y0: 0.0100,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "Early10TeVX322Y250",
        description: Some("Test offset"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 300.0,
            emittance: 7.03e-08,
            alpha: 0.0,
            sigma_z: 3.8,
            time_offset: 0.0,
            x0: 0.0322,
            y0: 0.0250,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "Early10TeVX322Y500",
        description: Some("Test offset"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 300.0,
            emittance: 7.03e-08,
            alpha: 0.0,
            sigma_z: 3.8,
            time_offset: 0.0,
            x0: 0.0322,
            y0: 0.0500,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "Early10TeVX322Y1000",
        description: Some("Test offset"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 300.0,
            emittance: 7.03e-08,
            alpha: 0.0,
            sigma_z: 3.8,
            time_offset: 0.0,
            x0: 0.0322,
            y0: 0.1,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "Early10TeVX322Y5000",
        description: Some("Test offset"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 300.0,
            emittance: 7.03e-08,
            alpha: 0.0,
            sigma_z: 3.8,
            time_offset: 0.0,
            x0: 0.0322,
            y0: 0.5,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "Early10TeVX322Y10000",
        description: Some("Test offset"),
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 300.0,
            emittance: 7.03e-08,
            alpha: 0.0,
            sigma_z: 3.8,
            time_offset: 0.0,
            x0: 0.0322,
            y0: 1.0,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "EarlyCollision",
        description: None,
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 200.0,
            emittance: 5.03e-08,
            alpha: 0.0,
            sigma_z: 5.3,
            time_offset: 0.0,
            x0: 0.0322,
            y0: 0.0,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "NominalCollision",
        description: None,
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.000142,
            beta_star: 55.0,
            emittance: 5.03e-08,
            alpha: 0.0,
            sigma_z: 5.3,
            time_offset: 0.0,
            x0: 0.05,
            y0: 0.0,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "NominalCollision1",
        description: None,
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 55.0,
            emittance: 5.03e-08,
            alpha: 0.0,
            sigma_z: 5.3,
            time_offset: 0.0,
            x0: 0.05,
            y0: 0.025,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "NominalCollision2",
        description: None,
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.000142,
            beta_star: 55.0,
            emittance: 5.03e-08,
            alpha: 0.0,
            sigma_z: 5.3,
            time_offset: 0.0,
            x0: 0.05,
            y0: 0.025,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "NominalCollision3",
        description: None,
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 55.0,
            emittance: 5.03e-08,
            alpha: 0.0,
            sigma_z: 5.3,
            time_offset: 0.0,
            x0: 0.1,
            y0: 0.025,
            z0: 0.0,
        }),
    },
    BuiltinEntry {
        scenario: "NominalCollision4",
        description: None,
        parameters: SmearingParameters::BetaFunction(BetaFunctionParams {
            phi: 0.0,
            beta_star: 55.0,
            emittance: 5.03e-08,
            alpha: 0.0,
            sigma_z: 5.3,
            time_offset: 0.0,
            x0: 0.2,
            y0: 0.025,
            z0: 0.0,
        }),
    },
];
