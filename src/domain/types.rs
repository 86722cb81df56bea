//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed by value through the engine
//! - exported to CSV/JSON
//! - reloaded later from a project snapshot

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Relative permeability correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ModelChoice {
    #[value(name = "corey")]
    Corey,
    #[value(name = "pirson")]
    Pirson,
    #[value(name = "wyllie-gardner", alias = "wg")]
    #[serde(rename = "Wyllie-Gardner")]
    WyllieGardner,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 3] = [ModelChoice::Corey, ModelChoice::Pirson, ModelChoice::WyllieGardner];

    /// Human-readable label, also used as the `model` value in exports.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelChoice::Corey => "Corey",
            ModelChoice::Pirson => "Pirson",
            ModelChoice::WyllieGardner => "Wyllie-Gardner",
        }
    }

    /// Resolve a model key (`corey`, `Wyllie-Gardner`, `wyllie_gardner`, ...).
    pub fn from_key(key: &str) -> Result<Self, EngineError> {
        let normalized = key.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "corey" => Ok(ModelChoice::Corey),
            "pirson" => Ok(ModelChoice::Pirson),
            "wyllie-gardner" | "wg" => Ok(ModelChoice::WyllieGardner),
            _ => Err(EngineError::UnknownModel(key.to_string())),
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ModelChoice {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelChoice::from_key(s)
    }
}

/// Which saturation interval the sweep covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SweepBounds {
    /// `[0, 1]`.
    Full,
    /// `[Swc, 1 - Sor]`: only the mobile saturation window.
    Mobile,
}

impl SweepBounds {
    /// Concrete `(lower, upper)` for the given end points.
    pub fn resolve(self, params: &EndpointParameters) -> (f64, f64) {
        match self {
            SweepBounds::Full => (0.0, 1.0),
            SweepBounds::Mobile => (params.swc, 1.0 - params.sor),
        }
    }
}

/// End-point saturations, end-point permeabilities and phase viscosities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EndpointParameters {
    /// Irreducible water saturation.
    pub swc: f64,
    /// Residual oil saturation.
    pub sor: f64,
    /// Water relative permeability at `Sw = 1 - Sor`.
    pub krw0: f64,
    /// Oil relative permeability at `Sw = Swc`.
    pub kro0: f64,
    /// Water viscosity (cP).
    pub mu_w: f64,
    /// Oil viscosity (cP).
    pub mu_o: f64,
}

impl Default for EndpointParameters {
    fn default() -> Self {
        Self {
            swc: 0.2,
            sor: 0.2,
            krw0: 0.3,
            kro0: 0.9,
            mu_w: 0.5,
            mu_o: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreyExponents {
    pub nw: f64,
    pub no: f64,
}

impl Default for CoreyExponents {
    fn default() -> Self {
        Self { nw: 3.0, no: 2.0 }
    }
}

/// One fully computed sample of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub sw: f64,
    pub krw: f64,
    pub kro: f64,
    pub fw: f64,
}

/// Inputs that produced a `ResultTable`, echoed for exports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterEcho {
    pub params: EndpointParameters,
    pub model: ModelChoice,
    /// Exponents the model actually applied (fixed ones for Pirson / Wyllie-Gardner).
    pub exponents: CoreyExponents,
    pub sw_min: f64,
    pub sw_max: f64,
    pub points: usize,
}

/// Ordered curve points (ascending Sw) plus the echoed inputs.
///
/// Only `report::assemble` builds one, so the length invariant always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    points: Vec<CurvePoint>,
    echo: ParameterEcho,
}

impl ResultTable {
    pub(crate) fn new(points: Vec<CurvePoint>, echo: ParameterEcho) -> Self {
        Self { points, echo }
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn echo(&self) -> &ParameterEcho {
        &self.echo
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn sw(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.sw).collect()
    }

    pub fn krw(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.krw).collect()
    }

    pub fn kro(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.kro).collect()
    }

    pub fn fw(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.fw).collect()
    }
}

/// A single compute request.
///
/// Built once from CLI flags (or a reloaded project) and passed by reference
/// into the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfig {
    pub params: EndpointParameters,
    pub model: ModelChoice,
    /// Requested exponents; only Corey honours them.
    pub exponents: CoreyExponents,
    pub bounds: SweepBounds,
    pub points: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            params: EndpointParameters::default(),
            model: ModelChoice::Corey,
            exponents: CoreyExponents::default(),
            bounds: SweepBounds::Full,
            points: 201,
        }
    }
}

/// A saved project file (JSON).
///
/// `results` is columnar: one array per field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(default)]
    pub tool: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    pub params: ProjectParams,
    pub results: ProjectResults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectParams {
    pub mu_w: f64,
    pub mu_o: f64,
    #[serde(rename = "Swc")]
    pub swc: f64,
    #[serde(rename = "Sor")]
    pub sor: f64,
    pub krw0: f64,
    pub kro0: f64,
    /// Kept as a string so unknown keys surface as `EngineError::UnknownModel`.
    pub model: String,
    pub nw: f64,
    pub no: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectResults {
    #[serde(rename = "Sw")]
    pub sw: Vec<f64>,
    pub krw: Vec<f64>,
    pub kro: Vec<f64>,
    pub fw: Vec<f64>,
}
