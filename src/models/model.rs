//! Relative permeability correlations.
//!
//! All three variants share one shape, written in terms of the combined effective
//! saturation `S*` (see `math::normalize`):
//!
//! ```text
//! krw = krw0 * S*^nw
//! kro = kro0 * (1 - S*)^no
//! ```
//!
//! | model          | nw     | no     |
//! |----------------|--------|--------|
//! | Corey          | free   | free   |
//! | Pirson         | 2      | 2      |
//! | Wyllie-Gardner | 1.5    | 1.5    |
//!
//! Only Corey takes external exponents; the other two ignore any supplied.

use crate::domain::{CoreyExponents, EndpointParameters, ModelChoice};
use crate::math::normalize;

pub const PIRSON_EXPONENT: f64 = 2.0;
pub const WYLLIE_GARDNER_EXPONENT: f64 = 1.5;

/// A concrete, ready-to-evaluate correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RelPermModel {
    Corey { nw: f64, no: f64 },
    Pirson,
    WyllieGardner,
}

impl RelPermModel {
    /// Build the model for `choice`. `exponents` only matter for Corey.
    pub fn new(choice: ModelChoice, exponents: CoreyExponents) -> Self {
        match choice {
            ModelChoice::Corey => RelPermModel::Corey {
                nw: exponents.nw,
                no: exponents.no,
            },
            ModelChoice::Pirson => RelPermModel::Pirson,
            ModelChoice::WyllieGardner => RelPermModel::WyllieGardner,
        }
    }

    pub fn choice(&self) -> ModelChoice {
        match self {
            RelPermModel::Corey { .. } => ModelChoice::Corey,
            RelPermModel::Pirson => ModelChoice::Pirson,
            RelPermModel::WyllieGardner => ModelChoice::WyllieGardner,
        }
    }

    /// Exponents this variant actually applies.
    pub fn applied_exponents(&self) -> CoreyExponents {
        match *self {
            RelPermModel::Corey { nw, no } => CoreyExponents { nw, no },
            RelPermModel::Pirson => CoreyExponents {
                nw: PIRSON_EXPONENT,
                no: PIRSON_EXPONENT,
            },
            RelPermModel::WyllieGardner => CoreyExponents {
                nw: WYLLIE_GARDNER_EXPONENT,
                no: WYLLIE_GARDNER_EXPONENT,
            },
        }
    }

    /// `(krw, kro)` at a single saturation.
    pub fn kr_at(&self, sw: f64, params: &EndpointParameters) -> (f64, f64) {
        let s = normalize(sw, params.swc, params.sor);
        let CoreyExponents { nw, no } = self.applied_exponents();
        let krw = bounded(params.krw0 * s.powf(nw), params.krw0);
        let kro = bounded(params.kro0 * (1.0 - s).powf(no), params.kro0);
        (krw, kro)
    }

    /// Elementwise `(krw, kro)` over a saturation sweep; both outputs have `sw.len()` entries.
    pub fn evaluate(&self, sw: &[f64], params: &EndpointParameters) -> (Vec<f64>, Vec<f64>) {
        let mut krw = Vec::with_capacity(sw.len());
        let mut kro = Vec::with_capacity(sw.len());
        for &s in sw {
            let (w, o) = self.kr_at(s, params);
            krw.push(w);
            kro.push(o);
        }
        (krw, kro)
    }
}

/// Clamp into `[0, endpoint]`; a non-finite value collapses to 0.
fn bounded(value: f64, endpoint: f64) -> f64 {
    let upper = endpoint.max(0.0);
    if value.is_finite() { value.clamp(0.0, upper) } else { 0.0 }
}
