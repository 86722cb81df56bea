//! Accepted input ranges for a compute request.
//!
//! These mirror the input widgets of the calculator this tool replaces. The
//! engine itself never rejects a value on these grounds; validation happens
//! once, when a `RunConfig` is built.

use crate::domain::{ModelChoice, RunConfig};
use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn contains(self, value: f64) -> bool {
        value.is_finite() && (self.min..=self.max).contains(&value)
    }
}

pub const VISCOSITY_CP: Bounds = Bounds { min: 0.1, max: 1000.0 };
pub const END_SATURATION: Bounds = Bounds { min: 0.0, max: 0.5 };
pub const END_POINT_KR: Bounds = Bounds { min: 0.0, max: 1.0 };
pub const COREY_EXPONENT: Bounds = Bounds { min: 0.1, max: 10.0 };
pub const MIN_POINTS: usize = 2;

/// Check every field of `config` against its accepted range.
pub fn validate(config: &RunConfig) -> Result<(), AppError> {
    let p = &config.params;
    check("mu_w", p.mu_w, VISCOSITY_CP)?;
    check("mu_o", p.mu_o, VISCOSITY_CP)?;
    check("Swc", p.swc, END_SATURATION)?;
    check("Sor", p.sor, END_SATURATION)?;
    check("krw0", p.krw0, END_POINT_KR)?;
    check("kro0", p.kro0, END_POINT_KR)?;
    // Pirson and Wyllie-Gardner never read the exponent inputs.
    if config.model == ModelChoice::Corey {
        check("nw", config.exponents.nw, COREY_EXPONENT)?;
        check("no", config.exponents.no, COREY_EXPONENT)?;
    }
    if config.points < MIN_POINTS {
        return Err(AppError::new(
            2,
            format!("points = {} is too small (need at least {MIN_POINTS}).", config.points),
        ));
    }
    Ok(())
}

fn check(name: &str, value: f64, bounds: Bounds) -> Result<(), AppError> {
    if bounds.contains(value) {
        return Ok(());
    }
    Err(AppError::new(
        2,
        format!("{name} = {value} is out of bounds [{}, {}].", bounds.min, bounds.max),
    ))
}
