//! Effective (normalized) saturation.
//!
//! All three forms share one discipline:
//!
//! - the denominator is floored at `EPS`, so `Swc + Sor = 1` yields a finite value
//! - the result is clamped to `[0, 1]`
//! - NaN input maps to `0`
//!
//! - `S*  = (Sw - Swc) / (1 - Swc - Sor)` (combined, used by every model here)
//! - `Sw* = (Sw - Swc) / (1 - Swc)`
//! - `So* = (1 - Sw - Sor) / (1 - Swc - Sor)`

/// Floor substituted for a degenerate (zero or negative) denominator.
pub const EPS: f64 = 1e-12;

/// Combined effective saturation `S*`.
///
/// Exactly `0` at `Sw <= Swc` and exactly `1` at `Sw >= 1 - Sor`.
pub fn normalize(sw: f64, swc: f64, sor: f64) -> f64 {
    if sw.is_nan() {
        return 0.0;
    }
    if sw <= swc {
        return 0.0;
    }
    if sw >= 1.0 - sor {
        return 1.0;
    }
    clamp_unit((sw - swc) / floor_denominator(1.0 - swc - sor))
}

/// Water-based effective saturation `Sw*`.
pub fn normalize_water(sw: f64, swc: f64) -> f64 {
    if sw.is_nan() {
        return 0.0;
    }
    clamp_unit((sw - swc) / floor_denominator(1.0 - swc))
}

/// Oil-based effective saturation `So*`.
pub fn normalize_oil(sw: f64, swc: f64, sor: f64) -> f64 {
    if sw.is_nan() {
        return 0.0;
    }
    clamp_unit((1.0 - sw - sor) / floor_denominator(1.0 - swc - sor))
}

/// Elementwise `normalize` over a saturation sweep.
pub fn normalize_all(sw: &[f64], swc: f64, sor: f64) -> Vec<f64> {
    sw.iter().map(|&s| normalize(s, swc, sor)).collect()
}

fn floor_denominator(denom: f64) -> f64 {
    if denom.is_nan() { EPS } else { denom.max(EPS) }
}

fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}
