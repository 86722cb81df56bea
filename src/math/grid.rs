//! Saturation grid generation.
//!
//! Every model is evaluated on the same deterministic, evenly spaced sweep of
//! water saturation values.

use crate::error::EngineError;

/// Generate `count` evenly spaced points between `lower` and `upper` (inclusive).
///
/// The last point is exactly `upper`, so the sweep always reaches the end of
/// the requested interval regardless of rounding in the step.
pub fn build(lower: f64, upper: f64, count: usize) -> Result<Vec<f64>, EngineError> {
    if !(lower.is_finite() && upper.is_finite()) || lower >= upper || count < 2 {
        return Err(EngineError::InvalidRange { lower, upper, count });
    }

    let step = (upper - lower) / (count as f64 - 1.0);
    let mut out = Vec::with_capacity(count);
    for i in 0..count - 1 {
        out.push(lower + step * i as f64);
    }
    out.push(upper);
    Ok(out)
}
