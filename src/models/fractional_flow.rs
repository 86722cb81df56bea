//! Water fractional flow from relative permeabilities.
//!
//! ```text
//! λw = krw / μw,  λo = kro / μo
//! fw = λw / (λw + λo)
//! ```
//!
//! When both mobilities vanish the quotient is `0/0`; such samples (and any
//! non-finite result) are reported as `fw = 0`. Viscosities are validated
//! upstream and not re-checked here.

use crate::error::EngineError;

/// `fw` at a single sample.
pub fn fractional_flow_at(krw: f64, kro: f64, mu_w: f64, mu_o: f64) -> f64 {
    let lambda_w = krw / mu_w;
    let lambda_o = kro / mu_o;
    let fw = lambda_w / (lambda_w + lambda_o);
    if fw.is_finite() { fw.clamp(0.0, 1.0) } else { 0.0 }
}

/// Elementwise `fw` over paired `krw` / `kro` arrays.
pub fn fractional_flow(krw: &[f64], kro: &[f64], mu_w: f64, mu_o: f64) -> Result<Vec<f64>, EngineError> {
    if krw.len() != kro.len() {
        return Err(EngineError::LengthMismatch {
            context: "fractional flow inputs",
            expected: krw.len(),
            actual: kro.len(),
        });
    }
    Ok(krw
        .iter()
        .zip(kro)
        .map(|(&w, &o)| fractional_flow_at(w, o, mu_w, mu_o))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CoreyExponents, EndpointParameters, ModelChoice};
    use crate::math::grid;
    use crate::models::RelPermModel;

    #[test]
    fn interior_scenario() {
        let krw = 0.3 * (2.0f64 / 3.0).powi(3);
        let kro = 0.9 * (1.0f64 / 3.0).powi(2);
        let fw = fractional_flow_at(krw, kro, 0.5, 5.0);
        assert!((fw - 0.8989).abs() < 1e-3, "fw={fw}");
        let expected = (krw / 0.5) / (krw / 0.5 + kro / 5.0);
        assert!((fw - expected).abs() < 1e-15);
    }

    #[test]
    fn end_point_samples() {
        assert_eq!(fractional_flow_at(0.0, 0.9, 0.5, 5.0), 0.0);
        assert_eq!(fractional_flow_at(0.3, 0.0, 0.5, 5.0), 1.0);
    }

    #[test]
    fn zero_mobilities_give_zero() {
        assert_eq!(fractional_flow_at(0.0, 0.0, 0.5, 5.0), 0.0);
        let fw = fractional_flow(&[0.0, 0.0], &[0.0, 0.0], 1.0, 1.0).unwrap();
        assert_eq!(fw, vec![0.0, 0.0]);
    }

    #[test]
    fn non_finite_results_are_replaced() {
        assert_eq!(fractional_flow_at(f64::INFINITY, 0.5, 1.0, 1.0), 0.0);
        assert_eq!(fractional_flow_at(f64::NAN, 0.5, 1.0, 1.0), 0.0);
        assert_eq!(fractional_flow_at(0.5, 0.5, 0.0, 0.0), 0.0);
    }

    #[test]
    fn mismatched_inputs_are_rejected() {
        let err = fractional_flow(&[0.1, 0.2], &[0.3], 1.0, 1.0).unwrap_err();
        assert!(matches!(err, EngineError::LengthMismatch { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn corey_with_equal_exponents_is_monotone() {
        let params = EndpointParameters::default();
        let sw = grid::build(0.0, 1.0, 201).unwrap();
        for n in [1.0, 2.0, 3.0, 4.0] {
            let model = RelPermModel::new(ModelChoice::Corey, CoreyExponents { nw: n, no: n });
            let (krw, kro) = model.evaluate(&sw, &params);
            let fw = fractional_flow(&krw, &kro, params.mu_w, params.mu_o).unwrap();
            assert_eq!(fw[0], 0.0);
            assert_eq!(fw[200], 1.0);
            for i in 1..fw.len() {
                assert!(fw[i] >= fw[i - 1], "n={n} i={i}: {} < {}", fw[i], fw[i - 1]);
                assert!((0.0..=1.0).contains(&fw[i]));
            }
        }
    }
}
