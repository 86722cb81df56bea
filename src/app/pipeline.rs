//! Shared compute pipeline used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! grid -> model -> fractional flow -> result table
//!
//! The subcommands can then focus on presentation (printing vs exporting).

use rayon::prelude::*;

use crate::domain::{ParameterEcho, ResultTable, RunConfig};
use crate::error::AppError;
use crate::math::grid;
use crate::models::{RelPermModel, fractional_flow};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub config: RunConfig,
    pub model: RelPermModel,
    pub table: ResultTable,
}

/// Execute the full pipeline for one compute request.
pub fn run(config: &RunConfig) -> Result<RunOutput, AppError> {
    let params = config.params;

    // 1) Saturation sweep.
    let (lower, upper) = config.bounds.resolve(&params);
    let sw = grid::build(lower, upper, config.points)?;
    log::debug!("sweep: {} points over [{lower}, {upper}]", sw.len());

    // 2) Relative permeabilities for the selected correlation.
    let model = RelPermModel::new(config.model, config.exponents);
    let (krw, kro) = model.evaluate(&sw, &params);
    log::debug!("evaluated {} model, exponents {:?}", config.model, model.applied_exponents());

    // 3) Fractional flow.
    let fw = fractional_flow(&krw, &kro, params.mu_w, params.mu_o)?;

    // 4) Assemble the table.
    let echo = ParameterEcho {
        params,
        model: config.model,
        exponents: model.applied_exponents(),
        sw_min: lower,
        sw_max: upper,
        points: sw.len(),
    };
    let table = crate::report::assemble(&sw, &krw, &kro, &fw, echo)?;
    log::info!("computed {} curve points with the {} model", table.len(), config.model);

    Ok(RunOutput {
        config: *config,
        model,
        table,
    })
}

/// Execute independent compute requests in parallel.
///
/// Outputs keep the order of `configs`; the first failure is returned.
pub fn run_batch(configs: &[RunConfig]) -> Result<Vec<RunOutput>, AppError> {
    configs.par_iter().map(run).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CoreyExponents, EndpointParameters, ModelChoice, SweepBounds};

    #[test]
    fn default_run_has_201_ordered_points() {
        let out = run(&RunConfig::default()).unwrap();
        assert_eq!(out.table.len(), 201);
        let sw = out.table.sw();
        assert_eq!(sw[0], 0.0);
        assert_eq!(sw[200], 1.0);
        assert!(sw.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn corey_scenario_at_sixty_percent() {
        let config = RunConfig {
            params: EndpointParameters { swc: 0.2, sor: 0.2, krw0: 0.3, kro0: 0.9, mu_w: 0.5, mu_o: 5.0 },
            model: ModelChoice::Corey,
            exponents: CoreyExponents { nw: 3.0, no: 2.0 },
            bounds: SweepBounds::Full,
            points: 201,
        };
        let out = run(&config).unwrap();
        let p = out.table.points()[120];
        assert!((p.sw - 0.6).abs() < 1e-12);
        assert!((p.krw - 0.0889).abs() < 1e-4, "krw={}", p.krw);
        assert!((p.kro - 0.1).abs() < 1e-9, "kro={}", p.kro);
        assert!((p.fw - 0.8990).abs() < 1e-3, "fw={}", p.fw);
    }

    #[test]
    fn mobile_sweep_hits_end_points_exactly() {
        let config = RunConfig { bounds: SweepBounds::Mobile, ..RunConfig::default() };
        let out = run(&config).unwrap();
        let first = out.table.points()[0];
        let last = *out.table.points().last().unwrap();

        assert_eq!(first.sw, 0.2);
        assert_eq!((first.krw, first.kro, first.fw), (0.0, 0.9, 0.0));

        assert_eq!(last.sw, 0.8);
        assert_eq!((last.krw, last.kro, last.fw), (0.3, 0.0, 1.0));
    }

    #[test]
    fn fixed_models_echo_their_own_exponents() {
        let config = RunConfig {
            model: ModelChoice::Pirson,
            exponents: CoreyExponents { nw: 9.0, no: 9.0 },
            ..RunConfig::default()
        };
        let out = run(&config).unwrap();
        assert_eq!(out.table.echo().exponents, CoreyExponents { nw: 2.0, no: 2.0 });
        assert_eq!(out.model, RelPermModel::Pirson);
    }

    #[test]
    fn degenerate_window_full_sweep_is_finite() {
        let config = RunConfig {
            params: EndpointParameters { swc: 0.5, sor: 0.5, ..EndpointParameters::default() },
            ..RunConfig::default()
        };
        let out = run(&config).unwrap();
        for p in out.table.points() {
            assert!(p.krw.is_finite() && p.kro.is_finite() && p.fw.is_finite());
            assert!((0.0..=1.0).contains(&p.fw));
        }
    }

    #[test]
    fn degenerate_window_mobile_sweep_is_an_invalid_range() {
        let config = RunConfig {
            params: EndpointParameters { swc: 0.5, sor: 0.5, ..EndpointParameters::default() },
            bounds: SweepBounds::Mobile,
            ..RunConfig::default()
        };
        let err = run(&config).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn zero_end_points_give_zero_fractional_flow() {
        let config = RunConfig {
            params: EndpointParameters { krw0: 0.0, kro0: 0.0, ..EndpointParameters::default() },
            ..RunConfig::default()
        };
        let out = run(&config).unwrap();
        assert!(out.table.fw().iter().all(|&fw| fw == 0.0));
    }

    #[test]
    fn batch_matches_individual_runs_in_order() {
        let configs: Vec<RunConfig> = ModelChoice::ALL
            .iter()
            .map(|&model| RunConfig { model, ..RunConfig::default() })
            .collect();
        let batch = run_batch(&configs).unwrap();
        assert_eq!(batch.len(), 3);
        for (out, config) in batch.iter().zip(&configs) {
            assert_eq!(out.table.echo().model, config.model);
            assert_eq!(out.table, run(config).unwrap().table);
        }
    }

    #[test]
    fn batch_surfaces_failures() {
        let configs = [RunConfig::default(), RunConfig { points: 1, ..RunConfig::default() }];
        assert!(run_batch(&configs).is_err());
    }
}
