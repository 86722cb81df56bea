//! Read/write project snapshot JSON files.
//!
//! A project snapshot is the "portable" representation of one computation:
//! - the inputs (`params`), enough to recompute the same curves
//! - the results in columnar form (`results`: one array per field)
//!
//! The schema is defined by `domain::ProjectFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{
    CoreyExponents, EndpointParameters, ModelChoice, ProjectFile, ProjectParams, ProjectResults, ResultTable,
    RunConfig, SweepBounds,
};
use crate::error::AppError;

/// Tolerance used to recognize a `[Swc, 1 - Sor]` sweep in a stored project.
const BOUNDS_TOL: f64 = 1e-9;

/// Build the snapshot for a computed table.
pub fn project_from_table(table: &ResultTable) -> ProjectFile {
    let echo = table.echo();
    let p = &echo.params;
    ProjectFile {
        tool: "relperm".to_string(),
        created: Some(Utc::now()),
        params: ProjectParams {
            mu_w: p.mu_w,
            mu_o: p.mu_o,
            swc: p.swc,
            sor: p.sor,
            krw0: p.krw0,
            kro0: p.kro0,
            model: echo.model.display_name().to_string(),
            nw: echo.exponents.nw,
            no: echo.exponents.no,
        },
        results: ProjectResults {
            sw: table.sw(),
            krw: table.krw(),
            kro: table.kro(),
            fw: table.fw(),
        },
    }
}

/// Write a project JSON file.
pub fn write_project_json(path: &Path, table: &ResultTable) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create project JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &project_from_table(table))
        .map_err(|e| AppError::new(2, format!("Failed to write project JSON: {e}")))?;

    log::info!("wrote project snapshot {}", path.display());
    Ok(())
}

/// Read a project JSON file.
pub fn read_project_json(path: &Path) -> Result<ProjectFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open project JSON '{}': {e}", path.display())))?;
    let project: ProjectFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid project JSON: {e}")))?;
    Ok(project)
}

/// Recover the compute request stored in a project.
///
/// The sweep size comes from the stored results (201 if there are none); the
/// bounds policy is `mobile` when the stored sweep spans exactly `[Swc, 1 - Sor]`.
pub fn config_from_project(project: &ProjectFile) -> Result<RunConfig, AppError> {
    let p = &project.params;
    let model = ModelChoice::from_key(&p.model)?;
    let params = EndpointParameters {
        swc: p.swc,
        sor: p.sor,
        krw0: p.krw0,
        kro0: p.kro0,
        mu_w: p.mu_w,
        mu_o: p.mu_o,
    };

    let sw = &project.results.sw;
    let points = if sw.is_empty() { RunConfig::default().points } else { sw.len() };
    let bounds = match (sw.first(), sw.last()) {
        (Some(&lo), Some(&hi)) => {
            let (m_lo, m_hi) = SweepBounds::Mobile.resolve(&params);
            let spans_mobile = (lo - m_lo).abs() < BOUNDS_TOL && (hi - m_hi).abs() < BOUNDS_TOL;
            let spans_full = lo.abs() < BOUNDS_TOL && (hi - 1.0).abs() < BOUNDS_TOL;
            if spans_mobile && !spans_full { SweepBounds::Mobile } else { SweepBounds::Full }
        }
        _ => SweepBounds::Full,
    };

    Ok(RunConfig {
        params,
        model,
        exponents: CoreyExponents { nw: p.nw, no: p.no },
        bounds,
        points,
    })
}

/// Largest absolute difference between stored and recomputed values.
///
/// `None` when the stored columns do not match the table's length.
pub fn max_deviation(stored: &ProjectResults, table: &ResultTable) -> Option<f64> {
    let columns = [
        (&stored.sw, table.sw()),
        (&stored.krw, table.krw()),
        (&stored.kro, table.kro()),
        (&stored.fw, table.fw()),
    ];
    let mut worst = 0.0f64;
    for (old, new) in &columns {
        if old.len() != new.len() {
            return None;
        }
        for (a, b) in old.iter().zip(new) {
            worst = worst.max((a - b).abs());
        }
    }
    Some(worst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline;

    #[test]
    fn snapshot_is_columnar_with_named_params() {
        let run = pipeline::run(&RunConfig::default()).unwrap();
        let value = serde_json::to_value(project_from_table(&run.table)).unwrap();

        let params = &value["params"];
        for key in ["mu_w", "mu_o", "Swc", "Sor", "krw0", "kro0", "model", "nw", "no"] {
            assert!(params.get(key).is_some(), "missing params.{key}");
        }
        assert_eq!(params["model"], "Corey");

        let results = &value["results"];
        for key in ["Sw", "krw", "kro", "fw"] {
            assert_eq!(results[key].as_array().unwrap().len(), 201, "results.{key}");
        }
    }

    #[test]
    fn project_round_trip_recomputes_identically() {
        let dir = std::env::temp_dir().join(format!("relperm_project_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("project_relperm.json");

        let config = RunConfig {
            model: ModelChoice::WyllieGardner,
            bounds: SweepBounds::Mobile,
            points: 51,
            ..RunConfig::default()
        };
        let run = pipeline::run(&config).unwrap();
        write_project_json(&path, &run.table).unwrap();

        let project = read_project_json(&path).unwrap();
        let reloaded = config_from_project(&project).unwrap();
        assert_eq!(reloaded.model, ModelChoice::WyllieGardner);
        assert_eq!(reloaded.bounds, SweepBounds::Mobile);
        assert_eq!(reloaded.points, 51);

        let rerun = pipeline::run(&reloaded).unwrap();
        let dev = max_deviation(&project.results, &rerun.table).unwrap();
        assert!(dev < 1e-12, "deviation {dev}");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn snapshot_without_tool_field_loads() {
        let json = r#"{
            "params": {"mu_w": 0.5, "mu_o": 5.0, "Swc": 0.2, "Sor": 0.2, "krw0": 0.3, "kro0": 0.9,
                       "model": "Pirson", "nw": 3.0, "no": 2.0},
            "results": {"Sw": [0.0, 0.5, 1.0], "krw": [0.0, 0.03, 0.3], "kro": [0.9, 0.225, 0.0],
                        "fw": [0.0, 0.5, 1.0]}
        }"#;
        let project: ProjectFile = serde_json::from_str(json).unwrap();
        assert!(project.tool.is_empty());
        assert!(project.created.is_none());

        let config = config_from_project(&project).unwrap();
        assert_eq!(config.model, ModelChoice::Pirson);
        assert_eq!(config.points, 3);
        assert_eq!(config.bounds, SweepBounds::Full);

        let run = pipeline::run(&config).unwrap();
        assert_eq!(run.table.echo().exponents, CoreyExponents { nw: 2.0, no: 2.0 });
        assert!(max_deviation(&project.results, &run.table).is_some());
    }

    #[test]
    fn unknown_model_in_project_is_rejected() {
        let run = pipeline::run(&RunConfig::default()).unwrap();
        let mut project = project_from_table(&run.table);
        project.params.model = "Brooks-Corey".to_string();
        let err = config_from_project(&project).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("Brooks-Corey"));
    }

    #[test]
    fn deviation_requires_matching_lengths() {
        let run = pipeline::run(&RunConfig::default()).unwrap();
        let mut stored = project_from_table(&run.table).results;
        stored.fw.pop();
        assert_eq!(max_deviation(&stored, &run.table), None);
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = read_project_json(Path::new("/nonexistent/relperm/project.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
