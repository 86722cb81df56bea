//! Spreadsheet export: results plus an input summary.
//!
//! The workbook is written as two CSV sheets next to the requested stem:
//!
//! - `<stem>_results.csv`: one row per curve point (`Sw,krw,kro,fw`)
//! - `<stem>_input_summary.csv`: `Parameter,Value` rows for the inputs
//!
//! Values are written at full precision; rounding is a display concern.

use std::path::{Path, PathBuf};

use crate::domain::ResultTable;
use crate::error::AppError;
use crate::io::with_suffix;

/// Paths of the two sheets for a given output stem.
pub fn sheet_paths(stem: &Path) -> [PathBuf; 2] {
    [
        with_suffix(stem, "_results.csv"),
        with_suffix(stem, "_input_summary.csv"),
    ]
}

/// `(Parameter, Value)` rows of the input summary sheet.
pub fn summary_rows(table: &ResultTable) -> Vec<(&'static str, String)> {
    let echo = table.echo();
    let p = &echo.params;
    vec![
        ("Water Viscosity (cP)", p.mu_w.to_string()),
        ("Oil Viscosity (cP)", p.mu_o.to_string()),
        ("Swc", p.swc.to_string()),
        ("Sor", p.sor.to_string()),
        ("krw0", p.krw0.to_string()),
        ("kro0", p.kro0.to_string()),
        ("Model", echo.model.display_name().to_string()),
        ("nw", echo.exponents.nw.to_string()),
        ("no", echo.exponents.no.to_string()),
    ]
}

/// Write both sheets; returns the written paths (results first).
pub fn write_workbook(stem: &Path, table: &ResultTable) -> Result<Vec<PathBuf>, AppError> {
    let [results_path, summary_path] = sheet_paths(stem);

    let mut writer = csv::Writer::from_path(&results_path).map_err(|e| {
        AppError::new(2, format!("Failed to create results sheet '{}': {e}", results_path.display()))
    })?;
    writer
        .write_record(["Sw", "krw", "kro", "fw"])
        .map_err(|e| AppError::new(2, format!("Failed to write results header: {e}")))?;
    for p in table.points() {
        writer
            .serialize((p.sw, p.krw, p.kro, p.fw))
            .map_err(|e| AppError::new(2, format!("Failed to write results row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush results sheet: {e}")))?;

    let mut writer = csv::Writer::from_path(&summary_path).map_err(|e| {
        AppError::new(2, format!("Failed to create summary sheet '{}': {e}", summary_path.display()))
    })?;
    writer
        .write_record(["Parameter", "Value"])
        .map_err(|e| AppError::new(2, format!("Failed to write summary header: {e}")))?;
    for (name, value) in summary_rows(table) {
        writer
            .write_record([name, value.as_str()])
            .map_err(|e| AppError::new(2, format!("Failed to write summary row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush summary sheet: {e}")))?;

    log::info!(
        "wrote {} result rows to {} and input summary to {}",
        table.len(),
        results_path.display(),
        summary_path.display()
    );
    Ok(vec![results_path, summary_path])
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline;
    use crate::domain::{ModelChoice, RunConfig};

    #[test]
    fn summary_rows_follow_sheet_layout() {
        let run = pipeline::run(&RunConfig { model: ModelChoice::Pirson, ..RunConfig::default() }).unwrap();
        let rows = summary_rows(&run.table);
        let names: Vec<&str> = rows.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec!["Water Viscosity (cP)", "Oil Viscosity (cP)", "Swc", "Sor", "krw0", "kro0", "Model", "nw", "no"]
        );
        assert_eq!(rows[6].1, "Pirson");
        assert_eq!(rows[7].1, "2");
        assert_eq!(rows[8].1, "2");
    }

    #[test]
    fn workbook_round_trip() {
        let dir = std::env::temp_dir().join(format!("relperm_sheets_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let stem = dir.join("relperm_results");

        let run = pipeline::run(&RunConfig::default()).unwrap();
        let written = write_workbook(&stem, &run.table).unwrap();
        assert_eq!(written, sheet_paths(&stem).to_vec());

        let mut reader = csv::Reader::from_path(&written[0]).unwrap();
        assert_eq!(reader.headers().unwrap().iter().collect::<Vec<_>>(), vec!["Sw", "krw", "kro", "fw"]);
        let rows: Vec<(f64, f64, f64, f64)> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 201);
        for (row, p) in rows.iter().zip(run.table.points()) {
            assert_eq!(*row, (p.sw, p.krw, p.kro, p.fw));
        }

        let summary = std::fs::read_to_string(&written[1]).unwrap();
        assert!(summary.starts_with("Parameter,Value\n"));
        assert!(summary.contains("Water Viscosity (cP),0.5\n"));
        assert!(summary.contains("Model,Corey\n"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
