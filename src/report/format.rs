//! Formatted terminal output: input summary, result table, model comparison.
//!
//! We keep formatting code in one place so:
//! - the engine stays free of presentation concerns
//! - output changes are localized (golden tests below)
//!
//! Rounding here is display-only; the `ResultTable` keeps full precision.

use crate::domain::{CurvePoint, ModelChoice, ParameterEcho, ResultTable};

/// Decimal places used for every numeric column in terminal tables.
pub const DISPLAY_DECIMALS: usize = 5;

/// Format the input summary for a computed table.
pub fn format_input_summary(echo: &ParameterEcho) -> String {
    let p = &echo.params;
    let mut out = String::new();

    out.push_str("=== relperm - Relative Permeability & Fractional Flow ===\n");
    out.push_str("Input summary:\n");
    out.push_str(&format!("  {:<16} {} cP\n", "Water Viscosity", p.mu_w));
    out.push_str(&format!("  {:<16} {} cP\n", "Oil Viscosity", p.mu_o));
    out.push_str(&format!("  {:<16} {}\n", "Swc", p.swc));
    out.push_str(&format!("  {:<16} {}\n", "Sor", p.sor));
    out.push_str(&format!("  {:<16} {}\n", "krw0", p.krw0));
    out.push_str(&format!("  {:<16} {}\n", "kro0", p.kro0));
    out.push_str(&format!("  {:<16} {}\n", "Model", echo.model.display_name()));
    if echo.model == ModelChoice::Corey {
        out.push_str(&format!(
            "  {:<16} nw={}, no={}\n",
            "Exponents", echo.exponents.nw, echo.exponents.no
        ));
    }
    out.push_str(&format!(
        "Sweep: n={} | Sw=[{:.5}, {:.5}]\n",
        echo.points, echo.sw_min, echo.sw_max
    ));

    out
}

/// Format the numerical results (one row per curve point).
pub fn format_table(table: &ResultTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>9} {:>9} {:>9} {:>9}\n", "Sw", "krw", "kro", "fw"));
    out.push_str(&format!("{:->9} {:->9} {:->9} {:->9}\n", "", "", "", ""));
    for p in table.points() {
        out.push_str(&format_row(p));
        out.push('\n');
    }
    out
}

/// One line of the model comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub model: ModelChoice,
    /// Grid sample closest to the requested probe saturation.
    pub probe: CurvePoint,
    /// First saturation where `fw` reaches 0.5 (linear interpolation), if any.
    pub sw_at_half_flow: Option<f64>,
}

/// Summarize a computed table for side-by-side comparison.
pub fn comparison_row(table: &ResultTable, probe_sw: f64) -> Option<ComparisonRow> {
    let probe = nearest_point(table.points(), probe_sw)?;
    Some(ComparisonRow {
        model: table.echo().model,
        probe,
        sw_at_half_flow: sw_at_fw(table.points(), 0.5),
    })
}

/// Format a model comparison table.
pub fn format_comparison(rows: &[ComparisonRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<16} {:>9} {:>9} {:>9} {:>9} {:>11}\n",
        "model", "Sw", "krw", "kro", "fw", "Sw@fw=0.5"
    ));
    out.push_str(&format!(
        "{:-<16} {:->9} {:->9} {:->9} {:->9} {:->11}\n",
        "", "", "", "", "", ""
    ));
    for row in rows {
        let half = row
            .sw_at_half_flow
            .map(|v| format!("{v:.prec$}", prec = DISPLAY_DECIMALS))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<16} {} {:>11}\n",
            row.model.display_name(),
            format_row(&row.probe),
            half
        ));
    }
    out
}

fn format_row(p: &CurvePoint) -> String {
    format!(
        "{:>9.prec$} {:>9.prec$} {:>9.prec$} {:>9.prec$}",
        p.sw,
        p.krw,
        p.kro,
        p.fw,
        prec = DISPLAY_DECIMALS
    )
}

fn nearest_point(points: &[CurvePoint], sw: f64) -> Option<CurvePoint> {
    points
        .iter()
        .min_by(|a, b| (a.sw - sw).abs().total_cmp(&(b.sw - sw).abs()))
        .copied()
}

/// First `Sw` where `fw` crosses `target`, interpolated between samples.
fn sw_at_fw(points: &[CurvePoint], target: f64) -> Option<f64> {
    let first = points.first()?;
    if first.fw >= target {
        return Some(first.sw);
    }
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.fw < target && b.fw >= target {
            let span = b.fw - a.fw;
            if span <= 0.0 {
                return Some(b.sw);
            }
            return Some(a.sw + (target - a.fw) / span * (b.sw - a.sw));
        }
    }
    None
}
