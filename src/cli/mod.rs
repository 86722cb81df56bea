//! Command-line parsing for the relative permeability calculator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the petrophysics code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{ModelChoice, SweepBounds};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "relperm", version, about = "Relative Permeability & Fractional Flow Calculator")]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace). Falls back to RUST_LOG, then warn.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute krw/kro/fw curves, print the summary and table, and optionally plot/export.
    Compute(ComputeArgs),
    /// Evaluate all three models with the same inputs and compare them.
    Compare(CompareArgs),
    /// Reload a saved project, recompute it, and check it against the stored results.
    Load(LoadArgs),
}

/// Fluid, saturation and model inputs shared by every compute path.
#[derive(Debug, Args, Clone)]
pub struct PhysicalArgs {
    /// Water viscosity (cP).
    #[arg(long = "mu-w", default_value_t = 0.5)]
    pub mu_w: f64,

    /// Oil viscosity (cP).
    #[arg(long = "mu-o", default_value_t = 5.0)]
    pub mu_o: f64,

    /// Irreducible water saturation.
    #[arg(long, default_value_t = 0.2)]
    pub swc: f64,

    /// Residual oil saturation.
    #[arg(long, default_value_t = 0.2)]
    pub sor: f64,

    /// End-point water relative permeability.
    #[arg(long, default_value_t = 0.3)]
    pub krw0: f64,

    /// End-point oil relative permeability.
    #[arg(long, default_value_t = 0.9)]
    pub kro0: f64,

    /// Corey water exponent (ignored by Pirson and Wyllie-Gardner).
    #[arg(long, default_value_t = 3.0)]
    pub nw: f64,

    /// Corey oil exponent (ignored by Pirson and Wyllie-Gardner).
    #[arg(long = "no", default_value_t = 2.0)]
    pub no: f64,

    /// Number of saturation samples.
    #[arg(long, default_value_t = 201)]
    pub points: usize,

    /// Saturation interval: full = [0, 1], mobile = [Swc, 1 - Sor].
    #[arg(long, value_enum, default_value_t = SweepBounds::Full)]
    pub bounds: SweepBounds,
}

/// Terminal plot options.
#[derive(Debug, Args, Clone)]
pub struct PlotOptions {
    /// Skip the terminal plots (rendered by default).
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

impl PlotOptions {
    pub fn enabled(&self) -> bool {
        !self.no_plot
    }
}

/// Options for `relperm compute`.
#[derive(Debug, Args, Clone)]
pub struct ComputeArgs {
    #[command(flatten)]
    pub physical: PhysicalArgs,

    /// Relative permeability correlation.
    #[arg(short = 'm', long, value_enum, default_value_t = ModelChoice::Corey)]
    pub model: ModelChoice,

    #[command(flatten)]
    pub plot: PlotOptions,

    /// Skip the numerical results table.
    #[arg(long)]
    pub no_table: bool,

    /// Write the results and input summary CSV sheets next to this stem.
    #[arg(long = "export-sheets", value_name = "STEM")]
    pub export_sheets: Option<PathBuf>,

    /// Write the two SVG plot pages next to this stem.
    #[arg(long = "export-plots", value_name = "STEM")]
    pub export_plots: Option<PathBuf>,

    /// Save the project snapshot (params + columnar results) to JSON.
    #[arg(long = "save-project", value_name = "JSON")]
    pub save_project: Option<PathBuf>,
}

/// Options for `relperm compare`.
#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub physical: PhysicalArgs,

    /// Saturation at which the models are compared.
    #[arg(long, default_value_t = 0.5)]
    pub probe: f64,

    #[command(flatten)]
    pub plot: PlotOptions,
}

/// Options for `relperm load`.
#[derive(Debug, Args, Clone)]
pub struct LoadArgs {
    /// Project JSON produced by `relperm compute --save-project`.
    #[arg(long, value_name = "JSON")]
    pub project: PathBuf,

    /// Print the recomputed numerical results table.
    #[arg(long)]
    pub table: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_defaults_match_calculator_inputs() {
        let cli = Cli::try_parse_from(["relperm", "compute"]).unwrap();
        let Command::Compute(args) = cli.command else {
            panic!("expected compute");
        };
        let p = &args.physical;
        assert_eq!((p.mu_w, p.mu_o, p.swc, p.sor, p.krw0, p.kro0), (0.5, 5.0, 0.2, 0.2, 0.3, 0.9));
        assert_eq!((p.nw, p.no, p.points), (3.0, 2.0, 201));
        assert_eq!(p.bounds, SweepBounds::Full);
        assert_eq!(args.model, ModelChoice::Corey);
        assert!(args.plot.enabled());
    }

    #[test]
    fn model_and_bounds_parse_from_keys() {
        let cli = Cli::try_parse_from([
            "relperm", "compute", "--model", "wyllie-gardner", "--bounds", "mobile", "--no-plot",
        ])
        .unwrap();
        let Command::Compute(args) = cli.command else {
            panic!("expected compute");
        };
        assert_eq!(args.model, ModelChoice::WyllieGardner);
        assert_eq!(args.physical.bounds, SweepBounds::Mobile);
        assert!(!args.plot.enabled());
    }

    #[test]
    fn export_flags_name_the_written_formats() {
        let cli = Cli::try_parse_from([
            "relperm", "compute", "--export-sheets", "out/run", "--export-plots", "out/run",
        ])
        .unwrap();
        let Command::Compute(args) = cli.command else {
            panic!("expected compute");
        };
        assert_eq!(args.export_sheets, Some(PathBuf::from("out/run")));
        assert_eq!(args.export_plots, Some(PathBuf::from("out/run")));
        assert!(Cli::try_parse_from(["relperm", "compute", "--export-xlsx", "out/run"]).is_err());
    }

    #[test]
    fn plots_are_on_unless_disabled() {
        assert!(Cli::try_parse_from(["relperm", "compute", "--plot"]).is_err());
        let cli = Cli::try_parse_from(["relperm", "compare", "--no-plot"]).unwrap();
        let Command::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert!(!args.plot.enabled());
    }

    #[test]
    fn unknown_model_is_a_parse_error() {
        assert!(Cli::try_parse_from(["relperm", "compute", "--model", "brooks"]).is_err());
    }

    #[test]
    fn global_log_level_after_subcommand() {
        let cli = Cli::try_parse_from(["relperm", "compare", "--log-level", "debug", "--probe", "0.6"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        let Command::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.probe, 0.6);
    }
}
