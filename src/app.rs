//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and initializes logging
//! - parses CLI arguments into a validated `RunConfig`
//! - runs the compute pipeline
//! - prints summaries/tables/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, CompareArgs, ComputeArgs, LoadArgs, PhysicalArgs};
use crate::domain::{CoreyExponents, EndpointParameters, ModelChoice, RunConfig, limits};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `relperm` binary.
pub fn run() -> Result<(), AppError> {
    // A missing .env is normal; it only feeds RUST_LOG.
    dotenvy::dotenv().ok();

    // We want `relperm` and `relperm --swc 0.25` to behave like `relperm compute ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    crate::logging::init_logging(cli.log_level.as_deref());

    match cli.command {
        Command::Compute(args) => handle_compute(args),
        Command::Compare(args) => handle_compare(args),
        Command::Load(args) => handle_load(args),
    }
}

fn handle_compute(args: ComputeArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args.physical, args.model)?;
    let run = pipeline::run(&config)?;
    let table = &run.table;

    println!("{}", crate::report::format_input_summary(table.echo()));
    if !args.no_table {
        println!("Numerical results:");
        println!("{}", crate::report::format_table(table));
    }

    if args.plot.enabled() {
        println!("{}", crate::plot::render_relperm_plot(table, args.plot.width, args.plot.height));
        println!("{}", crate::plot::render_fractional_flow_plot(table, args.plot.width, args.plot.height));
    }

    // Optional exports.
    if let Some(stem) = &args.export_sheets {
        for path in crate::io::export::write_workbook(stem, table)? {
            println!("Wrote {}", path.display());
        }
    }
    if let Some(stem) = &args.export_plots {
        for path in crate::plot::write_plot_pages(stem, table)? {
            println!("Wrote {}", path.display());
        }
    }
    if let Some(path) = &args.save_project {
        crate::io::project::write_project_json(path, table)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn handle_compare(args: CompareArgs) -> Result<(), AppError> {
    let configs = ModelChoice::ALL
        .iter()
        .map(|&model| run_config_from_args(&args.physical, model))
        .collect::<Result<Vec<_>, _>>()?;
    let runs = pipeline::run_batch(&configs)?;

    let rows: Vec<_> = runs
        .iter()
        .filter_map(|r| crate::report::comparison_row(&r.table, args.probe))
        .collect();
    println!("Model comparison at Sw ~ {}:", args.probe);
    println!("{}", crate::report::format_comparison(&rows));

    if args.plot.enabled() {
        let tables: Vec<_> = runs.into_iter().map(|r| r.table).collect();
        println!("{}", crate::plot::render_fw_overlay(&tables, args.plot.width, args.plot.height));
    }

    Ok(())
}

fn handle_load(args: LoadArgs) -> Result<(), AppError> {
    let project = crate::io::project::read_project_json(&args.project)?;
    let config = crate::io::project::config_from_project(&project)?;
    limits::validate(&config)?;
    log::info!("reloaded {} project from {}", config.model, args.project.display());

    let run = pipeline::run(&config)?;
    println!("{}", crate::report::format_input_summary(run.table.echo()));
    if args.table {
        println!("{}", crate::report::format_table(&run.table));
    }

    match crate::io::project::max_deviation(&project.results, &run.table) {
        Some(dev) => println!("Recomputed {} points; max deviation from stored results: {dev:.3e}", run.table.len()),
        None => {
            log::warn!("stored results do not line up with the recomputed sweep");
            println!("Recomputed {} points; stored results have a different shape.", run.table.len());
        }
    }

    Ok(())
}

/// Build and validate a compute request from CLI flags.
pub fn run_config_from_args(args: &PhysicalArgs, model: ModelChoice) -> Result<RunConfig, AppError> {
    let config = RunConfig {
        params: EndpointParameters {
            swc: args.swc,
            sor: args.sor,
            krw0: args.krw0,
            kro0: args.kro0,
            mu_w: args.mu_w,
            mu_o: args.mu_o,
        },
        model,
        exponents: CoreyExponents { nw: args.nw, no: args.no },
        bounds: args.bounds,
        points: args.points,
    };
    limits::validate(&config)?;
    Ok(config)
}

/// Rewrite argv so `relperm` defaults to `relperm compute`.
///
/// Rules:
/// - `relperm`                       -> `relperm compute`
/// - `relperm --swc 0.25 ...`        -> `relperm compute --swc 0.25 ...`
/// - `relperm --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("compute".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "compute" | "compare" | "load");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "compute flags".
    if arg1.starts_with('-') {
        argv.insert(1, "compute".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
