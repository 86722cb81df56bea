//! Plotters-rendered plot pages (SVG).
//!
//! The document export consists of two pages written in order:
//!
//! 1. relative permeability (krw & kro) vs water saturation
//! 2. fractional flow vs water saturation
//!
//! Each page is a standalone SVG file next to the requested stem.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::domain::ResultTable;
use crate::error::AppError;
use crate::io::with_suffix;

const PAGE_SIZE: (u32, u32) = (1000, 600);

/// Paths of the two pages for a given output stem.
pub fn page_paths(stem: &Path) -> [PathBuf; 2] {
    [
        with_suffix(stem, "_page1_relperm.svg"),
        with_suffix(stem, "_page2_fracflow.svg"),
    ]
}

/// Render both plot pages for `table`; returns the written paths in page order.
pub fn write_plot_pages(stem: &Path, table: &ResultTable) -> Result<Vec<PathBuf>, AppError> {
    let [kr_path, fw_path] = page_paths(stem);

    let sw = table.sw();
    let krw: Vec<(f64, f64)> = sw.iter().copied().zip(table.krw()).collect();
    let kro: Vec<(f64, f64)> = sw.iter().copied().zip(table.kro()).collect();
    let fw: Vec<(f64, f64)> = sw.iter().copied().zip(table.fw()).collect();

    let p = &table.echo().params;
    let kr_max = p.krw0.max(p.kro0);
    let kr_max = if kr_max > 0.0 { kr_max * 1.05 } else { 1.0 };

    draw_page(
        &kr_path,
        &PageSpec {
            title: "Relative Permeability vs Water Saturation",
            y_desc: "Relative Permeability",
            y_max: kr_max,
            lines: &[(krw.as_slice(), BLUE, "krw (Water)"), (kro.as_slice(), RED, "kro (Oil)")],
        },
    )
    .map_err(|e| AppError::new(2, format!("Failed to render plot page '{}': {e}", kr_path.display())))?;

    draw_page(
        &fw_path,
        &PageSpec {
            title: "Fractional Flow vs Water Saturation",
            y_desc: "Fractional Flow (fw)",
            y_max: 1.0,
            lines: &[(fw.as_slice(), GREEN, "fw")],
        },
    )
    .map_err(|e| AppError::new(2, format!("Failed to render plot page '{}': {e}", fw_path.display())))?;

    log::info!("wrote plot pages {} and {}", kr_path.display(), fw_path.display());
    Ok(vec![kr_path, fw_path])
}

struct PageSpec<'a> {
    title: &'a str,
    y_desc: &'a str,
    y_max: f64,
    lines: &'a [(&'a [(f64, f64)], RGBColor, &'a str)],
}

fn draw_page(path: &Path, spec: &PageSpec<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, PAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 24))
        .margin(16)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 45)
        .build_cartesian_2d(0f64..1f64, 0f64..spec.y_max)?;

    chart
        .configure_mesh()
        .x_desc("Water Saturation (Sw)")
        .y_desc(spec.y_desc)
        .x_labels(11)
        .y_labels(6)
        .light_line_style(&RGBColor(235, 235, 235))
        .draw()?;

    for &(points, color, label) in spec.lines {
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
