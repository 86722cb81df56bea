//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - relative permeability: `w` (krw), `o` (kro)
//! - fractional flow: `f`
//! - model overlay: `C` (Corey), `P` (Pirson), `W` (Wyllie-Gardner)

use crate::domain::{ModelChoice, ResultTable};

/// One polyline to draw.
#[derive(Debug, Clone)]
pub struct Series {
    pub glyph: char,
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// krw and kro vs Sw.
pub fn render_relperm_plot(table: &ResultTable, width: usize, height: usize) -> String {
    let sw = table.sw();
    let series = [
        Series {
            glyph: 'w',
            label: "krw (Water)".to_string(),
            points: sw.iter().copied().zip(table.krw()).collect(),
        },
        Series {
            glyph: 'o',
            label: "kro (Oil)".to_string(),
            points: sw.iter().copied().zip(table.kro()).collect(),
        },
    ];
    let p = &table.echo().params;
    let y_max = p.krw0.max(p.kro0);
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };
    render_plot("kr vs Sw", "kr", &series, (0.0, 1.0), (0.0, y_max), width, height)
}

/// fw vs Sw.
pub fn render_fractional_flow_plot(table: &ResultTable, width: usize, height: usize) -> String {
    let series = [Series {
        glyph: 'f',
        label: "fw".to_string(),
        points: table.sw().into_iter().zip(table.fw()).collect(),
    }];
    render_plot("fw vs Sw", "fw", &series, (0.0, 1.0), (0.0, 1.0), width, height)
}

/// fw vs Sw for several models on one grid.
pub fn render_fw_overlay(tables: &[ResultTable], width: usize, height: usize) -> String {
    let series: Vec<Series> = tables
        .iter()
        .map(|t| Series {
            glyph: model_glyph(t.echo().model),
            label: t.echo().model.display_name().to_string(),
            points: t.sw().into_iter().zip(t.fw()).collect(),
        })
        .collect();
    render_plot("fw vs Sw", "fw", &series, (0.0, 1.0), (0.0, 1.0), width, height)
}

fn model_glyph(model: ModelChoice) -> char {
    match model {
        ModelChoice::Corey => 'C',
        ModelChoice::Pirson => 'P',
        ModelChoice::WyllieGardner => 'W',
    }
}

/// Draw `series` onto a `width` x `height` character grid.
///
/// Earlier series win where curves overlap.
pub fn render_plot(
    title: &str,
    y_label: &str,
    series: &[Series],
    (x_min, x_max): (f64, f64),
    (y_min, y_max): (f64, f64),
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let mut grid = vec![vec![' '; width]; height];
    for s in series {
        draw_curve(&mut grid, &s.points, s.glyph, (x_min, x_max), (y_min, y_max));
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{title}: Sw=[{x_min:.2}, {x_max:.2}] | {y_label}=[{y_min:.2}, {y_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    let legend: Vec<String> = series.iter().map(|s| format!("{}={}", s.glyph, s.label)).collect();
    out.push_str(&format!("legend: {}\n", legend.join("  ")));

    out
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], ch: char, (x_min, x_max): (f64, f64), (y_min, y_max): (f64, f64)) {
    if curve.is_empty() || !(x_max > x_min && y_max > y_min) {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        if !(x.is_finite() && y.is_finite()) {
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        match prev {
            Some((c0, r0)) => draw_line(grid, c0, r0, col, row, ch),
            None => {
                if grid[row][col] == ' ' {
                    grid[row][col] = ch;
                }
            }
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
