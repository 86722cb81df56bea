//! Curve rendering: ASCII for the terminal, SVG pages for document export.

pub mod ascii;
pub mod svg;

pub use ascii::{render_fractional_flow_plot, render_fw_overlay, render_relperm_plot};
pub use svg::write_plot_pages;
