//! `relperm` library crate.
//!
//! The binary (`relperm`) is a thin wrapper around this library so that:
//!
//! - the petrophysical engine is testable without spawning processes
//! - the result table can be consumed by other front-ends or batch scripts
//! - presentation and export code stays out of the numeric modules

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
