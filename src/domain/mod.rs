//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input configuration (`EndpointParameters`, `ModelChoice`, `SweepBounds`, `RunConfig`)
//! - computed outputs (`CurvePoint`, `ResultTable`)
//! - the project snapshot schema (`ProjectFile`)
//! - accepted input ranges (`limits`)

pub mod limits;
pub mod types;

pub use types::*;
