//! Relative permeability correlations and the fractional-flow derivation.
//!
//! Models are implemented as small, pure functions so that the pipeline can
//! stay generic over the selected variant.

pub mod fractional_flow;
pub mod model;

pub use fractional_flow::{fractional_flow, fractional_flow_at};
pub use model::*;
