//! Numeric building blocks: the saturation sweep and effective saturation.

pub mod grid;
pub mod normalize;

pub use normalize::{EPS, normalize, normalize_all, normalize_oil, normalize_water};
