//! Result assembly and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::{CurvePoint, ParameterEcho, ResultTable};
use crate::error::EngineError;

/// Zip the four computed columns into an ordered `ResultTable`.
///
/// All columns must have the length of `sw`; otherwise nothing is built.
pub fn assemble(
    sw: &[f64],
    krw: &[f64],
    kro: &[f64],
    fw: &[f64],
    echo: ParameterEcho,
) -> Result<ResultTable, EngineError> {
    for (context, column) in [("krw column", krw), ("kro column", kro), ("fw column", fw)] {
        if column.len() != sw.len() {
            return Err(EngineError::LengthMismatch {
                context,
                expected: sw.len(),
                actual: column.len(),
            });
        }
    }

    let points = (0..sw.len())
        .map(|i| CurvePoint {
            sw: sw[i],
            krw: krw[i],
            kro: kro[i],
            fw: fw[i],
        })
        .collect();

    Ok(ResultTable::new(points, echo))
}
