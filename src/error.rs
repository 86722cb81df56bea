use thiserror::Error;

/// Structural failures raised by the petrophysical engine.
///
/// Numeric degeneracy (zero denominators in normalization or fractional flow)
/// is resolved in place and never shows up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Inverted, degenerate, or non-finite saturation bounds, or too few points.
    #[error("Invalid saturation range: lower={lower}, upper={upper}, count={count} (need lower < upper and count >= 2).")]
    InvalidRange { lower: f64, upper: f64, count: usize },

    /// A model key outside the closed Corey / Pirson / Wyllie-Gardner set.
    #[error("Unknown relative permeability model '{0}' (expected corey, pirson, or wyllie-gardner).")]
    UnknownModel(String),

    /// Computed arrays that should line up one-to-one do not.
    #[error("Length mismatch while assembling {context}: expected {expected}, got {actual}.")]
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        let exit_code = match err {
            EngineError::InvalidRange { .. } | EngineError::UnknownModel(_) => 2,
            // Mismatched arrays mean the pipeline wiring is broken, not the input.
            EngineError::LengthMismatch { .. } => 4,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
