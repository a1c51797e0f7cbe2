//! Engine error types.
//!
//! Only malformed input is an error. Physically awkward but well-formed
//! conditions (calm wind, zero separation, out-of-range distances) are
//! handled as documented degenerate results, and unexpected numeric failures
//! inside the scorer are converted to a `CalculationError` assessment rather
//! than surfaced here.

use thiserror::Error;

/// Input validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RiskError {
    /// A coordinate or angle was NaN, infinite, or outside its valid range.
    #[error("invalid {field}: {value} is not a finite in-range value")]
    InvalidCoordinate {
        /// Which input field failed validation.
        field: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Wind speed was negative or non-finite.
    #[error("invalid wind speed: {value} (must be finite and >= 0 m/s)")]
    InvalidWindSpeed {
        /// The offending value.
        value: f64,
    },
}
