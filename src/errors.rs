//! Error types for ephemeris computations

use thiserror::Error;

/// Errors raised by the ephemeris theories and solvers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    /// The epoch lies outside the range over which a theory is valid
    #[error("Date JD {jd} is outside the valid range of {theory} ({start_jd}..{end_jd})")]
    DateOutOfRange {
        theory: &'static str,
        jd: f64,
        start_jd: f64,
        end_jd: f64,
    },

    /// A calendar date could not be converted
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid eccentricity {0}: must be non-negative")]
    InvalidEccentricity(f64),

    /// An iterative solver did not reach its tolerance within the iteration cap
    #[error("{solver} did not converge after {iterations} iterations")]
    Convergence {
        solver: &'static str,
        iterations: u16,
    },

    #[error("Invalid planet: {0}")]
    InvalidPlanet(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl EphemerisError {
    /// True for both flavours of date error
    pub fn is_invalid_date(&self) -> bool {
        matches!(
            self,
            EphemerisError::DateOutOfRange { .. } | EphemerisError::InvalidDate(_)
        )
    }
}

/// Result type for ephemeris operations
pub type Result<T> = std::result::Result<T, EphemerisError>;
