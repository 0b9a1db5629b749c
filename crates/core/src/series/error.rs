//! Time-series error types.

use thiserror::Error;

/// Errors that can occur during time-series operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    /// The target point budget must be at least 1.
    #[error("Target point budget must be at least 1")]
    InvalidTargetPoints,
}

impl SeriesError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTargetPoints => "INVALID_TARGET_POINTS",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidTargetPoints => 400,
        }
    }
}
