//! Report error types.

use chrono::NaiveDate;
use praxis_shared::error::AppError;
use thiserror::Error;

use crate::series::SeriesError;

/// Errors that can occur while building a report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The requested window starts after it ends.
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange {
        /// Window start.
        from: NaiveDate,
        /// Window end.
        to: NaiveDate,
    },

    /// Downsampling failed.
    #[error(transparent)]
    Series(#[from] SeriesError),
}

impl ReportError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::Series(inner) => inner.error_code(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidDateRange { .. } => 400,
            Self::Series(inner) => inner.http_status_code(),
        }
    }
}

/// Conversion for request handlers that surface engine errors through the
/// application-wide error type.
impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Validation(err.to_string())
    }
}
