//! Error types for the analysis core

use thiserror::Error;

/// Structural errors in the supplied price series
///
/// Per-indicator data shortfalls are not errors; they are reported inline
/// as [`crate::Indicator::Unavailable`]. Only a series that cannot be
/// analysed at all is rejected.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Zero price points supplied
    #[error("price series is empty")]
    EmptySeries,

    /// The series violates a structural invariant
    #[error("invalid price series: {reason}")]
    InvalidSeries {
        reason: String,
    },
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(AnalysisError::EmptySeries.to_string(), "price series is empty");

        let err = AnalysisError::InvalidSeries {
            reason: "dates out of order at index 3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid price series: dates out of order at index 3"
        );
    }
}
