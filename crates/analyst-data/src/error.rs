//! Error types for market-data operations

use thiserror::Error;

/// Market-data specific errors
#[derive(Debug, Error)]
pub enum DataError {
    /// ISIN is not in the lookup table
    #[error("ISIN {0} not found in the security table")]
    UnknownIsin(String),

    /// Yahoo Finance request or payload problem
    #[error("Yahoo Finance error: {0}")]
    YahooFinance(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream answered but a required piece was absent
    #[error("Data not available for {symbol}: {reason}")]
    MissingData {
        symbol: String,
        reason: String,
    },

    /// The fetched history failed series validation
    #[error(transparent)]
    InvalidSeries(#[from] analyst_analysis::AnalysisError),
}

/// Result type alias for market-data operations
pub type Result<T> = std::result::Result<T, DataError>;
