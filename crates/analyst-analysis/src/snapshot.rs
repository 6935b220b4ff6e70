//! Externally supplied fundamental and consensus data
//!
//! These records are produced by the market-data collaborator and passed
//! into [`crate::analyze`] unchanged; the core never fetches them itself.
//! Every field is optional because upstream coverage varies by instrument.

use serde::{Deserialize, Serialize};

/// Fundamental valuation metrics for one instrument
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    pub forward_pe: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub peg_ratio: Option<f64>,
    pub price_to_book: Option<f64>,
    /// Upstream reports this as a percentage (e.g. 150.0 for 1.5x)
    pub debt_to_equity: Option<f64>,
    /// Fractional (0.25 = 25%)
    pub profit_margins: Option<f64>,
    /// Fractional (0.12 = 12% year over year)
    pub revenue_growth: Option<f64>,
    /// Fractional
    pub earnings_growth: Option<f64>,
    pub market_cap: Option<f64>,
    pub beta: Option<f64>,
}

/// Wall Street analyst consensus for one instrument
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsensusSnapshot {
    pub target_low: Option<f64>,
    pub target_mean: Option<f64>,
    pub target_high: Option<f64>,
    /// Upstream recommendation key, e.g. "buy", "hold", "strong_buy"
    pub recommendation_key: Option<String>,
    pub analyst_count: u32,
}
