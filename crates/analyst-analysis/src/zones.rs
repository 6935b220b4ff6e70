//! Support/resistance extremes and classic pivot levels

use crate::series::PriceSeries;
use serde::{Deserialize, Serialize};

/// Sessions in the trailing support/resistance window
pub const ZONE_WINDOW: usize = 90;

/// Critical price zones over the trailing `min(90, N)` sessions
///
/// By construction `support_1 + resistance_1 == 2 * pivot`, so the first
/// pivot levels sit symmetrically around the pivot point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneSet {
    /// Lowest low of the trailing window
    pub support_90d: f64,
    /// Highest high of the trailing window
    pub resistance_90d: f64,
    /// Classic pivot point: (high + low + close) / 3
    pub pivot: f64,
    /// First pivot support: 2 * pivot - high
    pub support_1: f64,
    /// First pivot resistance: 2 * pivot - low
    pub resistance_1: f64,
}

impl ZoneSet {
    /// Compute zones from the trailing window of a validated series
    ///
    /// With a single session there is no meaningful range; every level
    /// degenerates to that session's close.
    pub fn compute(series: &PriceSeries) -> Self {
        let close = series.last().close;

        if series.len() < 2 {
            return Self {
                support_90d: close,
                resistance_90d: close,
                pivot: close,
                support_1: close,
                resistance_1: close,
            };
        }

        let window = series.trailing(ZONE_WINDOW);
        let min_low = window.iter().map(|p| p.low).fold(f64::INFINITY, f64::min);
        let max_high = window
            .iter()
            .map(|p| p.high)
            .fold(f64::NEG_INFINITY, f64::max);

        let pivot = (max_high + min_low + close) / 3.0;

        Self {
            support_90d: min_low,
            resistance_90d: max_high,
            pivot,
            support_1: 2.0 * pivot - max_high,
            resistance_1: 2.0 * pivot - min_low,
        }
    }
}
