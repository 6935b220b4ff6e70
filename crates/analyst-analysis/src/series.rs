//! Validated daily OHLCV price series

use crate::error::{AnalysisError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily trading session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Immutable, chronologically ordered price series
///
/// Constructed once per analysis from an external feed and read-only
/// afterwards. Construction fails fast on structural problems so that no
/// downstream computation ever sees a malformed series:
///
/// - at least one point ([`AnalysisError::EmptySeries`] otherwise)
/// - strictly increasing dates, no duplicates
/// - all prices finite and positive, `high >= low`
///
/// Missing sessions (holidays, halts) are simply absent; no gap filling is
/// performed.
#[derive(Debug, Clone, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Validate and wrap a chronological sequence of price points
    pub fn new(points: Vec<PricePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }

        for (i, p) in points.iter().enumerate() {
            for (field, value) in [
                ("open", p.open),
                ("high", p.high),
                ("low", p.low),
                ("close", p.close),
            ] {
                if !value.is_finite() {
                    return Err(AnalysisError::InvalidSeries {
                        reason: format!("non-finite {field} at index {i} ({})", p.date),
                    });
                }
                if value <= 0.0 {
                    return Err(AnalysisError::InvalidSeries {
                        reason: format!("non-positive {field} at index {i} ({})", p.date),
                    });
                }
            }

            if p.high < p.low {
                return Err(AnalysisError::InvalidSeries {
                    reason: format!("high below low at index {i} ({})", p.date),
                });
            }

            if i > 0 && points[i - 1].date >= p.date {
                return Err(AnalysisError::InvalidSeries {
                    reason: format!("dates out of order at index {i} ({})", p.date),
                });
            }
        }

        Ok(Self { points })
    }

    /// Number of sessions in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; an empty series cannot be constructed
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All sessions, oldest first
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// The most recent session
    pub fn last(&self) -> &PricePoint {
        // Non-empty by construction.
        &self.points[self.points.len() - 1]
    }

    /// Closing prices, oldest first
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// The trailing `min(n, len)` sessions
    pub fn trailing(&self, n: usize) -> &[PricePoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn date(i: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .checked_add_days(Days::new(i))
            .unwrap()
    }

    fn point(i: u64, close: f64) -> PricePoint {
        PricePoint {
            date: date(i),
            open: close,
            high: close * 1.01,
            low: close * 0.99,
            close,
            volume: 1_000,
        }
    }

    #[test]
    fn test_empty_series_rejected() {
        let err = PriceSeries::new(Vec::new()).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptySeries));
    }

    #[test]
    fn test_valid_series() {
        let series = PriceSeries::new((0..5).map(|i| point(i, 100.0 + i as f64)).collect())
            .unwrap();
        assert_eq!(series.len(), 5);
        assert_eq!(series.last().close, 104.0);
        assert_eq!(series.closes(), vec![100.0, 101.0, 102.0, 103.0, 104.0]);
    }

    #[test]
    fn test_unordered_dates_rejected() {
        let mut points: Vec<_> = (0..3).map(|i| point(i, 100.0)).collect();
        points.swap(0, 2);
        let err = PriceSeries::new(points).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSeries { .. }));
    }

    #[test]
    fn test_duplicate_dates_rejected() {
        let points = vec![point(0, 100.0), point(0, 101.0)];
        assert!(PriceSeries::new(points).is_err());
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let mut p = point(0, 100.0);
        p.close = f64::NAN;
        assert!(PriceSeries::new(vec![p]).is_err());

        let mut p = point(0, 100.0);
        p.high = f64::INFINITY;
        assert!(PriceSeries::new(vec![p]).is_err());
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let mut p = point(0, 100.0);
        p.low = -1.0;
        assert!(PriceSeries::new(vec![p]).is_err());

        let mut p = point(0, 100.0);
        p.open = 0.0;
        assert!(PriceSeries::new(vec![p]).is_err());
    }

    #[test]
    fn test_high_below_low_rejected() {
        let mut p = point(0, 100.0);
        p.high = 90.0;
        p.low = 110.0;
        assert!(PriceSeries::new(vec![p]).is_err());
    }

    #[test]
    fn test_trailing_window() {
        let series =
            PriceSeries::new((0..10).map(|i| point(i, 100.0)).collect()).unwrap();
        assert_eq!(series.trailing(3).len(), 3);
        assert_eq!(series.trailing(100).len(), 10);
        assert_eq!(series.trailing(3)[2].date, date(9));
    }
}
