//! Aggregation of indicators, zones, regime, and external snapshots

use crate::indicators::{Indicator, IndicatorSet};
use crate::regime::Regime;
use crate::series::PriceSeries;
use crate::snapshot::{ConsensusSnapshot, FundamentalSnapshot};
use crate::zones::ZoneSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sessions in the trailing average-volume window
pub const VOLUME_WINDOW: usize = 30;

// Session offsets for the price-change metrics: 1 day, 1 week, 1 month.
const CHANGE_1D: usize = 1;
const CHANGE_5D: usize = 5;
const CHANGE_1M: usize = 21;

/// Percentage price changes over recent horizons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChanges {
    pub change_1d: Indicator,
    pub change_5d: Indicator,
    pub change_1m: Indicator,
}

impl PriceChanges {
    fn compute(series: &PriceSeries) -> Self {
        let closes = series.closes();
        let current = closes[closes.len() - 1];

        let change = |sessions_back: usize| -> Indicator {
            if closes.len() <= sessions_back {
                return Indicator::insufficient(sessions_back + 1, closes.len());
            }
            let past = closes[closes.len() - 1 - sessions_back];
            Indicator::available((current - past) / past * 100.0)
        };

        Self {
            change_1d: change(CHANGE_1D),
            change_5d: change(CHANGE_5D),
            change_1m: change(CHANGE_1M),
        }
    }
}

/// The complete analysis for one instrument
///
/// Immutable once built and owned by the caller; nothing here is cached or
/// shared across requests. Serializable as-is for transport by the
/// surrounding API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Most recent closing price
    pub last_close: f64,
    /// Sessions available in the analysed series
    pub sessions: usize,
    pub indicators: IndicatorSet,
    pub zones: ZoneSet,
    pub regime: Regime,
    pub changes: PriceChanges,
    /// Last session volume over the trailing average volume
    pub volume_ratio: Indicator,
    /// Percent distance from the close to the consensus mean target
    pub upside_potential: Indicator,
    pub fundamentals: FundamentalSnapshot,
    pub consensus: ConsensusSnapshot,
    pub generated_at: DateTime<Utc>,
}

/// Run the full analysis over a validated series
///
/// Pure data transformation: no I/O, no retries, no provider selection.
/// Indicator-level shortfalls surface as [`Indicator::Unavailable`] inside
/// the result; the only failures are structural series problems, and those
/// are rejected earlier by [`PriceSeries::new`].
pub fn analyze(
    series: &PriceSeries,
    fundamentals: FundamentalSnapshot,
    consensus: ConsensusSnapshot,
) -> AnalysisResult {
    let indicators = IndicatorSet::compute(series);
    let zones = ZoneSet::compute(series);
    let last_close = series.last().close;
    let regime = Regime::classify(last_close, indicators.sma50, indicators.sma200);

    let upside_potential = match consensus.target_mean {
        Some(target) => Indicator::available((target - last_close) / last_close * 100.0),
        None => Indicator::missing_input(),
    };

    debug!(
        sessions = series.len(),
        regime = %regime,
        "analysis complete"
    );

    AnalysisResult {
        last_close,
        sessions: series.len(),
        indicators,
        zones,
        regime,
        changes: PriceChanges::compute(series),
        volume_ratio: volume_ratio(series),
        upside_potential,
        fundamentals,
        consensus,
        generated_at: Utc::now(),
    }
}

/// Last-session volume over the trailing `min(30, N)` average
fn volume_ratio(series: &PriceSeries) -> Indicator {
    let window = series.trailing(VOLUME_WINDOW);
    let mean =
        window.iter().map(|p| p.volume as f64).sum::<f64>() / window.len() as f64;
    if mean == 0.0 {
        return Indicator::zero_denominator();
    }
    Indicator::available(series.last().volume as f64 / mean)
}

impl AnalysisResult {
    /// Percent distance from the close down to the 90-day support
    pub fn distance_to_support(&self) -> f64 {
        (self.last_close - self.zones.support_90d) / self.last_close * 100.0
    }

    /// Percent distance from the close up to the 90-day resistance
    pub fn distance_to_resistance(&self) -> f64 {
        (self.zones.resistance_90d - self.last_close) / self.last_close * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::PricePoint;
    use chrono::{Days, NaiveDate};

    fn point(i: u64, close: f64, volume: u64) -> PricePoint {
        PricePoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .checked_add_days(Days::new(i))
                .unwrap(),
            open: close,
            high: close * 1.01,
            low: close * 0.99,
            close,
            volume,
        }
    }

    fn linear_series(len: u64, start: f64, end: f64) -> PriceSeries {
        let step = (end - start) / (len as f64 - 1.0);
        PriceSeries::new(
            (0..len)
                .map(|i| point(i, start + step * i as f64, 1_000_000))
                .collect(),
        )
        .unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_rising_series_is_strong_uptrend() {
        // 260 sessions, closes rising linearly 100 -> 200.
        let series = linear_series(260, 100.0, 200.0);
        let result = analyze(
            &series,
            FundamentalSnapshot::default(),
            ConsensusSnapshot::default(),
        );

        assert_eq!(result.regime, Regime::StrongUptrend);
        assert!(result.indicators.sma50.value().unwrap() > result.indicators.sma200.value().unwrap());
        assert!(result.last_close > result.indicators.sma50.value().unwrap());
        assert!(result.indicators.rsi14.value().unwrap() > 70.0);
    }

    #[test]
    fn test_falling_series_is_strong_downtrend() {
        let series = linear_series(260, 200.0, 100.0);
        let result = analyze(
            &series,
            FundamentalSnapshot::default(),
            ConsensusSnapshot::default(),
        );
        assert_eq!(result.regime, Regime::StrongDowntrend);
    }

    #[test]
    fn test_flat_series_collapses_everything() {
        // 100 identical sessions at 50 with identical volumes.
        let series = PriceSeries::new(
            (0..100)
                .map(|i| PricePoint {
                    date: NaiveDate::from_ymd_opt(2024, 1, 2)
                        .unwrap()
                        .checked_add_days(Days::new(i))
                        .unwrap(),
                    open: 50.0,
                    high: 50.0,
                    low: 50.0,
                    close: 50.0,
                    volume: 777,
                })
                .collect(),
        )
        .unwrap();
        let result = analyze(
            &series,
            FundamentalSnapshot::default(),
            ConsensusSnapshot::default(),
        );

        assert_close(result.indicators.bb_upper.value().unwrap(), 50.0);
        assert_close(result.indicators.bb_middle.value().unwrap(), 50.0);
        assert_close(result.indicators.bb_lower.value().unwrap(), 50.0);
        assert_close(result.indicators.atr14.value().unwrap(), 0.0);
        assert_close(result.indicators.rsi14.value().unwrap(), 50.0);
        assert_close(result.volume_ratio.value().unwrap(), 1.0);
        assert_eq!(result.regime, Regime::Neutral);
    }

    #[test]
    fn test_five_session_series() {
        // Long-window indicators are all unavailable; zones still compute.
        let series = linear_series(5, 100.0, 104.0);
        let result = analyze(
            &series,
            FundamentalSnapshot::default(),
            ConsensusSnapshot::default(),
        );

        assert!(!result.indicators.rsi14.is_available());
        assert!(!result.indicators.macd.is_available());
        assert!(!result.indicators.bb_middle.is_available());
        assert!(!result.indicators.atr14.is_available());
        assert!(!result.indicators.sma200.is_available());
        assert_eq!(result.regime, Regime::Neutral);

        assert!(result.zones.resistance_90d > result.zones.support_90d);
        assert_close(
            result.zones.support_1 + result.zones.resistance_1,
            2.0 * result.zones.pivot,
        );

        assert!(result.changes.change_1d.is_available());
        assert!(!result.changes.change_5d.is_available());
        assert!(!result.changes.change_1m.is_available());
    }

    #[test]
    fn test_upside_potential() {
        let series = linear_series(50, 90.0, 100.0);
        let consensus = ConsensusSnapshot {
            target_mean: Some(120.0),
            ..Default::default()
        };
        let result = analyze(&series, FundamentalSnapshot::default(), consensus);
        assert_close(result.upside_potential.value().unwrap(), 20.0);

        let result = analyze(
            &series,
            FundamentalSnapshot::default(),
            ConsensusSnapshot::default(),
        );
        assert!(!result.upside_potential.is_available());
    }

    #[test]
    fn test_volume_ratio_spike() {
        let mut points: Vec<PricePoint> = (0..40).map(|i| point(i, 100.0, 1_000)).collect();
        points.last_mut().unwrap().volume = 3_000;
        let series = PriceSeries::new(points).unwrap();
        let result = analyze(
            &series,
            FundamentalSnapshot::default(),
            ConsensusSnapshot::default(),
        );

        // Window mean = (29 * 1000 + 3000) / 30.
        let expected = 3_000.0 / ((29.0 * 1_000.0 + 3_000.0) / 30.0);
        assert_close(result.volume_ratio.value().unwrap(), expected);
    }

    #[test]
    fn test_volume_ratio_zero_volume() {
        let series =
            PriceSeries::new((0..10).map(|i| point(i, 100.0, 0)).collect()).unwrap();
        let result = analyze(
            &series,
            FundamentalSnapshot::default(),
            ConsensusSnapshot::default(),
        );
        assert!(!result.volume_ratio.is_available());
    }

    #[test]
    fn test_price_changes() {
        let series = linear_series(30, 100.0, 129.0);
        let result = analyze(
            &series,
            FundamentalSnapshot::default(),
            ConsensusSnapshot::default(),
        );

        // Closes step by exactly 1.0 per session.
        assert_close(
            result.changes.change_1d.value().unwrap(),
            (129.0 - 128.0) / 128.0 * 100.0,
        );
        assert_close(
            result.changes.change_5d.value().unwrap(),
            (129.0 - 124.0) / 124.0 * 100.0,
        );
        assert_close(
            result.changes.change_1m.value().unwrap(),
            (129.0 - 108.0) / 108.0 * 100.0,
        );
    }

    #[test]
    fn test_distances() {
        let series = linear_series(100, 100.0, 200.0);
        let result = analyze(
            &series,
            FundamentalSnapshot::default(),
            ConsensusSnapshot::default(),
        );
        assert!(result.distance_to_support() > 0.0);
        assert!(result.distance_to_resistance() >= 0.0);
    }

    #[test]
    fn test_result_serializes_with_tagged_indicators() {
        let series = linear_series(5, 100.0, 104.0);
        let result = analyze(
            &series,
            FundamentalSnapshot::default(),
            ConsensusSnapshot::default(),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["regime"], "NEUTRAL");
        assert_eq!(json["indicators"]["rsi14"]["status"], "unavailable");
        assert_eq!(json["sessions"], 5);
    }
}
