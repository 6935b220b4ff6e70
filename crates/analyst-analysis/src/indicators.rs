//! Technical indicator computation
//!
//! All functions operate on closing-price slices (high/low as well for ATR)
//! extracted from a [`PriceSeries`] and return the most recent scalar value
//! of the indicator. An indicator whose warm-up window exceeds the available
//! history reports [`Indicator::Unavailable`] instead of a biased early
//! value.
//!
//! Fixed policies:
//! - EMA smoothing factor is `2 / (period + 1)`, seeded with the simple
//!   average of the first `period` values.
//! - RSI and ATR use Wilder smoothing.
//! - RSI of a flat series (zero average gain and loss) is 50.
//! - Bollinger Bands use the sample standard deviation (n - 1 divisor).
//! - MACD is unavailable until `slow + signal` closes exist, so the signal
//!   line is never reported from a partially warmed-up window.

use crate::series::{PricePoint, PriceSeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// RSI lookback period
pub const RSI_PERIOD: usize = 14;
/// Fast simple moving average period
pub const SMA_FAST: usize = 50;
/// Slow simple moving average period
pub const SMA_SLOW: usize = 200;
/// MACD fast EMA period
pub const MACD_FAST: usize = 12;
/// MACD slow EMA period
pub const MACD_SLOW: usize = 26;
/// MACD signal EMA period
pub const MACD_SIGNAL: usize = 9;
/// Bollinger Band period
pub const BOLLINGER_PERIOD: usize = 20;
/// Bollinger Band width in standard deviations
pub const BOLLINGER_WIDTH: f64 = 2.0;
/// ATR lookback period
pub const ATR_PERIOD: usize = 14;

/// Why an indicator could not be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnavailableReason {
    /// Fewer sessions than the indicator's warm-up window
    InsufficientHistory {
        required: usize,
        available: usize,
    },
    /// A denominator collapsed to zero
    ZeroDenominator,
    /// The upstream input was not supplied
    MissingInput,
}

/// A single indicator value, or the reason it is missing
///
/// Callers must not treat a missing indicator as zero or neutral; the
/// distinction is part of the wire contract and survives serialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Indicator {
    Available {
        value: f64,
    },
    Unavailable {
        reason: UnavailableReason,
    },
}

impl Indicator {
    /// An indicator that was computed
    pub fn available(value: f64) -> Self {
        Self::Available { value }
    }

    /// Unavailable: the series is shorter than the warm-up window
    pub fn insufficient(required: usize, available: usize) -> Self {
        Self::Unavailable {
            reason: UnavailableReason::InsufficientHistory { required, available },
        }
    }

    /// Unavailable: a denominator was zero
    pub fn zero_denominator() -> Self {
        Self::Unavailable {
            reason: UnavailableReason::ZeroDenominator,
        }
    }

    /// Unavailable: the input was never supplied
    pub fn missing_input() -> Self {
        Self::Unavailable {
            reason: UnavailableReason::MissingInput,
        }
    }

    /// The value, if computed
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Available { value } => Some(*value),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

/// The most recent value of every supported indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rsi14: Indicator,
    pub sma50: Indicator,
    pub sma200: Indicator,
    pub macd: Indicator,
    pub macd_signal: Indicator,
    pub macd_histogram: Indicator,
    pub bb_upper: Indicator,
    pub bb_middle: Indicator,
    pub bb_lower: Indicator,
    pub atr14: Indicator,
}

impl IndicatorSet {
    /// Compute every indicator from a validated series
    pub fn compute(series: &PriceSeries) -> Self {
        let closes = series.closes();
        let (macd, macd_signal, macd_histogram) =
            macd(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL);
        let (bb_upper, bb_middle, bb_lower) =
            bollinger(&closes, BOLLINGER_PERIOD, BOLLINGER_WIDTH);

        let set = Self {
            rsi14: rsi(&closes, RSI_PERIOD),
            sma50: sma(&closes, SMA_FAST),
            sma200: sma(&closes, SMA_SLOW),
            macd,
            macd_signal,
            macd_histogram,
            bb_upper,
            bb_middle,
            bb_lower,
            atr14: atr(series.points(), ATR_PERIOD),
        };
        debug!(sessions = series.len(), "computed indicator set");
        set
    }
}

/// Simple moving average of the last `period` values
pub fn sma(closes: &[f64], period: usize) -> Indicator {
    if period == 0 || closes.len() < period {
        return Indicator::insufficient(period, closes.len());
    }
    let window = &closes[closes.len() - period..];
    Indicator::available(window.iter().sum::<f64>() / period as f64)
}

/// Exponential moving average series
///
/// Seeded with the simple average of the first `period` values; the returned
/// vector's first element corresponds to input index `period - 1`. Empty if
/// the input is shorter than `period`.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let k = 2.0 / (period as f64 + 1.0);
    let seed = values[..period].iter().sum::<f64>() / period as f64;

    let mut result = Vec::with_capacity(values.len() - period + 1);
    result.push(seed);
    for &v in &values[period..] {
        let prev = result[result.len() - 1];
        result.push(v * k + prev * (1.0 - k));
    }
    result
}

/// Wilder's relative strength index
///
/// Needs `period + 1` closes for the first value. A flat window (zero
/// average gain and loss) reports the neutral boundary 50.
pub fn rsi(closes: &[f64], period: usize) -> Indicator {
    if period == 0 || closes.len() < period + 1 {
        return Indicator::insufficient(period + 1, closes.len());
    }

    let changes: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    let mut avg_gain = changes[..period]
        .iter()
        .map(|&c| if c > 0.0 { c } else { 0.0 })
        .sum::<f64>()
        / period as f64;
    let mut avg_loss = changes[..period]
        .iter()
        .map(|&c| if c < 0.0 { -c } else { 0.0 })
        .sum::<f64>()
        / period as f64;

    // Wilder smoothing over the remaining changes.
    for &c in &changes[period..] {
        let gain = if c > 0.0 { c } else { 0.0 };
        let loss = if c < 0.0 { -c } else { 0.0 };
        avg_gain = (avg_gain * (period as f64 - 1.0) + gain) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + loss) / period as f64;
    }

    if avg_gain == 0.0 && avg_loss == 0.0 {
        return Indicator::available(50.0);
    }
    if avg_loss == 0.0 {
        return Indicator::available(100.0);
    }

    let rs = avg_gain / avg_loss;
    Indicator::available(100.0 - 100.0 / (1.0 + rs))
}

/// MACD line, signal line, and histogram
///
/// Line = EMA(fast) - EMA(slow) of closes; signal = EMA(signal) of the
/// line. All three are unavailable until `slow + signal` closes exist.
pub fn macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal: usize,
) -> (Indicator, Indicator, Indicator) {
    let required = slow + signal;
    if closes.len() < required {
        let missing = Indicator::insufficient(required, closes.len());
        return (missing, missing, missing);
    }

    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);

    // Both series end at the last close; align the fast one to the slow
    // one's start.
    let offset = slow - fast;
    let line: Vec<f64> = (0..slow_ema.len())
        .map(|i| fast_ema[i + offset] - slow_ema[i])
        .collect();

    let signal_ema = ema(&line, signal);

    let macd_value = line[line.len() - 1];
    let signal_value = signal_ema[signal_ema.len() - 1];

    (
        Indicator::available(macd_value),
        Indicator::available(signal_value),
        Indicator::available(macd_value - signal_value),
    )
}

/// Bollinger Bands: (upper, middle, lower)
///
/// Middle is the SMA over `period`; the bands sit `width` sample standard
/// deviations away. Sample (n - 1) deviation is a fixed policy here; the
/// population variant would narrow the bands by `sqrt((n-1)/n)`.
pub fn bollinger(closes: &[f64], period: usize, width: f64) -> (Indicator, Indicator, Indicator) {
    if period < 2 || closes.len() < period {
        let missing = Indicator::insufficient(period, closes.len());
        return (missing, missing, missing);
    }

    let window = &closes[closes.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance =
        window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (period as f64 - 1.0);
    let dev = variance.sqrt();

    (
        Indicator::available(mean + width * dev),
        Indicator::available(mean),
        Indicator::available(mean - width * dev),
    )
}

/// Wilder's average true range
///
/// True range = max(high - low, |high - prevClose|, |low - prevClose|),
/// so the first range needs a previous session: `period + 1` sessions in
/// total.
pub fn atr(points: &[PricePoint], period: usize) -> Indicator {
    if period == 0 || points.len() < period + 1 {
        return Indicator::insufficient(period + 1, points.len());
    }

    let ranges: Vec<f64> = points
        .windows(2)
        .map(|w| {
            let prev_close = w[0].close;
            let p = &w[1];
            (p.high - p.low)
                .max((p.high - prev_close).abs())
                .max((p.low - prev_close).abs())
        })
        .collect();

    let mut atr = ranges[..period].iter().sum::<f64>() / period as f64;
    for &tr in &ranges[period..] {
        atr = (atr * (period as f64 - 1.0) + tr) / period as f64;
    }

    Indicator::available(atr)
}
