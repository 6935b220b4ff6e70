//! Trend regime classification

use crate::indicators::Indicator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Market regime derived from the moving-average relationship
///
/// Serialized with the upstream wire labels (`STRONG_UPTREND`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Regime {
    StrongUptrend,
    Uptrend,
    StrongDowntrend,
    Downtrend,
    Neutral,
}

impl Regime {
    /// Classify the regime from the current close and both SMAs
    ///
    /// Total over its input space: any missing SMA (or equal SMAs) maps
    /// to [`Regime::Neutral`]; no combination panics or errors.
    pub fn classify(close: f64, sma50: Indicator, sma200: Indicator) -> Self {
        let (Some(sma50), Some(sma200)) = (sma50.value(), sma200.value()) else {
            return Self::Neutral;
        };

        if sma50 > sma200 {
            if close > sma50 {
                Self::StrongUptrend
            } else {
                Self::Uptrend
            }
        } else if sma50 < sma200 {
            if close < sma50 {
                Self::StrongDowntrend
            } else {
                Self::Downtrend
            }
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::StrongUptrend => "STRONG_UPTREND",
            Self::Uptrend => "UPTREND",
            Self::StrongDowntrend => "STRONG_DOWNTREND",
            Self::Downtrend => "DOWNTREND",
            Self::Neutral => "NEUTRAL",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avail(v: f64) -> Indicator {
        Indicator::available(v)
    }

    #[test]
    fn test_missing_sma_is_neutral() {
        let missing = Indicator::insufficient(200, 10);
        assert_eq!(Regime::classify(100.0, missing, avail(90.0)), Regime::Neutral);
        assert_eq!(Regime::classify(100.0, avail(90.0), missing), Regime::Neutral);
        assert_eq!(Regime::classify(100.0, missing, missing), Regime::Neutral);
    }

    #[test]
    fn test_uptrend_branches() {
        // SMA50 above SMA200: close above SMA50 makes it strong.
        assert_eq!(
            Regime::classify(110.0, avail(105.0), avail(100.0)),
            Regime::StrongUptrend
        );
        assert_eq!(
            Regime::classify(103.0, avail(105.0), avail(100.0)),
            Regime::Uptrend
        );
        // Close exactly on SMA50 is not "strong".
        assert_eq!(
            Regime::classify(105.0, avail(105.0), avail(100.0)),
            Regime::Uptrend
        );
    }

    #[test]
    fn test_downtrend_branches() {
        assert_eq!(
            Regime::classify(90.0, avail(95.0), avail(100.0)),
            Regime::StrongDowntrend
        );
        assert_eq!(
            Regime::classify(97.0, avail(95.0), avail(100.0)),
            Regime::Downtrend
        );
        assert_eq!(
            Regime::classify(95.0, avail(95.0), avail(100.0)),
            Regime::Downtrend
        );
    }

    #[test]
    fn test_equal_smas_is_neutral() {
        assert_eq!(
            Regime::classify(120.0, avail(100.0), avail(100.0)),
            Regime::Neutral
        );
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..10 {
            assert_eq!(
                Regime::classify(110.0, avail(105.0), avail(100.0)),
                Regime::StrongUptrend
            );
        }
    }

    #[test]
    fn test_wire_label() {
        assert_eq!(Regime::StrongUptrend.to_string(), "STRONG_UPTREND");
        assert_eq!(
            serde_json::to_value(Regime::StrongDowntrend).unwrap(),
            "STRONG_DOWNTREND"
        );
    }
}
