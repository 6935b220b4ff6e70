//! Display formatting for prompts and terminal output
//!
//! Tagged indicators stay tagged all the way through the analysis; this is
//! the single place where they become human-readable strings. "n/a" here
//! is presentation, not a data value.

use analyst_analysis::Indicator;

/// Format an indicator with two decimals, or "n/a"
pub fn indicator(value: Indicator) -> String {
    match value.value() {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}

/// Format an indicator with four decimals (MACD-scale values)
pub fn indicator_fine(value: Indicator) -> String {
    match value.value() {
        Some(v) => format!("{v:.4}"),
        None => "n/a".to_string(),
    }
}

/// Format an optional ratio with two decimals, or "n/a"
pub fn ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}

/// Format a fractional value (0.25) as a percentage ("25.00%")
pub fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => "n/a".to_string(),
    }
}

/// Format a plain f64 with an explicit sign ("+3.21" / "-0.40")
pub fn signed(value: f64) -> String {
    format!("{value:+.2}")
}

/// Format a market cap with T/B/M suffixes
pub fn market_cap(value: Option<f64>) -> String {
    let Some(v) = value else {
        return "n/a".to_string();
    };
    if v >= 1e12 {
        format!("${:.2}T", v / 1e12)
    } else if v >= 1e9 {
        format!("${:.2}B", v / 1e9)
    } else if v >= 1e6 {
        format!("${:.2}M", v / 1e6)
    } else {
        format!("${v:.0}")
    }
}

/// RSI interpretation label
pub fn rsi_status(rsi: Indicator) -> &'static str {
    match rsi.value() {
        Some(v) if v > 70.0 => "OVERBOUGHT (>70)",
        Some(v) if v < 30.0 => "OVERSOLD (<30)",
        Some(_) => "NEUTRAL",
        None => "n/a",
    }
}

/// MACD interpretation label from the histogram sign
pub fn macd_status(histogram: Indicator) -> &'static str {
    match histogram.value() {
        Some(v) if v > 0.0 => "BULLISH",
        Some(_) => "BEARISH",
        None => "n/a",
    }
}

/// Where the price sits relative to the Bollinger Bands
pub fn bollinger_position(close: f64, upper: Indicator, lower: Indicator) -> &'static str {
    match (upper.value(), lower.value()) {
        (Some(upper), Some(lower)) => {
            if close > upper {
                "ABOVE upper band (overbought zone)"
            } else if close < lower {
                "BELOW lower band (oversold zone)"
            } else {
                "WITHIN bands (normal range)"
            }
        }
        _ => "n/a",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_formatting() {
        assert_eq!(indicator(Indicator::available(12.345)), "12.35");
        assert_eq!(indicator(Indicator::insufficient(15, 3)), "n/a");
        assert_eq!(indicator_fine(Indicator::available(0.12349)), "0.1235");
    }

    #[test]
    fn test_percent_and_ratio() {
        assert_eq!(percent(Some(0.2512)), "25.12%");
        assert_eq!(percent(None), "n/a");
        assert_eq!(ratio(Some(31.4159)), "31.42");
    }

    #[test]
    fn test_signed() {
        assert_eq!(signed(3.456), "+3.46");
        assert_eq!(signed(-0.4), "-0.40");
    }

    #[test]
    fn test_market_cap_suffixes() {
        assert_eq!(market_cap(Some(3.4e12)), "$3.40T");
        assert_eq!(market_cap(Some(2.5e9)), "$2.50B");
        assert_eq!(market_cap(Some(7.2e6)), "$7.20M");
        assert_eq!(market_cap(Some(950_000.0)), "$950000");
        assert_eq!(market_cap(None), "n/a");
    }

    #[test]
    fn test_rsi_status() {
        assert_eq!(rsi_status(Indicator::available(75.0)), "OVERBOUGHT (>70)");
        assert_eq!(rsi_status(Indicator::available(25.0)), "OVERSOLD (<30)");
        assert_eq!(rsi_status(Indicator::available(50.0)), "NEUTRAL");
        assert_eq!(rsi_status(Indicator::insufficient(15, 5)), "n/a");
    }

    #[test]
    fn test_macd_status() {
        assert_eq!(macd_status(Indicator::available(0.5)), "BULLISH");
        assert_eq!(macd_status(Indicator::available(-0.5)), "BEARISH");
        assert_eq!(macd_status(Indicator::missing_input()), "n/a");
    }

    #[test]
    fn test_bollinger_position() {
        let upper = Indicator::available(110.0);
        let lower = Indicator::available(90.0);
        assert_eq!(
            bollinger_position(115.0, upper, lower),
            "ABOVE upper band (overbought zone)"
        );
        assert_eq!(
            bollinger_position(85.0, upper, lower),
            "BELOW lower band (oversold zone)"
        );
        assert_eq!(
            bollinger_position(100.0, upper, lower),
            "WITHIN bands (normal range)"
        );
        assert_eq!(
            bollinger_position(100.0, Indicator::insufficient(20, 5), lower),
            "n/a"
        );
    }
}
