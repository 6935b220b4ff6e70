//! Trading advisory prompt

use crate::error::Result;
use crate::format;
use analyst_analysis::AnalysisResult;
use analyst_data::InstrumentProfile;
use minijinja::context;

/// System prompt for the trading advisor persona
pub const ADVISORY_SYSTEM_PROMPT: &str = r#"You are the Chief Investment Advisor at Kruse Capital, a quantitative hedge fund.

Your expertise combines:
- Deep technical analysis (RSI, MACD, Moving Averages, Support/Resistance)
- Fundamental valuation (P/E ratios, PEG, Debt levels)
- Risk management (Stop-loss placement, position sizing)
- Wall Street consensus interpretation

Your communication style:
- PRECISE: No vague statements like "could be interesting"
- RISK-AWARE: Always highlight downside scenarios
- ACTION-ORIENTED: Every analysis must end with a clear action
- HONEST: If data is insufficient or conflicting, say so

Critical Rules:
1. If RSI > 70, NEVER recommend immediate market buy - wait for pullback
2. If RSI < 30 and trend is down, warn about "falling knife" risk
3. Stop-loss must always be set 3-5% below recent support
4. If Wall Street consensus conflicts with technicals, explain the divergence
5. No position should be taken without a clear entry zone and exit plan
6. If a value shows as "n/a" the data was insufficient - acknowledge it, never invent a number

You must always provide specific numbers: entry prices, target prices, stop-losses."#;

const ADVISORY_USER_TEMPLATE: &str = r#"Analyze the following security and provide an actionable trading recommendation.

TICKER: {{ ticker }}
COMPANY: {{ name }}
SECTOR: {{ sector }}

=== CURRENT MARKET DATA ===
Current Price: {{ price }} {{ currency }}
1-Day Change: {{ change_1d }}%
5-Day Change: {{ change_5d }}%
1-Month Change: {{ change_1m }}%
Volume Ratio: {{ volume_ratio }}x (current vs 30-day avg)

=== TECHNICAL INDICATORS ===
RSI(14): {{ rsi }}
  Status: {{ rsi_status }}

Trend: {{ trend }}
SMA 50: {{ sma_50 }}
SMA 200: {{ sma_200 }}
Price vs SMA50: {{ price_vs_sma50 }}%
Price vs SMA200: {{ price_vs_sma200 }}%

MACD: {{ macd }}
MACD Signal: {{ macd_signal }}
MACD Histogram: {{ macd_histogram }}
MACD Status: {{ macd_status }}

Bollinger Bands:
- Upper: {{ bb_upper }}
- Middle: {{ bb_middle }}
- Lower: {{ bb_lower }}
- Position: {{ bb_position }}

ATR(14): {{ atr }}

=== SUPPORT & RESISTANCE (Critical Price Zones) ===
Support Level (90d low): {{ support_level }}
Resistance Level (90d high): {{ resistance_level }}
Pivot Point: {{ pivot_point }}
S1: {{ support_1 }}
R1: {{ resistance_1 }}

Distance to Support: {{ distance_to_support }}%
Distance to Resistance: {{ distance_to_resistance }}%

=== WALL STREET CONSENSUS ===
Analyst Recommendation: {{ recommendation }}
Number of Analysts: {{ analyst_count }}
Target Price (Mean): {{ target_mean }}
Target High: {{ target_high }}
Target Low: {{ target_low }}
Implied Upside: {{ upside }}%

=== FUNDAMENTAL VALUATION ===
Forward P/E: {{ forward_pe }}
Trailing P/E: {{ trailing_pe }}
PEG Ratio: {{ peg_ratio }}
Price/Book: {{ price_to_book }}
Debt/Equity: {{ debt_to_equity }}

Profitability:
- Profit Margin: {{ profit_margins }}
- Revenue Growth: {{ revenue_growth }}
- Earnings Growth: {{ earnings_growth }}

Market Cap: {{ market_cap }}
Beta: {{ beta }}

---

Generate a comprehensive trading advisory report in Markdown format with the following structure:

# Trading Advisory: {{ name }} ({{ ticker }})

## Executive Summary
Provide a 2-3 sentence summary of the current situation and your recommendation.

## Technical Analysis Assessment

### Momentum & Trend
Analyze RSI, MACD, and trend indicators. Is momentum bullish or bearish?

### Price Action
Discuss the current price relative to moving averages and support/resistance levels.

### Volume Analysis
Interpret the volume ratio and what it signals about conviction.

## Fundamental Perspective

### Valuation Analysis
Is the stock cheap, fair, or expensive based on P/E, PEG, and other metrics?

### Financial Health
Assess debt levels, profitability, and growth rates.

## Wall Street vs Technicals
Compare analyst consensus with what the charts are saying. Any divergence?

## Risk Factors
List 3-4 specific risks for this position right now.

---

## ADVISOR ACTION CARD

**RECOMMENDATION:** [BUY / HOLD / SELL / WATCHLIST]

**ENTRY ZONE:**
[X.XX] - [Y.YY]
_Rationale: [Why these specific prices]_

**PRICE TARGET (12M):**
[Z.ZZ]
_Basis: [Analyst consensus / Technical projection / Valuation model]_

**STOP-LOSS:**
[A.AA] (-X.X%)
_Logic: 3-5% below support at {{ support_level }}_

**POSITION SIZE GUIDANCE:**
[Small / Medium / Large] position (X-Y% of portfolio)

**KEY TRIGGERS:**
- Entry Signal: [Specific condition]
- Exit Signal: [Specific condition]

**TIMEFRAME:** [Days / Weeks / Months]

---

## Analyst Notes
Any additional context or nuance that doesn't fit above.

---

**Disclaimer:** This analysis is for informational purposes only. Markets are inherently risky.
"#;

/// Render the advisory user prompt from a finished analysis
pub fn advisory_prompt(profile: &InstrumentProfile, analysis: &AnalysisResult) -> Result<String> {
    let ind = &analysis.indicators;
    let close = analysis.last_close;

    let vs_sma = |sma: analyst_analysis::Indicator| match sma.value() {
        Some(v) => format::signed((close - v) / v * 100.0),
        None => "n/a".to_string(),
    };

    let ctx = context! {
        ticker => profile.symbol,
        name => profile.name.clone().unwrap_or_else(|| profile.symbol.clone()),
        sector => profile.sector.clone().unwrap_or_else(|| "n/a".to_string()),
        currency => profile.currency.clone().unwrap_or_else(|| "USD".to_string()),
        price => format!("{close:.2}"),
        change_1d => format::indicator(analysis.changes.change_1d),
        change_5d => format::indicator(analysis.changes.change_5d),
        change_1m => format::indicator(analysis.changes.change_1m),
        volume_ratio => format::indicator(analysis.volume_ratio),
        rsi => format::indicator(ind.rsi14),
        rsi_status => format::rsi_status(ind.rsi14),
        trend => analysis.regime.to_string(),
        sma_50 => format::indicator(ind.sma50),
        sma_200 => format::indicator(ind.sma200),
        price_vs_sma50 => vs_sma(ind.sma50),
        price_vs_sma200 => vs_sma(ind.sma200),
        macd => format::indicator_fine(ind.macd),
        macd_signal => format::indicator_fine(ind.macd_signal),
        macd_histogram => format::indicator_fine(ind.macd_histogram),
        macd_status => format::macd_status(ind.macd_histogram),
        bb_upper => format::indicator(ind.bb_upper),
        bb_middle => format::indicator(ind.bb_middle),
        bb_lower => format::indicator(ind.bb_lower),
        bb_position => format::bollinger_position(close, ind.bb_upper, ind.bb_lower),
        atr => format::indicator(ind.atr14),
        support_level => format!("{:.2}", analysis.zones.support_90d),
        resistance_level => format!("{:.2}", analysis.zones.resistance_90d),
        pivot_point => format!("{:.2}", analysis.zones.pivot),
        support_1 => format!("{:.2}", analysis.zones.support_1),
        resistance_1 => format!("{:.2}", analysis.zones.resistance_1),
        distance_to_support => format!("{:.2}", analysis.distance_to_support()),
        distance_to_resistance => format!("{:.2}", analysis.distance_to_resistance()),
        recommendation => analysis
            .consensus
            .recommendation_key
            .clone()
            .unwrap_or_else(|| "none".to_string())
            .to_uppercase(),
        analyst_count => analysis.consensus.analyst_count,
        target_mean => format::ratio(analysis.consensus.target_mean),
        target_high => format::ratio(analysis.consensus.target_high),
        target_low => format::ratio(analysis.consensus.target_low),
        upside => format::indicator(analysis.upside_potential),
        forward_pe => format::ratio(analysis.fundamentals.forward_pe),
        trailing_pe => format::ratio(analysis.fundamentals.trailing_pe),
        peg_ratio => format::ratio(analysis.fundamentals.peg_ratio),
        price_to_book => format::ratio(analysis.fundamentals.price_to_book),
        debt_to_equity => format::ratio(analysis.fundamentals.debt_to_equity),
        profit_margins => format::percent(analysis.fundamentals.profit_margins),
        revenue_growth => format::percent(analysis.fundamentals.revenue_growth),
        earnings_growth => format::percent(analysis.fundamentals.earnings_growth),
        market_cap => format::market_cap(analysis.fundamentals.market_cap),
        beta => format::ratio(analysis.fundamentals.beta),
    };

    super::render(ADVISORY_USER_TEMPLATE, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyst_analysis::{
        ConsensusSnapshot, FundamentalSnapshot, PricePoint, PriceSeries, analyze,
    };
    use chrono::{Days, NaiveDate};

    fn bundle() -> (InstrumentProfile, AnalysisResult) {
        let points: Vec<PricePoint> = (0..260)
            .map(|i| {
                let close = 100.0 + i as f64 * 0.4;
                PricePoint {
                    date: NaiveDate::from_ymd_opt(2024, 1, 2)
                        .unwrap()
                        .checked_add_days(Days::new(i))
                        .unwrap(),
                    open: close,
                    high: close + 1.0,
                    low: close - 1.0,
                    close,
                    volume: 2_000_000,
                }
            })
            .collect();
        let series = PriceSeries::new(points).unwrap();

        let fundamentals = FundamentalSnapshot {
            trailing_pe: Some(31.5),
            market_cap: Some(2.9e12),
            ..Default::default()
        };
        let consensus = ConsensusSnapshot {
            target_mean: Some(250.0),
            recommendation_key: Some("buy".to_string()),
            analyst_count: 40,
            ..Default::default()
        };
        let analysis = analyze(&series, fundamentals, consensus);

        let profile = InstrumentProfile {
            symbol: "NVDA".to_string(),
            name: Some("NVIDIA Corporation".to_string()),
            sector: Some("Technology".to_string()),
            industry: Some("Semiconductors".to_string()),
            currency: Some("USD".to_string()),
        };
        (profile, analysis)
    }

    #[test]
    fn test_advisory_prompt_renders_values() {
        let (profile, analysis) = bundle();
        let prompt = advisory_prompt(&profile, &analysis).unwrap();

        assert!(prompt.contains("TICKER: NVDA"));
        assert!(prompt.contains("NVIDIA Corporation"));
        assert!(prompt.contains("Trend: STRONG_UPTREND"));
        assert!(prompt.contains("Analyst Recommendation: BUY"));
        assert!(prompt.contains("Market Cap: $2.90T"));
        // No unresolved template placeholders survive rendering.
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_advisory_prompt_handles_missing_data() {
        let series = PriceSeries::new(
            (0..5)
                .map(|i| PricePoint {
                    date: NaiveDate::from_ymd_opt(2024, 1, 2)
                        .unwrap()
                        .checked_add_days(Days::new(i))
                        .unwrap(),
                    open: 100.0,
                    high: 101.0,
                    low: 99.0,
                    close: 100.0,
                    volume: 1_000,
                })
                .collect(),
        )
        .unwrap();
        let analysis = analyze(
            &series,
            FundamentalSnapshot::default(),
            ConsensusSnapshot::default(),
        );
        let profile = InstrumentProfile {
            symbol: "TEST".to_string(),
            name: None,
            sector: None,
            industry: None,
            currency: None,
        };

        let prompt = advisory_prompt(&profile, &analysis).unwrap();
        assert!(prompt.contains("RSI(14): n/a"));
        assert!(prompt.contains("COMPANY: TEST"));
        assert!(prompt.contains("Trend: NEUTRAL"));
    }
}
