//! Investment report prompt

use crate::error::Result;
use crate::format;
use analyst_analysis::AnalysisResult;
use analyst_data::InstrumentProfile;
use minijinja::context;

/// System prompt for the equity analyst persona
pub const REPORT_SYSTEM_PROMPT: &str = r#"You are a Senior Equity Analyst at a prestigious investment firm with 15+ years of experience in fundamental analysis and equity research.

Your role is to provide professional, critical, and data-driven investment analysis. Your tone must be:
- Professional and objective
- Analytical and evidence-based
- Critical where warranted (identify both opportunities and risks)
- Direct and concise
- Free from promotional language or unfounded optimism

You analyze companies through multiple lenses:
1. Fundamental valuation (P/E, P/B, margins, growth rates)
2. Financial health (balance sheet strength, debt levels)
3. Competitive positioning and industry dynamics
4. Risk factors and potential challenges
5. Price action and market sentiment

Your reports must be structured, well-reasoned, and useful for institutional investors making allocation decisions."#;

const REPORT_USER_TEMPLATE: &str = r#"Generate a comprehensive investment report for the following security:

**Ticker:** {{ ticker }}
**Company Name:** {{ name }}
**Sector:** {{ sector }}
**Industry:** {{ industry }}

## Market Data
- Current Price: {{ price }} {{ currency }}
- Market Cap: {{ market_cap }}
- P/E Ratio (Trailing): {{ trailing_pe }}
- Forward P/E: {{ forward_pe }}
- PEG Ratio: {{ peg_ratio }}
- Price/Book: {{ price_to_book }}
- Beta: {{ beta }}
- 1-Month Change: {{ change_1m }}%
- 90-Day Range: {{ support_level }} - {{ resistance_level }}

## Financial Metrics
- Profit Margins: {{ profit_margins }}
- Revenue Growth: {{ revenue_growth }}
- Earnings Growth: {{ earnings_growth }}
- Debt to Equity: {{ debt_to_equity }}

## Analyst Consensus
- Recommendation: {{ recommendation }} ({{ analyst_count }} analysts)
- Mean Target Price: {{ target_mean }}
- Implied Upside: {{ upside }}%

## Technical Context
- Trend: {{ trend }}
- RSI(14): {{ rsi }}

---

Please generate a professional investment report in **Markdown format** with the following structure:

# Investment Analysis: {{ name }} ({{ ticker }})

## Executive Summary
A concise 3-4 sentence overview covering: current valuation assessment, key investment thesis, and overall recommendation direction.

## Company Overview
Brief description of the business, sector positioning, and competitive landscape.

## Fundamental Analysis

### Valuation Metrics
Analysis of P/E ratio, market cap, and relative valuation compared to sector/peers.

### Profitability & Growth
Analysis of margins, revenue growth, and earnings trajectory.

## Investment Thesis

### Bull Case
3-5 key positive factors and growth catalysts. Be specific and data-driven.

### Bear Case
3-5 key risks, challenges, and potential headwinds. Be critical and realistic.

## Conclusion
Final assessment synthesizing the analysis. Include a directional view.

## Recommendation

End with a clear, actionable recommendation box:
- **Rating:** One of: STRONG BUY | BUY | HOLD | SELL | STRONG SELL
- **Action:** What should the investor do right now?
- **Target Price:** If possible, suggest a fair value or target price range
- **Risk Level:** LOW | MEDIUM | HIGH | VERY HIGH

---

**Important Instructions:**
- Use actual data from above; if data is "n/a", acknowledge the limitation
- Be critical and balanced; avoid promotional language
- Format all numbers clearly (use M for millions, B for billions)
- Keep the report to 600-800 words
- The final recommendation MUST be clear and decisive"#;

/// Render the investment-report user prompt from a finished analysis
pub fn report_prompt(profile: &InstrumentProfile, analysis: &AnalysisResult) -> Result<String> {
    let ctx = context! {
        ticker => profile.symbol,
        name => profile.name.clone().unwrap_or_else(|| profile.symbol.clone()),
        sector => profile.sector.clone().unwrap_or_else(|| "n/a".to_string()),
        industry => profile.industry.clone().unwrap_or_else(|| "n/a".to_string()),
        currency => profile.currency.clone().unwrap_or_else(|| "USD".to_string()),
        price => format!("{:.2}", analysis.last_close),
        market_cap => format::market_cap(analysis.fundamentals.market_cap),
        trailing_pe => format::ratio(analysis.fundamentals.trailing_pe),
        forward_pe => format::ratio(analysis.fundamentals.forward_pe),
        peg_ratio => format::ratio(analysis.fundamentals.peg_ratio),
        price_to_book => format::ratio(analysis.fundamentals.price_to_book),
        beta => format::ratio(analysis.fundamentals.beta),
        change_1m => format::indicator(analysis.changes.change_1m),
        support_level => format!("{:.2}", analysis.zones.support_90d),
        resistance_level => format!("{:.2}", analysis.zones.resistance_90d),
        profit_margins => format::percent(analysis.fundamentals.profit_margins),
        revenue_growth => format::percent(analysis.fundamentals.revenue_growth),
        earnings_growth => format::percent(analysis.fundamentals.earnings_growth),
        debt_to_equity => format::ratio(analysis.fundamentals.debt_to_equity),
        recommendation => analysis
            .consensus
            .recommendation_key
            .clone()
            .unwrap_or_else(|| "none".to_string())
            .to_uppercase(),
        analyst_count => analysis.consensus.analyst_count,
        target_mean => format::ratio(analysis.consensus.target_mean),
        upside => format::indicator(analysis.upside_potential),
        trend => analysis.regime.to_string(),
        rsi => format::indicator(analysis.indicators.rsi14),
    };

    super::render(REPORT_USER_TEMPLATE, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyst_analysis::{
        ConsensusSnapshot, FundamentalSnapshot, PricePoint, PriceSeries, analyze,
    };
    use chrono::{Days, NaiveDate};

    #[test]
    fn test_report_prompt_renders() {
        let series = PriceSeries::new(
            (0..60)
                .map(|i| {
                    let close = 200.0 + i as f64;
                    PricePoint {
                        date: NaiveDate::from_ymd_opt(2024, 1, 2)
                            .unwrap()
                            .checked_add_days(Days::new(i))
                            .unwrap(),
                        open: close,
                        high: close + 2.0,
                        low: close - 2.0,
                        close,
                        volume: 500_000,
                    }
                })
                .collect(),
        )
        .unwrap();
        let fundamentals = FundamentalSnapshot {
            trailing_pe: Some(28.0),
            profit_margins: Some(0.21),
            ..Default::default()
        };
        let analysis = analyze(&series, fundamentals, ConsensusSnapshot::default());
        let profile = InstrumentProfile {
            symbol: "MSFT".to_string(),
            name: Some("Microsoft Corporation".to_string()),
            sector: Some("Technology".to_string()),
            industry: Some("Software".to_string()),
            currency: Some("USD".to_string()),
        };

        let prompt = report_prompt(&profile, &analysis).unwrap();
        assert!(prompt.contains("**Ticker:** MSFT"));
        assert!(prompt.contains("P/E Ratio (Trailing): 28.00"));
        assert!(prompt.contains("Profit Margins: 21.00%"));
        assert!(prompt.contains("Mean Target Price: n/a"));
        assert!(!prompt.contains("{{"));
    }
}
