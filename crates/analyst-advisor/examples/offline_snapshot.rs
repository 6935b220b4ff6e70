//! Offline analysis demo
//!
//! Runs the full analysis core and prompt rendering against a fabricated
//! price series - no network, no API keys. Useful for inspecting what the
//! narrative generator would be asked.
//!
//! ```bash
//! cargo run -p analyst-advisor --example offline_snapshot
//! ```

use analyst_advisor::prompts;
use analyst_analysis::{ConsensusSnapshot, FundamentalSnapshot, PricePoint, PriceSeries, analyze};
use analyst_data::InstrumentProfile;
use chrono::{Days, NaiveDate};

fn main() -> anyhow::Result<()> {
    // A year of synthetic sessions: upward drift plus a slow oscillation.
    let start = NaiveDate::from_ymd_opt(2025, 1, 2).ok_or_else(|| anyhow::anyhow!("bad date"))?;
    let points: Vec<PricePoint> = (0..260)
        .map(|i| {
            let drift = 100.0 + i as f64 * 0.35;
            let wave = (i as f64 * 0.15).sin() * 4.0;
            let close = drift + wave;
            PricePoint {
                date: start + Days::new(i),
                open: close - 0.5,
                high: close + 2.0,
                low: close - 2.0,
                close,
                volume: 1_500_000 + (i % 7) * 90_000,
            }
        })
        .collect();
    let series = PriceSeries::new(points)?;

    let fundamentals = FundamentalSnapshot {
        forward_pe: Some(34.2),
        trailing_pe: Some(48.9),
        peg_ratio: Some(1.3),
        debt_to_equity: Some(22.5),
        profit_margins: Some(0.49),
        revenue_growth: Some(0.55),
        market_cap: Some(2.8e12),
        beta: Some(1.7),
        ..Default::default()
    };
    let consensus = ConsensusSnapshot {
        target_low: Some(140.0),
        target_mean: Some(210.0),
        target_high: Some(260.0),
        recommendation_key: Some("buy".to_string()),
        analyst_count: 42,
    };

    let result = analyze(&series, fundamentals, consensus);

    println!("=== Offline Analysis ===\n");
    println!("Sessions:       {}", result.sessions);
    println!("Last close:     {:.2}", result.last_close);
    println!("Regime:         {}", result.regime);
    println!("RSI(14):        {:?}", result.indicators.rsi14.value());
    println!("SMA50/SMA200:   {:?} / {:?}",
        result.indicators.sma50.value(),
        result.indicators.sma200.value());
    println!("Support (90d):  {:.2}", result.zones.support_90d);
    println!("Resistance:     {:.2}", result.zones.resistance_90d);
    println!("Pivot / S1 / R1: {:.2} / {:.2} / {:.2}",
        result.zones.pivot, result.zones.support_1, result.zones.resistance_1);
    println!("Upside:         {:?}%", result.upside_potential.value());

    let profile = InstrumentProfile {
        symbol: "DEMO".to_string(),
        name: Some("Demo Semiconductor Corp".to_string()),
        sector: Some("Technology".to_string()),
        industry: Some("Semiconductors".to_string()),
        currency: Some("USD".to_string()),
    };

    println!("\n=== Rendered Advisory Prompt ===\n");
    println!("{}", prompts::advisory_prompt(&profile, &result)?);

    Ok(())
}
