//! Yahoo Finance clients
//!
//! Price history goes through the `yahoo_finance_api` crate; fundamentals,
//! consensus, and the instrument profile come from the quote-summary web
//! endpoint via `reqwest` with browser-like headers (Yahoo throttles naked
//! clients aggressively).

use crate::error::{DataError, Result};
use crate::provider::InstrumentProfile;
use analyst_analysis::{ConsensusSnapshot, FundamentalSnapshot, PricePoint, PriceSeries};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde_json::Value;
use time::OffsetDateTime;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

const QUOTE_SUMMARY_BASE: &str =
    "https://query1.finance.yahoo.com/v10/finance/quoteSummary";
const QUOTE_SUMMARY_MODULES: &str =
    "price,assetProfile,summaryDetail,financialData,defaultKeyStatistics";

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Yahoo Finance client for history and quote-summary data
pub struct YahooClient {
    http: reqwest::Client,
}

impl YahooClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http })
    }

    /// Fetch roughly `days` calendar days of daily history as a validated series
    pub async fn daily_history(&self, symbol: &str, days: i64) -> Result<PriceSeries> {
        let end = Utc::now();
        let start = end - ChronoDuration::days(days);

        let provider = yahoo::YahooConnector::new()
            .map_err(|e| DataError::YahooFinance(e.to_string()))?;

        let start_odt = OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| DataError::YahooFinance(format!("Invalid start timestamp: {e}")))?;
        let end_odt = OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| DataError::YahooFinance(format!("Invalid end timestamp: {e}")))?;

        let response = provider
            .get_quote_history(symbol, start_odt, end_odt)
            .await
            .map_err(|e| DataError::YahooFinance(e.to_string()))?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::YahooFinance(e.to_string()))?;

        let mut points = Vec::with_capacity(quotes.len());
        for q in &quotes {
            // Halted or padded sessions come back with zeroed prices; they
            // would fail series validation, so drop them here.
            if q.close <= 0.0 || !q.close.is_finite() {
                warn!(symbol, timestamp = q.timestamp, "skipping malformed session");
                continue;
            }
            let Some(date) = DateTime::from_timestamp(q.timestamp as i64, 0) else {
                warn!(symbol, timestamp = q.timestamp, "skipping bad timestamp");
                continue;
            };
            points.push(PricePoint {
                date: date.date_naive(),
                open: q.open,
                high: q.high,
                low: q.low,
                close: q.close,
                volume: q.volume,
            });
        }

        debug!(symbol, sessions = points.len(), "fetched daily history");
        Ok(PriceSeries::new(points)?)
    }

    /// Fetch profile, fundamentals, and analyst consensus in one call
    pub async fn quote_summary(
        &self,
        symbol: &str,
    ) -> Result<(InstrumentProfile, FundamentalSnapshot, ConsensusSnapshot)> {
        let url = format!(
            "{QUOTE_SUMMARY_BASE}/{symbol}?modules={QUOTE_SUMMARY_MODULES}"
        );

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Referer", "https://finance.yahoo.com/")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DataError::YahooFinance(format!(
                "quote summary for {symbol} returned HTTP {}",
                response.status()
            )));
        }

        let payload: Value = response.json().await?;
        parse_quote_summary(symbol, &payload)
    }
}

/// Parse a quote-summary payload into the three snapshot records
///
/// Yahoo wraps most numbers as `{"raw": ..., "fmt": ...}`; absent modules
/// and absent fields degrade to `None`, never to an error; only a payload
/// with no result at all is rejected.
pub fn parse_quote_summary(
    symbol: &str,
    payload: &Value,
) -> Result<(InstrumentProfile, FundamentalSnapshot, ConsensusSnapshot)> {
    let result = payload["quoteSummary"]["result"]
        .get(0)
        .ok_or_else(|| DataError::MissingData {
            symbol: symbol.to_string(),
            reason: "empty quoteSummary result".to_string(),
        })?;

    let price = &result["price"];
    let profile_module = &result["assetProfile"];
    let summary = &result["summaryDetail"];
    let financial = &result["financialData"];
    let key_stats = &result["defaultKeyStatistics"];

    let profile = InstrumentProfile {
        symbol: symbol.to_string(),
        name: str_field(&price["longName"]).or_else(|| str_field(&price["shortName"])),
        sector: str_field(&profile_module["sector"]),
        industry: str_field(&profile_module["industry"]),
        currency: str_field(&price["currency"]),
    };

    let fundamentals = FundamentalSnapshot {
        forward_pe: raw_f64(&summary["forwardPE"]).or_else(|| raw_f64(&key_stats["forwardPE"])),
        trailing_pe: raw_f64(&summary["trailingPE"]),
        peg_ratio: raw_f64(&key_stats["pegRatio"]),
        price_to_book: raw_f64(&key_stats["priceToBook"]),
        debt_to_equity: raw_f64(&financial["debtToEquity"]),
        profit_margins: raw_f64(&financial["profitMargins"])
            .or_else(|| raw_f64(&key_stats["profitMargins"])),
        revenue_growth: raw_f64(&financial["revenueGrowth"]),
        earnings_growth: raw_f64(&financial["earningsGrowth"]),
        market_cap: raw_f64(&price["marketCap"]).or_else(|| raw_f64(&summary["marketCap"])),
        beta: raw_f64(&summary["beta"]),
    };

    let consensus = ConsensusSnapshot {
        target_low: raw_f64(&financial["targetLowPrice"]),
        target_mean: raw_f64(&financial["targetMeanPrice"]),
        target_high: raw_f64(&financial["targetHighPrice"]),
        recommendation_key: str_field(&financial["recommendationKey"]),
        analyst_count: raw_f64(&financial["numberOfAnalystOpinions"])
            .map(|n| n.max(0.0) as u32)
            .unwrap_or(0),
    };

    Ok((profile, fundamentals, consensus))
}

/// Extract a number from either a bare value or Yahoo's `{"raw": ...}` wrapper
fn raw_f64(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value["raw"].as_f64())
        .filter(|v| v.is_finite())
}

fn str_field(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string).filter(|s| !s.is_empty())
}
