//! Market-data provider trait and the Yahoo-backed implementation

use crate::cache::DataCache;
use crate::error::Result;
use crate::yahoo::YahooClient;
use analyst_analysis::{ConsensusSnapshot, FundamentalSnapshot, PriceSeries};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::{debug, info};

/// Calendar days of history fetched per instrument
const DEFAULT_LOOKBACK_DAYS: i64 = 365;
/// Upstream request budget
const REQUESTS_PER_MINUTE: u32 = 30;
/// How long a fetched bundle stays fresh
const BUNDLE_TTL: Duration = Duration::from_secs(300);

/// Static descriptive data for one instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentProfile {
    pub symbol: String,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub currency: Option<String>,
}

/// Everything the advisor needs for one instrument
#[derive(Debug, Clone, Serialize)]
pub struct MarketBundle {
    pub profile: InstrumentProfile,
    pub series: PriceSeries,
    pub fundamentals: FundamentalSnapshot,
    pub consensus: ConsensusSnapshot,
}

/// Supplies market data for a ticker symbol
///
/// Constructed once by the process entry point and passed into the advisor
/// as an explicit dependency, which keeps the advisor unit-testable with
/// fabricated bundles.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the full bundle for a symbol
    async fn fetch(&self, symbol: &str) -> Result<MarketBundle>;
}

/// Yahoo Finance implementation with caching and rate limiting
pub struct YahooMarketData {
    client: YahooClient,
    bundle_cache: DataCache<MarketBundle>,
    limiter: DefaultDirectRateLimiter,
    lookback_days: i64,
}

impl YahooMarketData {
    pub fn new() -> Result<Self> {
        let quota = Quota::per_minute(
            NonZeroU32::new(REQUESTS_PER_MINUTE).unwrap_or(NonZeroU32::MIN),
        );
        Ok(Self {
            client: YahooClient::new()?,
            bundle_cache: DataCache::new(BUNDLE_TTL),
            limiter: RateLimiter::direct(quota),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        })
    }

    /// Override the history lookback window
    pub fn with_lookback_days(mut self, days: i64) -> Self {
        self.lookback_days = days;
        self
    }
}

#[async_trait]
impl MarketDataProvider for YahooMarketData {
    async fn fetch(&self, symbol: &str) -> Result<MarketBundle> {
        if let Some(bundle) = self.bundle_cache.get(symbol).await {
            debug!(symbol, "market bundle served from cache");
            return Ok(bundle);
        }

        // Two upstream calls per bundle; pace both.
        self.limiter.until_ready().await;
        let series = self.client.daily_history(symbol, self.lookback_days).await?;

        self.limiter.until_ready().await;
        let (profile, fundamentals, consensus) = self.client.quote_summary(symbol).await?;

        let bundle = MarketBundle {
            profile,
            series,
            fundamentals,
            consensus,
        };

        info!(
            symbol,
            sessions = bundle.series.len(),
            analysts = bundle.consensus.analyst_count,
            "market bundle fetched"
        );
        self.bundle_cache.insert(symbol, bundle.clone()).await;
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_serialization() {
        let profile = InstrumentProfile {
            symbol: "AAPL".to_string(),
            name: Some("Apple Inc.".to_string()),
            sector: Some("Technology".to_string()),
            industry: None,
            currency: Some("USD".to_string()),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["symbol"], "AAPL");
        assert_eq!(json["industry"], serde_json::Value::Null);
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_live() {
        let provider = YahooMarketData::new().unwrap();
        let bundle = provider.fetch("AAPL").await.unwrap();
        assert_eq!(bundle.profile.symbol, "AAPL");
        assert!(bundle.series.len() > 100);
    }
}
