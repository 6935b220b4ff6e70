//! Market-data collaborator
//!
//! Everything the analysis core must not do lives here: ISIN resolution,
//! HTTP fetches against Yahoo Finance, anti-blocking headers, rate
//! limiting, and caching. The output is a [`MarketBundle`] (a validated
//! price series plus fundamental/consensus snapshots) handed to
//! `analyst_analysis::analyze` by the advisor layer.

pub mod cache;
pub mod error;
pub mod provider;
pub mod symbols;
pub mod yahoo;

pub use cache::DataCache;
pub use error::{DataError, Result};
pub use provider::{InstrumentProfile, MarketBundle, MarketDataProvider, YahooMarketData};
pub use symbols::{list_supported, resolve_isin};
