//! Technical analysis core
//!
//! This crate is the numeric heart of the advisor system. It takes a
//! validated daily OHLCV series and derives the signals that the narrative
//! layer feeds to an LLM:
//!
//! - Momentum and volatility indicators (RSI, SMA, MACD, Bollinger Bands, ATR)
//! - Support/resistance extremes and classic pivot levels
//! - A trend regime derived from the moving-average relationship
//! - Cross-cutting metrics (volume ratio, price changes, implied upside)
//!
//! Everything here is pure and synchronous: no I/O, no async, no shared
//! state. A series is validated once at construction and immutable
//! afterwards, so analyses for different instruments can run on parallel
//! tasks with zero coordination.
//!
//! Indicators that cannot be computed from the available history are
//! reported as [`Indicator::Unavailable`] with a reason, never as zero or a
//! string sentinel. Only structural problems with the series itself
//! (empty, unordered, non-finite) are hard errors, raised before any
//! computation starts.
//!
//! # Example
//!
//! ```rust,ignore
//! use analyst_analysis::{analyze, ConsensusSnapshot, FundamentalSnapshot, PriceSeries};
//!
//! let series = PriceSeries::new(points)?;
//! let result = analyze(&series, FundamentalSnapshot::default(), ConsensusSnapshot::default());
//! println!("{:?} close={}", result.regime, result.last_close);
//! ```

pub mod analyze;
pub mod error;
pub mod indicators;
pub mod regime;
pub mod series;
pub mod snapshot;
pub mod zones;

// Re-export main types for convenience
pub use analyze::{AnalysisResult, PriceChanges, analyze};
pub use error::{AnalysisError, Result};
pub use indicators::{Indicator, IndicatorSet, UnavailableReason};
pub use regime::Regime;
pub use series::{PricePoint, PriceSeries};
pub use snapshot::{ConsensusSnapshot, FundamentalSnapshot};
pub use zones::ZoneSet;
