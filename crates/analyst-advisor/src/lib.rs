//! Advisory orchestration
//!
//! Wires the collaborators together: resolve an ISIN, fetch a market
//! bundle, run the pure analysis core, render the result into a prompt,
//! and ask the LLM fallback chain for a narrative document. Both
//! collaborators arrive as trait objects, so the whole flow is testable
//! with fabricated bundles and a stub provider.
//!
//! # Example
//!
//! ```rust,ignore
//! use analyst_advisor::{Advisor, AdvisorConfig};
//! use analyst_data::YahooMarketData;
//! use analyst_llm::FallbackProvider;
//! use std::sync::Arc;
//!
//! let config = AdvisorConfig::default();
//! let market_data = Arc::new(YahooMarketData::new()?);
//! let llm = Arc::new(FallbackProvider::from_env()?);
//! let advisor = Advisor::new(market_data, llm, config);
//!
//! let advisory = advisor.advise("US67066G1040").await?;
//! println!("{}", advisory.document);
//! ```

pub mod advisor;
pub mod config;
pub mod error;
pub mod format;
pub mod prompts;

pub use advisor::{Advisor, ReportKind, SecurityReport, SecuritySnapshot};
pub use config::{AdvisorConfig, AdvisorConfigBuilder};
pub use error::{AdvisorError, Result};
