//! The advisor engine

use crate::config::AdvisorConfig;
use crate::error::Result;
use crate::prompts;
use analyst_analysis::{AnalysisResult, analyze};
use analyst_data::{DataError, InstrumentProfile, MarketBundle, MarketDataProvider, resolve_isin};
use analyst_llm::{GenerationRequest, LLMProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

/// Which narrative was generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Actionable trading advisory with entry/exit levels
    Advisory,
    /// Long-form investment report
    Investment,
}

/// A generated narrative plus the data it was generated from
#[derive(Debug, Clone, Serialize)]
pub struct SecurityReport {
    pub kind: ReportKind,
    pub isin: String,
    pub symbol: String,
    /// Generated markdown document
    pub document: String,
    /// Provider that produced the document
    pub provider: String,
    pub model: String,
    pub profile: InstrumentProfile,
    pub analysis: AnalysisResult,
}

/// The computed analysis without any narrative, for offline inspection
#[derive(Debug, Clone, Serialize)]
pub struct SecuritySnapshot {
    pub isin: String,
    pub symbol: String,
    pub profile: InstrumentProfile,
    pub analysis: AnalysisResult,
}

/// Orchestrates resolve -> fetch -> analyze -> narrate
///
/// Both collaborators are injected as trait objects, constructed once by
/// the process entry point. The advisor holds no mutable state and can be
/// shared freely across tasks.
pub struct Advisor {
    market_data: Arc<dyn MarketDataProvider>,
    llm: Arc<dyn LLMProvider>,
    config: AdvisorConfig,
}

impl Advisor {
    pub fn new(
        market_data: Arc<dyn MarketDataProvider>,
        llm: Arc<dyn LLMProvider>,
        config: AdvisorConfig,
    ) -> Self {
        Self {
            market_data,
            llm,
            config,
        }
    }

    /// Generate an actionable trading advisory for an ISIN
    #[instrument(skip(self))]
    pub async fn advise(&self, isin: &str) -> Result<SecurityReport> {
        let (symbol, bundle) = self.resolve_and_fetch(isin).await?;
        let analysis = run_analysis(&bundle);

        let prompt = prompts::advisory_prompt(&bundle.profile, &analysis)?;
        let request = self.request(
            prompts::ADVISORY_SYSTEM_PROMPT,
            prompt,
            self.config.advisory_temperature,
            self.config.advisory_max_tokens,
        );
        let generation = self.llm.generate(&request).await?;

        info!(isin, symbol, provider = %generation.provider, "advisory generated");
        Ok(SecurityReport {
            kind: ReportKind::Advisory,
            isin: isin.to_string(),
            symbol,
            document: generation.text,
            provider: generation.provider,
            model: generation.model,
            profile: bundle.profile,
            analysis,
        })
    }

    /// Generate a long-form investment report for an ISIN
    #[instrument(skip(self))]
    pub async fn report(&self, isin: &str) -> Result<SecurityReport> {
        let (symbol, bundle) = self.resolve_and_fetch(isin).await?;
        let analysis = run_analysis(&bundle);

        let prompt = prompts::report_prompt(&bundle.profile, &analysis)?;
        let request = self.request(
            prompts::REPORT_SYSTEM_PROMPT,
            prompt,
            self.config.report_temperature,
            self.config.report_max_tokens,
        );
        let generation = self.llm.generate(&request).await?;

        info!(isin, symbol, provider = %generation.provider, "report generated");
        Ok(SecurityReport {
            kind: ReportKind::Investment,
            isin: isin.to_string(),
            symbol,
            document: generation.text,
            provider: generation.provider,
            model: generation.model,
            profile: bundle.profile,
            analysis,
        })
    }

    /// Compute the analysis without generating any narrative
    #[instrument(skip(self))]
    pub async fn snapshot(&self, isin: &str) -> Result<SecuritySnapshot> {
        let (symbol, bundle) = self.resolve_and_fetch(isin).await?;
        let analysis = run_analysis(&bundle);
        Ok(SecuritySnapshot {
            isin: isin.to_string(),
            symbol,
            profile: bundle.profile,
            analysis,
        })
    }

    async fn resolve_and_fetch(&self, isin: &str) -> Result<(String, MarketBundle)> {
        let symbol =
            resolve_isin(isin).ok_or_else(|| DataError::UnknownIsin(isin.to_string()))?;
        info!(isin, symbol, "resolved security");
        let bundle = self.market_data.fetch(symbol).await?;
        Ok((symbol.to_string(), bundle))
    }

    fn request(
        &self,
        system: &str,
        prompt: String,
        temperature: f32,
        max_tokens: usize,
    ) -> GenerationRequest {
        let mut builder = GenerationRequest::builder()
            .system(system)
            .prompt(prompt)
            .temperature(temperature)
            .max_tokens(max_tokens);
        if let Some(model) = &self.config.model_override {
            builder = builder.model(model.clone());
        }
        builder.build()
    }
}

fn run_analysis(bundle: &MarketBundle) -> AnalysisResult {
    analyze(
        &bundle.series,
        bundle.fundamentals.clone(),
        bundle.consensus.clone(),
    )
}
