//! Ordered provider fallback
//!
//! Providers are tried in order; the first success wins. If every provider
//! fails, the last failure is surfaced so the caller can distinguish a
//! misconfiguration from an upstream outage.

use crate::providers::{AnthropicProvider, GeminiProvider, OpenAIProvider};
use crate::{Generation, GenerationRequest, LLMError, LLMProvider, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Tries an ordered list of providers, stopping at the first success
pub struct FallbackProvider {
    providers: Vec<Arc<dyn LLMProvider>>,
}

impl FallbackProvider {
    /// Create a fallback chain from an ordered provider list
    pub fn new(providers: Vec<Arc<dyn LLMProvider>>) -> Result<Self> {
        if providers.is_empty() {
            return Err(LLMError::ConfigurationError(
                "fallback chain needs at least one provider".to_string(),
            ));
        }
        Ok(Self { providers })
    }

    /// Assemble the chain from environment variables
    ///
    /// Order mirrors cost/latency preference: Gemini, then OpenAI, then
    /// Anthropic. A provider whose key is absent is skipped; at least one
    /// key must be set.
    pub fn from_env() -> Result<Self> {
        let mut providers: Vec<Arc<dyn LLMProvider>> = Vec::new();

        if std::env::var("GEMINI_API_KEY").is_ok() {
            providers.push(Arc::new(GeminiProvider::from_env()?));
            info!("Gemini provider initialized");
        }
        if std::env::var("OPENAI_API_KEY").is_ok() {
            providers.push(Arc::new(OpenAIProvider::from_env()?));
            info!("OpenAI provider initialized");
        }
        if std::env::var("ANTHROPIC_API_KEY").is_ok() {
            providers.push(Arc::new(AnthropicProvider::from_env()?));
            info!("Anthropic provider initialized");
        }

        if providers.is_empty() {
            return Err(LLMError::ConfigurationError(
                "no LLM providers configured; set at least one of \
                 GEMINI_API_KEY, OPENAI_API_KEY, ANTHROPIC_API_KEY"
                    .to_string(),
            ));
        }

        info!(count = providers.len(), "LLM fallback chain ready");
        Self::new(providers)
    }

    /// Names of the configured providers, in try order
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

#[async_trait]
impl LLMProvider for FallbackProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<Generation> {
        let mut last_error = None;

        for provider in &self.providers {
            info!(provider = provider.name(), "trying provider");
            match provider.generate(request).await {
                Ok(generation) => {
                    info!(provider = provider.name(), "provider succeeded");
                    return Ok(generation);
                }
                Err(e) => {
                    warn!(provider = provider.name(), error = %e, "provider failed");
                    last_error = Some(e);
                }
            }
        }

        // `new` guarantees at least one provider, so last_error is set.
        Err(LLMError::AllProvidersFailed {
            attempts: self.providers.len(),
            last: Box::new(last_error.unwrap_or(LLMError::ConfigurationError(
                "empty fallback chain".to_string(),
            ))),
        })
    }

    fn name(&self) -> &str {
        "fallback"
    }
}
