//! LLM provider trait definition

use crate::{Generation, GenerationRequest, Result};
use async_trait::async_trait;

/// Trait for text-generation providers
///
/// Implementations of this trait provide access to different LLM services
/// (e.g., Anthropic, OpenAI, Gemini). The process entry point constructs
/// them once and passes them down as `Arc<dyn LLMProvider>`; nothing in
/// this workspace reaches for a hidden global instance.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Generate a document from the request
    async fn generate(&self, request: &GenerationRequest) -> Result<Generation>;

    /// Get the provider name (e.g., "anthropic", "openai")
    fn name(&self) -> &str;
}
