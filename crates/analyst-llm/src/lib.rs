//! Multi-provider text generation for narrative reports
//!
//! Defines the [`LLMProvider`] trait and implementations for Anthropic,
//! OpenAI, and Google Gemini, plus a [`FallbackProvider`] that tries an
//! ordered list of providers and stops at the first success.
//!
//! The providers here are deliberately narrow: one system prompt, one user
//! prompt, one generated document. Report generation needs nothing more,
//! and keeping the request shape small keeps every provider trivially
//! interchangeable behind the trait.

pub mod error;
pub mod fallback;
pub mod generation;
pub mod provider;
pub mod providers;

pub use error::{LLMError, Result};
pub use fallback::FallbackProvider;
pub use generation::{Generation, GenerationRequest, GenerationRequestBuilder};
pub use provider::LLMProvider;
pub use providers::{AnthropicProvider, GeminiProvider, OpenAIProvider};
