//! Generation request and response types

use serde::{Deserialize, Serialize};

/// Request for one generated document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// System instructions for the model
    pub system: String,

    /// The user prompt carrying the rendered analysis data
    pub prompt: String,

    /// Maximum tokens to generate
    pub max_tokens: usize,

    /// Sampling temperature (0.0-1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Provider-specific model override; each provider has its own default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// One generated document plus provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    /// Generated markdown text
    pub text: String,

    /// Name of the provider that produced it
    pub provider: String,

    /// Model that produced it
    pub model: String,
}

impl GenerationRequest {
    /// Create a builder for generation requests
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

/// Builder for [`GenerationRequest`]
#[derive(Debug, Default)]
pub struct GenerationRequestBuilder {
    system: String,
    prompt: String,
    max_tokens: Option<usize>,
    temperature: Option<f32>,
    model: Option<String>,
}

impl GenerationRequestBuilder {
    /// Set the system prompt
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    /// Set the user prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the maximum tokens (default 3000)
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Override the provider's default model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Build the request
    pub fn build(self) -> GenerationRequest {
        GenerationRequest {
            system: self.system,
            prompt: self.prompt,
            max_tokens: self.max_tokens.unwrap_or(3000),
            temperature: self.temperature,
            model: self.model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let request = GenerationRequest::builder()
            .system("You are an equity analyst")
            .prompt("Analyze AAPL")
            .max_tokens(2048)
            .temperature(0.5)
            .build();

        assert_eq!(request.system, "You are an equity analyst");
        assert_eq!(request.prompt, "Analyze AAPL");
        assert_eq!(request.max_tokens, 2048);
        assert_eq!(request.temperature, Some(0.5));
        assert!(request.model.is_none());
    }

    #[test]
    fn test_builder_defaults() {
        let request = GenerationRequest::builder().prompt("hi").build();
        assert_eq!(request.max_tokens, 3000);
        assert!(request.temperature.is_none());
    }
}
