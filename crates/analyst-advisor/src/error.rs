//! Error types for advisory operations

use thiserror::Error;

/// Advisory pipeline errors
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Market-data collaborator failed
    #[error(transparent)]
    Data(#[from] analyst_data::DataError),

    /// Every narrative provider failed, or the chain was misconfigured
    #[error(transparent)]
    Llm(#[from] analyst_llm::LLMError),

    /// Prompt template failed to render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for advisory operations
pub type Result<T> = std::result::Result<T, AdvisorError>;
