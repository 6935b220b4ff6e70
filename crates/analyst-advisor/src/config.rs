//! Configuration for advisory operations

use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the advisor pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Calendar days of price history to request
    pub lookback_days: i64,

    /// Sampling temperature for the trading advisory (factual, low)
    pub advisory_temperature: f32,

    /// Sampling temperature for the investment report (narrative, higher)
    pub report_temperature: f32,

    /// Token budget for the trading advisory
    pub advisory_max_tokens: usize,

    /// Token budget for the investment report
    pub report_max_tokens: usize,

    /// Optional model override applied to every provider
    pub model_override: Option<String>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            lookback_days: 365,
            advisory_temperature: 0.5,
            report_temperature: 0.7,
            advisory_max_tokens: 3000,
            report_max_tokens: 4000,
            model_override: None,
        }
    }
}

impl AdvisorConfig {
    /// Create a new configuration builder
    pub fn builder() -> AdvisorConfigBuilder {
        AdvisorConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.lookback_days < 1 {
            return Err(AdvisorError::Config(
                "lookback_days must be at least 1".to_string(),
            ));
        }
        for (name, t) in [
            ("advisory_temperature", self.advisory_temperature),
            ("report_temperature", self.report_temperature),
        ] {
            if !(0.0..=1.0).contains(&t) {
                return Err(AdvisorError::Config(format!(
                    "{name} must be within 0.0..=1.0, got {t}"
                )));
            }
        }
        if self.advisory_max_tokens == 0 || self.report_max_tokens == 0 {
            return Err(AdvisorError::Config(
                "token budgets must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`AdvisorConfig`]
#[derive(Debug, Default)]
pub struct AdvisorConfigBuilder {
    lookback_days: Option<i64>,
    advisory_temperature: Option<f32>,
    report_temperature: Option<f32>,
    advisory_max_tokens: Option<usize>,
    report_max_tokens: Option<usize>,
    model_override: Option<String>,
}

impl AdvisorConfigBuilder {
    /// Set the history lookback window in calendar days
    pub fn lookback_days(mut self, days: i64) -> Self {
        self.lookback_days = Some(days);
        self
    }

    /// Set the advisory sampling temperature
    pub fn advisory_temperature(mut self, temperature: f32) -> Self {
        self.advisory_temperature = Some(temperature);
        self
    }

    /// Set the report sampling temperature
    pub fn report_temperature(mut self, temperature: f32) -> Self {
        self.report_temperature = Some(temperature);
        self
    }

    /// Set the advisory token budget
    pub fn advisory_max_tokens(mut self, tokens: usize) -> Self {
        self.advisory_max_tokens = Some(tokens);
        self
    }

    /// Set the report token budget
    pub fn report_max_tokens(mut self, tokens: usize) -> Self {
        self.report_max_tokens = Some(tokens);
        self
    }

    /// Force a specific model on every provider
    pub fn model_override(mut self, model: impl Into<String>) -> Self {
        self.model_override = Some(model.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AdvisorConfig> {
        let defaults = AdvisorConfig::default();
        let config = AdvisorConfig {
            lookback_days: self.lookback_days.unwrap_or(defaults.lookback_days),
            advisory_temperature: self
                .advisory_temperature
                .unwrap_or(defaults.advisory_temperature),
            report_temperature: self
                .report_temperature
                .unwrap_or(defaults.report_temperature),
            advisory_max_tokens: self
                .advisory_max_tokens
                .unwrap_or(defaults.advisory_max_tokens),
            report_max_tokens: self
                .report_max_tokens
                .unwrap_or(defaults.report_max_tokens),
            model_override: self.model_override,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AdvisorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lookback_days, 365);
    }

    #[test]
    fn test_builder() {
        let config = AdvisorConfig::builder()
            .lookback_days(500)
            .advisory_temperature(0.2)
            .model_override("gpt-4o-mini")
            .build()
            .unwrap();

        assert_eq!(config.lookback_days, 500);
        assert_eq!(config.advisory_temperature, 0.2);
        assert_eq!(config.model_override.as_deref(), Some("gpt-4o-mini"));
    }

    #[test]
    fn test_invalid_temperature_rejected() {
        assert!(
            AdvisorConfig::builder()
                .advisory_temperature(1.5)
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_invalid_lookback_rejected() {
        assert!(AdvisorConfig::builder().lookback_days(0).build().is_err());
    }
}
