//! Configuration management for the gateway
//!
//! This module handles loading identity provider configuration and validating
//! it before the gateway starts serving traffic.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::{Validate, ValidationContext};

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// The file is only parsed. Call [`Config::validate`] or
    /// [`Config::problems`] to check it.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.inspect_err(|e| {
            error!("Failed to read config file {}: {}", path.display(), e);
        })?;

        let config = Self::from_yaml_str(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let gateway: GatewayConfig = serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(Self { gateway })
    }

    /// Get providers configuration
    pub fn providers(&self) -> &[ProviderConfig] {
        &self.gateway.providers
    }

    /// All problems found by the built-in rules against the real host
    pub fn problems(&self) -> Vec<String> {
        self.problems_with(ValidationContext::system())
    }

    /// All problems found with custom rules or probe
    pub fn problems_with(&self, ctx: ValidationContext<'_>) -> Vec<String> {
        self.gateway.validate_with(ctx)
    }

    /// Validate the entire configuration
    ///
    /// Fails with [`GatewayError::Validation`] carrying every problem found.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(ValidationContext::system())
    }

    /// Validate with custom rules or probe
    pub fn validate_with(&self, ctx: ValidationContext<'_>) -> Result<()> {
        debug!("Validating configuration");

        let problems = self.problems_with(ctx);
        if problems.is_empty() {
            debug!("Configuration validation completed");
            return Ok(());
        }

        for problem in &problems {
            warn!("Invalid configuration: {}", problem);
        }
        Err(GatewayError::Validation(problems))
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.gateway)?)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.gateway)?)
    }
}
