//! Main gateway configuration

use super::provider::ProviderConfig;
use serde::{Deserialize, Serialize};

/// Provider section of the gateway configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GatewayConfig {
    /// Identity providers, in the order they are offered to users
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
    /// Skip the provider chooser and go straight to the only provider
    #[serde(default)]
    pub skip_provider_button: bool,
}

impl GatewayConfig {
    /// Create a configuration from a list of providers
    pub fn with_providers(providers: Vec<ProviderConfig>) -> Self {
        Self {
            providers,
            ..Default::default()
        }
    }
}
