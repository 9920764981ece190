//! Authentication method validators
//!
//! Runs for every provider. Whether a method is enforced depends on the
//! provider type: only types with a required method in the rule registry
//! are constrained.

use super::registry::ProviderRules;
use crate::config::models::ProviderConfig;

/// Check the provider's client authentication method against its type
pub fn validate_authentication_config(provider: &ProviderConfig, rules: &ProviderRules) -> Vec<String> {
    let mut msgs = Vec::new();

    if let Some(required) = rules.required_method(&provider.provider_type) {
        if provider.authentication_config.method != required {
            msgs.push(format!(
                "{} configuration not using {}",
                provider.provider_type, required
            ));
        }
    }

    msgs
}
