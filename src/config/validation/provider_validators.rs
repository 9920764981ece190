//! Provider list and single provider validators
//!
//! The list validator folds the provider validator over every configured
//! provider, threading the set of ids seen so far through the fold.

use super::auth_validators::validate_authentication_config;
use super::trait_def::{Validate, ValidationContext};
use crate::config::models::{GatewayConfig, ProviderConfig};
use std::collections::HashSet;
use tracing::debug;

/// Provider ids seen so far in one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderIds(HashSet<String>);

impl ProviderIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Record `id`, returning the updated set
    #[must_use]
    pub fn with(mut self, id: &str) -> Self {
        self.0.insert(id.to_string());
        self
    }
}

/// Validate the provider list and every provider in it
pub fn validate_providers(config: &GatewayConfig, ctx: ValidationContext<'_>) -> Vec<String> {
    debug!("Validating {} provider(s)", config.providers.len());

    let mut msgs = Vec::new();

    if config.providers.is_empty() {
        msgs.push("at least one provider has to be defined".to_string());
    }
    if config.skip_provider_button && config.providers.len() > 1 {
        msgs.push("SkipProviderButton and multiple providers are mutually exclusive".to_string());
    }

    let (msgs, _) = config
        .providers
        .iter()
        .fold((msgs, ProviderIds::new()), |(mut msgs, ids), provider| {
            let (provider_msgs, ids) = validate_provider(provider, ids, ctx);
            msgs.extend(provider_msgs);
            (msgs, ids)
        });

    msgs
}

/// Validate one provider against the ids seen before it
///
/// The provider's id is always added to the returned set, so only the
/// second and later occurrences of an id are reported.
pub fn validate_provider(
    provider: &ProviderConfig,
    ids: ProviderIds,
    ctx: ValidationContext<'_>,
) -> (Vec<String>, ProviderIds) {
    debug!(
        "Validating provider configuration: {} ({})",
        provider.id, provider.provider_type
    );

    let mut msgs = Vec::new();

    if provider.id.is_empty() {
        msgs.push("provider has empty id: ids are required for all providers".to_string());
    }

    if ids.contains(&provider.id) {
        msgs.push(format!(
            "multiple providers found with id {}: provider ids must be unique",
            provider.id
        ));
    }
    let ids = ids.with(&provider.id);

    if provider.client_id.is_empty() {
        msgs.push("provider missing setting: client-id".to_string());
    }

    msgs.extend(validate_authentication_config(provider, ctx.rules));

    if !ctx.rules.is_registered(&provider.provider_type) {
        debug!(
            "No rules registered for provider type '{}', skipping type validation",
            provider.provider_type
        );
    }
    for rule in ctx.rules.rules_for(&provider.provider_type) {
        msgs.extend(rule(provider, ctx));
    }

    (msgs, ids)
}

impl Validate for GatewayConfig {
    fn validate_with(&self, ctx: ValidationContext<'_>) -> Vec<String> {
        validate_providers(self, ctx)
    }
}

impl Validate for ProviderConfig {
    /// Validate this provider on its own, without a list to check ids against
    fn validate_with(&self, ctx: ValidationContext<'_>) -> Vec<String> {
        validate_provider(self, ProviderIds::new(), ctx).0
    }
}
