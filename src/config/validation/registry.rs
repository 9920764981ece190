//! Provider rule registry
//!
//! Maps a provider type tag to the rules that apply to it. The aggregator
//! never names a provider type; adding one means registering its rules here.

use super::provider_type_validators::{validate_entra_id_config, validate_google_config};
use super::trait_def::ValidationContext;
use crate::config::models::{
    AuthenticationMethod, PROVIDER_TYPE_ENTRA_ID, PROVIDER_TYPE_GOOGLE, PROVIDER_TYPE_LOGIN_GOV,
    ProviderConfig,
};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A single type-specific rule
pub type ProviderRule = fn(&ProviderConfig, ValidationContext<'_>) -> Vec<String>;

static BUILTIN: Lazy<ProviderRules> = Lazy::new(ProviderRules::builtin);

/// Registry of type-specific rules and required authentication methods
#[derive(Debug, Clone, Default)]
pub struct ProviderRules {
    type_rules: HashMap<String, Vec<ProviderRule>>,
    required_methods: HashMap<String, AuthenticationMethod>,
}

impl ProviderRules {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the rules for every provider type the gateway knows
    pub fn builtin() -> Self {
        let mut rules = Self::new();
        rules
            .register(PROVIDER_TYPE_GOOGLE, |provider, ctx| {
                validate_google_config(provider, ctx.probe)
            })
            .register(PROVIDER_TYPE_ENTRA_ID, |provider, ctx| {
                validate_entra_id_config(provider, ctx.probe)
            })
            .require_method(PROVIDER_TYPE_LOGIN_GOV, AuthenticationMethod::PrivateKeyJwt);
        rules
    }

    /// Shared instance of [`ProviderRules::builtin`]
    pub fn builtin_ref() -> &'static Self {
        &BUILTIN
    }

    /// Append a rule for `tag`
    pub fn register(&mut self, tag: impl Into<String>, rule: ProviderRule) -> &mut Self {
        self.type_rules.entry(tag.into()).or_default().push(rule);
        self
    }

    /// Require providers of type `tag` to authenticate with `method`
    ///
    /// A later call for the same tag replaces the earlier requirement.
    pub fn require_method(&mut self, tag: impl Into<String>, method: AuthenticationMethod) -> &mut Self {
        self.required_methods.insert(tag.into(), method);
        self
    }

    /// Rules registered for `tag`, in registration order
    pub fn rules_for(&self, tag: &str) -> &[ProviderRule] {
        self.type_rules.get(tag).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn required_method(&self, tag: &str) -> Option<AuthenticationMethod> {
        self.required_methods.get(tag).copied()
    }

    /// Whether anything at all is registered for `tag`
    pub fn is_registered(&self, tag: &str) -> bool {
        self.type_rules.contains_key(tag) || self.required_methods.contains_key(tag)
    }
}
