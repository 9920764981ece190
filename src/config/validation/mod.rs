//! Configuration validation
//!
//! This module validates identity provider configuration before the gateway
//! starts serving traffic. Problems are reported as an ordered list of
//! messages; nothing here mutates configuration or fails early.
//!
//! The validation is organized into several submodules:
//! - `probe`: Read-only filesystem and environment access
//! - `trait_def`: Core Validate trait and validation context
//! - `registry`: Provider type tag to rule mapping
//! - `provider_validators`: Provider list and single provider validators
//! - `auth_validators`: Authentication method validators
//! - `provider_type_validators`: Google and Entra ID validators
//! - `tests`: Test suite for the validation pipeline

mod auth_validators;
mod probe;
mod provider_type_validators;
mod provider_validators;
mod registry;
mod trait_def;

pub use auth_validators::validate_authentication_config;
pub use probe::{Probe, StaticProbe, SystemProbe};
pub use provider_type_validators::{
    AZURE_FEDERATED_TOKEN_FILE, validate_entra_id_config, validate_google_config,
};
pub use provider_validators::{ProviderIds, validate_provider, validate_providers};
pub use registry::{ProviderRule, ProviderRules};
pub use trait_def::{Validate, ValidationContext};
