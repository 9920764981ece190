//! Validation trait definition
//!
//! This module defines the core Validate trait and the context validators run in.

use super::probe::{Probe, SystemProbe};
use super::registry::ProviderRules;

/// Rules and host view shared by every validator in one pass
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    /// Per-type rules and required authentication methods
    pub rules: &'a ProviderRules,
    /// Filesystem and environment access
    pub probe: &'a dyn Probe,
}

impl<'a> ValidationContext<'a> {
    pub fn new(rules: &'a ProviderRules, probe: &'a dyn Probe) -> Self {
        Self { rules, probe }
    }
}

impl ValidationContext<'static> {
    /// Built-in rules against the real host
    pub fn system() -> Self {
        static PROBE: SystemProbe = SystemProbe;
        Self::new(ProviderRules::builtin_ref(), &PROBE)
    }
}

/// Validation trait for configuration structures
///
/// Problems are accumulated, never short-circuited. An empty list means the
/// configuration is acceptable.
pub trait Validate {
    fn validate_with(&self, ctx: ValidationContext<'_>) -> Vec<String>;

    fn validate(&self) -> Vec<String> {
        self.validate_with(ValidationContext::system())
    }
}
