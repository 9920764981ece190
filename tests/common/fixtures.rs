//! Test fixtures and data factories
//!
//! Provides factory methods for creating provider configurations with
//! sensible defaults. All factories create real objects, not mocks.

use authgate_rs::config::models::{
    AuthenticationMethod, GatewayConfig, GoogleConfig, PROVIDER_TYPE_ENTRA_ID,
    PROVIDER_TYPE_GOOGLE, PROVIDER_TYPE_LOGIN_GOV, PROVIDER_TYPE_OIDC, ProviderConfig,
};
use authgate_rs::config::validation::{ProviderRules, StaticProbe, ValidationContext};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Factory for creating test providers
pub struct ProviderFactory;

impl ProviderFactory {
    /// Generic OIDC provider that passes validation
    pub fn oidc(id: &str) -> ProviderConfig {
        ProviderConfig::new(id, PROVIDER_TYPE_OIDC, format!("{}-client", id))
    }

    /// Google provider with an untouched google block
    pub fn google(id: &str) -> ProviderConfig {
        ProviderConfig::new(id, PROVIDER_TYPE_GOOGLE, format!("{}-client", id))
    }

    /// Google provider with groups and admin email, credentials left to the caller
    pub fn google_with_groups(id: &str) -> ProviderConfig {
        let mut provider = Self::google(id);
        provider.google_config = GoogleConfig {
            groups: vec!["engineering@example.com".to_string()],
            admin_email: "admin@example.com".to_string(),
            ..Default::default()
        };
        provider
    }

    /// Entra ID provider using workload identity
    pub fn entra_federated(id: &str) -> ProviderConfig {
        let mut provider =
            ProviderConfig::new(id, PROVIDER_TYPE_ENTRA_ID, format!("{}-client", id));
        provider.microsoft_entra_id_config.federated_token_auth = true;
        provider
    }

    /// login.gov provider with the given authentication method
    pub fn login_gov(id: &str, method: AuthenticationMethod) -> ProviderConfig {
        let mut provider =
            ProviderConfig::new(id, PROVIDER_TYPE_LOGIN_GOV, format!("{}-client", id));
        provider.authentication_config.method = method;
        provider
    }
}

/// Factory for creating gateway configurations
pub struct ConfigFactory;

impl ConfigFactory {
    pub fn with_providers(providers: Vec<ProviderConfig>) -> GatewayConfig {
        GatewayConfig::with_providers(providers)
    }

    pub fn skip_button(providers: Vec<ProviderConfig>) -> GatewayConfig {
        GatewayConfig {
            providers,
            skip_provider_button: true,
        }
    }
}

/// Temporary file standing in for a credential or token file
pub struct CredentialFile {
    file: NamedTempFile,
}

impl CredentialFile {
    pub fn new(contents: &str) -> Self {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        Self { file }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn path_string(&self) -> String {
        self.path().to_string_lossy().into_owned()
    }
}

/// Run the built-in rules against `config` with the given probe
pub fn validate_with_probe(config: &GatewayConfig, probe: &StaticProbe) -> Vec<String> {
    let rules = ProviderRules::builtin();
    authgate_rs::validate_providers(config, ValidationContext::new(&rules, probe))
}
