//! Identity provider configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generic OpenID Connect provider
pub const PROVIDER_TYPE_OIDC: &str = "oidc";
/// Google, with optional Workspace group lookups
pub const PROVIDER_TYPE_GOOGLE: &str = "google";
/// Microsoft Entra ID
pub const PROVIDER_TYPE_ENTRA_ID: &str = "entra-id";
/// login.gov
pub const PROVIDER_TYPE_LOGIN_GOV: &str = "login.gov";

/// One configured identity provider
///
/// The type tag is an open set: tags other than the `PROVIDER_TYPE_*`
/// constants are accepted and simply have no type-specific rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProviderConfig {
    /// Unique provider id
    #[serde(default)]
    pub id: String,
    /// Provider type tag (google, entra-id, login.gov, ...)
    #[serde(rename = "type", default)]
    pub provider_type: String,
    /// OAuth client id
    #[serde(default)]
    pub client_id: String,
    /// Client authentication settings
    #[serde(default)]
    pub authentication_config: AuthenticationConfig,
    /// Google specific settings
    #[serde(default)]
    pub google_config: GoogleConfig,
    /// Microsoft Entra ID specific settings
    #[serde(default)]
    pub microsoft_entra_id_config: MicrosoftEntraIdConfig,
}

impl ProviderConfig {
    /// Create a provider with the given id, type tag and client id
    pub fn new(
        id: impl Into<String>,
        provider_type: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            provider_type: provider_type.into(),
            client_id: client_id.into(),
            ..Default::default()
        }
    }
}

/// How the gateway authenticates itself to the provider's token endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AuthenticationConfig {
    /// Client authentication method
    #[serde(default)]
    pub method: AuthenticationMethod,
}

/// Client authentication method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthenticationMethod {
    /// Shared client secret
    #[default]
    ClientSecret,
    /// JWT signed with the client secret
    ClientSecretJwt,
    /// JWT signed with a private key
    PrivateKeyJwt,
    /// Public client, no authentication
    None,
}

impl fmt::Display for AuthenticationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ClientSecret => "client secret",
            Self::ClientSecretJwt => "client secret jwt",
            Self::PrivateKeyJwt => "private key jwt",
            Self::None => "no client authentication",
        };
        f.write_str(label)
    }
}

/// Google Workspace group and credential settings
///
/// The block as a whole is optional. Once any field is set the others
/// become required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleConfig {
    /// Groups a user must belong to
    #[serde(default)]
    pub groups: Vec<String>,
    /// Admin account impersonated for directory lookups
    #[serde(default)]
    pub admin_email: String,
    /// Path to a service account JSON key
    #[serde(default)]
    pub service_account_json: String,
    /// Resolve credentials from the platform instead of a key file
    #[serde(default)]
    pub use_application_default_credentials: bool,
}

impl GoogleConfig {
    /// Whether no setting in the block was touched
    pub fn is_unset(&self) -> bool {
        self.groups.is_empty()
            && self.admin_email.is_empty()
            && self.service_account_json.is_empty()
            && !self.use_application_default_credentials
    }
}

/// Microsoft Entra ID settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MicrosoftEntraIdConfig {
    /// Authenticate with a workload identity federated token
    #[serde(default)]
    pub federated_token_auth: bool,
}
