//! Provider type specific validators
//!
//! Each validator covers the extra settings of one provider type. They are
//! wired up by type tag in the rule registry.

use super::probe::Probe;
use crate::config::models::ProviderConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the workload identity federated token file
pub const AZURE_FEDERATED_TOKEN_FILE: &str = "AZURE_FEDERATED_TOKEN_FILE";

/// Validate Google group and credential settings
pub fn validate_google_config(provider: &ProviderConfig, probe: &dyn Probe) -> Vec<String> {
    let mut msgs = Vec::new();
    let google = &provider.google_config;

    // The block is optional as a whole
    if google.is_unset() {
        return msgs;
    }

    if google.groups.is_empty() {
        msgs.push("missing setting: google-group".to_string());
    }
    if google.admin_email.is_empty() {
        msgs.push("missing setting: google-admin-email".to_string());
    }

    let has_service_account_json = !google.service_account_json.is_empty();
    if !google.use_application_default_credentials {
        if !has_service_account_json {
            msgs.push(
                "missing setting: google-service-account-json or google-use-application-default-credentials"
                    .to_string(),
            );
        } else if !probe.path_exists(Path::new(&google.service_account_json)) {
            msgs.push(format!(
                "Google credentials file not found: {}",
                google.service_account_json
            ));
        }
    } else if has_service_account_json {
        msgs.push(
            "invalid setting: can't use both google-service-account-json and google-use-application-default-credentials"
                .to_string(),
        );
    }

    msgs
}

/// Validate Entra ID workload identity settings
pub fn validate_entra_id_config(provider: &ProviderConfig, probe: &dyn Probe) -> Vec<String> {
    let mut msgs = Vec::new();

    if !provider.microsoft_entra_id_config.federated_token_auth {
        return msgs;
    }

    let token_path = match probe.env_var(AZURE_FEDERATED_TOKEN_FILE) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => {
            msgs.push(format!(
                "entra federated token authentication is enabled, but {} variable is not set, check your workload identity configuration.",
                AZURE_FEDERATED_TOKEN_FILE
            ));
            return msgs;
        }
    };

    if let Err(e) = probe.read_file(&token_path) {
        debug!(
            "Failed to read federated token file {}: {}",
            token_path.display(),
            e
        );
        msgs.push("could not read entra federated token file".to_string());
    }

    msgs
}
