//! Provider list validation integration tests
//!
//! Tests for list-level rules and the per-provider structural checks.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{ConfigFactory, ProviderFactory, validate_with_probe};
    use authgate_rs::config::models::ProviderConfig;
    use authgate_rs::StaticProbe;

    fn validate(providers: Vec<ProviderConfig>) -> Vec<String> {
        validate_with_probe(&ConfigFactory::with_providers(providers), &StaticProbe::new())
    }

    fn count(msgs: &[String], needle: &str) -> usize {
        msgs.iter().filter(|m| m.contains(needle)).count()
    }

    // ==================== List Rules ====================

    /// Test that an empty provider list is reported
    #[test]
    fn test_no_providers() {
        let msgs = validate(vec![]);
        assert_eq!(msgs, vec!["at least one provider has to be defined"]);
    }

    /// Test that skip-provider-button conflicts with several providers even when they are valid
    #[test]
    fn test_skip_button_conflict() {
        let config = ConfigFactory::skip_button(vec![
            ProviderFactory::oidc("a"),
            ProviderFactory::oidc("b"),
            ProviderFactory::oidc("c"),
        ]);

        let msgs = validate_with_probe(&config, &StaticProbe::new());
        assert_eq!(
            msgs,
            vec!["SkipProviderButton and multiple providers are mutually exclusive"]
        );
    }

    // ==================== Id Uniqueness ====================

    /// Test that k providers sharing an id yield k - 1 duplicate messages
    #[test]
    fn test_duplicate_run_counts() {
        for k in 1..=5 {
            let providers = (0..k).map(|_| ProviderFactory::oidc("same")).collect();
            let msgs = validate(providers);
            assert_eq!(count(&msgs, "multiple providers found with id same"), k - 1);
        }
    }

    /// Test that the first occurrence is never flagged
    #[test]
    fn test_first_occurrence_not_flagged() {
        let mut first = ProviderFactory::oidc("x");
        first.client_id = String::new();
        let second = ProviderFactory::oidc("x");

        let msgs = validate(vec![first, second]);
        assert_eq!(
            msgs,
            vec![
                "provider missing setting: client-id",
                "multiple providers found with id x: provider ids must be unique",
            ]
        );
    }

    /// Test that interleaved duplicates are all found
    #[test]
    fn test_interleaved_duplicates() {
        let msgs = validate(vec![
            ProviderFactory::oidc("a"),
            ProviderFactory::oidc("b"),
            ProviderFactory::oidc("a"),
            ProviderFactory::oidc("b"),
        ]);

        assert_eq!(count(&msgs, "with id a:"), 1);
        assert_eq!(count(&msgs, "with id b:"), 1);
    }

    // ==================== Required Fields ====================

    /// Test that empty id and client id are both reported, regardless of type
    #[test]
    fn test_empty_id_and_client_id() {
        for provider in [
            ProviderFactory::oidc(""),
            ProviderFactory::google(""),
            ProviderFactory::entra_federated(""),
        ] {
            let mut provider = provider;
            provider.client_id = String::new();
            provider.microsoft_entra_id_config.federated_token_auth = false;

            let msgs = validate(vec![provider]);
            assert_eq!(
                msgs,
                vec![
                    "provider has empty id: ids are required for all providers",
                    "provider missing setting: client-id",
                ]
            );
        }
    }

    /// Test that one bad provider does not stop the others from being checked
    #[test]
    fn test_all_providers_checked() {
        let mut broken = ProviderFactory::oidc("broken");
        broken.client_id = String::new();

        let msgs = validate(vec![
            broken.clone(),
            ProviderFactory::oidc("ok"),
            ProviderConfig {
                id: "broken-too".to_string(),
                ..broken
            },
        ]);
        assert_eq!(count(&msgs, "client-id"), 2);
    }
}
