//! Integration tests for client construction.
//!
//! These tests verify parameter validation and base URL templating without
//! any network activity.

use microcms::{
    create_client, ApiKey, ConfigError, DraftKey, HostUrl, MicroCmsClient, MicroCmsConfig,
    ServiceDomain,
};

#[test]
fn test_create_client_with_required_parameters() {
    let client = create_client("my-service", "my-key", None).unwrap();

    assert_eq!(client.base_url(), "https://my-service.microcms.io/api/v1");
    assert_eq!(client.config().service_domain().as_ref(), "my-service");
    assert_eq!(client.config().api_key().as_ref(), "my-key");
    assert!(client.config().global_draft_key().is_none());
}

#[test]
fn test_create_client_with_global_draft_key() {
    let client = create_client("my-service", "my-key", Some("draft")).unwrap();

    assert_eq!(
        client
            .config()
            .global_draft_key()
            .map(|key| key.as_ref().to_string()),
        Some("draft".to_string())
    );
}

#[test]
fn test_create_client_rejects_missing_parameters() {
    assert!(matches!(
        create_client("", "my-key", None),
        Err(ConfigError::EmptyServiceDomain)
    ));
    assert!(matches!(
        create_client("my-service", "", None),
        Err(ConfigError::EmptyApiKey)
    ));
    assert!(matches!(
        create_client("  ", "my-key", None),
        Err(ConfigError::EmptyServiceDomain)
    ));
}

#[test]
fn test_builder_rejects_absent_parameters() {
    let missing_domain = MicroCmsConfig::builder()
        .api_key(ApiKey::new("my-key").unwrap())
        .build();
    assert!(matches!(
        missing_domain,
        Err(ConfigError::MissingRequiredField {
            field: "service_domain"
        })
    ));

    let missing_key = MicroCmsConfig::builder()
        .service_domain(ServiceDomain::new("my-service").unwrap())
        .build();
    assert!(matches!(
        missing_key,
        Err(ConfigError::MissingRequiredField { field: "api_key" })
    ));
}

#[test]
fn test_client_from_config_with_host_override() {
    let config = MicroCmsConfig::builder()
        .service_domain(ServiceDomain::new("my-service").unwrap())
        .api_key(ApiKey::new("my-key").unwrap())
        .global_draft_key(DraftKey::new("draft").unwrap())
        .api_host(HostUrl::new("https://cms-proxy.example.com").unwrap())
        .build()
        .unwrap();

    let client = MicroCmsClient::new(&config).unwrap();
    assert_eq!(client.base_url(), "https://cms-proxy.example.com/api/v1");
}

#[test]
fn test_independent_clients_do_not_share_configuration() {
    let first = create_client("service-one", "key-1", None).unwrap();
    let second = create_client("service-two", "key-2", Some("draft")).unwrap();

    assert_eq!(first.base_url(), "https://service-one.microcms.io/api/v1");
    assert_eq!(second.base_url(), "https://service-two.microcms.io/api/v1");
    assert!(first.config().global_draft_key().is_none());
    assert!(second.config().global_draft_key().is_some());
}

#[test]
fn test_client_debug_output_hides_keys() {
    let client = create_client("my-service", "super-secret", Some("draft-secret")).unwrap();
    let debug_str = format!("{client:?}");

    assert!(!debug_str.contains("super-secret"));
    assert!(!debug_str.contains("draft-secret"));
}
