//! Configuration types for the microCMS SDK.
//!
//! # Overview
//!
//! - [`MicroCmsConfig`]: immutable settings a client is built from
//! - [`MicroCmsConfigBuilder`]: builder for [`MicroCmsConfig`]
//! - [`ServiceDomain`], [`ApiKey`], [`DraftKey`], [`HostUrl`]: validated newtypes
//!
//! # Example
//!
//! ```rust
//! use microcms::{MicroCmsConfig, ServiceDomain, ApiKey, DraftKey};
//!
//! let config = MicroCmsConfig::builder()
//!     .service_domain(ServiceDomain::new("my-blog").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .global_draft_key(DraftKey::new("my-draft-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://my-blog.microcms.io/api/v1");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, DraftKey, HostUrl, ServiceDomain};

use crate::error::ConfigError;

/// Version segment of the content API path.
pub const API_VERSION: &str = "v1";

/// Configuration for a microCMS client.
///
/// Holds the service domain, the API key, and the optional global draft key.
/// A config is never mutated after [`MicroCmsConfigBuilder::build`].
///
/// # Thread Safety
///
/// `MicroCmsConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct MicroCmsConfig {
    service_domain: ServiceDomain,
    api_key: ApiKey,
    global_draft_key: Option<DraftKey>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl MicroCmsConfig {
    /// Creates a new builder for constructing a `MicroCmsConfig`.
    #[must_use]
    pub fn builder() -> MicroCmsConfigBuilder {
        MicroCmsConfigBuilder::new()
    }

    /// Returns the service domain.
    #[must_use]
    pub const fn service_domain(&self) -> &ServiceDomain {
        &self.service_domain
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the global draft key, if configured.
    #[must_use]
    pub const fn global_draft_key(&self) -> Option<&DraftKey> {
        self.global_draft_key.as_ref()
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the API base URL every request path is appended to.
    ///
    /// `https://{service_domain}.microcms.io/api/v1`, or
    /// `{api_host}/api/v1` when a host override is configured.
    #[must_use]
    pub fn base_url(&self) -> String {
        let origin = self.api_host.as_ref().map_or_else(
            || format!("https://{}", self.service_domain.host()),
            |host| host.base().to_string(),
        );
        format!("{origin}/api/{API_VERSION}")
    }
}

// Verify MicroCmsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MicroCmsConfig>();
};

/// Builder for constructing [`MicroCmsConfig`] instances.
///
/// `service_domain` and `api_key` are required; everything else is optional.
#[derive(Debug, Default)]
pub struct MicroCmsConfigBuilder {
    service_domain: Option<ServiceDomain>,
    api_key: Option<ApiKey>,
    global_draft_key: Option<DraftKey>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl MicroCmsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service domain (required).
    #[must_use]
    pub fn service_domain(mut self, domain: ServiceDomain) -> Self {
        self.service_domain = Some(domain);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the global draft key attached to every request by default.
    #[must_use]
    pub fn global_draft_key(mut self, key: DraftKey) -> Self {
        self.global_draft_key = Some(key);
        self
    }

    /// Overrides the `https://{service_domain}.microcms.io` origin.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`MicroCmsConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `service_domain` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<MicroCmsConfig, ConfigError> {
        let service_domain = self
            .service_domain
            .ok_or(ConfigError::MissingRequiredField {
                field: "service_domain",
            })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(MicroCmsConfig {
            service_domain,
            api_key,
            global_draft_key: self.global_draft_key,
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_builder() -> MicroCmsConfigBuilder {
        MicroCmsConfig::builder()
            .service_domain(ServiceDomain::new("my-blog").unwrap())
            .api_key(ApiKey::new("key").unwrap())
    }

    #[test]
    fn test_builder_requires_service_domain() {
        let result = MicroCmsConfigBuilder::new()
            .api_key(ApiKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "service_domain"
            })
        ));
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = MicroCmsConfigBuilder::new()
            .service_domain(ServiceDomain::new("my-blog").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = minimal_builder().build().unwrap();

        assert_eq!(config.service_domain().as_ref(), "my-blog");
        assert_eq!(config.api_key().as_ref(), "key");
        assert!(config.global_draft_key().is_none());
        assert!(config.api_host().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_base_url_uses_service_domain() {
        let config = minimal_builder().build().unwrap();
        assert_eq!(config.base_url(), "https://my-blog.microcms.io/api/v1");
    }

    #[test]
    fn test_base_url_uses_api_host_override() {
        let config = minimal_builder()
            .api_host(HostUrl::new("http://127.0.0.1:4010/").unwrap())
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:4010/api/v1");
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = minimal_builder()
            .global_draft_key(DraftKey::new("draft").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.global_draft_key().unwrap().as_ref(), "draft");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_debug_does_not_leak_keys() {
        let config = minimal_builder()
            .global_draft_key(DraftKey::new("draft-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("MicroCmsConfig"));
        assert!(!debug_str.contains("draft-secret"));
    }
}
