//! Content API client.
//!
//! This module provides [`MicroCmsClient`], the entry point for reading
//! content, and [`create_client`] for building one from plain strings.

use serde::de::DeserializeOwned;

use crate::clients::cms::{GetListDetailRequest, GetListRequest, GetObjectRequest, GetRequest};
use crate::clients::{HttpClient, HttpError, HttpRequest};
use crate::config::{ApiKey, DraftKey, MicroCmsConfig, ServiceDomain};
use crate::content::{ListContent, ListResponse, ObjectContent};
use crate::error::ConfigError;

/// Client for the microCMS content API.
///
/// Provides four read operations: [`get`](Self::get),
/// [`get_list`](Self::get_list), [`get_list_detail`](Self::get_list_detail)
/// and [`get_object`](Self::get_object). Each call is a single GET with no
/// retries and no caching.
///
/// # Thread Safety
///
/// `MicroCmsClient` is `Send + Sync`; wrap it in an `Arc` to share it across
/// tasks. Concurrent calls do not interact.
///
/// # Example
///
/// ```rust,ignore
/// use microcms::{create_client, GetListRequest, ContentQueries, ListContent};
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// struct Blog {
///     title: String,
/// }
///
/// let client = create_client("my-blog", "my-api-key", None)?;
///
/// let blogs = client
///     .get_list::<ListContent<Blog>>(
///         GetListRequest::new("blogs").queries(ContentQueries::new().limit(5)),
///     )
///     .await?;
///
/// for blog in &blogs.contents {
///     println!("{}: {}", blog.id, blog.title);
/// }
/// ```
#[derive(Debug)]
pub struct MicroCmsClient {
    http_client: HttpClient,
    config: MicroCmsConfig,
}

// Verify MicroCmsClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MicroCmsClient>();
};

/// Creates a client from a service domain, an API key and an optional
/// global draft key.
///
/// # Errors
///
/// Returns [`ConfigError`] if the service domain, API key or draft key is
/// empty, or if the HTTP transport cannot be initialized.
///
/// # Example
///
/// ```rust
/// use microcms::{create_client, ConfigError};
///
/// let client = create_client("my-blog", "my-api-key", None).unwrap();
/// assert_eq!(client.base_url(), "https://my-blog.microcms.io/api/v1");
///
/// assert!(matches!(
///     create_client("", "my-api-key", None),
///     Err(ConfigError::EmptyServiceDomain)
/// ));
/// ```
pub fn create_client(
    service_domain: &str,
    api_key: &str,
    global_draft_key: Option<&str>,
) -> Result<MicroCmsClient, ConfigError> {
    let mut builder = MicroCmsConfig::builder()
        .service_domain(ServiceDomain::new(service_domain)?)
        .api_key(ApiKey::new(api_key)?);
    if let Some(key) = global_draft_key {
        builder = builder.global_draft_key(DraftKey::new(key)?);
    }
    MicroCmsClient::new(&builder.build()?)
}

impl MicroCmsClient {
    /// Creates a new client for the given configuration.
    ///
    /// No network activity happens here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the HTTP transport cannot be
    /// initialized.
    pub fn new(config: &MicroCmsConfig) -> Result<Self, ConfigError> {
        let http_client = HttpClient::new(config)?;

        tracing::debug!(
            "microCMS client created for {} (global draft key: {})",
            http_client.base_url(),
            if config.global_draft_key().is_some() {
                "configured"
            } else {
                "none"
            }
        );

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &MicroCmsConfig {
        &self.config
    }

    /// Returns the API base URL, e.g. `https://my-blog.microcms.io/api/v1`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// Reads any endpoint, optionally a single content, as `T`.
    ///
    /// The body is decoded as-is; use [`serde_json::Value`] for untyped access.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the endpoint is empty (nothing
    /// is sent), [`HttpError::Response`] for non-2xx statuses,
    /// [`HttpError::Network`] for transport failures and [`HttpError::Parse`]
    /// if the body does not decode into `T`.
    pub async fn get<T: DeserializeOwned>(&self, request: GetRequest) -> Result<T, HttpError> {
        let request = request.into_http_request()?;
        self.make_request(&request).await
    }

    /// Reads a page of a list endpoint.
    ///
    /// `T` is the item type; use [`ListContent<T>`] to include the system
    /// `id` and timestamps.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        request: GetListRequest,
    ) -> Result<ListResponse<T>, HttpError> {
        let request = request.into_http_request()?;
        self.make_request(&request).await
    }

    /// Reads a single content of a list endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the endpoint or the content id
    /// is empty. Otherwise same as [`get`](Self::get).
    pub async fn get_list_detail<T: DeserializeOwned>(
        &self,
        request: GetListDetailRequest,
    ) -> Result<ListContent<T>, HttpError> {
        let request = request.into_http_request()?;
        self.make_request(&request).await
    }

    /// Reads an object-type endpoint.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn get_object<T: DeserializeOwned>(
        &self,
        request: GetObjectRequest,
    ) -> Result<ObjectContent<T>, HttpError> {
        let request = request.into_http_request()?;
        self.make_request(&request).await
    }

    /// Sends the request and decodes the body.
    async fn make_request<R: DeserializeOwned>(
        &self,
        request: &HttpRequest,
    ) -> Result<R, HttpError> {
        let response = self.http_client.request(request).await?;
        response.json().map_err(HttpError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_builds_base_url() {
        let client = create_client("my-blog", "key", None).unwrap();
        assert_eq!(client.base_url(), "https://my-blog.microcms.io/api/v1");
        assert!(client.config().global_draft_key().is_none());
    }

    #[test]
    fn test_create_client_stores_draft_key() {
        let client = create_client("my-blog", "key", Some("draft")).unwrap();
        assert_eq!(
            client.config().global_draft_key().map(AsRef::as_ref),
            Some("draft")
        );
    }

    #[test]
    fn test_create_client_rejects_empty_service_domain() {
        assert!(matches!(
            create_client("", "key", None),
            Err(ConfigError::EmptyServiceDomain)
        ));
    }

    #[test]
    fn test_create_client_rejects_empty_api_key() {
        assert!(matches!(
            create_client("my-blog", "", None),
            Err(ConfigError::EmptyApiKey)
        ));
    }

    #[test]
    fn test_create_client_rejects_empty_draft_key() {
        assert!(matches!(
            create_client("my-blog", "key", Some("")),
            Err(ConfigError::EmptyDraftKey)
        ));
    }

    #[tokio::test]
    async fn test_empty_endpoint_rejected_before_network() {
        let client = create_client("my-blog", "key", None).unwrap();

        let result = client
            .get::<serde_json::Value>(GetRequest::new(""))
            .await;

        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(
                crate::clients::InvalidHttpRequestError::MissingEndpoint
            ))
        ));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MicroCmsClient>();
    }
}
