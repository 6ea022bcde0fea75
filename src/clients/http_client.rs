//! HTTP client for microCMS API communication.
//!
//! This module provides the [`HttpClient`] type, the single place where a
//! request leaves the process and where failures are normalized into
//! [`HttpError`].

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::MicroCmsConfig;
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Header carrying the global draft key.
pub const GLOBAL_DRAFT_KEY_HEADER: &str = "X-GLOBAL-DRAFT-KEY";

/// HTTP client for making requests to the content API.
///
/// The client handles:
/// - Base URL construction from the service domain or `api_host`
/// - Default headers including User-Agent and the API key
/// - Attaching the global draft key unless a request opts out
/// - Normalizing transport and status failures into [`HttpError`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://my-blog.microcms.io/api/v1`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Global draft key, attached per request.
    global_draft_key: Option<String>,
}

// Keys stay out of debug output
impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("has_global_draft_key", &self.global_draft_key.is_some())
            .finish_non_exhaustive()
    }
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// No network activity happens here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the underlying transport
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &MicroCmsConfig) -> Result<Self, ConfigError> {
        let base_url = config.base_url();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}microCMS Rust SDK v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.api_key().as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClientInit {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url,
            default_headers,
            global_draft_key: config.global_draft_key().map(|k| k.as_ref().to_string()),
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full header set that would be sent for `request`.
    #[must_use]
    pub fn headers_for(&self, request: &HttpRequest) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        if request.use_global_draft_key {
            if let Some(key) = &self.global_draft_key {
                headers.insert(GLOBAL_DRAFT_KEY_HEADER.to_string(), key.clone());
            }
        }
        headers
    }

    /// Sends a GET request to the content API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The request cannot be delivered or the body cannot be read (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = request.url(&self.base_url);
        let headers = self.headers_for(request);

        tracing::debug!("Sending GET request to microCMS API at {}", url);

        let mut req_builder = self.client.get(&url);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::debug!(
            "microCMS API responded with status {} for {}",
            code,
            request.path()
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message: response.error_message(),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, DraftKey, ServiceDomain};

    fn create_test_config(draft_key: Option<&str>) -> MicroCmsConfig {
        let mut builder = MicroCmsConfig::builder()
            .service_domain(ServiceDomain::new("test-service").unwrap())
            .api_key(ApiKey::new("test-api-key").unwrap());
        if let Some(key) = draft_key {
            builder = builder.global_draft_key(DraftKey::new(key).unwrap());
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_client_construction_builds_base_url() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        assert_eq!(
            client.base_url(),
            "https://test-service.microcms.io/api/v1"
        );
    }

    #[test]
    fn test_api_key_header_injection() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        assert_eq!(
            client.default_headers().get(API_KEY_HEADER),
            Some(&"test-api-key".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("microCMS Rust SDK v"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = MicroCmsConfig::builder()
            .service_domain(ServiceDomain::new("test-service").unwrap())
            .api_key(ApiKey::new("test-api-key").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_draft_key_attached_by_default() {
        let client = HttpClient::new(&create_test_config(Some("draft"))).unwrap();
        let request = HttpRequest::builder("blogs").build().unwrap();

        let headers = client.headers_for(&request);
        assert_eq!(
            headers.get(GLOBAL_DRAFT_KEY_HEADER),
            Some(&"draft".to_string())
        );
    }

    #[test]
    fn test_draft_key_omitted_when_disabled_per_request() {
        let client = HttpClient::new(&create_test_config(Some("draft"))).unwrap();
        let request = HttpRequest::builder("blogs")
            .use_global_draft_key(false)
            .build()
            .unwrap();

        assert!(!client
            .headers_for(&request)
            .contains_key(GLOBAL_DRAFT_KEY_HEADER));
    }

    #[test]
    fn test_draft_key_omitted_when_not_configured() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        let request = HttpRequest::builder("blogs").build().unwrap();

        assert!(!client
            .headers_for(&request)
            .contains_key(GLOBAL_DRAFT_KEY_HEADER));
    }

    #[test]
    fn test_draft_key_not_in_default_headers() {
        let client = HttpClient::new(&create_test_config(Some("draft"))).unwrap();
        assert!(!client
            .default_headers()
            .contains_key(GLOBAL_DRAFT_KEY_HEADER));
    }

    #[test]
    fn test_debug_output_hides_keys() {
        let client = HttpClient::new(&create_test_config(Some("draft-secret"))).unwrap();
        let debug_str = format!("{client:?}");
        assert!(debug_str.contains("test-service.microcms.io"));
        assert!(!debug_str.contains("test-api-key"));
        assert!(!debug_str.contains("draft-secret"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
