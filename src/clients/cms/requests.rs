//! Parameter types for the four content read operations.
//!
//! Each operation takes its own request type so only meaningful parameters
//! can be set: list and object requests have no content id, and a list
//! detail request cannot be built without one.

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::http_request::HttpRequest;
use crate::query::Queries;

/// Options shared by every read operation.
#[derive(Clone, Debug, Default, PartialEq)]
struct RequestOptions {
    queries: Option<Queries>,
    use_global_draft_key: Option<bool>,
}

impl RequestOptions {
    fn into_http_request(
        self,
        endpoint: String,
        content_id: Option<String>,
    ) -> Result<HttpRequest, InvalidHttpRequestError> {
        let mut builder = HttpRequest::builder(endpoint)
            .maybe_content_id(content_id)
            .use_global_draft_key(self.use_global_draft_key.unwrap_or(true));
        if let Some(queries) = self.queries {
            builder = builder.queries(queries);
        }
        builder.build()
    }
}

/// Parameters for [`MicroCmsClient::get`](super::MicroCmsClient::get).
///
/// # Example
///
/// ```rust
/// use microcms::{GetRequest, ContentQueries};
///
/// let request = GetRequest::new("blogs")
///     .content_id("my-first-post")
///     .queries(ContentQueries::new().fields(["title"]))
///     .use_global_draft_key(false);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GetRequest {
    endpoint: String,
    content_id: Option<String>,
    options: RequestOptions,
}

impl GetRequest {
    /// Creates a request for `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            content_id: None,
            options: RequestOptions::default(),
        }
    }

    /// Targets a single content within the endpoint.
    #[must_use]
    pub fn content_id(mut self, id: impl Into<String>) -> Self {
        self.content_id = Some(id.into());
        self
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn queries(mut self, queries: impl Into<Queries>) -> Self {
        self.options.queries = Some(queries.into());
        self
    }

    /// Overrides whether the global draft key is attached (default: attached).
    #[must_use]
    pub const fn use_global_draft_key(mut self, enabled: bool) -> Self {
        self.options.use_global_draft_key = Some(enabled);
        self
    }

    pub(crate) fn into_http_request(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.options
            .into_http_request(self.endpoint, self.content_id)
    }
}

/// Parameters for [`MicroCmsClient::get_list`](super::MicroCmsClient::get_list).
#[derive(Clone, Debug, PartialEq)]
pub struct GetListRequest {
    endpoint: String,
    options: RequestOptions,
}

impl GetListRequest {
    /// Creates a request for the list endpoint `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn queries(mut self, queries: impl Into<Queries>) -> Self {
        self.options.queries = Some(queries.into());
        self
    }

    /// Overrides whether the global draft key is attached (default: attached).
    #[must_use]
    pub const fn use_global_draft_key(mut self, enabled: bool) -> Self {
        self.options.use_global_draft_key = Some(enabled);
        self
    }

    pub(crate) fn into_http_request(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.options.into_http_request(self.endpoint, None)
    }
}

/// Parameters for [`MicroCmsClient::get_list_detail`](super::MicroCmsClient::get_list_detail).
///
/// The content id is required.
#[derive(Clone, Debug, PartialEq)]
pub struct GetListDetailRequest {
    endpoint: String,
    content_id: String,
    options: RequestOptions,
}

impl GetListDetailRequest {
    /// Creates a request for content `content_id` of list endpoint `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, content_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            content_id: content_id.into(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn queries(mut self, queries: impl Into<Queries>) -> Self {
        self.options.queries = Some(queries.into());
        self
    }

    /// Overrides whether the global draft key is attached (default: attached).
    #[must_use]
    pub const fn use_global_draft_key(mut self, enabled: bool) -> Self {
        self.options.use_global_draft_key = Some(enabled);
        self
    }

    pub(crate) fn into_http_request(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        if self.endpoint.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::MissingEndpoint);
        }
        if self.content_id.trim().is_empty() {
            return Err(InvalidHttpRequestError::MissingContentId {
                endpoint: self.endpoint,
            });
        }
        self.options
            .into_http_request(self.endpoint, Some(self.content_id))
    }
}

/// Parameters for [`MicroCmsClient::get_object`](super::MicroCmsClient::get_object).
#[derive(Clone, Debug, PartialEq)]
pub struct GetObjectRequest {
    endpoint: String,
    options: RequestOptions,
}

impl GetObjectRequest {
    /// Creates a request for the object endpoint `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn queries(mut self, queries: impl Into<Queries>) -> Self {
        self.options.queries = Some(queries.into());
        self
    }

    /// Overrides whether the global draft key is attached (default: attached).
    #[must_use]
    pub const fn use_global_draft_key(mut self, enabled: bool) -> Self {
        self.options.use_global_draft_key = Some(enabled);
        self
    }

    pub(crate) fn into_http_request(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.options.into_http_request(self.endpoint, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_request_carries_content_id_and_queries() {
        let request = GetRequest::new("blogs")
            .content_id("abc")
            .queries(Queries::new().with("depth", 2))
            .into_http_request()
            .unwrap();

        assert_eq!(request.path(), "blogs/abc");
        assert_eq!(request.query_string(), "depth=2");
        assert!(request.use_global_draft_key);
    }

    #[test]
    fn test_get_request_rejects_empty_endpoint() {
        assert_eq!(
            GetRequest::new("").into_http_request(),
            Err(InvalidHttpRequestError::MissingEndpoint)
        );
    }

    #[test]
    fn test_list_request_has_no_content_id() {
        let request = GetListRequest::new("blogs")
            .use_global_draft_key(false)
            .into_http_request()
            .unwrap();

        assert_eq!(request.path(), "blogs");
        assert!(request.content_id.is_none());
        assert!(!request.use_global_draft_key);
    }

    #[test]
    fn test_list_detail_requires_content_id() {
        assert_eq!(
            GetListDetailRequest::new("blogs", "").into_http_request(),
            Err(InvalidHttpRequestError::MissingContentId {
                endpoint: "blogs".to_string()
            })
        );
    }

    #[test]
    fn test_list_detail_checks_endpoint_first() {
        assert_eq!(
            GetListDetailRequest::new("", "").into_http_request(),
            Err(InvalidHttpRequestError::MissingEndpoint)
        );
    }

    #[test]
    fn test_list_detail_builds_path() {
        let request = GetListDetailRequest::new("blogs", "abc")
            .into_http_request()
            .unwrap();
        assert_eq!(request.path(), "blogs/abc");
    }

    #[test]
    fn test_object_request_path_is_endpoint() {
        let request = GetObjectRequest::new("settings")
            .queries(Queries::new())
            .into_http_request()
            .unwrap();
        assert_eq!(request.path(), "settings");
        assert_eq!(request.query_string(), "");
    }
}
