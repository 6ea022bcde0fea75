//! HTTP request type for the microCMS SDK.
//!
//! An [`HttpRequest`] describes one GET against the content API: the
//! endpoint, an optional content id, optional query parameters, and whether
//! the configured global draft key is attached.

use crate::clients::errors::InvalidHttpRequestError;
use crate::query::Queries;

/// A GET request to be sent to the content API.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use microcms::clients::HttpRequest;
/// use microcms::Queries;
///
/// let request = HttpRequest::builder("blogs")
///     .content_id("my-first-post")
///     .queries(Queries::new().with("fields", vec!["id", "title"]))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path(), "blogs/my-first-post");
/// assert_eq!(request.query_string(), "fields=id,title");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The endpoint (API path segment) to read from.
    pub endpoint: String,
    /// The content id within a list endpoint, if any.
    pub content_id: Option<String>,
    /// Query parameters to append to the URL.
    pub queries: Option<Queries>,
    /// Whether to attach the configured global draft key (default: `true`).
    pub use_global_draft_key: bool,
}

impl HttpRequest {
    /// Creates a new builder for the given endpoint.
    #[must_use]
    pub fn builder(endpoint: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(endpoint)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingEndpoint`] if the endpoint is
    /// empty once surrounding slashes are removed.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.endpoint.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::MissingEndpoint);
        }
        Ok(())
    }

    /// Returns the request path relative to the API base URL.
    ///
    /// An empty content id is treated as absent.
    #[must_use]
    pub fn path(&self) -> String {
        let endpoint = self.endpoint.trim_matches('/');
        match self.content_id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => format!("{endpoint}/{id}"),
            None => endpoint.to_string(),
        }
    }

    /// Returns the serialized query string, empty when there are no queries.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.queries
            .as_ref()
            .map(Queries::to_query_string)
            .unwrap_or_default()
    }

    /// Builds the full URL for this request against `base_url`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        let query = self.query_string();
        if query.is_empty() {
            format!("{base_url}/{}", self.path())
        } else {
            format!("{base_url}/{}?{query}", self.path())
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    endpoint: String,
    content_id: Option<String>,
    queries: Option<Queries>,
    use_global_draft_key: bool,
}

impl HttpRequestBuilder {
    fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            content_id: None,
            queries: None,
            use_global_draft_key: true,
        }
    }

    /// Sets the content id.
    #[must_use]
    pub fn content_id(mut self, id: impl Into<String>) -> Self {
        self.content_id = Some(id.into());
        self
    }

    /// Sets the content id if one is given.
    #[must_use]
    pub fn maybe_content_id(mut self, id: Option<String>) -> Self {
        self.content_id = id;
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn queries(mut self, queries: impl Into<Queries>) -> Self {
        self.queries = Some(queries.into());
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(
        mut self,
        key: impl Into<String>,
        value: impl Into<crate::query::QueryValue>,
    ) -> Self {
        self.queries
            .get_or_insert_with(Queries::new)
            .insert(key, value);
        self
    }

    /// Sets whether the configured global draft key is attached.
    #[must_use]
    pub const fn use_global_draft_key(mut self, enabled: bool) -> Self {
        self.use_global_draft_key = enabled;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            endpoint: self.endpoint,
            content_id: self.content_id,
            queries: self.queries,
            use_global_draft_key: self.use_global_draft_key,
        };
        request.verify()?;
        Ok(request)
    }
}
