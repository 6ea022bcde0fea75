//! HTTP-specific error types for the microCMS SDK.
//!
//! # Error Handling
//!
//! Every read operation returns [`HttpError`], which covers each way a call
//! can fail:
//!
//! - [`InvalidHttpRequestError`]: the request was rejected before sending
//! - [`HttpResponseError`]: the API answered with a non-2xx status
//! - [`HttpError::Network`]: the request never got a response
//! - [`HttpError::Parse`]: the body was not the expected JSON
//!
//! # Example
//!
//! ```rust,ignore
//! use microcms::clients::HttpError;
//!
//! match client.get::<serde_json::Value>(GetRequest::new("blogs")).await {
//!     Ok(body) => println!("{body}"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::Parse(e)) => println!("Unexpected body: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API responds with a non-successful status.
///
/// # Example
///
/// ```rust
/// use microcms::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Content is not found.".to_string(),
///     error_reference: None,
/// };
///
/// assert_eq!(
///     error.to_string(),
///     "fetch API response status: 404 (Content is not found.)"
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("fetch API response status: {code} ({message})")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The `message` field of the error body, or the status reason phrase.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The endpoint is empty.
    #[error("endpoint is required")]
    MissingEndpoint,

    /// A list detail request was made without a content id.
    #[error("contentId is required to get a single content of '{endpoint}'")]
    MissingContentId {
        /// The endpoint the request targeted.
        endpoint: String,
    },
}

/// Unified error type for all request failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed; nothing was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("serviceDomain or endpoint may be wrong.\n Details: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded into the requested type.
    #[error("Failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl HttpError {
    /// Returns the HTTP status code for [`HttpError::Response`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
