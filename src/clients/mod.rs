//! HTTP client types for microCMS API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`cms::MicroCmsClient`]: the content API client with the four read operations
//! - [`HttpClient`]: the transport layer every read goes through
//! - [`HttpRequest`]: a single GET against an endpoint
//! - [`HttpResponse`]: a raw response from the API
//! - [`HttpError`]: the error returned by every read operation
//!
//! # Example
//!
//! ```rust,ignore
//! use microcms::{create_client, GetRequest};
//!
//! let client = create_client("my-blog", "my-api-key", None)?;
//!
//! let post: serde_json::Value = client
//!     .get(GetRequest::new("blogs").content_id("my-first-post"))
//!     .await?;
//! ```

pub mod cms;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_KEY_HEADER, GLOBAL_DRAFT_KEY_HEADER, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use cms::{
    create_client, GetListDetailRequest, GetListRequest, GetObjectRequest, GetRequest,
    MicroCmsClient,
};
