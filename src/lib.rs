//! # microCMS Rust SDK
//!
//! A Rust SDK for the microCMS content API: validated configuration, query
//! serialization, and typed reads of list and object endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`MicroCmsConfig`] and [`MicroCmsConfigBuilder`]
//! - Validated newtypes for the service domain, API key and draft key
//! - [`MicroCmsClient`] with `get`, `get_list`, `get_list_detail` and `get_object`
//! - Query building via [`Queries`] and the typed [`ContentQueries`]
//! - Response shapes that merge your content type with system metadata
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use microcms::{create_client, GetListRequest, GetObjectRequest, ContentQueries};
//! use microcms::{ListContent, ObjectContent};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Blog {
//!     title: String,
//! }
//!
//! #[derive(Debug, Deserialize)]
//! struct Settings {
//!     site_name: String,
//! }
//!
//! let client = create_client("my-blog", "my-api-key", None)?;
//!
//! let blogs = client
//!     .get_list::<ListContent<Blog>>(
//!         GetListRequest::new("blogs")
//!             .queries(ContentQueries::new().limit(10).orders("-publishedAt")),
//!     )
//!     .await?;
//! println!("{} of {} blogs", blogs.contents.len(), blogs.total_count);
//!
//! let settings = client
//!     .get_object::<Settings>(GetObjectRequest::new("settings"))
//!     .await?;
//! println!("Site: {}", settings.site_name);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use microcms::{MicroCmsConfig, MicroCmsClient, ServiceDomain, ApiKey, DraftKey};
//!
//! let config = MicroCmsConfig::builder()
//!     .service_domain(ServiceDomain::new("my-blog").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .global_draft_key(DraftKey::new("my-draft-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = MicroCmsClient::new(&config).unwrap();
//! assert_eq!(client.base_url(), "https://my-blog.microcms.io/api/v1");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction; empty
//!   endpoints are rejected before any request is sent
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Single request per call**: No retries, no caching, no hidden pagination

pub mod clients;
pub mod config;
pub mod content;
pub mod error;
pub mod query;

// Re-export public types at crate root for convenience
pub use config::{
    ApiKey, DraftKey, HostUrl, MicroCmsConfig, MicroCmsConfigBuilder, ServiceDomain, API_VERSION,
};
pub use content::{ContentDate, ListContent, ListResponse, ObjectContent};
pub use error::ConfigError;
pub use query::{ContentQueries, Queries, QueryValue, RichEditorFormat};

// Re-export client types
pub use clients::{
    create_client, GetListDetailRequest, GetListRequest, GetObjectRequest, GetRequest, HttpError,
    HttpResponseError, InvalidHttpRequestError, MicroCmsClient,
};
