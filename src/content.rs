//! Response shapes returned by the content API.
//!
//! Content types are defined by the caller. The SDK merges them with the
//! metadata microCMS assigns to every content using `#[serde(flatten)]`:
//!
//! - [`ObjectContent<T>`]: `T` plus [`ContentDate`] (object-type endpoints)
//! - [`ListContent<T>`]: `T` plus `id` and [`ContentDate`] (list-type endpoints)
//! - [`ListResponse<T>`]: the paginated envelope of a list endpoint
//!
//! # Example
//!
//! ```rust
//! use microcms::{ListContent, ListResponse};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Blog {
//!     title: String,
//! }
//!
//! let body = r#"{
//!     "contents": [{
//!         "id": "abc",
//!         "title": "Hello",
//!         "createdAt": "2024-01-01T00:00:00.000Z",
//!         "updatedAt": "2024-01-02T00:00:00.000Z"
//!     }],
//!     "totalCount": 1,
//!     "offset": 0,
//!     "limit": 10
//! }"#;
//!
//! let list: ListResponse<ListContent<Blog>> = serde_json::from_str(body).unwrap();
//! assert_eq!(list.contents[0].id, "abc");
//! assert_eq!(list.contents[0].title, "Hello");
//! ```

use std::ops::{Deref, DerefMut};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamps microCMS assigns to every content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDate {
    /// When the content was created.
    pub created_at: DateTime<Utc>,
    /// When the content was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the content was first published. Absent for drafts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// When the content was last republished. Absent for drafts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised_at: Option<DateTime<Utc>>,
}

/// Content of an object-type endpoint: `T` merged with [`ContentDate`].
///
/// Dereferences to `T`, so caller fields are reachable directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectContent<T> {
    /// System timestamps.
    #[serde(flatten)]
    pub date: ContentDate,
    /// Caller-defined content fields.
    #[serde(flatten)]
    pub content: T,
}

impl<T> Deref for ObjectContent<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.content
    }
}

impl<T> DerefMut for ObjectContent<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.content
    }
}

/// Content of a list-type endpoint: `T` merged with `id` and [`ContentDate`].
///
/// Dereferences to `T`, so caller fields are reachable directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListContent<T> {
    /// Content id.
    pub id: String,
    /// System timestamps.
    #[serde(flatten)]
    pub date: ContentDate,
    /// Caller-defined content fields.
    #[serde(flatten)]
    pub content: T,
}

impl<T> Deref for ListContent<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.content
    }
}

impl<T> DerefMut for ListContent<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.content
    }
}

/// Paginated envelope returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    /// Contents of the requested page.
    pub contents: Vec<T>,
    /// Total number of contents matching the query.
    pub total_count: u64,
    /// Offset of the first returned content.
    pub offset: u64,
    /// Page size used for this response.
    pub limit: u64,
}
