//! Query parameters for content API requests.
//!
//! [`Queries`] is an insertion-ordered map from parameter name to
//! [`QueryValue`]. It serializes the way the microCMS API expects:
//!
//! - lists become one comma-separated value (`ids=a,b,c`)
//! - nested maps use bracket notation (`key[sub]=value`)
//! - an empty map produces an empty string, so no `?` is appended
//!
//! [`ContentQueries`] is a typed builder for the parameters the content API
//! documents, and converts into [`Queries`].
//!
//! # Example
//!
//! ```rust
//! use microcms::Queries;
//!
//! let queries = Queries::new()
//!     .with("a", 1)
//!     .with("b", vec![2, 3]);
//!
//! assert_eq!(queries.to_query_string(), "a=1&b=2,3");
//! ```

use std::fmt;

/// A single query parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    /// A text value.
    Text(String),
    /// An integer value.
    Integer(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean value, rendered as `true` / `false`.
    Bool(bool),
    /// A list, rendered comma-joined under a single key.
    List(Vec<QueryValue>),
    /// A nested map, rendered with bracket notation.
    Map(Queries),
}

impl QueryValue {
    /// Renders a scalar, or a list flattened with commas.
    ///
    /// Returns `None` for maps, which have no scalar form, and for empty lists.
    fn render_flat(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(urlencoding::encode(s).into_owned()),
            Self::Integer(n) => Some(n.to_string()),
            Self::Float(n) => Some(n.to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::List(items) => {
                let parts: Vec<String> = items.iter().filter_map(Self::render_flat).collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(","))
                }
            }
            Self::Map(_) => None,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<Queries> for QueryValue {
    fn from(value: Queries) -> Self {
        Self::Map(value)
    }
}

/// Insertion-ordered query parameters.
///
/// Inserting an existing key replaces its value in place, keeping the
/// original position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Queries {
    entries: Vec<(String, QueryValue)>,
}

impl Queries {
    /// Creates an empty set of query parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a parameter, replacing any existing value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|entry| entry.0 == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of top-level parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serializes the parameters into a URL query string without the leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        self.collect_pairs(None, &mut pairs);
        pairs.join("&")
    }

    fn collect_pairs(&self, prefix: Option<&str>, pairs: &mut Vec<String>) {
        for (key, value) in &self.entries {
            let encoded_key = urlencoding::encode(key);
            let full_key = match prefix {
                Some(prefix) => format!("{prefix}[{encoded_key}]"),
                None => encoded_key.into_owned(),
            };
            match value {
                QueryValue::Map(nested) => nested.collect_pairs(Some(&full_key), pairs),
                other => {
                    if let Some(rendered) = other.render_flat() {
                        pairs.push(format!("{full_key}={rendered}"));
                    }
                }
            }
        }
    }
}

impl fmt::Display for Queries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for Queries {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut queries = Self::new();
        for (key, value) in iter {
            queries.insert(key, value);
        }
        queries
    }
}

/// Output format for rich editor fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RichEditorFormat {
    /// Rendered HTML (the API default).
    Html,
    /// The editor's structured object form.
    Object,
}

impl RichEditorFormat {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Object => "object",
        }
    }
}

/// Typed builder for the documented content API query parameters.
///
/// # Example
///
/// ```rust
/// use microcms::{ContentQueries, Queries};
///
/// let queries: Queries = ContentQueries::new()
///     .limit(10)
///     .offset(20)
///     .orders("-publishedAt")
///     .fields(["id", "title"])
///     .into();
///
/// assert_eq!(
///     queries.to_query_string(),
///     "limit=10&offset=20&orders=-publishedAt&fields=id,title"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentQueries {
    draft_key: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
    orders: Option<String>,
    q: Option<String>,
    fields: Vec<String>,
    ids: Vec<String>,
    filters: Option<String>,
    depth: Option<u8>,
    rich_editor_format: Option<RichEditorFormat>,
}

impl ContentQueries {
    /// Creates an empty query set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft key for a single draft content (`draftKey`).
    #[must_use]
    pub fn draft_key(mut self, key: impl Into<String>) -> Self {
        self.draft_key = Some(key.into());
        self
    }

    /// Maximum number of contents in a list response.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of contents to skip in a list response.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sort order, e.g. `-publishedAt`.
    #[must_use]
    pub fn orders(mut self, orders: impl Into<String>) -> Self {
        self.orders = Some(orders.into());
        self
    }

    /// Full-text search keyword.
    #[must_use]
    pub fn q(mut self, keyword: impl Into<String>) -> Self {
        self.q = Some(keyword.into());
        self
    }

    /// Restricts the returned fields.
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts the list to the given content ids.
    #[must_use]
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Filter expression, e.g. `category[equals]news`.
    #[must_use]
    pub fn filters(mut self, filters: impl Into<String>) -> Self {
        self.filters = Some(filters.into());
        self
    }

    /// Depth of referenced content expansion (1 to 3).
    #[must_use]
    pub const fn depth(mut self, depth: u8) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Output format for rich editor fields.
    #[must_use]
    pub const fn rich_editor_format(mut self, format: RichEditorFormat) -> Self {
        self.rich_editor_format = Some(format);
        self
    }
}

impl From<ContentQueries> for Queries {
    fn from(value: ContentQueries) -> Self {
        let mut queries = Self::new();
        if let Some(draft_key) = value.draft_key {
            queries.insert("draftKey", draft_key);
        }
        if let Some(limit) = value.limit {
            queries.insert("limit", limit);
        }
        if let Some(offset) = value.offset {
            queries.insert("offset", offset);
        }
        if let Some(orders) = value.orders {
            queries.insert("orders", orders);
        }
        if let Some(q) = value.q {
            queries.insert("q", q);
        }
        if !value.fields.is_empty() {
            queries.insert("fields", value.fields);
        }
        if !value.ids.is_empty() {
            queries.insert("ids", value.ids);
        }
        if let Some(filters) = value.filters {
            queries.insert("filters", filters);
        }
        if let Some(depth) = value.depth {
            queries.insert("depth", u32::from(depth));
        }
        if let Some(format) = value.rich_editor_format {
            queries.insert("richEditorFormat", format.as_str());
        }
        queries
    }
}
